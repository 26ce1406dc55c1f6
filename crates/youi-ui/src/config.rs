use youi_engine::coords::{ColorRgba, PixelSize};

/// How [`Tree::draw`](crate::tree::Tree::draw) walks the tree.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RedrawPolicy {
    /// Visit every node; suited to backends that clear the surface each frame.
    #[default]
    Full,
    /// Visit only nodes that are dirty or have dirty descendants.
    DirtyOnly,
}

/// Startup options for a [`Form`](crate::form::Form).
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Initial root size in pixels.
    pub size: PixelSize,
    pub redraw: RedrawPolicy,
    pub clear_color: ColorRgba,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            size: PixelSize::new(1280, 720),
            redraw: RedrawPolicy::Full,
            clear_color: ColorRgba::black(),
        }
    }
}

impl FormConfig {
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.size = PixelSize::new(width, height);
        self
    }

    pub fn redraw(mut self, policy: RedrawPolicy) -> Self {
        self.redraw = policy;
        self
    }

    pub fn clear_color(mut self, color: ColorRgba) -> Self {
        self.clear_color = color;
        self
    }
}
