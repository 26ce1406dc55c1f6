use std::rc::Rc;

use crate::coords::{Size, Transform};

use super::{DrawCmd, ImageCmd, ImageData, TextCmd};

/// A single recorded command plus its paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    /// Items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { order, cmd });
    }

    pub fn push_image(
        &mut self,
        transform: Transform,
        source: impl Into<String>,
        pixels: Option<Rc<ImageData>>,
    ) {
        self.push(DrawCmd::Image(ImageCmd {
            transform,
            source: source.into(),
            pixels,
        }));
    }

    pub fn push_text(
        &mut self,
        transform: Transform,
        text: impl Into<String>,
        font: Option<String>,
        size: f32,
        extent: Size,
    ) {
        self.push(DrawCmd::Text(TextCmd {
            transform,
            text: text.into(),
            font,
            size,
            extent,
        }));
    }
}
