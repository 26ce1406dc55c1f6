use std::any::Any;
use std::fmt;

use youi_engine::coords::{Bounds, Size};
use youi_engine::scene::DrawList;
use youi_engine::text::FontMetrics;
use youi_yuml::AttributeList;

// ── Downcasting ───────────────────────────────────────────────────────────

/// Gives `dyn Component` access to `Any` for typed lookups.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── Draw context ──────────────────────────────────────────────────────────

/// Handed to [`Component::draw`] for one node in one frame.
pub struct DrawCtx<'a> {
    /// The node's bounds: absolute pixels for the root, unit-square otherwise.
    pub bounds: Bounds,
    /// True when the node's own state or bounds changed since its last draw.
    pub dirty: bool,
    /// Pixel size of the tree's root.
    pub root_size: Size,
    pub list: &'a mut DrawList,
    pub fonts: Option<&'a dyn FontMetrics>,
}

// ── Capabilities ──────────────────────────────────────────────────────────

/// A live node of the component tree.
///
/// Every capability besides `tag` has a default, so a plain leaf only needs
/// to name itself. Containers opt in through [`is_container`](Self::is_container)
/// and position their children through [`layout`](Self::layout).
pub trait Component: AsAny + fmt::Debug {
    /// Tag name this component is written as in YUML.
    fn tag(&self) -> &str;

    /// Current state as YUML attributes, used when serializing a tree.
    fn attributes(&self) -> AttributeList {
        AttributeList::new()
    }

    fn is_container(&self) -> bool {
        false
    }

    /// Emit draw commands. Called for dirty nodes, and for every node when
    /// the tree redraws in full.
    fn draw(&mut self, _ctx: &mut DrawCtx<'_>) {}

    fn layout(&self) -> Option<&dyn Layout> {
        None
    }

    fn text_holder(&self) -> Option<&dyn TextHolder> {
        None
    }

    fn text_holder_mut(&mut self) -> Option<&mut dyn TextHolder> {
        None
    }
}

/// Positions the direct children of a container.
pub trait Layout {
    /// Bounds handed to every direct child, given the container's own bounds
    /// and the pixel size of the tree's root.
    fn child_bounds(&self, own: Bounds, root_size: Size) -> Bounds;
}

/// Components that display a run of text.
pub trait TextHolder {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
    fn font_face(&self) -> Option<&str>;
    fn set_font_face(&mut self, face: Option<String>);
    fn font_size(&self) -> f32;
    fn set_font_size(&mut self, size: f32);
}
