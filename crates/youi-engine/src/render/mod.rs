//! Render backend collaborator interface.
//!
//! The GPU backend lives outside this workspace; the component tree only
//! needs to clear the surface, hand over a frame's [`DrawList`], and present.

mod headless;

pub use headless::{FrameRecord, HeadlessBackend};

use crate::coords::ColorRgba;
use crate::scene::DrawList;

/// A surface that can draw a recorded frame.
pub trait RenderBackend {
    /// Starts a frame by clearing the surface.
    fn clear(&mut self, color: ColorRgba);

    /// Draws every command of `list` in paint order.
    fn submit(&mut self, list: &DrawList);

    /// Finishes the frame (swap buffers / present the surface).
    fn present(&mut self);
}

impl<B: RenderBackend + ?Sized> RenderBackend for Box<B> {
    fn clear(&mut self, color: ColorRgba) {
        (**self).clear(color)
    }

    fn submit(&mut self, list: &DrawList) {
        (**self).submit(list)
    }

    fn present(&mut self) {
        (**self).present()
    }
}
