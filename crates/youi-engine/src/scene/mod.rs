//! Draw stream types.
//!
//! Components record renderer-agnostic commands into a [`DrawList`] while the
//! tree is traversed; the render backend consumes the list once per frame.
//! Paint order is insertion order (back-to-front).

mod cmd;
mod list;

pub use cmd::{DrawCmd, ImageCmd, ImageData, TextCmd};
pub use list::{DrawItem, DrawList};
