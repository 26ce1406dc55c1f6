//! Components every YUML document can use.

mod canvas;
mod image;
mod label;
mod page;

pub use canvas::Canvas;
pub use image::Image;
pub use label::Label;
pub use page::Page;

use crate::registry::Registry;

/// Namespace URI of the built-in components.
pub const NAMESPACE: &str = "https://yuml.example/schema/components/1.0";

/// Register `Page`, `Canvas`, `Image` and `Label` under [`NAMESPACE`].
pub fn register_builtins(registry: &mut Registry) {
    registry.register(NAMESPACE, "Page", page::make_page);
    registry.register(NAMESPACE, "Canvas", canvas::make_canvas);
    registry.register(NAMESPACE, "Image", image::make_image);
    registry.register(NAMESPACE, "Label", label::make_label);
}
