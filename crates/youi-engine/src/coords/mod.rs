//! Coordinate and geometry types shared by the component tree and renderers.
//!
//! Two spaces are in play:
//! - absolute: device pixels, origin top-left, integer coordinates
//!   ([`PixelRect`], [`PixelSize`])
//! - relative: the unit square `[0,1]×[0,1]`, origin top-left ([`Bounds`])
//!
//! Renderers convert relative bounds to clip space with [`Transform`].

mod bounds;
mod color;
mod pixel;
mod transform;

pub use bounds::{Bounds, Position, Size};
pub use color::ColorRgba;
pub use pixel::{PixelPoint, PixelRect, PixelSize};
pub use transform::Transform;
