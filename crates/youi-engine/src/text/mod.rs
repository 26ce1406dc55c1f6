//! Font metrics collaborator interface.
//!
//! Text-capable components only need glyph bounds and kerning to lay out a
//! run; rasterization and atlas generation stay in the renderer.

mod font_system;
mod metrics;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use metrics::{measure_text, FontMetrics, GlyphBounds};
