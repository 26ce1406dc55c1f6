use std::rc::Rc;

use crate::coords::{Size, Transform};

/// Decoded RGBA8 pixels, row-major, straight alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    /// Returns `None` when `rgba` does not hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * 4;
        (rgba.len() == expected).then_some(Self { width, height, rgba })
    }
}

/// Textured quad payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub transform: Transform,
    /// Where the pixels came from, for diagnostics.
    pub source: String,
    /// `None` until the image has been decoded (or when decoding failed).
    pub pixels: Option<Rc<ImageData>>,
}

/// Text run payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub transform: Transform,
    pub text: String,
    /// Font face name; `None` selects the backend's default face.
    pub font: Option<String>,
    pub size: f32,
    /// Measured extent in pixels, zero when no font metrics were available.
    pub extent: Size,
}

/// Renderer-agnostic draw command.
///
/// Extending the stream: add a payload struct here, a variant below, and a
/// push helper on [`DrawList`](super::DrawList).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Image(ImageCmd),
    Text(TextCmd),
}
