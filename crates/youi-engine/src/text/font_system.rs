use crate::coords::Bounds;

use super::{FontMetrics, GlyphBounds};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of named fonts and answers metrics queries over them.
///
/// The first font loaded is the default face.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<(String, fontdue::Font)>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Loading under an existing name replaces that face.
    pub fn load_font(&mut self, name: impl Into<String>, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let name = name.into();
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;

        if let Some(idx) = self.fonts.iter().position(|(n, _)| *n == name) {
            self.fonts[idx].1 = font;
            return Ok(FontId(idx));
        }
        let id = FontId(self.fonts.len());
        log::debug!("font '{name}' loaded as {id:?}");
        self.fonts.push((name, font));
        Ok(id)
    }

    pub fn id(&self, name: &str) -> Option<FontId> {
        self.fonts.iter().position(|(n, _)| n == name).map(FontId)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn face(&self, name: Option<&str>) -> Option<&fontdue::Font> {
        match name {
            Some(name) => self.fonts.iter().find(|(n, _)| n == name).map(|(_, f)| f),
            None => self.fonts.first().map(|(_, f)| f),
        }
    }
}

impl std::fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSystem")
            .field("fonts", &self.fonts.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>())
            .finish()
    }
}

impl FontMetrics for FontSystem {
    fn glyph_bounds(&self, font: Option<&str>, ch: char, size: f32) -> Option<GlyphBounds> {
        let m = self.face(font)?.metrics(ch, size);
        Some(GlyphBounds {
            advance: m.advance_width,
            outline: Bounds::new(m.bounds.xmin, m.bounds.ymin, m.bounds.width, m.bounds.height),
        })
    }

    fn kerning(&self, font: Option<&str>, left: char, right: char, size: f32) -> f32 {
        self.face(font)
            .and_then(|f| f.horizontal_kern(left, right, size))
            .unwrap_or(0.0)
    }

    fn line_height(&self, font: Option<&str>, size: f32) -> f32 {
        self.face(font)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map(|lm| lm.new_line_size)
            .unwrap_or(size * 1.2)
    }
}
