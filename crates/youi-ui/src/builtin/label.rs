use youi_engine::coords::{Size, Transform};
use youi_engine::text::measure_text;
use youi_yuml::AttributeList;

use crate::component::{Component, DrawCtx, TextHolder};
use crate::error::FactoryError;

const DEFAULT_FONT_SIZE: f32 = 12.0;

/// A run of text drawn from the top-left of its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    font_face: Option<String>,
    font_size: f32,
    extent: Size,
    transform: Transform,
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_face: None,
            font_size: DEFAULT_FONT_SIZE,
            extent: Size::zero(),
            transform: Transform::IDENTITY,
        }
    }

    /// Reads `Text`, `Font` and `FontSize` (a positive number, default 12).
    pub fn from_attributes(attrs: &AttributeList) -> Result<Self, FactoryError> {
        let mut label = Self::new(attrs.get_or("Text", "").as_str());
        label.font_face = attrs.get("Font").map(|face| face.as_str().to_string());
        label.font_size = attrs.get_or("FontSize", "12").as_float()?;
        if label.font_size <= 0.0 {
            return Err(FactoryError::Invalid(format!(
                "FontSize must be positive (got {})",
                label.font_size
            )));
        }
        Ok(label)
    }

    /// Size of the text as last measured, in pixels.
    pub fn extent(&self) -> Size {
        self.extent
    }
}

impl TextHolder for Label {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn font_face(&self) -> Option<&str> {
        self.font_face.as_deref()
    }

    fn set_font_face(&mut self, face: Option<String>) {
        self.font_face = face;
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }
}

impl Component for Label {
    fn tag(&self) -> &str {
        "Label"
    }

    fn attributes(&self) -> AttributeList {
        let mut attrs = AttributeList::new();
        attrs.insert("Text", self.text.as_str());
        if let Some(face) = &self.font_face {
            attrs.insert("Font", face.as_str());
        }
        attrs.insert("FontSize", self.font_size.to_string());
        attrs
    }

    fn text_holder(&self) -> Option<&dyn TextHolder> {
        Some(self)
    }

    fn text_holder_mut(&mut self) -> Option<&mut dyn TextHolder> {
        Some(self)
    }

    fn draw(&mut self, ctx: &mut DrawCtx<'_>) {
        if ctx.dirty {
            self.transform = Transform::from_bounds(ctx.bounds);
            self.extent = match ctx.fonts {
                Some(fonts) => measure_text(fonts, self.font_face.as_deref(), &self.text, self.font_size),
                None => {
                    if !self.text.is_empty() {
                        log::warn!("label: no font metrics available to measure {:?}", self.text);
                    }
                    Size::zero()
                }
            };
        }
        ctx.list.push_text(
            self.transform,
            self.text.as_str(),
            self.font_face.clone(),
            self.font_size,
            self.extent,
        );
    }
}

pub(super) fn make_label(attrs: &AttributeList) -> Result<Box<dyn Component>, FactoryError> {
    Ok(Box::new(Label::from_attributes(attrs)?))
}
