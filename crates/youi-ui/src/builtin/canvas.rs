use youi_engine::coords::{Bounds, PixelPoint, PixelRect, PixelSize, Size};
use youi_yuml::AttributeList;

use crate::component::{Component, Layout};
use crate::error::FactoryError;

/// Fixed pixel rectangle on the page.
///
/// Every child receives the canvas rectangle in unit coordinates of the
/// root, so children overlap exactly. Change the rectangle through
/// [`Tree::update`](crate::tree::Tree::update) so the children follow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    rect: PixelRect,
}

impl Canvas {
    pub fn new(rect: PixelRect) -> Self {
        Self { rect: rect.normalized() }
    }

    /// Reads `X`, `Y`, `Width` and `Height`, each an integer defaulting to 0.
    pub fn from_attributes(attrs: &AttributeList) -> Result<Self, FactoryError> {
        let x = attrs.get_or("X", "0").as_int()?;
        let y = attrs.get_or("Y", "0").as_int()?;
        let width = attrs.get_or("Width", "0").as_int()?;
        let height = attrs.get_or("Height", "0").as_int()?;
        if width < 0 || height < 0 {
            return Err(FactoryError::Invalid(format!(
                "Canvas size must not be negative (got {width}x{height})"
            )));
        }
        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(FactoryError::Invalid(format!(
                "Canvas at ({x}, {y}) with size {width}x{height} extends past the pixel range"
            )));
        }
        Ok(Self::new(PixelRect::new(x, y, width, height)))
    }

    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    pub fn set_position(&mut self, position: PixelPoint) {
        self.rect = self.rect.with_origin(position);
    }

    pub fn set_size(&mut self, size: PixelSize) {
        self.rect = self.rect.with_size(size).normalized();
    }

    pub fn set_rect(&mut self, rect: PixelRect) {
        self.rect = rect.normalized();
    }
}

impl Component for Canvas {
    fn tag(&self) -> &str {
        "Canvas"
    }

    fn attributes(&self) -> AttributeList {
        let size = self.rect.size();
        [
            ("X", self.rect.min.x),
            ("Y", self.rect.min.y),
            ("Width", size.width),
            ("Height", size.height),
        ]
        .into_iter()
        .map(|(name, value)| (name, value.to_string()))
        .collect()
    }

    fn is_container(&self) -> bool {
        true
    }

    fn layout(&self) -> Option<&dyn Layout> {
        Some(self)
    }
}

impl Layout for Canvas {
    fn child_bounds(&self, _own: Bounds, root_size: Size) -> Bounds {
        Bounds::from(self.rect).scale(root_size.inverse())
    }
}

pub(super) fn make_canvas(attrs: &AttributeList) -> Result<Box<dyn Component>, FactoryError> {
    Ok(Box::new(Canvas::from_attributes(attrs)?))
}
