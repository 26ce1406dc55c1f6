use std::fmt;

use super::PixelRect;

/// A point, either in pixels or in unit-square coordinates depending on the
/// owner's role.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Component-wise multiplication by `s`.
    #[inline]
    pub fn scale(self, s: Size) -> Self {
        Self::new(self.x * s.width, self.y * s.height)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}; {:.2})", self.x, self.y)
    }
}

/// Width and height, paired with a [`Position`] in [`Bounds`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { width: 0.0, height: 0.0 }
    }

    /// Component-wise multiplication by `s`.
    #[inline]
    pub fn scale(self, s: Size) -> Self {
        Self::new(self.width * s.width, self.height * s.height)
    }

    /// Component-wise reciprocal. A zero dimension maps to zero, so scaling by
    /// the inverse of an empty size collapses instead of producing infinities.
    #[inline]
    pub fn inverse(self) -> Self {
        let inv = |v: f32| if v == 0.0 { 0.0 } else { 1.0 / v };
        Self::new(inv(self.width), inv(self.height))
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}; {:.2})", self.width, self.height)
    }
}

/// Axis-aligned rectangle: a position and a size, always paired.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub position: Position,
    pub size: Size,
}

impl Bounds {
    /// The full unit square `{0, 0, 1, 1}`.
    pub const UNIT: Bounds = Bounds::new(0.0, 0.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub const fn from_position_size(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    /// Scales both position and size component-wise.
    ///
    /// Converting absolute pixels to unit space is `abs.scale(resolution.inverse())`.
    #[inline]
    pub fn scale(self, s: Size) -> Self {
        Self {
            position: self.position.scale(s),
            size: self.size.scale(s),
        }
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> Position {
        Position::new(
            self.position.x + self.size.width,
            self.position.y + self.size.height,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.position.is_finite() && self.size.is_finite()
    }
}

impl From<PixelRect> for Bounds {
    fn from(rect: PixelRect) -> Self {
        let size = rect.size();
        Bounds::new(
            rect.min.x as f32,
            rect.min.y as f32,
            size.width as f32,
            size.height as f32,
        )
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position {} Size {}", self.position, self.size)
    }
}
