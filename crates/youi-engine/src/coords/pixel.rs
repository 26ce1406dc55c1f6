/// A point in device pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size in device pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

impl PixelSize {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned rectangle in device pixels, stored as `[min, max)` corners.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub min: PixelPoint,
    pub max: PixelPoint,
}

impl PixelRect {
    /// Builds a rectangle from its top-left corner and size. The far corner
    /// saturates at the `i32` range.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            min: PixelPoint::new(x, y),
            max: PixelPoint::new(x.saturating_add(width), y.saturating_add(height)),
        }
    }

    #[inline]
    pub const fn from_corners(min: PixelPoint, max: PixelPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(size: PixelSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[inline]
    pub fn size(self) -> PixelSize {
        PixelSize::new(self.max.x.saturating_sub(self.min.x), self.max.y.saturating_sub(self.min.y))
    }

    /// Same top-left corner, new size.
    #[inline]
    pub fn with_size(self, size: PixelSize) -> Self {
        Self::new(self.min.x, self.min.y, size.width, size.height)
    }

    /// Same size, moved so the top-left corner sits at `origin`.
    #[inline]
    pub fn with_origin(self, origin: PixelPoint) -> Self {
        let size = self.size();
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size().is_empty()
    }

    /// Normalizes the rectangle so `min` is the top-left corner.
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            min: PixelPoint::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            max: PixelPoint::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        }
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: PixelPoint) -> bool {
        let r = self.normalized();
        p.x >= r.min.x && p.y >= r.min.y && p.x < r.max.x && p.y < r.max.y
    }
}
