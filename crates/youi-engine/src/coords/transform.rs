use glam::{Mat4, Vec3};

use super::Bounds;

/// Model matrix mapping the unit quad (`[-1, 1]` on both axes) onto a
/// rectangle given in relative bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform(pub Mat4);

impl Transform {
    pub const IDENTITY: Transform = Transform(Mat4::IDENTITY);

    pub fn from_bounds(bounds: Bounds) -> Self {
        let size = bounds.size;
        // Quads are centered on their pivot; move it to the top-left corner.
        let cx = bounds.position.x + size.width / 2.0;
        let cy = bounds.position.y + size.height / 2.0;

        // Unit space grows downwards, clip space grows upwards.
        let translate = Mat4::from_translation(Vec3::new(cx * 2.0 - 1.0, -(cy * 2.0) + 1.0, 0.0));
        let scale = Mat4::from_scale(Vec3::new(size.width, size.height, 1.0));

        Self(translate * scale)
    }

    /// Maps a point of the unit quad to clip space.
    #[inline]
    pub fn apply(self, x: f32, y: f32) -> (f32, f32) {
        let p = self.0.transform_point3(Vec3::new(x, y, 0.0));
        (p.x, p.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_bounds_is_identity() {
        assert_eq!(Transform::from_bounds(Bounds::UNIT), Transform::IDENTITY);
    }

    #[test]
    fn top_left_quarter() {
        let t = Transform::from_bounds(Bounds::new(0.0, 0.0, 0.5, 0.5));
        // Quad corners land on the clip-space top-left quadrant.
        assert_eq!(t.apply(-1.0, 1.0), (-1.0, 1.0));
        assert_eq!(t.apply(1.0, -1.0), (0.0, 0.0));
    }
}
