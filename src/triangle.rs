use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// A triangle as handed to the renderer: three world-space corners, each
/// with its own texture coordinate. No winding order is assumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldTriangle {
    pub positions: [Vec3; 3],
    pub tex_coords: [Vec2; 3],
}

impl WorldTriangle {
    pub const fn new(positions: [Vec3; 3], tex_coords: [Vec2; 3]) -> Self {
        Self {
            positions,
            tex_coords,
        }
    }

    /// Same triangle with every corner scaled about the origin.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            positions: self.positions.map(|p| p * factor),
            tex_coords: self.tex_coords,
        }
    }
}
