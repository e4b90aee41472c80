//! Triangle rasterization.
//!
//! The pipeline for one triangle is:
//!
//! 1. project the three corners through the [`Camera`] ([`Triangle::project`])
//! 2. sort by screen Y and split into flat-edge pieces ([`split`])
//! 3. fill each piece scanline by scanline ([`ScanlineRasterizer`])
//! 4. hand every covered pixel to a [`PixelWriter`]
//!
//! The writer is a trait so the fill can target the textured frame buffer in
//! production and a recording sink in tests.

mod scanline;
pub mod split;

pub use scanline::{perspective_depth, EdgeSampler, ScanlineRasterizer};
pub use split::{FlatTriangle, Split};

use crate::camera::Camera;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::triangle::WorldTriangle;

/// One corner of a triangle with everything the fill needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub world: Vec3,
    /// Pixel x/y plus depth in front of the camera.
    pub screen: Vec3,
    pub tex: Vec2,
}

impl Vertex {
    pub fn new(world: Vec3, screen: Vec3, tex: Vec2) -> Self {
        Self { world, screen, tex }
    }
}

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(vertices: [Vertex; 3]) -> Self {
        Self { vertices }
    }

    /// Projects a world-space triangle through `camera`.
    pub fn project(source: &WorldTriangle, camera: &Camera) -> Self {
        let vertex = |i: usize| {
            Vertex::new(
                source.positions[i],
                camera.project(source.positions[i]),
                source.tex_coords[i],
            )
        };
        Self::new([vertex(0), vertex(1), vertex(2)])
    }

    /// Builds a triangle directly from screen-space points.
    ///
    /// The world positions are set equal to the screen points; the fill never reads them.
    pub fn from_screen(screen: [Vec3; 3], tex: [Vec2; 3]) -> Self {
        Self::new([
            Vertex::new(screen[0], screen[0], tex[0]),
            Vertex::new(screen[1], screen[1], tex[1]),
            Vertex::new(screen[2], screen[2], tex[2]),
        ])
    }

    /// True when every corner is at or behind the camera plane.
    pub fn is_behind_camera(&self) -> bool {
        self.vertices.iter().all(|v| v.screen.z <= 0.0)
    }
}

/// Destination for rasterized pixels.
pub trait PixelWriter {
    /// Width of the target in pixels; spans are clipped to `[0, width-1]`.
    fn width(&self) -> u32;

    /// Height of the target in pixels; scanlines are clipped to `[0, height-1]`.
    fn height(&self) -> u32;

    /// Offer one pixel with its interpolated depth and texture coordinate.
    ///
    /// Returns whether the pixel was written.
    fn write_pixel(&mut self, x: i32, y: i32, depth: f64, tex: Vec2) -> bool;
}

/// Trait for triangle rasterization algorithms.
pub trait Rasterizer {
    /// Fill a triangle into the target.
    ///
    /// Returns `false` if the triangle was culled without touching the target.
    fn fill_triangle<W: PixelWriter + ?Sized>(&self, triangle: &Triangle, target: &mut W) -> bool;
}
