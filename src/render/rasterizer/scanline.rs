//! Scanline filling of flat-edge triangles.
//!
//! Each piece produced by [`split`](super::split) is walked one row at a time
//! from its top row to its bottom row.
//!
//! # Inverse Slope Method
//!
//! The left and right edge positions are tracked with inverse slopes:
//!
//! ```text
//! inv_slope = dx / dy = (x_end - x_start) / (y_end - y_start)
//! ```
//!
//! and advanced by one slope per row. Rows and span ends are rounded to the
//! nearest pixel; rows above the target are skipped by advancing the edges,
//! rows and columns past the target are clamped away.
//!
//! # Attribute Interpolation
//!
//! ```text
//!            apex
//!             /\
//!     edge 1 /  \ edge 2       t  = |p - edge.start| / |edge.end - edge.start|
//!           /    \             z  = 1 / (t / z_end + (1 - t) / z_start)
//!          p------q            uv = t * uv_end + (1 - t) * uv_start
//! ```
//!
//! Each span end gets its own progress `t` along its edge, measured as a 2D
//! screen distance ratio. Depth uses the reciprocal form so it stays correct
//! under perspective; texture coordinates are blended linearly. The same two
//! formulas are then applied across the span with the horizontal progress.

use super::split::{self, FlatTriangle};
use super::{PixelWriter, Rasterizer, Triangle, Vertex};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Perspective-correct depth at fraction `t` between two depths.
///
/// Interpolates linearly in `1/z`: at `t = 0` this is `z_start`, at `t = 1`
/// it is `z_end`.
#[inline]
pub fn perspective_depth(t: f64, z_start: f64, z_end: f64) -> f64 {
    1.0 / (t / z_end + (1.0 - t) / z_start)
}

/// Samples depth and texture coordinate along one triangle edge.
#[derive(Clone, Copy, Debug)]
pub struct EdgeSampler {
    start: Vertex,
    end: Vertex,
    length: f64,
}

impl EdgeSampler {
    pub fn new(start: Vertex, end: Vertex) -> Self {
        Self {
            start,
            end,
            length: start.screen.distance_xy(end.screen),
        }
    }

    /// Progress of screen point `(x, y)` from the edge start, as a fraction
    /// of the edge length. Zero for a degenerate edge.
    #[inline]
    pub fn progress(&self, x: f64, y: f64) -> f64 {
        if self.length == 0.0 {
            return 0.0;
        }
        Vec3::new(x, y, 0.0).distance_xy(self.start.screen) / self.length
    }

    /// Depth and texture coordinate at progress `t`.
    #[inline]
    pub fn sample(&self, t: f64) -> (f64, Vec2) {
        let z = perspective_depth(t, self.start.screen.z, self.end.screen.z);
        let tex = self.end.tex * t + self.start.tex * (1.0 - t);
        (z, tex)
    }
}

/// Scanline triangle rasterizer.
///
/// Input triangles may have their vertices in any order; they are sorted and
/// split before filling. Nothing is cached between calls.
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Fills one flat-edge piece.
    ///
    /// When the apex is above the flat edge both edges start at the apex;
    /// otherwise they start at the flat edge's corners and run down to the
    /// apex. A piece with zero height is skipped.
    pub fn fill_flat<W: PixelWriter + ?Sized>(&self, flat: &FlatTriangle, target: &mut W) {
        let [f0, f1, f2] = flat.outline;
        if f0.y == f1.y {
            return;
        }
        let [v0, v1, v2] = flat.vertices;
        let width = target.width() as i32;
        let height = target.height() as i32;
        if width == 0 || height == 0 {
            return;
        }

        let (inv_slope_1, inv_slope_2, mut x1, mut x2, mut y_start, y_end, edge1, edge2) =
            if f0.y < f1.y {
                // Flat bottom: both edges leave the apex.
                (
                    (f1.x - f0.x) / (f1.y - f0.y),
                    (f2.x - f0.x) / (f2.y - f0.y),
                    f0.x,
                    f0.x,
                    f0.y.round() as i32,
                    f1.y.round() as i32,
                    EdgeSampler::new(v0, v1),
                    EdgeSampler::new(v0, v2),
                )
            } else {
                // Flat top: edges run from the flat corners down to the apex.
                (
                    (f0.x - f1.x) / (f0.y - f1.y),
                    (f0.x - f2.x) / (f0.y - f2.y),
                    f1.x,
                    f2.x,
                    f1.y.round() as i32,
                    f0.y.round() as i32,
                    EdgeSampler::new(v1, v0),
                    EdgeSampler::new(v2, v0),
                )
            };

        if y_start < 0 {
            let skipped = -(y_start as f64);
            x1 += inv_slope_1 * skipped;
            x2 += inv_slope_2 * skipped;
            y_start = 0;
        }
        let y_end = y_end.min(height - 1);
        let max_x = (f0.x.max(f2.x).round() as i32).min(width - 1);
        let min_x = (f0.x.min(f1.x).round() as i32).max(0);

        for y in y_start..=y_end {
            let row = y as f64;
            // Span ends stay in f64: a corner close to the camera plane can
            // project far outside the i32 range.
            let full_start_x = x1.round();
            let full_end_x = x2.round();
            let start_x = (full_start_x as i32).max(min_x);
            let end_x = (full_end_x as i32).min(max_x);

            let (start_z, start_tex) = edge1.sample(edge1.progress(full_start_x, row));

            if start_x == end_x {
                target.write_pixel(start_x, y, start_z, start_tex);
            } else {
                let (end_z, end_tex) = edge2.sample(edge2.progress(full_end_x, row));
                let span = full_end_x - full_start_x;

                for x in start_x..=end_x {
                    let a = if span == 0.0 {
                        0.0
                    } else {
                        (x as f64 - full_start_x) / span
                    };
                    let z = perspective_depth(a, start_z, end_z);
                    let tex = end_tex * a + start_tex * (1.0 - a);
                    target.write_pixel(x, y, z, tex);
                }
            }

            x1 += inv_slope_1;
            x2 += inv_slope_2;
        }
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ScanlineRasterizer {
    /// Sorts, culls, splits and fills a triangle.
    ///
    /// A triangle whose corners are all at or behind the camera plane is
    /// dropped. A triangle with only some corners behind is still filled;
    /// the pixel writer discards the pixels with non-positive depth.
    fn fill_triangle<W: PixelWriter + ?Sized>(&self, triangle: &Triangle, target: &mut W) -> bool {
        let sorted = split::sort_by_screen_y(triangle);
        if sorted.is_behind_camera() {
            return false;
        }
        for piece in split::split(&sorted).pieces() {
            self.fill_flat(piece, target);
        }
        true
    }
}
