//! Vertex sorting and flat-edge decomposition.
//!
//! ```text
//!        s0                   s0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>   s1 /----\ p3   <- split at s1.y
//!  s1 /      \              \     \
//!      ``--.  \               ``--.\
//!           `` s2                   s2
//! ```
//!
//! A general triangle becomes a flat-bottom piece with apex `s0` and a
//! flat-top piece with apex `s2`. Both share the split point `p3` on the long
//! edge `s0 -> s2`. `p3` only bounds the spans: depth and texture coordinates
//! along the long edge are always sampled between the real corners `s0` and
//! `s2`, so each piece carries all three corner vertices.
//!
//! Everything here returns new values; the input triangle is never mutated.

use super::{Triangle, Vertex};
use crate::math::vec3::Vec3;

/// A triangle with one horizontal edge, ready for the scanline fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatTriangle {
    /// Attribute sources. `vertices[0]` is the apex; the edge through
    /// `outline[1]` samples `vertices[0]..vertices[1]`, the edge through
    /// `outline[2]` samples `vertices[0]..vertices[2]`.
    pub vertices: [Vertex; 3],
    /// Screen outline: apex first, then the flat pair with ascending x.
    pub outline: [Vec3; 3],
}

impl FlatTriangle {
    fn from_vertices(vertices: [Vertex; 3]) -> Self {
        Self {
            vertices,
            outline: vertices.map(|v| v.screen),
        }
    }
}

/// Result of decomposing a triangle into flat-edge pieces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Split {
    /// The triangle already had a horizontal edge.
    Single(FlatTriangle),
    /// General triangle: flat-bottom piece first, then flat-top piece.
    Double(FlatTriangle, FlatTriangle),
}

impl Split {
    pub fn pieces(&self) -> impl Iterator<Item = &FlatTriangle> {
        let (first, second) = match self {
            Split::Single(only) => (only, None),
            Split::Double(top, bottom) => (top, Some(bottom)),
        };
        std::iter::once(first).chain(second)
    }
}

/// Returns the triangle with its vertices ordered by ascending screen Y.
///
/// Uses a stable exchange sort, so vertices with equal Y keep their order.
pub fn sort_by_screen_y(triangle: &Triangle) -> Triangle {
    let mut v = triangle.vertices;
    for i in 0..2 {
        for j in i + 1..3 {
            if v[j].screen.y < v[i].screen.y {
                v.swap(i, j);
            }
        }
    }
    Triangle::new(v)
}

/// Decomposes a Y-sorted triangle into flat-edge pieces.
pub fn split(sorted: &Triangle) -> Split {
    let [s0, s1, s2] = sorted.vertices;

    // Flat bottom: the two lower corners share a row.
    if s1.screen.y == s2.screen.y {
        let (left, right) = if s2.screen.x < s1.screen.x {
            (s2, s1)
        } else {
            (s1, s2)
        };
        return Split::Single(FlatTriangle::from_vertices([s0, left, right]));
    }

    // Flat top: the two upper corners share a row; the apex is the bottom one.
    if s0.screen.y == s1.screen.y {
        let (left, right) = if s0.screen.x < s1.screen.x {
            (s0, s1)
        } else {
            (s1, s0)
        };
        return Split::Single(FlatTriangle::from_vertices([s2, left, right]));
    }

    let (a, b, c) = (s0.screen, s1.screen, s2.screen);
    // Depth of the split point is never read.
    let p3 = Vec3::new(a.x + (b.y - a.y) / (c.y - a.y) * (c.x - a.x), b.y, 0.0);

    if b.x < p3.x {
        // Middle corner on the left.
        Split::Double(
            FlatTriangle {
                vertices: [s0, s1, s2],
                outline: [a, b, p3],
            },
            FlatTriangle {
                vertices: [s2, s1, s0],
                outline: [c, b, p3],
            },
        )
    } else {
        Split::Double(
            FlatTriangle {
                vertices: [s0, s2, s1],
                outline: [a, p3, b],
            },
            FlatTriangle {
                vertices: [s2, s0, s1],
                outline: [c, p3, b],
            },
        )
    }
}
