use std::ops::{Add, Div, Mul, Neg, Sub};

/// Three-component vector used for world positions and screen points.
///
/// In screen space `x`/`y` are pixel coordinates and `z` is the depth in
/// front of the camera (positive = visible).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotates the vector around the z axis by `angle` radians.
    pub fn rotate_z(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Magnitude of the xy projection (z ignored).
    pub fn magnitude_xy(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Returns a vector in the same direction with the given magnitude.
    pub fn set_magnitude(&self, magnitude: f64) -> Self {
        self.normalize() * magnitude
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn midpoint(&self, other: Self) -> Self {
        (*self + other) / 2.0
    }

    pub fn distance(&self, other: Self) -> f64 {
        (*self - other).magnitude()
    }

    /// Distance between the xy projections of two points.
    pub fn distance_xy(&self, other: Self) -> f64 {
        (*self - other).magnitude_xy()
    }

    /// Linear interpolation: `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(&self, other: Self, t: f64) -> Self {
        *self * (1.0 - t) + other * t
    }

    /// Barycentric coordinates of `point` with respect to triangle `(a, b, c)`.
    ///
    /// The returned components weight `a`, `b` and `c` respectively and sum to 1.
    /// A degenerate triangle yields non-finite weights.
    pub fn barycentric(a: Self, b: Self, c: Self, point: Self) -> Self {
        barycentric_from_dots(
            (b - a).dot(b - a),
            (b - a).dot(c - a),
            (c - a).dot(c - a),
            (point - a).dot(b - a),
            (point - a).dot(c - a),
        )
    }

    /// Same as [`Vec3::barycentric`] but ignoring the z component.
    pub fn barycentric_xy(a: Self, b: Self, c: Self, point: Self) -> Self {
        let dot_xy = |u: Self, v: Self| u.x * v.x + u.y * v.y;
        let (v0, v1, v2) = (b - a, c - a, point - a);
        barycentric_from_dots(
            dot_xy(v0, v0),
            dot_xy(v0, v1),
            dot_xy(v1, v1),
            dot_xy(v2, v0),
            dot_xy(v2, v1),
        )
    }
}

pub(crate) fn barycentric_from_dots(d00: f64, d01: f64, d11: f64, d20: f64, d21: f64) -> Vec3 {
    let denom = d00 * d11 - d01 * d01;
    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    Vec3::new(1.0 - v - w, v, w)
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Scalar division of a vector.
impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn cross_of_axes_follows_right_hand_rule() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
    }

    #[test]
    fn rotate_z_quarter_turn() {
        let v = Vec3::new(2.0, 0.0, 5.0).rotate_z(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 5.0);
    }

    #[test]
    fn xy_distance_ignores_depth() {
        let a = Vec3::new(0.0, 0.0, 1.0);
        let b = Vec3::new(3.0, 4.0, 100.0);
        assert_relative_eq!(a.distance_xy(b), 5.0);
    }

    #[test]
    fn set_magnitude_keeps_direction() {
        let v = Vec3::new(0.0, 3.0, 4.0).set_magnitude(10.0);
        assert_relative_eq!(v.y, 6.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn barycentric_of_vertices_and_centroid() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(4.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 4.0, 0.0);

        let at_b = Vec3::barycentric(a, b, c, b);
        assert_relative_eq!(at_b.y, 1.0, epsilon = 1e-12);

        let centroid = (a + b + c) / 3.0;
        let bary = Vec3::barycentric_xy(a, b, c, Vec3::new(centroid.x, centroid.y, 42.0));
        assert_relative_eq!(bary.x, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(bary.y, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(bary.z, 1.0 / 3.0, epsilon = 1e-12);
    }
}
