use std::ops::{Add, Div, Mul, Sub};

use super::vec3::{barycentric_from_dots, Vec3};

/// Two-component vector, used mostly for texture coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Drops the z component.
    pub fn from_xy(v: Vec3) -> Self {
        Self { x: v.x, y: v.y }
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn midpoint(&self, other: Self) -> Self {
        (*self + other) / 2.0
    }

    pub fn distance(&self, other: Self) -> f64 {
        (*self - other).magnitude()
    }

    pub fn lerp(&self, other: Self, t: f64) -> Self {
        *self * (1.0 - t) + other * t
    }

    /// Barycentric weights of `point` for triangle `(a, b, c)`, packed as a `Vec3`.
    pub fn barycentric(a: Self, b: Self, c: Self, point: Self) -> Vec3 {
        let (v0, v1, v2) = (b - a, c - a, point - a);
        barycentric_from_dots(v0.dot(v0), v0.dot(v1), v1.dot(v1), v2.dot(v0), v2.dot(v1))
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
