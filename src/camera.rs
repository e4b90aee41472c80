//! Pinhole camera and world-to-screen projection.
//!
//! # Coordinate System
//!
//! World space is right-handed with +Z up. The camera keeps an orthonormal
//! look basis:
//! - `right`: screen +X
//! - `up`: screen -Y (pixel rows grow downward)
//! - `back`: opposite of the view direction
//!
//! # Orientation
//!
//! Orientation is stored as a [`UnitSpherical`] look direction. The up vector
//! is the look direction tilted a quarter turn toward +Z, so no separate
//! world-up is needed. This breaks down at the poles, which is why every
//! direction change goes through [`UnitSpherical::clamped`].

use std::f64::consts::{FRAC_PI_2, PI};

use crate::math::spherical::UnitSpherical;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Camera pose, field of view and derived projection factors.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    look_dir: UnitSpherical,

    // Unit vectors
    right: Vec3,
    up: Vec3,
    back: Vec3,

    /// Horizontal (x) and vertical (y) field of view in radians.
    fov: Vec2,
    /// `1 / tan(fov / 2)` for both axes.
    inv_tan_half_fov: Vec2,

    width: u32,
    height: u32,
}

impl Camera {
    /// Creates a camera at the origin looking along +X.
    pub fn new(width: u32, height: u32, hfov: f64) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            look_dir: UnitSpherical::new(0.0, FRAC_PI_2),
            right: Vec3::ZERO,
            up: Vec3::ZERO,
            back: Vec3::ZERO,
            fov: Vec2::ZERO,
            inv_tan_half_fov: Vec2::ZERO,
            width,
            height,
        };
        camera.look_along(camera.look_dir);
        camera.set_hfov(hfov);
        camera
    }

    // =========================================================================
    // Field of view
    // =========================================================================

    /// Sets the horizontal field of view and derives the vertical one from
    /// the render aspect ratio.
    pub fn set_hfov(&mut self, hfov: f64) {
        let tan_half_hfov = (hfov / 2.0).tan();
        self.fov = Vec2::new(
            hfov,
            2.0 * (tan_half_hfov / self.width as f64 * self.height as f64).atan(),
        );
        self.inv_tan_half_fov = Vec2::new(
            1.0 / (self.fov.x / 2.0).tan(),
            1.0 / (self.fov.y / 2.0).tan(),
        );
    }

    /// Widens (positive) or narrows (negative) the horizontal field of view.
    ///
    /// The change is only applied if the result stays inside `(0, π)`.
    /// Returns whether the field of view changed.
    pub fn zoom(&mut self, delta: f64) -> bool {
        let hfov = self.fov.x + delta;
        if hfov > 0.0 && hfov < PI {
            self.set_hfov(hfov);
            log::debug!("hfov set to {:.1} degrees", hfov.to_degrees());
            true
        } else {
            false
        }
    }

    /// Updates the render target size; the vertical FOV follows the new aspect.
    pub fn set_render_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.set_hfov(self.fov.x);
    }

    // =========================================================================
    // Orientation
    // =========================================================================

    /// Points the camera along a spherical direction and rebuilds the basis.
    pub fn look_along(&mut self, direction: UnitSpherical) {
        let forward = direction.to_cartesian();
        self.look_dir = direction;

        let tilted = UnitSpherical::new(direction.azimuth, direction.inclination - FRAC_PI_2);
        self.up = tilted.to_cartesian();
        self.back = -forward;
        self.right = self.up.cross(self.back);
    }

    /// Points the camera at a world position.
    ///
    /// Does nothing if `target` coincides with the camera position. A target
    /// straight above or below is held just off the pole, as in [`Camera::turn`].
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.position;
        if direction.magnitude() > f64::EPSILON {
            self.look_along(UnitSpherical::from_cartesian(direction).clamped());
        }
    }

    /// Turns the view by azimuth/inclination deltas (radians).
    ///
    /// The azimuth is wrapped into `[-π, π]` and the inclination kept off the poles.
    pub fn turn(&mut self, azimuth_delta: f64, inclination_delta: f64) {
        let direction = UnitSpherical::new(
            self.look_dir.azimuth + azimuth_delta,
            self.look_dir.inclination + inclination_delta,
        );
        self.look_along(direction.normalized().clamped());
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_direction(&self) -> UnitSpherical {
        self.look_dir
    }

    pub fn forward(&self) -> Vec3 {
        -self.back
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn back(&self) -> Vec3 {
        self.back
    }

    /// Horizontal and vertical field of view in radians.
    pub fn fov(&self) -> Vec2 {
        self.fov
    }

    pub fn inv_tan_half_fov(&self) -> Vec2 {
        self.inv_tan_half_fov
    }

    pub fn render_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Projects a world point onto the camera basis (right, up, back).
    pub fn view_space(&self, point: Vec3) -> Vec3 {
        let relative = point - self.position;
        Vec3::new(
            relative.dot(self.right),
            relative.dot(self.up),
            relative.dot(self.back),
        )
    }

    /// Maps a view-space point to pixel coordinates plus depth.
    ///
    /// The returned `z` is the distance in front of the camera; anything at
    /// or below zero is behind it.
    pub fn view_to_screen(&self, ortho: Vec3) -> Vec3 {
        let depth = ortho.z.abs();
        Vec3::new(
            (self.inv_tan_half_fov.x * ortho.x / depth + 0.5) * (self.width as f64 - 1.0),
            (self.inv_tan_half_fov.y * -ortho.y / depth + 0.5) * (self.height as f64 - 1.0),
            -ortho.z,
        )
    }

    /// World space to screen space.
    pub fn project(&self, point: Vec3) -> Vec3 {
        self.view_to_screen(self.view_space(point))
    }

    /// Returns this camera expressed in the local frame of an object placed
    /// at `origin` and rotated by `heading` radians about +Z.
    ///
    /// Projecting local-space geometry through the returned camera gives the
    /// same screen points as projecting the placed geometry through `self`.
    pub fn in_object_frame(&self, origin: Vec3, heading: f64) -> Camera {
        let mut local = self.clone();
        local.position = (self.position - origin).rotate_z(-heading);
        local.look_along(UnitSpherical::new(
            self.look_dir.azimuth - heading,
            self.look_dir.inclination,
        ));
        local
    }
}

// =============================================================================
// FOV Pulse
// =============================================================================

/// Widest horizontal field of view reached by [`fov_pulse`].
pub const PULSE_MAX_HFOV_DEGREES: f64 = 130.0;
/// How far below the maximum the pulse dips, in degrees.
pub const PULSE_DEPTH_DEGREES: f64 = 39.0;

/// Horizontal field of view (radians) of a periodic "beat" zoom.
///
/// Over each period the view narrows from the maximum to
/// `max - depth` at mid-period and back, with a sharp peak.
pub fn fov_pulse(elapsed_ms: f64, period_ms: f64) -> f64 {
    let x = elapsed_ms.rem_euclid(period_ms) / period_ms;
    let y = 0.5 * (PI * (2.0 * x - 1.0).abs().powf(1.0 / 2.6)).cos() + 0.5;
    (PULSE_MAX_HFOV_DEGREES - y * PULSE_DEPTH_DEGREES).to_radians()
}

// =============================================================================
// Orbit Controller
// =============================================================================

/// Mouse-driven orbit around a target point.
#[derive(Debug, Clone)]
pub struct OrbitController {
    /// Radians per pixel of mouse motion per millisecond of frame time.
    pub look_sensitivity: f64,
    /// Distance kept between camera and target.
    pub distance: f64,
    /// Lowest z the camera may take.
    pub min_height: f64,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            look_sensitivity: 0.1e-3,
            distance: 240.0,
            min_height: -5.0,
        }
    }
}

impl OrbitController {
    pub fn new(look_sensitivity: f64, distance: f64, min_height: f64) -> Self {
        Self {
            look_sensitivity,
            distance,
            min_height,
        }
    }

    /// Applies accumulated mouse motion and re-seats the camera behind `target`.
    pub fn update(&self, camera: &mut Camera, target: Vec3, mouse_delta: (i32, i32), delta_ms: f64) {
        let (dx, dy) = mouse_delta;
        if dx != 0 || dy != 0 {
            camera.turn(
                -self.look_sensitivity * dx as f64 * delta_ms,
                self.look_sensitivity * dy as f64 * delta_ms,
            );
        }

        let look = camera.look_direction().to_cartesian();
        let mut position = target - look.set_magnitude(self.distance);
        if position.z < self.min_height {
            position.z = self.min_height;
        }
        camera.set_position(position);
        camera.look_at(target);
    }
}

// =============================================================================
// Tests
// =============================================================================
