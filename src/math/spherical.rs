//! Directions on the unit sphere.
//!
//! The azimuth is measured in the xy plane from +X toward +Y; the inclination
//! is measured from +Z. World "up" is therefore +Z, and a horizontal direction
//! has an inclination of π/2.

use std::f64::consts::{PI, TAU};

use super::vec3::Vec3;

/// Smallest distance an inclination may get to either pole.
///
/// At the poles the camera's derived up vector is undefined.
pub const POLE_EPSILON: f64 = 1e-5;

/// A direction given as (azimuth, inclination) angles in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitSpherical {
    pub azimuth: f64,
    pub inclination: f64,
}

impl UnitSpherical {
    pub const fn new(azimuth: f64, inclination: f64) -> Self {
        Self {
            azimuth,
            inclination,
        }
    }

    pub fn to_cartesian(&self) -> Vec3 {
        let (sin_incl, cos_incl) = self.inclination.sin_cos();
        let (sin_azim, cos_azim) = self.azimuth.sin_cos();
        Vec3::new(sin_incl * cos_azim, sin_incl * sin_azim, cos_incl)
    }

    /// Converts a (not necessarily unit) vector into spherical angles.
    ///
    /// The azimuth lands in `[0, 2π)`.
    pub fn from_cartesian(v: Vec3) -> Self {
        let unit = v.normalize();
        let mut azimuth = unit.y.atan2(unit.x);
        if unit.y < 0.0 {
            azimuth += TAU;
        }
        Self {
            azimuth,
            inclination: unit.z.clamp(-1.0, 1.0).acos(),
        }
    }

    /// Wraps the azimuth into `[-π, π]`.
    pub fn normalized(&self) -> Self {
        let mut azimuth = self.azimuth % TAU;
        if azimuth < -PI {
            azimuth += TAU;
        } else if azimuth > PI {
            azimuth -= TAU;
        }
        Self {
            azimuth,
            inclination: self.inclination,
        }
    }

    /// Keeps the inclination inside `[ε, π − ε]`.
    pub fn clamped(&self) -> Self {
        Self {
            azimuth: self.azimuth,
            inclination: self
                .inclination
                .clamp(POLE_EPSILON, PI - POLE_EPSILON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn horizontal_direction_round_trips() {
        let spher = UnitSpherical::new(1.0, FRAC_PI_2);
        let back = UnitSpherical::from_cartesian(spher.to_cartesian());
        assert_relative_eq!(back.azimuth, 1.0, epsilon = 1e-12);
        assert_relative_eq!(back.inclination, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn negative_y_maps_to_upper_half_of_azimuth_range() {
        let spher = UnitSpherical::from_cartesian(Vec3::new(0.0, -2.0, 0.0));
        assert_relative_eq!(spher.azimuth, 1.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn normalized_wraps_into_pi_range() {
        let spher = UnitSpherical::new(3.0 * PI / 2.0, 1.0).normalized();
        assert_relative_eq!(spher.azimuth, -FRAC_PI_2, epsilon = 1e-12);

        let spher = UnitSpherical::new(-5.0 * PI / 2.0, 1.0).normalized();
        assert_relative_eq!(spher.azimuth, -FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn clamped_stays_off_the_poles() {
        assert_eq!(UnitSpherical::new(0.0, -1.0).clamped().inclination, POLE_EPSILON);
        assert_eq!(
            UnitSpherical::new(0.0, 4.0).clamped().inclination,
            PI - POLE_EPSILON
        );
    }
}
