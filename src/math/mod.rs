//! Vector math used by the camera and rasterizer.
//!
//! Everything here is plain `f64` value math with no state.

pub mod spherical;
pub mod vec2;
pub mod vec3;
