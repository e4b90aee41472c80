//! A CPU scanline rasterizer with perspective-correct depth.
//!
//! World-space triangles are projected through a pinhole [`Camera`], split
//! into flat-edge pieces and filled one scanline at a time. Every covered
//! pixel samples a [`Texture`] and goes through a per-pixel depth test.
//! SDL2 is used only to show the finished frame.
//!
//! # Quick Start
//!
//! ```ignore
//! use rave3d::prelude::*;
//!
//! let config = RenderConfig::default();
//! let mut engine = Engine::new(&config);
//! engine.camera_mut().set_position(Vec3::new(-100.0, 0.0, 20.0));
//! engine.camera_mut().look_at(Vec3::ZERO);
//!
//! engine.begin_frame();
//! let texture = Texture::checkerboard(64, 8, [255; 4], [255, 0, 0, 255]);
//! engine.draw_mesh(&Mesh::cube(20.0), &texture);
//! engine.save_screenshot("cube.png")?;
//! ```

pub mod camera;
pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod mesh;
pub mod render;
pub mod texture;
pub mod triangle;
pub mod window;

pub use camera::{Camera, OrbitController};
pub use config::{DemoConfig, RenderConfig};
pub use engine::{Engine, FrameStats};
pub use error::LoadError;
pub use mesh::Mesh;
pub use texture::Texture;
pub use triangle::WorldTriangle;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rave3d::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{fov_pulse, Camera, OrbitController};

    // Configuration
    pub use crate::config::{DemoConfig, RenderConfig};

    // Engine
    pub use crate::engine::{Engine, FrameStats};

    // Assets
    pub use crate::error::LoadError;
    pub use crate::mesh::Mesh;
    pub use crate::texture::Texture;
    pub use crate::triangle::WorldTriangle;

    // Math
    pub use crate::math::spherical::UnitSpherical;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Window};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        FrameBuffer, PixelWriter, Rasterizer, ScanlineRasterizer, TexturePixelWriter, Triangle,
    };
}
