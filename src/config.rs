//! Render and demo configuration.
//!
//! Both structs deserialize from RON with every field optional:
//!
//! ```ron
//! (
//!     render: (width: 1024, height: 768, hfov_degrees: 100.0),
//!     mesh: Some("assets/car.obj"),
//!     texture: Some("assets/car.png"),
//!     mesh_scale: 15.0,
//! )
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Frame size, field of view and pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Horizontal field of view in degrees, exclusive range (0, 180).
    pub hfov_degrees: f64,
    pub target_fps: u32,
    /// RGBA color the background layer is filled with.
    pub background: [u8; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            hfov_degrees: 90.0,
            target_fps: 60,
            background: [40, 44, 52, 255],
        }
    }
}

impl RenderConfig {
    pub fn hfov_radians(&self) -> f64 {
        self.hfov_degrees.to_radians()
    }

    /// Replaces out-of-range values with their defaults, logging each one.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.width == 0 || self.height == 0 {
            log::warn!(
                "render size {}x{} is empty, using {}x{}",
                self.width,
                self.height,
                defaults.width,
                defaults.height
            );
            self.width = defaults.width;
            self.height = defaults.height;
        }
        if !(self.hfov_degrees > 0.0 && self.hfov_degrees < 180.0) {
            log::warn!(
                "hfov {} is outside (0, 180), using {}",
                self.hfov_degrees,
                defaults.hfov_degrees
            );
            self.hfov_degrees = defaults.hfov_degrees;
        }
        if self.target_fps == 0 {
            log::warn!("target_fps 0 ignored, using {}", defaults.target_fps);
            self.target_fps = defaults.target_fps;
        }
        self
    }
}

/// Everything the demo binary needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub render: RenderConfig,
    /// OBJ file to orbit; a cube is used when absent.
    pub mesh: Option<PathBuf>,
    /// Texture for the mesh; a checkerboard is used when absent.
    pub texture: Option<PathBuf>,
    pub mesh_scale: f64,
    pub ignore_alpha: bool,
    pub orbit_distance: f64,
    pub min_camera_height: f64,
    /// Radians per pixel of mouse motion per millisecond.
    pub look_sensitivity: f64,
    /// Period of the field-of-view pulse in milliseconds; off when `None`.
    pub fov_pulse_ms: Option<f64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            mesh: None,
            texture: None,
            mesh_scale: 15.0,
            ignore_alpha: false,
            orbit_distance: 240.0,
            min_camera_height: -5.0,
            look_sensitivity: 0.1e-3,
            fov_pulse_ms: None,
        }
    }
}

impl DemoConfig {
    /// Parse a RON document.
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        let config: Self = ron::from_str(text)?;
        Ok(config.validated())
    }

    /// Read and parse a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&text).map_err(|source| LoadError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config {}", path.display());
        Ok(config)
    }

    pub fn validated(mut self) -> Self {
        self.render = self.render.validated();
        if let Some(period) = self.fov_pulse_ms {
            if period.is_nan() || period <= 0.0 {
                log::warn!("fov_pulse_ms {} must be positive, pulse disabled", period);
                self.fov_pulse_ms = None;
            }
        }
        self
    }
}
