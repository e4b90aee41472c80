//! Errors raised while loading assets and configuration.
//!
//! Rendering itself never fails; only startup work can.

use std::fmt;
use std::path::PathBuf;

/// Failure to load a mesh, texture or configuration file.
#[derive(Debug)]
pub enum LoadError {
    /// The OBJ parser rejected the file.
    Obj { path: PathBuf, source: tobj::LoadError },
    /// The OBJ file has a model without texture coordinates.
    MissingTexCoords { path: PathBuf, model: String },
    /// Image decoding failed.
    Image(image::ImageError),
    /// A raw pixel buffer does not match its declared dimensions.
    TextureSize {
        width: u32,
        height: u32,
        len: usize,
    },
    /// Reading a file failed.
    Io { path: PathBuf, source: std::io::Error },
    /// A configuration file could not be parsed.
    Config {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj { path, source } => {
                write!(f, "failed to load OBJ {}: {}", path.display(), source)
            }
            LoadError::MissingTexCoords { path, model } => write!(
                f,
                "model '{}' in {} has no texture coordinates",
                model,
                path.display()
            ),
            LoadError::Image(err) => write!(f, "failed to decode image: {}", err),
            LoadError::TextureSize { width, height, len } => write!(
                f,
                "texture of {}x{} needs {} RGBA bytes, got {}",
                width,
                height,
                *width as usize * *height as usize * 4,
                len
            ),
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Config { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj { source, .. } => Some(source),
            LoadError::Image(err) => Some(err),
            LoadError::Io { source, .. } => Some(source),
            LoadError::Config { source, .. } => Some(source),
            LoadError::MissingTexCoords { .. } | LoadError::TextureSize { .. } => None,
        }
    }
}

impl From<image::ImageError> for LoadError {
    fn from(err: image::ImageError) -> Self {
        LoadError::Image(err)
    }
}
