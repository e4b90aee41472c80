//! Owning frame storage.
//!
//! Provides the [`Renderer`] struct which owns the color, depth and
//! background buffers and implements the whole-frame operations: clearing,
//! fading and writing screenshots.

use std::path::Path;

use super::framebuffer::FrameBuffer;

pub struct Renderer {
    /// RGBA8, row-major.
    color_buffer: Vec<u8>,
    depth_buffer: Vec<f64>,
    /// Copied into the color buffer at the start of every frame.
    background: Vec<u8>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![0; size * 4],
            depth_buffer: vec![f64::INFINITY; size],
            background: vec![0; size * 4],
            width,
            height,
        }
    }

    /// Reallocates every buffer. The background is reset to transparent black.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
        log::info!("render buffers resized to {}x{}", width, height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the background layer with one color.
    pub fn set_background(&mut self, rgba: [u8; 4]) {
        for px in self.background.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Start a new frame: restore the background and forget all depths.
    pub fn begin_frame(&mut self) {
        self.color_buffer.copy_from_slice(&self.background);
        self.clear_depth();
    }

    pub fn clear(&mut self, rgba: [u8; 4]) {
        for px in self.color_buffer.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    #[inline]
    /// Reset every depth to +∞ so the next write anywhere wins.
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(f64::INFINITY);
    }

    /// Darken the frame for transitions.
    ///
    /// `progress` in `[0, 1]` scales RGB by `1 - progress`; alpha becomes opaque.
    pub fn fade(&mut self, progress: f64) {
        let scale = 1.0 - progress.clamp(0.0, 1.0);
        for px in self.color_buffer.chunks_exact_mut(4) {
            px[0] = (px[0] as f64 * scale) as u8;
            px[1] = (px[1] as f64 * scale) as u8;
            px[2] = (px[2] as f64 * scale) as u8;
            px[3] = 255;
        }
    }

    /// Color at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.color_buffer[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.color_buffer
    }

    pub fn depth_buffer(&self) -> &[f64] {
        &self.depth_buffer
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }

    /// Write the color buffer to an image file; the format follows the extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path.as_ref(),
            &self.color_buffer,
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;
        log::info!("saved frame to {}", path.as_ref().display());
        Ok(())
    }
}
