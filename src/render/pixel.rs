//! Textured, depth-tested pixel output.

use super::framebuffer::FrameBuffer;
use super::rasterizer::PixelWriter;
use crate::math::vec2::Vec2;
use crate::texture::Texture;

/// Writes texture samples into a [`FrameBuffer`].
///
/// A pixel is written when its depth is positive, the sampled texel is
/// visible (non-zero alpha, or the texture ignores alpha) and it is strictly
/// nearer than what the depth buffer already holds.
pub struct TexturePixelWriter<'fb, 'a> {
    buffer: &'fb mut FrameBuffer<'a>,
    texture: &'fb Texture,
    written: u64,
}

impl<'fb, 'a> TexturePixelWriter<'fb, 'a> {
    pub fn new(buffer: &'fb mut FrameBuffer<'a>, texture: &'fb Texture) -> Self {
        Self {
            buffer,
            texture,
            written: 0,
        }
    }

    /// Number of pixels that passed every test so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl PixelWriter for TexturePixelWriter<'_, '_> {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    #[inline]
    fn write_pixel(&mut self, x: i32, y: i32, depth: f64, tex: Vec2) -> bool {
        // Behind the camera, or NaN from a degenerate edge.
        if depth.is_nan() || depth <= 0.0 {
            return false;
        }
        let rgba = self.texture.sample(tex);
        if !self.texture.is_visible(rgba) {
            return false;
        }
        let wrote = self.buffer.set_pixel_with_depth(x, y, depth, rgba);
        self.written += wrote as u64;
        wrote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: [u8; 4] = [10, 20, 30, 0];
    const SOLID: [u8; 4] = [200, 100, 50, 255];

    fn two_texel_texture() -> Texture {
        // Left texel transparent, right texel opaque.
        let mut data = CLEAR.to_vec();
        data.extend_from_slice(&SOLID);
        Texture::from_rgba(2, 1, data).unwrap()
    }

    fn buffers() -> (Vec<u8>, Vec<f64>) {
        (vec![0u8; 4 * 4 * 4], vec![f64::INFINITY; 16])
    }

    #[test]
    fn non_positive_depth_is_discarded() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);
        let texture = two_texel_texture();
        let mut writer = TexturePixelWriter::new(&mut fb, &texture);

        assert!(!writer.write_pixel(1, 1, 0.0, Vec2::new(1.0, 0.0)));
        assert!(!writer.write_pixel(1, 1, -2.0, Vec2::new(1.0, 0.0)));
        assert!(!writer.write_pixel(1, 1, f64::NAN, Vec2::new(1.0, 0.0)));
        assert_eq!(writer.written(), 0);
    }

    #[test]
    fn transparent_texels_are_skipped_unless_alpha_ignored() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);
        let texture = two_texel_texture();
        {
            let mut writer = TexturePixelWriter::new(&mut fb, &texture);
            assert!(!writer.write_pixel(0, 0, 1.0, Vec2::new(0.0, 0.0)));
            assert!(writer.write_pixel(1, 0, 1.0, Vec2::new(1.0, 0.0)));
        }
        assert_eq!(fb.get_pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(fb.get_pixel(1, 0), Some(SOLID));

        let texture = two_texel_texture().with_ignore_alpha(true);
        let mut writer = TexturePixelWriter::new(&mut fb, &texture);
        assert!(writer.write_pixel(0, 0, 1.0, Vec2::new(0.0, 0.0)));
        assert_eq!(fb.get_pixel(0, 0), Some(CLEAR));
    }

    #[test]
    fn nearest_surface_wins() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);
        let texture = two_texel_texture();
        let mut writer = TexturePixelWriter::new(&mut fb, &texture);

        assert!(writer.write_pixel(2, 2, 8.0, Vec2::new(1.0, 0.0)));
        assert!(!writer.write_pixel(2, 2, 9.0, Vec2::new(1.0, 0.0)));
        assert!(writer.write_pixel(2, 2, 3.0, Vec2::new(1.0, 0.0)));
        assert_eq!(writer.written(), 2);
        assert_eq!(fb.get_depth(2, 2), Some(3.0));
    }
}
