use std::path::Path;

use crate::error::LoadError;
use crate::math::vec2::Vec2;

/// Represents a 2D texture for texture mapping.
///
/// Pixels are RGBA8, row-major, with the origin at the top-left.
#[derive(Debug, Clone)]
pub struct Texture {
    data: Vec<u8>,
    width: u32,
    height: u32,
    /// Draw texels even when their alpha is zero.
    ignore_alpha: bool,
}

impl Texture {
    /// Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let img = image::open(path.as_ref())?.to_rgba8();
        let (width, height) = img.dimensions();
        log::info!(
            "loaded texture {} ({}x{})",
            path.as_ref().display(),
            width,
            height
        );

        Ok(Self {
            data: img.into_raw(),
            width,
            height,
            ignore_alpha: false,
        })
    }

    /// Wraps an RGBA8 buffer of `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, LoadError> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize * 4 {
            return Err(LoadError::TextureSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            ignore_alpha: false,
        })
    }

    /// Square two-color checkerboard with `cell`-pixel squares.
    pub fn checkerboard(size: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let size = size.max(1);
        let cell = cell.max(1);
        let mut data = Vec::with_capacity(size as usize * size as usize * 4);
        for y in 0..size {
            for x in 0..size {
                let color = if (x / cell + y / cell) % 2 == 0 { a } else { b };
                data.extend_from_slice(&color);
            }
        }
        Self {
            data,
            width: size,
            height: size,
            ignore_alpha: false,
        }
    }

    /// Builder-style setter for [`Texture::ignores_alpha`].
    pub fn with_ignore_alpha(mut self, ignore_alpha: bool) -> Self {
        self.ignore_alpha = ignore_alpha;
        self
    }

    /// Whether fully transparent texels are still drawn.
    pub fn ignores_alpha(&self) -> bool {
        self.ignore_alpha
    }

    /// Whether a sampled texel should reach the framebuffer.
    #[inline]
    pub fn is_visible(&self, rgba: [u8; 4]) -> bool {
        rgba[3] > 0 || self.ignore_alpha
    }

    /// Raw texel access. Panics if `(x, y)` is outside the texture.
    #[inline]
    pub fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Sample the texture using nearest-neighbor filtering.
    ///
    /// Both coordinates are wrapped with [`wrap_coord`] first, then mapped
    /// to the nearest texel in `[0, width-1] x [0, height-1]`.
    #[inline]
    pub fn sample(&self, tex: Vec2) -> [u8; 4] {
        let u = wrap_coord(tex.x);
        let v = wrap_coord(tex.y);

        let x = (u * (self.width - 1) as f64).round() as u32;
        let y = (v * (self.height - 1) as f64).round() as u32;
        self.texel(x.min(self.width - 1), y.min(self.height - 1))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Wraps a texture coordinate into `[0, 1]`.
///
/// Values already inside `[0, 1]` are returned unchanged. Values outside keep
/// their fractional part, except whole numbers, which map to `1.0`.
#[inline]
pub fn wrap_coord(t: f64) -> f64 {
    if (0.0..=1.0).contains(&t) {
        return t;
    }
    let whole = t.floor();
    if whole == t {
        1.0
    } else {
        t - whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wrap_leaves_unit_range_alone() {
        for t in [0.0, 0.25, 0.5, 0.999, 1.0] {
            assert_eq!(wrap_coord(t), t);
        }
    }

    #[test]
    fn wrap_keeps_fraction_outside_range() {
        assert_relative_eq!(wrap_coord(-0.25), 0.75);
        assert_relative_eq!(wrap_coord(1.25), 0.25);
        assert_relative_eq!(wrap_coord(-3.5), 0.5);
        assert_relative_eq!(wrap_coord(7.125), 0.125);
    }

    #[test]
    fn wrap_whole_numbers_land_on_one() {
        assert_eq!(wrap_coord(-1.0), 1.0);
        assert_eq!(wrap_coord(-2.0), 1.0);
        assert_eq!(wrap_coord(2.0), 1.0);
        assert_eq!(wrap_coord(5.0), 1.0);
    }

    #[test]
    fn from_rgba_validates_length() {
        assert!(Texture::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Texture::from_rgba(2, 2, vec![0; 15]),
            Err(LoadError::TextureSize { len: 15, .. })
        ));
        assert!(Texture::from_rgba(0, 2, Vec::new()).is_err());
    }

    #[test]
    fn sample_rounds_to_nearest_texel() {
        // 3x1: red, green, blue
        let tex = Texture::from_rgba(
            3,
            1,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255],
        )
        .unwrap();
        assert_eq!(tex.sample(Vec2::new(0.0, 0.0)), [255, 0, 0, 255]);
        assert_eq!(tex.sample(Vec2::new(0.3, 0.0)), [0, 255, 0, 255]);
        assert_eq!(tex.sample(Vec2::new(1.0, 0.0)), [0, 0, 255, 255]);
        // 1.25 wraps to 0.25, which rounds to the middle texel
        assert_eq!(tex.sample(Vec2::new(1.25, 0.0)), [0, 255, 0, 255]);
    }

    #[test]
    fn visibility_honours_ignore_alpha() {
        let tex = Texture::checkerboard(2, 1, [0; 4], [0; 4]);
        assert!(!tex.is_visible([10, 10, 10, 0]));
        assert!(tex.is_visible([10, 10, 10, 1]));
        let tex = tex.with_ignore_alpha(true);
        assert!(tex.is_visible([10, 10, 10, 0]));
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let a = [255, 255, 255, 255];
        let b = [0, 0, 0, 255];
        let tex = Texture::checkerboard(4, 2, a, b);
        assert_eq!(tex.texel(0, 0), a);
        assert_eq!(tex.texel(2, 0), b);
        assert_eq!(tex.texel(2, 2), a);
        assert_eq!(tex.as_bytes().len(), 64);
    }
}
