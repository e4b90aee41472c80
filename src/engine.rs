//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns
//! the frame buffers, the camera and the rasterizer, and turns world-space
//! triangle lists into textured pixels.

use std::path::Path;

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::render::{Rasterizer, Renderer, ScanlineRasterizer, TexturePixelWriter, Triangle};
use crate::texture::Texture;
use crate::triangle::WorldTriangle;

/// Counters for the frame in progress, reset by [`Engine::begin_frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Triangles submitted.
    pub triangles: u64,
    /// Triangles dropped for lying entirely behind the camera.
    pub culled: u64,
    /// Pixels that passed the depth test.
    pub pixels: u64,
}

pub struct Engine {
    renderer: Renderer,
    camera: Camera,
    rasterizer: ScanlineRasterizer,
    background: [u8; 4],
    stats: FrameStats,
}

impl Engine {
    pub fn new(config: &RenderConfig) -> Self {
        let mut renderer = Renderer::new(config.width, config.height);
        renderer.set_background(config.background);

        Self {
            renderer,
            camera: Camera::new(config.width, config.height, config.hfov_radians()),
            rasterizer: ScanlineRasterizer::new(),
            background: config.background,
            stats: FrameStats::default(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Resizes the buffers and the camera's projection together.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.renderer.set_background(self.background);
        self.camera.set_render_size(width, height);
    }

    pub fn set_background(&mut self, rgba: [u8; 4]) {
        self.background = rgba;
        self.renderer.set_background(rgba);
    }

    /// Clears color to the background and depth to +∞, and resets the stats.
    pub fn begin_frame(&mut self) {
        let s = self.stats;
        log::trace!(
            "frame: {} triangles, {} culled, {} pixels",
            s.triangles,
            s.culled,
            s.pixels
        );
        self.stats = FrameStats::default();
        self.renderer.begin_frame();
    }

    /// Draws world-space triangles through the current camera.
    pub fn draw_triangles(&mut self, triangles: &[WorldTriangle], texture: &Texture) {
        Self::rasterize(
            &mut self.renderer,
            &self.rasterizer,
            &mut self.stats,
            &self.camera,
            triangles,
            texture,
        );
    }

    /// Draws a mesh whose local space coincides with world space.
    pub fn draw_mesh(&mut self, mesh: &Mesh, texture: &Texture) {
        self.draw_triangles(mesh.triangles(), texture);
    }

    /// Draws a mesh placed at `origin` and rotated by `heading` radians about +Z.
    ///
    /// The mesh is not transformed; the camera is moved into the mesh's frame
    /// instead, and the scene camera is left untouched.
    pub fn draw_instance(&mut self, mesh: &Mesh, texture: &Texture, origin: Vec3, heading: f64) {
        let local = self.camera.in_object_frame(origin, heading);
        Self::rasterize(
            &mut self.renderer,
            &self.rasterizer,
            &mut self.stats,
            &local,
            mesh.triangles(),
            texture,
        );
    }

    /// Draws a mesh at `origin` turned to face the camera's heading.
    ///
    /// Meant for [`Mesh::upright_quad`] sprites.
    pub fn draw_billboard(&mut self, mesh: &Mesh, texture: &Texture, origin: Vec3) {
        let heading = self.camera.look_direction().azimuth;
        self.draw_instance(mesh, texture, origin, heading);
    }

    pub fn fade(&mut self, progress: f64) {
        self.renderer.fade(progress);
    }

    /// Returns the rendered frame as bytes (RGBA8)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    pub fn depth_buffer(&self) -> &[f64] {
        self.renderer.depth_buffer()
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn save_screenshot<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        self.renderer.save_png(path)
    }

    fn rasterize(
        renderer: &mut Renderer,
        rasterizer: &ScanlineRasterizer,
        stats: &mut FrameStats,
        camera: &Camera,
        triangles: &[WorldTriangle],
        texture: &Texture,
    ) {
        let mut buffer = renderer.as_framebuffer();
        let mut writer = TexturePixelWriter::new(&mut buffer, texture);

        for source in triangles {
            stats.triangles += 1;
            let projected = Triangle::project(source, camera);
            if !rasterizer.fill_triangle(&projected, &mut writer) {
                stats.culled += 1;
            }
        }
        stats.pixels += writer.written();
    }
}
