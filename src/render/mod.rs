//! Rendering pipeline: frame storage, rasterization and pixel output.

pub mod framebuffer;
pub mod pixel;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::FrameBuffer;
pub use pixel::TexturePixelWriter;
pub use rasterizer::{
    FlatTriangle, PixelWriter, Rasterizer, ScanlineRasterizer, Split, Triangle, Vertex,
};
pub use renderer::Renderer;
