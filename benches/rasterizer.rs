use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rave3d::bench::{FrameBuffer, Rasterizer, ScanlineRasterizer, TexturePixelWriter, Triangle};
use rave3d::math::vec2::Vec2;
use rave3d::math::vec3::Vec3;
use rave3d::{Engine, Mesh, RenderConfig, Texture};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffers() -> (Vec<u8>, Vec<f64>) {
    let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
    (vec![0u8; size * 4], vec![f64::INFINITY; size])
}

fn texture() -> Texture {
    Texture::checkerboard(64, 8, [255, 255, 255, 255], [255, 0, 0, 255])
}

fn triangle(points: [(f64, f64, f64); 3]) -> Triangle {
    Triangle::from_screen(
        points.map(|(x, y, z)| Vec3::new(x, y, z)),
        [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)],
    )
}

fn small_triangle() -> Triangle {
    triangle([(100.0, 100.0, 5.0), (120.0, 100.0, 6.0), (110.0, 120.0, 7.0)])
}

fn medium_triangle() -> Triangle {
    triangle([(100.0, 100.0, 5.0), (300.0, 100.0, 20.0), (200.0, 300.0, 40.0)])
}

fn large_triangle() -> Triangle {
    triangle([(50.0, 50.0, 5.0), (750.0, 100.0, 50.0), (400.0, 550.0, 200.0)])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();
    let texture = texture();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                depth.fill(f64::INFINITY);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                let mut writer = TexturePixelWriter::new(&mut fb, &texture);
                scanline.fill_triangle(black_box(tri), &mut writer);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let scanline = ScanlineRasterizer::new();
    let texture = texture();

    // Generate a grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f64 * 40.0;
                let y = row as f64 * 30.0;
                triangle([
                    (x, y, 10.0),
                    (x + 35.0, y, 12.0),
                    (x + 17.5, y + 25.0, 14.0),
                ])
            })
        })
        .collect();

    group.bench_function("scanline_400_triangles", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            depth.fill(f64::INFINITY);
            let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
            let mut writer = TexturePixelWriter::new(&mut fb, &texture);
            for tri in &triangles {
                scanline.fill_triangle(black_box(tri), &mut writer);
            }
        });
    });

    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let mut engine = Engine::new(&RenderConfig::default());
    engine
        .camera_mut()
        .set_position(Vec3::new(-120.0, 30.0, 40.0));
    engine.camera_mut().look_at(Vec3::ZERO);
    let cube = Mesh::cube(30.0);
    let texture = texture();

    c.bench_function("frame_cube_800x600", |b| {
        b.iter(|| {
            engine.begin_frame();
            engine.draw_mesh(black_box(&cube), &texture);
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_frame
);
criterion_main!(benches);
