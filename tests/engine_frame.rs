use rave3d::prelude::*;

const BACKGROUND: [u8; 4] = [1, 2, 3, 255];

fn small_config() -> RenderConfig {
    RenderConfig {
        width: 96,
        height: 72,
        hfov_degrees: 90.0,
        target_fps: 60,
        background: BACKGROUND,
    }
}

fn orbiting_engine(azimuth_steps: i32) -> Engine {
    let mut engine = Engine::new(&small_config());
    let orbit = OrbitController::new(1e-3, 120.0, -5.0);
    engine.camera_mut().set_position(Vec3::new(-120.0, 0.0, 30.0));
    engine.camera_mut().look_at(Vec3::ZERO);
    orbit.update(engine.camera_mut(), Vec3::ZERO, (azimuth_steps, 0), 16.0);
    engine
}

#[test]
fn cube_is_visible_from_every_orbit_angle() {
    let cube = Mesh::cube(20.0);
    let texture = Texture::checkerboard(16, 4, [255; 4], [200, 0, 0, 255]);

    for steps in [0, 40, 90, 150, 260] {
        let mut engine = orbiting_engine(steps);
        engine.begin_frame();
        engine.draw_mesh(&cube, &texture);

        let stats = engine.stats();
        assert_eq!(stats.triangles, 12);
        assert_eq!(stats.culled, 0);
        assert!(stats.pixels > 0);

        let (w, h) = engine.camera().render_size();
        let centre = engine.renderer().pixel(w / 2, h / 2).unwrap();
        assert_ne!(centre, BACKGROUND, "orbit step {steps}");

        // The centre ray hits the near face, about 100 units out.
        let depth = engine.depth_buffer()[(h / 2 * w + w / 2) as usize];
        assert!(depth > 80.0 && depth < 120.0, "depth {depth}");
    }
}

#[test]
fn untouched_pixels_keep_background_and_infinite_depth() {
    let mut engine = orbiting_engine(0);
    engine.begin_frame();
    engine.draw_mesh(&Mesh::cube(5.0), &Texture::checkerboard(8, 2, [255; 4], [0, 0, 0, 255]));

    assert_eq!(engine.renderer().pixel(0, 0), Some(BACKGROUND));
    assert!(engine.depth_buffer()[0].is_infinite());
}

#[test]
fn screenshot_matches_frame_buffer() {
    let mut engine = orbiting_engine(30);
    engine.begin_frame();
    engine.draw_mesh(&Mesh::cube(20.0), &Texture::checkerboard(16, 4, [255; 4], [0, 0, 200, 255]));

    let path = std::env::temp_dir().join(format!("rave3d_shot_{}.png", std::process::id()));
    engine.save_screenshot(&path).unwrap();
    let image = Texture::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!((image.width(), image.height()), (96, 72));
    assert_eq!(image.as_bytes(), engine.frame_buffer());
}
