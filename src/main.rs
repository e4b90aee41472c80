use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use rave3d::prelude::*;

const WINDOW_TITLE: &str = "rave3d";
const BILLBOARD_RING_RADIUS: f64 = 140.0;
const BILLBOARD_COUNT: usize = 6;
const SCREENSHOT_PATH: &str = "screenshot.png";

fn load_config() -> Result<DemoConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => DemoConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(DemoConfig::default()),
    }
}

fn load_mesh(config: &DemoConfig) -> Result<Mesh> {
    match &config.mesh {
        Some(path) => Mesh::from_obj(path, config.mesh_scale)
            .with_context(|| format!("loading mesh {}", path.display())),
        None => Ok(Mesh::cube(config.mesh_scale * 2.0)),
    }
}

fn load_texture(config: &DemoConfig) -> Result<Texture> {
    let texture = match &config.texture {
        Some(path) => Texture::from_file(path)
            .with_context(|| format!("loading texture {}", path.display()))?,
        None => Texture::checkerboard(64, 8, [230, 230, 230, 255], [200, 40, 60, 255]),
    };
    Ok(texture.with_ignore_alpha(config.ignore_alpha))
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    let mesh = load_mesh(&config)?;
    let texture = load_texture(&config)?;

    // Transparent cells show the alpha test on the sprites.
    let sprite = Mesh::upright_quad(12.0, 12.0, 12.0);
    let sprite_texture = Texture::checkerboard(32, 8, [250, 200, 40, 255], [0, 0, 0, 0]);
    let ground = Mesh::ground_quad(300.0, 300.0, -config.mesh_scale * 2.0);
    let ground_texture = Texture::checkerboard(256, 16, [70, 90, 70, 255], [50, 60, 50, 255]);

    let render = &config.render;
    let mut window = Window::new(WINDOW_TITLE, render.width, render.height).map_err(|e| anyhow!(e))?;
    window.capture_mouse(true);

    let mut engine = Engine::new(render);
    let orbit = OrbitController::new(
        config.look_sensitivity,
        config.orbit_distance,
        config.min_camera_height,
    );
    let target = Vec3::ZERO;
    engine
        .camera_mut()
        .set_position(Vec3::new(-config.orbit_distance, 0.0, config.orbit_distance / 4.0));
    engine.camera_mut().look_at(target);

    let mut limiter = FrameLimiter::new(&window, render.target_fps);
    let mut elapsed_ms = 0.0;

    loop {
        let input = window.poll_events();
        if input.quit {
            break;
        }
        if let Some((width, height)) = input.resized {
            window.resize(width, height).map_err(|e| anyhow!(e))?;
            engine.resize(width, height);
        }

        let delta_ms = limiter.wait_and_get_delta(&window) as f64;
        elapsed_ms += delta_ms;

        if input.wheel != 0 {
            engine.camera_mut().zoom(-0.1 * input.wheel as f64);
        }
        if let Some(period) = config.fov_pulse_ms {
            engine.camera_mut().set_hfov(fov_pulse(elapsed_ms, period));
        }
        orbit.update(engine.camera_mut(), target, input.mouse_delta, delta_ms);

        engine.begin_frame();
        engine.draw_mesh(&ground, &ground_texture);
        engine.draw_mesh(&mesh, &texture);
        for i in 0..BILLBOARD_COUNT {
            let angle = i as f64 / BILLBOARD_COUNT as f64 * std::f64::consts::TAU;
            let origin = Vec3::new(angle.cos(), angle.sin(), 0.0) * BILLBOARD_RING_RADIUS;
            engine.draw_billboard(&sprite, &sprite_texture, origin);
        }

        if input.screenshot {
            if let Err(err) = engine.save_screenshot(SCREENSHOT_PATH) {
                log::error!("screenshot failed: {}", err);
            }
        }

        window.present(engine.frame_buffer()).map_err(|e| anyhow!(e))?;
    }

    Ok(())
}
