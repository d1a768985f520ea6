//! Headless orrery demo binary.
//!
//! Wires config, logging, mesh generation, and the scene context together,
//! then steps the simulation at a fixed delta for a configured number of
//! frames. Windowing and GPU submission belong to an external platform
//! layer; this binary stands in for it with a deterministic loop.

use clap::Parser;
use glam::Vec3;
use tracing::info;

use orrery_app::SceneContext;
use orrery_camera::FreeFlyCamera;
use orrery_config::{CliArgs, Config};
use orrery_input::InputIntents;
use orrery_mesh::{generate_cube, generate_ring, generate_sphere};
use orrery_scene::{Scene, presets};

fn main() {
    if let Err(e) = run() {
        eprintln!("orrery: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(Config::default_dir);
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(Some(&config));
    info!(config_dir = %config_dir.display(), "orrery starting");

    // Meshes are generated once; a renderer would upload these buffers now
    // and never touch them again.
    let sphere = generate_sphere(config.scene.sphere_resolution)?;
    info!(
        vertices = sphere.vertex_count(),
        triangles = sphere.triangle_count(),
        "sphere mesh ready"
    );

    let bodies = presets::solar_system();
    for body in &bodies {
        if let Some(ring) = body.ring {
            let mesh = generate_ring(
                ring.inner_radius,
                ring.outer_radius,
                config.scene.ring_resolution,
            )?;
            info!(
                body = %body.name,
                vertices = mesh.vertex_count(),
                triangles = mesh.triangle_count(),
                "ring mesh ready"
            );
        }
    }

    let sky = generate_cube();
    info!(vertices = sky.vertex_count(), "sky enclosure mesh ready");

    let scene = Scene::new(bodies)?;
    let mut camera = FreeFlyCamera::new();
    camera.set_speed(config.camera.speed);
    camera.set_sensitivity(config.camera.sensitivity);
    camera.set_projection(
        config.camera.fov,
        config.window.width as f32 / config.window.height as f32,
        config.camera.near,
        config.camera.far,
    )?;
    camera.set_position(Vec3::new(0.0, 0.0, config.camera.start_distance));

    let mut ctx = SceneContext::new(scene, camera, config.scene.start_frozen);
    let mut intents = InputIntents::new();

    for frame in 0..config.demo.frames {
        let state = ctx.frame(&intents, config.demo.fixed_dt)?;
        intents.clear_transients();

        if frame % 60 == 0 {
            for body in &state.bodies {
                info!(
                    frame,
                    t = ctx.clock().elapsed(),
                    body = %body.name,
                    x = body.model[12],
                    y = body.model[13],
                    z = body.model[14],
                    "pose"
                );
            }
        }
    }

    info!(
        frames = config.demo.frames,
        simulated = ctx.clock().elapsed(),
        "demo complete"
    );
    Ok(())
}
