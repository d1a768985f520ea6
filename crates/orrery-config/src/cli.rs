//! Command-line argument parsing for the orrery demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Hierarchical celestial scene demo")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of demo frames to step.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Sphere mesh resolution.
    #[arg(long)]
    pub sphere_resolution: Option<u32>,

    /// Camera movement speed in units per second.
    #[arg(long)]
    pub camera_speed: Option<f32>,

    /// Start with the simulation clock frozen.
    #[arg(long)]
    pub frozen: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(frames) = args.frames {
            self.demo.frames = frames;
        }
        if let Some(res) = args.sphere_resolution {
            self.scene.sphere_resolution = res;
        }
        if let Some(speed) = args.camera_speed {
            self.camera.speed = speed;
        }
        if args.frozen {
            self.scene.start_frozen = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
