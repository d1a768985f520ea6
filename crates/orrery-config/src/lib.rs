//! Configuration for the orrery demo.
//!
//! Settings persist to disk as a RON file and can be overridden per run from
//! the command line. Unknown or missing fields fall back to defaults, so the
//! file stays forward and backward compatible.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DebugConfig, DemoConfig, SceneConfig, WindowConfig};
pub use error::ConfigError;
