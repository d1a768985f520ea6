//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// Top-level demo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings (consumed by the platform layer).
    pub window: WindowConfig,
    /// Free-fly camera tunables.
    pub camera: CameraConfig,
    /// Scene and mesh settings.
    pub scene: SceneConfig,
    /// Headless demo loop settings.
    pub demo: DemoConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration, handed to the external platform layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Free-fly camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Movement speed in scene units per second.
    pub speed: f32,
    /// Mouse look sensitivity in degrees per pixel.
    pub sensitivity: f32,
    /// Initial field of view in degrees.
    pub fov: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Initial camera distance from the scene origin along +Z.
    pub start_distance: f32,
}

/// Scene and mesh-generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Latitude/longitude resolution of the shared sphere mesh.
    pub sphere_resolution: u32,
    /// Angular resolution of ring meshes.
    pub ring_resolution: u32,
    /// Start with the simulation clock frozen.
    pub start_frozen: bool,
}

/// Headless demo loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of frames to step before exiting.
    pub frames: u64,
    /// Fixed per-frame delta in seconds.
    pub fixed_dt: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            title: "Orrery".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            sensitivity: 0.1,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            start_distance: 30.0,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sphere_resolution: 32,
            ring_resolution: 64,
            start_frozen: false,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            fixed_dt: 1.0 / 60.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: String::new(),
        }
    }
}

impl Config {
    /// The default config directory (`<platform config dir>/orrery`), or the
    /// current directory when the platform reports none.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("orrery")
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            info!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            info!("created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        let config = Config::default();
        assert!(config.camera.near > 0.0 && config.camera.near < config.camera.far);
        assert!(config.scene.sphere_resolution >= 1);
        assert!(config.scene.ring_resolution >= 3);
        assert!(config.demo.fixed_dt > 0.0);
    }

    #[test]
    fn test_roundtrip_through_ron() {
        let config = Config::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        let back: Config = ron::from_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: Config = ron::from_str("(scene: (sphere_resolution: 8))").unwrap();
        assert_eq!(parsed.scene.sphere_resolution, 8);
        assert_eq!(parsed.window, WindowConfig::default());
        assert_eq!(parsed.camera, CameraConfig::default());
    }

    #[test]
    fn test_load_or_create_writes_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let created = Config::load_or_create(dir.path()).unwrap();
        assert!(dir.path().join("config.ron").exists());

        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(created, loaded);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "not ron {").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
