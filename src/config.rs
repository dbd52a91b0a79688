// Optional user settings (~/.config/dot-mosaic/config.toml).
// Missing file or missing keys fall back to the defaults below.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::sampler::Divisor;
use crate::types::FigureKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial window size in pixels.
    pub window_width: usize,
    pub window_height: usize,
    /// Coarsest grid reachable with the pointer.
    pub max_step: u32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Zoom change per wheel notch.
    pub zoom_speed: f32,
    /// Camera movement per frame while a pan key is held (image pixels).
    pub pan_speed: f32,
    /// How many `_N` suffixes to try before an export gives up.
    pub export_attempts: u32,
    /// Where SVG files go; the desktop when unset.
    pub export_dir: Option<PathBuf>,
    /// Divisor used for tiles that hang over the image edge.
    pub edge_divisor: Divisor,
    /// Initial figure and toggles.
    pub figure: FigureKind,
    pub shift: bool,
    pub grayscale: bool,
    pub size_by_luminance: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 768,
            max_step: 50,
            min_radius: 1.0,
            max_radius: 25.0,
            min_zoom: 0.1,
            max_zoom: 3.0,
            zoom_speed: 0.05,
            pan_speed: 2.0,
            export_attempts: 100,
            export_dir: None,
            edge_divisor: Divisor::Nominal,
            figure: FigureKind::Circle,
            shift: true,
            grayscale: false,
            size_by_luminance: true,
        }
    }
}

impl Config {
    /// Parse TOML text; unknown keys are ignored, missing ones take defaults.
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Path to the config file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("dot-mosaic").join("config.toml"))
}

/// Load config from `path`; defaults only when the file is absent.
/// An unreadable file (permissions, invalid UTF-8, ...) is a config error.
pub fn load_config_from(path: &Path) -> Result<Config, Error> {
    match std::fs::read_to_string(path) {
        Ok(content) => Config::from_toml(path, &content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(Error::Config { path: path.to_path_buf(), message: e.to_string() }),
    }
}

/// Load the user's config, logging and falling back to defaults when it is unusable.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml(Path::new("config.toml"), "").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let text = r#"
            max_step = 31
            figure = "star"
            edge_divisor = "covered"
            export_dir = "/tmp/mosaics"
        "#;
        let config = Config::from_toml(Path::new("config.toml"), text).unwrap();
        assert_eq!(config.max_step, 31);
        assert_eq!(config.figure, FigureKind::Star);
        assert_eq!(config.edge_divisor, Divisor::Covered);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/mosaics")));
        assert_eq!(config.max_radius, 25.0);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let err = Config::from_toml(Path::new("bad.toml"), "max_step = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = load_config_from(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unreadable_file_is_a_config_error() {
        let dir = std::env::temp_dir().join(format!("dot-mosaic-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, b"max_step = 31\n\xff\xfe\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        match err {
            Error::Config { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn directory_instead_of_file_is_a_config_error() {
        let dir = std::env::temp_dir().join(format!("dot-mosaic-config-dir-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        assert!(matches!(load_config_from(&dir), Err(Error::Config { .. })));
    }
}
