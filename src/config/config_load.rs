// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::config_types::{BoardConfig, LoggingConfig, MovementConfig, WindowConfig};
use crate::error::Result;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_path("config.toml")
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            Self::load_from_path(&config_path).ok()
        } else {
            None
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingType;
    use crate::error::BoardvisError;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            [window]
            width = 640
            height = 480

            [board]
            columns = 10
            rows = 10
            cell_size = 2.0
            piece_rows = 4

            [movement]
            velocity = 4.0
            hop_height = 0.5
            lift_height = 1.0
            easing = "ease_out"

            [logging]
            default_filter = "debug"
        "#;

        let config = Config::from_toml(content).unwrap();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.board.columns, 10);
        assert_eq!(config.board.piece_rows, 4);
        assert_eq!(config.movement.velocity, 4.0);
        assert_eq!(config.movement.easing, EasingType::EaseOut);
        assert_eq!(config.logging.default_filter, "debug");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml("[window]\nwidth = 100\nheight = 100\n").unwrap();
        assert_eq!(config.window.width, 100);
        assert_eq!(config.board.columns, 8);
        assert_eq!(config.movement.easing, EasingType::EaseInOut);
    }

    #[test]
    fn test_missing_easing_matches_default_movement() {
        let content = "[movement]\nvelocity = 3.0\nhop_height = 0.2\nlift_height = 0.6\n";
        let config = Config::from_toml(content).unwrap();
        assert_eq!(config.movement.easing, MovementConfig::default().easing);
        assert_eq!(config.movement.easing, EasingType::EaseInOut);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = Config::from_toml("[board]\ncolumns = \"eight\"\n");
        assert!(matches!(result, Err(BoardvisError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Config::load_from_path("does/not/exist/config.toml");
        assert!(matches!(result, Err(BoardvisError::Io(_))));
    }
}
