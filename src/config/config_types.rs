// src/config/config_types.rs
//
// Config types for the app

use crate::animation::EasingType;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoardConfig {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: f32,
    pub piece_rows: u32, // rows filled with pieces on each side
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 8,
            cell_size: 1.0,
            piece_rows: 3,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone)]
pub struct MovementConfig {
    pub velocity: f32,    // board units per second
    pub hop_height: f32,  // peak of the arc on a plain move
    pub lift_height: f32, // travel height of a capturing jump
    #[serde(default = "default_easing")]
    pub easing: EasingType,
}

fn default_easing() -> EasingType {
    EasingType::EaseInOut
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            velocity: 2.5,
            hop_height: 0.3,
            lift_height: 0.8,
            easing: default_easing(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
        }
    }
}
