//! Data-driven game balance
//!
//! All physics values are per simulation tick (60 Hz), in logical pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Physics and animation tuning shared by every character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to `vel.y` each tick
    pub gravity: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Hero horizontal speed while a direction is held
    pub player_speed: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_velocity: f32,
    /// Enemy patrol speed
    pub enemy_speed: f32,
    /// Horizontal speed above which a grounded character counts as moving
    pub move_threshold: f32,
    /// Ticks per frame of the idle animation
    pub idle_frame_ticks: u32,
    /// Ticks per frame of the move and jump animations
    pub active_frame_ticks: u32,
    /// How far below the screen the hero may fall before the run ends
    pub fall_margin: f32,
    pub hero_size: Vec2,
    pub enemy_size: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            max_fall_speed: 10.0,
            player_speed: 4.0,
            jump_velocity: -13.0,
            enemy_speed: 2.0,
            move_threshold: 0.5,
            idle_frame_ticks: 30,
            active_frame_ticks: 8,
            fall_margin: 50.0,
            hero_size: Vec2::new(32.0, 48.0),
            enemy_size: Vec2::new(36.0, 32.0),
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
