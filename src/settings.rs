//! Game configuration
//!
//! Every layout and tuning number in one serde struct. Missing fields in a
//! config file fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f64,
    pub arena_height: f64,
    /// Thickness of the left, top and right walls and the death zone
    pub border_thickness: f64,

    // === Balls ===
    pub ball_count: u32,
    pub ball_radius: f64,
    /// Initial velocity (dx, dy) of every ball
    pub ball_velocity: (f64, f64),
    /// Seeded random rotation applied to each ball's launch, ± degrees
    pub launch_spread_degrees: f64,

    // === Paddle ===
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_speed: f64,
    /// y of the paddle's top edge
    pub paddle_y: f64,

    // === Blocks ===
    pub block_width: f64,
    pub block_height: f64,
    pub block_spacing_x: f64,
    pub block_spacing_y: f64,
    /// Upper-left corner of the first block in the pattern
    pub block_origin: (f64, f64),

    // === Scoring ===
    pub score_per_block: i64,
    /// Added once when every block is cleared
    pub clear_bonus: i64,

    /// Hard stop for the headless runner
    pub max_ticks: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            border_thickness: 25.0,

            ball_count: 3,
            ball_radius: 5.0,
            ball_velocity: (3.0, 3.0),
            launch_spread_degrees: 0.0,

            paddle_width: 125.0,
            paddle_height: 30.0,
            paddle_speed: 7.0,
            paddle_y: 560.0,

            block_width: 50.0,
            block_height: 25.0,
            block_spacing_x: 75.0,
            block_spacing_y: 35.0,
            block_origin: (25.0, 50.0),

            score_per_block: 5,
            clear_bonus: 100,

            max_ticks: 20_000,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config; absent fields take their default
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file, falling back to defaults if it is missing or invalid
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Invalid config {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read config {}: {}", path.display(), e),
        }

        log::info!("Using default config");
        Self::default()
    }
}
