//! Game configuration
//!
//! One immutable [`GameConfig`] value is built at startup and passed by
//! reference into the simulation. There is no global settings state.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tunable game parameters, fixed for the lifetime of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Play field size
    pub field_width: f32,
    pub field_height: f32,

    /// Block layout: rows of per-column tier numbers. A value of `n` builds
    /// a block with `n * 100` health and visual tier `2n`; `0` leaves the
    /// cell empty.
    pub layout: Vec<Vec<u32>>,
    /// Drop-eligibility threshold: a uniform draw from `0..=10` strictly
    /// above this marks a block as carrying an upgrade (7 -> 3/11 chance)
    pub drop_threshold: u32,
    /// Damage dealt per ball or laser hit
    pub damage: i32,

    /// Paddle movement per tick
    pub paddle_speed: f32,
    /// Starting hit points
    pub paddle_hearts: u32,
    /// Wall-clock laser cooldown in milliseconds
    pub laser_cooldown_ms: u64,
    /// Ammo granted by each laser pickup after the first (unlocking) one
    pub laser_ammo_per_pickup: u32,

    /// Ball launch velocity per tick
    pub ball_velocity: Vec2,
    /// Contact tolerance used by side classification (the ball's radius)
    pub ball_radius: f32,

    /// Target simulation rate in ticks per second
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 1280.0,
            field_height: 800.0,
            layout: default_layout(),
            drop_threshold: 7,
            damage: 50,
            paddle_speed: 5.0,
            paddle_hearts: 3,
            laser_cooldown_ms: 2000,
            laser_ammo_per_pickup: 10,
            ball_velocity: Vec2::new(2.0, -2.0),
            ball_radius: 0.25 * 128.0 / 2.0,
            tick_rate: 60,
        }
    }
}

/// Ten rows of ten columns, in pairs of equal tiers from 5 down to 1
fn default_layout() -> Vec<Vec<u32>> {
    (0..10).map(|row| vec![5 - row / 2; 10]).collect()
}

impl GameConfig {
    /// Load a config from a JSON file, falling back to defaults on any
    /// failure. Missing or malformed files must never stop a game from
    /// starting.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read config {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON (handy for producing a template)
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Number of block columns in the widest layout row
    pub fn layout_cols(&self) -> usize {
        self.layout.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_paired_rows() {
        let layout = default_layout();
        assert_eq!(layout.len(), 10);
        for (row, values) in layout.iter().enumerate() {
            assert_eq!(values.len(), 10);
            for &v in values {
                assert_eq!(v, 5 - row as u32 / 2);
            }
        }
    }

    #[test]
    fn save_then_load_round_trips_through_a_file() {
        let path = std::env::temp_dir().join("brickfall_config_roundtrip.json");
        let mut config = GameConfig::default();
        config.paddle_speed = 7.5;
        config.layout = vec![vec![1, 2], vec![3, 4, 5]];
        config.save(&path).unwrap();

        let loaded = GameConfig::load(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.paddle_speed, config.paddle_speed);
        assert_eq!(loaded.layout, config.layout);
        assert_eq!(loaded.layout_cols(), 3);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.field_width, config.field_width);
        assert_eq!(back.layout, config.layout);
        assert_eq!(back.ball_velocity, config.ball_velocity);
    }
}
