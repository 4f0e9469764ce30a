//! Gameplay tuning loaded at startup.
//!
//! Every field defaults to the matching constant, so a config file only
//! needs the values it overrides.

use crate::constants::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of actor slots
    pub actor_capacity: usize,
    /// Player walking speed in world units per second
    pub player_speed: f32,
    pub player_health: i32,
    /// Enemy pursuit speed in world units per second
    pub enemy_speed: f32,
    pub enemy_health: i32,
    /// Speed added to a struck actor along the hit direction
    pub knockback_speed: f32,
    /// Seconds of immunity after a non-lethal hit
    pub iframe_duration: f32,
    /// Longest step a single frame may simulate
    pub max_frame_dt: f32,
    pub min_room_monsters: u32,
    pub max_room_monsters: u32,
    /// Fixed seed for room generation; random when absent
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            actor_capacity: ACTOR_CAPACITY,
            player_speed: PLAYER_SPEED,
            player_health: PLAYER_STARTING_HEALTH,
            enemy_speed: SKELETON_SPEED,
            enemy_health: SKELETON_HEALTH,
            knockback_speed: KNOCKBACK_SPEED,
            iframe_duration: IFRAME_DURATION,
            max_frame_dt: MAX_FRAME_DT,
            min_room_monsters: MIN_ROOM_MONSTERS,
            max_room_monsters: MAX_ROOM_MONSTERS,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json_str)
    }

    pub fn from_json_str(json_str: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actor_capacity == 0 {
            return Err(ConfigError::Invalid("actor_capacity must be at least 1"));
        }
        if self.min_room_monsters > self.max_room_monsters {
            return Err(ConfigError::Invalid("min_room_monsters exceeds max_room_monsters"));
        }
        if self.max_room_monsters as usize > MONSTER_SPAWN_POINTS.len() {
            return Err(ConfigError::Invalid("more monsters than spawn points"));
        }
        if self.max_frame_dt <= 0.0 || self.iframe_duration <= 0.0 {
            return Err(ConfigError::Invalid("durations must be positive"));
        }
        if self.player_health <= 0 || self.enemy_health <= 0 {
            return Err(ConfigError::Invalid("health must be positive"));
        }
        Ok(())
    }
}
