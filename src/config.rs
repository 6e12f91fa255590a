//! Tunable game parameters.
//!
//! Defaults come from [`crate::constants`]. A JSON file can override any
//! subset of them; keys that are absent keep their default.

use crate::constants::*;
use crate::error::GameError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Physics, spawning and pacing parameters for one game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Downward acceleration added to the bird's velocity every tick.
    pub gravity: f64,
    /// Velocity the bird is set to on a jump (negative = upward).
    pub jump_velocity: f64,
    /// Horizontal pipe displacement per tick (negative = leftward).
    pub pipe_velocity: i32,
    /// Inclusive range for the gap between the pipes of one pair.
    pub gap_range: (i32, i32),
    /// Inclusive range for the time between two spawns, in milliseconds.
    pub interval_range_ms: (u64, u64),
    /// Inclusive range for the top pipe's y coordinate.
    pub top_y_range: (i32, i32),
    /// Fixed simulation rate.
    pub tick_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            pipe_velocity: PIPE_VELOCITY,
            gap_range: PIPE_GAP_RANGE,
            interval_range_ms: PIPE_INTERVAL_RANGE_MS,
            top_y_range: TOP_PIPE_Y_RANGE,
            tick_hz: TICK_RATE_HZ,
        }
    }
}

impl GameConfig {
    /// Load overrides from a JSON file and validate the result.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig =
            serde_json::from_str(&json).map_err(|source| GameError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.gap_range.0 > self.gap_range.1 {
            return Err(GameError::InvalidConfig(format!(
                "gap_range min {} exceeds max {}",
                self.gap_range.0, self.gap_range.1
            )));
        }
        if self.interval_range_ms.0 > self.interval_range_ms.1 {
            return Err(GameError::InvalidConfig(format!(
                "interval_range_ms min {} exceeds max {}",
                self.interval_range_ms.0, self.interval_range_ms.1
            )));
        }
        if self.top_y_range.0 > self.top_y_range.1 {
            return Err(GameError::InvalidConfig(format!(
                "top_y_range min {} exceeds max {}",
                self.top_y_range.0, self.top_y_range.1
            )));
        }
        if self.tick_hz == 0 || self.tick_hz > MAX_TICK_RATE_HZ {
            return Err(GameError::InvalidConfig(format!(
                "tick_hz must be between 1 and {}, got {}",
                MAX_TICK_RATE_HZ, self.tick_hz
            )));
        }
        if self.pipe_velocity >= 0 {
            return Err(GameError::InvalidConfig(format!(
                "pipe_velocity must move pipes left (negative), got {}",
                self.pipe_velocity
            )));
        }
        Ok(())
    }

    /// Duration of one simulation tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.tick_hz as u64)
    }
}
