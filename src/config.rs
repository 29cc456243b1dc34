//! game configuration
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::SnakeError;
use crate::grid::Grid;
use crate::types::{Cell, Direction};

/// Settings for a game. Every field has a default, so a partial JSON
/// document only needs the fields it wants to change:
///
/// ```
/// # use grid_snake::config::GameConfig;
/// let config = GameConfig::from_json(r#"{"grid_size": 20, "tick_ms": 100}"#).unwrap();
/// assert_eq!(config.grid_size, 20);
/// assert_eq!(config.food_value, 1);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// width and height of the grid
    pub grid_size: u32,
    /// milliseconds between ticks
    pub tick_ms: u64,
    /// growth granted by every piece of food
    pub food_value: u32,
    /// target length of a new snake
    pub initial_length: u32,
    /// cell a new snake starts on
    pub start: Cell,
    /// direction a new snake starts moving in
    pub initial_direction: Direction,
}

/// grid size of the classic game
pub const DEFAULT_GRID_SIZE: u32 = 40;
/// tick period of the classic game
pub const DEFAULT_TICK_MS: u64 = 150;
/// growth per food of the classic game
pub const DEFAULT_FOOD_VALUE: u32 = 1;

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: DEFAULT_GRID_SIZE,
            tick_ms: DEFAULT_TICK_MS,
            food_value: DEFAULT_FOOD_VALUE,
            initial_length: 1,
            start: Cell::new(0, 0),
            initial_direction: Direction::Right,
        }
    }
}

impl GameConfig {
    /// parses and validates a JSON config
    pub fn from_json(json: &str) -> Result<Self, SnakeError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// checks the settings describe a playable game
    pub fn validate(&self) -> Result<(), SnakeError> {
        if self.grid_size == 0 {
            return Err(SnakeError::InvalidConfig(
                "grid_size must be at least 1".to_string(),
            ));
        }
        if self.grid_size > i32::MAX as u32 {
            return Err(SnakeError::InvalidConfig(format!(
                "grid_size {} is too large",
                self.grid_size
            )));
        }
        if self.tick_ms == 0 {
            return Err(SnakeError::InvalidConfig(
                "tick_ms must be at least 1".to_string(),
            ));
        }
        if self.food_value == 0 {
            return Err(SnakeError::InvalidConfig(
                "food_value must be at least 1".to_string(),
            ));
        }
        if self.initial_length == 0 {
            return Err(SnakeError::InvalidConfig(
                "initial_length must be at least 1".to_string(),
            ));
        }
        if !self.grid().contains(self.start) {
            return Err(SnakeError::InvalidConfig(format!(
                "start {} is outside of a {}x{} grid",
                self.start, self.grid_size, self.grid_size
            )));
        }
        Ok(())
    }

    /// the grid described by this config
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    /// time between two ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 40);
        assert_eq!(config.tick_period(), Duration::from_millis(150));
        assert_eq!(config.start, Cell::new(0, 0));
        assert_eq!(config.initial_direction, Direction::Right);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json(r#"{"start": {"x": 5, "y": 6}, "initial_direction": "Up"}"#)
                .unwrap();
        assert_eq!(config.start, Cell::new(5, 6));
        assert_eq!(config.initial_direction, Direction::Up);
        assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_rejects_start_outside_grid() {
        let result = GameConfig::from_json(r#"{"grid_size": 5, "start": {"x": 5, "y": 0}}"#);
        assert!(matches!(result, Err(SnakeError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_values() {
        for json in [
            r#"{"grid_size": 0}"#,
            r#"{"tick_ms": 0}"#,
            r#"{"food_value": 0}"#,
            r#"{"initial_length": 0}"#,
        ] {
            assert!(
                matches!(GameConfig::from_json(json), Err(SnakeError::InvalidConfig(_))),
                "{} should be rejected",
                json
            );
        }
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            GameConfig::from_json("{grid_size"),
            Err(SnakeError::ConfigParse(_))
        ));
    }
}
