//! errors produced by the game state and the loop driving it
use thiserror::Error;

use crate::types::Cell;

/// Everything that can go wrong while running a game.
///
/// Hitting a wall is not in here: a dead snake is a normal game state, see
/// [crate::types::StepOutcome::Died].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnakeError {
    /// every cell of the grid is covered by the snake, food has nowhere to go
    #[error("no empty cell left on the grid to place food")]
    NoSpace,
    /// a direction token that does not name one of the four directions
    #[error("unknown direction: {0:?}")]
    InvalidDirection(String),
    /// configuration rejected by [crate::config::GameConfig::validate]
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// configuration could not be parsed
    #[error("could not parse configuration: {0}")]
    ConfigParse(String),
    /// food was placed outside of the grid
    #[error("cell {0} is outside of the grid")]
    OutOfBounds(Cell),
    /// food was placed on top of the snake
    #[error("cell {0} is occupied by the snake")]
    OccupiedCell(Cell),
    /// the loop task stopped without returning a result
    #[error("game loop aborted: {0}")]
    LoopAborted(String),
}

impl From<serde_json::Error> for SnakeError {
    fn from(e: serde_json::Error) -> Self {
        SnakeError::ConfigParse(e.to_string())
    }
}
