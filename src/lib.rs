#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Game logic for single player grid snake.
//! A snake moves across a square grid one cell per tick, grows by eating the
//! one piece of food on the grid and dies when it leaves the grid. Running
//! into its own body is allowed.
//!
//! [game_state::GameState] holds one game and advances it with
//! [game_state::GameState::step]. [game_loop::GameLoop] calls `step` on a
//! fixed period and hands every outcome to a [types::Renderer]. Drawing the
//! grid and reading the keyboard are left to the embedding program, which
//! talks to the game through [game_state::Snapshot]s and
//! [game_state::GameState::steer].
//!
//! ```
//! use grid_snake::{config::GameConfig, game_state::GameState, types::StepOutcome};
//!
//! let mut game = GameState::seeded(GameConfig::default(), 7).unwrap();
//! let outcome = game.step().unwrap();
//! assert!(matches!(outcome, StepOutcome::Moved | StepOutcome::Ate));
//! println!("{}", game);
//! ```

pub mod config;
pub mod error;
pub mod food;
pub mod game_loop;
pub mod game_state;
pub mod grid;
pub mod snake;
pub mod types;

pub use config::GameConfig;
pub use error::SnakeError;
pub use game_loop::GameLoop;
pub use game_state::{GameState, Snapshot};
pub use types::{Acknowledgement, Cell, Direction, Renderer, StepOutcome};

/// Loads a config from a JSON string, falling back to the defaults for
/// missing fields
pub fn config_fixture(config: &str) -> GameConfig {
    let c: Result<GameConfig, _> = GameConfig::from_json(config);
    c.expect("the json literal is valid")
}
