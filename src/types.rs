//! various types that are useful for working with the snake game
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SnakeError;
use crate::game_state::Snapshot;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x offset
    pub x: i32,
    /// y offset
    pub y: i32,
}

/// A single square of the grid. Two cells are the same cell when their
/// coordinates match.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Cell {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Cell {
    /// makes a new cell
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// the cell reached by moving by `v`, which may lie outside of any grid
    pub fn add_vec(&self, v: Vector) -> Cell {
        Cell {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }

    /// the neighbouring cell in the given direction
    pub fn in_direction(&self, d: Direction) -> Cell {
        self.add_vec(d.to_vector())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents a direction of travel. `y` grows downwards, so [Direction::Up]
/// decreases it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl Direction {
    /// convert this direction to a unit vector
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Left => Vector { x: -1, y: 0 },
            Direction::Right => Vector { x: 1, y: 0 },
            Direction::Up => Vector { x: 0, y: -1 },
            Direction::Down => Vector { x: 0, y: 1 },
        }
    }

    /// returns all four directions
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// the direction pointing the other way
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// checks if a given direction is not opposite this one. e.g. Up is not opposite to Left, but is opposite to Down
    pub fn is_not_opposite(&self, other: &Direction) -> bool {
        other.opposite() != *self
    }
}

impl FromStr for Direction {
    type Err = SnakeError;

    /// Accepts single letter tokens (`U`, `D`, `L`, `R`), the lowercase names
    /// and browser arrow key names. Anything else is an error rather than
    /// being dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" | "u" | "up" | "Up" | "ArrowUp" => Ok(Direction::Up),
            "D" | "d" | "down" | "Down" | "ArrowDown" => Ok(Direction::Down),
            "L" | "l" | "left" | "Left" | "ArrowLeft" => Ok(Direction::Left),
            "R" | "r" | "right" | "Right" | "ArrowRight" => Ok(Direction::Right),
            other => Err(SnakeError::InvalidDirection(other.to_string())),
        }
    }
}

/// What a single call to [crate::game_state::GameState::step] did
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// the snake moved one cell
    Moved,
    /// the snake moved onto the food, grew and new food was placed
    Ate,
    /// the snake left the grid and is now dead, its body did not move
    Died,
    /// the snake was already dead, nothing happened
    Idle,
}

impl StepOutcome {
    /// whether the state changed in a way a renderer should draw
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, StepOutcome::Idle)
    }
}

/// Answer a renderer gives to a game over notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    /// the player saw the game over, start a fresh game
    Restart,
    /// not acknowledged yet, ask again on the next tick
    Pending,
}

/// Receives the results of each tick. Implemented outside of this crate by
/// whatever draws the grid.
pub trait Renderer: std::fmt::Debug + Send + 'static {
    /// called after every step with the outcome and the state it produced
    fn render(&mut self, outcome: StepOutcome, snapshot: &Snapshot);

    /// called on every tick while the snake is dead
    fn game_over(&mut self, snapshot: &Snapshot) -> Acknowledgement;
}
