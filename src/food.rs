//! the single piece of food on the grid
use fxhash::FxHashSet;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SnakeError;
use crate::grid::Grid;
use crate::types::Cell;

/// Food sitting on one cell, growing the snake by `value` when eaten
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Food {
    cell: Cell,
    value: u32,
}

impl Food {
    /// makes food at a known cell
    pub fn new(cell: Cell, value: u32) -> Self {
        Food { cell, value }
    }

    /// places new food on a random cell outside of `occupied`.
    /// A full grid yields [SnakeError::NoSpace].
    pub fn spawn(
        grid: &Grid,
        occupied: &FxHashSet<Cell>,
        value: u32,
        rng: &mut impl Rng,
    ) -> Result<Food, SnakeError> {
        let cell = grid.random_empty_cell(occupied, rng)?;
        Ok(Food::new(cell, value))
    }

    #[allow(missing_docs)]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// how much the snake grows when eating this
    pub fn value(&self) -> u32 {
        self.value
    }
}
