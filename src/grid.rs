//! the square playing field
use fxhash::FxHashSet;
use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SnakeError;
use crate::types::Cell;

/// A square grid of `size` by `size` cells. It has no state besides its size,
/// what sits on the grid is tracked by the snake and the food.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    size: u32,
}

impl Grid {
    /// makes a grid `size` cells wide and high
    pub fn new(size: u32) -> Self {
        Grid { size }
    }

    /// width (and height) of the grid
    pub fn size(&self) -> u32 {
        self.size
    }

    /// number of cells in the grid
    pub fn area(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// true iff the cell lies on the grid
    pub fn contains(&self, cell: Cell) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(cell.x as i64)) && (0..size).contains(&(cell.y as i64))
    }

    /// every cell of the grid, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
    }

    /// picks a cell uniformly among the cells not in `occupied`
    pub fn random_empty_cell(
        &self,
        occupied: &FxHashSet<Cell>,
        rng: &mut impl Rng,
    ) -> Result<Cell, SnakeError> {
        self.cells()
            .filter(|c| !occupied.contains(c))
            .choose(rng)
            .ok_or(SnakeError::NoSpace)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn test_contains_bounds() {
        let grid = Grid::new(40);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(39, 39)));
        assert!(!grid.contains(Cell::new(40, 0)));
        assert!(!grid.contains(Cell::new(0, 40)));
        assert!(!grid.contains(Cell::new(-1, 5)));
        assert!(!grid.contains(Cell::new(5, -1)));
    }

    #[test]
    fn test_cells_cover_grid() {
        let grid = Grid::new(3);
        let cells = grid.cells().collect_vec();
        assert_eq!(cells.len(), grid.area());
        assert!(cells.iter().all(|c| grid.contains(*c)));
        assert_eq!(cells.iter().unique().count(), 9);
    }

    #[test]
    fn test_random_empty_cell_avoids_occupied() {
        let grid = Grid::new(3);
        let occupied: FxHashSet<Cell> = grid.cells().filter(|c| *c != Cell::new(2, 1)).collect();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                grid.random_empty_cell(&occupied, &mut rng),
                Ok(Cell::new(2, 1))
            );
        }
    }

    #[test]
    fn test_random_empty_cell_is_reproducible() {
        let grid = Grid::new(40);
        let occupied = FxHashSet::default();
        let a = grid.random_empty_cell(&occupied, &mut SmallRng::seed_from_u64(42));
        let b = grid.random_empty_cell(&occupied, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_empty_cell_full_grid() {
        let grid = Grid::new(2);
        let occupied: FxHashSet<Cell> = grid.cells().collect();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            grid.random_empty_cell(&occupied, &mut rng),
            Err(SnakeError::NoSpace)
        );
    }
}
