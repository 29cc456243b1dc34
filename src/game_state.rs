//! the state of a running game and the step that advances it
use fxhash::FxHashSet;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument, trace};

use crate::config::GameConfig;
use crate::error::SnakeError;
use crate::food::Food;
use crate::grid::Grid;
use crate::snake::Snake;
use crate::types::{Cell, Direction, StepOutcome};

/// One running game: the grid, the snake and its food.
///
/// Games are plain values, any number of them can exist side by side. The
/// random source used for food placement is a type parameter so tests can
/// pin it down.
#[derive(Debug, Clone)]
pub struct GameState<R = SmallRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    turn: u64,
    halted: Option<SnakeError>,
    rng: R,
}

impl GameState<SmallRng> {
    /// starts a game with an entropy seeded random source
    pub fn new(config: GameConfig) -> Result<Self, SnakeError> {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// starts a game whose food placement is determined by `seed`
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, SnakeError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

fn occupied_cells(snake: &Snake) -> FxHashSet<Cell> {
    snake.body().iter().copied().collect()
}

impl<R: Rng> GameState<R> {
    /// starts a game placing food with the given random source
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, SnakeError> {
        config.validate()?;
        let grid = config.grid();
        let snake = Snake::new(config.start, config.initial_length, config.initial_direction);
        let food = Food::spawn(&grid, &occupied_cells(&snake), config.food_value, &mut rng)?;
        Ok(GameState {
            config,
            grid,
            snake,
            food,
            turn: 0,
            halted: None,
            rng,
        })
    }

    /// throws away the snake and the food and starts over from the config.
    /// The random source carries on.
    pub fn reset(&mut self) -> Result<(), SnakeError> {
        let snake = Snake::new(
            self.config.start,
            self.config.initial_length,
            self.config.initial_direction,
        );
        let food = Food::spawn(
            &self.grid,
            &occupied_cells(&snake),
            self.config.food_value,
            &mut self.rng,
        )?;
        self.snake = snake;
        self.food = food;
        self.turn = 0;
        self.halted = None;
        debug!(start = %self.config.start, "game reset");
        Ok(())
    }

    /// Advances the game by one tick.
    ///
    /// The head moves one cell in the next queued direction. Leaving the grid
    /// kills the snake and leaves its body where it was. Otherwise the new
    /// head is appended, the tail is dropped if the body is longer than the
    /// target length, and only then is the head checked against the food, so
    /// the cell just eaten is never trimmed away.
    ///
    /// Running into its own body does not kill the snake.
    ///
    /// Fails with [SnakeError::NoSpace] when food was eaten and the snake
    /// covers the whole grid. The game can not continue after that: every
    /// further step returns the same error until [GameState::reset].
    #[instrument(level = "trace", skip_all)]
    pub fn step(&mut self) -> Result<StepOutcome, SnakeError> {
        if let Some(e) = &self.halted {
            return Err(e.clone());
        }
        if self.snake.is_dead() {
            return Ok(StepOutcome::Idle);
        }

        let direction = self.snake.next_direction();
        let new_head = self.snake.head().in_direction(direction);

        if !self.grid.contains(new_head) {
            debug!(turn = self.turn, head = %self.snake.head(), %direction, "snake left the grid");
            self.snake.kill();
            return Ok(StepOutcome::Died);
        }

        self.snake.advance(new_head);
        self.snake.set_current_direction(direction);
        self.turn += 1;

        if new_head != self.food.cell() {
            trace!(turn = self.turn, head = %new_head, "moved");
            return Ok(StepOutcome::Moved);
        }

        self.snake.grow(self.food.value());
        self.food = match Food::spawn(
            &self.grid,
            &occupied_cells(&self.snake),
            self.config.food_value,
            &mut self.rng,
        ) {
            Ok(food) => food,
            Err(e) => {
                self.halted = Some(e.clone());
                return Err(e);
            }
        };
        debug!(
            turn = self.turn,
            length = self.snake.length(),
            food = %self.food.cell(),
            "snake ate"
        );
        Ok(StepOutcome::Ate)
    }

    /// Queues a direction change coming from the player. A reversal of the
    /// current direction is refused and `false` is returned.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !direction.is_not_opposite(&self.snake.current_direction()) {
            trace!(%direction, "refused reversal");
            return false;
        }
        self.snake.enqueue_direction(direction);
        true
    }

    /// Queues a direction change without the reversal check
    pub fn enqueue_direction(&mut self, direction: Direction) {
        self.snake.enqueue_direction(direction);
    }

    /// Replaces the current food. The cell has to be on the grid and clear of
    /// the snake.
    pub fn place_food(&mut self, food: Food) -> Result<(), SnakeError> {
        let cell = food.cell();
        if !self.grid.contains(cell) {
            return Err(SnakeError::OutOfBounds(cell));
        }
        if self.snake.body().contains(&cell) {
            return Err(SnakeError::OccupiedCell(cell));
        }
        self.food = food;
        Ok(())
    }
}

impl<R> GameState<R> {
    #[allow(missing_docs)]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[allow(missing_docs)]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[allow(missing_docs)]
    pub fn food(&self) -> Food {
        self.food
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// number of moves made since the game started
    pub fn turn(&self) -> u64 {
        self.turn
    }

    #[allow(missing_docs)]
    pub fn is_dead(&self) -> bool {
        self.snake.is_dead()
    }

    /// the error that ended this game, cleared by a reset
    pub fn halted(&self) -> Option<&SnakeError> {
        self.halted.as_ref()
    }

    /// copies out everything a renderer needs to draw the game
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.grid.size(),
            body: self.snake.body().iter().copied().collect(),
            length: self.snake.length(),
            direction: self.snake.current_direction(),
            food: self.food,
            alive: !self.snake.is_dead(),
            turn: self.turn,
        }
    }
}

impl<R> fmt::Display for GameState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

/// A read only copy of a game, taken between ticks
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// width and height of the grid
    pub grid_size: u32,
    /// body cells from tail to head
    pub body: Vec<Cell>,
    /// target length of the snake
    pub length: u32,
    /// direction applied on the last tick
    pub direction: Direction,
    #[allow(missing_docs)]
    pub food: Food,
    #[allow(missing_docs)]
    pub alive: bool,
    #[allow(missing_docs)]
    pub turn: u64,
}

impl Snapshot {
    #[allow(missing_docs)]
    pub fn head(&self) -> Option<Cell> {
        self.body.last().copied()
    }

    /// whether a renderer should draw the cell as filled
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.food.cell() == cell || self.body.contains(&cell)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.head();
        for y in 0..self.grid_size as i32 {
            for x in 0..self.grid_size as i32 {
                let cell = Cell::new(x, y);
                if head == Some(cell) {
                    write!(f, "H")?;
                } else if self.body.contains(&cell) {
                    write!(f, "s")?;
                } else if self.food.cell() == cell {
                    write!(f, "f")?;
                } else {
                    write!(f, ".")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "(turn: {} length: {} direction: {}{})",
            self.turn,
            self.length,
            self.direction,
            if self.alive { "" } else { " dead" }
        )
    }
}
