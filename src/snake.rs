//! the player controlled snake
use serde::Serialize;
use std::collections::VecDeque;

use crate::types::{Cell, Direction};

/// A snake is a run of cells ordered from tail to head plus the direction
/// changes the player has asked for but that have not been applied yet.
///
/// The body may be shorter than `length`: after eating, the snake keeps its
/// tail on the following ticks until the body has caught up.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    length: u32,
    pending_directions: VecDeque<Direction>,
    current_direction: Direction,
    alive: bool,
}

impl Snake {
    /// makes a live snake made of a single head cell
    pub fn new(head: Cell, length: u32, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Snake {
            body,
            length: length.max(1),
            pending_directions: VecDeque::new(),
            current_direction: direction,
            alive: true,
        }
    }

    /// queues a direction change. A direction equal to the last queued one
    /// (or to the current direction when nothing is queued) is dropped.
    ///
    /// Reversals are not rejected here, see [crate::game_state::GameState::steer].
    pub fn enqueue_direction(&mut self, d: Direction) {
        let last = self
            .pending_directions
            .back()
            .copied()
            .unwrap_or(self.current_direction);
        if d != last {
            self.pending_directions.push_back(d);
        }
    }

    /// takes the oldest queued direction, or keeps going the current way
    pub fn next_direction(&mut self) -> Direction {
        self.pending_directions
            .pop_front()
            .unwrap_or(self.current_direction)
    }

    /// raises the target length, the body catches up over the next ticks
    pub fn grow(&mut self, amount: u32) {
        self.length = self.length.saturating_add(amount);
    }

    #[allow(missing_docs)]
    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    /// body cells from tail to head
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// newest cell of the body
    pub fn head(&self) -> Cell {
        *self.body.back().expect("a snake always has a head")
    }

    /// the target length
    pub fn length(&self) -> u32 {
        self.length
    }

    /// direction applied on the last tick
    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    /// direction changes not applied yet, oldest first
    pub fn pending_directions(&self) -> &VecDeque<Direction> {
        &self.pending_directions
    }

    pub(crate) fn set_current_direction(&mut self, d: Direction) {
        self.current_direction = d;
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }

    /// adds a new head, dropping the tail once the body is longer than the
    /// target length
    pub(crate) fn advance(&mut self, new_head: Cell) {
        self.body.push_back(new_head);
        if self.body.len() > self.length as usize {
            self.body.pop_front();
        }
    }
}
