//! Fixed period driver for a [GameState].
//!
//! The loop is a single tokio task owning the interval timer. The game itself
//! sits behind an async mutex that the task holds for the whole of a tick, so
//! input handlers and renderers only ever see the state between two steps.
use rand::rngs::SmallRng;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::error::SnakeError;
use crate::game_state::{GameState, Snapshot};
use crate::types::{Acknowledgement, Direction, Renderer, StepOutcome};

/// A game shared between the loop and whoever feeds it input
pub type SharedGame<R = SmallRng> = Arc<Mutex<GameState<R>>>;

/// Calls [GameState::step] once per period and reports every outcome to a
/// [Renderer].
///
/// [GameLoop::start] and [GameLoop::stop] may be called any number of times.
/// Once `stop` has returned no further step runs.
#[derive(Debug)]
pub struct GameLoop<R = SmallRng> {
    game: SharedGame<R>,
    period: Duration,
    task: Option<JoinHandle<Result<(), SnakeError>>>,
}

impl<R: Rng + Send + 'static> GameLoop<R> {
    /// wraps a game, ticking at the period from its config
    pub fn new(game: GameState<R>) -> Self {
        let period = game.config().tick_period();
        Self::with_period(game, period)
    }

    /// wraps a game, ticking every `period`
    pub fn with_period(game: GameState<R>, period: Duration) -> Self {
        GameLoop {
            game: Arc::new(Mutex::new(game)),
            period,
            task: None,
        }
    }

    /// a handle on the game, for input handlers living elsewhere
    pub fn game(&self) -> SharedGame<R> {
        Arc::clone(&self.game)
    }

    #[allow(missing_docs)]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// whether the tick task is alive. A loop halted by an error is not
    /// running, [GameLoop::stop] returns the error.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().map_or(false, |task| !task.is_finished())
    }

    /// Spawns the tick task on the current tokio runtime. The first tick
    /// fires one period from now. Returns `false`, dropping `renderer`, if
    /// the loop is already running or has halted and [GameLoop::stop] has
    /// not collected its result yet.
    ///
    /// # Panics
    /// when called outside of a tokio runtime
    pub fn start<V: Renderer>(&mut self, renderer: V) -> bool {
        if self.task.is_some() {
            return false;
        }
        info!(period = ?self.period, "starting game loop");
        let game = Arc::clone(&self.game);
        self.task = Some(tokio::spawn(run(game, renderer, self.period)));
        true
    }

    /// Cancels the tick task and waits for it to finish. Returns the error
    /// that halted the loop, if any.
    pub async fn stop(&mut self) -> Result<(), SnakeError> {
        let task = match self.task.take() {
            Some(task) => task,
            None => return Ok(()),
        };
        task.abort();
        let result = match task.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Ok(()),
            Err(e) => Err(SnakeError::LoopAborted(e.to_string())),
        };
        info!("game loop stopped");
        result
    }

    /// starts the game over without touching the timer
    pub async fn reset(&self) -> Result<(), SnakeError> {
        self.game.lock().await.reset()
    }

    /// see [GameState::steer]
    pub async fn steer(&self, direction: Direction) -> bool {
        self.game.lock().await.steer(direction)
    }

    /// see [GameState::enqueue_direction]
    pub async fn enqueue_direction(&self, direction: Direction) {
        self.game.lock().await.enqueue_direction(direction)
    }

    /// copy of the game as of the last completed tick
    pub async fn snapshot(&self) -> Snapshot {
        self.game.lock().await.snapshot()
    }
}

impl<R> Drop for GameLoop<R> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run<R: Rng, V: Renderer>(
    game: SharedGame<R>,
    mut renderer: V,
    period: Duration,
) -> Result<(), SnakeError> {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let mut state = game.lock().await;

        if state.is_dead() {
            match renderer.game_over(&state.snapshot()) {
                Acknowledgement::Restart => {
                    if let Err(e) = state.reset() {
                        error!(error = %e, "could not restart game, stopping loop");
                        return Err(e);
                    }
                }
                Acknowledgement::Pending => {}
            }
            continue;
        }

        let outcome = match state.step() {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, turn = state.turn(), "tick failed, stopping loop");
                return Err(e);
            }
        };
        if outcome == StepOutcome::Died {
            debug!(turn = state.turn(), "game over");
        }
        renderer.render(outcome, &state.snapshot());
    }
}
