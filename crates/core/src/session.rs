//! Session module - ties the simulation together.
//!
//! A [`GameSession`] owns the snake, the active fruit set, the score/speed
//! tracker, and the lifecycle status. It is mutated only through its command
//! methods and [`GameSession::step`]; the driving loop lives in the engine
//! crate and publishes immutable snapshots after each completed step.

use arrayvec::ArrayVec;

use tui_snake_types::{
    Direction, FruitKind, GameStatus, Point, StepEvent, MAX_FRUITS_ON_BOARD,
};

use crate::fruit::{Fruit, FruitSpawner};
use crate::grid::Grid;
use crate::scoring::ScoreTracker;
use crate::snake::{Snake, StepOutcome};

/// Upper bound on undrained feedback events. Feedback is best-effort, so
/// events beyond this between drains are dropped rather than grown on the
/// heap.
const EVENT_BUFFER: usize = 8;

/// One game session: board, snake, fruits, score, and lifecycle status.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    fruits: ArrayVec<Fruit, MAX_FRUITS_ON_BOARD>,
    tracker: ScoreTracker,
    spawner: FruitSpawner,
    status: GameStatus,
    events: ArrayVec<StepEvent, EVENT_BUFFER>,
}

impl GameSession {
    /// Create a session shell in `Idle`; nothing moves until [`start`] is
    /// called.
    ///
    /// [`start`]: GameSession::start
    pub fn new(grid: Grid, seed: u32) -> Self {
        Self {
            grid,
            snake: Snake::spawn(&grid),
            fruits: ArrayVec::new(),
            tracker: ScoreTracker::new(),
            spawner: FruitSpawner::new(seed),
            status: GameStatus::Idle,
            events: ArrayVec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.tracker.score()
    }

    /// Current step interval in milliseconds. Re-read by the scheduler every
    /// cycle, since it shrinks as fruit is eaten.
    pub fn speed_ms(&self) -> u64 {
        self.tracker.speed_ms()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruits(&self) -> &[Fruit] {
        &self.fruits
    }

    /// Start a fresh run. Always rebuilds the session state and moves to
    /// `Playing`, whatever the prior status. No-op on a degenerate grid.
    pub fn start(&mut self) {
        if self.grid.is_degenerate() {
            return;
        }

        self.snake = Snake::spawn(&self.grid);
        self.tracker = ScoreTracker::new();
        self.fruits.clear();
        self.events.clear();
        self.replenish_fruits();
        self.status = GameStatus::Playing;
    }

    /// Start from an explicit snake state (scenario setup and demos).
    ///
    /// Follows the same rules as [`start`]; the provided body is trusted to
    /// lie within the grid.
    ///
    /// [`start`]: GameSession::start
    pub fn start_from(&mut self, snake: Snake) {
        if self.grid.is_degenerate() {
            return;
        }

        self.snake = snake;
        self.tracker = ScoreTracker::new();
        self.fruits.clear();
        self.events.clear();
        self.replenish_fruits();
        self.status = GameStatus::Playing;
    }

    /// Suspend the tick loop. Legal only while `Playing`; otherwise a no-op.
    pub fn pause(&mut self) {
        if self.status.is_playing() {
            self.status = GameStatus::Paused;
        }
    }

    /// Continue a paused run. Legal only while `Paused`; otherwise a no-op.
    pub fn resume(&mut self) {
        if self.status.is_paused() {
            self.status = GameStatus::Playing;
        }
    }

    /// Queue a direction for the next step.
    ///
    /// Accepted while `Playing` or `Paused` (applied only during a `Playing`
    /// step). Reversals and repeats of the applied direction are discarded.
    /// Returns whether the request was accepted.
    pub fn queue_direction(&mut self, dir: Direction) -> bool {
        if !(self.status.is_playing() || self.status.is_paused()) {
            return false;
        }
        let accepted = self.snake.queue_direction(dir);
        if accepted {
            self.push_event(StepEvent::DirectionAccepted);
        }
        accepted
    }

    /// Advance the simulation by one step.
    ///
    /// Gated on `Playing`; returns whether a step actually executed. A fatal
    /// collision moves the session to `GameOver` within the same call.
    pub fn step(&mut self) -> bool {
        if !self.status.is_playing() {
            return false;
        }

        match self.snake.advance(&self.grid) {
            StepOutcome::Collision(kind) => {
                self.status = GameStatus::GameOver;
                self.push_event(StepEvent::Collision(kind));
            }
            StepOutcome::Moved { new_head } => {
                if let Some(idx) = self.fruits.iter().position(|f| f.position == new_head) {
                    let eaten = self.fruits.swap_remove(idx);
                    self.consume(eaten);
                }
            }
        }

        true
    }

    /// Place a specific fruit (scenario setup and demos).
    ///
    /// Fails if the cell is occupied or the board already holds the maximum.
    pub fn spawn_fruit_at(&mut self, position: Point, kind: &'static FruitKind) -> bool {
        if self.fruits.is_full()
            || !self.grid.contains(position)
            || self.snake.occupies(position)
            || self.fruits.iter().any(|f| f.position == position)
        {
            return false;
        }

        let id = self.spawner.allocate_id();
        self.fruits.push(Fruit { id, position, kind });
        true
    }

    /// Remove the fruit at `position`, if any (scenario setup and demos).
    ///
    /// Returns whether a fruit was removed. Does not replenish.
    pub fn remove_fruit_at(&mut self, position: Point) -> bool {
        match self.fruits.iter().position(|f| f.position == position) {
            Some(idx) => {
                self.fruits.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Drain the feedback events recorded since the last drain.
    pub fn take_events(&mut self) -> ArrayVec<StepEvent, EVENT_BUFFER> {
        std::mem::take(&mut self.events)
    }

    fn consume(&mut self, fruit: Fruit) {
        let points = fruit.kind.points;
        self.tracker.on_fruit(points);
        self.snake.add_growth(points);
        self.push_event(StepEvent::FruitEaten {
            position: fruit.position,
            color: fruit.kind.color,
            points,
        });
        self.replenish_fruits();
    }

    fn replenish_fruits(&mut self) {
        while !self.fruits.is_full() {
            match self.spawner.spawn(&self.grid, &self.snake, &self.fruits) {
                Some(fruit) => self.fruits.push(fruit),
                None => break,
            }
        }
    }

    fn push_event(&mut self, event: StepEvent) {
        // Feedback is fire-and-forget; drop on overflow instead of growing.
        let _ = self.events.try_push(event);
    }
}
