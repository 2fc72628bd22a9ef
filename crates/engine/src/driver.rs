//! Frame-driven session driver.
//!
//! The host calls [`GameDriver::on_frame`] from its render loop with the
//! current time; the driver decides whether a step is due, advances the
//! session, routes feedback events to the sink, and persists the high score
//! when a run ends. It never blocks and never reads the clock itself.

use std::time::{Duration, Instant};

use tui_snake_core::{GameSession, GameSnapshot};
use tui_snake_types::{Direction, GameCommand, GameStatus, StepEvent};

use crate::ports::{FeedbackSink, HighScoreStore};
use crate::scheduler::TickScheduler;

pub struct GameDriver<S, F> {
    session: GameSession,
    scheduler: TickScheduler,
    store: S,
    sink: F,
    high_score: u32,
}

impl<S: HighScoreStore, F: FeedbackSink> GameDriver<S, F> {
    /// Wrap a session with its store and feedback sink.
    ///
    /// The stored high score is read once here; an unreadable store counts
    /// as zero rather than failing startup.
    pub fn new(session: GameSession, mut store: S, sink: F) -> Self {
        let high_score = store.load().unwrap_or(0);
        Self {
            session,
            scheduler: TickScheduler::new(),
            store,
            sink,
            high_score,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable session access for scenario setup (demos, tests).
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Best score seen so far, including runs from earlier processes.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn sink(&self) -> &F {
        &self.sink
    }

    /// Start a fresh run and arm the step timer.
    pub fn start(&mut self, now: Instant) {
        self.session.start();
        if self.session.status().is_playing() {
            self.scheduler.arm(now);
        } else {
            self.scheduler.disarm();
        }
        self.flush_events();
    }

    /// Pause a running session or resume a paused one.
    ///
    /// Pausing disarms the timer; resuming re-arms it from `now`, so time
    /// spent paused never produces catch-up steps.
    pub fn toggle_pause(&mut self, now: Instant) {
        match self.session.status() {
            GameStatus::Playing => {
                self.session.pause();
                self.scheduler.disarm();
            }
            GameStatus::Paused => {
                self.session.resume();
                self.scheduler.arm(now);
            }
            GameStatus::Idle | GameStatus::GameOver => {}
        }
    }

    pub fn queue_direction(&mut self, dir: Direction) -> bool {
        let accepted = self.session.queue_direction(dir);
        self.flush_events();
        accepted
    }

    /// Apply one input command.
    pub fn apply(&mut self, command: GameCommand, now: Instant) {
        match command {
            GameCommand::Turn(dir) => {
                self.queue_direction(dir);
            }
            GameCommand::TogglePause => self.toggle_pause(now),
            GameCommand::Restart => self.start(now),
        }
    }

    /// Advance the session if a step is due at `now`.
    ///
    /// Returns whether a step executed. On game over the timer is disarmed
    /// and the high score is persisted.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let interval = Duration::from_millis(self.session.speed_ms());
        if !self.scheduler.poll(now, interval) {
            return false;
        }

        let stepped = self.session.step();
        self.flush_events();

        if self.session.status().is_game_over() {
            self.scheduler.disarm();
            self.finish_run();
        }
        stepped
    }

    /// Time until the next step is due, for use as an input-poll timeout.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        let interval = Duration::from_millis(self.session.speed_ms());
        self.scheduler.time_until_due(now, interval)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }

    fn flush_events(&mut self) {
        for event in self.session.take_events() {
            match event {
                StepEvent::DirectionAccepted => self.sink.direction_accepted(),
                StepEvent::FruitEaten {
                    position, color, ..
                } => self.sink.fruit_eaten(position, color),
                StepEvent::Collision(kind) => self.sink.collision(kind),
            }
        }
    }

    /// Persist the final score if it beats the stored best. The cached value
    /// only moves after a confirmed write, so a failed save leaves the old
    /// best in force.
    fn finish_run(&mut self) {
        let score = self.session.score();
        if score > self.high_score && self.store.save(score).is_ok() {
            self.high_score = score;
        }
    }
}
