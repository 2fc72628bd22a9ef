//! Deterministic snake simulation core.
//!
//! Everything in this crate is pure state and arithmetic: no clocks, no I/O,
//! no terminal. Time enters only as step counts driven from the engine crate,
//! and randomness only through the seeded [`rng::SimpleRng`], so a session is
//! fully replayable from `(grid, seed, command sequence)`.

pub mod fruit;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snake;
pub mod snapshot;

pub use fruit::{Fruit, FruitSpawner};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use scoring::ScoreTracker;
pub use session::GameSession;
pub use snake::{Snake, StepOutcome};
pub use snapshot::{FruitView, GameSnapshot};
