//! Session driving: frame-based scheduling, feedback routing, and the
//! persistence seam.
//!
//! The core crate knows nothing about time or storage; this crate supplies
//! both. Hosts hand the [`GameDriver`] a clock reading each frame and
//! implement the outbound [`ports`] for whatever storage and feedback they
//! have.

pub mod driver;
pub mod ports;
pub mod scheduler;

pub use driver::GameDriver;
pub use ports::{FeedbackSink, HighScoreStore, NullFeedback};
pub use scheduler::TickScheduler;
