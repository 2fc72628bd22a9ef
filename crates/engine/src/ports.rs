//! Outbound ports: the driver talks to the host through these traits.
//!
//! Implementations live outside the engine (a JSON file store, a terminal
//! bell, test doubles). Feedback is fire-and-forget; persistence is fallible
//! and the driver treats failures as "keep the old value".

use anyhow::Result;

use tui_snake_types::{CollisionKind, Point, Rgb};

/// Durable storage for the best score across sessions.
pub trait HighScoreStore {
    fn load(&mut self) -> Result<u32>;
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Receiver for moment-to-moment feedback cues (sound, haptics, a bell).
///
/// All hooks default to no-ops so hosts implement only what they can express.
pub trait FeedbackSink {
    fn direction_accepted(&mut self) {}
    fn fruit_eaten(&mut self, _position: Point, _color: Rgb) {}
    fn collision(&mut self, _kind: CollisionKind) {}
}

/// Discards all feedback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {}
