//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]. Steering is
//! edge-triggered: one key press queues one direction request, so no
//! repeat-rate handling is needed.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
