//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view maps snapshots into a
//! character framebuffer, and the renderer flushes that to the terminal. The
//! split keeps everything above the escape codes unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
