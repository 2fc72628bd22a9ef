//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, persistence).
//!
//! # Board Geometry
//!
//! The board always has a fixed number of columns; the row count is derived
//! from the host surface:
//!
//! - **Columns**: fixed at `GRID_COLS` (18)
//! - **Cell size**: `floor(surface_width / GRID_COLS)`
//! - **Rows**: `floor(surface_height / cell_size)`
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds per simulation step:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 145 | Step interval at session start |
//! | `MIN_SPEED_MS` | 55 | Fastest possible step interval |
//! | `SPEED_INCREMENT_MS` | 2 | Interval reduction per fruit eaten |
//! | `FRAME_MS` | 16 | Driver frame cadence (~60 FPS) |
//!
//! The step interval only ever shrinks within a session, and it is clamped to
//! `[MIN_SPEED_MS, INITIAL_SPEED_MS]`.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Point, GRID_COLS};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.opposite(), Direction::Down);
//! assert_eq!(dir.opposite().opposite(), dir);
//!
//! let head = Point::new(4, 4).step(dir);
//! assert_eq!(head, Point::new(4, 3));
//!
//! assert_eq!(GRID_COLS, 18);
//! ```

/// Fixed number of board columns (18); rows are derived from surface geometry.
pub const GRID_COLS: u16 = 18;

/// Step interval at session start (milliseconds).
pub const INITIAL_SPEED_MS: u64 = 145;

/// Fastest possible step interval (milliseconds).
pub const MIN_SPEED_MS: u64 = 55;

/// Step interval reduction per fruit eaten (milliseconds).
pub const SPEED_INCREMENT_MS: u64 = 2;

/// Snake body length at session start.
pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// Maximum number of fruits active on the board at once.
pub const MAX_FRUITS_ON_BOARD: usize = 3;

/// Driver frame cadence in milliseconds (16ms ≈ 60 FPS).
///
/// The simulation itself steps at the session's current speed interval;
/// this is only how often the driver polls the scheduler.
pub const FRAME_MS: u64 = 16;

/// Storage key for the persisted high score.
pub const HIGH_SCORE_KEY: &str = "fruitsnake_highscore";

/// An integer grid coordinate. Value type, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One of the four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this direction. `y` grows downward.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.vector(), (0, -1));
    /// assert_eq!(Direction::Right.vector(), (1, 0));
    /// ```
    pub fn vector(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180° reverse of this direction. Total and involutive.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Session lifecycle states.
///
/// - **Idle**: no active session (initial state)
/// - **Playing**: tick loop active
/// - **Paused**: tick loop suspended, state frozen
/// - **GameOver**: terminal for the session
///
/// Legal transitions: Idle → Playing (`start`, from any state),
/// Playing ⇄ Paused, Playing → GameOver. Everything else is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, GameStatus::Paused)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GameStatus::GameOver)
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameover",
        }
    }
}

/// Commands that front-ends send to the game driver.
///
/// These are the collaborator-facing analog of the original touch gestures:
/// a key press maps to a direction request, pause toggle, or restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Request a direction change for the next step.
    Turn(Direction),
    /// Pause while playing, resume while paused.
    TogglePause,
    /// Start a fresh session (from any state).
    Restart,
}

/// Why a session ended.
///
/// Both causes terminate the session identically for scoring purposes; the
/// distinction exists for observers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// The new head left the board.
    OutOfBounds,
    /// The new head ran into the snake's own body.
    SelfHit,
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::OutOfBounds => "out_of_bounds",
            CollisionKind::SelfHit => "self_hit",
        }
    }
}

/// 24-bit RGB color carried by fruit descriptors and feedback events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Discrete feedback signals emitted by the simulation.
///
/// The core records these during a step; the driver drains them and forwards
/// them to the feedback collaborator (haptics, sound, particles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// A queued direction request was accepted.
    DirectionAccepted,
    /// A fruit was consumed at `position`; `color` is the kind's accent color
    /// so visual collaborators can spawn matching effects.
    FruitEaten {
        position: Point,
        color: Rgb,
        points: u32,
    },
    /// The session ended with a fatal collision.
    Collision(CollisionKind),
}

/// Immutable static fruit descriptor: identity, value, and spawn weight.
///
/// The fixed table below is process-wide configuration, not session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FruitKind {
    pub id: &'static str,
    pub name: &'static str,
    pub color: Rgb,
    pub points: u32,
    pub spawn_weight: u32,
}

/// The static fruit table, in spawn-walk order.
///
/// | id | points | weight |
/// |--------|--------|--------|
/// | apple | 1 | 40 |
/// | cherry | 2 | 25 |
/// | grape | 3 | 20 |
/// | lime | 2 | 10 |
/// | golden | 5 | 5 |
pub const FRUIT_KINDS: [FruitKind; 5] = [
    FruitKind {
        id: "apple",
        name: "Apple",
        color: Rgb(0xFF, 0x00, 0x6E),
        points: 1,
        spawn_weight: 40,
    },
    FruitKind {
        id: "cherry",
        name: "Cherry",
        color: Rgb(0xFB, 0x56, 0x07),
        points: 2,
        spawn_weight: 25,
    },
    FruitKind {
        id: "grape",
        name: "Grape",
        color: Rgb(0x83, 0x38, 0xEC),
        points: 3,
        spawn_weight: 20,
    },
    FruitKind {
        id: "lime",
        name: "Lime",
        color: Rgb(0x80, 0xED, 0x99),
        points: 2,
        spawn_weight: 10,
    },
    FruitKind {
        id: "golden",
        name: "Star",
        color: Rgb(0xFF, 0xBE, 0x0B),
        points: 5,
        spawn_weight: 5,
    },
];

/// Sum of all spawn weights in [`FRUIT_KINDS`].
pub const TOTAL_SPAWN_WEIGHT: u32 = 100;
