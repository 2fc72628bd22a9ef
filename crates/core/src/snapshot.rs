//! Immutable view of a session for renderers and other observers.
//!
//! Snapshots are plain data with no back-references into the session, so a
//! render pass can hold one while the simulation keeps stepping. The `_into`
//! form reuses the snapshot's allocations frame over frame.

use tui_snake_types::{GameStatus, Point, Rgb};

use crate::session::GameSession;

/// One fruit as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FruitView {
    pub id: u32,
    pub position: Point,
    pub color: Rgb,
    pub points: u32,
}

/// Full observable state of a session at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cols: u16,
    pub rows: u16,
    pub cell_size: u16,
    pub status: GameStatus,
    pub score: u32,
    pub speed_ms: u64,
    /// Snake body cells, head first.
    pub snake: Vec<Point>,
    pub fruits: Vec<FruitView>,
}

impl GameSnapshot {
    pub fn new() -> Self {
        Self {
            cols: 0,
            rows: 0,
            cell_size: 0,
            status: GameStatus::Idle,
            score: 0,
            speed_ms: 0,
            snake: Vec::new(),
            fruits: Vec::new(),
        }
    }

    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Capture a fresh snapshot of the session.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::new();
        self.snapshot_into(&mut out);
        out
    }

    /// Capture into an existing snapshot, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let grid = self.grid();
        out.cols = grid.cols();
        out.rows = grid.rows();
        out.cell_size = grid.cell_size();
        out.status = self.status();
        out.score = self.score();
        out.speed_ms = self.speed_ms();

        out.snake.clear();
        out.snake.extend(self.snake().body());

        out.fruits.clear();
        out.fruits.extend(self.fruits().iter().map(|f| FruitView {
            id: f.id,
            position: f.position,
            color: f.kind.color,
            points: f.kind.points,
        }));
    }
}
