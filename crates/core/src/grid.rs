//! Grid module - immutable board geometry.
//!
//! The board always has `GRID_COLS` columns; the cell size and row count are
//! derived from the pixel dimensions of the hosting surface. Geometry is fixed
//! for a session's lifetime; changing it mid-session is not supported.
//! Coordinates: (x, y) with x in 0..cols (left to right) and y in 0..rows
//! (top to bottom).

use tui_snake_types::{Point, GRID_COLS};

/// Immutable board geometry for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: u16,
    rows: u16,
    cell_size: u16,
}

impl Grid {
    /// Derive the grid from a surface's pixel dimensions.
    ///
    /// `cell_size = floor(width / GRID_COLS)` and
    /// `rows = floor(height / cell_size)`. A surface too small to hold one
    /// cell yields a degenerate grid with zero rows; callers treat that as
    /// "cannot start a session".
    pub fn from_pixels(width: u32, height: u32) -> Self {
        let cell_size = (width / GRID_COLS as u32) as u16;
        let rows = if cell_size > 0 {
            (height / cell_size as u32) as u16
        } else {
            0
        };

        Self {
            cols: GRID_COLS,
            rows,
            cell_size,
        }
    }

    /// Build a grid directly from cell dimensions (cell size 1).
    ///
    /// Intended for headless use and tests where no pixel surface exists.
    pub fn with_dimensions(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cell_size: 1,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Side length of one cell in surface pixels.
    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> u32 {
        self.cols as u32 * self.rows as u32
    }

    /// Whether the grid can host a session at all.
    pub fn is_degenerate(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    /// Whether `p` lies inside `[0, cols) × [0, rows)`.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as u16) < self.cols && p.y >= 0 && (p.y as u16) < self.rows
    }

    /// The board's center cell, where the snake's head starts.
    pub fn center(&self) -> Point {
        Point::new((self.cols / 2) as i16, (self.rows / 2) as i16)
    }
}
