//! GameView: maps a [`core::GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{GameStatus, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Snake segment palette, head to tail.
const HEAD_COLOR: Rgb = Rgb(0x00, 0xF5, 0xD4);
const BODY_COLOR: Rgb = Rgb(0x00, 0xBB, 0xF9);
const TAIL_COLOR: Rgb = Rgb(0x7B, 0x61, 0xFF);

const BOARD_BG: Rgb = Rgb(30, 30, 40);

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        high_score: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board_px_w = snap.cols * self.cell_w;
        let board_px_h = snap.rows * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb(80, 80, 90),
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb(200, 200, 200),
            bg: Rgb(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        if snap.status != GameStatus::Idle {
            // Fruits first, then the snake over them.
            for fruit in &snap.fruits {
                let style = CellStyle {
                    fg: fruit.color,
                    bg: BOARD_BG,
                    bold: true,
                    dim: false,
                };
                self.fill_cell_rect(
                    fb,
                    start_x,
                    start_y,
                    fruit.position.x as u16,
                    fruit.position.y as u16,
                    '●',
                    style,
                );
            }

            let last = snap.snake.len().saturating_sub(1);
            for (i, seg) in snap.snake.iter().enumerate() {
                let fg = if i == 0 {
                    HEAD_COLOR
                } else if i == last {
                    TAIL_COLOR
                } else {
                    BODY_COLOR
                };
                let style = CellStyle {
                    fg,
                    bg: BOARD_BG,
                    bold: i == 0,
                    dim: false,
                };
                self.fill_cell_rect(fb, start_x, start_y, seg.x as u16, seg.y as u16, '█', style);
            }
        }

        // Side panel (score/best/length).
        self.draw_side_panel(fb, snap, high_score, viewport, start_x, start_y, frame_w);

        // Overlays.
        match snap.status {
            GameStatus::Idle => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "SNAKE");
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 2, "R TO START");
            }
            GameStatus::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "PAUSED");
            }
            GameStatus::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "GAME OVER");
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 2, "R TO RESTART");
            }
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, high_score: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, high_score, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        high_score: u32,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = CellStyle {
            fg: Rgb(220, 220, 220),
            bg: Rgb(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb(200, 200, 200),
            bg: Rgb(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, high_score.max(snap.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.snake.len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.speed_ms as u32, value);
        fb.put_str(panel_x + 4, y, "ms", CellStyle { dim: true, ..value });
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        dy: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_add(dy);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb(255, 255, 255),
            bg: Rgb(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
