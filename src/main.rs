//! Terminal snake runner (default binary).
//!
//! Uses crossterm for input and a custom framebuffer-based renderer.
//! The board geometry is derived from the terminal size at startup: a grid
//! cell is two terminal columns wide, and the row count follows from the
//! height left after the HUD margins.

use std::io::Write;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameSession, Grid};
use tui_snake::engine::{FeedbackSink, GameDriver};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::store::FileStore;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::CollisionKind;

/// Input-poll timeout while no step is pending (idle, paused, game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Rings the terminal bell on fatal collisions.
struct Bell;

impl FeedbackSink for Bell {
    fn collision(&mut self, _kind: CollisionKind) {
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));

    // Two columns per cell, a few rows reserved around the border and HUD.
    let grid = Grid::from_pixels(w as u32 / 2, h.saturating_sub(6) as u32);
    if grid.is_degenerate() {
        bail!("terminal too small: need at least 40x8, got {}x{}", w, h);
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0x5EED);

    let session = GameSession::new(grid, seed);
    let mut driver = GameDriver::new(session, FileStore::at_default_location(), Bell);

    let view = GameView::default();
    let mut snap = driver.snapshot();
    let mut fb = FrameBuffer::new(w, h);

    loop {
        let now = Instant::now();
        driver.on_frame(now);

        driver.snapshot_into(&mut snap);
        view.render_into(&snap, driver.high_score(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Block on input until the next step is due.
        let timeout = driver
            .poll_timeout(Instant::now())
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        driver.apply(command, Instant::now());
                    }
                }
                _ => {}
            }
        }
    }
}
