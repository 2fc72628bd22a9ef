//! Step scheduling against a caller-supplied clock.
//!
//! The scheduler never sleeps and never reads the wall clock itself; the
//! frame loop hands it `Instant`s. Late frames fire at most one step and the
//! baseline resets to the observed `now`, so a stall is absorbed instead of
//! being replayed as a burst of catch-up steps.

use std::time::{Duration, Instant};

/// Decides when the next simulation step is due.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    /// Time of the last fired step (or of arming). `None` while disarmed.
    baseline: Option<Instant>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self { baseline: None }
    }

    /// Begin counting from `now`. The first step fires one interval later.
    pub fn arm(&mut self, now: Instant) {
        self.baseline = Some(now);
    }

    /// Stop firing until re-armed.
    pub fn disarm(&mut self) {
        self.baseline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.baseline.is_some()
    }

    /// Whether a step is due at `now` for the given interval.
    ///
    /// Fires at most once per call; on fire the baseline moves to `now`, not
    /// to `baseline + interval`.
    pub fn poll(&mut self, now: Instant, interval: Duration) -> bool {
        match self.baseline {
            Some(base) if now.saturating_duration_since(base) >= interval => {
                self.baseline = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the next step, for use as an input-poll timeout.
    /// `None` while disarmed.
    pub fn time_until_due(&self, now: Instant, interval: Duration) -> Option<Duration> {
        let base = self.baseline?;
        Some(interval.saturating_sub(now.saturating_duration_since(base)))
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
