//! Scoring module - score accumulation and the speed curve.
//!
//! Every fruit adds its point value to the score and shaves
//! `SPEED_INCREMENT_MS` off the step interval, floored at `MIN_SPEED_MS`.
//! Score never decreases and speed never slows down within a session.

use tui_snake_types::{INITIAL_SPEED_MS, MIN_SPEED_MS, SPEED_INCREMENT_MS};

/// Step interval after one fruit, clamped to the speed floor.
pub fn next_speed_ms(speed_ms: u64) -> u64 {
    MIN_SPEED_MS.max(speed_ms.saturating_sub(SPEED_INCREMENT_MS))
}

/// Per-session score and speed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    speed_ms: u64,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self {
            score: 0,
            speed_ms: INITIAL_SPEED_MS,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current step interval in milliseconds.
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Record a consumed fruit worth `points`.
    pub fn on_fruit(&mut self, points: u32) {
        self.score += points;
        self.speed_ms = next_speed_ms(self.speed_ms);
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_speed_and_zero_score() {
        let tracker = ScoreTracker::new();
        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.speed_ms(), INITIAL_SPEED_MS);
    }

    #[test]
    fn fruit_adds_points_and_speeds_up() {
        let mut tracker = ScoreTracker::new();
        tracker.on_fruit(5);
        assert_eq!(tracker.score(), 5);
        assert_eq!(tracker.speed_ms(), INITIAL_SPEED_MS - SPEED_INCREMENT_MS);

        tracker.on_fruit(2);
        assert_eq!(tracker.score(), 7);
        assert_eq!(tracker.speed_ms(), INITIAL_SPEED_MS - 2 * SPEED_INCREMENT_MS);
    }

    #[test]
    fn speed_floors_at_minimum() {
        let mut tracker = ScoreTracker::new();
        // More fruit than the curve has room for.
        for _ in 0..200 {
            tracker.on_fruit(1);
        }
        assert_eq!(tracker.speed_ms(), MIN_SPEED_MS);
        assert_eq!(tracker.score(), 200);
    }

    #[test]
    fn score_is_monotone_and_speed_never_rises() {
        let mut tracker = ScoreTracker::new();
        let mut last_score = 0;
        let mut last_speed = tracker.speed_ms();
        for points in [1, 2, 3, 2, 5, 1, 5, 5] {
            tracker.on_fruit(points);
            assert!(tracker.score() >= last_score);
            assert!(tracker.speed_ms() <= last_speed);
            assert!(tracker.speed_ms() >= MIN_SPEED_MS);
            assert!(tracker.speed_ms() <= INITIAL_SPEED_MS);
            last_score = tracker.score();
            last_speed = tracker.speed_ms();
        }
    }

    #[test]
    fn next_speed_clamps_exactly_at_floor() {
        assert_eq!(next_speed_ms(MIN_SPEED_MS + SPEED_INCREMENT_MS), MIN_SPEED_MS);
        assert_eq!(next_speed_ms(MIN_SPEED_MS + 1), MIN_SPEED_MS);
        assert_eq!(next_speed_ms(MIN_SPEED_MS), MIN_SPEED_MS);
    }
}
