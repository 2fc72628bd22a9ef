//! Snake module - ordered body representation, movement, and self-collision.
//!
//! The body is a deque with the head at the front and the tail at the back.
//! Growth is deferred: eating a fruit worth `p` points schedules `p` future
//! length increments, consumed one per step.

use std::collections::VecDeque;

use tui_snake_types::{CollisionKind, Direction, Point, INITIAL_SNAKE_LENGTH};

use crate::grid::Grid;

/// Result of advancing the snake by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The head moved to `new_head`; the body has been updated.
    Moved { new_head: Point },
    /// The move was fatal; the body is unchanged.
    Collision(CollisionKind),
}

/// The snake: ordered body, applied and queued directions, deferred growth.
///
/// Mutated only by [`Snake::advance`] (and the direction queue); owned
/// exclusively by the session.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Body cells, head first.
    body: VecDeque<Point>,
    /// Direction applied during the last step.
    direction: Direction,
    /// Direction requested for the next step (single slot, latest wins).
    queued: Direction,
    /// Length increments still owed from eaten fruit.
    pending_growth: u32,
}

impl Snake {
    /// Spawn a snake at the grid's center, facing right, body extending left.
    pub fn spawn(grid: &Grid) -> Self {
        let head = grid.center();
        let mut body = VecDeque::with_capacity(INITIAL_SNAKE_LENGTH * 4);
        for i in 0..INITIAL_SNAKE_LENGTH as i16 {
            body.push_back(Point::new(head.x - i, head.y));
        }

        Self {
            body,
            direction: Direction::Right,
            queued: Direction::Right,
            pending_growth: 0,
        }
    }

    /// Build a snake from explicit body cells (head first), for scenario tests.
    pub fn from_body(body: Vec<Point>, direction: Direction) -> Self {
        Self {
            body: body.into(),
            direction,
            queued: direction,
            pending_growth: 0,
        }
    }

    pub fn head(&self) -> Point {
        // Body is never empty while a session is alive.
        *self.body.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body cells, head first.
    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Schedule `n` future length increments.
    pub fn add_growth(&mut self, n: u32) {
        self.pending_growth += n;
    }

    /// Whether any body segment occupies `p`.
    pub fn occupies(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    /// Request a direction change for the next step.
    ///
    /// A 180° reversal of the applied direction is illegal and discarded, and
    /// re-requesting the applied direction is a no-op; both return `false`.
    /// Otherwise the single queue slot is overwritten (latest request wins)
    /// and `true` is returned.
    pub fn queue_direction(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() || dir == self.direction {
            return false;
        }
        self.queued = dir;
        true
    }

    /// Advance one step on `grid`.
    ///
    /// Ordering is load-bearing:
    ///
    /// 1. the queued direction becomes the applied direction (a reversal can
    ///    never take effect);
    /// 2. bounds check on the new head;
    /// 3. self-collision check against the first `check_len` segments, where
    ///    the tail is exempt exactly when it will be vacated this step
    ///    (`pending_growth == 0`, read before any decrement);
    /// 4. head is prepended; growing keeps the tail, otherwise it is popped.
    ///
    /// On collision the body is left untouched.
    pub fn advance(&mut self, grid: &Grid) -> StepOutcome {
        if self.queued != self.direction.opposite() {
            self.direction = self.queued;
        }

        let new_head = self.head().step(self.direction);

        if !grid.contains(new_head) {
            return StepOutcome::Collision(CollisionKind::OutOfBounds);
        }

        let check_len = if self.pending_growth > 0 {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        if self.body.iter().take(check_len).any(|&p| p == new_head) {
            return StepOutcome::Collision(CollisionKind::SelfHit);
        }

        self.body.push_front(new_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_back();
        }

        StepOutcome::Moved { new_head }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_18x10() -> Grid {
        Grid::with_dimensions(18, 10)
    }

    #[test]
    fn spawn_is_centered_and_faces_right() {
        let grid = grid_18x10();
        let snake = Snake::spawn(&grid);

        assert_eq!(snake.len(), INITIAL_SNAKE_LENGTH);
        assert_eq!(snake.head(), Point::new(9, 5));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_growth(), 0);

        let body: Vec<Point> = snake.body().collect();
        assert_eq!(
            body,
            vec![
                Point::new(9, 5),
                Point::new(8, 5),
                Point::new(7, 5),
                Point::new(6, 5),
            ]
        );
    }

    #[test]
    fn moves_one_cell_and_keeps_length() {
        let grid = grid_18x10();
        let mut snake = Snake::spawn(&grid);

        let outcome = snake.advance(&grid);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                new_head: Point::new(10, 5)
            }
        );
        assert_eq!(snake.len(), INITIAL_SNAKE_LENGTH);
        // Old tail cell is vacated.
        assert!(!snake.occupies(Point::new(6, 5)));
    }

    #[test]
    fn reversal_request_is_rejected() {
        let grid = grid_18x10();
        let mut snake = Snake::spawn(&grid);

        assert!(!snake.queue_direction(Direction::Left));
        snake.advance(&grid);
        // Still moving right.
        assert_eq!(snake.head(), Point::new(10, 5));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn same_direction_request_is_a_noop() {
        let grid = grid_18x10();
        let mut snake = Snake::spawn(&grid);
        assert!(!snake.queue_direction(Direction::Right));
    }

    #[test]
    fn queued_turn_applies_on_next_step() {
        let grid = grid_18x10();
        let mut snake = Snake::spawn(&grid);

        assert!(snake.queue_direction(Direction::Up));
        let outcome = snake.advance(&grid);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                new_head: Point::new(9, 4)
            }
        );
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn latest_queued_request_wins() {
        let grid = grid_18x10();
        let mut snake = Snake::spawn(&grid);

        assert!(snake.queue_direction(Direction::Up));
        assert!(snake.queue_direction(Direction::Down));
        snake.advance(&grid);
        assert_eq!(snake.head(), Point::new(9, 6));
    }

    #[test]
    fn left_wall_is_fatal() {
        let grid = grid_18x10();
        let mut snake = Snake::from_body(
            vec![Point::new(0, 5), Point::new(1, 5), Point::new(2, 5)],
            Direction::Left,
        );

        let outcome = snake.advance(&grid);
        assert_eq!(outcome, StepOutcome::Collision(CollisionKind::OutOfBounds));
        // Body unchanged after a fatal step.
        assert_eq!(snake.head(), Point::new(0, 5));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn all_four_walls_are_fatal() {
        let grid = grid_18x10();
        let cases = [
            (Point::new(17, 5), Direction::Right),
            (Point::new(0, 5), Direction::Left),
            (Point::new(5, 0), Direction::Up),
            (Point::new(5, 9), Direction::Down),
        ];
        for (head, dir) in cases {
            let tail = head.step(dir.opposite());
            let mut snake = Snake::from_body(vec![head, tail], dir);
            assert_eq!(
                snake.advance(&grid),
                StepOutcome::Collision(CollisionKind::OutOfBounds),
                "expected wall hit moving {:?} from {:?}",
                dir,
                head
            );
        }
    }

    #[test]
    fn chasing_the_tail_is_legal_when_not_growing() {
        let grid = grid_18x10();
        // A 2x2 loop: head at (5,5), tail at (5,6). Turning up moves the head
        // into the tail cell, which is vacated in the same step.
        let mut snake = Snake::from_body(
            vec![
                Point::new(5, 5),
                Point::new(4, 5),
                Point::new(4, 6),
                Point::new(5, 6),
            ],
            Direction::Right,
        );

        assert!(snake.queue_direction(Direction::Down));
        let outcome = snake.advance(&grid);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                new_head: Point::new(5, 6)
            }
        );
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn chasing_the_tail_is_fatal_while_growing() {
        let grid = grid_18x10();
        // Same loop, but with growth pending the tail stays put and is a
        // real obstacle.
        let mut snake = Snake::from_body(
            vec![
                Point::new(5, 5),
                Point::new(4, 5),
                Point::new(4, 6),
                Point::new(5, 6),
            ],
            Direction::Right,
        );
        snake.add_growth(1);

        assert!(snake.queue_direction(Direction::Down));
        let outcome = snake.advance(&grid);
        assert_eq!(outcome, StepOutcome::Collision(CollisionKind::SelfHit));
        assert_eq!(snake.pending_growth(), 1);
    }

    #[test]
    fn running_into_the_body_is_fatal() {
        let grid = grid_18x10();
        // A hook shape: moving up from (5,5) hits (5,4) which is mid-body.
        let mut snake = Snake::from_body(
            vec![
                Point::new(5, 5),
                Point::new(6, 5),
                Point::new(6, 4),
                Point::new(5, 4),
                Point::new(4, 4),
            ],
            Direction::Left,
        );

        assert!(snake.queue_direction(Direction::Up));
        assert_eq!(
            snake.advance(&grid),
            StepOutcome::Collision(CollisionKind::SelfHit)
        );
    }

    #[test]
    fn growth_is_consumed_one_segment_per_step() {
        let grid = grid_18x10();
        let mut snake = Snake::spawn(&grid);
        snake.add_growth(3);

        let base_len = snake.len();
        for i in 1..=3 {
            snake.advance(&grid);
            assert_eq!(snake.len(), base_len + i);
            assert_eq!(snake.pending_growth(), 3 - i as u32);
        }

        // Growth exhausted: length stays constant afterwards.
        snake.advance(&grid);
        assert_eq!(snake.len(), base_len + 3);
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn new_head_never_overlaps_body_after_legal_step() {
        let grid = grid_18x10();
        let mut snake = Snake::spawn(&grid);
        snake.add_growth(5);

        for step in 0..20 {
            // Wander in a rectangle to exercise turns.
            let dir = match step % 4 {
                0 => Direction::Up,
                1 => Direction::Left,
                2 => Direction::Down,
                _ => Direction::Right,
            };
            snake.queue_direction(dir);
            if let StepOutcome::Moved { new_head } = snake.advance(&grid) {
                let overlaps = snake.body().skip(1).filter(|&p| p == new_head).count();
                assert_eq!(overlaps, 0, "head overlaps body at step {step}");
            } else {
                break;
            }
        }
    }
}
