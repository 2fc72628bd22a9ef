//! Fruit module - placement search and weighted kind selection.
//!
//! A free cell is any grid cell occupied by neither the snake body nor an
//! active fruit. Placement picks uniformly among free cells without
//! allocating: one pass counts them, a second pass finds the drawn index.

use tui_snake_types::{FruitKind, Point, FRUIT_KINDS, TOTAL_SPAWN_WEIGHT};

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snake::Snake;

/// An active fruit on the board.
///
/// `id` is unique within a session and monotonically increasing, so renderers
/// can track fruit identity across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    pub id: u32,
    pub position: Point,
    pub kind: &'static FruitKind,
}

/// Spawns fruits: uniform placement over free cells plus a weighted draw
/// over the static kind table.
#[derive(Debug, Clone)]
pub struct FruitSpawner {
    rng: SimpleRng,
    next_id: u32,
}

impl FruitSpawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Spawn one fruit on a free cell, or `None` if the board is full.
    ///
    /// A full board is not an error: the session simply runs with fewer
    /// fruits until space frees up.
    pub fn spawn(&mut self, grid: &Grid, snake: &Snake, fruits: &[Fruit]) -> Option<Fruit> {
        let position = self.find_free_cell(grid, snake, fruits)?;
        let kind = self.pick_kind();

        Some(Fruit {
            id: self.allocate_id(),
            position,
            kind,
        })
    }

    /// Allocate the next fruit id without spawning.
    pub(crate) fn allocate_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Uniformly pick a free cell, or `None` if none exists.
    fn find_free_cell(&mut self, grid: &Grid, snake: &Snake, fruits: &[Fruit]) -> Option<Point> {
        let free_count = Self::free_cells(grid, snake, fruits).count() as u32;
        if free_count == 0 {
            return None;
        }

        let target = self.rng.next_range(free_count) as usize;
        Self::free_cells(grid, snake, fruits).nth(target)
    }

    fn free_cells<'a>(
        grid: &'a Grid,
        snake: &'a Snake,
        fruits: &'a [Fruit],
    ) -> impl Iterator<Item = Point> + 'a {
        (0..grid.cols() as i16).flat_map(move |x| {
            (0..grid.rows() as i16).filter_map(move |y| {
                let p = Point::new(x, y);
                let occupied = snake.occupies(p) || fruits.iter().any(|f| f.position == p);
                (!occupied).then_some(p)
            })
        })
    }

    /// Weighted discrete draw over the static fruit table.
    ///
    /// Draws `r` in `[0, TOTAL_SPAWN_WEIGHT)` and walks the table in fixed
    /// order: the first entry whose weight exceeds the running remainder is
    /// selected, giving each kind exactly `weight / total` probability.
    fn pick_kind(&mut self) -> &'static FruitKind {
        let mut r = self.rng.next_range(TOTAL_SPAWN_WEIGHT);
        for kind in &FRUIT_KINDS {
            if r < kind.spawn_weight {
                return kind;
            }
            r -= kind.spawn_weight;
        }
        // Unreachable while the table weights sum to TOTAL_SPAWN_WEIGHT.
        &FRUIT_KINDS[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_snake_types::Direction;

    #[test]
    fn spawned_fruit_avoids_snake_and_fruits() {
        let grid = Grid::with_dimensions(18, 10);
        let snake = Snake::spawn(&grid);
        let mut spawner = FruitSpawner::new(42);

        let mut fruits: Vec<Fruit> = Vec::new();
        for _ in 0..3 {
            let fruit = spawner.spawn(&grid, &snake, &fruits).unwrap();
            assert!(grid.contains(fruit.position));
            assert!(!snake.occupies(fruit.position));
            assert!(fruits.iter().all(|f| f.position != fruit.position));
            fruits.push(fruit);
        }
    }

    #[test]
    fn fruit_ids_are_monotonic() {
        let grid = Grid::with_dimensions(18, 10);
        let snake = Snake::spawn(&grid);
        let mut spawner = FruitSpawner::new(42);

        let mut last_id = 0;
        let mut fruits: Vec<Fruit> = Vec::new();
        for _ in 0..5 {
            let fruit = spawner.spawn(&grid, &snake, &fruits).unwrap();
            assert!(fruit.id > last_id);
            last_id = fruit.id;
            fruits.push(fruit);
        }
    }

    #[test]
    fn full_board_yields_none_not_panic() {
        // 3x1 grid fully covered by the snake body.
        let grid = Grid::with_dimensions(3, 1);
        let snake = Snake::from_body(
            vec![Point::new(2, 0), Point::new(1, 0), Point::new(0, 0)],
            Direction::Right,
        );
        let mut spawner = FruitSpawner::new(1);

        assert_eq!(spawner.spawn(&grid, &snake, &[]), None);
    }

    #[test]
    fn last_free_cell_is_found() {
        // 2x2 grid with three cells taken: the spawn must land on the fourth.
        let grid = Grid::with_dimensions(2, 2);
        let snake = Snake::from_body(
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)],
            Direction::Up,
        );
        let mut spawner = FruitSpawner::new(99);

        let fruit = spawner.spawn(&grid, &snake, &[]).unwrap();
        assert_eq!(fruit.position, Point::new(1, 0));
    }

    #[test]
    fn same_seed_reproduces_spawn_sequence() {
        let grid = Grid::with_dimensions(18, 10);
        let snake = Snake::spawn(&grid);

        let mut a = FruitSpawner::new(7);
        let mut b = FruitSpawner::new(7);
        for _ in 0..10 {
            let fa = a.spawn(&grid, &snake, &[]).unwrap();
            let fb = b.spawn(&grid, &snake, &[]).unwrap();
            assert_eq!(fa, fb);
        }
    }

    #[test]
    fn every_kind_appears_over_many_draws() {
        let grid = Grid::with_dimensions(18, 10);
        let snake = Snake::spawn(&grid);
        let mut spawner = FruitSpawner::new(2024);

        let mut seen = [false; FRUIT_KINDS.len()];
        for _ in 0..500 {
            let fruit = spawner.spawn(&grid, &snake, &[]).unwrap();
            let idx = FRUIT_KINDS
                .iter()
                .position(|k| k.id == fruit.kind.id)
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {seen:?}");
    }
}
