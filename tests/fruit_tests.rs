//! Statistical checks on fruit spawning.

use std::collections::HashMap;

use tui_snake::core::{FruitSpawner, Grid, Snake};
use tui_snake::types::{FRUIT_KINDS, TOTAL_SPAWN_WEIGHT};

const DRAWS: u32 = 10_000;

#[test]
fn test_kind_frequencies_track_spawn_weights() {
    let grid = Grid::with_dimensions(18, 10);
    let snake = Snake::spawn(&grid);
    let mut spawner = FruitSpawner::new(777);

    let mut counts: HashMap<&'static str, u32> = HashMap::new();
    for _ in 0..DRAWS {
        let fruit = spawner.spawn(&grid, &snake, &[]).unwrap();
        *counts.entry(fruit.kind.id).or_insert(0) += 1;
    }

    for kind in &FRUIT_KINDS {
        let observed = counts.get(kind.id).copied().unwrap_or(0);
        let expected = DRAWS * kind.spawn_weight / TOTAL_SPAWN_WEIGHT;
        // Generous bounds; the draw is deterministic for a fixed seed, so
        // this guards the weighting logic rather than the RNG's quality.
        let lo = expected * 3 / 4;
        let hi = expected * 5 / 4;
        assert!(
            (lo..=hi).contains(&observed),
            "{}: observed {} outside [{}, {}]",
            kind.id,
            observed,
            lo,
            hi
        );
    }
}

#[test]
fn test_placements_cover_the_board() {
    let grid = Grid::with_dimensions(18, 10);
    let snake = Snake::spawn(&grid);
    let mut spawner = FruitSpawner::new(4242);

    let mut seen = HashMap::new();
    for _ in 0..DRAWS {
        let fruit = spawner.spawn(&grid, &snake, &[]).unwrap();
        *seen.entry(fruit.position).or_insert(0u32) += 1;
    }

    let free_cells = grid.cell_count() as usize - snake.len();
    // Uniform placement over 176 free cells should touch nearly all of them
    // in 10k draws.
    assert!(
        seen.len() >= free_cells * 9 / 10,
        "only {} of {} free cells were ever used",
        seen.len(),
        free_cells
    );
    // And never a snake cell.
    assert!(seen.keys().all(|&p| !snake.occupies(p)));
}
