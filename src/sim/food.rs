//! Food placement

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::config::GameConfig;
use super::state::Cell;
use crate::consts::FOOD_SAMPLE_ATTEMPTS;

/// Pick a uniformly random cell not covered by `snake`.
///
/// Rejection sampling while the board is sparse; after a fixed number of
/// misses the free cells are enumerated and one is chosen directly, so a
/// nearly full board still terminates. Returns `None` when no cell is free.
pub fn place_food<R: Rng>(config: &GameConfig, snake: &VecDeque<Cell>, rng: &mut R) -> Option<Cell> {
    if snake.len() >= config.cell_count() {
        return None;
    }

    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let candidate = Cell::new(
            rng.random_range(0..config.grid_size),
            rng.random_range(0..config.grid_size),
        );
        if !snake.contains(&candidate) {
            return Some(candidate);
        }
    }

    log::debug!(
        "Food sampling missed {} times, scanning free cells (snake length {})",
        FOOD_SAMPLE_ATTEMPTS,
        snake.len()
    );
    let free: Vec<Cell> = (0..config.grid_size)
        .flat_map(|y| (0..config.grid_size).map(move |x| Cell::new(x, y)))
        .filter(|cell| !snake.contains(cell))
        .collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_food_avoids_snake() {
        let config = GameConfig::default();
        let snake = VecDeque::from([Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]);
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..200 {
            let food = place_food(&config, &snake, &mut rng).expect("board has room");
            assert!(config.in_bounds(food));
            assert!(!snake.contains(&food));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let config = GameConfig::with_grid(4);
        let snake: VecDeque<Cell> = (0..4)
            .flat_map(|y| (0..4).map(move |x| Cell::new(x, y)))
            .filter(|c| *c != Cell::new(2, 3))
            .collect();
        let mut rng = Pcg32::seed_from_u64(99);
        assert_eq!(place_food(&config, &snake, &mut rng), Some(Cell::new(2, 3)));
    }

    #[test]
    fn test_full_board_has_no_food() {
        let config = GameConfig::with_grid(2);
        let snake = VecDeque::from([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ]);
        let mut rng = Pcg32::seed_from_u64(3);
        assert_eq!(place_food(&config, &snake, &mut rng), None);
    }

    #[test]
    fn test_same_seed_same_food() {
        let config = GameConfig::default();
        let snake = VecDeque::from([Cell::new(10, 10)]);
        let a = place_food(&config, &snake, &mut Pcg32::seed_from_u64(42));
        let b = place_food(&config, &snake, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
