//! Board and pacing configuration

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable rules for a run. Defaults match the classic 20x20 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per side of the square board
    pub grid_size: i32,
    /// Spawn cell for a fresh snake
    pub initial_cell: IVec2,
    /// Starting tick interval (ms)
    pub initial_interval_ms: u32,
    /// Interval reduction per speed-up (ms)
    pub interval_step_ms: u32,
    /// Interval floor (ms)
    pub min_interval_ms: u32,
    /// Points awarded per food
    pub food_score: u64,
    /// Foods between speed-ups
    pub foods_per_speedup: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_cell: IVec2::new(INITIAL_CELL.0, INITIAL_CELL.1),
            initial_interval_ms: INITIAL_INTERVAL_MS,
            interval_step_ms: INTERVAL_STEP_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            food_score: FOOD_SCORE,
            foods_per_speedup: FOODS_PER_SPEEDUP,
        }
    }
}

impl GameConfig {
    /// Square board of the given size, snake spawning at its centre
    pub fn with_grid(grid_size: i32) -> Self {
        Self {
            grid_size,
            initial_cell: IVec2::splat(grid_size / 2),
            ..Default::default()
        }
    }

    /// Score multiple that triggers a speed-up.
    ///
    /// Derived from the food score so the two constants can't drift apart.
    pub fn speedup_score(&self) -> u64 {
        self.food_score * self.foods_per_speedup
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.grid_size * self.grid_size) as usize
    }

    /// True if `cell` lies on the board
    #[inline]
    pub fn in_bounds(&self, cell: IVec2) -> bool {
        (0..self.grid_size).contains(&cell.x) && (0..self.grid_size).contains(&cell.y)
    }

    /// Next tick interval after a speed-up, clamped to the floor
    pub fn faster_interval(&self, current_ms: u32) -> u32 {
        current_ms
            .saturating_sub(self.interval_step_ms)
            .max(self.min_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_cell, IVec2::new(10, 10));
        assert_eq!(config.initial_interval_ms, 150);
        assert_eq!(config.speedup_score(), 50);
    }

    #[test]
    fn test_in_bounds() {
        let config = GameConfig::default();
        assert!(config.in_bounds(IVec2::new(0, 0)));
        assert!(config.in_bounds(IVec2::new(19, 19)));
        assert!(!config.in_bounds(IVec2::new(20, 10)));
        assert!(!config.in_bounds(IVec2::new(10, -1)));
    }

    #[test]
    fn test_faster_interval_floors() {
        let config = GameConfig::default();
        assert_eq!(config.faster_interval(150), 140);
        assert_eq!(config.faster_interval(55), 50);
        assert_eq!(config.faster_interval(50), 50);
    }

    #[test]
    fn test_with_grid_centres_spawn() {
        let config = GameConfig::with_grid(8);
        assert_eq!(config.initial_cell, IVec2::new(4, 4));
        assert_eq!(config.cell_count(), 64);
    }
}
