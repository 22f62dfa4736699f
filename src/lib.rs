//! Grid Snake - a grid-based snake arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake movement, collisions, food)
//! - `game`: Session wrapper binding the simulation to high scores and the tick timer
//! - `timer`: Tick interval lifecycle policy
//! - `renderer`: WebGPU rendering pipeline
//! - `input`: Keyboard/swipe mapping to game commands
//! - `highscores`: High score persistence

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game;
pub mod highscores;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timer;

pub use game::{Game, Snapshot};
pub use highscores::{HighScore, MemoryStore, ScoreStore, StorageError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Cells per side of the square board
    pub const GRID_SIZE: i32 = 20;
    /// Where a fresh snake spawns
    pub const INITIAL_CELL: (i32, i32) = (10, 10);

    /// Starting tick interval (ms)
    pub const INITIAL_INTERVAL_MS: u32 = 150;
    /// Interval reduction applied at each speed-up threshold (ms)
    pub const INTERVAL_STEP_MS: u32 = 10;
    /// Fastest allowed tick interval (ms)
    pub const MIN_INTERVAL_MS: u32 = 50;

    /// Points per food eaten
    pub const FOOD_SCORE: u64 = 10;
    /// Speed up every N foods; the score threshold is FOOD_SCORE * this
    pub const FOODS_PER_SPEEDUP: u64 = 5;

    /// Rejection sampling attempts before falling back to a free-cell scan
    pub const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

    /// Minimum swipe distance in CSS pixels
    pub const SWIPE_THRESHOLD_PX: f32 = 30.0;
}
