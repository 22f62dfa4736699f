//! Game state and core simulation types
//!
//! The single authoritative record of a run. Input handlers and the tick
//! both go through the methods here, so a tick always sees the latest input.

use std::collections::VecDeque;

use glam::IVec2;
use rand_pcg::Pcg32;

use super::config::GameConfig;
use super::food::place_food;

/// A board coordinate, `0 <= x, y < grid_size`
pub type Cell = IVec2;

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180-degree reverse of this heading
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step on the grid (y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Waiting for the first start input
    #[default]
    NotStarted,
    /// Ticking
    Running,
    /// Frozen by the player
    Paused,
    /// Snake hit a wall or itself
    Over,
}

/// Seeded RNG state.
///
/// Each draw opens a fresh PCG stream, so the sequence of food positions is
/// fully determined by `(seed, stream)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next draw
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream = self.stream.wrapping_add(1);
        rng
    }
}

/// Complete game state (deterministic from its seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Board rules
    pub config: GameConfig,
    /// RNG state
    pub rng_state: RngState,
    /// Body cells, head first
    pub snake: VecDeque<Cell>,
    /// Heading the last tick moved in
    pub heading: Direction,
    /// Heading the next tick will apply
    pub pending: Direction,
    /// Current food cell. `None` only once the board is full.
    pub food: Option<Cell>,
    /// Score
    pub score: u64,
    /// Current tick interval (ms)
    pub interval_ms: u32,
    /// Lifecycle
    pub status: GameStatus,
}

impl GameState {
    /// Create a new, not yet started game
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut state = Self {
            snake: VecDeque::from([config.initial_cell]),
            interval_ms: config.initial_interval_ms,
            config,
            rng_state: RngState::new(seed),
            heading: Direction::Right,
            pending: Direction::Right,
            food: None,
            score: 0,
            status: GameStatus::NotStarted,
        };
        state.respawn_food();
        state
    }

    /// NotStarted -> Running. No-op otherwise.
    pub fn start(&mut self) {
        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Running;
        }
    }

    /// Queue a heading for the next tick.
    ///
    /// Reversing the queued heading is silently ignored, even for a
    /// one-cell snake. Returns whether the request was accepted.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if dir == self.pending.opposite() {
            return false;
        }
        self.pending = dir;
        true
    }

    /// Running <-> Paused. No-op before start and after game over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Start a fresh run immediately (always ends up Running)
    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake.push_back(self.config.initial_cell);
        self.heading = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.interval_ms = self.config.initial_interval_ms;
        self.respawn_food();
        self.status = GameStatus::Running;
    }

    /// Place food on a random free cell
    pub fn respawn_food(&mut self) {
        let mut rng = self.rng_state.next_rng();
        self.food = place_food(&self.config, &self.snake, &mut rng);
    }

    pub fn head(&self) -> Cell {
        // Body is never empty
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// True if any body cell sits on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
