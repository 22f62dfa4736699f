//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One grid step per tick
//! - Seeded RNG only
//! - No rendering, timer or platform dependencies

pub mod config;
pub mod food;
pub mod state;
pub mod tick;

pub use config::GameConfig;
pub use food::place_food;
pub use state::{Cell, Direction, GameState, GameStatus, RngState};
pub use tick::{Collision, TickEvents, tick};
