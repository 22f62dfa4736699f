//! Fixed-cadence simulation tick
//!
//! Advances the snake one cell. The host calls this once per tick interval
//! while the game is running.

use super::state::{GameState, GameStatus};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfHit,
    /// Snake covers every cell, nowhere left for food
    BoardFull,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub ate_food: bool,
    /// Interval shrank; applies from the next scheduled tick
    pub sped_up: bool,
    pub collision: Option<Collision>,
}

impl TickEvents {
    pub fn game_over(&self) -> bool {
        self.collision.is_some()
    }
}

/// Advance the game state by one grid step
pub fn tick(state: &mut GameState) -> TickEvents {
    let mut events = TickEvents::default();

    if state.status != GameStatus::Running {
        return events;
    }

    let new_head = state.head() + state.pending.delta();

    if !state.config.in_bounds(new_head) {
        return end_run(state, Collision::Wall);
    }

    if state.occupies(new_head) {
        return end_run(state, Collision::SelfHit);
    }

    // Committed only once the move lands
    state.heading = state.pending;
    state.snake.push_front(new_head);
    if state.food == Some(new_head) {
        events.ate_food = true;
        state.score += state.config.food_score;
        state.respawn_food();

        let threshold = state.config.speedup_score();
        if threshold > 0 && state.score % threshold == 0 {
            let faster = state.config.faster_interval(state.interval_ms);
            events.sped_up = faster != state.interval_ms;
            state.interval_ms = faster;
            log::debug!("Speed up at score {}: {}ms", state.score, state.interval_ms);
        }

        if state.food.is_none() {
            log::info!("Board full at length {}", state.len());
            events.collision = Some(Collision::BoardFull);
            state.status = GameStatus::Over;
        }
    } else {
        state.snake.pop_back();
    }

    events
}

/// Freeze the run; body and heading are left exactly as they were before the tick
fn end_run(state: &mut GameState, collision: Collision) -> TickEvents {
    state.status = GameStatus::Over;
    log::info!(
        "Game over ({:?}) at {:?}, score {}",
        collision,
        state.head(),
        state.score
    );
    TickEvents {
        collision: Some(collision),
        ..Default::default()
    }
}
