//! Game session
//!
//! Binds the simulation to the high score store and the tick timer. Every
//! operation hands back the [`TimerCommand`] the host must apply so that no
//! stale tick can fire against a superseded state.

use crate::highscores::{HighScore, ScoreStore};
use crate::input::Command;
use crate::sim::{Cell, Direction, GameConfig, GameState, GameStatus, TickEvents, tick};
use crate::timer::{Ticker, TimerCommand};

/// Read-only view handed to the render layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Body cells, head first
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u64,
    pub high_score: u64,
    pub status: GameStatus,
    pub interval_ms: u32,
    /// The run that just ended set a new high score
    pub new_record: bool,
}

impl Snapshot {
    /// HUD panels by element id, with whether each should be shown
    pub fn panels(&self) -> [(&'static str, bool); 5] {
        let over = self.status == GameStatus::Over;
        [
            ("start-overlay", self.status == GameStatus::NotStarted),
            ("pause-overlay", self.status == GameStatus::Paused),
            ("game-over", over),
            ("new-record", over && self.new_record),
            (
                "pause-btn",
                matches!(self.status, GameStatus::Running | GameStatus::Paused),
            ),
        ]
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickUpdate {
    pub events: TickEvents,
    pub new_record: bool,
    pub timer: TimerCommand,
}

/// A game session with persistent high score
pub struct Game<S: ScoreStore> {
    state: GameState,
    high_score: HighScore,
    store: S,
    ticker: Ticker,
    new_record: bool,
}

impl<S: ScoreStore> Game<S> {
    pub fn new(config: GameConfig, seed: u64, store: S) -> Self {
        let high_score = HighScore::load(&store);
        Self {
            state: GameState::new(config, seed),
            high_score,
            store,
            ticker: Ticker::new(),
            new_record: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best
    }

    pub fn start(&mut self) -> TimerCommand {
        self.state.start();
        self.sync_timer()
    }

    pub fn set_direction(&mut self, dir: Direction) -> TimerCommand {
        self.state.set_direction(dir);
        TimerCommand::Keep
    }

    pub fn toggle_pause(&mut self) -> TimerCommand {
        self.state.toggle_pause();
        self.sync_timer()
    }

    pub fn reset(&mut self) -> TimerCommand {
        self.state.reset();
        self.new_record = false;
        log::info!("Game reset");
        self.ticker.restart(self.state.status, self.state.interval_ms)
    }

    /// Advance one step; on game over the high score is settled
    pub fn tick(&mut self) -> TickUpdate {
        let events = tick(&mut self.state);
        let mut new_record = false;
        if events.game_over() {
            new_record = self.high_score.submit(self.state.score, &self.store);
            self.new_record = new_record;
        }
        TickUpdate {
            events,
            new_record,
            timer: self.sync_timer(),
        }
    }

    /// Apply a player command with the same guards the on-screen controls use
    pub fn apply(&mut self, command: Command) -> TimerCommand {
        let status = self.state.status;
        match command {
            Command::Turn(_) if status == GameStatus::Over => TimerCommand::Keep,
            Command::Turn(dir) if status == GameStatus::NotStarted && dir != Direction::Right => {
                TimerCommand::Keep
            }
            Command::Turn(dir) => self.set_direction(dir),
            Command::StartOrPause if status == GameStatus::NotStarted => self.start(),
            Command::StartOrPause => self.toggle_pause(),
            Command::Restart if status == GameStatus::NotStarted => self.start(),
            Command::Restart => self.reset(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.state.snake.iter().copied().collect(),
            food: self.state.food,
            score: self.state.score,
            high_score: self.high_score.best,
            status: self.state.status,
            interval_ms: self.state.interval_ms,
            new_record: self.new_record,
        }
    }

    fn sync_timer(&mut self) -> TimerCommand {
        self.ticker.sync(self.state.status, self.state.interval_ms)
    }
}
