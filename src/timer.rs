//! Tick timer lifecycle
//!
//! The host owns the actual interval (`setInterval` in the browser). This
//! module only decides what the host must do with it: a timer exists exactly
//! while the game is running, and is recreated whenever the interval changes.

use crate::sim::GameStatus;

/// Instruction for the host timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Leave the current timer alone
    Keep,
    /// No timer is running; install one firing every `ms`
    Start(u32),
    /// Tear down the current timer and install a new one firing every `ms`
    Restart(u32),
    /// Tear down the current timer
    Stop,
}

/// Tracks the cadence the host timer currently runs at
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    active_ms: Option<u32>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the timer with the game's status and interval
    pub fn sync(&mut self, status: GameStatus, interval_ms: u32) -> TimerCommand {
        let wanted = (status == GameStatus::Running).then_some(interval_ms);
        let command = match (self.active_ms, wanted) {
            (None, None) => TimerCommand::Keep,
            (None, Some(ms)) => TimerCommand::Start(ms),
            (Some(_), None) => TimerCommand::Stop,
            (Some(cur), Some(ms)) if cur == ms => TimerCommand::Keep,
            (Some(_), Some(ms)) => TimerCommand::Restart(ms),
        };
        self.active_ms = wanted;
        command
    }

    /// Force a fresh timer (after reset), so no tick from the old run fires
    pub fn restart(&mut self, status: GameStatus, interval_ms: u32) -> TimerCommand {
        match self.sync(status, interval_ms) {
            TimerCommand::Keep if self.active_ms.is_some() => TimerCommand::Restart(interval_ms),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_on_running() {
        let mut ticker = Ticker::new();
        assert_eq!(ticker.sync(GameStatus::NotStarted, 150), TimerCommand::Keep);
        assert_eq!(ticker.sync(GameStatus::Running, 150), TimerCommand::Start(150));
        assert_eq!(ticker.active_ms, Some(150));
    }

    #[test]
    fn test_keep_while_unchanged() {
        let mut ticker = Ticker::new();
        ticker.sync(GameStatus::Running, 150);
        assert_eq!(ticker.sync(GameStatus::Running, 150), TimerCommand::Keep);
    }

    #[test]
    fn test_restart_on_interval_change() {
        let mut ticker = Ticker::new();
        ticker.sync(GameStatus::Running, 150);
        assert_eq!(ticker.sync(GameStatus::Running, 140), TimerCommand::Restart(140));
        assert_eq!(ticker.active_ms, Some(140));
    }

    #[test]
    fn test_stop_when_leaving_running() {
        let mut ticker = Ticker::new();
        ticker.sync(GameStatus::Running, 150);
        assert_eq!(ticker.sync(GameStatus::Paused, 150), TimerCommand::Stop);
        assert_eq!(ticker.active_ms, None);
        assert_eq!(ticker.sync(GameStatus::Running, 150), TimerCommand::Start(150));
        assert_eq!(ticker.sync(GameStatus::Over, 150), TimerCommand::Stop);
    }

    #[test]
    fn test_forced_restart() {
        let mut ticker = Ticker::new();
        ticker.sync(GameStatus::Running, 150);
        assert_eq!(ticker.restart(GameStatus::Running, 150), TimerCommand::Restart(150));

        let mut idle = Ticker::new();
        assert_eq!(idle.restart(GameStatus::Running, 150), TimerCommand::Start(150));
    }
}
