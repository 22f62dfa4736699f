//! Input mapping
//!
//! Turns raw keyboard keys and touch swipes into game commands. Event
//! listeners live in the entry point; everything here is pure.

use glam::Vec2;

use crate::sim::Direction;

/// A player request, independent of where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Queue a heading
    Turn(Direction),
    /// Start a fresh game, or toggle pause once started
    StartOrPause,
    /// Start over from scratch
    Restart,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    let command = match key {
        "ArrowUp" | "w" | "W" => Command::Turn(Direction::Up),
        "ArrowDown" | "s" | "S" => Command::Turn(Direction::Down),
        "ArrowLeft" | "a" | "A" => Command::Turn(Direction::Left),
        "ArrowRight" | "d" | "D" => Command::Turn(Direction::Right),
        " " | "Spacebar" => Command::StartOrPause,
        "Enter" | "r" | "R" => Command::Restart,
        _ => return None,
    };
    Some(command)
}

/// True for keys the browser would otherwise use to scroll the page
pub fn is_scroll_key(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " ")
}

/// Tracks one touch from start to end
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Vec2>,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn begin(&mut self, pos: Vec2) {
        self.start = Some(pos);
    }

    /// Finish the touch; yields a heading if it travelled far enough
    pub fn end(&mut self, pos: Vec2) -> Option<Direction> {
        let start = self.start.take()?;
        swipe_direction(pos - start, self.threshold)
    }
}

/// Heading for a swipe displacement in screen space (y grows downward).
///
/// The dominant axis decides; displacements within `threshold` on both axes
/// are taps, not swipes.
pub fn swipe_direction(delta: Vec2, threshold: f32) -> Option<Direction> {
    if delta.x.abs() <= threshold && delta.y.abs() <= threshold {
        return None;
    }
    let dir = if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for_key("ArrowUp"), Some(Command::Turn(Direction::Up)));
        assert_eq!(command_for_key("ArrowDown"), Some(Command::Turn(Direction::Down)));
        assert_eq!(command_for_key("ArrowLeft"), Some(Command::Turn(Direction::Left)));
        assert_eq!(command_for_key("ArrowRight"), Some(Command::Turn(Direction::Right)));
    }

    #[test]
    fn test_wasd_either_case() {
        for (key, dir) in [
            ("w", Direction::Up),
            ("W", Direction::Up),
            ("s", Direction::Down),
            ("S", Direction::Down),
            ("a", Direction::Left),
            ("A", Direction::Left),
            ("d", Direction::Right),
            ("D", Direction::Right),
        ] {
            assert_eq!(command_for_key(key), Some(Command::Turn(dir)), "key {key}");
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for_key(" "), Some(Command::StartOrPause));
        assert_eq!(command_for_key("Enter"), Some(Command::Restart));
        assert_eq!(command_for_key("r"), Some(Command::Restart));
        assert_eq!(command_for_key("x"), None);
        assert_eq!(command_for_key("Escape"), None);
    }

    #[test]
    fn test_swipe_below_threshold_is_tap() {
        assert_eq!(swipe_direction(Vec2::new(20.0, -25.0), 30.0), None);
        assert_eq!(swipe_direction(Vec2::new(30.0, 0.0), 30.0), None);
    }

    #[test]
    fn test_swipe_dominant_axis() {
        assert_eq!(swipe_direction(Vec2::new(80.0, 40.0), 30.0), Some(Direction::Right));
        assert_eq!(swipe_direction(Vec2::new(-80.0, 40.0), 30.0), Some(Direction::Left));
        assert_eq!(swipe_direction(Vec2::new(10.0, 45.0), 30.0), Some(Direction::Down));
        assert_eq!(swipe_direction(Vec2::new(10.0, -45.0), 30.0), Some(Direction::Up));
    }

    #[test]
    fn test_swipe_tracker() {
        let mut tracker = SwipeTracker::new(30.0);
        assert_eq!(tracker.end(Vec2::new(100.0, 0.0)), None);

        tracker.begin(Vec2::new(100.0, 100.0));
        assert_eq!(tracker.end(Vec2::new(100.0, 20.0)), Some(Direction::Up));
        // Consumed
        assert_eq!(tracker.end(Vec2::new(100.0, 20.0)), None);
    }
}
