//! Scoring module - line clear points and the session score counter
//!
//! Every cleared row is worth [`LINE_CLEAR_POINTS`], with no multipliers. The
//! counter itself knows nothing about display: it only remembers that its
//! value changed so the driver can push the new value to whoever shows it.

use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `lines` rows in one lock
pub fn line_clear_points(lines: u32) -> u32 {
    LINE_CLEAR_POINTS * lines
}

/// Session score with a pending-change flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    value: u32,
    changed: bool,
}

impl ScoreTracker {
    /// A zero score that is already marked changed, so the initial value
    /// reaches the display on the first frame.
    pub fn new() -> Self {
        Self {
            value: 0,
            changed: true,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Add points. Adding zero is not a change.
    pub fn add(&mut self, points: u32) {
        if points == 0 {
            return;
        }
        self.value = self.value.saturating_add(points);
        self.changed = true;
    }

    /// Reset to zero (board overflow).
    pub fn reset(&mut self) {
        self.value = 0;
        self.changed = true;
    }

    /// Take the value to publish, if it changed since the last call.
    pub fn take_change(&mut self) -> Option<u32> {
        if self.changed {
            self.changed = false;
            Some(self.value)
        } else {
            None
        }
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 10);
        assert_eq!(line_clear_points(2), 20);
        assert_eq!(line_clear_points(4), 40);
    }

    #[test]
    fn test_initial_value_is_published_once() {
        let mut score = ScoreTracker::new();
        assert_eq!(score.take_change(), Some(0));
        assert_eq!(score.take_change(), None);
    }

    #[test]
    fn test_add_accumulates_and_publishes() {
        let mut score = ScoreTracker::new();
        score.take_change();

        score.add(10);
        score.add(20);
        assert_eq!(score.value(), 30);
        assert_eq!(score.take_change(), Some(30));
        assert_eq!(score.take_change(), None);
    }

    #[test]
    fn test_add_zero_is_not_a_change() {
        let mut score = ScoreTracker::new();
        score.take_change();
        score.add(0);
        assert_eq!(score.take_change(), None);
    }

    #[test]
    fn test_reset_always_publishes() {
        let mut score = ScoreTracker::new();
        score.add(50);
        score.take_change();

        score.reset();
        assert_eq!(score.value(), 0);
        assert_eq!(score.take_change(), Some(0));
    }
}
