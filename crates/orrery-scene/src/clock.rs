//! Freezable simulation clock.

use crate::SceneError;

/// Accumulated simulation time with a freeze switch.
///
/// Starts at zero and running. While frozen, [`advance`](Self::advance)
/// leaves the elapsed time untouched, so every orbit and rotation angle
/// derived from it holds still. Elapsed time is unbounded; f64 precision
/// loss over very long runs is accepted, not corrected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneClock {
    elapsed: f64,
    frozen: bool,
}

impl SceneClock {
    /// Creates a running clock at `t = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances simulated time by `dt` wall-clock seconds, unless frozen.
    ///
    /// `dt` must come from a monotonic clock; a negative delta is rejected
    /// without modifying the clock.
    pub fn advance(&mut self, dt: f64) -> Result<(), SceneError> {
        if dt < 0.0 {
            return Err(SceneError::NegativeDelta(dt));
        }
        if !self.frozen {
            self.elapsed += dt;
        }
        Ok(())
    }

    /// Flips the frozen flag. Elapsed time is untouched.
    pub fn toggle_frozen(&mut self) {
        self.frozen = !self.frozen;
    }

    /// Whether the clock currently ignores `advance`.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Accumulated simulation seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_running() {
        let clock = SceneClock::new();
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.is_frozen());
    }

    #[test]
    fn test_advance_accumulates() {
        let mut clock = SceneClock::new();
        clock.advance(0.5).unwrap();
        clock.advance(0.25).unwrap();
        assert_eq!(clock.elapsed(), 0.75);
    }

    #[test]
    fn test_frozen_clock_holds_still() {
        let mut clock = SceneClock::new();
        clock.advance(1.0).unwrap();
        clock.toggle_frozen();
        clock.advance(123.0).unwrap();
        clock.advance(4.5).unwrap();
        assert_eq!(clock.elapsed(), 1.0);

        // Unfreezing resumes by exactly the next delta.
        clock.toggle_frozen();
        clock.advance(0.5).unwrap();
        assert_eq!(clock.elapsed(), 1.5);
    }

    #[test]
    fn test_toggle_does_not_touch_elapsed() {
        let mut clock = SceneClock::new();
        clock.advance(2.0).unwrap();
        clock.toggle_frozen();
        clock.toggle_frozen();
        assert_eq!(clock.elapsed(), 2.0);
    }

    #[test]
    fn test_negative_delta_rejected() {
        let mut clock = SceneClock::new();
        clock.advance(1.0).unwrap();
        assert_eq!(clock.advance(-0.1), Err(SceneError::NegativeDelta(-0.1)));
        assert_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn test_zero_delta_is_a_noop() {
        let mut clock = SceneClock::new();
        clock.advance(0.0).unwrap();
        assert_eq!(clock.elapsed(), 0.0);
    }
}
