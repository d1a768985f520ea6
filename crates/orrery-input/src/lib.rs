//! Per-frame input intent snapshot.
//!
//! The platform layer (window events, key callbacks) collects raw input into
//! an [`InputIntents`] value once per frame and hands it to the simulation by
//! argument. No component reads shared mutable input state.

use glam::Vec2;

/// One frame's worth of operator intent.
///
/// Held keys are level-triggered and persist across frames until the platform
/// layer reports a release; the cursor sample, scroll delta, and freeze
/// toggle are edge-triggered and reset by [`clear_transients`](Self::clear_transients).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputIntents {
    /// Move along the camera's front vector.
    pub forward: bool,
    /// Move against the camera's front vector.
    pub back: bool,
    /// Strafe against the camera's right vector.
    pub left: bool,
    /// Strafe along the camera's right vector.
    pub right: bool,
    /// Move along world up.
    pub ascend: bool,
    /// Move against world up.
    pub descend: bool,
    /// Narrow the field of view while held.
    pub zoom_in: bool,
    /// Widen the field of view while held.
    pub zoom_out: bool,
    /// Absolute cursor position sample in pixels, if the cursor moved.
    pub cursor: Option<Vec2>,
    /// Scroll wheel delta accumulated this frame.
    pub scroll: f32,
    /// Freeze/unfreeze the simulation clock (key press edge).
    pub toggle_freeze: bool,
}

impl InputIntents {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cursor position sample for this frame.
    pub fn sample_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Some(Vec2::new(x, y));
    }

    /// Accumulates a scroll wheel delta for this frame.
    pub fn add_scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    /// Resets the edge-triggered fields at end of frame. Held movement and
    /// zoom keys are left alone.
    pub fn clear_transients(&mut self) {
        self.cursor = None;
        self.scroll = 0.0;
        self.toggle_freeze = false;
    }

    /// Whether any movement key is held.
    pub fn any_movement(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.ascend || self.descend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_transients_keeps_held_keys() {
        let mut intents = InputIntents {
            forward: true,
            zoom_in: true,
            scroll: 2.5,
            toggle_freeze: true,
            ..Default::default()
        };
        intents.sample_cursor(100.0, 200.0);

        intents.clear_transients();
        assert!(intents.forward);
        assert!(intents.zoom_in);
        assert!(intents.cursor.is_none());
        assert_eq!(intents.scroll, 0.0);
        assert!(!intents.toggle_freeze);
    }

    #[test]
    fn test_scroll_accumulates_within_frame() {
        let mut intents = InputIntents::new();
        intents.add_scroll(1.0);
        intents.add_scroll(-0.25);
        assert_eq!(intents.scroll, 0.75);
    }

    #[test]
    fn test_any_movement() {
        let mut intents = InputIntents::new();
        assert!(!intents.any_movement());
        intents.descend = true;
        assert!(intents.any_movement());
    }
}
