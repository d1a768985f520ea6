//! The per-frame simulation driver.

use orrery_camera::FreeFlyCamera;
use orrery_input::InputIntents;
use orrery_scene::{Scene, SceneClock, SceneError};

use crate::frame::{BodyRender, FrameState};

/// The explicit scene context: clock, body graph, and camera.
///
/// All frame-to-frame state lives here and is mutated only through
/// [`frame`](Self::frame), in strict single-threaded sequence: freeze
/// toggle, clock advance, transform solve, camera update. No component
/// reads shared mutable state behind the caller's back.
#[derive(Debug, Clone)]
pub struct SceneContext {
    clock: SceneClock,
    scene: Scene,
    camera: FreeFlyCamera,
}

impl SceneContext {
    /// Wraps a validated scene and a configured camera.
    pub fn new(scene: Scene, camera: FreeFlyCamera, start_frozen: bool) -> Self {
        let mut clock = SceneClock::new();
        if start_frozen {
            clock.toggle_frozen();
        }
        Self {
            clock,
            scene,
            camera,
        }
    }

    /// Steps one frame and returns the renderer-facing state.
    ///
    /// `dt` is the wall-clock delta in seconds and must be non-negative;
    /// the clock rejects anything else before any state changes.
    pub fn frame(&mut self, intents: &InputIntents, dt: f64) -> Result<FrameState, SceneError> {
        if intents.toggle_freeze {
            self.clock.toggle_frozen();
        }
        self.clock.advance(dt)?;
        self.scene.update_transforms(self.clock.elapsed());
        self.camera.apply_intents(intents, dt as f32);
        Ok(self.frame_state())
    }

    /// Snapshots the current poses and camera matrices without stepping.
    pub fn frame_state(&self) -> FrameState {
        let bodies = self
            .scene
            .bodies()
            .iter()
            .zip(self.scene.poses())
            .map(|(spec, pose)| BodyRender {
                name: spec.name.clone(),
                model: pose.world.to_cols_array(),
                ring: pose.ring.map(|m| m.to_cols_array()),
            })
            .collect();

        FrameState {
            bodies,
            view: self.camera.view_matrix().to_cols_array(),
            projection: self.camera.projection_matrix().to_cols_array(),
            camera_position: self.camera.position().to_array(),
            light_position: self.scene.light_position().to_array(),
        }
    }

    /// The simulation clock.
    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }

    /// The validated scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera, for startup positioning by the caller.
    pub fn camera_mut(&mut self) -> &mut FreeFlyCamera {
        &mut self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_scene::{BodySpec, presets};

    fn demo_context() -> SceneContext {
        let scene = Scene::new(presets::solar_system()).unwrap();
        SceneContext::new(scene, FreeFlyCamera::new(), false)
    }

    fn body_position(state: &FrameState, name: &str) -> [f32; 3] {
        let body = state.bodies.iter().find(|b| b.name == name).unwrap();
        [body.model[12], body.model[13], body.model[14]]
    }

    #[test]
    fn test_frame_advances_clock_and_poses() {
        let mut ctx = demo_context();
        let intents = InputIntents::new();

        let first = ctx.frame(&intents, 0.5).unwrap();
        let second = ctx.frame(&intents, 0.5).unwrap();
        assert_eq!(ctx.clock().elapsed(), 1.0);
        assert_ne!(
            body_position(&first, "earth"),
            body_position(&second, "earth")
        );
    }

    #[test]
    fn test_freeze_intent_stops_motion() {
        let mut ctx = demo_context();
        let mut intents = InputIntents::new();

        ctx.frame(&intents, 0.25).unwrap();
        intents.toggle_freeze = true;
        let frozen = ctx.frame(&intents, 0.25).unwrap();
        intents.clear_transients();
        let still = ctx.frame(&intents, 10.0).unwrap();

        assert!(ctx.clock().is_frozen());
        assert_eq!(ctx.clock().elapsed(), 0.25);
        assert_eq!(
            body_position(&frozen, "moon"),
            body_position(&still, "moon")
        );
    }

    #[test]
    fn test_start_frozen() {
        let scene = Scene::new(presets::solar_system()).unwrap();
        let mut ctx = SceneContext::new(scene, FreeFlyCamera::new(), true);
        ctx.frame(&InputIntents::new(), 5.0).unwrap();
        assert_eq!(ctx.clock().elapsed(), 0.0);
    }

    #[test]
    fn test_negative_delta_propagates() {
        let mut ctx = demo_context();
        assert_eq!(
            ctx.frame(&InputIntents::new(), -1.0),
            Err(SceneError::NegativeDelta(-1.0))
        );
    }

    #[test]
    fn test_frame_state_carries_the_render_contract() {
        let mut ctx = demo_context();
        let state = ctx.frame(&InputIntents::new(), 1.0 / 60.0).unwrap();

        assert_eq!(state.bodies.len(), 4);
        assert_eq!(state.light_position, [0.0, 0.0, 0.0]);
        // Perspective projection: w comes from -z, no translation column.
        assert_eq!(state.projection[11], -1.0);
        assert_eq!(state.projection[15], 0.0);
        // Exactly the ringed body carries a ring transform.
        let ringed: Vec<_> = state
            .bodies
            .iter()
            .filter(|b| b.ring.is_some())
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(ringed, ["saturn"]);
    }

    #[test]
    fn test_camera_intents_reach_the_camera() {
        let scene = Scene::new(vec![BodySpec::new("sun", 1.0)]).unwrap();
        let mut ctx = SceneContext::new(scene, FreeFlyCamera::new(), false);
        let start = ctx.frame_state().camera_position;

        let intents = InputIntents {
            forward: true,
            ..Default::default()
        };
        let moved = ctx.frame(&intents, 1.0).unwrap();
        assert_ne!(moved.camera_position, start);
    }
}
