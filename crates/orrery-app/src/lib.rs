//! Frame orchestration for the orrery demo.
//!
//! Owns the explicit scene context (clock, body graph, camera) and steps it
//! once per frame from a platform-supplied input snapshot and wall-clock
//! delta, producing the flat [`FrameState`] a rendering layer consumes.

mod context;
mod frame;

pub use context::SceneContext;
pub use frame::{BodyRender, FrameState};
