//! Hierarchical celestial scene state: orbital bodies, the simulation clock,
//! and the per-frame transform solver.
//!
//! Bodies form a parent/child DAG (moon orbits earth orbits the origin),
//! validated once at construction by topological sort. Every frame the solver
//! derives each body's world transform from the single freezable simulated
//! time, in parent-before-child order.

mod body;
mod clock;
mod error;
pub mod presets;
mod scene;

pub use body::{BodySpec, RingParams};
pub use clock::SceneClock;
pub use error::SceneError;
pub use scene::{BodyPose, Scene, local_transform, period_angle};
