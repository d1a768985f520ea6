//! Scene configuration and clock error types.

/// Errors raised while validating a scene description or advancing the clock.
///
/// Scene construction either succeeds with a fully validated body graph or
/// fails before the frame loop starts; the only steady-state rejection is a
/// negative clock delta.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// Two bodies share a name, so parent lookups would be ambiguous.
    #[error("duplicate body name {0:?}")]
    DuplicateName(String),

    /// A body names a parent that is not part of the scene.
    #[error("body {body:?} orbits unknown parent {parent:?}")]
    UnknownParent {
        /// Body whose parent reference failed to resolve.
        body: String,
        /// The unresolved parent name.
        parent: String,
    },

    /// The parent graph contains a cycle; such an orbit has no solution.
    #[error("parent graph cycle involving body {0:?}")]
    ParentCycle(String),

    /// Body radii scale the unit sphere and must be positive.
    #[error("body {0:?} must have a positive radius")]
    NonPositiveRadius(String),

    /// Orbit radii are distances and cannot be negative.
    #[error("body {0:?} must have a non-negative orbit radius")]
    NegativeOrbitRadius(String),

    /// Clock deltas come from monotonic wall-clock differences.
    #[error("clock delta must be non-negative (got {0})")]
    NegativeDelta(f64),
}
