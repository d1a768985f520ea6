//! Mesh generation error types.

/// Errors for invalid generator parameters.
///
/// All generators validate their parameters up front and return no partial
/// buffers on failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A sphere resolution of zero would make the angular step undefined.
    #[error("sphere resolution must be at least 1")]
    ZeroResolution,

    /// Ring radii must satisfy `0 <= inner < outer`.
    #[error("ring radii must satisfy 0 <= inner < outer (got inner={inner}, outer={outer})")]
    InvalidRingRadii {
        /// Requested inner radius.
        inner: f32,
        /// Requested outer radius.
        outer: f32,
    },

    /// Fewer than 3 angular steps cannot close an annulus.
    #[error("ring resolution must be at least 3 (got {0})")]
    RingResolutionTooLow(u32),
}
