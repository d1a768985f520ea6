//! Camera parameter error types.

/// Errors for invalid projection parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// Clip planes must satisfy `0 < near < far`.
    #[error("clip planes must satisfy 0 < near < far (got near={near}, far={far})")]
    InvalidPlanes {
        /// Requested near plane.
        near: f32,
        /// Requested far plane.
        far: f32,
    },

    /// Field of view must be a usable perspective angle.
    #[error("field of view must be in (0, 180] degrees (got {0})")]
    InvalidFov(f32),

    /// Aspect ratio must be positive.
    #[error("aspect ratio must be positive (got {0})")]
    InvalidAspect(f32),
}
