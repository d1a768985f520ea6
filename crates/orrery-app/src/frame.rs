//! Renderer-facing per-frame output.

/// One body's draw parameters for a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRender {
    /// Body identity, for texture/material selection by the renderer.
    pub name: String,
    /// World transform, column-major.
    pub model: [f32; 16],
    /// Ring world transform, column-major, for ringed bodies.
    pub ring: Option<[f32; 16]>,
}

/// Everything the rendering layer needs to draw one frame.
///
/// Matrices are column-major 4x4 float arrays, ready for uniform upload.
/// The mesh buffers themselves are uploaded once at startup and are not
/// part of the per-frame state.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    /// Draw parameters per body, in scene declaration order.
    pub bodies: Vec<BodyRender>,
    /// Camera view matrix.
    pub view: [f32; 16],
    /// Camera projection matrix.
    pub projection: [f32; 16],
    /// Camera world position.
    pub camera_position: [f32; 3],
    /// World position of the scene's light source (the central body).
    pub light_position: [f32; 3],
}
