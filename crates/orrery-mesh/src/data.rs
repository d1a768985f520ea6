//! Flat vertex/index buffer container shared by all generators.

/// CPU-side geometry buffers, laid out for direct device upload.
///
/// Positions are xyz triples; normals (when present) are parallel-indexed
/// xyz triples; UVs (when present) are parallel-indexed uv pairs; indices
/// (when present) are triangle triples into the shared vertex arrays.
///
/// Normals, UVs, and indices may all be empty: that is the positions-only
/// representation drawn as a flat triangle list (used by the cube).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions, 3 floats per vertex.
    pub positions: Vec<f32>,
    /// Vertex normals, 3 floats per vertex, or empty.
    pub normals: Vec<f32>,
    /// Texture coordinates, 2 floats per vertex, or empty.
    pub uvs: Vec<f32>,
    /// Triangle indices, 3 per triangle, or empty (unindexed draw).
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of vertices in the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles this mesh draws.
    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.vertex_count() / 3
        } else {
            self.indices.len() / 3
        }
    }

    /// Whether this mesh is drawn with an index buffer.
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Checks the cross-buffer invariants: parallel attribute lengths and
    /// in-range indices.
    pub fn is_consistent(&self) -> bool {
        let vertices = self.vertex_count();
        (self.normals.is_empty() || self.normals.len() == self.positions.len())
            && (self.uvs.is_empty() || self.uvs.len() / 2 == vertices)
            && self.indices.iter().all(|&i| (i as usize) < vertices)
    }

    /// Position buffer as raw bytes for device upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes for device upload.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// UV buffer as raw bytes for device upload.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index buffer as raw bytes for device upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
