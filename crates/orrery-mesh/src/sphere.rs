//! Latitude/longitude unit-sphere generation.

use std::f32::consts::{PI, TAU};

use crate::{MeshData, MeshError};

/// Generates a unit sphere as a latitude/longitude grid.
///
/// The grid has `resolution + 1` rows over the polar angle φ ∈ [0, π] and
/// `resolution + 1` columns over the azimuth θ ∈ [0, 2π], with positions
///
/// ```text
/// x = sin(φ)·sin(θ),  y = cos(φ),  z = sin(φ)·cos(θ)
/// ```
///
/// Normals equal positions (outward normal of a unit sphere), and the UV of
/// grid point `(row, col)` is `(col/resolution, row/resolution)`. Each
/// interior grid cell emits two triangles with a consistent outward-facing
/// winding; positions and normals share one formula so winding and shading
/// can never disagree.
///
/// Returns [`MeshError::ZeroResolution`] for `resolution == 0`.
pub fn generate_sphere(resolution: u32) -> Result<MeshData, MeshError> {
    if resolution == 0 {
        return Err(MeshError::ZeroResolution);
    }

    let rows = resolution + 1;
    let d_phi = PI / resolution as f32;
    let d_theta = TAU / resolution as f32;

    let mut mesh = MeshData {
        positions: Vec::with_capacity((rows * rows) as usize * 3),
        normals: Vec::with_capacity((rows * rows) as usize * 3),
        uvs: Vec::with_capacity((rows * rows) as usize * 2),
        indices: Vec::with_capacity((resolution * resolution) as usize * 6),
    };

    for row in 0..rows {
        let phi = row as f32 * d_phi;
        for col in 0..rows {
            let theta = col as f32 * d_theta;

            let x = phi.sin() * theta.sin();
            let y = phi.cos();
            let z = phi.sin() * theta.cos();

            mesh.positions.extend_from_slice(&[x, y, z]);
            mesh.normals.extend_from_slice(&[x, y, z]);
            mesh.uvs
                .extend_from_slice(&[col as f32 / resolution as f32, row as f32 / resolution as f32]);

            if row < resolution && col < resolution {
                // Quad between grid rows `row` and `row + 1` at this column.
                let idx = row * rows + col;
                mesh.indices
                    .extend_from_slice(&[idx, idx + rows, idx + rows + 1]);
                mesh.indices.extend_from_slice(&[idx, idx + rows + 1, idx + 1]);
            }
        }
    }

    Ok(mesh)
}
