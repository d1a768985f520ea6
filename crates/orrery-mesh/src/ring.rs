//! Planetary ring (flat annulus) generation.

use std::f32::consts::TAU;

use crate::{MeshData, MeshError};

/// Generates a flat annulus in the local XZ plane.
///
/// One outer/inner vertex pair is emitted per angular step (`resolution + 1`
/// steps around 2π, so the seam vertices are duplicated for clean UVs). All
/// normals are the local up axis `(0, 1, 0)`; lighting the underside is the
/// renderer's concern. UVs run `u = step/resolution` around the ring with
/// `v = 0` on the outer edge and `v = 1` on the inner edge. Consecutive
/// steps are bridged as a triangle strip, two triangles per step.
///
/// Requires `0 <= inner_radius < outer_radius` and `resolution >= 3`.
pub fn generate_ring(
    inner_radius: f32,
    outer_radius: f32,
    resolution: u32,
) -> Result<MeshData, MeshError> {
    if !(0.0 <= inner_radius && inner_radius < outer_radius) {
        return Err(MeshError::InvalidRingRadii {
            inner: inner_radius,
            outer: outer_radius,
        });
    }
    if resolution < 3 {
        return Err(MeshError::RingResolutionTooLow(resolution));
    }

    let steps = resolution + 1;
    let d_theta = TAU / resolution as f32;

    let mut mesh = MeshData {
        positions: Vec::with_capacity(steps as usize * 6),
        normals: Vec::with_capacity(steps as usize * 6),
        uvs: Vec::with_capacity(steps as usize * 4),
        indices: Vec::with_capacity(resolution as usize * 6),
    };

    for step in 0..steps {
        let theta = step as f32 * d_theta;
        let u = step as f32 / resolution as f32;
        let (sin, cos) = theta.sin_cos();

        mesh.positions
            .extend_from_slice(&[outer_radius * cos, 0.0, outer_radius * sin]);
        mesh.positions
            .extend_from_slice(&[inner_radius * cos, 0.0, inner_radius * sin]);
        mesh.normals.extend_from_slice(&[0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
        mesh.uvs.extend_from_slice(&[u, 0.0, u, 1.0]);

        if step < resolution {
            let outer = 2 * step;
            let inner = outer + 1;
            mesh.indices.extend_from_slice(&[outer, outer + 2, inner]);
            mesh.indices.extend_from_slice(&[inner, outer + 2, inner + 2]);
        }
    }

    Ok(mesh)
}
