//! Procedural mesh generation for the orrery scene.
//!
//! Spheres, planetary ring annuli, and the sky enclosure cube are generated
//! once at startup from closed-form parametric formulas. The output is a set
//! of flat CPU-side buffers ([`MeshData`]) that a rendering layer uploads to
//! the device once and treats as immutable afterwards.

mod cube;
mod data;
mod error;
mod ring;
mod sphere;

pub use cube::generate_cube;
pub use data::MeshData;
pub use error::MeshError;
pub use ring::generate_ring;
pub use sphere::generate_sphere;
