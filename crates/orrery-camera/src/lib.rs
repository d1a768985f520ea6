//! Free-fly camera: operator-controlled position and look direction.

mod camera;
mod error;

pub use camera::{FreeFlyCamera, MoveDirection};
pub use error::CameraError;
