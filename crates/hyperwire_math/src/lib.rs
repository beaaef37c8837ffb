//! 4D Mathematics Library
//!
//! This crate provides the vector and matrix types for the Hyperwire viewer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D vector produced by the 4D->3D projection stage
//! - [`Mat4`] - 4x4 row-major matrix for linear 4D transforms
//! - [`Affine4`] - linear part plus translation (4D points are not homogeneous)
//! - [`RotationPlane`] - the six coordinate planes a 4D rotation can act in

mod affine;
mod vec3;
mod vec4;
pub mod mat4;
mod plane;

pub use affine::Affine4;
pub use mat4::Mat4;
pub use plane::{compose_plane_rotations, RotationPlane};
pub use vec3::Vec3;
pub use vec4::{cross4, Vec4};
