//! Core types for the Hyperwire viewer
//!
//! This crate provides the foundational types for describing 4D wireframe
//! scenes:
//!
//! - [`Topology`] - immutable vertex/edge/face/cell connectivity
//! - [`ShapeTemplate`] - the closed catalog of buildable polytopes
//! - [`Pose`] - position, six plane angles, and scale with a cached transform
//! - [`Polytope`] - topology + pose + spin + wireframe color
//! - [`Scene`] - insertion-ordered container of polytopes
//! - [`SceneTemplate`] - serializable scene description
//! - [`FormatRegistry`] - explicit registry of scene file formats

mod color;
mod polytope;
mod pose;
mod registry;
mod scene;
mod shapes;
mod template;
mod topology;

pub use color::Color;
pub use polytope::{Polytope, Spin};
pub use pose::Pose;
pub use registry::{FormatRegistry, RonFormat, SceneFormat, SceneLoadError, SceneSaveError};
pub use scene::{PolytopeHandle, Scene};
pub use shapes::ShapeTemplate;
pub use template::{CameraTemplate, PolytopeTemplate, SceneTemplate};
pub use topology::{GeometryError, Topology};

// Re-export commonly used math types for convenience
pub use hyperwire_math::{Affine4, Mat4, RotationPlane, Vec3, Vec4};
