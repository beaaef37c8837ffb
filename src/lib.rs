//! Hyperwire - 4D wireframe viewer
//!
//! Visualizes 4-dimensional convex polytopes by animating rigid transforms
//! in 4-space and projecting their wireframes onto a 2D surface. The crates
//! split the way the pipeline does:
//!
//! - `hyperwire_math` - vectors, matrices, rotation planes
//! - `hyperwire_core` - topology, poses, polytopes, scenes, scene files
//! - `hyperwire_render` - camera, projection, clipping, depth buffer, renderer
//! - `hyperwire_input` - command model, router, clocks
//!
//! This crate adds the layered configuration and the headless demo binary;
//! windowing adapters implement [`hyperwire_render::Surface`] and
//! [`hyperwire_input::InputSource`] outside this repository.

pub mod config;

pub use config::AppConfig;

pub use hyperwire_core::{
    Color, FormatRegistry, Polytope, PolytopeTemplate, Pose, Scene, SceneTemplate, ShapeTemplate,
    Spin, Topology,
};
pub use hyperwire_input::{
    Axis4, Clock, CommandRouter, FixedClock, InputCommand, InputSource, ScriptedInput, SystemClock,
};
pub use hyperwire_math::{Affine4, Mat4, RotationPlane, Vec3, Vec4};
pub use hyperwire_render::{
    Camera4D, FrameStats, PixelSurface, ProjectionConfig, ProjectionMode, RenderOptions, Renderer,
    Surface, WSign,
};
