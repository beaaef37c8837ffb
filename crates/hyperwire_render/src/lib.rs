//! 4D Wireframe Rendering Library
//!
//! This crate provides the software pipeline that turns 4D polytopes into
//! depth-tested 2D line segments:
//!
//! - [`camera4d::Camera4D`] - 4D eye/target/up camera with a cached view transform
//! - [`projector`] - pure 4D->3D and 3D->2D projection functions
//! - [`depth::DepthBuffer`] - per-pixel nearest-depth record
//! - [`clip`] - near-plane and Cohen-Sutherland clipping plus depth-sampled drawing
//! - [`renderer::Renderer`] - owns the scene, camera, and depth buffer; drives
//!   the per-frame update -> project -> clip -> draw flow
//! - [`surface::Surface`] - the narrow drawing interface presentation adapters
//!   implement

pub mod camera4d;
pub mod clip;
pub mod depth;
pub mod projector;
pub mod renderer;
pub mod surface;

// Re-export core types for convenience
pub use hyperwire_core::{Color, Polytope, Scene, ShapeTemplate, Spin};
pub use hyperwire_math::{Affine4, Mat4, RotationPlane, Vec3, Vec4};

pub use camera4d::{Camera4D, CameraError};
pub use clip::{DepthRange, Viewport};
pub use projector::{ProjectionConfig, ProjectionMode, ScreenPoint, WSign};
pub use renderer::{FrameStats, RenderError, RenderOptions, Renderer};
pub use surface::{PixelSurface, RecordingSurface, Surface};
