//! Projection stages
//!
//! Two pure functions take a point from camera space to the screen: the
//! 4D->3D stage collapses the w axis, the 3D->2D stage maps onto pixel
//! coordinates with a depth value. Neither holds state; both are safe to
//! call from anywhere.

use serde::{Deserialize, Serialize};

use hyperwire_math::{Vec3, Vec4};

/// Lower bound for the perspective denominator.
///
/// Points near the projection hyperplane are pushed to very large (finite)
/// magnitudes instead of dividing by zero; the viewport clipper discards
/// them downstream.
pub const PROJECTION_EPSILON: f32 = 1e-6;

/// Sign convention for the perspective denominator.
///
/// Both appear in the wild; the formula is exposed as configuration so
/// either convention is reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WSign {
    /// factor = distance / (distance - w)
    #[default]
    MinusW,
    /// factor = distance / (distance + w)
    PlusW,
}

/// How the w axis is collapsed
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// True 4D perspective division
    #[default]
    Perspective,
    /// Numerically stable fold: scale x and y by 1 / (1 + |w| * strength).
    /// Trades geometric correctness for a denominator that can never
    /// approach zero.
    WFold {
        /// Fold strength k in 1 / (1 + |w| * k)
        strength: f32,
    },
}

/// Named projection parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// w-collapse mode
    #[serde(default)]
    pub mode: ProjectionMode,
    /// Perspective denominator sign convention
    #[serde(default)]
    pub w_sign: WSign,
    /// Screen scale in pixels per world unit
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f32,
}

fn default_pixels_per_unit() -> f32 {
    100.0
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::default(),
            w_sign: WSign::default(),
            pixels_per_unit: default_pixels_per_unit(),
        }
    }
}

/// A projected point in pixel coordinates with its depth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    pub depth: f32,
}

/// Perspective-project a 4D point onto the 3D hyperplane.
///
/// `factor = distance / max(denom, epsilon)` where `denom` follows the
/// configured sign convention. Never returns NaN or infinity.
pub fn project_4d_to_3d(p: Vec4, distance: f32, w_sign: WSign) -> Vec3 {
    let denom = match w_sign {
        WSign::MinusW => distance - p.w,
        WSign::PlusW => distance + p.w,
    };
    let factor = distance / denom.max(PROJECTION_EPSILON);
    p.xyz() * factor
}

/// Collapse w without perspective division: x and y shrink as the point
/// moves away from the w = 0 hyperplane in either direction; z passes
/// through as depth.
pub fn project_w_fold(p: Vec4, strength: f32) -> Vec3 {
    let scale = 1.0 / (1.0 + p.w.abs() * strength);
    Vec3::new(p.x * scale, p.y * scale, p.z)
}

/// Map a 3D point to pixel coordinates.
///
/// Screen y grows downward, so world y is flipped; depth is the camera-space
/// z carried through for the depth buffer.
pub fn project_3d_to_2d(
    p: Vec3,
    viewport_width: u32,
    viewport_height: u32,
    pixels_per_unit: f32,
) -> ScreenPoint {
    let x = (p.x * pixels_per_unit + viewport_width as f32 / 2.0).round() as i32;
    let y = (-p.y * pixels_per_unit + viewport_height as f32 / 2.0).round() as i32;
    ScreenPoint { x, y, depth: p.z }
}
