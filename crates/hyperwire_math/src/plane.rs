//! Rotation planes in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{mat4, Mat4};

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPlane {
    /// XY plane - standard yaw (rotation around Z axis in 3D)
    Xy,
    /// XZ plane - standard pitch (rotation around Y axis in 3D)
    Xz,
    /// XW plane - ana-kata rotation affecting X
    Xw,
    /// YZ plane - standard roll (rotation around X axis in 3D)
    Yz,
    /// YW plane - ana-kata rotation affecting Y
    Yw,
    /// ZW plane - ana-kata rotation affecting Z
    Zw,
}

impl RotationPlane {
    /// All six planes, in the canonical composition order.
    ///
    /// Plane rotations do not commute; every composite rotation in the
    /// pipeline multiplies the per-plane matrices in exactly this order so
    /// re-deriving a matrix from the same angle set is deterministic.
    pub const ALL: [Self; 6] = [
        Self::Xy,
        Self::Xz,
        Self::Xw,
        Self::Yz,
        Self::Yw,
        Self::Zw,
    ];

    /// The pair of axis indices spanning this plane (0=X, 1=Y, 2=Z, 3=W)
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            Self::Xy => (0, 1),
            Self::Xz => (0, 2),
            Self::Xw => (0, 3),
            Self::Yz => (1, 2),
            Self::Yw => (1, 3),
            Self::Zw => (2, 3),
        }
    }

    /// Index of this plane in [`RotationPlane::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Xy => 0,
            Self::Xz => 1,
            Self::Xw => 2,
            Self::Yz => 3,
            Self::Yw => 4,
            Self::Zw => 5,
        }
    }

    /// Lowercase plane name ("xy", "xz", ...)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xy => "xy",
            Self::Xz => "xz",
            Self::Xw => "xw",
            Self::Yz => "yz",
            Self::Yw => "yw",
            Self::Zw => "zw",
        }
    }

    /// Create a rotation matrix acting in this plane.
    ///
    /// The identity matrix with a 2x2 cosine/sine block substituted at the
    /// two plane indices; the other two axes are held fixed. A positive
    /// angle rotates the first axis of the plane toward the second.
    pub fn rotation(self, angle: f32) -> Mat4 {
        let cs = angle.cos();
        let sn = angle.sin();
        let (p1, p2) = self.axes();

        let mut m = mat4::IDENTITY;
        m[p1][p1] = cs;
        m[p2][p2] = cs;
        m[p1][p2] = -sn;
        m[p2][p1] = sn;
        m
    }
}

impl FromStr for RotationPlane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xy" => Ok(Self::Xy),
            "xz" => Ok(Self::Xz),
            "xw" => Ok(Self::Xw),
            "yz" => Ok(Self::Yz),
            "yw" => Ok(Self::Yw),
            "zw" => Ok(Self::Zw),
            other => Err(format!("unknown rotation plane '{}'", other)),
        }
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compose the six per-plane rotations into one matrix.
///
/// `angles` is indexed by [`RotationPlane::index`]; planes are applied in
/// [`RotationPlane::ALL`] order, first plane first.
pub fn compose_plane_rotations(angles: &[f32; 6]) -> Mat4 {
    let mut m = mat4::IDENTITY;
    for plane in RotationPlane::ALL {
        let angle = angles[plane.index()];
        if angle != 0.0 {
            m = mat4::mul(plane.rotation(angle), m);
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mat4, Vec4};
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a.x - b.x).abs() < EPSILON
            && (a.y - b.y).abs() < EPSILON
            && (a.z - b.z).abs() < EPSILON
            && (a.w - b.w).abs() < EPSILON
    }

    #[test]
    fn test_xy_rotation_90() {
        let m = RotationPlane::Xy.rotation(FRAC_PI_2);

        // X goes to Y
        let result = mat4::transform(m, Vec4::X);
        assert!(vec_approx_eq(result, Vec4::Y), "expected Y, got {:?}", result);

        // Y goes to -X
        let result = mat4::transform(m, Vec4::Y);
        assert!(vec_approx_eq(result, -Vec4::X), "expected -X, got {:?}", result);

        // Z and W are unchanged
        assert!(vec_approx_eq(mat4::transform(m, Vec4::Z), Vec4::Z));
        assert!(vec_approx_eq(mat4::transform(m, Vec4::W), Vec4::W));
    }

    #[test]
    fn test_zw_rotation_90() {
        let m = RotationPlane::Zw.rotation(FRAC_PI_2);

        // Z goes to W
        let result = mat4::transform(m, Vec4::Z);
        assert!(vec_approx_eq(result, Vec4::W), "expected W, got {:?}", result);

        // X and Y are unchanged
        assert!(vec_approx_eq(mat4::transform(m, Vec4::X), Vec4::X));
        assert!(vec_approx_eq(mat4::transform(m, Vec4::Y), Vec4::Y));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let m = RotationPlane::Xw.rotation(1.23);
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let rotated = mat4::transform(m, v);
        assert!((v.length() - rotated.length()).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_inverse() {
        let m = RotationPlane::Yw.rotation(0.8);
        let inv = RotationPlane::Yw.rotation(-0.8);
        let v = Vec4::new(1.0, -2.0, 0.5, 3.0);
        let back = mat4::transform(inv, mat4::transform(m, v));
        assert!(vec_approx_eq(back, v), "got {:?}", back);
    }

    #[test]
    fn test_all_order_matches_index() {
        for (i, plane) in RotationPlane::ALL.iter().enumerate() {
            assert_eq!(plane.index(), i);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("xw".parse::<RotationPlane>().unwrap(), RotationPlane::Xw);
        assert_eq!("ZW".parse::<RotationPlane>().unwrap(), RotationPlane::Zw);
        assert!("ab".parse::<RotationPlane>().is_err());
    }

    #[test]
    fn test_compose_deterministic() {
        let angles = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let a = compose_plane_rotations(&angles);
        let b = compose_plane_rotations(&angles);
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_single_plane() {
        let mut angles = [0.0; 6];
        angles[RotationPlane::Xz.index()] = 0.9;
        let composed = compose_plane_rotations(&angles);
        assert_eq!(composed, RotationPlane::Xz.rotation(0.9));
    }

    #[test]
    fn test_compose_order_is_fixed() {
        // XY then XW differs from XW then XY; the composite must match the
        // canonical order (XY applied first).
        let mut angles = [0.0; 6];
        angles[RotationPlane::Xy.index()] = 0.4;
        angles[RotationPlane::Xw.index()] = 0.7;
        let composed = compose_plane_rotations(&angles);

        let expected = mat4::mul(
            RotationPlane::Xw.rotation(0.7),
            RotationPlane::Xy.rotation(0.4),
        );
        assert_eq!(composed, expected);
    }
}
