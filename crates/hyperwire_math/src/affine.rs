//! 4D affine transform (linear part + translation)
//!
//! A plain 4x4 matrix cannot translate a 4D point whose w component carries
//! real spatial position, so affine transforms keep the translation as a
//! separate vector applied after the linear part.

use serde::{Deserialize, Serialize};

use crate::{mat4, Mat4, Vec4};

/// An affine transform in 4-space: `apply(p) = linear * p + translation`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Affine4 {
    /// Rotation/scale part
    pub linear: Mat4,
    /// Offset added after the linear part
    pub translation: Vec4,
}

impl Default for Affine4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine4 {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        linear: mat4::IDENTITY,
        translation: Vec4::ZERO,
    };

    /// Create from a linear part and a translation
    pub const fn new(linear: Mat4, translation: Vec4) -> Self {
        Self { linear, translation }
    }

    /// Pure linear transform (no translation)
    pub const fn from_linear(linear: Mat4) -> Self {
        Self {
            linear,
            translation: Vec4::ZERO,
        }
    }

    /// Pure translation
    pub const fn from_translation(translation: Vec4) -> Self {
        Self {
            linear: mat4::IDENTITY,
            translation,
        }
    }

    /// Apply the transform to a point
    #[inline]
    pub fn apply(&self, p: Vec4) -> Vec4 {
        mat4::transform(self.linear, p) + self.translation
    }

    /// Compose two transforms: result = self * other
    ///
    /// The composed transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            linear: mat4::mul(self.linear, other.linear),
            translation: self.apply(other.translation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RotationPlane;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a.x - b.x).abs() < EPSILON
            && (a.y - b.y).abs() < EPSILON
            && (a.z - b.z).abs() < EPSILON
            && (a.w - b.w).abs() < EPSILON
    }

    #[test]
    fn test_identity() {
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Affine4::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_translation_includes_w() {
        let t = Affine4::from_translation(Vec4::new(1.0, 2.0, 3.0, 4.0));
        let p = Vec4::new(0.0, 0.0, 0.0, -1.0);
        assert_eq!(t.apply(p), Vec4::new(1.0, 2.0, 3.0, 3.0));
    }

    #[test]
    fn test_compose_applies_right_first() {
        // Rotate X into Y, then shift along Z
        let rot = Affine4::from_linear(RotationPlane::Xy.rotation(FRAC_PI_2));
        let shift = Affine4::from_translation(Vec4::new(0.0, 0.0, 7.0, 0.0));
        let composed = shift.compose(&rot);

        let result = composed.apply(Vec4::X);
        assert!(
            vec_approx_eq(result, Vec4::new(0.0, 1.0, 7.0, 0.0)),
            "got {:?}",
            result
        );
    }

    #[test]
    fn test_compose_translations_add() {
        let a = Affine4::from_translation(Vec4::new(1.0, 0.0, 0.0, 0.0));
        let b = Affine4::from_translation(Vec4::new(0.0, 2.0, 0.0, 0.0));
        let composed = a.compose(&b);
        assert!(vec_approx_eq(
            composed.apply(Vec4::ZERO),
            Vec4::new(1.0, 2.0, 0.0, 0.0)
        ));
    }
}
