//! Polytope pose
//!
//! Position, six plane-rotation angles, and uniform scale, with a lazily
//! recomputed cached transform. Every mutation marks the cache dirty; the
//! cache is rebuilt on the next read, so repeated reads between mutations
//! return bit-identical transforms.

use serde::{Deserialize, Serialize};

use crate::topology::GeometryError;
use hyperwire_math::{compose_plane_rotations, mat4, Affine4, RotationPlane, Vec4};

const TAU: f32 = std::f32::consts::TAU;

/// Position, rotation angles, and scale in 4D space
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pose {
    position: Vec4,
    /// Angles in radians, indexed by [`RotationPlane::index`], wrapped to [0, 2pi)
    angles: [f32; 6],
    scale: f32,
    #[serde(skip, default = "Affine4::default")]
    cached: Affine4,
    #[serde(skip, default = "default_dirty")]
    dirty: bool,
}

fn default_dirty() -> bool {
    true
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Create an identity pose (origin, no rotation, unit scale)
    pub fn identity() -> Self {
        Self {
            position: Vec4::ZERO,
            angles: [0.0; 6],
            scale: 1.0,
            cached: Affine4::IDENTITY,
            dirty: true,
        }
    }

    /// Create a pose at the given position
    pub fn at(position: Vec4) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> Vec4 {
        self.position
    }

    /// Current angle for a plane, in [0, 2pi)
    #[inline]
    pub fn angle(&self, plane: RotationPlane) -> f32 {
        self.angles[plane.index()]
    }

    /// All six angles in [`RotationPlane::ALL`] order
    #[inline]
    pub fn angles(&self) -> [f32; 6] {
        self.angles
    }

    /// Current uniform scale
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Add a delta to the stored angle for one plane (wrapped to [0, 2pi))
    pub fn rotate(&mut self, plane: RotationPlane, delta: f32) {
        let idx = plane.index();
        self.angles[idx] = (self.angles[idx] + delta).rem_euclid(TAU);
        self.dirty = true;
    }

    /// Add deltas to several planes at once
    pub fn rotate_many(&mut self, deltas: &[(RotationPlane, f32)]) {
        for &(plane, delta) in deltas {
            self.rotate(plane, delta);
        }
    }

    /// Set the absolute angle for one plane (wrapped to [0, 2pi))
    pub fn set_rotation(&mut self, plane: RotationPlane, angle: f32) {
        self.angles[plane.index()] = angle.rem_euclid(TAU);
        self.dirty = true;
    }

    /// Set the position
    pub fn set_position(&mut self, position: Vec4) {
        self.position = position;
        self.dirty = true;
    }

    /// Set the uniform scale; rejects non-positive values
    pub fn set_scale(&mut self, scale: f32) -> Result<(), GeometryError> {
        if scale <= 0.0 {
            return Err(GeometryError::InvalidArgument(format!(
                "scale must be positive, got {}",
                scale
            )));
        }
        self.scale = scale;
        self.dirty = true;
        Ok(())
    }

    /// The local-to-world transform for this pose.
    ///
    /// Rotation about the origin first (planes in canonical order), then
    /// uniform scale, then translation. Recomputed only when dirty.
    pub fn transform(&mut self) -> Affine4 {
        if self.dirty {
            let rotation = compose_plane_rotations(&self.angles);
            let linear = mat4::mul(mat4::scaling(self.scale), rotation);
            self.cached = Affine4::new(linear, self.position);
            self.dirty = false;
        }
        self.cached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a.x - b.x).abs() < EPSILON
            && (a.y - b.y).abs() < EPSILON
            && (a.z - b.z).abs() < EPSILON
            && (a.w - b.w).abs() < EPSILON
    }

    #[test]
    fn test_identity_pose() {
        let mut pose = Pose::identity();
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(vec_approx_eq(pose.transform().apply(p), p));
    }

    #[test]
    fn test_rotate_then_read() {
        let mut pose = Pose::identity();
        pose.rotate(RotationPlane::Xy, FRAC_PI_2);
        let rotated = pose.transform().apply(Vec4::X);
        assert!(vec_approx_eq(rotated, Vec4::Y), "got {:?}", rotated);
    }

    #[test]
    fn test_transform_idempotent_between_mutations() {
        let mut pose = Pose::at(Vec4::new(1.0, 0.0, -2.0, 0.5));
        pose.rotate(RotationPlane::Xw, 0.3);
        pose.rotate(RotationPlane::Yz, 1.1);

        let first = pose.transform();
        let second = pose.transform();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rotate_back_restores_transform() {
        for plane in RotationPlane::ALL {
            let mut pose = Pose::identity();
            let before = pose.transform();
            pose.rotate(plane, 0.37);
            pose.rotate(plane, -0.37);
            let after = pose.transform();

            let p = Vec4::new(0.5, -1.0, 2.0, 0.25);
            assert!(
                vec_approx_eq(before.apply(p), after.apply(p)),
                "plane {} did not return to start",
                plane
            );
        }
    }

    #[test]
    fn test_rotate_many_touches_only_given_planes() {
        let mut pose = Pose::identity();
        pose.rotate_many(&[(RotationPlane::Xy, 0.2), (RotationPlane::Zw, -0.1)]);
        assert!((pose.angle(RotationPlane::Xy) - 0.2).abs() < EPSILON);
        assert!((pose.angle(RotationPlane::Zw) - (TAU - 0.1)).abs() < EPSILON);
        assert_eq!(pose.angle(RotationPlane::Xz), 0.0);
        assert_eq!(pose.angle(RotationPlane::Yw), 0.0);
    }

    #[test]
    fn test_angle_wraps() {
        let mut pose = Pose::identity();
        pose.rotate(RotationPlane::Xy, 2.0 * TAU + 0.25);
        assert!((pose.angle(RotationPlane::Xy) - 0.25).abs() < EPSILON);

        pose.set_rotation(RotationPlane::Zw, -FRAC_PI_2);
        let wrapped = pose.angle(RotationPlane::Zw);
        assert!((wrapped - (TAU - FRAC_PI_2)).abs() < EPSILON);
        assert!((0.0..TAU).contains(&wrapped));
    }

    #[test]
    fn test_set_scale_rejects_non_positive() {
        let mut pose = Pose::identity();
        assert!(pose.set_scale(0.0).is_err());
        assert!(pose.set_scale(-2.0).is_err());
        assert_eq!(pose.scale(), 1.0);
        assert!(pose.set_scale(3.0).is_ok());
        assert_eq!(pose.scale(), 3.0);
    }

    #[test]
    fn test_transform_order_rotate_scale_translate() {
        // X rotated 90 degrees in XY becomes Y, doubled, then shifted
        let mut pose = Pose::identity();
        pose.rotate(RotationPlane::Xy, FRAC_PI_2);
        pose.set_scale(2.0).unwrap();
        pose.set_position(Vec4::new(10.0, 0.0, 0.0, 0.0));

        let result = pose.transform().apply(Vec4::X);
        assert!(
            vec_approx_eq(result, Vec4::new(10.0, 2.0, 0.0, 0.0)),
            "got {:?}",
            result
        );
    }

    #[test]
    fn test_half_turn_twice_is_identity() {
        let mut pose = Pose::identity();
        pose.rotate(RotationPlane::Yw, PI);
        pose.rotate(RotationPlane::Yw, PI);
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let result = pose.transform().apply(p);
        assert!(vec_approx_eq(result, p), "got {:?}", result);
    }
}
