//! Polytope instances
//!
//! A Polytope pairs immutable topology with a mutable pose, an optional
//! auto-spin, and a wireframe color.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::pose::Pose;
use crate::topology::Topology;
use hyperwire_math::{RotationPlane, Vec4};

/// Per-plane angular velocities in radians per second
///
/// A spin with all six speeds at zero is a no-op during update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    /// Speeds indexed by [`RotationPlane::index`]
    pub speeds: [f32; 6],
}

impl Spin {
    /// No rotation
    pub const NONE: Self = Self { speeds: [0.0; 6] };

    /// Create a spin from (plane, speed) pairs
    pub fn new(speeds: &[(RotationPlane, f32)]) -> Self {
        let mut spin = Self::NONE;
        for &(plane, speed) in speeds {
            spin.speeds[plane.index()] = speed;
        }
        spin
    }

    /// True when every speed is zero
    pub fn is_none(&self) -> bool {
        self.speeds.iter().all(|&s| s == 0.0)
    }
}

/// A polytope instance in the scene
pub struct Polytope {
    /// Optional name for lookup and logging
    pub name: Option<String>,
    topology: Topology,
    pose: Pose,
    spin: Spin,
    /// Wireframe color
    pub color: Color,
}

impl Polytope {
    /// Create a polytope with the given topology at the identity pose
    pub fn new(topology: Topology) -> Self {
        Self {
            name: None,
            topology,
            pose: Pose::identity(),
            spin: Spin::NONE,
            color: Color::default(),
        }
    }

    /// Builder: set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the pose
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// Builder: set the auto-spin
    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = spin;
        self
    }

    /// Builder: set the wireframe color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The immutable topology
    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The current pose
    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Mutable access to the pose
    #[inline]
    pub fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }

    /// The configured auto-spin
    #[inline]
    pub fn spin(&self) -> Spin {
        self.spin
    }

    /// Advance the auto-spin by `dt` seconds.
    ///
    /// The only place time enters the geometry model; a polytope without
    /// spin is untouched.
    pub fn update(&mut self, dt: f32) {
        if self.spin.is_none() {
            return;
        }
        for plane in RotationPlane::ALL {
            let speed = self.spin.speeds[plane.index()];
            if speed != 0.0 {
                self.pose.rotate(plane, speed * dt);
            }
        }
    }

    /// World-space vertices under the current pose
    pub fn world_vertices(&mut self) -> Vec<Vec4> {
        let transform = self.pose.transform();
        self.topology
            .vertices()
            .iter()
            .map(|&v| transform.apply(v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeTemplate;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn tesseract() -> Polytope {
        Polytope::new(ShapeTemplate::tesseract(2.0).build().unwrap())
    }

    #[test]
    fn test_world_vertices_identity() {
        let mut p = tesseract();
        let world = p.world_vertices();
        assert_eq!(world.len(), 16);
        assert_eq!(world, p.topology().vertices());
    }

    #[test]
    fn test_world_vertices_translated() {
        let mut p = tesseract();
        p.pose_mut().set_position(Vec4::new(0.0, 0.0, 0.0, 3.0));
        for v in p.world_vertices() {
            assert!(v.w == 2.0 || v.w == 4.0, "w = {}", v.w);
        }
    }

    #[test]
    fn test_update_without_spin_is_noop() {
        let mut p = tesseract();
        let before = p.world_vertices();
        p.update(1.0);
        assert_eq!(p.world_vertices(), before);
    }

    #[test]
    fn test_update_advances_spun_planes() {
        let spin = Spin::new(&[(RotationPlane::Xy, FRAC_PI_2)]);
        let mut p = tesseract().with_spin(spin);
        p.update(1.0);
        assert!((p.pose().angle(RotationPlane::Xy) - FRAC_PI_2).abs() < EPSILON);
        assert_eq!(p.pose().angle(RotationPlane::Zw), 0.0);
    }

    #[test]
    fn test_spin_none() {
        assert!(Spin::NONE.is_none());
        assert!(!Spin::new(&[(RotationPlane::Yw, 0.1)]).is_none());
    }

    #[test]
    fn test_builder() {
        let p = tesseract()
            .with_name("cube")
            .with_color(Color::GREEN)
            .with_spin(Spin::new(&[(RotationPlane::Zw, 0.2)]));
        assert_eq!(p.name.as_deref(), Some("cube"));
        assert_eq!(p.color, Color::GREEN);
        assert!(!p.spin().is_none());
    }
}
