//! Scene templates
//!
//! Serializable descriptions of a scene, loaded and saved through the
//! [`crate::FormatRegistry`]. Templates hold construction parameters only;
//! `to_polytope`/`to_scene` instantiate the live objects.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::polytope::{Polytope, Spin};
use crate::pose::Pose;
use crate::scene::Scene;
use crate::shapes::ShapeTemplate;
use crate::topology::GeometryError;
use hyperwire_math::{RotationPlane, Vec4};

/// A serializable polytope description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolytopeTemplate {
    /// Optional name for lookup and logging
    #[serde(default)]
    pub name: Option<String>,
    /// Which shape to build
    pub shape: ShapeTemplate,
    /// Initial position
    #[serde(default)]
    pub position: Vec4,
    /// Initial rotation angles in [`RotationPlane::ALL`] order, radians
    #[serde(default)]
    pub angles: [f32; 6],
    /// Uniform scale
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Auto-spin angular velocities
    #[serde(default)]
    pub spin: Spin,
    /// Wireframe color
    #[serde(default)]
    pub color: Color,
}

fn default_scale() -> f32 {
    1.0
}

impl PolytopeTemplate {
    /// Create a template for the given shape with default pose
    pub fn new(shape: ShapeTemplate) -> Self {
        Self {
            name: None,
            shape,
            position: Vec4::ZERO,
            angles: [0.0; 6],
            scale: 1.0,
            spin: Spin::NONE,
            color: Color::default(),
        }
    }

    /// Builder: set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the position
    pub fn with_position(mut self, position: Vec4) -> Self {
        self.position = position;
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

    /// Instantiate a live polytope from this template
    pub fn to_polytope(&self) -> Result<Polytope, GeometryError> {
        let topology = self.shape.build()?;

        let mut pose = Pose::at(self.position);
        for plane in RotationPlane::ALL {
            let angle = self.angles[plane.index()];
            if angle != 0.0 {
                pose.set_rotation(plane, angle);
            }
        }
        pose.set_scale(self.scale)?;

        let mut polytope = Polytope::new(topology)
            .with_pose(pose)
            .with_spin(self.spin)
            .with_color(self.color);
        polytope.name = self.name.clone();
        Ok(polytope)
    }
}

/// A serializable camera description
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraTemplate {
    /// Camera position in 4D space
    pub eye: Vec4,
    /// Point the camera looks at
    pub target: Vec4,
    /// Up direction
    pub up: Vec4,
    /// Projection distance
    pub distance: f32,
}

impl Default for CameraTemplate {
    fn default() -> Self {
        Self {
            eye: Vec4::new(0.0, 0.0, -10.0, 0.0),
            target: Vec4::ZERO,
            up: Vec4::Y,
            distance: 5.0,
        }
    }
}

/// A serializable scene: named list of polytope templates plus an optional
/// camera setup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneTemplate {
    /// Scene name (for display/logging)
    pub name: String,
    /// Polytope templates, in draw order
    pub objects: Vec<PolytopeTemplate>,
    /// Optional camera setup
    #[serde(default)]
    pub camera: Option<CameraTemplate>,
}

impl SceneTemplate {
    /// Create a new empty scene template
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            camera: None,
        }
    }

    /// Add a polytope template
    pub fn add_object(&mut self, object: PolytopeTemplate) {
        self.objects.push(object);
    }

    /// Builder: set the camera
    pub fn with_camera(mut self, camera: CameraTemplate) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Instantiate a live scene from this template
    pub fn to_scene(&self) -> Result<Scene, GeometryError> {
        let mut scene = Scene::with_capacity(self.objects.len());
        for template in &self.objects {
            scene.add(template.to_polytope()?);
        }
        Ok(scene)
    }
}
