//! Scene renderer
//!
//! The Renderer owns the scene, the camera, and the depth buffer, and runs
//! the per-frame flow: update poses, fetch the view transform, project every
//! vertex 4D->3D->2D, then clip and draw every topological edge through the
//! surface.

use crate::camera4d::{Camera4D, CameraError};
use crate::clip::{rasterize_segment, DepthRange, SegmentOutcome, Viewport};
use crate::depth::DepthBuffer;
use crate::projector::{
    project_3d_to_2d, project_4d_to_3d, project_w_fold, ProjectionConfig, ProjectionMode,
    ScreenPoint,
};
use crate::surface::Surface;
use hyperwire_core::{Color, Scene};
use hyperwire_input::{Axis4, ViewControl};
use hyperwire_math::RotationPlane;

/// Rendering errors
#[derive(Debug)]
pub enum RenderError {
    /// The camera cannot produce a view transform
    Camera(CameraError),
}

impl From<CameraError> for RenderError {
    fn from(e: CameraError) -> Self {
        RenderError::Camera(e)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Camera(e) => write!(f, "camera error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

/// Per-frame rendering knobs
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub projection: ProjectionConfig,
    pub depth_range: DepthRange,
    /// Clip margin around the viewport, in pixels
    pub padding: i32,
    /// Depth samples taken along each drawn segment
    pub depth_samples: usize,
    pub background: Color,
    pub line_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            depth_range: DepthRange::default(),
            padding: 100,
            depth_samples: 5,
            background: Color::BLACK,
            line_width: 1,
        }
    }
}

/// Counts from one rendered frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Segments issued to the surface unmodified
    pub edges_drawn: usize,
    /// Segments issued after clipping moved an endpoint
    pub edges_clipped: usize,
    /// Segments rejected entirely
    pub edges_culled: usize,
    /// Segments that collapsed to a single pixel on screen
    pub edges_degenerate: usize,
}

impl FrameStats {
    /// Total segments considered
    pub fn total(&self) -> usize {
        self.edges_drawn + self.edges_clipped + self.edges_culled + self.edges_degenerate
    }
}

/// Owns the scene, camera, and depth buffer; drives update and render
pub struct Renderer {
    scene: Scene,
    camera: Camera4D,
    depth: DepthBuffer,
    viewport: Viewport,
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer for the given viewport size
    pub fn new(scene: Scene, camera: Camera4D, width: u32, height: u32, options: RenderOptions) -> Self {
        Self {
            scene,
            camera,
            depth: DepthBuffer::new(width, height),
            viewport: Viewport::new(width, height).with_padding(options.padding),
            options,
        }
    }

    /// The owned scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The owned camera
    pub fn camera(&self) -> &Camera4D {
        &self.camera
    }

    /// Mutable access to the camera
    pub fn camera_mut(&mut self) -> &mut Camera4D {
        &mut self.camera
    }

    /// Current render options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Resize the viewport and depth buffer
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height).with_padding(self.options.padding);
        self.depth.resize(width, height);
    }

    /// Advance every polytope's auto-spin
    pub fn update(&mut self, dt: f32) {
        self.scene.update(dt);
    }

    /// Render one frame into the surface.
    ///
    /// Clears the depth buffer and the surface, then draws every polytope in
    /// insertion order. Only intra-segment depth buffering is applied; the
    /// order across objects is painter's order.
    pub fn render(&mut self, surface: &mut dyn Surface) -> Result<FrameStats, RenderError> {
        let view = self.camera.view()?;
        let distance = self.camera.distance();
        let options = self.options;
        let viewport = self.viewport;
        let projection = options.projection;

        self.depth.clear();
        surface.clear(options.background);

        let mut stats = FrameStats::default();

        for polytope in self.scene.iter_mut() {
            let color = polytope.color;
            let world = polytope.world_vertices();

            let screen: Vec<ScreenPoint> = world
                .iter()
                .map(|&p| {
                    let eye_space = view.apply(p);
                    let p3 = match projection.mode {
                        ProjectionMode::Perspective => {
                            project_4d_to_3d(eye_space, distance, projection.w_sign)
                        }
                        ProjectionMode::WFold { strength } => project_w_fold(eye_space, strength),
                    };
                    project_3d_to_2d(p3, viewport.width, viewport.height, projection.pixels_per_unit)
                })
                .collect();

            for &[i, j] in polytope.topology().edges() {
                let outcome = rasterize_segment(
                    surface,
                    &mut self.depth,
                    screen[i],
                    screen[j],
                    &viewport,
                    &options.depth_range,
                    color,
                    options.line_width,
                    options.depth_samples,
                );
                match outcome {
                    SegmentOutcome::Culled => stats.edges_culled += 1,
                    SegmentOutcome::Degenerate => stats.edges_degenerate += 1,
                    SegmentOutcome::Drawn { clipped: true } => stats.edges_clipped += 1,
                    SegmentOutcome::Drawn { clipped: false } => stats.edges_drawn += 1,
                }
            }
        }

        log::debug!(
            "frame: {} drawn, {} clipped, {} culled, {} degenerate",
            stats.edges_drawn,
            stats.edges_clipped,
            stats.edges_culled,
            stats.edges_degenerate
        );

        Ok(stats)
    }
}

impl ViewControl for Renderer {
    fn move_camera(&mut self, axis: Axis4, delta: f32) {
        if let Err(e) = self.camera.move_by(axis.unit() * delta) {
            log::warn!("camera move ignored: {}", e);
        }
    }

    fn rotate_objects(&mut self, plane: RotationPlane, delta: f32) {
        for polytope in self.scene.iter_mut() {
            polytope.pose_mut().rotate(plane, delta);
        }
    }

    fn orbit_camera(&mut self, dx: f32, dy: f32) {
        self.camera.orbit(dx, dy);
    }

    fn zoom_camera(&mut self, factor: f32) {
        self.camera.zoom(factor);
    }
}
