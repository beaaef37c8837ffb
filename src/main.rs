//! Hyperwire - 4D wireframe viewer
//!
//! Headless demo driver: loads the configured scene, spins its polytopes,
//! and renders each frame into an in-memory framebuffer. Windowing adapters
//! replace the framebuffer and the scripted input source with their
//! toolkit's surface and event queue.

use hyperwire::config::AppConfig;
use hyperwire_core::{CameraTemplate, FormatRegistry, PolytopeTemplate, SceneTemplate};
use hyperwire_core::{Color, ShapeTemplate, Spin};
use hyperwire_input::{Clock, CommandRouter, ScriptedInput, SystemClock};
use hyperwire_math::{RotationPlane, Vec4};
use hyperwire_render::{
    Camera4D, DepthRange, PixelSurface, RenderOptions, Renderer,
};

/// The built-in demo scene: one of each catalog shape, spinning in the
/// plane combinations the shapes are usually shown with.
fn default_scene_template() -> SceneTemplate {
    let mut template = SceneTemplate::new("demo");
    template.add_object(
        PolytopeTemplate::new(ShapeTemplate::tesseract(2.0))
            .with_name("tesseract")
            .with_color(Color::GREEN)
            .with_spin(Spin::new(&[
                (RotationPlane::Xy, 0.4),
                (RotationPlane::Zw, 0.3),
            ])),
    );
    template.add_object(
        PolytopeTemplate::new(ShapeTemplate::five_cell(1.0))
            .with_name("five-cell")
            .with_position(Vec4::new(-3.0, 0.0, 0.0, 0.0))
            .with_color(Color::ORANGE)
            .with_spin(Spin::new(&[
                (RotationPlane::Xy, 0.5),
                (RotationPlane::Xw, 0.3),
                (RotationPlane::Zw, 0.2),
            ])),
    );
    template.add_object(
        PolytopeTemplate::new(ShapeTemplate::sixteen_cell(2.0))
            .with_name("sixteen-cell")
            .with_position(Vec4::new(3.0, 0.0, 0.0, 0.0))
            .with_color(Color::CYAN)
            .with_spin(Spin::new(&[
                (RotationPlane::Xy, 0.3),
                (RotationPlane::Zw, 0.2),
                (RotationPlane::Yw, 0.1),
            ])),
    );
    template
}

/// Load the configured scene, falling back to the built-in demo scene
fn load_scene_template(config: &AppConfig, registry: &FormatRegistry) -> SceneTemplate {
    match &config.scene.path {
        Some(path) => registry.load(path).unwrap_or_else(|e| {
            log::warn!("failed to load scene '{}': {}. Using demo scene.", path, e);
            default_scene_template()
        }),
        None => default_scene_template(),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let registry = FormatRegistry::with_builtin();
    let template = load_scene_template(&config, &registry);
    let scene = template.to_scene()?;

    log::info!(
        "scene '{}': {} objects, {} edges",
        template.name,
        scene.len(),
        scene.total_edges()
    );

    let camera_template = template.camera.unwrap_or(CameraTemplate {
        eye: config.camera.eye_vec(),
        target: config.camera.target_vec(),
        up: config.camera.up_vec(),
        distance: config.camera.distance,
    });
    let camera = Camera4D::new(
        camera_template.eye,
        camera_template.target,
        camera_template.up,
        camera_template.distance,
    )?;

    let options = RenderOptions {
        projection: config.projection,
        depth_range: DepthRange {
            near: config.rendering.near,
            far: config.rendering.far,
        },
        padding: config.rendering.padding,
        depth_samples: config.rendering.depth_samples,
        background: config.rendering.background,
        line_width: config.rendering.line_width,
    };

    let mut renderer = Renderer::new(
        scene,
        camera,
        config.viewport.width,
        config.viewport.height,
        options,
    );
    let mut surface = PixelSurface::new(config.viewport.width, config.viewport.height);

    let mut router = CommandRouter::new()
        .with_move_speed(config.input.move_speed)
        .with_rotate_speed(config.input.rotate_speed)
        .with_orbit_sensitivity(config.input.orbit_sensitivity)
        .with_zoom_step(config.input.zoom_step);

    // The headless demo has no event queue; a windowing adapter would hand
    // its own InputSource to this loop.
    let mut input = ScriptedInput::empty();
    let mut clock = SystemClock::new();

    let mut frames = 0u32;
    while frames < config.run.max_frames {
        if router.drain(&mut input, &mut renderer) {
            break;
        }

        let dt = clock.delta_seconds();
        renderer.update(dt);
        let stats = renderer.render(&mut surface)?;

        frames += 1;
        if config.run.stats_interval > 0 && frames % config.run.stats_interval == 0 {
            log::info!(
                "frame {}: {} drawn, {} clipped, {} culled, {} degenerate",
                frames,
                stats.edges_drawn,
                stats.edges_clipped,
                stats.edges_culled,
                stats.edges_degenerate
            );
        }
    }

    log::info!("rendered {} frames", frames);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting Hyperwire");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
