//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority
//! (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HW_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use hyperwire_core::Color;
use hyperwire_math::Vec4;
use hyperwire_render::ProjectionConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Viewport configuration
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Projection configuration
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Demo run configuration
    #[serde(default)]
    pub run: RunConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HW_VIEWPORT__WIDTH=1024 -> viewport.width = 1024
        figment = figment.merge(Env::prefixed("HW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Window title (used by windowing adapters)
    pub title: String,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Hyperwire - 4D Wireframe Viewer".to_string(),
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Eye position [x, y, z, w]
    pub eye: [f32; 4],
    /// Look-at target [x, y, z, w]
    pub target: [f32; 4],
    /// Up direction [x, y, z, w]
    pub up: [f32; 4],
    /// Projection distance
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, -10.0, 0.0],
            target: [0.0, 0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0, 0.0],
            distance: 5.0,
        }
    }
}

impl CameraConfig {
    /// Eye position as a vector
    pub fn eye_vec(&self) -> Vec4 {
        Vec4::new(self.eye[0], self.eye[1], self.eye[2], self.eye[3])
    }

    /// Target as a vector
    pub fn target_vec(&self) -> Vec4 {
        Vec4::new(self.target[0], self.target[1], self.target[2], self.target[3])
    }

    /// Up direction as a vector
    pub fn up_vec(&self) -> Vec4 {
        Vec4::new(self.up[0], self.up[1], self.up[2], self.up[3])
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color
    pub background: Color,
    /// Line width in pixels
    pub line_width: u32,
    /// Depth samples per drawn segment
    pub depth_samples: usize,
    /// Clip margin around the viewport, in pixels
    pub padding: i32,
    /// Near depth plane
    pub near: f32,
    /// Far depth plane
    pub far: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background: Color::new(10, 10, 20),
            line_width: 1,
            depth_samples: 5,
            padding: 100,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Camera movement per move command unit
    pub move_speed: f32,
    /// Radians per rotate command unit
    pub rotate_speed: f32,
    /// Radians per orbit command unit
    pub orbit_sensitivity: f32,
    /// Projection distance multiplier per zoom step
    pub zoom_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.1,
            rotate_speed: 1.0,
            orbit_sensitivity: 0.01,
            zoom_step: 1.1,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Scene file to load; the built-in demo scene is used when unset or
    /// missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Demo run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Frames to render before exiting
    pub max_frames: u32,
    /// Log frame stats every N frames (0 disables)
    pub stats_interval: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_frames: 600,
            stats_interval: 60,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
