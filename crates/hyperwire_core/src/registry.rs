//! Scene file formats
//!
//! Scene descriptions are read and written through a [`FormatRegistry`]: an
//! explicit object created at startup and passed by reference to whatever
//! needs to load or save, with one registered [`SceneFormat`] per file
//! extension. The built-in format is RON.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::template::SceneTemplate;

/// Error loading a scene description
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// No format registered for the file extension
    UnknownFormat(String),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneLoadError::UnknownFormat(ext) => {
                write!(f, "No scene format registered for '{}'", ext)
            }
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene description
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
    /// No format registered for the file extension
    UnknownFormat(String),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialization error: {}", e),
            SceneSaveError::UnknownFormat(ext) => {
                write!(f, "No scene format registered for '{}'", ext)
            }
        }
    }
}

impl std::error::Error for SceneSaveError {}

/// A scene description file format
pub trait SceneFormat {
    /// Load a scene template from a file
    fn load(&self, path: &Path) -> Result<SceneTemplate, SceneLoadError>;

    /// Save a scene template to a file
    fn save(&self, path: &Path, template: &SceneTemplate) -> Result<(), SceneSaveError>;
}

/// RON scene format
pub struct RonFormat;

impl SceneFormat for RonFormat {
    fn load(&self, path: &Path) -> Result<SceneTemplate, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let template = ron::from_str(&contents)?;
        Ok(template)
    }

    fn save(&self, path: &Path, template: &SceneTemplate) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new().struct_names(false);
        let contents = ron::ser::to_string_pretty(template, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Registry of scene formats, keyed by lowercase file extension
///
/// Created at startup; no global state.
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn SceneFormat>>,
}

impl FormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            formats: HashMap::new(),
        }
    }

    /// Create a registry with the built-in formats registered
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("ron", Box::new(RonFormat));
        registry
    }

    /// Register a format under a file extension (lowercased)
    pub fn register(&mut self, extension: &str, format: Box<dyn SceneFormat>) {
        self.formats
            .insert(extension.to_ascii_lowercase(), format);
    }

    /// Extensions currently registered
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(|s| s.as_str())
    }

    /// Load a scene template, dispatching on the path's extension
    pub fn load(&self, path: impl AsRef<Path>) -> Result<SceneTemplate, SceneLoadError> {
        let path = path.as_ref();
        let format = self
            .format_for(path)
            .ok_or_else(|| SceneLoadError::UnknownFormat(extension_of(path)))?;
        let template = format.load(path)?;
        log::info!(
            "loaded scene '{}' with {} objects from {}",
            template.name,
            template.objects.len(),
            path.display()
        );
        Ok(template)
    }

    /// Save a scene template, dispatching on the path's extension
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        template: &SceneTemplate,
    ) -> Result<(), SceneSaveError> {
        let path = path.as_ref();
        let format = self
            .format_for(path)
            .ok_or_else(|| SceneSaveError::UnknownFormat(extension_of(path)))?;
        format.save(path, template)
    }

    fn format_for(&self, path: &Path) -> Option<&dyn SceneFormat> {
        let ext = extension_of(path);
        self.formats.get(&ext).map(|b| b.as_ref())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeTemplate;
    use crate::template::PolytopeTemplate;

    fn sample_template() -> SceneTemplate {
        let mut template = SceneTemplate::new("sample");
        template.add_object(PolytopeTemplate::new(ShapeTemplate::tesseract(2.0)));
        template
    }

    #[test]
    fn test_registry_has_ron() {
        let registry = FormatRegistry::with_builtin();
        let exts: Vec<_> = registry.extensions().collect();
        assert_eq!(exts, ["ron"]);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let registry = FormatRegistry::with_builtin();
        let err = registry.load("scene.xyz").unwrap_err();
        assert!(matches!(err, SceneLoadError::UnknownFormat(ext) if ext == "xyz"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let registry = FormatRegistry::with_builtin();
        let dir = std::env::temp_dir().join("hyperwire_registry_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scene.ron");

        let template = sample_template();
        registry.save(&path, &template).unwrap();
        let loaded = registry.load(&path).unwrap();

        assert_eq!(loaded.name, "sample");
        assert_eq!(loaded.objects.len(), 1);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let registry = FormatRegistry::with_builtin();
        let err = registry.load("/nonexistent/scene.ron").unwrap_err();
        assert!(matches!(err, SceneLoadError::Io(_)));
    }
}
