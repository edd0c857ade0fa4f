//! Scene configuration (TOML)
//!
//! Describes a set of surfaces to generate:
//!
//! ```toml
//! [[shapes]]
//! kind = "sphere"
//! radius = 1.5
//! slices = 24
//! render_mode = "textured"
//!
//! [[shapes]]
//! kind = "torus"
//! inner_radius = 0.2
//! outer_radius = 0.6
//! color = [1.0, 0.5, 0.0]
//! ```
//!
//! Omitted shape fields take the descriptor defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::batch;
use crate::descriptor::SurfaceDescriptor;
use crate::error::ConfigError;
use crate::generator::SurfaceMeshGenerator;
use crate::render_mode::RenderMode;

/// One configured surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Shape family and parameters
    #[serde(flatten)]
    pub surface: SurfaceDescriptor,
    /// Initial render mode (default: lit)
    #[serde(default)]
    pub render_mode: RenderMode,
}

impl ShapeConfig {
    pub fn new(surface: impl Into<SurfaceDescriptor>) -> Self {
        Self {
            surface: surface.into(),
            render_mode: RenderMode::default(),
        }
    }

    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }
}

/// Scene configuration.
///
/// Serialized to/from TOML as a list of `[[shapes]]` tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneConfig {
    #[serde(default)]
    pub shapes: Vec<ShapeConfig>,
}

impl SceneConfig {
    /// Parse a scene from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a scene from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid scene TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded scene config {:?} with {} shapes", path, config.shapes.len());
        Ok(config)
    }

    /// Serialize the scene back to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Surface descriptors in file order
    pub fn descriptors(&self) -> Vec<SurfaceDescriptor> {
        self.shapes.iter().map(|shape| shape.surface).collect()
    }

    /// Generate every configured surface.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyScene`] if no shapes are configured.
    pub fn build_generators(&self) -> Result<Vec<SurfaceMeshGenerator>, ConfigError> {
        if self.shapes.is_empty() {
            return Err(ConfigError::EmptyScene);
        }

        let mut generators = batch::build_generators(&self.descriptors());
        for (generator, shape) in generators.iter_mut().zip(&self.shapes) {
            generator.set_render_mode(shape.render_mode);
        }
        Ok(generators)
    }
}
