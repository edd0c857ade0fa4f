//! Error types
//!
//! Tessellation itself never fails. Errors only arise when scene
//! configuration is read from disk or parsed.

use std::path::PathBuf;

/// Failure while loading a scene configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read scene config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid scene TOML
    #[error("invalid scene config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but defines no shapes
    #[error("scene config defines no shapes")]
    EmptyScene,
}
