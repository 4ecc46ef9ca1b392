//! Errors raised while loading a configuration document.

use thiserror::Error;

/// Errors that can occur while loading an [`ApiConfig`](crate::ApiConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {path}")]
    NotFound { path: String },

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the expected shape.
    #[error("failed to parse configuration: {source}")]
    Parse {
        #[from]
        source: serde_yaml::Error,
    },
}
