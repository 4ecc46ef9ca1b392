//! Error types for the clientsmith generator.

use clientsmith_define::ConfigError;
use thiserror::Error;

/// Errors that can occur during client generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A required piece of configuration was absent
    #[error("Missing configuration: {0}")]
    ConfigurationMissing(String),

    /// Failed to load the configuration document
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output directory does not exist and could not be created
    #[error("Output directory does not exist: {0}")]
    OutputDirNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_keep_their_message() {
        let err: GeneratorError = ConfigError::NotFound {
            path: "api.yml".to_string(),
        }
        .into();

        assert_eq!(err.to_string(), "configuration file not found: api.yml");
    }

    #[test]
    fn write_error_names_the_path() {
        let err = GeneratorError::WriteError {
            path: "lib/shop.rb".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains("'lib/shop.rb'"));
    }
}
