//! Root configuration and loading.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::auth::AuthType;
use crate::de::{null_as_default, resource_map};
use crate::error::ConfigError;
use crate::response::ResponseFormat;
use crate::types::ResourceSpec;

/// Base URL used when the configuration does not declare one.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Header carrying the key for `api_key` authentication when none is configured.
pub const DEFAULT_API_KEY_HEADER: &str = "X-Api-Key";

/// API name used when neither the configuration nor the working directory provide one.
pub const DEFAULT_API_NAME: &str = "api";

/// The complete generator input.
///
/// Every optional field has a documented default, applied by the accessor
/// methods rather than at parse time so the parsed value still reflects what
/// the author wrote.
///
/// `resources` preserves declaration order: generated files, `require`
/// statements and documentation sections all follow it.
///
/// ## Examples
///
/// ```
/// use clientsmith_define::{ApiConfig, DEFAULT_BASE_URL};
///
/// let config = ApiConfig::from_yaml_str("api_name: empty-api").unwrap();
/// assert_eq!(config.base_url(), DEFAULT_BASE_URL);
/// assert!(config.resources.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Kebab- or snake-case API identifier (e.g. `"payments-api"`).
    pub api_name: Option<String>,
    /// Base URL every endpoint path is resolved against.
    pub base_url: Option<String>,
    /// Authentication mode.
    pub auth_type: AuthType,
    /// OAuth token endpoint.
    pub token_url: Option<String>,
    /// Header name for `api_key` authentication.
    pub api_key_header: Option<String>,
    /// Global response format, overridable per resource.
    #[serde(deserialize_with = "null_as_default")]
    pub response_format: ResponseFormat,
    /// Resources keyed by name, in declaration order.
    #[serde(deserialize_with = "resource_map")]
    pub resources: IndexMap<String, ResourceSpec>,
}

impl ApiConfig {
    /// Creates an empty configuration for the given API name.
    pub fn new(api_name: impl Into<String>) -> Self {
        Self {
            api_name: Some(api_name.into()),
            ..Default::default()
        }
    }

    /// Parses a YAML document.
    ///
    /// An empty document (or one holding only comments) yields the default
    /// configuration.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid YAML or a
    /// value has the wrong shape (for example an unknown HTTP method).
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: serde_yaml::Value = serde_yaml::from_str(source)?;
        if value.is_null() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_value(value)?)
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the authentication mode.
    pub fn with_auth(mut self, auth_type: AuthType) -> Self {
        self.auth_type = auth_type;
        self
    }

    /// Sets the global response format.
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    /// Appends a resource, keeping declaration order.
    pub fn with_resource(mut self, name: impl Into<String>, resource: ResourceSpec) -> Self {
        self.resources.insert(name.into(), resource);
        self
    }

    /// The API name, falling back to [`DEFAULT_API_NAME`] when unset or blank.
    pub fn api_name(&self) -> &str {
        self.api_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_API_NAME)
    }

    /// The base URL, falling back to [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// The OAuth token URL, defaulting to `{base_url}/oauth/token`.
    pub fn token_url(&self) -> String {
        self.token_url.clone().unwrap_or_else(|| {
            format!("{}/oauth/token", self.base_url().trim_end_matches('/'))
        })
    }

    /// The API key header, falling back to [`DEFAULT_API_KEY_HEADER`].
    pub fn api_key_header(&self) -> &str {
        self.api_key_header
            .as_deref()
            .unwrap_or(DEFAULT_API_KEY_HEADER)
    }
}

/// Loads and parses a configuration file.
///
/// When the document does not name the API, the base name of the current
/// working directory is used, mirroring how a gem directory is usually named
/// after the gem.
///
/// ## Errors
///
/// - [`ConfigError::NotFound`] if `path` does not exist
/// - [`ConfigError::Read`] if it cannot be read
/// - [`ConfigError::Parse`] if it is not a valid configuration
pub fn load_config(path: &Path) -> Result<ApiConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.display().to_string(),
        });
    }

    let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let mut config = ApiConfig::from_yaml_str(&source)?;
    if config.api_name.is_none() {
        config.api_name = current_dir_name();
        tracing::debug!(api_name = ?config.api_name, "api_name not set, using working directory name");
    }

    Ok(config)
}

fn current_dir_name() -> Option<String> {
    let dir = std::env::current_dir().ok()?;
    Some(dir.file_name()?.to_string_lossy().into_owned())
}
