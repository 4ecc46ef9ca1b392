//! Clientsmith Definition Library
//!
//! This crate provides the configuration types consumed by `clientsmith-gen`
//! to generate a Ruby HTTP client library for a REST API. A configuration is
//! usually written as YAML and loaded with [`load_config`].
//!
//! ## Core Types
//!
//! - [`ApiConfig`] - The root configuration: name, base URL, auth, resources
//! - [`ResourceSpec`] - A named group of endpoints sharing one generated class
//! - [`EndpointSpec`] - A single endpoint: name, HTTP method, path template
//! - [`HttpMethod`] - HTTP verbs supported by generated resources
//! - [`AuthType`] - Authentication modes (none, basic, api_key, oauth)
//! - [`ResponseFormat`] - Hints describing how response bodies are shaped
//! - [`Pagination`] - Pagination key names inside collection responses
//!
//! ## Examples
//!
//! ```
//! use clientsmith_define::{ApiConfig, AuthType, HttpMethod};
//!
//! let config = ApiConfig::from_yaml_str(r#"
//! api_name: blog-api
//! base_url: https://blog.example.com
//! auth_type: api_key
//! resources:
//!   posts:
//!     endpoints:
//!       - name: list
//!       - name: create
//!         method: post
//!         path: posts
//! "#).unwrap();
//!
//! assert_eq!(config.api_name(), "blog-api");
//! assert_eq!(config.auth_type, AuthType::ApiKey);
//! assert_eq!(config.api_key_header(), "X-Api-Key");
//!
//! let posts = &config.resources["posts"];
//! assert_eq!(posts.endpoints[0].path(), "list");
//! assert_eq!(posts.endpoints[1].method, HttpMethod::Post);
//! ```

mod auth;
mod config;
mod de;
mod error;
mod response;
mod types;

pub use auth::AuthType;
pub use config::{
    ApiConfig, DEFAULT_API_KEY_HEADER, DEFAULT_API_NAME, DEFAULT_BASE_URL, load_config,
};
pub use error::ConfigError;
pub use response::{Pagination, ResponseFormat};
pub use types::{EndpointSpec, HttpMethod, ResourceSpec};
