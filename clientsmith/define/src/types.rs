//! Resource and endpoint definitions.
//!
//! - [`ResourceSpec`] - A named group of endpoints
//! - [`EndpointSpec`] - A single endpoint within a resource
//! - [`HttpMethod`] - HTTP verb enumeration

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::de::null_as_default;
use crate::response::ResponseFormat;

/// HTTP methods a generated resource method can issue.
///
/// Displayed in lowercase because the generated Ruby request object exposes
/// one lowercase method per verb (`request.get`, `request.post`, ...).
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use clientsmith_define::HttpMethod;
///
/// assert_eq!(HttpMethod::from_str("PATCH").unwrap(), HttpMethod::Patch);
/// assert_eq!(HttpMethod::Delete.to_string(), "delete");
/// assert!(HttpMethod::Put.has_body());
/// assert!(!HttpMethod::Get.has_body());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(try_from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HttpMethod {
    /// HTTP GET - Retrieve a resource
    #[default]
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
}

impl HttpMethod {
    /// Returns `true` for verbs whose generated method accepts a `body`.
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    /// Uppercase form for documentation (`GET`, `POST`, ...).
    pub fn upper(self) -> String {
        self.as_ref().to_uppercase()
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse().map_err(|_| {
            format!(
                "unsupported HTTP method '{}' (expected get, post, put, patch or delete)",
                value
            )
        })
    }
}

/// A named group of related endpoints.
///
/// Each resource becomes one generated class (`Resources::Users`) and one
/// accessor on the generated client (`client.users`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceSpec {
    /// Endpoints in declaration order.
    #[serde(deserialize_with = "null_as_default")]
    pub endpoints: Vec<EndpointSpec>,
    /// Resource-specific response format, merged over the global one.
    pub response_format: Option<ResponseFormat>,
}

impl ResourceSpec {
    /// Creates a resource from its endpoints.
    pub fn new(endpoints: Vec<EndpointSpec>) -> Self {
        Self {
            endpoints,
            response_format: None,
        }
    }

    /// Sets the resource-level response format override.
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// One HTTP operation within a resource.
///
/// ## Examples
///
/// ```
/// use clientsmith_define::{EndpointSpec, HttpMethod};
///
/// let endpoint = EndpointSpec::new("get").with_path("users/{id}");
/// assert_eq!(endpoint.method, HttpMethod::Get);
/// assert_eq!(endpoint.path(), "users/{id}");
///
/// // The path defaults to the endpoint name.
/// assert_eq!(EndpointSpec::new("search").path(), "search");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointSpec {
    /// Method name in the generated resource class.
    pub name: String,
    /// HTTP verb, `get` when omitted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: HttpMethod,
    /// Path template relative to the base URL; may contain `{param}` placeholders.
    #[serde(default)]
    pub path: Option<String>,
    /// Whether the generated method accepts a free-form query hash.
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: bool,
    /// Explicit collection override; inferred from the name when absent.
    #[serde(default)]
    pub collection: Option<bool>,
    /// Human-readable description for the generated documentation.
    #[serde(default)]
    pub description: Option<String>,
}

impl EndpointSpec {
    /// Creates a GET endpoint whose path defaults to its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method: HttpMethod::Get,
            path: None,
            params: false,
            collection: None,
            description: None,
        }
    }

    /// Sets the HTTP method.
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the path template.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Marks the endpoint as accepting query parameters.
    pub fn with_params(mut self) -> Self {
        self.params = true;
        self
    }

    /// Sets the explicit collection flag.
    pub fn with_collection(mut self, collection: bool) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The effective path template (`path`, or `name` when unset).
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_method_round_trips_through_try_from() {
        for method in HttpMethod::iter() {
            assert_eq!(HttpMethod::try_from(method.to_string()), Ok(method));
        }
    }

    #[test]
    fn unknown_method_is_rejected_with_a_readable_message() {
        let err = HttpMethod::try_from("fetch".to_string()).unwrap_err();
        assert!(err.contains("'fetch'"));
    }

    #[test]
    fn only_write_verbs_carry_a_body() {
        let with_body: Vec<_> = HttpMethod::iter().filter(|m| m.has_body()).collect();
        assert_eq!(
            with_body,
            vec![HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch]
        );
    }

    #[test]
    fn explicit_path_overrides_name() {
        let endpoint = EndpointSpec::new("list").with_path("v2/items");
        assert_eq!(endpoint.path(), "v2/items");
    }

    #[test]
    fn upper_form_for_docs() {
        assert_eq!(HttpMethod::Patch.upper(), "PATCH");
    }
}
