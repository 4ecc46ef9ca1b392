//! Shared test utilities for clientsmith-gen tests.
//!
//! Fixture builders used by the unit tests of every template module.

use clientsmith_define::{ApiConfig, EndpointSpec, HttpMethod, ResourceSpec};

use crate::builder::GenerationContext;

/// Generation context for `config`.
pub fn context_for(config: &ApiConfig) -> GenerationContext<'_> {
    GenerationContext::new(config)
}

/// A `test-api` configuration with one `list` endpoint per named resource.
pub fn make_config_with_resources(names: &[&str]) -> ApiConfig {
    names.iter().fold(ApiConfig::new("test-api"), |config, name| {
        config.with_resource(
            *name,
            ResourceSpec::new(vec![EndpointSpec::new("list").with_path(*name)]),
        )
    })
}

/// A `test-api` configuration with the canonical users resource:
/// `list` (`users`), `get` (`users/{id}`) and `create` (POST `users`).
pub fn make_users_config() -> ApiConfig {
    ApiConfig::new("test-api").with_resource(
        "users",
        ResourceSpec::new(vec![
            EndpointSpec::new("list").with_path("users"),
            EndpointSpec::new("get").with_path("users/{id}"),
            EndpointSpec::new("create")
                .with_method(HttpMethod::Post)
                .with_path("users"),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_keep_given_order() {
        let config = make_config_with_resources(&["users", "posts"]);
        let names: Vec<_> = config.resources.keys().cloned().collect();
        assert_eq!(names, vec!["users", "posts"]);
    }

    #[test]
    fn users_config_has_three_endpoints() {
        let config = make_users_config();
        assert_eq!(config.resources["users"].endpoints.len(), 3);
    }
}
