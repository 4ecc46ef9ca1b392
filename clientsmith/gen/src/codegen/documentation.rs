//! Generates `docs/api.md`, the per-endpoint reference.
//!
//! This module provides [`ApiDocBuilder`], which assembles the reference from
//! independent sections (header, table of contents, authentication, one
//! section per resource) so each can be tested on its own.

use clientsmith_define::{EndpointSpec, ResourceSpec};

use crate::auth::docs_section;
use crate::builder::GenerationContext;
use crate::naming::{humanize, singular};
use crate::parser::extract_path_params;
use crate::response::is_collection;

/// Fallback text for endpoints without a description.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Builds the markdown API reference for a generated client.
///
/// ## Examples
///
/// ```
/// use clientsmith_define::ApiConfig;
/// use clientsmith_gen::builder::Builder;
/// use clientsmith_gen::codegen::ApiDocBuilder;
///
/// let config = ApiConfig::new("shop-api");
/// let builder = Builder::new(&config);
/// let doc = ApiDocBuilder::new(builder.context()).build();
/// assert!(doc.starts_with("# ShopApi API Documentation"));
/// ```
pub struct ApiDocBuilder<'a> {
    ctx: &'a GenerationContext<'a>,
}

impl<'a> ApiDocBuilder<'a> {
    /// Creates a documentation builder for the given context.
    pub fn new(ctx: &'a GenerationContext<'a>) -> Self {
        Self { ctx }
    }

    /// Builds the complete document.
    pub fn build(&self) -> String {
        let mut sections = vec![
            self.header(),
            self.table_of_contents(),
            self.auth_section(),
            "## Resources".to_string(),
        ];
        for (name, resource) in &self.ctx.config.resources {
            sections.push(self.resource_section(name, resource));
        }

        let mut doc = sections.join("\n\n");
        doc.push('\n');
        doc
    }

    fn header(&self) -> String {
        let module = &self.ctx.module_name;
        format!(
            "# {module} API Documentation\n\n\
             This document provides detailed information about the endpoints available in the {module} API client.\n\n\
             **API Base URL:** `{base}`",
            module = module,
            base = self.ctx.config.base_url(),
        )
    }

    fn table_of_contents(&self) -> String {
        let mut lines = vec![
            "## Table of Contents".to_string(),
            String::new(),
            "- [Authentication](#authentication)".to_string(),
        ];
        for name in self.ctx.config.resources.keys() {
            lines.push(format!("- [{}](#{})", humanize(name), name));
        }
        lines.join("\n")
    }

    fn auth_section(&self) -> String {
        let mut lines = vec!["## Authentication".to_string(), String::new()];
        lines.extend(docs_section(self.ctx.config, &self.ctx.module_name));
        lines.join("\n")
    }

    fn resource_section(&self, name: &str, resource: &ResourceSpec) -> String {
        let mut parts = vec![format!("<a name=\"{}\"></a>\n### {}", name, humanize(name))];

        if resource.endpoints.is_empty() {
            parts.push("This resource has no endpoints.".to_string());
        }
        for endpoint in &resource.endpoints {
            parts.push(self.endpoint_section(name, endpoint));
        }

        parts.join("\n\n")
    }

    fn endpoint_section(&self, resource: &str, endpoint: &EndpointSpec) -> String {
        let path = endpoint.path();
        let path_params = extract_path_params(path);
        let has_body = endpoint.method.has_body();
        let full_url = format!(
            "{}/{}",
            self.ctx.config.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let mut lines = vec![
            format!("#### {}", endpoint.name),
            String::new(),
            format!("**{}** `{}`", endpoint.method.upper(), full_url),
            String::new(),
            endpoint
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            String::new(),
            "**Parameters**".to_string(),
            String::new(),
        ];

        if path_params.is_empty() && !endpoint.params && !has_body {
            lines.push("This endpoint does not require any parameters.".to_string());
        } else {
            for param in &path_params {
                lines.push(format!(
                    "- `{}` (path): Required. {}",
                    param,
                    param_description(param)
                ));
            }
            if endpoint.params {
                lines.push("- `params` (query): Optional hash of additional query parameters.".to_string());
            }
            if has_body {
                lines.push("- `body`: Hash of resource attributes sent as the JSON request body.".to_string());
            }
        }

        let mut call_args: Vec<&str> = path_params.clone();
        if endpoint.params {
            call_args.push("params");
        }
        if has_body {
            call_args.push("body");
        }
        let call = if call_args.is_empty() {
            format!("client.{}.{}", resource, endpoint.name)
        } else {
            format!("client.{}.{}({})", resource, endpoint.name, call_args.join(", "))
        };

        lines.extend([
            String::new(),
            "**Example Usage**".to_string(),
            String::new(),
            "```ruby".to_string(),
            call,
            "```".to_string(),
            String::new(),
            "**Response**".to_string(),
            String::new(),
        ]);
        let collection = is_collection(&endpoint.name, endpoint.collection);
        lines.extend(response_example(&endpoint.name, collection, &singular(resource)));

        lines.join("\n")
    }
}

/// Human description for a path placeholder.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::codegen::documentation::param_description;
///
/// assert_eq!(param_description("id"), "The unique identifier of the resource.");
/// assert_eq!(param_description("post_id"), "The identifier of the post.");
/// ```
pub fn param_description(param: &str) -> String {
    match param {
        "id" => "The unique identifier of the resource.".to_string(),
        "customer_id" => "The identifier of the customer.".to_string(),
        _ => match param.strip_suffix("_id") {
            Some(owner) if !owner.is_empty() => format!("The identifier of the {}.", owner),
            _ => "Description not available.".to_string(),
        },
    }
}

/// Ruby snippet illustrating what an endpoint returns, chosen by name.
fn response_example(name: &str, collection: bool, item: &str) -> Vec<String> {
    let body: Vec<String> = if collection {
        vec![
            "# Returns a Collection".to_string(),
            format!("collection.each do |{}|", item),
            format!("  puts {}.id", item),
            "end".to_string(),
            String::new(),
            "# Pagination".to_string(),
            "collection.next_page?  # true when more results are available".to_string(),
            "collection.next_href   # reference to the next page".to_string(),
        ]
    } else {
        match name {
            "get" | "find" | "show" => vec![
                "# Returns a single Object".to_string(),
                format!("puts {}.id", item),
            ],
            "create" => vec![
                "# Returns the created Object".to_string(),
                format!("puts {}.id", item),
            ],
            "update" => vec![
                "# Returns the updated Object".to_string(),
                format!("puts {}.id", item),
            ],
            "delete" | "destroy" | "remove" => {
                vec!["# Returns the API's confirmation payload wrapped in an Object".to_string()]
            }
            _ => vec!["# Returns an Object wrapping the response body".to_string()],
        }
    };

    let mut lines = vec!["```ruby".to_string()];
    lines.extend(body);
    lines.push("```".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{context_for, make_users_config};
    use clientsmith_define::{ApiConfig, AuthType};

    #[test]
    fn header_names_module_and_base_url() {
        let config = ApiConfig::new("shop-api").with_base_url("https://shop.example.com");
        let doc = ApiDocBuilder::new(&context_for(&config)).build();

        assert!(doc.starts_with("# ShopApi API Documentation\n"));
        assert!(doc.contains("**API Base URL:** `https://shop.example.com`"));
    }

    #[test]
    fn table_of_contents_links_every_resource() {
        let config = make_users_config();
        let doc = ApiDocBuilder::new(&context_for(&config)).build();

        assert!(doc.contains("- [Authentication](#authentication)\n- [Users](#users)"));
        assert!(doc.contains("<a name=\"users\"></a>\n### Users"));
    }

    #[test]
    fn endpoint_section_shows_verb_and_full_url() {
        let config = make_users_config();
        let doc = ApiDocBuilder::new(&context_for(&config)).build();

        assert!(doc.contains("**GET** `https://api.example.com/users/{id}`"));
        assert!(doc.contains("**POST** `https://api.example.com/users`"));
    }

    #[test]
    fn parameters_are_described() {
        let config = make_users_config();
        let doc = ApiDocBuilder::new(&context_for(&config)).build();

        assert!(doc.contains("- `id` (path): Required. The unique identifier of the resource."));
        assert!(doc.contains("This endpoint does not require any parameters."));
        assert!(doc.contains("- `body`: Hash of resource attributes"));
    }

    #[test]
    fn example_calls_match_generated_signatures() {
        let config = make_users_config();
        let doc = ApiDocBuilder::new(&context_for(&config)).build();

        assert!(doc.contains("```ruby\nclient.users.list\n```"));
        assert!(doc.contains("```ruby\nclient.users.get(id)\n```"));
        assert!(doc.contains("```ruby\nclient.users.create(body)\n```"));
    }

    #[test]
    fn missing_description_uses_placeholder() {
        let config = make_users_config();
        let doc = ApiDocBuilder::new(&context_for(&config)).build();

        assert!(doc.contains(NO_DESCRIPTION));
    }

    #[test]
    fn api_key_docs_name_the_header() {
        let config = ApiConfig::new("shop-api").with_auth(AuthType::ApiKey);
        let doc = ApiDocBuilder::new(&context_for(&config)).build();

        assert!(doc.contains("provided in the `X-Api-Key` header"));
    }

    #[test]
    fn collection_example_uses_singular_block_variable() {
        let lines = response_example("list", true, "user");

        assert!(lines.contains(&"collection.each do |user|".to_string()));
    }

    #[test]
    fn explicit_collection_flag_decides_the_example() {
        let resource = ResourceSpec::new(vec![
            EndpointSpec::new("list").with_path("users").with_collection(false),
            EndpointSpec::new("recent").with_path("users/recent").with_collection(true),
        ]);
        let config = ApiConfig::new("shop-api").with_resource("users", resource);
        let ctx = context_for(&config);
        let docs = ApiDocBuilder::new(&ctx).build();

        let (list, recent) = docs
            .split_once("#### recent")
            .expect("recent endpoint section");
        assert!(!list.contains("# Returns a Collection"));
        assert!(list.contains("# Returns an Object wrapping the response body"));
        assert!(recent.contains("# Returns a Collection"));
    }

    #[test]
    fn param_descriptions() {
        assert_eq!(param_description("customer_id"), "The identifier of the customer.");
        assert_eq!(param_description("org_id"), "The identifier of the org.");
        assert_eq!(param_description("_id"), "Description not available.");
        assert_eq!(param_description("slug"), "Description not available.");
    }
}
