//! Generates `lib/<stem>/resources/<resource>.rb`.
//!
//! Each endpoint becomes one instance method. The signature is built from
//! the path placeholders (in first-occurrence order), then `params = {}` when
//! the endpoint accepts query parameters, then `body = {}` for verbs that
//! carry a body.

use clientsmith_define::{EndpointSpec, ResourceSpec};

use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;
use crate::naming::class_name_for_resource;
use crate::parser::{extract_path_params, interpolate};
use crate::response::{effective_format, is_collection, unwrap_expression};

/// Parameter list of the generated method, in signature order.
///
/// ## Examples
///
/// ```
/// use clientsmith_define::{EndpointSpec, HttpMethod};
/// use clientsmith_gen::codegen::resource::method_params;
///
/// let endpoint = EndpointSpec::new("update")
///     .with_method(HttpMethod::Put)
///     .with_path("users/{id}")
///     .with_params();
/// assert_eq!(method_params(&endpoint), vec!["id", "params = {}", "body = {}"]);
/// ```
pub fn method_params(endpoint: &EndpointSpec) -> Vec<String> {
    let mut params: Vec<String> = extract_path_params(endpoint.path())
        .into_iter()
        .map(str::to_string)
        .collect();

    if endpoint.params {
        params.push("params = {}".to_string());
    }
    if endpoint.method.has_body() {
        params.push("body = {}".to_string());
    }

    params
}

/// The `def` line; a method without parameters has no parentheses.
pub fn method_signature(endpoint: &EndpointSpec) -> String {
    let params = method_params(endpoint);
    if params.is_empty() {
        format!("def {}", endpoint.name)
    } else {
        format!("def {}({})", endpoint.name, params.join(", "))
    }
}

/// The `request.<verb>(...)` call, passing only the arguments the method declares.
pub fn request_call(endpoint: &EndpointSpec) -> String {
    let mut args = Vec::new();
    if endpoint.params {
        args.push("params: params");
    }
    if endpoint.method.has_body() {
        args.push("body: body");
    }

    if args.is_empty() {
        format!("request.{}", endpoint.method)
    } else {
        format!("request.{}({})", endpoint.method, args.join(", "))
    }
}

/// Renders the resource class for `name`.
pub fn render(ctx: &GenerationContext<'_>, name: &str, resource: &ResourceSpec) -> String {
    let module = ctx.module_name.as_str();
    let format = effective_format(resource, &ctx.config.response_format);
    let mut src = SourceBuilder::ruby_file();

    if resource.endpoints.is_empty() {
        tracing::warn!(resource = %name, "resource declares no endpoints");
    }

    src.block(format!("module {}", module), |m| {
        m.block("module Resources", |r| {
            r.block(format!("class {}", class_name_for_resource(name)), |c| {
                c.line("attr_reader :client");
                c.blank();
                c.block("def initialize(client)", |i| {
                    i.line("@client = client");
                    i.line("@config = client.configuration");
                });

                for endpoint in &resource.endpoints {
                    tracing::debug!(
                        resource = %name,
                        endpoint = %endpoint.name,
                        method = %endpoint.method,
                        path = %endpoint.path(),
                        "rendering endpoint"
                    );

                    let collection = is_collection(&endpoint.name, endpoint.collection);
                    c.blank();
                    c.block(method_signature(endpoint), |d| {
                        d.line(format!(
                            "request = {}::Request.new(\"{}\", @config)",
                            module,
                            interpolate(endpoint.path())
                        ));
                        d.line(format!("response = {}", request_call(endpoint)));
                        d.blank();
                        d.line(unwrap_expression(module, collection, &format));
                    });
                }
            });
        });
    });

    src.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::context_for;
    use clientsmith_define::{ApiConfig, HttpMethod, ResponseFormat};
    use strum::IntoEnumIterator;

    fn users() -> ResourceSpec {
        ResourceSpec::new(vec![
            EndpointSpec::new("list").with_path("users"),
            EndpointSpec::new("get").with_path("users/{id}"),
            EndpointSpec::new("create")
                .with_method(HttpMethod::Post)
                .with_path("users"),
        ])
    }

    // === signature tests ===

    #[test]
    fn list_has_no_parentheses() {
        assert_eq!(method_signature(&EndpointSpec::new("list")), "def list");
    }

    #[test]
    fn path_params_come_first() {
        let endpoint = EndpointSpec::new("get").with_path("users/{user_id}/posts/{id}");
        assert_eq!(method_signature(&endpoint), "def get(user_id, id)");
    }

    #[test]
    fn params_then_body() {
        let endpoint = EndpointSpec::new("search")
            .with_method(HttpMethod::Post)
            .with_path("orgs/{org}/search")
            .with_params();

        assert_eq!(
            method_signature(&endpoint),
            "def search(org, params = {}, body = {})"
        );
        assert_eq!(
            request_call(&endpoint),
            "request.post(params: params, body: body)"
        );
    }

    #[test]
    fn request_call_keywords_are_accepted_by_the_request_verb() {
        let request = crate::codegen::request::render(&context_for(&ApiConfig::new("shop-api")));

        for method in HttpMethod::iter() {
            let verb_def = request
                .lines()
                .map(str::trim)
                .find(|l| l.starts_with(&format!("def {}(", method)))
                .unwrap_or_else(|| panic!("no request method for {}", method));

            for with_params in [false, true] {
                let mut endpoint = EndpointSpec::new("call").with_method(method);
                if with_params {
                    endpoint = endpoint.with_params();
                }
                let call = request_call(&endpoint);
                let args = call
                    .split_once('(')
                    .map(|(_, rest)| rest.trim_end_matches(')'))
                    .unwrap_or("");

                for arg in args.split(", ").filter(|a| !a.is_empty()) {
                    let keyword = arg.split(':').next().unwrap();
                    assert!(
                        verb_def.contains(&format!("{}: {{}}", keyword)),
                        "`{}` passes {}: but `{}` does not accept it",
                        call,
                        keyword,
                        verb_def
                    );
                }
            }
        }
    }

    #[test]
    fn delete_has_no_body() {
        let endpoint = EndpointSpec::new("delete")
            .with_method(HttpMethod::Delete)
            .with_path("users/{id}");

        assert_eq!(method_signature(&endpoint), "def delete(id)");
        assert_eq!(request_call(&endpoint), "request.delete");
    }

    #[test]
    fn repeated_placeholder_is_one_parameter() {
        let endpoint = EndpointSpec::new("clone").with_path("{id}/clone/{id}");

        assert_eq!(method_signature(&endpoint), "def clone(id)");
    }

    // === render tests ===

    #[test]
    fn renders_users_resource() {
        let config = ApiConfig::new("test-api");
        let code = render(&context_for(&config), "users", &users());

        assert!(code.contains("module TestApi\n  module Resources\n    class Users\n"));
        assert!(code.contains("@config = client.configuration"));
        assert!(code.contains(
            "      def list\n        request = TestApi::Request.new(\"users\", @config)\n        response = request.get\n\n        TestApi::Collection.from_response(response, type: TestApi::Object)\n      end\n"
        ));
        assert!(code.contains("def get(id)"));
        assert!(code.contains("TestApi::Request.new(\"users/#{id}\", @config)"));
        assert!(code.contains("def create(body = {})"));
        assert!(code.contains("response = request.post(body: body)"));
    }

    #[test]
    fn methods_follow_declaration_order() {
        let code = render(&context_for(&ApiConfig::new("x")), "users", &users());

        let list = code.find("def list").unwrap();
        let get = code.find("def get").unwrap();
        let create = code.find("def create").unwrap();
        assert!(list < get && get < create);
    }

    #[test]
    fn resource_format_overrides_global() {
        let config = ApiConfig::new("x").with_response_format(ResponseFormat {
            collection_root: Some("results".to_string()),
            item_root: Some("item".to_string()),
            pagination: None,
        });
        let resource = users().with_response_format(ResponseFormat {
            item_root: Some("user".to_string()),
            ..Default::default()
        });

        let code = render(&context_for(&config), "users", &resource);
        assert!(code.contains("data_key: \"results\""));
        assert!(code.contains("response[:user] || response[\"user\"]"));
        assert!(!code.contains("response[:item]"));
    }

    #[test]
    fn explicit_collection_flag_is_honoured() {
        let resource = ResourceSpec::new(vec![
            EndpointSpec::new("recent").with_collection(true),
            EndpointSpec::new("list").with_collection(false),
        ]);
        let code = render(&context_for(&ApiConfig::new("x")), "feed", &resource);

        assert!(code.contains(
            "def recent\n        request = X::Request.new(\"recent\", @config)\n        response = request.get\n\n        X::Collection.from_response"
        ));
        assert!(code.contains(
            "def list\n        request = X::Request.new(\"list\", @config)\n        response = request.get\n\n        X::Object.new(response)"
        ));
    }

    #[test]
    fn empty_resource_still_renders_class() {
        let code = render(
            &context_for(&ApiConfig::new("x")),
            "empty",
            &ResourceSpec::default(),
        );

        assert!(code.contains("class Empty"));
        assert!(code.contains("def initialize(client)"));
    }
}
