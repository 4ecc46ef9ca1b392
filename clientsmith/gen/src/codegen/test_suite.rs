//! Generates the starter minitest suite for the client gem.
//!
//! `test/test_helper.rb` loads the gem with minitest and webmock;
//! `test/<stem>_test.rb` covers configuration, the client accessors, error
//! handling and one stubbed round trip per endpoint. Stubbed bodies follow
//! the resource's effective response format, so the unwrap code emitted for
//! each method is exercised against the shape it expects.

use clientsmith_define::{AuthType, EndpointSpec, ResponseFormat};

use crate::auth::{test_assertions, test_config_lines};
use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;
use crate::codegen::collection::{DEFAULT_DATA_KEY, DEFAULT_NEXT_KEY};
use crate::parser::{extract_path_params, substitute_path_params};
use crate::response::{effective_format, is_collection, ruby_string};

/// Placeholder value substituted for every path parameter in generated tests.
const SAMPLE_ID: &str = "123";

/// Renders `test/test_helper.rb`.
pub fn render_helper(ctx: &GenerationContext<'_>) -> String {
    let mut src = SourceBuilder::ruby_file();

    src.line("$LOAD_PATH.unshift File.expand_path(\"../lib\", __dir__)");
    src.line(format!("require \"{}\"", ctx.file_stem));
    src.blank();
    src.line("require \"minitest/autorun\"");
    src.line("require \"webmock/minitest\"");

    src.finish()
}

/// Renders `test/<stem>_test.rb`.
pub fn render_tests(ctx: &GenerationContext<'_>) -> String {
    let module = ctx.module_name.as_str();
    let mut src = SourceBuilder::ruby_file();

    src.line("require \"test_helper\"");
    src.blank();

    src.block(format!("class {}Test < Minitest::Test", module), |c| {
        emit_setup(c, ctx);
        c.blank();
        emit_configuration_test(c, ctx);
        c.blank();
        emit_client_test(c, ctx);
        c.blank();
        emit_error_tests(c, ctx);

        for (name, resource) in &ctx.config.resources {
            let format = effective_format(resource, &ctx.config.response_format);
            for endpoint in &resource.endpoints {
                c.blank();
                emit_endpoint_test(c, ctx, name, endpoint, &format);
            }
        }
    });

    src.finish()
}

fn emit_setup(src: &mut SourceBuilder, ctx: &GenerationContext<'_>) {
    let module = ctx.module_name.as_str();

    src.block("def setup", |s| {
        s.line(format!("{}.reset!", module));
        s.block(format!("{}.configure do |config|", module), |b| {
            b.line(format!("config.base_url = {}", ruby_string(ctx.config.base_url())));
            if ctx.config.auth_type == AuthType::Oauth {
                b.line("config.access_token = \"test_access_token\"");
            }
        });
    });
}

fn emit_configuration_test(src: &mut SourceBuilder, ctx: &GenerationContext<'_>) {
    let module = ctx.module_name.as_str();

    src.block("def test_configuration", |t| {
        t.block(format!("{}.configure do |config|", module), |b| {
            b.line("config.base_url = \"https://api.test.org\"");
            b.line("config.timeout = 60");
            b.lines(test_config_lines(ctx.config));
        });
        t.blank();
        t.line(format!(
            "assert_equal \"https://api.test.org\", {}.configuration.base_url",
            module
        ));
        t.line(format!("assert_equal 60, {}.configuration.timeout", module));
        t.lines(test_assertions(ctx.config, module));
    });
}

fn emit_client_test(src: &mut SourceBuilder, ctx: &GenerationContext<'_>) {
    let module = ctx.module_name.as_str();

    src.block("def test_client_initialization", |t| {
        t.line(format!("client = {}.client", module));
        t.blank();
        t.line(format!("assert_instance_of {}::Client, client", module));
        t.line(format!(
            "assert_same {}.configuration, client.configuration",
            module
        ));
        for name in ctx.config.resources.keys() {
            t.line(format!("assert_respond_to client, :{}", name));
        }
    });
}

fn emit_error_tests(src: &mut SourceBuilder, ctx: &GenerationContext<'_>) {
    let module = ctx.module_name.as_str();

    src.block("def test_error_handling", |t| {
        t.line(format!(
            "error = {}::Error.new(\"Test error\", {{ \"error\" => \"details\" }}, 400)",
            module
        ));
        t.blank();
        t.line("assert_equal \"Test error\", error.message");
        t.line("assert_equal({ \"error\" => \"details\" }, error.body)");
        t.line("assert_equal 400, error.status");
    });
    src.blank();

    src.block("def test_http_error_response", |t| {
        t.line(format!(
            "stub_request(:get, {})",
            ruby_string(&full_url(ctx, "error_test"))
        ));
        t.line("  .to_return(status: 404, body: { \"error\" => \"Resource not found\" }.to_json,");
        t.line("             headers: { \"Content-Type\" => \"application/json\" })");
        t.blank();
        t.block(
            format!("error = assert_raises({}::Error) do", module),
            |b| {
                b.line(format!("{}::Request.new(\"error_test\").get", module));
            },
        );
        t.blank();
        t.line("assert_equal 404, error.status");
        t.line("assert_includes error.message, \"Resource not found\"");
    });
}

fn emit_endpoint_test(
    src: &mut SourceBuilder,
    ctx: &GenerationContext<'_>,
    resource: &str,
    endpoint: &EndpointSpec,
    format: &ResponseFormat,
) {
    let module = ctx.module_name.as_str();
    let collection = is_collection(&endpoint.name, endpoint.collection);

    let path_params: Vec<(&str, &str)> = extract_path_params(endpoint.path())
        .into_iter()
        .map(|p| (p, SAMPLE_ID))
        .collect();
    let url = full_url(ctx, &substitute_path_params(endpoint.path(), &path_params));

    let mut args: Vec<String> = path_params
        .iter()
        .map(|(_, v)| ruby_string(v))
        .collect();
    if endpoint.params {
        args.push("{ page: 1 }".to_string());
    }
    if endpoint.method.has_body() {
        args.push("{ name: \"Test\" }".to_string());
    }
    let call = if args.is_empty() {
        format!("client.{}.{}", resource, endpoint.name)
    } else {
        format!("client.{}.{}({})", resource, endpoint.name, args.join(", "))
    };

    let test_name = format!(
        "test_{}_{}",
        method_safe(resource),
        method_safe(&endpoint.name)
    );

    src.block(format!("def {}", test_name), |t| {
        t.line(format!("response_body = {}", sample_body(collection, format)));
        t.line(format!(
            "stub_request(:{}, {})",
            endpoint.method,
            ruby_string(&url)
        ));
        if endpoint.params {
            t.line("  .with(query: { \"page\" => \"1\" })");
        }
        t.line("  .to_return(status: 200, body: response_body.to_json,");
        t.line("             headers: { \"Content-Type\" => \"application/json\" })");
        t.blank();
        t.line(format!("client = {}.client", module));
        t.line(format!("result = {}", call));
        t.blank();
        if collection {
            t.line(format!("assert_instance_of {}::Collection, result", module));
            t.line("assert_equal 1, result.size");
            t.line("assert_equal 1, result.data.first.id");
            t.line("assert result.next_page?");
        } else {
            t.line(format!("assert_instance_of {}::Object, result", module));
            t.line("assert_equal 1, result.id");
            t.line("assert_equal \"Test\", result.name");
        }
    });
}

/// Stubbed response body shaped the way the unwrap expression expects.
fn sample_body(collection: bool, format: &ResponseFormat) -> String {
    let item = "{ \"id\" => 1, \"name\" => \"Test\" }".to_string();

    if collection {
        let data_key = format.collection_root.as_deref().unwrap_or(DEFAULT_DATA_KEY);
        let next_key = format.next_page_key().unwrap_or(DEFAULT_NEXT_KEY);
        format!(
            "{{ {} => [{}], {} => \"/next\" }}",
            ruby_string(data_key),
            item,
            ruby_string(next_key)
        )
    } else {
        match format.item_root.as_deref() {
            Some(root) => format!("{{ {} => {} }}", ruby_string(root), item),
            None => item,
        }
    }
}

fn full_url(ctx: &GenerationContext<'_>, path: &str) -> String {
    format!(
        "{}/{}",
        ctx.config.base_url().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Replaces characters that cannot appear in a Ruby method name.
fn method_safe(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{context_for, make_users_config};
    use clientsmith_define::{ApiConfig, Pagination};

    #[test]
    fn helper_loads_gem_and_test_libraries() {
        let code = render_helper(&context_for(&ApiConfig::new("shop-api")));

        assert!(code.contains("require \"shop_api\""));
        assert!(code.contains("require \"minitest/autorun\""));
        assert!(code.contains("require \"webmock/minitest\""));
    }

    #[test]
    fn one_test_per_endpoint() {
        let code = render_tests(&context_for(&make_users_config()));

        assert!(code.contains("class TestApiTest < Minitest::Test"));
        assert!(code.contains("def test_users_list"));
        assert!(code.contains("def test_users_get"));
        assert!(code.contains("def test_users_create"));
    }

    #[test]
    fn endpoint_tests_stub_the_resolved_url() {
        let code = render_tests(&context_for(&make_users_config()));

        assert!(code.contains("stub_request(:get, \"https://api.example.com/users/123\")"));
        assert!(code.contains("result = client.users.get(\"123\")"));
        assert!(code.contains("stub_request(:post, \"https://api.example.com/users\")"));
        assert!(code.contains("result = client.users.create({ name: \"Test\" })"));
    }

    #[test]
    fn collection_test_asserts_collection() {
        let code = render_tests(&context_for(&make_users_config()));

        assert!(code.contains("assert_instance_of TestApi::Collection, result"));
        assert!(code.contains(
            "response_body = { \"data\" => [{ \"id\" => 1, \"name\" => \"Test\" }], \"next_href\" => \"/next\" }"
        ));
    }

    #[test]
    fn error_handling_test_builds_error_with_body() {
        let code = render_tests(&context_for(&make_users_config()));

        let expected = [
            "  def test_error_handling",
            "    error = TestApi::Error.new(\"Test error\", { \"error\" => \"details\" }, 400)",
            "",
            "    assert_equal \"Test error\", error.message",
            "    assert_equal({ \"error\" => \"details\" }, error.body)",
            "    assert_equal 400, error.status",
            "  end",
        ]
        .join("\n");
        assert!(code.contains(&expected), "missing error test in:\n{}", code);
    }

    #[test]
    fn sample_body_follows_configured_keys() {
        let format = ResponseFormat {
            collection_root: Some("results".to_string()),
            item_root: Some("user".to_string()),
            pagination: Some(Pagination {
                next_page_key: Some("next_page".to_string()),
                ..Default::default()
            }),
        };

        assert_eq!(
            sample_body(true, &format),
            "{ \"results\" => [{ \"id\" => 1, \"name\" => \"Test\" }], \"next_page\" => \"/next\" }"
        );
        assert_eq!(
            sample_body(false, &format),
            "{ \"user\" => { \"id\" => 1, \"name\" => \"Test\" } }"
        );
    }

    #[test]
    fn oauth_tests_preset_a_token() {
        let config = make_users_config().with_auth(AuthType::Oauth);
        let code = render_tests(&context_for(&config));

        assert!(code.contains("config.access_token = \"test_access_token\""));
        assert!(code.contains("assert_equal \"test_client_id\", TestApi.configuration.client_id"));
    }

    #[test]
    fn client_test_checks_every_accessor() {
        let code = render_tests(&context_for(&make_users_config()));
        assert!(code.contains("assert_respond_to client, :users"));
    }

    #[test]
    fn method_safe_names() {
        assert_eq!(method_safe("user-posts"), "user_posts");
        assert_eq!(method_safe("list"), "list");
    }
}
