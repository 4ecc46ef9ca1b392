//! Generates `lib/<stem>/request.rb`, the Faraday-backed HTTP layer.

use clientsmith_define::{AuthType, HttpMethod};
use strum::IntoEnumIterator;

use crate::auth::{emit_oauth_helpers, request_fragment, request_requires};
use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;

/// Renders the request class.
///
/// One public method per [`HttpMethod`]. Every verb takes `params:` for the
/// query string and verbs that carry a body also take `body:`. Non-2xx
/// responses raise the generated error type.
pub fn render(ctx: &GenerationContext<'_>) -> String {
    let module = ctx.module_name.as_str();
    let auth = ctx.config.auth_type;
    let mut src = SourceBuilder::ruby_file();

    src.line("require \"faraday\"");
    src.line("require \"json\"");
    for lib in request_requires(auth) {
        src.line(format!("require \"{}\"", lib));
    }
    src.blank();

    src.block(format!("module {}", module), |m| {
        m.block("class Request", |c| {
            c.line("attr_reader :path");
            c.blank();
            c.block(
                format!("def initialize(path, config = {}.configuration)", module),
                |i| {
                    i.line("@path = path");
                    i.line("@config = config");
                },
            );

            for method in HttpMethod::iter() {
                c.blank();
                emit_verb(c, method);
            }

            c.blank();
            c.line("private");
            c.blank();
            emit_make_request(c);
            c.blank();
            emit_connection(c, auth);
            c.blank();
            emit_handle_response(c, module);

            if auth == AuthType::Oauth {
                c.blank();
                emit_oauth_helpers(c, module, &ctx.lower_name);
            }
        });
    });

    src.finish()
}

/// Keyword arguments a verb method accepts besides `headers:`.
pub(crate) fn verb_keywords(method: HttpMethod) -> &'static [&'static str] {
    if method.has_body() {
        &["params", "body"]
    } else {
        &["params"]
    }
}

fn emit_verb(src: &mut SourceBuilder, method: HttpMethod) {
    let keywords = verb_keywords(method);
    let declared: Vec<String> = keywords.iter().map(|k| format!("{}: {{}}", k)).collect();
    let forwarded: Vec<String> = keywords.iter().map(|k| format!("{k}: {k}")).collect();

    src.block(
        format!("def {}({}, headers: {{}})", method, declared.join(", ")),
        |b| {
            b.line(format!(
                "make_request(:{}, {}, headers: headers)",
                method,
                forwarded.join(", ")
            ));
        },
    );
}

fn emit_make_request(src: &mut SourceBuilder) {
    src.block(
        "def make_request(method, params: {}, body: nil, headers: {})",
        |b| {
            b.block("response = connection.public_send(method) do |req|", |r| {
                r.line("req.url @path");
                r.line("req.params.update(params) if params && !params.empty?");
                r.line("req.body = body.to_json if body && !body.empty?");
                r.line("req.headers.update(headers) if headers && !headers.empty?");
                r.line("req.options.timeout = @config.timeout");
            });
            b.blank();
            b.line("handle_response(response)");
        },
    );
}

fn emit_connection(src: &mut SourceBuilder, auth: AuthType) {
    src.block("def connection", |b| {
        b.block("@connection ||= Faraday.new(url: @config.base_url) do |conn|", |f| {
            f.line("conn.headers.update(@config.headers || {})");
            f.lines(request_fragment(auth));
            f.line("conn.response :json, content_type: /\\bjson$/");
            f.line("conn.adapter Faraday.default_adapter");
        });
    });
}

fn emit_handle_response(src: &mut SourceBuilder, module: &str) {
    src.block("def handle_response(response)", |b| {
        b.line("return response.body if response.status.between?(200, 299)");
        b.blank();
        b.line("body = response.body");
        b.block_with_clause(
            "message = if body.is_a?(Hash)",
            |h| {
                h.line("body[\"message\"] || body[\"error\"] || \"Error #{response.status}\"");
            },
            "else",
            |e| {
                e.line("\"Error #{response.status}\"");
            },
        );
        b.blank();
        b.line(format!(
            "raise {}::Error.new(message, body, response.status)",
            module
        ));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::context_for;
    use clientsmith_define::ApiConfig;

    fn render_for(auth: AuthType) -> String {
        let config = ApiConfig::new("shop-api").with_auth(auth);
        render(&context_for(&config))
    }

    #[test]
    fn every_verb_has_a_method() {
        let code = render_for(AuthType::None);

        assert!(code.contains("def get(params: {}, headers: {})"));
        assert!(code.contains("def delete(params: {}, headers: {})"));
        assert!(code.contains("def post(params: {}, body: {}, headers: {})"));
        assert!(code.contains("def put(params: {}, body: {}, headers: {})"));
        assert!(code.contains("def patch(params: {}, body: {}, headers: {})"));
        assert!(code.contains("make_request(:get, params: params, headers: headers)"));
        assert!(code.contains(
            "make_request(:patch, params: params, body: body, headers: headers)"
        ));
    }

    #[test]
    fn request_takes_explicit_config_with_module_default() {
        let code = render_for(AuthType::None);
        assert!(code.contains("def initialize(path, config = ShopApi.configuration)"));
    }

    #[test]
    fn errors_raise_module_error() {
        let code = render_for(AuthType::None);

        assert!(code.contains("raise ShopApi::Error.new(message, body, response.status)"));
        assert!(code.contains("body[\"message\"] || body[\"error\"] || \"Error #{response.status}\""));
    }

    #[test]
    fn message_if_else_is_well_formed() {
        let code = render_for(AuthType::None);

        assert!(code.contains(
            "      message = if body.is_a?(Hash)\n        body[\"message\"] || body[\"error\"] || \"Error #{response.status}\"\n      else\n        \"Error #{response.status}\"\n      end\n"
        ));
    }

    #[test]
    fn no_auth_attaches_nothing() {
        let code = render_for(AuthType::None);

        assert!(!code.contains("authorization"));
        assert!(!code.contains("api_key"));
        assert!(!code.contains("def access_token"));
    }

    #[test]
    fn basic_auth_fragment_inside_connection() {
        let code = render_for(AuthType::Basic);
        assert!(code.contains(
            "        conn.request :authorization, :basic, @config.username, @config.password if @config.username && @config.password\n"
        ));
    }

    #[test]
    fn api_key_header_is_read_from_config() {
        let code = render_for(AuthType::ApiKey);
        assert!(code.contains(
            "conn.headers[@config.api_key_header] = @config.api_key if @config.api_key"
        ));
    }

    #[test]
    fn default_headers_are_applied_before_auth() {
        let code = render_for(AuthType::ApiKey);

        let defaults = code.find("conn.headers.update(@config.headers").unwrap();
        let key = code.find("conn.headers[@config.api_key_header]").unwrap();
        assert!(defaults < key);
    }

    #[test]
    fn oauth_adds_token_helpers_and_uri() {
        let code = render_for(AuthType::Oauth);

        assert!(code.contains("require \"uri\""));
        assert!(code.contains("token = access_token"));
        assert!(code.contains("conn.request :authorization, \"Bearer\", token if token"));
        assert!(code.contains("def fetch_access_token"));
        assert!(code.contains("cache.read(\"shopapi_access_token\")"));
    }

    #[test]
    fn helpers_are_private() {
        let code = render_for(AuthType::Oauth);

        let private = code.find("    private\n").unwrap();
        assert!(code.find("def connection").unwrap() > private);
        assert!(code.find("def access_token").unwrap() > private);
    }
}
