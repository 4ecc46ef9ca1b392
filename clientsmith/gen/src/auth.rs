//! Authentication clause synthesis.
//!
//! Each [`AuthType`] contributes fragments to several generated files: the
//! configuration attributes and their defaults, the line that attaches
//! credentials to the Faraday connection, the OAuth token helpers, and the
//! snippets shown in documentation and the generated test suite. Keeping them
//! together means a new auth mode touches exactly one match per concern.
//!
//! | Mode | Attributes | Attached as |
//! |------|------------|-------------|
//! | `none` | none | nothing |
//! | `basic` | `username`, `password` | `Authorization: Basic ...` |
//! | `api_key` | `api_key`, `api_key_header` | `<api_key_header>: <api_key>` |
//! | `oauth` | `client_id`, `client_secret`, `token_url`, `access_token` | `Authorization: Bearer ...` |

use clientsmith_define::{ApiConfig, AuthType};

use crate::codegen::SourceBuilder;
use crate::response::ruby_string;

/// Attribute names the generated `Configuration` exposes for `auth`.
pub fn config_attributes(auth: AuthType) -> &'static [&'static str] {
    match auth {
        AuthType::None => &[],
        AuthType::Basic => &["username", "password"],
        AuthType::ApiKey => &["api_key", "api_key_header"],
        AuthType::Oauth => &["client_id", "client_secret", "token_url", "access_token"],
    }
}

/// Instance variable assignments for the generated `Configuration#initialize`.
///
/// ## Examples
///
/// ```
/// use clientsmith_define::{ApiConfig, AuthType};
/// use clientsmith_gen::auth::config_initializers;
///
/// let config = ApiConfig::new("shop").with_auth(AuthType::ApiKey);
/// assert_eq!(
///     config_initializers(&config),
///     vec!["@api_key = nil", "@api_key_header = \"X-Api-Key\""]
/// );
/// ```
pub fn config_initializers(config: &ApiConfig) -> Vec<String> {
    match config.auth_type {
        AuthType::None => Vec::new(),
        AuthType::Basic => vec!["@username = nil".to_string(), "@password = nil".to_string()],
        AuthType::ApiKey => vec![
            "@api_key = nil".to_string(),
            format!("@api_key_header = {}", ruby_string(config.api_key_header())),
        ],
        AuthType::Oauth => vec![
            "@client_id = nil".to_string(),
            "@client_secret = nil".to_string(),
            format!("@token_url = {}", ruby_string(&config.token_url())),
            "@access_token = nil".to_string(),
        ],
    }
}

/// Lines placed inside the `Faraday.new` block to attach credentials.
pub fn request_fragment(auth: AuthType) -> &'static [&'static str] {
    match auth {
        AuthType::None => &[],
        AuthType::Basic => &[
            "conn.request :authorization, :basic, @config.username, @config.password if @config.username && @config.password",
        ],
        AuthType::ApiKey => &["conn.headers[@config.api_key_header] = @config.api_key if @config.api_key"],
        AuthType::Oauth => &[
            "token = access_token",
            "conn.request :authorization, \"Bearer\", token if token",
        ],
    }
}

/// Extra `require` lines the generated request file needs for `auth`.
pub fn request_requires(auth: AuthType) -> &'static [&'static str] {
    match auth {
        AuthType::Oauth => &["uri"],
        _ => &[],
    }
}

/// Emits the private OAuth helpers into the generated `Request` class.
///
/// `access_token` prefers an explicitly configured token, then a cached one,
/// and only then performs a client-credentials exchange. Without client
/// credentials it returns `nil` and the request goes out unauthenticated.
pub fn emit_oauth_helpers(src: &mut SourceBuilder, module: &str, lower: &str) {
    let cache_key = ruby_string(&format!("{}_access_token", lower));

    src.block("def access_token", |m| {
        m.line("return @config.access_token if @config.access_token");
        m.line("return nil unless @config.client_id && @config.client_secret");
        m.blank();
        m.line(format!("cached = cache.read({})", cache_key));
        m.line("return cached if cached");
        m.blank();
        m.line("token = fetch_access_token");
        m.line(format!("cache.write({}, token)", cache_key));
        m.line("token");
    });
    src.blank();

    src.block("def fetch_access_token", |m| {
        m.block("response = Faraday.post(@config.token_url) do |req|", |b| {
            b.line("req.headers[\"Content-Type\"] = \"application/x-www-form-urlencoded\"");
            b.line("req.headers[\"Accept\"] = \"application/json\"");
            b.lines([
                "req.body = URI.encode_www_form(",
                "  grant_type: \"client_credentials\",",
                "  client_id: @config.client_id,",
                "  client_secret: @config.client_secret",
                ")",
            ]);
        });
        m.blank();
        m.line("body = parse_token_body(response.body)");
        m.line("token = body[\"access_token\"] if body.is_a?(Hash)");
        m.line("return token if response.status.between?(200, 299) && token");
        m.blank();
        m.line(format!(
            "raise {}::Error.new(\"Unable to obtain access token\", body, response.status)",
            module
        ));
    });
    src.blank();

    src.block_with_clause(
        "def parse_token_body(raw)",
        |m| {
            m.line("return raw unless raw.is_a?(String) && !raw.empty?");
            m.blank();
            m.line("JSON.parse(raw)");
        },
        "rescue JSON::ParserError",
        |r| {
            r.line("raw");
        },
    );
    src.blank();

    src.block("def cache", |m| {
        m.line(format!("@config.cache || {}.cache", module));
    });
}

/// Lines shown inside `Mod.configure do |config| ... end` in the README.
pub fn readme_lines(config: &ApiConfig) -> Vec<String> {
    match config.auth_type {
        AuthType::None => vec!["# No authentication required".to_string()],
        AuthType::Basic => vec![
            "config.username = \"your_username\"".to_string(),
            "config.password = \"your_password\"".to_string(),
        ],
        AuthType::ApiKey => vec![
            "config.api_key = \"your_api_key\"".to_string(),
            format!("config.api_key_header = {}", ruby_string(config.api_key_header())),
        ],
        AuthType::Oauth => vec![
            "config.client_id = \"your_client_id\"".to_string(),
            "config.client_secret = \"your_client_secret\"".to_string(),
            "# Or skip the token request with a pre-issued token:".to_string(),
            "# config.access_token = \"your_access_token\"".to_string(),
        ],
    }
}

/// Markdown body of the "Authentication" section in `docs/api.md`.
pub fn docs_section(config: &ApiConfig, module: &str) -> Vec<String> {
    let (intro, settings): (String, Vec<&str>) = match config.auth_type {
        AuthType::None => return vec!["This API does not require authentication.".to_string()],
        AuthType::Basic => (
            "This API uses HTTP Basic Authentication.".to_string(),
            vec![
                "config.username = \"YOUR_USERNAME\"",
                "config.password = \"YOUR_PASSWORD\"",
            ],
        ),
        AuthType::ApiKey => (
            format!(
                "This API uses API Key authentication. The key should be provided in the `{}` header.",
                config.api_key_header()
            ),
            vec!["config.api_key = \"YOUR_API_KEY\""],
        ),
        AuthType::Oauth => (
            format!(
                "This API uses OAuth 2.0 (client credentials). Access tokens are requested from `{}` and cached in `{}.cache`.",
                config.token_url(),
                module
            ),
            vec![
                "config.client_id = \"YOUR_CLIENT_ID\"",
                "config.client_secret = \"YOUR_CLIENT_SECRET\"",
            ],
        ),
    };

    let mut lines = vec![intro, String::new(), "```ruby".to_string()];
    lines.push(format!("{}.configure do |config|", module));
    lines.extend(settings.iter().map(|s| format!("  {}", s)));
    lines.push("end".to_string());
    lines.push("```".to_string());
    lines
}

/// Assignments used by the generated configuration test.
pub fn test_config_lines(config: &ApiConfig) -> Vec<String> {
    match config.auth_type {
        AuthType::None => Vec::new(),
        AuthType::Basic => vec![
            "config.username = \"test_username\"".to_string(),
            "config.password = \"test_password\"".to_string(),
        ],
        AuthType::ApiKey => vec![
            "config.api_key = \"test_api_key\"".to_string(),
            format!("config.api_key_header = {}", ruby_string(config.api_key_header())),
        ],
        AuthType::Oauth => vec![
            "config.client_id = \"test_client_id\"".to_string(),
            "config.client_secret = \"test_client_secret\"".to_string(),
            format!("config.token_url = {}", ruby_string(&config.token_url())),
        ],
    }
}

/// Assertions matching [`test_config_lines`].
pub fn test_assertions(config: &ApiConfig, module: &str) -> Vec<String> {
    let pairs: &[(&str, &str)] = match config.auth_type {
        AuthType::None => &[],
        AuthType::Basic => &[("test_username", "username"), ("test_password", "password")],
        AuthType::ApiKey => &[("test_api_key", "api_key")],
        AuthType::Oauth => &[
            ("test_client_id", "client_id"),
            ("test_client_secret", "client_secret"),
        ],
    };

    pairs
        .iter()
        .map(|(value, attr)| {
            format!(
                "assert_equal \"{}\", {}.configuration.{}",
                value, module, attr
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn config(auth: AuthType) -> ApiConfig {
        ApiConfig::new("shop-api").with_auth(auth)
    }

    #[test]
    fn attributes_and_initializers_line_up() {
        for auth in AuthType::iter() {
            let config = config(auth);
            let attrs = config_attributes(auth);
            let inits = config_initializers(&config);

            assert_eq!(attrs.len(), inits.len(), "mismatch for {}", auth);
            for (attr, init) in attrs.iter().zip(&inits) {
                assert!(init.starts_with(&format!("@{} = ", attr)));
            }
        }
    }

    #[test]
    fn none_contributes_nothing() {
        let config = config(AuthType::None);

        assert!(config_attributes(AuthType::None).is_empty());
        assert!(request_fragment(AuthType::None).is_empty());
        assert!(test_config_lines(&config).is_empty());
        assert!(test_assertions(&config, "ShopApi").is_empty());
    }

    #[test]
    fn api_key_header_defaults_and_is_referenced_dynamically() {
        let config = config(AuthType::ApiKey);

        let initializers = config_initializers(&config);
        assert!(initializers.contains(&"@api_key_header = \"X-Api-Key\"".to_string()));

        let fragment = request_fragment(AuthType::ApiKey);
        assert!(fragment[0].contains("conn.headers[@config.api_key_header]"));
        assert!(docs_section(&config, "ShopApi")[0].contains("`X-Api-Key`"));
    }

    #[test]
    fn api_key_header_is_configurable() {
        let mut config = config(AuthType::ApiKey);
        config.api_key_header = Some("X-Custom-Key".to_string());

        assert_eq!(
            config_initializers(&config)[1],
            "@api_key_header = \"X-Custom-Key\""
        );
    }

    #[test]
    fn oauth_token_url_defaults_from_base_url() {
        let config = config(AuthType::Oauth).with_base_url("https://shop.example.com/");

        assert!(
            config_initializers(&config)
                .contains(&"@token_url = \"https://shop.example.com/oauth/token\"".to_string())
        );
    }

    #[test]
    fn basic_uses_faraday_authorization_middleware() {
        assert_eq!(
            request_fragment(AuthType::Basic),
            &["conn.request :authorization, :basic, @config.username, @config.password if @config.username && @config.password"]
        );
    }

    #[test]
    fn only_oauth_needs_uri() {
        assert_eq!(request_requires(AuthType::Oauth), &["uri"]);
        assert!(request_requires(AuthType::Basic).is_empty());
    }

    #[test]
    fn oauth_helpers_use_module_cache_key() {
        let mut src = SourceBuilder::new();
        emit_oauth_helpers(&mut src, "ShopApi", "shopapi");
        let code = src.finish();

        assert!(code.contains("def access_token"));
        assert!(code.contains("cache.read(\"shopapi_access_token\")"));
        assert!(code.contains("cache.write(\"shopapi_access_token\", token)"));
        assert!(code.contains("grant_type: \"client_credentials\""));
        assert!(code.contains("raise ShopApi::Error.new("));
        assert!(code.contains("@config.cache || ShopApi.cache"));
    }

    #[test]
    fn parse_token_body_rescues_at_method_level() {
        let mut src = SourceBuilder::new();
        emit_oauth_helpers(&mut src, "ShopApi", "shopapi");
        let code = src.finish();

        assert!(code.contains(
            "def parse_token_body(raw)\n  return raw unless raw.is_a?(String) && !raw.empty?\n\n  JSON.parse(raw)\nrescue JSON::ParserError\n  raw\nend\n"
        ));
    }

    #[test]
    fn docs_without_auth() {
        assert_eq!(
            docs_section(&config(AuthType::None), "ShopApi"),
            vec!["This API does not require authentication."]
        );
    }

    #[test]
    fn docs_show_configure_block() {
        let lines = docs_section(&config(AuthType::Basic), "ShopApi");

        assert!(lines.contains(&"ShopApi.configure do |config|".to_string()));
        assert!(lines.contains(&"  config.username = \"YOUR_USERNAME\"".to_string()));
    }
}
