//! Generates the entry file `lib/<stem>.rb`.
//!
//! Requires every other generated Ruby file and exposes the module-level
//! defaults: a lazily created configuration and cache, `configure`,
//! `client` and `reset!`.

use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;

/// Base files, in require order. `client` comes last since it references
/// resource classes only at call time.
pub const BASE_FILES: &[&str] = &[
    "version",
    "configuration",
    "error",
    "request",
    "object",
    "collection",
    "cache",
    "client",
];

pub fn render(ctx: &GenerationContext<'_>) -> String {
    let module = ctx.module_name.as_str();
    let mut src = SourceBuilder::ruby_file();

    for file in BASE_FILES {
        src.line(format!("require_relative \"{}/{}\"", ctx.file_stem, file));
    }
    src.blank();
    src.line("# Resources");
    for name in ctx.config.resources.keys() {
        src.line(format!(
            "require_relative \"{}/resources/{}\"",
            ctx.file_stem, name
        ));
    }
    src.blank();

    src.block(format!("module {}", module), |m| {
        m.block("class << self", |s| {
            s.line("attr_writer :configuration, :cache");
            s.blank();
            s.block("def configuration", |b| {
                b.line("@configuration ||= Configuration.new");
            });
            s.blank();
            s.block("def cache", |b| {
                b.line("@cache ||= MemoryCache.new");
            });
            s.blank();
            s.block("def configure", |b| {
                b.line("yield(configuration) if block_given?");
                b.line("self");
            });
            s.blank();
            s.block("def client(configuration = self.configuration)", |b| {
                b.line("Client.new(configuration)");
            });
            s.blank();
            s.block("def reset!", |b| {
                b.line("@configuration = Configuration.new");
                b.line("@cache = MemoryCache.new");
            });
        });
    });

    src.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{context_for, make_config_with_resources};
    use clientsmith_define::ApiConfig;

    #[test]
    fn requires_base_files_in_order() {
        let code = render(&context_for(&ApiConfig::new("shop-api")));

        let mut last = 0;
        for file in BASE_FILES {
            let pos = code
                .find(&format!("require_relative \"shop_api/{}\"", file))
                .unwrap_or_else(|| panic!("missing require for {}", file));
            assert!(pos >= last, "{} is out of order", file);
            last = pos;
        }
    }

    #[test]
    fn no_resources_means_no_resource_requires() {
        let code = render(&context_for(&ApiConfig::new("shop-api")));

        assert!(code.contains("# Resources\n"));
        assert!(!code.contains("/resources/"));
    }

    #[test]
    fn resource_requires_follow_declaration_order() {
        let config = make_config_with_resources(&["users", "posts"]);
        let code = render(&context_for(&config));

        let users = code.find("require_relative \"test_api/resources/users\"").unwrap();
        let posts = code.find("require_relative \"test_api/resources/posts\"").unwrap();
        assert!(users < posts);
    }

    #[test]
    fn module_singleton_api() {
        let code = render(&context_for(&ApiConfig::new("shop-api")));

        assert!(code.contains("module ShopApi\n  class << self\n"));
        assert!(code.contains("@configuration ||= Configuration.new"));
        assert!(code.contains("@cache ||= MemoryCache.new"));
        assert!(code.contains("def client(configuration = self.configuration)"));
        assert!(code.contains("def reset!"));
    }
}
