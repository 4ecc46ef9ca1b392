//! Generates `lib/<stem>/configuration.rb`.

use crate::auth::{config_attributes, config_initializers};
use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;
use crate::response::ruby_string;

/// Renders the configuration class.
///
/// Auth attributes are appended after the common ones; `cache` defaults to
/// `nil`, meaning "use the module-level cache".
pub fn render(ctx: &GenerationContext<'_>) -> String {
    let auth = ctx.config.auth_type;
    let mut src = SourceBuilder::ruby_file();

    src.block(format!("module {}", ctx.module_name), |m| {
        m.block("class Configuration", |c| {
            c.line("attr_accessor :base_url, :timeout, :headers, :cache");
            if auth.is_authenticated() {
                let symbols: Vec<String> = config_attributes(auth)
                    .iter()
                    .map(|a| format!(":{}", a))
                    .collect();
                c.line(format!("attr_accessor {}", symbols.join(", ")));
            }
            c.blank();

            c.block("def initialize", |i| {
                i.line(format!("@base_url = {}", ruby_string(ctx.config.base_url())));
                i.line("@timeout = 30");
                i.lines([
                    "@headers = {",
                    "  \"Content-Type\" => \"application/json\",",
                    "  \"Accept\" => \"application/json\"",
                    "}",
                ]);
                i.line("@cache = nil");
                i.lines(config_initializers(ctx.config));
            });
        });
    });

    src.finish()
}
