//! Generates `lib/<stem>/error.rb`.

use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;

/// Renders the error class raised for non-2xx responses.
///
/// The error carries the parsed response `body` and HTTP `status` alongside
/// the message so callers can inspect API-specific error payloads.
pub fn render(ctx: &GenerationContext<'_>) -> String {
    let mut src = SourceBuilder::ruby_file();

    src.block(format!("module {}", ctx.module_name), |m| {
        m.block("class Error < StandardError", |c| {
            c.line("attr_reader :body, :status");
            c.blank();
            c.block("def initialize(message = nil, body = nil, status = nil)", |i| {
                i.line("@body = body");
                i.line("@status = status");
                i.line("super(message)");
            });
        });
    });

    src.finish()
}
