//! Generates `lib/<stem>/version.rb`.

use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;

/// Version written into freshly generated clients.
pub const INITIAL_VERSION: &str = "0.1.0";

pub fn render(ctx: &GenerationContext<'_>) -> String {
    let mut src = SourceBuilder::ruby_file();

    src.block(format!("module {}", ctx.module_name), |m| {
        m.line(format!("VERSION = \"{}\"", INITIAL_VERSION));
    });

    src.finish()
}
