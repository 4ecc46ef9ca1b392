//! Generates `lib/<stem>/object.rb`, the generic response wrapper.

use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;

/// Renders the `Object` wrapper.
///
/// Nested hashes become nested `OpenStruct`s and arrays are mapped element
/// by element, so `user.address.city` works on a decoded JSON body. A
/// non-hash argument produces an empty object.
pub fn render(ctx: &GenerationContext<'_>) -> String {
    let mut src = SourceBuilder::ruby_file();

    src.line("require \"ostruct\"");
    src.blank();

    src.block(format!("module {}", ctx.module_name), |m| {
        m.block("class Object < OpenStruct", |c| {
            c.block("def initialize(attributes = {})", |i| {
                i.line("attributes = {} unless attributes.is_a?(Hash)");
                i.line("super(attributes.to_h { |key, value| [key, wrap(value)] })");
            });
            c.blank();
            c.line("private");
            c.blank();
            c.block("def wrap(value)", |w| {
                w.line("case value");
                w.line("when Hash then OpenStruct.new(value.to_h { |k, v| [k, wrap(v)] })");
                w.line("when Array then value.map { |item| wrap(item) }");
                w.line("else value");
                w.line("end");
            });
        });
    });

    src.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::context_for;
    use clientsmith_define::ApiConfig;

    #[test]
    fn object_wraps_nested_values() {
        let code = render(&context_for(&ApiConfig::new("shop-api")));

        assert!(code.contains("require \"ostruct\""));
        assert!(code.contains("class Object < OpenStruct"));
        assert!(code.contains("attributes = {} unless attributes.is_a?(Hash)"));
        assert!(code.contains("when Array then value.map { |item| wrap(item) }"));
    }
}
