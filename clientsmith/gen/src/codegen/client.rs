//! Generates `lib/<stem>/client.rb`.
//!
//! The client is the entry point users hold on to: it owns a configuration
//! and exposes one memoized accessor per resource.

use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;
use crate::naming::class_name_for_resource;

/// Renders the client class with one accessor per resource, in declaration order.
///
/// ## Examples
///
/// For resources `users` and `posts`:
///
/// ```text
/// module Blog
///   class Client
///     attr_reader :configuration
///
///     def initialize(configuration = Blog.configuration)
///       @configuration = configuration
///     end
///
///     def users
///       @users ||= Resources::Users.new(self)
///     end
///
///     def posts
///       @posts ||= Resources::Posts.new(self)
///     end
///   end
/// end
/// ```
pub fn render(ctx: &GenerationContext<'_>) -> String {
    let mut src = SourceBuilder::ruby_file();

    src.block(format!("module {}", ctx.module_name), |m| {
        m.block("class Client", |c| {
            c.line("attr_reader :configuration");
            c.blank();
            c.block(
                format!("def initialize(configuration = {}.configuration)", ctx.module_name),
                |i| {
                    i.line("@configuration = configuration");
                },
            );

            for name in ctx.config.resources.keys() {
                c.blank();
                c.block(format!("def {}", name), |r| {
                    r.line(format!(
                        "@{} ||= Resources::{}.new(self)",
                        name,
                        class_name_for_resource(name)
                    ));
                });
            }
        });
    });

    src.finish()
}
