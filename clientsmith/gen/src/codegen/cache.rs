//! Generates `lib/<stem>/cache.rb`.
//!
//! Any object responding to `read`, `write`, `delete` and `clear` can serve
//! as the client cache. Two implementations are generated: an in-process
//! `MemoryCache` (the default) and a `YAML::Store`-backed `FileCache`.

use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;
use crate::response::ruby_string;

/// Renders both cache implementations.
pub fn render(ctx: &GenerationContext<'_>) -> String {
    let mut src = SourceBuilder::ruby_file();

    src.block(format!("module {}", ctx.module_name), |m| {
        m.line("# In-process cache; safe to share between threads.");
        m.block("class MemoryCache", |c| {
            c.block("def initialize", |i| {
                i.line("@store = {}");
                i.line("@mutex = Mutex.new");
            });
            for (signature, body) in [
                ("def read(key)", "@mutex.synchronize { @store[key] }"),
                ("def write(key, value)", "@mutex.synchronize { @store[key] = value }"),
                ("def delete(key)", "@mutex.synchronize { @store.delete(key) }"),
                ("def clear", "@mutex.synchronize { @store.clear }"),
            ] {
                c.blank();
                c.block(signature, |b| {
                    b.line(body);
                });
            }
        });
        m.blank();

        m.line("# Cache persisted to a YAML file.");
        m.block("class FileCache", |c| {
            c.block(
                format!(
                    "def initialize(path = {})",
                    ruby_string(&format!("{}_cache.yaml", ctx.lower_name))
                ),
                |i| {
                    i.line("require \"yaml/store\"");
                    i.line("@store = YAML::Store.new(path)");
                },
            );
            for (signature, body) in [
                ("def read(key)", "@store.transaction(true) { @store[key] }"),
                ("def write(key, value)", "@store.transaction { @store[key] = value }"),
                ("def delete(key)", "@store.transaction { @store.delete(key) }"),
                (
                    "def clear",
                    "@store.transaction { @store.roots.each { |key| @store.delete(key) } }",
                ),
            ] {
                c.blank();
                c.block(signature, |b| {
                    b.line(body);
                });
            }
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
    fn both_caches_implement_the_four_operations() {
        let code = render(&context_for(&ApiConfig::new("shop-api")));

        assert!(code.contains("class MemoryCache"));
        assert!(code.contains("class FileCache"));
        for op in ["def read(key)", "def write(key, value)", "def delete(key)", "def clear"] {
            assert_eq!(code.matches(op).count(), 2, "{} should appear twice", op);
        }
    }

    #[test]
    fn memory_cache_is_mutex_guarded() {
        let code = render(&context_for(&ApiConfig::new("shop-api")));

        assert!(code.contains("@mutex = Mutex.new"));
        assert!(code.contains("@mutex.synchronize { @store[key] = value }"));
    }

    #[test]
    fn file_cache_path_uses_lowercase_module_name() {
        let code = render(&context_for(&ApiConfig::new("shop-api")));
        assert!(code.contains("def initialize(path = \"shopapi_cache.yaml\")"));
    }
}
