//! Generates `lib/<stem>/collection.rb`, the paginated list wrapper.

use crate::builder::GenerationContext;
use crate::codegen::SourceBuilder;

/// Key holding the item list when none is configured.
pub const DEFAULT_DATA_KEY: &str = "data";

/// Key holding the next-page reference when none is configured.
pub const DEFAULT_NEXT_KEY: &str = "next_href";

/// Renders the `Collection` class.
///
/// `from_response` reads each key in both symbol and string form and treats
/// a bare array body as the item list. The keyword arguments correspond to
/// the keys a resource method passes when a response format is configured.
pub fn render(ctx: &GenerationContext<'_>) -> String {
    let mut src = SourceBuilder::ruby_file();

    src.block(format!("module {}", ctx.module_name), |m| {
        m.block("class Collection", |c| {
            c.line("include Enumerable");
            c.blank();
            c.line("attr_reader :data, :next_href, :total_count, :limit");
            c.blank();

            let signature = format!(
                "def self.from_response(response_body, type:, data_key: \"{}\", next_key: \"{}\",\n{}total_key: nil, limit_key: nil)",
                DEFAULT_DATA_KEY,
                DEFAULT_NEXT_KEY,
                " ".repeat("def self.from_response(".len()),
            );
            c.block(signature, |f| {
                f.line("if response_body.is_a?(Array)");
                f.line("  return new(data: response_body.map { |attrs| type.new(attrs) }, next_href: nil)");
                f.line("end");
                f.blank();
                f.line("body = response_body.is_a?(Hash) ? response_body : {}");
                f.line("items = fetch(body, data_key) || []");
                f.blank();
                f.lines([
                    "new(",
                    "  data: items.map { |attrs| type.new(attrs) },",
                    "  next_href: fetch(body, next_key),",
                    "  total_count: total_key && fetch(body, total_key),",
                    "  limit: limit_key && fetch(body, limit_key)",
                    ")",
                ]);
            });
            c.blank();

            c.block("def self.fetch(body, key)", |f| {
                f.line("return nil if key.nil?");
                f.blank();
                f.line("body.key?(key.to_sym) ? body[key.to_sym] : body[key.to_s]");
            });
            c.line("private_class_method :fetch");
            c.blank();

            c.block(
                "def initialize(data:, next_href:, total_count: nil, limit: nil)",
                |i| {
                    i.line("@data = data");
                    i.line("@next_href = next_href");
                    i.line("@total_count = total_count");
                    i.line("@limit = limit");
                },
            );
            c.blank();

            c.block("def next_page?", |n| {
                n.line("!next_href.nil? && next_href != \"\"");
            });
            c.blank();

            c.block("def each(&block)", |e| {
                e.line("data.each(&block)");
            });
            c.blank();

            c.block("def size", |s| {
                s.line("data.size");
            });
        });
    });

    src.finish()
}
