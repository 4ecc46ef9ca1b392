//! Line-oriented builder for Ruby source text.
//!
//! Templates describe structure (`module`, `class`, `def` blocks) and the
//! builder owns indentation, so nested output never depends on the
//! indentation of a surrounding string literal.

/// Spaces per indentation level in generated Ruby.
const INDENT: &str = "  ";

/// Accumulates Ruby source lines with structural indentation.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::codegen::SourceBuilder;
///
/// let mut src = SourceBuilder::new();
/// src.block("module Shop", |m| {
///     m.block("class Error < StandardError", |_| {});
/// });
///
/// assert_eq!(
///     src.finish(),
///     "module Shop\n  class Error < StandardError\n  end\nend\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct SourceBuilder {
    lines: Vec<String>,
    depth: usize,
}

impl SourceBuilder {
    /// Creates an empty builder at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder starting with the `frozen_string_literal` magic comment.
    pub fn ruby_file() -> Self {
        let mut builder = Self::new();
        builder.line("# frozen_string_literal: true");
        builder.blank();
        builder
    }

    /// Appends one line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", INDENT.repeat(self.depth), text));
        }
        self
    }

    /// Appends several lines; embedded newlines are split and each piece is
    /// indented.
    pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            for piece in line.as_ref().split('\n') {
                self.line(piece);
            }
        }
        self
    }

    /// Appends an empty line. Consecutive blanks collapse to one.
    pub fn blank(&mut self) -> &mut Self {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
        self
    }

    /// Emits `header`, the nested body one level deeper, then `end`.
    ///
    /// A multi-line header (a wrapped method signature) is split like
    /// [`lines`](Self::lines). A trailing blank line inside the body is
    /// dropped.
    pub fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.lines([header]);
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.trim_trailing_blank();
        self.line("end")
    }

    /// Like [`block`](Self::block), with a second clause (`else`,
    /// `rescue ...`) at header depth before `end`.
    pub fn block_with_clause(
        &mut self,
        header: impl AsRef<str>,
        body: impl FnOnce(&mut Self),
        clause: impl AsRef<str>,
        handler: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.line(header);
        self.depth += 1;
        body(self);
        self.trim_trailing_blank();
        self.depth -= 1;
        self.line(clause);
        self.depth += 1;
        handler(self);
        self.depth -= 1;
        self.trim_trailing_blank();
        self.line("end")
    }

    /// Returns the source with a single trailing newline.
    pub fn finish(mut self) -> String {
        self.trim_trailing_blank();
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn trim_trailing_blank(&mut self) {
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
    }
}
