//! Code builder utility for generating properly indented code.

use super::{Expr, Indent};
use crate::FormattingProfile;

/// Builder for indented, line-oriented source text.
///
/// # Example
///
/// ```
/// use fgadoc_codegen::builder::{CodeBuilder, Composite, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::TWO, "//");
/// builder
///     .push_comment("Requires the FGA_API_URL environment variable")
///     .push_expr(
///         "const body = ",
///         &Composite::new("{", "}").field("relation", "\"viewer\"").into(),
///         ";",
///     );
///
/// assert_eq!(
///     builder.build(),
///     "// Requires the FGA_API_URL environment variable\nconst body = {\n  relation: \"viewer\",\n};\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    comment: &'static str,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the given indentation and line comment prefix.
    pub fn new(indent: Indent, comment: &'static str) -> Self {
        Self {
            indent_level: 0,
            indent,
            comment,
            buffer: String::new(),
        }
    }

    /// Create a CodeBuilder following a language's formatting profile.
    pub fn for_profile(profile: &FormattingProfile) -> Self {
        Self::new(profile.indent, profile.comment)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self.push_blank();
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a line comment using the profile's comment syntax.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        let line = format!("{} {}", self.comment, text);
        self.push_line(&line)
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Lay out an expression at the current indentation, gluing `prefix`
    /// onto its first line and `suffix` onto its last.
    pub fn push_expr(&mut self, prefix: &str, expr: &Expr, suffix: &str) -> &mut Self {
        let lines = Expr::wrap(prefix, expr.clone(), suffix).lines(self.indent);
        for line in lines {
            self.push_line(&line);
        }
        self
    }

    /// Add pre-formatted lines verbatim, without indentation.
    ///
    /// Used for the body of raw string literals, whose content must not shift.
    pub fn push_verbatim(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.buffer.push_str(line);
            self.buffer.push('\n');
        }
        self
    }

    /// Add a block: `header`, an indented body, then `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line(close)
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
