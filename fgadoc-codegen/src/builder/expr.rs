//! Layout tree for expressions that may span several lines.
//!
//! Request literals in every SDK language share a shape: a delimited list of
//! entries, each either `key <assign> value` or a bare item, nested to any
//! depth. An [`Expr`] is laid out into lines relative to column zero; the
//! [`CodeBuilder`](super::CodeBuilder) then indents them at the current level
//! and glues a prefix onto the first line and a suffix onto the last.
//!
//! ```
//! use fgadoc_codegen::builder::{Composite, Expr, Indent};
//!
//! let object = Composite::new("{", "}")
//!     .assign(": ")
//!     .field("user", Expr::inline("\"user:anne\""))
//!     .field("relation", Expr::inline("\"viewer\""));
//!
//! assert_eq!(
//!     Expr::from(object).lines(Indent::TWO),
//!     vec!["{", "  user: \"user:anne\",", "  relation: \"viewer\",", "}"],
//! );
//! ```

use super::Indent;

/// An expression to lay out.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A single-line expression.
    Inline(String),
    /// An expression with text glued before its first and after its last line.
    Wrap {
        prefix: String,
        inner: Box<Expr>,
        suffix: String,
    },
    /// Delimited entries.
    Composite(Composite),
    /// A fluent method chain.
    Chain(Chain),
}

impl Expr {
    pub fn inline(s: impl Into<String>) -> Self {
        Self::Inline(s.into())
    }

    pub fn wrap(prefix: impl Into<String>, inner: impl Into<Expr>, suffix: impl Into<String>) -> Self {
        Self::Wrap {
            prefix: prefix.into(),
            inner: Box::new(inner.into()),
            suffix: suffix.into(),
        }
    }

    /// Whether the expression lays out on one line.
    pub fn is_inline(&self, indent: Indent) -> bool {
        self.lines(indent).len() == 1
    }

    /// Lay out into lines relative to column zero.
    pub fn lines(&self, indent: Indent) -> Vec<String> {
        match self {
            Expr::Inline(s) => vec![s.clone()],
            Expr::Wrap {
                prefix,
                inner,
                suffix,
            } => glue(prefix, inner.lines(indent), suffix),
            Expr::Composite(composite) => composite.lines(indent),
            Expr::Chain(chain) => chain.lines(indent),
        }
    }
}

impl From<Composite> for Expr {
    fn from(value: Composite) -> Self {
        Self::Composite(value)
    }
}

impl From<Chain> for Expr {
    fn from(value: Chain) -> Self {
        Self::Chain(value)
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Inline(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Inline(value.to_string())
    }
}

/// An entry inside a [`Composite`].
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// `key <assign> value`
    Field { key: String, value: Expr },
    /// A bare item (list element, `Map.entry(...)`, `{ "k", v }`).
    Item(Expr),
}

/// Delimited entries: object literals, struct literals, keyword arguments, lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    open: String,
    close: String,
    assign: String,
    entries: Vec<Entry>,
    trailing_comma: bool,
    align: bool,
}

impl Composite {
    /// Create a composite with trailing commas and `: ` as field separator.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            assign: ": ".to_string(),
            entries: Vec::new(),
            trailing_comma: true,
            align: false,
        }
    }

    /// Separator between a field key and its value (e.g. `": "`, `" = "`, `"="`).
    pub fn assign(mut self, assign: impl Into<String>) -> Self {
        self.assign = assign.into();
        self
    }

    /// Whether the last entry is followed by a comma.
    pub fn trailing_comma(mut self, trailing_comma: bool) -> Self {
        self.trailing_comma = trailing_comma;
        self
    }

    /// Align single-line field values in a column, the way gofmt does.
    pub fn aligned(mut self) -> Self {
        self.align = true;
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.entries.push(Entry::Field {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Add a field only when a value is present.
    pub fn field_opt(self, key: impl Into<String>, value: Option<impl Into<Expr>>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub fn item(mut self, value: impl Into<Expr>) -> Self {
        self.entries.push(Entry::Item(value.into()));
        self
    }

    pub fn items<I, E>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        for item in items {
            self.entries.push(Entry::Item(item.into()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lines(&self, indent: Indent) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![format!("{}{}", self.open, self.close)];
        }

        let unit = indent.as_str();
        let separator = self.assign.trim_end();
        let spacing = &self.assign[separator.len()..];
        let laid_out: Vec<(Option<String>, Vec<String>)> = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Field { key, value } => {
                    (Some(format!("{}{}", key, separator)), value.lines(indent))
                }
                Entry::Item(value) => (None, value.lines(indent)),
            })
            .collect();
        let widths = self.column_widths(&laid_out);

        let mut lines = vec![self.open.clone()];
        let last = laid_out.len() - 1;
        for (i, (head, value)) in laid_out.into_iter().enumerate() {
            let prefix = match head {
                Some(head) => format!("{:<width$}{}", head, spacing, width = widths[i]),
                None => String::new(),
            };
            let suffix = if i < last || self.trailing_comma { "," } else { "" };
            for line in glue(&prefix, value, suffix) {
                lines.push(indent_line(unit, &line));
            }
        }
        lines.push(self.close.clone());
        lines
    }

    /// Width of each field head. With alignment on, consecutive single-line
    /// fields share the width of the longest head in their run.
    fn column_widths(&self, laid_out: &[(Option<String>, Vec<String>)]) -> Vec<usize> {
        let mut widths: Vec<usize> = laid_out
            .iter()
            .map(|(head, _)| head.as_ref().map_or(0, String::len))
            .collect();
        if !self.align {
            return widths;
        }

        let mut start = 0;
        while start < laid_out.len() {
            let mut end = start;
            while end < laid_out.len() && laid_out[end].0.is_some() && laid_out[end].1.len() == 1
            {
                end += 1;
            }
            if end == start {
                start += 1;
                continue;
            }
            let width = widths[start..end].iter().copied().max().unwrap_or(0);
            widths[start..end].iter_mut().for_each(|w| *w = width);
            start = end;
        }
        widths
    }
}

/// A fluent method chain, one call per line.
///
/// ```text
/// new ClientCheckRequest()
///     .user("user:anne")
///     .relation("viewer")
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    base: String,
    calls: Vec<(String, Expr)>,
}

impl Chain {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            calls: Vec::new(),
        }
    }

    pub fn call(mut self, method: impl Into<String>, arg: impl Into<Expr>) -> Self {
        self.calls.push((method.into(), arg.into()));
        self
    }

    pub fn call_opt(self, method: impl Into<String>, arg: Option<impl Into<Expr>>) -> Self {
        match arg {
            Some(a) => self.call(method, a),
            None => self,
        }
    }

    fn lines(&self, indent: Indent) -> Vec<String> {
        let unit = indent.as_str();
        let mut lines = vec![self.base.clone()];
        for (method, arg) in &self.calls {
            let call = glue(&format!(".{}(", method), arg.lines(indent), ")");
            lines.extend(call.iter().map(|line| indent_line(unit, line)));
        }
        lines
    }
}

fn glue(prefix: &str, mut lines: Vec<String>, suffix: &str) -> Vec<String> {
    if let Some(first) = lines.first_mut() {
        first.insert_str(0, prefix);
    }
    if let Some(last) = lines.last_mut() {
        last.push_str(suffix);
    }
    lines
}

fn indent_line(unit: &str, line: &str) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("{}{}", unit, line)
    }
}
