use std::path::PathBuf;

use fgadoc_ir::InvalidOperationInput;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::span;

/// Result type for content operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw file content and its name so every error can point back
/// into the file it came from.
#[derive(Debug, Clone, Default)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error, locating it by line and column.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = span::offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn invalid_name_error(&self, name: &str, reason: impl Into<String>) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span: span::find_name_spans(&self.src, name).first().copied(),
            name: name.to_string(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate name error pointing at the first two definitions.
    pub fn duplicate_name_error(&self, name: &str) -> Box<Error> {
        let spans = span::find_name_spans(&self.src, name);
        Box::new(Error::DuplicateName {
            src: self.named_source(),
            first_span: spans.first().copied(),
            second_span: spans.get(1).copied(),
            name: name.to_string(),
        })
    }

    pub fn invalid_operation_error(&self, name: &str, source: InvalidOperationInput) -> Box<Error> {
        Box::new(Error::InvalidOperation {
            src: self.named_source(),
            span: span::find_name_spans(&self.src, name).first().copied(),
            name: name.to_string(),
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the content file path passed to fgadoc"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file")]
    #[diagnostic(code(fgadoc::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse content file")]
    #[diagnostic(code(fgadoc::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid snippet name '{name}'")]
    #[diagnostic(
        code(fgadoc::invalid_name),
        help("{reason}. Use letters, numbers, '-' and '_', e.g. 'check-anne'.")
    )]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("duplicate snippet name '{name}'")]
    #[diagnostic(
        code(fgadoc::duplicate_name),
        help("snippet names become file names when baking, rename one of them")
    )]
    DuplicateName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("snippet '{name}' is invalid")]
    #[diagnostic(code(fgadoc::invalid_operation))]
    InvalidOperation {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this snippet")]
        span: Option<SourceSpan>,
        name: String,
        #[source]
        source: InvalidOperationInput,
    },
}

impl Error {
    /// The operation input problem behind an [`Error::InvalidOperation`].
    pub fn invalid_input(&self) -> Option<&InvalidOperationInput> {
        match self {
            Error::InvalidOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}
