//! Supported target languages.
//!
//! - [`Language`] - The closed set of languages a backend exists for
//! - [`LanguageDescriptor`] - Stable id, display label and formatting profile
//! - [`FormattingProfile`] - Indentation, quote style, comment syntax
//! - [`LanguageRegistry`] - Ordered, immutable set of descriptors

mod registry;

use std::fmt;

use fgadoc_core::QuoteStyle;

pub use registry::LanguageRegistry;

use crate::builder::Indent;

/// Languages with a snippet backend.
///
/// Ids are persisted in readers' browsers, so a published id is never
/// reused for a different language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Go,
    DotNet,
    Python,
    Java,
    Cli,
    Curl,
}

impl Language {
    /// Every language, in presentation order.
    pub const ALL: [Language; 7] = [
        Language::JavaScript,
        Language::Go,
        Language::DotNet,
        Language::Python,
        Language::Java,
        Language::Cli,
        Language::Curl,
    ];

    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Go => "go",
            Language::DotNet => "dotnet",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cli => "cli",
            Language::Curl => "curl",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|language| language.id() == id)
    }

    /// The built-in descriptor for this language.
    pub fn descriptor(&self) -> LanguageDescriptor {
        let (label, profile) = match self {
            Language::JavaScript => (
                "JavaScript",
                FormattingProfile::new(Indent::TWO, QuoteStyle::Double, "//", "javascript", "js"),
            ),
            Language::Go => (
                "Go",
                FormattingProfile::new(Indent::GO, QuoteStyle::Double, "//", "go", "go"),
            ),
            Language::DotNet => (
                ".NET",
                FormattingProfile::new(Indent::FOUR, QuoteStyle::Double, "//", "csharp", "cs"),
            ),
            Language::Python => (
                "Python",
                FormattingProfile::new(Indent::FOUR, QuoteStyle::Double, "#", "python", "py"),
            ),
            Language::Java => (
                "Java",
                FormattingProfile::new(Indent::FOUR, QuoteStyle::Double, "//", "java", "java"),
            ),
            Language::Cli => (
                "CLI",
                FormattingProfile::new(Indent::TWO, QuoteStyle::Single, "#", "shell", "sh"),
            ),
            Language::Curl => (
                "curl",
                FormattingProfile::new(Indent::TWO, QuoteStyle::Single, "#", "bash", "sh"),
            ),
        };
        LanguageDescriptor {
            id: self.id(),
            label,
            profile,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// How generated code in a language is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingProfile {
    /// One indentation level.
    pub indent: Indent,
    /// Preferred string delimiter, where the language offers a choice.
    pub quote: QuoteStyle,
    /// Line comment prefix.
    pub comment: &'static str,
    /// Grammar name handed to the syntax highlighter.
    pub highlight: &'static str,
    /// File extension for baked snippets (without the dot).
    pub extension: &'static str,
}

impl FormattingProfile {
    pub const fn new(
        indent: Indent,
        quote: QuoteStyle,
        comment: &'static str,
        highlight: &'static str,
        extension: &'static str,
    ) -> Self {
        Self {
            indent,
            quote,
            comment,
            highlight,
            extension,
        }
    }
}

/// A language as presented to readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// Stable key, used for persistence and lookup.
    pub id: &'static str,
    /// Tab label.
    pub label: &'static str,
    pub profile: FormattingProfile,
}
