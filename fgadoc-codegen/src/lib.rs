//! Shared code generation utilities for the fgadoc snippet generator.
//!
//! This crate provides language-agnostic abstractions used by the language
//! backends in `fgadoc-snippets`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Expr, Composite, etc.)
//! - [`language`] - Supported languages, formatting profiles and the registry
//! - [`literal`] - Rendering JSON-like values as language literals
//! - [`snippet`] - The per-language backend trait and its output

pub mod builder;
pub mod language;
pub mod literal;
pub mod snippet;

mod error;

pub use error::{CodegenError, RegistryError};
pub use language::{FormattingProfile, Language, LanguageDescriptor, LanguageRegistry};
pub use snippet::{Snippet, SnippetContext, SnippetLanguage};
