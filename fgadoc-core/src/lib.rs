//! Core utilities and types for the fgadoc snippet generator.
//!
//! This crate provides the low-level text helpers shared by the language
//! backends (string literal quoting, shell quoting, case conversion) and the
//! file writer used when baking snippets to disk.

mod file;
mod quote;
mod utils;

// File operations
pub use file::File;
// Literal quoting
pub use quote::{QuoteStyle, percent_encode, quote, shell_quote};
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
