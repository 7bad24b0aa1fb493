//! Documentation content files for the fgadoc snippet generator.
//!
//! A content file lists the snippets one documentation page shows, each a
//! named operation input:
//!
//! ```toml
//! title = "Checking access"
//!
//! [[snippet]]
//! name = "check-anne"
//! operation = "check"
//! store_id = "01HVMMBCMGZNT3SED4Z17ECXCA"
//! tuple_key = { user = "user:anne", relation = "reader", object = "document:roadmap" }
//! ```
//!
//! Files ending in `.json` are read as JSON with the same shape. Parsing
//! reports syntax errors, bad snippet names and duplicates with source spans;
//! [`Content::validate`] then turns every entry into an
//! [`OperationModel`](fgadoc_ir::OperationModel), collecting all problems
//! rather than stopping at the first.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod content;
mod error;
mod span;

pub use content::{Content, Format, SnippetEntry, ValidatedSnippet};
pub use error::{Error, Result, SourceContext};
