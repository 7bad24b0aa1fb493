//! Code generation building blocks.
//!
//! This module provides the core primitives for generating code:
//! - [`CodeBuilder`] - Line-oriented builder with indentation and comments
//! - [`Expr`] - Layout tree for expressions that may span several lines
//! - [`Composite`] - Brace/paren delimited entries (object, struct, dict, list)
//! - [`Chain`] - Fluent method chains
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod expr;
mod indent;

pub use code_builder::CodeBuilder;
pub use expr::{Chain, Composite, Entry, Expr};
pub use indent::Indent;
