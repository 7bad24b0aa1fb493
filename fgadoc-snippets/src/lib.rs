//! Snippet backends for every supported language.
//!
//! Each module implements [`SnippetLanguage`](fgadoc_codegen::SnippetLanguage)
//! for one SDK. [`SnippetGenerator`] resolves a language id through a
//! [`LanguageRegistry`](fgadoc_codegen::LanguageRegistry) and dispatches to
//! the matching backend.
//!
//! ```
//! use fgadoc_codegen::LanguageRegistry;
//! use fgadoc_ir::{CheckInput, OperationModel, TupleKeyInput};
//! use fgadoc_snippets::SnippetGenerator;
//!
//! let model = OperationModel::check(CheckInput {
//!     store_id: "01HVMMBCMGZNT3SED4Z17ECXCA".into(),
//!     tuple_key: TupleKeyInput::new("user:anne", "viewer", "document:roadmap"),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let generator = SnippetGenerator::new(LanguageRegistry::builtin());
//! let snippet = generator.generate(&model, "python").unwrap();
//! assert!(snippet.code.contains("await fga_client.check(body)"));
//! ```

mod common;
mod generator;

pub mod cli;
pub mod curl;
pub mod dotnet;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;

pub use cli::Cli;
pub use curl::Curl;
pub use dotnet::DotNet;
pub use generator::{SnippetGenerator, backend};
pub use go::Go;
pub use java::Java;
pub use javascript::JavaScript;
pub use python::Python;
