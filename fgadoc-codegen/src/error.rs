use fgadoc_ir::OperationKind;
use thiserror::Error;

/// Errors raised while resolving a language or generating a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The id is not in the registry the caller is using.
    #[error("unknown language '{id}'")]
    UnknownLanguage { id: String },

    /// The registry lists a language the backend matrix has no generator for.
    ///
    /// The registry and the backends ship together, so this is a programming
    /// error rather than a runtime condition.
    #[error("no {language} generator for the {operation} operation")]
    UnsupportedOperationForLanguage {
        operation: OperationKind,
        language: String,
    },
}

/// Errors raised while building a [`LanguageRegistry`](crate::LanguageRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a language registry needs at least one language")]
    Empty,

    #[error("duplicate language id '{0}'")]
    DuplicateId(String),
}
