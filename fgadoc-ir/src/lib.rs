//! Operation intermediate representation for the fgadoc snippet generator.
//!
//! This crate defines the eight authorization API operations a documentation
//! page can show a snippet for, and the validation that turns loosely typed
//! author input into an immutable [`OperationModel`].
//!
//! # Architecture
//!
//! ```text
//! content file → fgadoc-content (parsing) → *Input → OperationModel → codegen
//! ```
//!
//! Models are language-agnostic: they hold only the fields the author
//! supplied, so generators can omit everything else.

mod error;
mod input;
mod kind;
mod operation;
mod tuple;

pub use error::{InvalidOperationInput, Problem};
pub use input::{
    CheckInput, ExpandInput, FgaObjectInput, ListObjectsInput, ListUsersInput, OperationInput,
    ReadChangesInput, ReadInput, ReadTupleKeyInput, TupleKeyInput, UserTypeFilterInput,
    WriteAuthorizationModelInput, WriteInput,
};
pub use kind::OperationKind;
pub use operation::{
    Check, Expand, ListObjects, ListUsers, OperationModel, Read, ReadChanges, Write,
    WriteAuthorizationModel,
};
pub use tuple::{Context, FgaObject, ReadTupleKey, TupleKey, UserTypeFilter};

/// Upper bound the API accepts for `page_size`.
pub const MAX_PAGE_SIZE: u32 = 100;
