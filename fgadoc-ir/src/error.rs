use std::fmt;

use thiserror::Error;

use crate::OperationKind;

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// The field is absent or blank.
    Missing,
    /// The field is present but does not have the expected shape.
    Malformed(String),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Missing => f.write_str("is required"),
            Problem::Malformed(reason) => write!(f, "is malformed: {}", reason),
        }
    }
}

/// A required field is missing, empty or malformed.
///
/// Raised while turning author input into an [`OperationModel`](crate::OperationModel),
/// so content problems surface at build time rather than on a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {operation} input: `{field}` {problem}")]
pub struct InvalidOperationInput {
    /// Operation being constructed.
    pub operation: OperationKind,
    /// Dotted path to the field (e.g. `contextual_tuples[1].object`).
    pub field: String,
    /// What is wrong with it.
    pub problem: Problem,
}

impl InvalidOperationInput {
    pub(crate) fn missing(operation: OperationKind, field: impl Into<String>) -> Self {
        Self {
            operation,
            field: field.into(),
            problem: Problem::Missing,
        }
    }

    pub(crate) fn malformed(
        operation: OperationKind,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            field: field.into(),
            problem: Problem::Malformed(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = InvalidOperationInput::missing(OperationKind::Check, "tuple_key.object");
        assert_eq!(
            err.to_string(),
            "invalid check input: `tuple_key.object` is required"
        );

        let err = InvalidOperationInput::malformed(
            OperationKind::ListUsers,
            "relation",
            "must not contain ':'",
        );
        assert_eq!(
            err.to_string(),
            "invalid list_users input: `relation` is malformed: must not contain ':'"
        );
    }
}
