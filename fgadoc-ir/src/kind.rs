use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The closed set of operations a snippet can demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Check,
    Expand,
    ListObjects,
    ListUsers,
    ReadChanges,
    Read,
    Write,
    WriteAuthorizationModel,
}

impl OperationKind {
    /// Every kind, in documentation order.
    pub const ALL: [OperationKind; 8] = [
        OperationKind::Check,
        OperationKind::Expand,
        OperationKind::ListObjects,
        OperationKind::ListUsers,
        OperationKind::ReadChanges,
        OperationKind::Read,
        OperationKind::Write,
        OperationKind::WriteAuthorizationModel,
    ];

    /// Canonical snake_case name. Backends derive their method spelling from it.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Check => "check",
            OperationKind::Expand => "expand",
            OperationKind::ListObjects => "list_objects",
            OperationKind::ListUsers => "list_users",
            OperationKind::ReadChanges => "read_changes",
            OperationKind::Read => "read",
            OperationKind::Write => "write",
            OperationKind::WriteAuthorizationModel => "write_authorization_model",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}
