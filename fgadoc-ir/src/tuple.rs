//! Relationship tuple types shared by several operations.

use indexmap::IndexMap;

/// ABAC context: condition parameter names to JSON values, in author order.
pub type Context = IndexMap<String, serde_json::Value>;

/// A `(user, relation, object)` relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleKey {
    pub(crate) user: String,
    pub(crate) relation: String,
    pub(crate) object: String,
}

impl TupleKey {
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn object(&self) -> &str {
        &self.object
    }
}

/// Filter for the Read operation. Only the object (or its `type:` prefix) is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTupleKey {
    pub(crate) user: Option<String>,
    pub(crate) relation: Option<String>,
    pub(crate) object: String,
}

impl ReadTupleKey {
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }

    pub fn object(&self) -> &str {
        &self.object
    }
}

/// An object split into type and id, as ListUsers expects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FgaObject {
    pub(crate) object_type: String,
    pub(crate) id: String,
}

impl FgaObject {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Restricts ListUsers results to a user type, optionally a userset relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTypeFilter {
    pub(crate) user_type: String,
    pub(crate) relation: Option<String>,
}

impl UserTypeFilter {
    pub fn user_type(&self) -> &str {
        &self.user_type
    }

    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }
}
