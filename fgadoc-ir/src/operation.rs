//! Validated, immutable operation models.
//!
//! Every variant carries only the fields meaningful to its operation. Optional
//! fields are `None` when the author did not supply them (empty collections are
//! normalized to `None` during validation), so generators can rely on
//! `Some(_)` meaning "emit this".

use crate::{
    CheckInput, Context, ExpandInput, FgaObject, InvalidOperationInput, ListObjectsInput,
    ListUsersInput, OperationKind, ReadChangesInput, ReadInput, ReadTupleKey, TupleKey,
    UserTypeFilter, WriteAuthorizationModelInput, WriteInput,
};

/// Check whether a user has a relation with an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub(crate) store_id: String,
    pub(crate) authorization_model_id: Option<String>,
    pub(crate) tuple_key: TupleKey,
    pub(crate) contextual_tuples: Option<Vec<TupleKey>>,
    pub(crate) context: Option<Context>,
}

impl Check {
    pub fn tuple_key(&self) -> &TupleKey {
        &self.tuple_key
    }

    pub fn contextual_tuples(&self) -> Option<&[TupleKey]> {
        self.contextual_tuples.as_deref()
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }
}

/// Expand the userset tree of a relation on an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Expand {
    pub(crate) store_id: String,
    pub(crate) authorization_model_id: Option<String>,
    pub(crate) relation: String,
    pub(crate) object: String,
    pub(crate) contextual_tuples: Option<Vec<TupleKey>>,
}

impl Expand {
    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    pub fn contextual_tuples(&self) -> Option<&[TupleKey]> {
        self.contextual_tuples.as_deref()
    }
}

/// List the objects of a type a user has a relation with.
#[derive(Debug, Clone, PartialEq)]
pub struct ListObjects {
    pub(crate) store_id: String,
    pub(crate) authorization_model_id: Option<String>,
    pub(crate) user: String,
    pub(crate) relation: String,
    pub(crate) object_type: String,
    pub(crate) contextual_tuples: Option<Vec<TupleKey>>,
    pub(crate) context: Option<Context>,
}

impl ListObjects {
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn contextual_tuples(&self) -> Option<&[TupleKey]> {
        self.contextual_tuples.as_deref()
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }
}

/// List the users that have a relation with an object.
#[derive(Debug, Clone, PartialEq)]
pub struct ListUsers {
    pub(crate) store_id: String,
    pub(crate) authorization_model_id: Option<String>,
    pub(crate) object: FgaObject,
    pub(crate) relation: String,
    pub(crate) user_filters: Vec<UserTypeFilter>,
    pub(crate) contextual_tuples: Option<Vec<TupleKey>>,
    pub(crate) context: Option<Context>,
}

impl ListUsers {
    pub fn object(&self) -> &FgaObject {
        &self.object
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Never empty.
    pub fn user_filters(&self) -> &[UserTypeFilter] {
        &self.user_filters
    }

    pub fn contextual_tuples(&self) -> Option<&[TupleKey]> {
        self.contextual_tuples.as_deref()
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }
}

/// Read the tuple change log of a store.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadChanges {
    pub(crate) store_id: String,
    pub(crate) object_type: Option<String>,
    pub(crate) page_size: Option<u32>,
    pub(crate) continuation_token: Option<String>,
}

impl ReadChanges {
    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }
}

/// Read stored tuples, optionally filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub(crate) store_id: String,
    pub(crate) tuple_key: Option<ReadTupleKey>,
    pub(crate) page_size: Option<u32>,
    pub(crate) continuation_token: Option<String>,
}

impl Read {
    pub fn tuple_key(&self) -> Option<&ReadTupleKey> {
        self.tuple_key.as_ref()
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }
}

/// Write and/or delete tuples. At least one side is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Write {
    pub(crate) store_id: String,
    pub(crate) authorization_model_id: Option<String>,
    pub(crate) writes: Option<Vec<TupleKey>>,
    pub(crate) deletes: Option<Vec<TupleKey>>,
}

impl Write {
    pub fn writes(&self) -> Option<&[TupleKey]> {
        self.writes.as_deref()
    }

    pub fn deletes(&self) -> Option<&[TupleKey]> {
        self.deletes.as_deref()
    }
}

/// Publish a new authorization model.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteAuthorizationModel {
    pub(crate) store_id: String,
    pub(crate) authorization_model: serde_json::Map<String, serde_json::Value>,
}

impl WriteAuthorizationModel {
    /// The model payload (`schema_version`, `type_definitions`, ...) in author order.
    pub fn authorization_model(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.authorization_model
    }

    pub fn schema_version(&self) -> &str {
        self.authorization_model
            .get("schema_version")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
    }
}

/// A validated operation, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationModel {
    Check(Check),
    Expand(Expand),
    ListObjects(ListObjects),
    ListUsers(ListUsers),
    ReadChanges(ReadChanges),
    Read(Read),
    Write(Write),
    WriteAuthorizationModel(WriteAuthorizationModel),
}

impl OperationModel {
    pub fn check(input: CheckInput) -> Result<Self, InvalidOperationInput> {
        input.validate().map(Self::Check)
    }

    pub fn expand(input: ExpandInput) -> Result<Self, InvalidOperationInput> {
        input.validate().map(Self::Expand)
    }

    pub fn list_objects(input: ListObjectsInput) -> Result<Self, InvalidOperationInput> {
        input.validate().map(Self::ListObjects)
    }

    pub fn list_users(input: ListUsersInput) -> Result<Self, InvalidOperationInput> {
        input.validate().map(Self::ListUsers)
    }

    pub fn read_changes(input: ReadChangesInput) -> Result<Self, InvalidOperationInput> {
        input.validate().map(Self::ReadChanges)
    }

    pub fn read(input: ReadInput) -> Result<Self, InvalidOperationInput> {
        input.validate().map(Self::Read)
    }

    pub fn write(input: WriteInput) -> Result<Self, InvalidOperationInput> {
        input.validate().map(Self::Write)
    }

    pub fn write_authorization_model(
        input: WriteAuthorizationModelInput,
    ) -> Result<Self, InvalidOperationInput> {
        input.validate().map(Self::WriteAuthorizationModel)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            OperationModel::Check(_) => OperationKind::Check,
            OperationModel::Expand(_) => OperationKind::Expand,
            OperationModel::ListObjects(_) => OperationKind::ListObjects,
            OperationModel::ListUsers(_) => OperationKind::ListUsers,
            OperationModel::ReadChanges(_) => OperationKind::ReadChanges,
            OperationModel::Read(_) => OperationKind::Read,
            OperationModel::Write(_) => OperationKind::Write,
            OperationModel::WriteAuthorizationModel(_) => OperationKind::WriteAuthorizationModel,
        }
    }

    pub fn store_id(&self) -> &str {
        match self {
            OperationModel::Check(op) => &op.store_id,
            OperationModel::Expand(op) => &op.store_id,
            OperationModel::ListObjects(op) => &op.store_id,
            OperationModel::ListUsers(op) => &op.store_id,
            OperationModel::ReadChanges(op) => &op.store_id,
            OperationModel::Read(op) => &op.store_id,
            OperationModel::Write(op) => &op.store_id,
            OperationModel::WriteAuthorizationModel(op) => &op.store_id,
        }
    }

    /// The model id to pin the client to, if the operation accepts one and it was supplied.
    pub fn authorization_model_id(&self) -> Option<&str> {
        match self {
            OperationModel::Check(op) => op.authorization_model_id.as_deref(),
            OperationModel::Expand(op) => op.authorization_model_id.as_deref(),
            OperationModel::ListObjects(op) => op.authorization_model_id.as_deref(),
            OperationModel::ListUsers(op) => op.authorization_model_id.as_deref(),
            OperationModel::Write(op) => op.authorization_model_id.as_deref(),
            OperationModel::ReadChanges(_)
            | OperationModel::Read(_)
            | OperationModel::WriteAuthorizationModel(_) => None,
        }
    }
}
