//! Author-facing operation inputs and their validation.
//!
//! Inputs mirror the API request shapes with every field optional or
//! defaulted, so content files can be deserialized leniently and every
//! problem reported as an [`InvalidOperationInput`] with a field path.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    Check, Context, Expand, FgaObject, InvalidOperationInput, ListObjects, ListUsers,
    MAX_PAGE_SIZE, OperationKind, OperationModel, Read, ReadChanges, ReadTupleKey, TupleKey,
    UserTypeFilter, Write, WriteAuthorizationModel,
};

type Result<T> = std::result::Result<T, InvalidOperationInput>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TupleKeyInput {
    pub user: String,
    pub relation: String,
    pub object: String,
}

impl TupleKeyInput {
    pub fn new(
        user: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadTupleKeyInput {
    pub user: Option<String>,
    pub relation: Option<String>,
    pub object: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FgaObjectInput {
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserTypeFilterInput {
    #[serde(rename = "type")]
    pub user_type: String,
    pub relation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CheckInput {
    pub store_id: String,
    pub authorization_model_id: Option<String>,
    pub tuple_key: TupleKeyInput,
    pub contextual_tuples: Option<Vec<TupleKeyInput>>,
    pub context: Option<Context>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExpandInput {
    pub store_id: String,
    pub authorization_model_id: Option<String>,
    pub relation: String,
    pub object: String,
    pub contextual_tuples: Option<Vec<TupleKeyInput>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListObjectsInput {
    pub store_id: String,
    pub authorization_model_id: Option<String>,
    pub user: String,
    pub relation: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub contextual_tuples: Option<Vec<TupleKeyInput>>,
    pub context: Option<Context>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListUsersInput {
    pub store_id: String,
    pub authorization_model_id: Option<String>,
    pub object: FgaObjectInput,
    pub relation: String,
    pub user_filters: Vec<UserTypeFilterInput>,
    pub contextual_tuples: Option<Vec<TupleKeyInput>>,
    pub context: Option<Context>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadChangesInput {
    pub store_id: String,
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    pub page_size: Option<u32>,
    pub continuation_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadInput {
    pub store_id: String,
    pub tuple_key: Option<ReadTupleKeyInput>,
    pub page_size: Option<u32>,
    pub continuation_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WriteInput {
    pub store_id: String,
    pub authorization_model_id: Option<String>,
    pub writes: Option<Vec<TupleKeyInput>>,
    pub deletes: Option<Vec<TupleKeyInput>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WriteAuthorizationModelInput {
    pub store_id: String,
    pub authorization_model: serde_json::Value,
}

/// Any operation input, tagged by an `operation` field in content files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum OperationInput {
    Check(CheckInput),
    Expand(ExpandInput),
    ListObjects(ListObjectsInput),
    ListUsers(ListUsersInput),
    ReadChanges(ReadChangesInput),
    Read(ReadInput),
    Write(WriteInput),
    WriteAuthorizationModel(WriteAuthorizationModelInput),
}

impl OperationInput {
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationInput::Check(_) => OperationKind::Check,
            OperationInput::Expand(_) => OperationKind::Expand,
            OperationInput::ListObjects(_) => OperationKind::ListObjects,
            OperationInput::ListUsers(_) => OperationKind::ListUsers,
            OperationInput::ReadChanges(_) => OperationKind::ReadChanges,
            OperationInput::Read(_) => OperationKind::Read,
            OperationInput::Write(_) => OperationKind::Write,
            OperationInput::WriteAuthorizationModel(_) => OperationKind::WriteAuthorizationModel,
        }
    }

    /// Validate into an immutable model.
    pub fn validate(self) -> Result<OperationModel> {
        match self {
            OperationInput::Check(input) => OperationModel::check(input),
            OperationInput::Expand(input) => OperationModel::expand(input),
            OperationInput::ListObjects(input) => OperationModel::list_objects(input),
            OperationInput::ListUsers(input) => OperationModel::list_users(input),
            OperationInput::ReadChanges(input) => OperationModel::read_changes(input),
            OperationInput::Read(input) => OperationModel::read(input),
            OperationInput::Write(input) => OperationModel::write(input),
            OperationInput::WriteAuthorizationModel(input) => {
                OperationModel::write_authorization_model(input)
            }
        }
    }
}

impl CheckInput {
    pub fn validate(self) -> Result<Check> {
        let v = Fields::new(OperationKind::Check);
        Ok(Check {
            store_id: v.id("store_id", self.store_id)?,
            authorization_model_id: v.optional_id(
                "authorization_model_id",
                self.authorization_model_id,
            )?,
            tuple_key: v.tuple_key("tuple_key", self.tuple_key)?,
            contextual_tuples: v.tuples("contextual_tuples", self.contextual_tuples)?,
            context: v.context("context", self.context)?,
        })
    }
}

impl ExpandInput {
    pub fn validate(self) -> Result<Expand> {
        let v = Fields::new(OperationKind::Expand);
        Ok(Expand {
            store_id: v.id("store_id", self.store_id)?,
            authorization_model_id: v.optional_id(
                "authorization_model_id",
                self.authorization_model_id,
            )?,
            relation: v.name("relation", self.relation)?,
            object: v.object("object", self.object, false)?,
            contextual_tuples: v.tuples("contextual_tuples", self.contextual_tuples)?,
        })
    }
}

impl ListObjectsInput {
    pub fn validate(self) -> Result<ListObjects> {
        let v = Fields::new(OperationKind::ListObjects);
        Ok(ListObjects {
            store_id: v.id("store_id", self.store_id)?,
            authorization_model_id: v.optional_id(
                "authorization_model_id",
                self.authorization_model_id,
            )?,
            user: v.user("user", self.user)?,
            relation: v.name("relation", self.relation)?,
            object_type: v.name("type", self.object_type)?,
            contextual_tuples: v.tuples("contextual_tuples", self.contextual_tuples)?,
            context: v.context("context", self.context)?,
        })
    }
}

impl ListUsersInput {
    pub fn validate(self) -> Result<ListUsers> {
        let v = Fields::new(OperationKind::ListUsers);
        let store_id = v.id("store_id", self.store_id)?;
        let authorization_model_id =
            v.optional_id("authorization_model_id", self.authorization_model_id)?;
        let object = FgaObject {
            object_type: v.name("object.type", self.object.object_type)?,
            id: v.id("object.id", self.object.id)?,
        };
        let relation = v.name("relation", self.relation)?;
        if self.user_filters.is_empty() {
            return Err(InvalidOperationInput::missing(
                OperationKind::ListUsers,
                "user_filters",
            ));
        }
        let user_filters = self
            .user_filters
            .into_iter()
            .enumerate()
            .map(|(i, filter)| {
                Ok(UserTypeFilter {
                    user_type: v.name(&format!("user_filters[{}].type", i), filter.user_type)?,
                    relation: v.optional_name(
                        &format!("user_filters[{}].relation", i),
                        filter.relation,
                    )?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ListUsers {
            store_id,
            authorization_model_id,
            object,
            relation,
            user_filters,
            contextual_tuples: v.tuples("contextual_tuples", self.contextual_tuples)?,
            context: v.context("context", self.context)?,
        })
    }
}

impl ReadChangesInput {
    pub fn validate(self) -> Result<ReadChanges> {
        let v = Fields::new(OperationKind::ReadChanges);
        Ok(ReadChanges {
            store_id: v.id("store_id", self.store_id)?,
            object_type: v.optional_name("type", self.object_type)?,
            page_size: v.page_size("page_size", self.page_size)?,
            continuation_token: v.optional_id("continuation_token", self.continuation_token)?,
        })
    }
}

impl ReadInput {
    pub fn validate(self) -> Result<Read> {
        let v = Fields::new(OperationKind::Read);
        let store_id = v.id("store_id", self.store_id)?;
        let tuple_key = match self.tuple_key {
            None
            | Some(ReadTupleKeyInput {
                user: None,
                relation: None,
                object: None,
            }) => None,
            Some(key) => {
                let object = key.object.ok_or_else(|| {
                    InvalidOperationInput::missing(OperationKind::Read, "tuple_key.object")
                })?;
                Some(ReadTupleKey {
                    user: match key.user {
                        Some(user) => Some(v.user(
                            "tuple_key.user",
                            v.present_optional("tuple_key.user", user)?,
                        )?),
                        None => None,
                    },
                    relation: v.optional_name("tuple_key.relation", key.relation)?,
                    object: v.object("tuple_key.object", object, true)?,
                })
            }
        };

        Ok(Read {
            store_id,
            tuple_key,
            page_size: v.page_size("page_size", self.page_size)?,
            continuation_token: v.optional_id("continuation_token", self.continuation_token)?,
        })
    }
}

impl WriteInput {
    pub fn validate(self) -> Result<Write> {
        let v = Fields::new(OperationKind::Write);
        let store_id = v.id("store_id", self.store_id)?;
        let authorization_model_id =
            v.optional_id("authorization_model_id", self.authorization_model_id)?;
        let writes = v.tuples("writes", self.writes)?;
        let deletes = v.tuples("deletes", self.deletes)?;
        if writes.is_none() && deletes.is_none() {
            return Err(InvalidOperationInput::missing(
                OperationKind::Write,
                "writes",
            ));
        }

        Ok(Write {
            store_id,
            authorization_model_id,
            writes,
            deletes,
        })
    }
}

impl WriteAuthorizationModelInput {
    pub fn validate(self) -> Result<WriteAuthorizationModel> {
        let kind = OperationKind::WriteAuthorizationModel;
        let v = Fields::new(kind);
        let store_id = v.id("store_id", self.store_id)?;
        let model = match self.authorization_model {
            serde_json::Value::Null => {
                return Err(InvalidOperationInput::missing(kind, "authorization_model"));
            }
            serde_json::Value::Object(model) => model,
            _ => {
                return Err(InvalidOperationInput::malformed(
                    kind,
                    "authorization_model",
                    "expected an object",
                ));
            }
        };

        match model.get("schema_version") {
            None => {
                return Err(InvalidOperationInput::missing(
                    kind,
                    "authorization_model.schema_version",
                ));
            }
            Some(serde_json::Value::String(version)) if !version.trim().is_empty() => {}
            Some(_) => {
                return Err(InvalidOperationInput::malformed(
                    kind,
                    "authorization_model.schema_version",
                    "expected a non-empty string",
                ));
            }
        }
        match model.get("type_definitions") {
            None => {
                return Err(InvalidOperationInput::missing(
                    kind,
                    "authorization_model.type_definitions",
                ));
            }
            Some(serde_json::Value::Array(_)) => {}
            Some(_) => {
                return Err(InvalidOperationInput::malformed(
                    kind,
                    "authorization_model.type_definitions",
                    "expected an array",
                ));
            }
        }

        Ok(WriteAuthorizationModel {
            store_id,
            authorization_model: model,
        })
    }
}

/// Field validation rules, bound to the operation being built.
struct Fields {
    kind: OperationKind,
}

impl Fields {
    fn new(kind: OperationKind) -> Self {
        Self { kind }
    }

    fn malformed(&self, field: &str, reason: &str) -> InvalidOperationInput {
        InvalidOperationInput::malformed(self.kind, field, reason)
    }

    fn present(&self, field: &str, value: String) -> Result<String> {
        if value.trim().is_empty() {
            return Err(InvalidOperationInput::missing(self.kind, field));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(self.malformed(field, "must not contain whitespace"));
        }
        Ok(value)
    }

    /// Opaque identifier (store id, model id, token, object id).
    fn id(&self, field: &str, value: String) -> Result<String> {
        self.present(field, value)
    }

    fn optional_id(&self, field: &str, value: Option<String>) -> Result<Option<String>> {
        value.map(|v| self.present_optional(field, v)).transpose()
    }

    /// Relation or type name.
    fn name(&self, field: &str, value: String) -> Result<String> {
        let value = self.present(field, value)?;
        if value.contains([':', '#']) {
            return Err(self.malformed(field, "must not contain ':' or '#'"));
        }
        Ok(value)
    }

    fn optional_name(&self, field: &str, value: Option<String>) -> Result<Option<String>> {
        value
            .map(|v| {
                let v = self.present_optional(field, v)?;
                self.name(field, v)
            })
            .transpose()
    }

    /// Optional fields may be absent, but not blank.
    fn present_optional(&self, field: &str, value: String) -> Result<String> {
        if value.trim().is_empty() {
            return Err(self.malformed(field, "must not be empty when supplied"));
        }
        self.present(field, value)
    }

    /// `type:id`, `type:*` or `type:id#relation`.
    fn user(&self, field: &str, value: String) -> Result<String> {
        let value = self.present(field, value)?;
        let Some((user_type, rest)) = value.split_once(':') else {
            return Err(self.malformed(field, "expected 'type:id'"));
        };
        if user_type.is_empty() || user_type.contains('#') {
            return Err(self.malformed(field, "expected 'type:id'"));
        }
        let (id, relation) = match rest.split_once('#') {
            Some((id, relation)) => (id, Some(relation)),
            None => (rest, None),
        };
        if id.is_empty() || relation.is_some_and(str::is_empty) {
            return Err(self.malformed(field, "expected 'type:id' or 'type:id#relation'"));
        }
        Ok(value)
    }

    /// `type:id`, or the bare `type:` prefix when `allow_prefix` is set.
    fn object(&self, field: &str, value: String, allow_prefix: bool) -> Result<String> {
        let value = self.present(field, value)?;
        let Some((object_type, id)) = value.split_once(':') else {
            return Err(self.malformed(field, "expected 'type:id'"));
        };
        if object_type.is_empty() || object_type.contains('#') || id.contains('#') {
            return Err(self.malformed(field, "expected 'type:id'"));
        }
        if id.is_empty() && !allow_prefix {
            return Err(self.malformed(field, "expected 'type:id'"));
        }
        Ok(value)
    }

    fn tuple_key(&self, field: &str, input: TupleKeyInput) -> Result<TupleKey> {
        Ok(TupleKey {
            user: self.user(&format!("{}.user", field), input.user)?,
            relation: self.name(&format!("{}.relation", field), input.relation)?,
            object: self.object(&format!("{}.object", field), input.object, false)?,
        })
    }

    fn tuples(
        &self,
        field: &str,
        input: Option<Vec<TupleKeyInput>>,
    ) -> Result<Option<Vec<TupleKey>>> {
        match input {
            None => Ok(None),
            Some(tuples) if tuples.is_empty() => Ok(None),
            Some(tuples) => tuples
                .into_iter()
                .enumerate()
                .map(|(i, tuple)| self.tuple_key(&format!("{}[{}]", field, i), tuple))
                .collect::<Result<Vec<_>>>()
                .map(Some),
        }
    }

    fn context(&self, field: &str, input: Option<Context>) -> Result<Option<Context>> {
        match input {
            None => Ok(None),
            Some(context) if context.is_empty() => Ok(None),
            Some(context) => {
                if context.keys().any(|key| key.trim().is_empty()) {
                    return Err(self.malformed(field, "keys must not be empty"));
                }
                for (key, value) in &context {
                    self.context_value(&format!("{}.{}", field, key), value)?;
                }
                Ok(Some(context))
            }
        }
    }

    /// Context values must have a literal in every target language: no nulls,
    /// and integers within the signed 64-bit range.
    fn context_value(&self, field: &str, value: &Value) -> Result<()> {
        match value {
            Value::Null => Err(self.malformed(field, "must not be null")),
            Value::Number(n) if n.is_u64() && n.as_i64().is_none() => Err(self.malformed(
                field,
                &format!("must be at most {}", i64::MAX),
            )),
            Value::Array(items) => items.iter().enumerate().try_for_each(|(i, item)| {
                self.context_value(&format!("{}[{}]", field, i), item)
            }),
            Value::Object(map) => map.iter().try_for_each(|(key, item)| {
                self.context_value(&format!("{}.{}", field, key), item)
            }),
            _ => Ok(()),
        }
    }

    fn page_size(&self, field: &str, value: Option<u32>) -> Result<Option<u32>> {
        match value {
            Some(size) if size == 0 || size > MAX_PAGE_SIZE => Err(self.malformed(
                field,
                &format!("must be between 1 and {}", MAX_PAGE_SIZE),
            )),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Problem;

    fn check_input() -> CheckInput {
        CheckInput {
            store_id: "01HVMMBCMGZNT3SED4Z17ECXCA".into(),
            tuple_key: TupleKeyInput::new("user:anne", "viewer", "document:roadmap"),
            ..Default::default()
        }
    }

    #[test]
    fn test_check_minimal() {
        let check = check_input().validate().unwrap();
        assert_eq!(check.tuple_key().user(), "user:anne");
        assert!(check.contextual_tuples().is_none());
        assert!(check.context().is_none());
        assert!(check.authorization_model_id.is_none());
    }

    #[test]
    fn test_check_missing_object() {
        let mut input = check_input();
        input.tuple_key.object = String::new();
        let err = input.validate().unwrap_err();
        assert_eq!(err.operation, OperationKind::Check);
        assert_eq!(err.field, "tuple_key.object");
        assert_eq!(err.problem, Problem::Missing);
    }

    #[test]
    fn test_check_missing_store_id() {
        let mut input = check_input();
        input.store_id = "   ".into();
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "store_id");
        assert_eq!(err.problem, Problem::Missing);
    }

    #[test]
    fn test_malformed_user() {
        for user in ["anne", ":anne", "user:", "user:anne#", "user:anne bob"] {
            let mut input = check_input();
            input.tuple_key.user = user.into();
            let err = input.validate().unwrap_err();
            assert_eq!(err.field, "tuple_key.user", "user {:?}", user);
            assert!(matches!(err.problem, Problem::Malformed(_)), "user {:?}", user);
        }
    }

    #[test]
    fn test_accepts_wildcard_and_userset_users() {
        for user in ["user:*", "group:eng#member"] {
            let mut input = check_input();
            input.tuple_key.user = user.into();
            assert!(input.validate().is_ok(), "user {:?}", user);
        }
    }

    #[test]
    fn test_malformed_relation() {
        let mut input = check_input();
        input.tuple_key.relation = "doc:viewer".into();
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "tuple_key.relation");
    }

    #[test]
    fn test_contextual_tuple_error_path() {
        let mut input = check_input();
        input.contextual_tuples = Some(vec![
            TupleKeyInput::new("user:anne", "member", "team:product"),
            TupleKeyInput::new("user:anne", "member", "team"),
        ]);
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "contextual_tuples[1].object");
    }

    #[test]
    fn test_empty_collections_are_absent() {
        let mut input = check_input();
        input.contextual_tuples = Some(Vec::new());
        input.context = Some(Context::new());
        let check = input.validate().unwrap();
        assert!(check.contextual_tuples().is_none());
        assert!(check.context().is_none());
    }

    #[test]
    fn test_empty_optional_string_is_malformed() {
        let mut input = check_input();
        input.authorization_model_id = Some(String::new());
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "authorization_model_id");
        assert!(matches!(err.problem, Problem::Malformed(_)));
    }

    #[test]
    fn test_context_preserves_order() {
        let mut context = Context::new();
        context.insert("zeta".into(), json!(1));
        context.insert("alpha".into(), json!("a"));
        let mut input = check_input();
        input.context = Some(context);
        let check = input.validate().unwrap();
        let keys: Vec<_> = check.context().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_context_rejects_null_values() {
        let mut context = Context::new();
        context.insert("ip".into(), json!({"v4": "10.0.0.1", "v6": null}));
        let mut input = check_input();
        input.context = Some(context);
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "context.ip.v6");
        assert_eq!(err.problem, Problem::Malformed("must not be null".into()));
    }

    #[test]
    fn test_context_rejects_unsigned_overflow() {
        let mut context = Context::new();
        context.insert("ok".into(), json!(i64::MIN));
        context.insert("big".into(), json!([1, u64::MAX]));
        let mut input = check_input();
        input.context = Some(context);
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "context.big[1]");
        assert!(matches!(err.problem, Problem::Malformed(_)));
    }

    #[test]
    fn test_list_users_requires_filters() {
        let input = ListUsersInput {
            store_id: "01H".into(),
            object: FgaObjectInput {
                object_type: "document".into(),
                id: "roadmap".into(),
            },
            relation: "viewer".into(),
            ..Default::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "user_filters");
        assert_eq!(err.problem, Problem::Missing);
    }

    #[test]
    fn test_read_key_normalization() {
        let input = ReadInput {
            store_id: "01H".into(),
            tuple_key: Some(ReadTupleKeyInput::default()),
            ..Default::default()
        };
        assert!(input.validate().unwrap().tuple_key().is_none());

        let input = ReadInput {
            store_id: "01H".into(),
            tuple_key: Some(ReadTupleKeyInput {
                user: Some("user:anne".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "tuple_key.object");

        let input = ReadInput {
            store_id: "01H".into(),
            tuple_key: Some(ReadTupleKeyInput {
                object: Some("document:".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            input.validate().unwrap().tuple_key().unwrap().object(),
            "document:"
        );
    }

    #[test]
    fn test_page_size_bounds() {
        for (size, ok) in [(0, false), (1, true), (100, true), (101, false)] {
            let input = ReadChangesInput {
                store_id: "01H".into(),
                page_size: Some(size),
                ..Default::default()
            };
            assert_eq!(input.validate().is_ok(), ok, "page size {}", size);
        }
    }

    #[test]
    fn test_write_requires_a_side() {
        let input = WriteInput {
            store_id: "01H".into(),
            writes: Some(Vec::new()),
            ..Default::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "writes");

        let input = WriteInput {
            store_id: "01H".into(),
            writes: Some(Vec::new()),
            deletes: Some(vec![TupleKeyInput::new("user:anne", "viewer", "document:a")]),
            ..Default::default()
        };
        let write = input.validate().unwrap();
        assert!(write.writes().is_none());
        assert_eq!(write.deletes().unwrap().len(), 1);
    }

    #[test]
    fn test_authorization_model_shape() {
        let input = WriteAuthorizationModelInput {
            store_id: "01H".into(),
            authorization_model: json!({"schema_version": "1.1"}),
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "authorization_model.type_definitions");

        let input = WriteAuthorizationModelInput {
            store_id: "01H".into(),
            authorization_model: json!(["not", "an", "object"]),
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "authorization_model");

        let input = WriteAuthorizationModelInput {
            store_id: "01H".into(),
            authorization_model: json!({"schema_version": "1.1", "type_definitions": []}),
        };
        assert_eq!(input.validate().unwrap().schema_version(), "1.1");
    }

    #[test]
    fn test_operation_input_from_toml() {
        let input: OperationInput = toml::from_str(
            r#"
            operation = "list_objects"
            store_id = "01H"
            user = "user:anne"
            relation = "viewer"
            type = "document"
            "#,
        )
        .unwrap();
        assert_eq!(input.kind(), OperationKind::ListObjects);
        let model = input.validate().unwrap();
        assert_eq!(model.kind(), OperationKind::ListObjects);
        assert_eq!(model.store_id(), "01H");
    }
}
