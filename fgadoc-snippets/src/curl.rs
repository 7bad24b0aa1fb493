//! Raw HTTP requests with curl.
//!
//! Bodies follow the HTTP API's snake_case JSON shapes. Each snippet is one
//! `curl` invocation; the JSON body goes in a single-quoted `-d` argument.

use fgadoc_codegen::builder::CodeBuilder;
use fgadoc_codegen::{SnippetContext, SnippetLanguage};
use fgadoc_core::percent_encode;
use fgadoc_ir::{
    Check, Context, Expand, ListObjects, ListUsers, OperationKind, Read, ReadChanges, TupleKey,
    Write, WriteAuthorizationModel,
};
use serde_json::{Map, Value, json};

use crate::common::pretty_json;

const REQUIRES: &str = "Requires the FGA_API_URL and FGA_API_TOKEN environment variables";

/// Backend for the HTTP API.
#[derive(Debug, Clone, Copy, Default)]
pub struct Curl;

fn tuple_key(tuple: &TupleKey) -> Value {
    json!({
        "user": tuple.user(),
        "relation": tuple.relation(),
        "object": tuple.object(),
    })
}

fn tuple_keys(tuples: &[TupleKey]) -> Value {
    Value::Array(tuples.iter().map(tuple_key).collect())
}

/// The `{"tuple_keys": [...]}` wrapper most endpoints expect.
fn wrapped(tuples: &[TupleKey]) -> Value {
    json!({ "tuple_keys": tuple_keys(tuples) })
}

fn context(context: &Context) -> Value {
    Value::Object(context.clone().into_iter().collect())
}

/// JSON body under construction, in field order.
#[derive(Default)]
struct Body(Map<String, Value>);

impl Body {
    fn new(ctx: &SnippetContext<'_>) -> Self {
        let mut body = Self::default();
        body.field_opt(
            "authorization_model_id",
            ctx.authorization_model_id.map(Value::from),
        );
        body
    }

    fn field(&mut self, key: &str, value: Value) -> &mut Self {
        self.0.insert(key.to_string(), value);
        self
    }

    fn field_opt(&mut self, key: &str, value: Option<Value>) -> &mut Self {
        if let Some(value) = value {
            self.field(key, value);
        }
        self
    }
}

impl Curl {
    /// Double-quoted so the shell expands `$FGA_API_URL`; every other
    /// component is percent-encoded and needs no escaping.
    fn url(&self, ctx: &SnippetContext<'_>, path: &str) -> String {
        format!(
            "\"$FGA_API_URL/stores/{}/{}\"",
            percent_encode(ctx.store_id),
            path
        )
    }

    fn request(
        &self,
        ctx: &SnippetContext<'_>,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> String {
        let mut lines = vec![
            format!("curl -X {} {}", method, self.url(ctx, path)),
            "-H \"Authorization: Bearer $FGA_API_TOKEN\"".to_string(),
        ];
        if body.is_some() {
            lines.push("-H \"content-type: application/json\"".to_string());
        }

        let mut builder = CodeBuilder::for_profile(ctx.profile);
        builder.push_comment(REQUIRES);
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            if i == last && body.is_none() {
                builder.push_line(line);
            } else {
                builder.push_line(&format!("{} \\", line));
            }
            if i == 0 {
                builder.push_indent();
            }
        }
        if let Some(body) = body {
            let json = pretty_json(&body).replace('\'', "'\\''");
            let mut json_lines = json.lines();
            let first = json_lines.next().unwrap_or_default();
            let rest: Vec<&str> = json_lines.collect();
            match rest.split_last() {
                Some((last, middle)) => {
                    builder.push_line(&format!("-d '{}", first));
                    for line in middle {
                        builder.push_line(line);
                    }
                    builder.push_line(&format!("{}'", last));
                }
                None => {
                    builder.push_line(&format!("-d '{}'", first));
                }
            }
        }
        builder.push_dedent();
        builder.build()
    }

    fn post(&self, ctx: &SnippetContext<'_>, path: &str, body: Body) -> String {
        self.request(ctx, "POST", path, Some(Value::Object(body.0)))
    }
}

impl SnippetLanguage for Curl {
    fn method_name(&self, kind: OperationKind) -> String {
        let path = match kind {
            OperationKind::Check => "check",
            OperationKind::Expand => "expand",
            OperationKind::ListObjects => "list-objects",
            OperationKind::ListUsers => "list-users",
            OperationKind::ReadChanges => "changes",
            OperationKind::Read => "read",
            OperationKind::Write => "write",
            OperationKind::WriteAuthorizationModel => "authorization-models",
        };
        format!("/{}", path)
    }

    fn check(&self, op: &Check, ctx: &SnippetContext<'_>) -> String {
        let mut body = Body::new(ctx);
        body.field("tuple_key", tuple_key(op.tuple_key()))
            .field_opt("contextual_tuples", op.contextual_tuples().map(wrapped))
            .field_opt("context", op.context().map(context));
        self.post(ctx, "check", body)
    }

    fn expand(&self, op: &Expand, ctx: &SnippetContext<'_>) -> String {
        let mut body = Body::new(ctx);
        body.field(
            "tuple_key",
            json!({ "relation": op.relation(), "object": op.object() }),
        )
        .field_opt("contextual_tuples", op.contextual_tuples().map(wrapped));
        self.post(ctx, "expand", body)
    }

    fn list_objects(&self, op: &ListObjects, ctx: &SnippetContext<'_>) -> String {
        let mut body = Body::new(ctx);
        body.field("type", op.object_type().into())
            .field("relation", op.relation().into())
            .field("user", op.user().into())
            .field_opt("contextual_tuples", op.contextual_tuples().map(wrapped))
            .field_opt("context", op.context().map(context));
        self.post(ctx, "list-objects", body)
    }

    fn list_users(&self, op: &ListUsers, ctx: &SnippetContext<'_>) -> String {
        let filters = op
            .user_filters()
            .iter()
            .map(|filter| {
                let mut value = json!({ "type": filter.user_type() });
                if let (Some(relation), Some(map)) = (filter.relation(), value.as_object_mut()) {
                    map.insert("relation".to_string(), relation.into());
                }
                value
            })
            .collect();
        let mut body = Body::new(ctx);
        body.field(
            "object",
            json!({ "type": op.object().object_type(), "id": op.object().id() }),
        )
        .field("relation", op.relation().into())
        .field("user_filters", Value::Array(filters))
        .field_opt("contextual_tuples", op.contextual_tuples().map(tuple_keys))
        .field_opt("context", op.context().map(context));
        self.post(ctx, "list-users", body)
    }

    fn read_changes(&self, op: &ReadChanges, ctx: &SnippetContext<'_>) -> String {
        let mut query = Vec::new();
        if let Some(object_type) = op.object_type() {
            query.push(format!("type={}", percent_encode(object_type)));
        }
        if let Some(page_size) = op.page_size() {
            query.push(format!("page_size={}", page_size));
        }
        if let Some(token) = op.continuation_token() {
            query.push(format!("continuation_token={}", percent_encode(token)));
        }
        let path = if query.is_empty() {
            "changes".to_string()
        } else {
            format!("changes?{}", query.join("&"))
        };
        self.request(ctx, "GET", &path, None)
    }

    fn read(&self, op: &Read, ctx: &SnippetContext<'_>) -> String {
        let mut body = Body::new(ctx);
        if let Some(key) = op.tuple_key() {
            let mut tuple = Map::new();
            if let Some(user) = key.user() {
                tuple.insert("user".to_string(), user.into());
            }
            if let Some(relation) = key.relation() {
                tuple.insert("relation".to_string(), relation.into());
            }
            tuple.insert("object".to_string(), key.object().into());
            body.field("tuple_key", Value::Object(tuple));
        }
        body.field_opt("page_size", op.page_size().map(Value::from))
            .field_opt(
                "continuation_token",
                op.continuation_token().map(Value::from),
            );
        self.post(ctx, "read", body)
    }

    fn write(&self, op: &Write, ctx: &SnippetContext<'_>) -> String {
        let mut body = Body::new(ctx);
        body.field_opt("writes", op.writes().map(wrapped))
            .field_opt("deletes", op.deletes().map(wrapped));
        self.post(ctx, "write", body)
    }

    fn write_authorization_model(
        &self,
        op: &WriteAuthorizationModel,
        ctx: &SnippetContext<'_>,
    ) -> String {
        let body = Body(op.authorization_model().clone());
        self.post(ctx, "authorization-models", body)
    }
}
