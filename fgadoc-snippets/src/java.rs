//! Java snippets for `dev.openfga:openfga-sdk`.
//!
//! Requests are built with the SDK's fluent setters, one call per line.

use std::collections::BTreeSet;

use fgadoc_codegen::builder::{Chain, CodeBuilder, Composite, Expr};
use fgadoc_codegen::literal::{LiteralSyntax, MapEntry, map_literal};
use fgadoc_codegen::{SnippetContext, SnippetLanguage};
use fgadoc_core::{QuoteStyle, quote, to_camel_case};
use fgadoc_ir::{
    Check, Context, Expand, ListObjects, ListUsers, OperationKind, Read, ReadChanges, TupleKey,
    Write, WriteAuthorizationModel,
};
use serde_json::Number;

use crate::common::{API_URL_ENV, REQUIRES_API_URL, pretty_json};

const CLIENT: &str = "dev.openfga.sdk.api.client";
const CLIENT_MODEL: &str = "dev.openfga.sdk.api.client.model";
const CONFIGURATION: &str = "dev.openfga.sdk.api.configuration";
const MODEL: &str = "dev.openfga.sdk.api.model";

/// Backend for the Java SDK.
#[derive(Debug, Clone, Copy, Default)]
pub struct Java;

struct Syntax;

impl LiteralSyntax for Syntax {
    fn string(&self, value: &str) -> String {
        string(value)
    }

    fn null(&self) -> String {
        "null".into()
    }

    fn number(&self, value: &Number) -> String {
        match value.as_i64() {
            Some(n) if i32::try_from(n).is_err() => format!("{}L", n),
            _ => value.to_string(),
        }
    }

    fn map(&self) -> Composite {
        Composite::new("Map.ofEntries(", ")").trailing_comma(false)
    }

    fn map_entry(&self, key: &str, value: Expr) -> MapEntry {
        MapEntry::Item(Expr::wrap(format!("Map.entry({}, ", string(key)), value, ")"))
    }

    fn empty_map(&self) -> String {
        "Map.of()".into()
    }

    fn list(&self) -> Composite {
        Composite::new("List.of(", ")").trailing_comma(false)
    }

    fn empty_list(&self) -> String {
        "List.of()".into()
    }
}

fn string(value: &str) -> String {
    quote(value, QuoteStyle::Double)
}

fn list(items: impl IntoIterator<Item = Expr>) -> Expr {
    Composite::new("List.of(", ")")
        .trailing_comma(false)
        .items(items)
        .into()
}

fn tuple(type_name: &str, tuple: &TupleKey) -> Expr {
    Chain::new(format!("new {}()", type_name))
        .call("user", string(tuple.user()))
        .call("relation", string(tuple.relation()))
        .call("_object", string(tuple.object()))
        .into()
}

fn tuples(type_name: &str, tuples: &[TupleKey]) -> Expr {
    list(tuples.iter().map(|t| tuple(type_name, t)))
}

fn contextual_tuples(op_tuples: Option<&[TupleKey]>) -> Option<Expr> {
    op_tuples.map(|t| tuples("ClientTupleKey", t))
}

fn context(context: Option<&Context>) -> Option<Expr> {
    context.map(|c| map_literal(c, &Syntax))
}

/// Text block body: incidental indentation is stripped by the compiler.
fn text_block(value: &str) -> String {
    value.replace('\\', "\\\\").replace("\"\"\"", "\\\"\"\"")
}

/// Fully qualified imports, printed sorted.
#[derive(Debug, Default)]
struct Imports(BTreeSet<String>);

impl Imports {
    fn new() -> Self {
        let mut imports = Self::default();
        imports
            .add(CLIENT, "OpenFgaClient")
            .add(CONFIGURATION, "ClientConfiguration");
        imports
    }

    fn add(&mut self, package: &str, name: &str) -> &mut Self {
        self.0.insert(format!("{}.{}", package, name));
        self
    }

    fn request(kind: &str) -> Self {
        let mut imports = Self::new();
        imports.add(CLIENT_MODEL, kind);
        imports
    }

    fn tuples(&mut self, present: bool) -> &mut Self {
        if present {
            self.add(CLIENT_MODEL, "ClientTupleKey").add("java.util", "List");
        }
        self
    }

    fn context(&mut self, present: bool) -> &mut Self {
        if present {
            self.add("java.util", "List").add("java.util", "Map");
        }
        self
    }
}

impl Java {
    fn program(
        &self,
        ctx: &SnippetContext<'_>,
        imports: &Imports,
        body: impl FnOnce(&mut CodeBuilder),
    ) -> String {
        let config = Chain::new("new ClientConfiguration()")
            .call("apiUrl", format!("System.getenv({})", string(API_URL_ENV)))
            .call("storeId", string(ctx.store_id))
            .call_opt("authorizationModelId", ctx.authorization_model_id.map(string));

        let mut builder = CodeBuilder::for_profile(ctx.profile);
        builder.push_comment(REQUIRES_API_URL);
        for import in &imports.0 {
            builder.push_line(&format!("import {};", import));
        }
        builder
            .push_blank()
            .push_block("public class Example {", "}", |b| {
                b.push_block(
                    "public static void main(String[] args) throws Exception {",
                    "}",
                    |b| {
                        b.push_expr("var config = ", &config.into(), ";")
                            .push_line("var fgaClient = new OpenFgaClient(config);")
                            .push_blank();
                        body(b);
                    },
                );
            });
        builder.build()
    }

    fn call(&self, builder: &mut CodeBuilder, kind: OperationKind, options: bool) {
        let args = if options { "body, options" } else { "body" };
        builder
            .push_blank()
            .push_line(&format!(
                "var response = {}({}).get();",
                self.method_name(kind),
                args
            ))
            .push_line("System.out.println(response);");
    }

    fn options(
        &self,
        builder: &mut CodeBuilder,
        type_name: &str,
        page_size: Option<u32>,
        continuation_token: Option<&str>,
    ) -> bool {
        if page_size.is_none() && continuation_token.is_none() {
            return false;
        }
        let options = Chain::new(format!("new {}()", type_name))
            .call_opt("pageSize", page_size.map(|size| size.to_string()))
            .call_opt("continuationToken", continuation_token.map(string));
        builder.push_expr("var options = ", &options.into(), ";");
        true
    }
}

impl SnippetLanguage for Java {
    fn method_name(&self, kind: OperationKind) -> String {
        format!("fgaClient.{}", to_camel_case(kind.as_str()))
    }

    fn check(&self, op: &Check, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::request("ClientCheckRequest");
        imports
            .tuples(op.contextual_tuples().is_some())
            .context(op.context().is_some());
        self.program(ctx, &imports, |b| {
            let tuple = op.tuple_key();
            let body = Chain::new("new ClientCheckRequest()")
                .call("user", string(tuple.user()))
                .call("relation", string(tuple.relation()))
                .call("_object", string(tuple.object()))
                .call_opt("contextualTuples", contextual_tuples(op.contextual_tuples()))
                .call_opt("context", context(op.context()));
            b.push_expr("var body = ", &body.into(), ";");
            self.call(b, OperationKind::Check, false);
        })
    }

    fn expand(&self, op: &Expand, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::request("ClientExpandRequest");
        imports.tuples(op.contextual_tuples().is_some());
        self.program(ctx, &imports, |b| {
            let body = Chain::new("new ClientExpandRequest()")
                .call("relation", string(op.relation()))
                .call("_object", string(op.object()))
                .call_opt("contextualTuples", contextual_tuples(op.contextual_tuples()));
            b.push_expr("var body = ", &body.into(), ";");
            self.call(b, OperationKind::Expand, false);
        })
    }

    fn list_objects(&self, op: &ListObjects, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::request("ClientListObjectsRequest");
        imports
            .tuples(op.contextual_tuples().is_some())
            .context(op.context().is_some());
        self.program(ctx, &imports, |b| {
            let body = Chain::new("new ClientListObjectsRequest()")
                .call("user", string(op.user()))
                .call("relation", string(op.relation()))
                .call("type", string(op.object_type()))
                .call_opt("contextualTuples", contextual_tuples(op.contextual_tuples()))
                .call_opt("context", context(op.context()));
            b.push_expr("var body = ", &body.into(), ";");
            self.call(b, OperationKind::ListObjects, false);
        })
    }

    fn list_users(&self, op: &ListUsers, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::request("ClientListUsersRequest");
        imports
            .add(MODEL, "FgaObject")
            .add(MODEL, "UserTypeFilter")
            .add("java.util", "List")
            .tuples(op.contextual_tuples().is_some())
            .context(op.context().is_some());
        self.program(ctx, &imports, |b| {
            let object = Chain::new("new FgaObject()")
                .call("type", string(op.object().object_type()))
                .call("id", string(op.object().id()));
            let filters = list(op.user_filters().iter().map(|filter| {
                Chain::new("new UserTypeFilter()")
                    .call("type", string(filter.user_type()))
                    .call_opt("relation", filter.relation().map(string))
                    .into()
            }));
            let body = Chain::new("new ClientListUsersRequest()")
                .call("_object", object)
                .call("relation", string(op.relation()))
                .call("userFilters", filters)
                .call_opt("contextualTuples", contextual_tuples(op.contextual_tuples()))
                .call_opt("context", context(op.context()));
            b.push_expr("var body = ", &body.into(), ";");
            self.call(b, OperationKind::ListUsers, false);
        })
    }

    fn read_changes(&self, op: &ReadChanges, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::request("ClientReadChangesRequest");
        let paged = op.page_size().is_some() || op.continuation_token().is_some();
        if paged {
            imports.add(CLIENT_MODEL, "ClientReadChangesOptions");
        }
        self.program(ctx, &imports, |b| {
            let body = Chain::new("new ClientReadChangesRequest()")
                .call_opt("type", op.object_type().map(string));
            b.push_expr("var body = ", &body.into(), ";");
            let options = self.options(
                b,
                "ClientReadChangesOptions",
                op.page_size(),
                op.continuation_token(),
            );
            self.call(b, OperationKind::ReadChanges, options);
        })
    }

    fn read(&self, op: &Read, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::request("ClientReadRequest");
        if op.page_size().is_some() || op.continuation_token().is_some() {
            imports.add(CLIENT_MODEL, "ClientReadOptions");
        }
        self.program(ctx, &imports, |b| {
            let mut body = Chain::new("new ClientReadRequest()");
            if let Some(key) = op.tuple_key() {
                body = body
                    .call_opt("user", key.user().map(string))
                    .call_opt("relation", key.relation().map(string))
                    .call("_object", string(key.object()));
            }
            b.push_expr("var body = ", &body.into(), ";");
            let options =
                self.options(b, "ClientReadOptions", op.page_size(), op.continuation_token());
            self.call(b, OperationKind::Read, options);
        })
    }

    fn write(&self, op: &Write, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::request("ClientWriteRequest");
        imports.add("java.util", "List");
        if op.writes().is_some() {
            imports.add(CLIENT_MODEL, "ClientTupleKey");
        }
        if op.deletes().is_some() {
            imports.add(CLIENT_MODEL, "ClientTupleKeyWithoutCondition");
        }
        self.program(ctx, &imports, |b| {
            let body = Chain::new("new ClientWriteRequest()")
                .call_opt("writes", op.writes().map(|t| tuples("ClientTupleKey", t)))
                .call_opt(
                    "deletes",
                    op.deletes()
                        .map(|t| tuples("ClientTupleKeyWithoutCondition", t)),
                );
            b.push_expr("var body = ", &body.into(), ";");
            self.call(b, OperationKind::Write, false);
        })
    }

    fn write_authorization_model(
        &self,
        op: &WriteAuthorizationModel,
        ctx: &SnippetContext<'_>,
    ) -> String {
        let mut imports = Imports::new();
        imports
            .add("com.fasterxml.jackson.databind", "ObjectMapper")
            .add(MODEL, "WriteAuthorizationModelRequest");
        self.program(ctx, &imports, |b| {
            let model = text_block(&pretty_json(&op.authorization_model().clone().into()));
            b.push_line("var body = new ObjectMapper().readValue(\"\"\"").push_indent();
            for line in model.lines() {
                b.push_line(line);
            }
            b.push_line("\"\"\", WriteAuthorizationModelRequest.class);")
                .push_dedent();
            self.call(b, OperationKind::WriteAuthorizationModel, false);
        })
    }
}
