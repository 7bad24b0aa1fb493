//! C# snippets for the `OpenFga.Sdk` NuGet package, as top-level statements.

use fgadoc_codegen::builder::{CodeBuilder, Composite, Expr};
use fgadoc_codegen::literal::{LiteralSyntax, MapEntry, map_literal};
use fgadoc_codegen::{SnippetContext, SnippetLanguage};
use fgadoc_core::{QuoteStyle, quote, to_pascal_case};
use fgadoc_ir::{
    Check, Context, Expand, ListObjects, ListUsers, OperationKind, Read, ReadChanges, TupleKey,
    Write, WriteAuthorizationModel,
};

use crate::common::{API_URL_ENV, REQUIRES_API_URL, pretty_json};

/// Backend for the .NET SDK.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotNet;

struct Syntax;

impl LiteralSyntax for Syntax {
    fn string(&self, value: &str) -> String {
        string(value)
    }

    fn null(&self) -> String {
        "null".into()
    }

    fn map(&self) -> Composite {
        Composite::new("new Dictionary<string, object> {", "}")
    }

    fn map_entry(&self, key: &str, value: Expr) -> MapEntry {
        MapEntry::Item(Expr::wrap(format!("{{ {}, ", string(key)), value, " }"))
    }

    fn empty_map(&self) -> String {
        "new Dictionary<string, object>()".into()
    }

    fn list(&self) -> Composite {
        Composite::new("new List<object> {", "}")
    }

    fn empty_list(&self) -> String {
        "new List<object>()".into()
    }
}

fn string(value: &str) -> String {
    quote(value, QuoteStyle::Double)
}

/// `new T { A = ..., }`
fn init(type_name: &str) -> Composite {
    Composite::new(format!("new {} {{", type_name), "}").assign(" = ")
}

/// Target-typed `new() { A = ..., }` for collection elements.
fn element() -> Composite {
    Composite::new("new() {", "}").assign(" = ")
}

fn tuples(type_name: &str, tuples: &[TupleKey]) -> Expr {
    Composite::new(format!("new List<{}> {{", type_name), "}")
        .items(tuples.iter().map(|tuple| {
            element()
                .field("User", string(tuple.user()))
                .field("Relation", string(tuple.relation()))
                .field("Object", string(tuple.object()))
        }))
        .into()
}

fn contextual_tuples(op_tuples: Option<&[TupleKey]>) -> Option<Expr> {
    op_tuples.map(|t| tuples("ClientTupleKey", t))
}

fn context(context: Option<&Context>) -> Option<Expr> {
    context.map(|c| map_literal(c, &Syntax))
}

/// Verbatim string literal: only `"` needs escaping, by doubling it.
fn verbatim_string(value: &str) -> String {
    format!("@\"{}\"", value.replace('"', "\"\""))
}

#[derive(Debug, Clone, Copy, Default)]
struct Usings {
    model: bool,
    json: bool,
}

impl DotNet {
    fn program(
        &self,
        ctx: &SnippetContext<'_>,
        usings: Usings,
        body: impl FnOnce(&mut CodeBuilder),
    ) -> String {
        let config = init("ClientConfiguration")
            .field(
                "ApiUrl",
                format!("Environment.GetEnvironmentVariable({})", string(API_URL_ENV)),
            )
            .field("StoreId", string(ctx.store_id))
            .field_opt("AuthorizationModelId", ctx.authorization_model_id.map(string));

        let mut namespaces = vec!["OpenFga.Sdk.Client", "OpenFga.Sdk.Client.Model"];
        if usings.model {
            namespaces.push("OpenFga.Sdk.Model");
        }
        if usings.json {
            namespaces.push("System.Text.Json");
        }

        let mut builder = CodeBuilder::for_profile(ctx.profile);
        builder.push_comment(REQUIRES_API_URL);
        for namespace in namespaces {
            builder.push_line(&format!("using {};", namespace));
        }
        builder
            .push_blank()
            .push_expr("var configuration = ", &config.into(), ";")
            .push_line("var fgaClient = new OpenFgaClient(configuration);")
            .push_blank();
        body(&mut builder);
        builder.build()
    }

    fn call(&self, builder: &mut CodeBuilder, kind: OperationKind, options: bool) {
        let args = if options { "body, options" } else { "body" };
        builder
            .push_line(&format!(
                "var response = await {}({});",
                self.method_name(kind),
                args
            ))
            .push_line("Console.WriteLine(response);");
    }

    fn options(
        &self,
        builder: &mut CodeBuilder,
        type_name: &str,
        page_size: Option<u32>,
        continuation_token: Option<&str>,
    ) -> bool {
        let options = init(type_name)
            .field_opt("PageSize", page_size.map(|size| size.to_string()))
            .field_opt("ContinuationToken", continuation_token.map(string));
        if options.is_empty() {
            return false;
        }
        builder.push_expr("var options = ", &options.into(), ";");
        true
    }
}

impl SnippetLanguage for DotNet {
    fn method_name(&self, kind: OperationKind) -> String {
        format!("fgaClient.{}", to_pascal_case(kind.as_str()))
    }

    fn check(&self, op: &Check, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, Usings::default(), |b| {
            let tuple = op.tuple_key();
            let body = init("ClientCheckRequest")
                .field("User", string(tuple.user()))
                .field("Relation", string(tuple.relation()))
                .field("Object", string(tuple.object()))
                .field_opt("ContextualTuples", contextual_tuples(op.contextual_tuples()))
                .field_opt("Context", context(op.context()));
            b.push_expr("var body = ", &body.into(), ";");
            self.call(b, OperationKind::Check, false);
        })
    }

    fn expand(&self, op: &Expand, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, Usings::default(), |b| {
            let body = init("ClientExpandRequest")
                .field("Relation", string(op.relation()))
                .field("Object", string(op.object()))
                .field_opt("ContextualTuples", contextual_tuples(op.contextual_tuples()));
            b.push_expr("var body = ", &body.into(), ";");
            self.call(b, OperationKind::Expand, false);
        })
    }

    fn list_objects(&self, op: &ListObjects, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, Usings::default(), |b| {
            let body = init("ClientListObjectsRequest")
                .field("User", string(op.user()))
                .field("Relation", string(op.relation()))
                .field("Type", string(op.object_type()))
                .field_opt("ContextualTuples", contextual_tuples(op.contextual_tuples()))
                .field_opt("Context", context(op.context()));
            b.push_expr("var body = ", &body.into(), ";");
            self.call(b, OperationKind::ListObjects, false);
        })
    }

    fn list_users(&self, op: &ListUsers, ctx: &SnippetContext<'_>) -> String {
        let usings = Usings {
            model: true,
            ..Usings::default()
        };
        self.program(ctx, usings, |b| {
            let object = init("FgaObject")
                .field("Type", string(op.object().object_type()))
                .field("Id", string(op.object().id()));
            let filters = Composite::new("new List<UserTypeFilter> {", "}").items(
                op.user_filters().iter().map(|filter| {
                    element()
                        .field("Type", string(filter.user_type()))
                        .field_opt("Relation", filter.relation().map(string))
                }),
            );
            let body = init("ClientListUsersRequest")
                .field("Object", object)
                .field("Relation", string(op.relation()))
                .field("UserFilters", filters)
                .field_opt("ContextualTuples", contextual_tuples(op.contextual_tuples()))
                .field_opt("Context", context(op.context()));
            b.push_expr("var body = ", &body.into(), ";");
            self.call(b, OperationKind::ListUsers, false);
        })
    }

    fn read_changes(&self, op: &ReadChanges, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, Usings::default(), |b| {
            let body =
                init("ClientReadChangesRequest").field_opt("Type", op.object_type().map(string));
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
        self.program(ctx, Usings::default(), |b| {
            let mut body = init("ClientReadRequest");
            if let Some(key) = op.tuple_key() {
                body = body
                    .field_opt("User", key.user().map(string))
                    .field_opt("Relation", key.relation().map(string))
                    .field("Object", string(key.object()));
            }
            b.push_expr("var body = ", &body.into(), ";");
            let options =
                self.options(b, "ClientReadOptions", op.page_size(), op.continuation_token());
            self.call(b, OperationKind::Read, options);
        })
    }

    fn write(&self, op: &Write, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, Usings::default(), |b| {
            let body = init("ClientWriteRequest")
                .field_opt("Writes", op.writes().map(|t| tuples("ClientTupleKey", t)))
                .field_opt(
                    "Deletes",
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
        let usings = Usings {
            json: true,
            ..Usings::default()
        };
        self.program(ctx, usings, |b| {
            let model = verbatim_string(&pretty_json(&op.authorization_model().clone().into()));
            b.push_verbatim(&format!(
                "var body = JsonSerializer.Deserialize<ClientWriteAuthorizationModelRequest>({});",
                model
            ));
            self.call(b, OperationKind::WriteAuthorizationModel, false);
        })
    }
}
