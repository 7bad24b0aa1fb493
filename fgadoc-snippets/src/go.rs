//! Go snippets for `github.com/openfga/go-sdk`.
//!
//! The client package is dot-imported, as the SDK documentation does. The
//! root package is imported as `openfga` only when a snippet needs one of its
//! types or pointer helpers, since unused imports do not compile.

use fgadoc_codegen::builder::{CodeBuilder, Composite, Expr};
use fgadoc_codegen::literal::{LiteralSyntax, map_literal};
use fgadoc_codegen::{SnippetContext, SnippetLanguage};
use fgadoc_core::{QuoteStyle, quote, to_pascal_case};
use fgadoc_ir::{
    Check, Context, Expand, ListObjects, ListUsers, OperationKind, Read, ReadChanges, TupleKey,
    Write, WriteAuthorizationModel,
};

use crate::common::{API_URL_ENV, REQUIRES_API_URL, pretty_json};

const CLIENT_PACKAGE: &str = "github.com/openfga/go-sdk/client";
const SDK_PACKAGE: &str = "github.com/openfga/go-sdk";

/// Backend for the Go SDK.
#[derive(Debug, Clone, Copy, Default)]
pub struct Go;

struct Syntax;

impl LiteralSyntax for Syntax {
    fn string(&self, value: &str) -> String {
        string(value)
    }

    fn null(&self) -> String {
        "nil".into()
    }

    fn map(&self) -> Composite {
        Composite::new("map[string]interface{}{", "}").aligned()
    }

    fn empty_map(&self) -> String {
        "map[string]interface{}{}".into()
    }

    fn list(&self) -> Composite {
        Composite::new("[]interface{}{", "}")
    }

    fn empty_list(&self) -> String {
        "[]interface{}{}".into()
    }
}

fn string(value: &str) -> String {
    quote(value, QuoteStyle::Double)
}

fn ptr_string(value: &str) -> String {
    format!("openfga.PtrString({})", string(value))
}

fn strukt(name: &str) -> Composite {
    Composite::new(format!("{}{{", name), "}").aligned()
}

fn tuples(slice_type: &str, tuples: &[TupleKey]) -> Expr {
    Composite::new(format!("[]{}{{", slice_type), "}")
        .items(tuples.iter().map(|tuple| {
            strukt("")
                .field("User", string(tuple.user()))
                .field("Relation", string(tuple.relation()))
                .field("Object", string(tuple.object()))
        }))
        .into()
}

fn contextual_tuples(op_tuples: Option<&[TupleKey]>) -> Option<Expr> {
    op_tuples.map(|t| tuples("ClientContextualTupleKey", t))
}

fn context(context: Option<&Context>) -> Option<Expr> {
    context.map(|c| Expr::wrap("&", map_literal(c, &Syntax), ""))
}

/// Wrap text in a raw string literal. Backticks cannot appear inside one, so
/// they are spliced in as interpreted strings.
fn raw_string(value: &str) -> String {
    format!("`{}`", value.replace('`', "` + \"`\" + `"))
}

/// Imports beyond the ones every snippet uses.
#[derive(Debug, Clone, Copy, Default)]
struct Imports {
    json: bool,
    sdk: bool,
}

impl Go {
    fn program(
        &self,
        ctx: &SnippetContext<'_>,
        imports: Imports,
        body: impl FnOnce(&mut CodeBuilder),
    ) -> String {
        let config = strukt("&ClientConfiguration")
            .field("ApiUrl", format!("os.Getenv({})", string(API_URL_ENV)))
            .field("StoreId", string(ctx.store_id))
            .field_opt("AuthorizationModelId", ctx.authorization_model_id.map(string));

        let mut stdlib = vec!["context", "fmt", "os"];
        if imports.json {
            stdlib.push("encoding/json");
        }
        stdlib.sort_unstable();

        let mut builder = CodeBuilder::for_profile(ctx.profile);
        builder
            .push_comment(REQUIRES_API_URL)
            .push_line("package main")
            .push_blank()
            .push_block("import (", ")", |b| {
                for package in &stdlib {
                    b.push_line(&string(package));
                }
                b.push_blank();
                if imports.sdk {
                    b.push_line(&format!("openfga {}", string(SDK_PACKAGE)));
                }
                b.push_line(&format!(". {}", string(CLIENT_PACKAGE)));
            })
            .push_blank()
            .push_block("func main() {", "}", |b| {
                b.push_expr("fgaClient, err := NewSdkClient(", &config.into(), ")");
                handle_error(b);
                b.push_blank();
                body(b);
                b.push_blank().push_line("fmt.Printf(\"%+v\\n\", data)");
            });
        builder.build()
    }

    /// `data, err := fgaClient.<Kind>(ctx).Body(body)[.Options(options)].Execute()`
    fn call(&self, builder: &mut CodeBuilder, kind: OperationKind, options: bool) {
        let options = if options { ".Options(options)" } else { "" };
        builder.push_blank().push_line(&format!(
            "data, err := {}(context.Background()).Body(body){}.Execute()",
            self.method_name(kind),
            options
        ));
        handle_error(builder);
    }

    fn options(
        &self,
        builder: &mut CodeBuilder,
        name: &str,
        page_size: Option<u32>,
        continuation_token: Option<&str>,
    ) -> bool {
        let options = strukt(name)
            .field_opt(
                "PageSize",
                page_size.map(|size| format!("openfga.PtrInt32({})", size)),
            )
            .field_opt("ContinuationToken", continuation_token.map(ptr_string));
        if options.is_empty() {
            return false;
        }
        builder.push_expr("options := ", &options.into(), "");
        true
    }
}

fn handle_error(builder: &mut CodeBuilder) {
    builder.push_block("if err != nil {", "}", |b| {
        b.push_comment(".. Handle error");
    });
}

impl SnippetLanguage for Go {
    fn method_name(&self, kind: OperationKind) -> String {
        format!("fgaClient.{}", to_pascal_case(kind.as_str()))
    }

    fn check(&self, op: &Check, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, Imports::default(), |b| {
            let tuple = op.tuple_key();
            let body = strukt("ClientCheckRequest")
                .field("User", string(tuple.user()))
                .field("Relation", string(tuple.relation()))
                .field("Object", string(tuple.object()))
                .field_opt("ContextualTuples", contextual_tuples(op.contextual_tuples()))
                .field_opt("Context", context(op.context()));
            b.push_expr("body := ", &body.into(), "");
            self.call(b, OperationKind::Check, false);
        })
    }

    fn expand(&self, op: &Expand, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, Imports::default(), |b| {
            let body = strukt("ClientExpandRequest")
                .field("Relation", string(op.relation()))
                .field("Object", string(op.object()))
                .field_opt("ContextualTuples", contextual_tuples(op.contextual_tuples()));
            b.push_expr("body := ", &body.into(), "");
            self.call(b, OperationKind::Expand, false);
        })
    }

    fn list_objects(&self, op: &ListObjects, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, Imports::default(), |b| {
            let body = strukt("ClientListObjectsRequest")
                .field("User", string(op.user()))
                .field("Relation", string(op.relation()))
                .field("Type", string(op.object_type()))
                .field_opt("ContextualTuples", contextual_tuples(op.contextual_tuples()))
                .field_opt("Context", context(op.context()));
            b.push_expr("body := ", &body.into(), "");
            self.call(b, OperationKind::ListObjects, false);
        })
    }

    fn list_users(&self, op: &ListUsers, ctx: &SnippetContext<'_>) -> String {
        let imports = Imports {
            sdk: true,
            ..Imports::default()
        };
        self.program(ctx, imports, |b| {
            let object = strukt("openfga.FgaObject")
                .field("Type", string(op.object().object_type()))
                .field("Id", string(op.object().id()));
            let filters = Composite::new("[]openfga.UserTypeFilter{", "}").items(
                op.user_filters().iter().map(|filter| {
                    strukt("")
                        .field("Type", string(filter.user_type()))
                        .field_opt("Relation", filter.relation().map(ptr_string))
                }),
            );
            let body = strukt("ClientListUsersRequest")
                .field("Object", object)
                .field("Relation", string(op.relation()))
                .field("UserFilters", filters)
                .field_opt("ContextualTuples", contextual_tuples(op.contextual_tuples()))
                .field_opt("Context", context(op.context()));
            b.push_expr("body := ", &body.into(), "");
            self.call(b, OperationKind::ListUsers, false);
        })
    }

    fn read_changes(&self, op: &ReadChanges, ctx: &SnippetContext<'_>) -> String {
        let imports = Imports {
            sdk: op.page_size().is_some() || op.continuation_token().is_some(),
            ..Imports::default()
        };
        self.program(ctx, imports, |b| {
            let body = strukt("ClientReadChangesRequest")
                .field_opt("Type", op.object_type().map(string));
            b.push_expr("body := ", &body.into(), "");
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
        let imports = Imports {
            sdk: op.tuple_key().is_some()
                || op.page_size().is_some()
                || op.continuation_token().is_some(),
            ..Imports::default()
        };
        self.program(ctx, imports, |b| {
            let mut body = strukt("ClientReadRequest");
            if let Some(key) = op.tuple_key() {
                body = body
                    .field_opt("User", key.user().map(ptr_string))
                    .field_opt("Relation", key.relation().map(ptr_string))
                    .field("Object", ptr_string(key.object()));
            }
            b.push_expr("body := ", &body.into(), "");
            let options = self.options(
                b,
                "ClientReadOptions",
                op.page_size(),
                op.continuation_token(),
            );
            self.call(b, OperationKind::Read, options);
        })
    }

    fn write(&self, op: &Write, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, Imports::default(), |b| {
            let body = strukt("ClientWriteRequest")
                .field_opt("Writes", op.writes().map(|t| tuples("ClientTupleKey", t)))
                .field_opt(
                    "Deletes",
                    op.deletes()
                        .map(|t| tuples("ClientTupleKeyWithoutCondition", t)),
                );
            b.push_expr("body := ", &body.into(), "");
            self.call(b, OperationKind::Write, false);
        })
    }

    fn write_authorization_model(
        &self,
        op: &WriteAuthorizationModel,
        ctx: &SnippetContext<'_>,
    ) -> String {
        let imports = Imports {
            json: true,
            ..Imports::default()
        };
        self.program(ctx, imports, |b| {
            let model = raw_string(&pretty_json(&op.authorization_model().clone().into()));
            let mut lines = model.lines();
            let first = lines.next().unwrap_or_default();
            let rest: Vec<&str> = lines.collect();

            b.push_line("var body ClientWriteAuthorizationModelRequest");
            match rest.split_last() {
                Some((last, middle)) => {
                    b.push_line(&format!("if err := json.Unmarshal([]byte({}", first));
                    for line in middle {
                        b.push_verbatim(line);
                    }
                    b.push_verbatim(&format!("{}), &body); err != nil {{", last));
                }
                None => {
                    b.push_line(&format!(
                        "if err := json.Unmarshal([]byte({}), &body); err != nil {{",
                        first
                    ));
                }
            }
            b.push_indent().push_comment(".. Handle error").push_dedent().push_line("}");
            self.call(b, OperationKind::WriteAuthorizationModel, false);
        })
    }
}
