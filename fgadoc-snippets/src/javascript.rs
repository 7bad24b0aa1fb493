//! JavaScript snippets for the `@openfga/sdk` package.
//!
//! Snippets are ES modules with top-level `await`. Request bodies are plain
//! object literals; keys are bare where JavaScript allows it.

use fgadoc_codegen::builder::{CodeBuilder, Composite, Expr};
use fgadoc_codegen::literal::{LiteralSyntax, MapEntry, map_literal};
use fgadoc_codegen::{FormattingProfile, SnippetContext, SnippetLanguage};
use fgadoc_core::{quote, to_camel_case};
use fgadoc_ir::{
    Check, Context, Expand, ListObjects, ListUsers, OperationKind, Read, ReadChanges, TupleKey,
    Write, WriteAuthorizationModel,
};

use crate::common::{API_URL_ENV, REQUIRES_API_URL, is_identifier};

/// Backend for the JavaScript SDK.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScript;

struct Syntax<'a>(&'a FormattingProfile);

impl Syntax<'_> {
    fn key(&self, name: &str) -> String {
        if is_identifier(name) {
            name.to_string()
        } else {
            self.string(name)
        }
    }

    fn object(&self) -> Composite {
        Composite::new("{", "}")
    }

    fn tuples(&self, tuples: &[TupleKey]) -> Expr {
        Composite::new("[", "]")
            .items(tuples.iter().map(|tuple| {
                self.object()
                    .field("user", self.string(tuple.user()))
                    .field("relation", self.string(tuple.relation()))
                    .field("object", self.string(tuple.object()))
            }))
            .into()
    }

    fn context(&self, context: &Context) -> Expr {
        map_literal(context, self)
    }
}

impl LiteralSyntax for Syntax<'_> {
    fn string(&self, value: &str) -> String {
        quote(value, self.0.quote)
    }

    fn null(&self) -> String {
        "null".into()
    }

    fn map(&self) -> Composite {
        self.object()
    }

    fn map_entry(&self, key: &str, value: Expr) -> MapEntry {
        MapEntry::Field(self.key(key), value)
    }

    fn empty_map(&self) -> String {
        "{}".into()
    }

    fn list(&self) -> Composite {
        Composite::new("[", "]")
    }

    fn empty_list(&self) -> String {
        "[]".into()
    }
}

impl JavaScript {
    fn program(
        &self,
        ctx: &SnippetContext<'_>,
        body: impl FnOnce(&mut CodeBuilder, &Syntax<'_>),
    ) -> String {
        let syntax = Syntax(ctx.profile);
        let config = syntax
            .object()
            .field("apiUrl", format!("process.env.{}", API_URL_ENV))
            .field("storeId", syntax.string(ctx.store_id))
            .field_opt(
                "authorizationModelId",
                ctx.authorization_model_id.map(|id| syntax.string(id)),
            );

        let mut builder = CodeBuilder::for_profile(ctx.profile);
        builder
            .push_comment(REQUIRES_API_URL)
            .push_line(&format!(
                "import {{ OpenFgaClient }} from {};",
                syntax.string("@openfga/sdk")
            ))
            .push_blank()
            .push_expr("const fgaClient = new OpenFgaClient(", &config.into(), ");")
            .push_blank();
        body(&mut builder, &syntax);
        builder.build()
    }

    /// `const response = await fgaClient.<kind>(<args>);` and the log line.
    fn call(
        &self,
        builder: &mut CodeBuilder,
        kind: OperationKind,
        body: Option<Expr>,
        options: bool,
    ) {
        let method = self.method_name(kind);
        let expr = match body {
            Some(body) if options => Expr::wrap(format!("{}(", method), body, ", options)"),
            Some(body) => Expr::wrap(format!("{}(", method), body, ")"),
            None if options => Expr::inline(format!("{}({{}}, options)", method)),
            None => Expr::inline(format!("{}()", method)),
        };
        builder
            .push_expr("const response = await ", &expr, ";")
            .push_line("console.log(response);");
    }

    fn options(
        &self,
        builder: &mut CodeBuilder,
        syntax: &Syntax<'_>,
        page_size: Option<u32>,
        continuation_token: Option<&str>,
    ) -> bool {
        let options = syntax
            .object()
            .field_opt("pageSize", page_size.map(|size| size.to_string()))
            .field_opt(
                "continuationToken",
                continuation_token.map(|token| syntax.string(token)),
            );
        if options.is_empty() {
            return false;
        }
        builder.push_expr("const options = ", &options.into(), ";");
        true
    }
}

impl SnippetLanguage for JavaScript {
    fn method_name(&self, kind: OperationKind) -> String {
        format!("fgaClient.{}", to_camel_case(kind.as_str()))
    }

    fn check(&self, op: &Check, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, |b, s| {
            let tuple = op.tuple_key();
            let body = s
                .object()
                .field("user", s.string(tuple.user()))
                .field("relation", s.string(tuple.relation()))
                .field("object", s.string(tuple.object()))
                .field_opt("contextualTuples", op.contextual_tuples().map(|t| s.tuples(t)))
                .field_opt("context", op.context().map(|c| s.context(c)));
            self.call(b, OperationKind::Check, Some(body.into()), false);
        })
    }

    fn expand(&self, op: &Expand, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, |b, s| {
            let body = s
                .object()
                .field("relation", s.string(op.relation()))
                .field("object", s.string(op.object()))
                .field_opt("contextualTuples", op.contextual_tuples().map(|t| s.tuples(t)));
            self.call(b, OperationKind::Expand, Some(body.into()), false);
        })
    }

    fn list_objects(&self, op: &ListObjects, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, |b, s| {
            let body = s
                .object()
                .field("user", s.string(op.user()))
                .field("relation", s.string(op.relation()))
                .field("type", s.string(op.object_type()))
                .field_opt("contextualTuples", op.contextual_tuples().map(|t| s.tuples(t)))
                .field_opt("context", op.context().map(|c| s.context(c)));
            self.call(b, OperationKind::ListObjects, Some(body.into()), false);
        })
    }

    fn list_users(&self, op: &ListUsers, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, |b, s| {
            let object = s
                .object()
                .field("type", s.string(op.object().object_type()))
                .field("id", s.string(op.object().id()));
            let filters = Composite::new("[", "]").items(op.user_filters().iter().map(|filter| {
                s.object()
                    .field("type", s.string(filter.user_type()))
                    .field_opt("relation", filter.relation().map(|r| s.string(r)))
            }));
            let body = s
                .object()
                .field("object", object)
                .field("relation", s.string(op.relation()))
                .field("user_filters", filters)
                .field_opt("contextualTuples", op.contextual_tuples().map(|t| s.tuples(t)))
                .field_opt("context", op.context().map(|c| s.context(c)));
            self.call(b, OperationKind::ListUsers, Some(body.into()), false);
        })
    }

    fn read_changes(&self, op: &ReadChanges, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, |b, s| {
            let options = self.options(b, s, op.page_size(), op.continuation_token());
            if options {
                b.push_blank();
            }
            let body = op
                .object_type()
                .map(|t| s.object().field("type", s.string(t)).into());
            self.call(b, OperationKind::ReadChanges, body, options);
        })
    }

    fn read(&self, op: &Read, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, |b, s| {
            let options = self.options(b, s, op.page_size(), op.continuation_token());
            if options {
                b.push_blank();
            }
            let body = op.tuple_key().map(|key| {
                s.object()
                    .field_opt("user", key.user().map(|u| s.string(u)))
                    .field_opt("relation", key.relation().map(|r| s.string(r)))
                    .field("object", s.string(key.object()))
                    .into()
            });
            self.call(b, OperationKind::Read, body, options);
        })
    }

    fn write(&self, op: &Write, ctx: &SnippetContext<'_>) -> String {
        self.program(ctx, |b, s| {
            let body = s
                .object()
                .field_opt("writes", op.writes().map(|t| s.tuples(t)))
                .field_opt("deletes", op.deletes().map(|t| s.tuples(t)));
            self.call(b, OperationKind::Write, Some(body.into()), false);
        })
    }

    fn write_authorization_model(
        &self,
        op: &WriteAuthorizationModel,
        ctx: &SnippetContext<'_>,
    ) -> String {
        self.program(ctx, |b, s| {
            let model = map_literal(op.authorization_model(), s);
            self.call(b, OperationKind::WriteAuthorizationModel, Some(model), false);
        })
    }
}
