//! Python snippets for the `openfga_sdk` package, using the asyncio client.

use std::collections::{BTreeMap, BTreeSet};

use fgadoc_codegen::builder::{CodeBuilder, Composite, Expr};
use fgadoc_codegen::literal::{LiteralSyntax, map_literal};
use fgadoc_codegen::{FormattingProfile, SnippetContext, SnippetLanguage};
use fgadoc_core::{quote, to_snake_case};
use fgadoc_ir::{
    Check, Context, Expand, ListObjects, ListUsers, OperationKind, Read, ReadChanges, TupleKey,
    Write, WriteAuthorizationModel,
};

use crate::common::{API_URL_ENV, REQUIRES_API_URL, pretty_json};

const CLIENT_MODULE: &str = "openfga_sdk.client";
const MODELS_MODULE: &str = "openfga_sdk.client.models";
const SDK_MODULE: &str = "openfga_sdk";

/// Backend for the Python SDK.
#[derive(Debug, Clone, Copy, Default)]
pub struct Python;

struct Syntax<'a>(&'a FormattingProfile);

impl Syntax<'_> {
    /// Keyword-argument constructor call: `Name(a=1, b=2)`.
    fn call(&self, name: &str) -> Composite {
        Composite::new(format!("{}(", name), ")").assign("=")
    }

    fn tuples(&self, tuples: &[TupleKey]) -> Expr {
        Composite::new("[", "]")
            .items(tuples.iter().map(|tuple| {
                self.call("ClientTuple")
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
        "None".into()
    }

    fn bool(&self, value: bool) -> String {
        if value { "True" } else { "False" }.into()
    }

    fn map(&self) -> Composite {
        Composite::new("{", "}")
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

/// Import set, printed isort-style: standard library first, then the SDK.
#[derive(Debug, Default)]
struct Imports {
    stdlib: BTreeSet<&'static str>,
    from: BTreeMap<&'static str, BTreeSet<&'static str>>,
}

impl Imports {
    fn new() -> Self {
        let mut imports = Self::default();
        imports.stdlib.extend(["asyncio", "os"]);
        imports
            .from_import(CLIENT_MODULE, "ClientConfiguration")
            .from_import(CLIENT_MODULE, "OpenFgaClient");
        imports
    }

    fn stdlib(&mut self, module: &'static str) -> &mut Self {
        self.stdlib.insert(module);
        self
    }

    fn from_import(&mut self, module: &'static str, name: &'static str) -> &mut Self {
        self.from.entry(module).or_default().insert(name);
        self
    }

    fn push(&self, builder: &mut CodeBuilder) {
        for module in &self.stdlib {
            builder.push_line(&format!("import {}", module));
        }
        builder.push_blank();
        for (module, names) in &self.from {
            let names: Vec<&str> = names.iter().copied().collect();
            builder.push_line(&format!("from {} import {}", module, names.join(", ")));
        }
    }
}

impl Python {
    fn program(
        &self,
        ctx: &SnippetContext<'_>,
        imports: &Imports,
        body: impl FnOnce(&mut CodeBuilder, &Syntax<'_>),
    ) -> String {
        let syntax = Syntax(ctx.profile);
        let config = syntax
            .call("ClientConfiguration")
            .field(
                "api_url",
                format!("os.environ[{}]", syntax.string(API_URL_ENV)),
            )
            .field("store_id", syntax.string(ctx.store_id))
            .field_opt(
                "authorization_model_id",
                ctx.authorization_model_id.map(|id| syntax.string(id)),
            );

        let mut builder = CodeBuilder::for_profile(ctx.profile);
        builder.push_comment(REQUIRES_API_URL);
        imports.push(&mut builder);
        builder
            .push_blank()
            .push_blank()
            .push_line("async def main():")
            .push_indent()
            .push_expr("configuration = ", &config.into(), "")
            .push_line("async with OpenFgaClient(configuration) as fga_client:")
            .push_indent();
        body(&mut builder, &syntax);
        builder
            .push_dedent()
            .push_dedent()
            .push_blank()
            .push_blank()
            .push_line("asyncio.run(main())");
        builder.build()
    }

    /// `response = await fga_client.<kind>(<args>)` and the print line.
    fn call(&self, builder: &mut CodeBuilder, kind: OperationKind, args: &str) {
        builder
            .push_line(&format!(
                "response = await {}({})",
                self.method_name(kind),
                args
            ))
            .push_line("print(response)");
    }

    /// Pagination options, as the dict the client methods accept.
    fn options(
        &self,
        builder: &mut CodeBuilder,
        syntax: &Syntax<'_>,
        page_size: Option<u32>,
        continuation_token: Option<&str>,
    ) -> bool {
        let options = Composite::new("{", "}")
            .field_opt(
                syntax.string("page_size"),
                page_size.map(|size| size.to_string()),
            )
            .field_opt(
                syntax.string("continuation_token"),
                continuation_token.map(|token| syntax.string(token)),
            );
        if options.is_empty() {
            return false;
        }
        builder.push_expr("options = ", &options.into(), "");
        true
    }
}

impl SnippetLanguage for Python {
    fn method_name(&self, kind: OperationKind) -> String {
        format!("fga_client.{}", to_snake_case(kind.as_str()))
    }

    fn check(&self, op: &Check, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::new();
        imports.from_import(MODELS_MODULE, "ClientCheckRequest");
        if op.contextual_tuples().is_some() {
            imports.from_import(MODELS_MODULE, "ClientTuple");
        }
        self.program(ctx, &imports, |b, s| {
            let tuple = op.tuple_key();
            let body = s
                .call("ClientCheckRequest")
                .field("user", s.string(tuple.user()))
                .field("relation", s.string(tuple.relation()))
                .field("object", s.string(tuple.object()))
                .field_opt("contextual_tuples", op.contextual_tuples().map(|t| s.tuples(t)))
                .field_opt("context", op.context().map(|c| s.context(c)));
            b.push_expr("body = ", &body.into(), "");
            self.call(b, OperationKind::Check, "body");
        })
    }

    fn expand(&self, op: &Expand, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::new();
        imports.from_import(MODELS_MODULE, "ClientExpandRequest");
        if op.contextual_tuples().is_some() {
            imports.from_import(MODELS_MODULE, "ClientTuple");
        }
        self.program(ctx, &imports, |b, s| {
            let body = s
                .call("ClientExpandRequest")
                .field("relation", s.string(op.relation()))
                .field("object", s.string(op.object()))
                .field_opt("contextual_tuples", op.contextual_tuples().map(|t| s.tuples(t)));
            b.push_expr("body = ", &body.into(), "");
            self.call(b, OperationKind::Expand, "body");
        })
    }

    fn list_objects(&self, op: &ListObjects, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::new();
        imports.from_import(MODELS_MODULE, "ClientListObjectsRequest");
        if op.contextual_tuples().is_some() {
            imports.from_import(MODELS_MODULE, "ClientTuple");
        }
        self.program(ctx, &imports, |b, s| {
            let body = s
                .call("ClientListObjectsRequest")
                .field("user", s.string(op.user()))
                .field("relation", s.string(op.relation()))
                .field("type", s.string(op.object_type()))
                .field_opt("contextual_tuples", op.contextual_tuples().map(|t| s.tuples(t)))
                .field_opt("context", op.context().map(|c| s.context(c)));
            b.push_expr("body = ", &body.into(), "");
            self.call(b, OperationKind::ListObjects, "body");
        })
    }

    fn list_users(&self, op: &ListUsers, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::new();
        imports
            .from_import(MODELS_MODULE, "ClientListUsersRequest")
            .from_import(SDK_MODULE, "FgaObject")
            .from_import(SDK_MODULE, "UserTypeFilter");
        if op.contextual_tuples().is_some() {
            imports.from_import(MODELS_MODULE, "ClientTuple");
        }
        self.program(ctx, &imports, |b, s| {
            let object = s
                .call("FgaObject")
                .field("type", s.string(op.object().object_type()))
                .field("id", s.string(op.object().id()));
            let filters = Composite::new("[", "]").items(op.user_filters().iter().map(|filter| {
                s.call("UserTypeFilter")
                    .field("type", s.string(filter.user_type()))
                    .field_opt("relation", filter.relation().map(|r| s.string(r)))
            }));
            let body = s
                .call("ClientListUsersRequest")
                .field("object", object)
                .field("relation", s.string(op.relation()))
                .field("user_filters", filters)
                .field_opt("contextual_tuples", op.contextual_tuples().map(|t| s.tuples(t)))
                .field_opt("context", op.context().map(|c| s.context(c)));
            b.push_expr("body = ", &body.into(), "");
            self.call(b, OperationKind::ListUsers, "body");
        })
    }

    fn read_changes(&self, op: &ReadChanges, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::new();
        imports.from_import(MODELS_MODULE, "ClientReadChangesRequest");
        self.program(ctx, &imports, |b, s| {
            let body = s
                .call("ClientReadChangesRequest")
                .field_opt("type", op.object_type().map(|t| s.string(t)));
            b.push_expr("body = ", &body.into(), "");
            let options = self.options(b, s, op.page_size(), op.continuation_token());
            let args = if options { "body, options" } else { "body" };
            self.call(b, OperationKind::ReadChanges, args);
        })
    }

    fn read(&self, op: &Read, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::new();
        imports.from_import(SDK_MODULE, "ReadRequestTupleKey");
        self.program(ctx, &imports, |b, s| {
            let mut body = s.call("ReadRequestTupleKey");
            if let Some(key) = op.tuple_key() {
                body = body
                    .field_opt("user", key.user().map(|u| s.string(u)))
                    .field_opt("relation", key.relation().map(|r| s.string(r)))
                    .field("object", s.string(key.object()));
            }
            b.push_expr("body = ", &body.into(), "");
            let options = self.options(b, s, op.page_size(), op.continuation_token());
            let args = if options { "body, options" } else { "body" };
            self.call(b, OperationKind::Read, args);
        })
    }

    fn write(&self, op: &Write, ctx: &SnippetContext<'_>) -> String {
        let mut imports = Imports::new();
        imports
            .from_import(MODELS_MODULE, "ClientWriteRequest")
            .from_import(MODELS_MODULE, "ClientTuple");
        self.program(ctx, &imports, |b, s| {
            let body = s
                .call("ClientWriteRequest")
                .field_opt("writes", op.writes().map(|t| s.tuples(t)))
                .field_opt("deletes", op.deletes().map(|t| s.tuples(t)));
            b.push_expr("body = ", &body.into(), "");
            self.call(b, OperationKind::Write, "body");
        })
    }

    fn write_authorization_model(
        &self,
        op: &WriteAuthorizationModel,
        ctx: &SnippetContext<'_>,
    ) -> String {
        let mut imports = Imports::new();
        imports.stdlib("json");
        self.program(ctx, &imports, |b, _| {
            let model = pretty_json(&op.authorization_model().clone().into())
                .replace('\\', "\\\\")
                .replace("\"\"\"", "\\\"\\\"\\\"");
            b.push_line("body = json.loads(");
            b.push_indent();
            b.push_line("\"\"\"");
            b.push_verbatim(&model);
            b.push_line("\"\"\"");
            b.push_dedent();
            b.push_line(")");
            self.call(b, OperationKind::WriteAuthorizationModel, "body");
        })
    }
}
