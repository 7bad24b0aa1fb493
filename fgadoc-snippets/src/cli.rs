//! Shell invocations of the `fga` command line tool.
//!
//! The tool reads the API URL from `FGA_API_URL` itself, so snippets only
//! pass the store (and model) id. Every word is shell-quoted and long
//! commands are continued across lines with `\`.

use fgadoc_codegen::builder::CodeBuilder;
use fgadoc_codegen::{SnippetContext, SnippetLanguage};
use fgadoc_core::{shell_quote, to_kebab_case};
use fgadoc_ir::{
    Check, Context, Expand, ListObjects, ListUsers, OperationKind, Read, ReadChanges, TupleKey,
    Write, WriteAuthorizationModel,
};
use serde_json::Value;

use crate::common::{REQUIRES_API_URL, compact_json};

/// Backend for the `fga` CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cli;

/// One command line under construction: a command and groups of words.
/// Each group after the first goes on its own continuation line.
struct Command {
    groups: Vec<String>,
}

impl Command {
    fn new(command: &str, ctx: &SnippetContext<'_>) -> Self {
        let mut command = Self {
            groups: vec![command.to_string()],
        };
        command.flag("--store-id", ctx.store_id);
        if let Some(id) = ctx.authorization_model_id {
            command.flag("--model-id", id);
        }
        command
    }

    fn args(&mut self, args: &[&str]) -> &mut Self {
        let words: Vec<String> = args.iter().map(|arg| shell_quote(arg)).collect();
        self.groups.push(words.join(" "));
        self
    }

    fn flag(&mut self, flag: &str, value: &str) -> &mut Self {
        self.groups.push(format!("{} {}", flag, shell_quote(value)));
        self
    }

    fn flag_opt(&mut self, flag: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.flag(flag, value);
        }
        self
    }

    fn contextual_tuples(&mut self, tuples: Option<&[TupleKey]>) -> &mut Self {
        for tuple in tuples.unwrap_or_default() {
            let tuple = format!("{} {} {}", tuple.user(), tuple.relation(), tuple.object());
            self.flag("--contextual-tuple", &tuple);
        }
        self
    }

    fn context(&mut self, context: Option<&Context>) -> &mut Self {
        if let Some(context) = context {
            let value = Value::Object(context.clone().into_iter().collect());
            self.flag("--context", &compact_json(&value));
        }
        self
    }

    fn push(&self, builder: &mut CodeBuilder) {
        let last = self.groups.len() - 1;
        for (i, group) in self.groups.iter().enumerate() {
            let line = if i < last {
                format!("{} \\", group)
            } else {
                group.clone()
            };
            builder.push_line(&line);
            if i == 0 {
                builder.push_indent();
            }
        }
        builder.push_dedent();
    }
}

impl Cli {
    fn program(&self, ctx: &SnippetContext<'_>, commands: &[Command]) -> String {
        let mut builder = CodeBuilder::for_profile(ctx.profile);
        builder.push_comment(REQUIRES_API_URL);
        for command in commands {
            command.push(&mut builder);
        }
        builder.build()
    }
}

impl SnippetLanguage for Cli {
    fn method_name(&self, kind: OperationKind) -> String {
        let (group, command) = match kind {
            OperationKind::Check
            | OperationKind::Expand
            | OperationKind::ListObjects
            | OperationKind::ListUsers => ("query", to_kebab_case(kind.as_str())),
            OperationKind::ReadChanges => ("tuple", "changes".to_string()),
            OperationKind::Read => ("tuple", "read".to_string()),
            OperationKind::Write => ("tuple", "write".to_string()),
            OperationKind::WriteAuthorizationModel => ("model", "write".to_string()),
        };
        format!("fga {} {}", group, command)
    }

    fn check(&self, op: &Check, ctx: &SnippetContext<'_>) -> String {
        let tuple = op.tuple_key();
        let mut command = Command::new(&self.method_name(OperationKind::Check), ctx);
        command
            .args(&[tuple.user(), tuple.relation(), tuple.object()])
            .contextual_tuples(op.contextual_tuples())
            .context(op.context());
        self.program(ctx, &[command])
    }

    fn expand(&self, op: &Expand, ctx: &SnippetContext<'_>) -> String {
        let mut command = Command::new(&self.method_name(OperationKind::Expand), ctx);
        command
            .args(&[op.relation(), op.object()])
            .contextual_tuples(op.contextual_tuples());
        self.program(ctx, &[command])
    }

    fn list_objects(&self, op: &ListObjects, ctx: &SnippetContext<'_>) -> String {
        let mut command = Command::new(&self.method_name(OperationKind::ListObjects), ctx);
        command
            .args(&[op.user(), op.relation(), op.object_type()])
            .contextual_tuples(op.contextual_tuples())
            .context(op.context());
        self.program(ctx, &[command])
    }

    fn list_users(&self, op: &ListUsers, ctx: &SnippetContext<'_>) -> String {
        let object = format!("{}:{}", op.object().object_type(), op.object().id());
        let mut command = Command::new(&self.method_name(OperationKind::ListUsers), ctx);
        command
            .flag("--object", &object)
            .flag("--relation", op.relation());
        for filter in op.user_filters() {
            let filter = match filter.relation() {
                Some(relation) => format!("{}#{}", filter.user_type(), relation),
                None => filter.user_type().to_string(),
            };
            command.flag("--user-filter", &filter);
        }
        command
            .contextual_tuples(op.contextual_tuples())
            .context(op.context());
        self.program(ctx, &[command])
    }

    fn read_changes(&self, op: &ReadChanges, ctx: &SnippetContext<'_>) -> String {
        let mut command = Command::new(&self.method_name(OperationKind::ReadChanges), ctx);
        command
            .flag_opt("--type", op.object_type())
            .flag_opt("--continuation-token", op.continuation_token());
        self.program(ctx, &[command])
    }

    fn read(&self, op: &Read, ctx: &SnippetContext<'_>) -> String {
        let mut command = Command::new(&self.method_name(OperationKind::Read), ctx);
        if let Some(key) = op.tuple_key() {
            command
                .flag_opt("--user", key.user())
                .flag_opt("--relation", key.relation())
                .flag("--object", key.object());
        }
        command.flag_opt("--continuation-token", op.continuation_token());
        self.program(ctx, &[command])
    }

    fn write(&self, op: &Write, ctx: &SnippetContext<'_>) -> String {
        let writes = op.writes().unwrap_or_default().iter().map(|tuple| ("write", tuple));
        let deletes = op.deletes().unwrap_or_default().iter().map(|tuple| ("delete", tuple));
        let commands: Vec<Command> = writes
            .chain(deletes)
            .map(|(verb, tuple)| {
                let mut command = Command::new(&format!("fga tuple {}", verb), ctx);
                command.args(&[tuple.user(), tuple.relation(), tuple.object()]);
                command
            })
            .collect();
        self.program(ctx, &commands)
    }

    fn write_authorization_model(
        &self,
        op: &WriteAuthorizationModel,
        ctx: &SnippetContext<'_>,
    ) -> String {
        let model = compact_json(&Value::Object(op.authorization_model().clone()));
        let mut command =
            Command::new(&self.method_name(OperationKind::WriteAuthorizationModel), ctx);
        command.flag("--format", "json").args(&[model.as_str()]);
        self.program(ctx, &[command])
    }
}
