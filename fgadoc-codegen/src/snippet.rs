//! The per-language backend trait and its output.

use fgadoc_ir::{
    Check, Expand, ListObjects, ListUsers, OperationKind, OperationModel, Read, ReadChanges, Write,
    WriteAuthorizationModel,
};

use crate::FormattingProfile;

/// Generated source text, tagged for the syntax highlighter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Registry id of the language.
    pub language: &'static str,
    /// Grammar name for the highlighter.
    pub highlight: &'static str,
    /// The source text. Always ends with a newline.
    pub code: String,
}

/// Per-snippet inputs shared by every operation.
#[derive(Debug, Clone, Copy)]
pub struct SnippetContext<'a> {
    pub store_id: &'a str,
    /// Pinned model id, when the operation accepts one and the author supplied it.
    pub authorization_model_id: Option<&'a str>,
    pub profile: &'a FormattingProfile,
}

impl<'a> SnippetContext<'a> {
    pub fn new(model: &'a OperationModel, profile: &'a FormattingProfile) -> Self {
        Self {
            store_id: model.store_id(),
            authorization_model_id: model.authorization_model_id(),
            profile,
        }
    }
}

/// A language backend: one generator per operation kind.
///
/// None of the operation methods has a default, so adding a kind or a
/// backend without covering the whole matrix fails to compile.
pub trait SnippetLanguage {
    /// How the SDK spells the call for `kind` (e.g. `fgaClient.listObjects`).
    fn method_name(&self, kind: OperationKind) -> String;

    fn check(&self, op: &Check, ctx: &SnippetContext<'_>) -> String;

    fn expand(&self, op: &Expand, ctx: &SnippetContext<'_>) -> String;

    fn list_objects(&self, op: &ListObjects, ctx: &SnippetContext<'_>) -> String;

    fn list_users(&self, op: &ListUsers, ctx: &SnippetContext<'_>) -> String;

    fn read_changes(&self, op: &ReadChanges, ctx: &SnippetContext<'_>) -> String;

    fn read(&self, op: &Read, ctx: &SnippetContext<'_>) -> String;

    fn write(&self, op: &Write, ctx: &SnippetContext<'_>) -> String;

    fn write_authorization_model(
        &self,
        op: &WriteAuthorizationModel,
        ctx: &SnippetContext<'_>,
    ) -> String;

    /// Dispatch on the model's kind.
    fn render(&self, model: &OperationModel, profile: &FormattingProfile) -> String {
        let ctx = SnippetContext::new(model, profile);
        match model {
            OperationModel::Check(op) => self.check(op, &ctx),
            OperationModel::Expand(op) => self.expand(op, &ctx),
            OperationModel::ListObjects(op) => self.list_objects(op, &ctx),
            OperationModel::ListUsers(op) => self.list_users(op, &ctx),
            OperationModel::ReadChanges(op) => self.read_changes(op, &ctx),
            OperationModel::Read(op) => self.read(op, &ctx),
            OperationModel::Write(op) => self.write(op, &ctx),
            OperationModel::WriteAuthorizationModel(op) => {
                self.write_authorization_model(op, &ctx)
            }
        }
    }
}
