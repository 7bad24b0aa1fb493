use fgadoc_codegen::{CodegenError, Language, LanguageRegistry, Snippet, SnippetLanguage};
use fgadoc_ir::OperationModel;

use crate::{Cli, Curl, DotNet, Go, Java, JavaScript, Python};

/// The backend for a language.
///
/// Exhaustive over [`Language`]: a language without a backend does not compile.
pub fn backend(language: Language) -> &'static dyn SnippetLanguage {
    match language {
        Language::JavaScript => &JavaScript,
        Language::Go => &Go,
        Language::DotNet => &DotNet,
        Language::Python => &Python,
        Language::Java => &Java,
        Language::Cli => &Cli,
        Language::Curl => &Curl,
    }
}

/// Turns operation models into snippets for the languages of a registry.
///
/// Generation is pure: the same model and language always produce the same
/// text.
#[derive(Debug, Clone, Default)]
pub struct SnippetGenerator {
    registry: LanguageRegistry,
}

impl SnippetGenerator {
    pub fn new(registry: LanguageRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Generate the snippet for `model` in the language registered as `language_id`.
    pub fn generate(
        &self,
        model: &OperationModel,
        language_id: &str,
    ) -> Result<Snippet, CodegenError> {
        let descriptor = self.registry.get(language_id)?;
        let Some(language) = Language::from_id(descriptor.id) else {
            tracing::error!(
                language = descriptor.id,
                operation = %model.kind(),
                "registry lists a language without a snippet backend"
            );
            return Err(CodegenError::UnsupportedOperationForLanguage {
                operation: model.kind(),
                language: descriptor.id.to_string(),
            });
        };

        tracing::debug!(language = descriptor.id, operation = %model.kind(), "generating snippet");
        let code = backend(language).render(model, &descriptor.profile);
        Ok(Snippet {
            language: descriptor.id,
            highlight: descriptor.profile.highlight,
            code,
        })
    }
}
