use std::collections::HashSet;

use super::{Language, LanguageDescriptor};
use crate::{CodegenError, RegistryError};

/// Ordered, immutable set of languages offered on a page.
///
/// Presentation order matters (it is the tab order, and the first entry is
/// the default selection); lookup is always by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    languages: Vec<LanguageDescriptor>,
}

impl LanguageRegistry {
    /// Build a registry from descriptors. Ids must be unique.
    pub fn new(languages: Vec<LanguageDescriptor>) -> Result<Self, RegistryError> {
        if languages.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for language in &languages {
            if !seen.insert(language.id) {
                return Err(RegistryError::DuplicateId(language.id.to_string()));
            }
        }
        Ok(Self { languages })
    }

    /// Every built-in language, in presentation order.
    pub fn builtin() -> Self {
        Self {
            languages: Language::ALL.iter().map(Language::descriptor).collect(),
        }
    }

    /// Descriptors in presentation order.
    pub fn list(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    pub fn get(&self, id: &str) -> Result<&LanguageDescriptor, CodegenError> {
        self.languages
            .iter()
            .find(|language| language.id == id)
            .ok_or_else(|| CodegenError::UnknownLanguage { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }

    /// The fallback selection: the first registered language.
    pub fn default_language(&self) -> &LanguageDescriptor {
        &self.languages[0]
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.iter().map(|language| language.id)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
