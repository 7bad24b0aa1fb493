use std::rc::Rc;

use fgadoc_codegen::LanguageRegistry;
use fgadoc_ir::OperationModel;
use fgadoc_snippets::SnippetGenerator;

use crate::{DurableStorage, LanguageSelectionStore, ModelContent, SnippetViewer};

/// One page render tree: the registry, the shared selection store and the
/// snippet generator every viewer on the page uses.
#[derive(Debug, Clone)]
pub struct Page {
    store: Rc<LanguageSelectionStore>,
    generator: Rc<SnippetGenerator>,
}

impl Page {
    pub fn new(registry: LanguageRegistry, storage: impl DurableStorage + 'static) -> Self {
        let generator = Rc::new(SnippetGenerator::new(registry.clone()));
        let store = LanguageSelectionStore::new(registry, storage);
        Self { store, generator }
    }

    pub fn store(&self) -> &Rc<LanguageSelectionStore> {
        &self.store
    }

    pub fn registry(&self) -> &LanguageRegistry {
        self.store.registry()
    }

    pub fn generator(&self) -> &SnippetGenerator {
        &self.generator
    }

    /// Mount a snippet viewer for `model` on this page.
    pub fn mount(&self, model: OperationModel) -> SnippetViewer {
        tracing::debug!(operation = %model.kind(), "mounting snippet viewer");
        SnippetViewer::mount(
            ModelContent::new(model, Rc::clone(&self.generator)),
            &self.store,
        )
    }
}
