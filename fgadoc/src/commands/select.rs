use std::{path::Path, rc::Rc};

use clap::Args;
use eyre::{Result, bail};
use fgadoc_codegen::LanguageRegistry;
use fgadoc_viewer::{DurableStorage, FileStorage, LanguageSelectionStore, SELECTED_LANGUAGE_KEY};

#[derive(Args)]
pub struct SelectCommand {
    /// Language id, e.g. python
    pub language: String,
}

impl SelectCommand {
    pub fn run(&self, state: &Path) -> Result<()> {
        let storage = Rc::new(FileStorage::new(state));
        let store = LanguageSelectionStore::new(LanguageRegistry::builtin(), Rc::clone(&storage));
        store.select(&self.language)?;

        // The store only logs persistence failures; here persisting is the point.
        let persisted = storage.read(SELECTED_LANGUAGE_KEY)?;
        if persisted.as_deref() != Some(store.selected()) {
            bail!("failed to persist selection to {}", state.display());
        }

        let language = store.selected_descriptor();
        println!("✓ Selected {} ({})", language.label, language.id);
        Ok(())
    }
}
