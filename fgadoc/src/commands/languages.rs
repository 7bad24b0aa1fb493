use std::path::Path;

use clap::Args;
use eyre::Result;
use fgadoc_codegen::LanguageRegistry;
use fgadoc_viewer::{FileStorage, LanguageSelectionStore};

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self, state: &Path) -> Result<()> {
        let store = LanguageSelectionStore::new(LanguageRegistry::builtin(), FileStorage::new(state));

        println!("Languages:");
        for language in store.registry().list() {
            let marker = if language.id == store.selected() { "*" } else { " " };
            println!(
                "{} {:<12} {:<12} .{}",
                marker, language.id, language.label, language.profile.extension
            );
        }
        Ok(())
    }
}
