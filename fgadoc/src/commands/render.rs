use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use fgadoc_codegen::LanguageRegistry;
use fgadoc_viewer::{FileStorage, Page};

use super::load_snippets;

#[derive(Args)]
pub struct RenderCommand {
    /// Content file (TOML, or JSON by extension)
    pub content: PathBuf,

    /// Select this language before rendering (persisted like `fgadoc select`)
    #[arg(short, long)]
    pub language: Option<String>,
}

impl RenderCommand {
    pub fn run(&self, state: &Path) -> Result<()> {
        let (content, snippets) = load_snippets(&self.content);

        let page = Page::new(LanguageRegistry::builtin(), FileStorage::new(state));
        let viewers: Vec<_> = snippets
            .into_iter()
            .map(|snippet| (snippet.name, page.mount(snippet.model)))
            .collect();
        if let Some(language) = &self.language {
            page.store().select(language)?;
        }

        for (name, viewer) in &viewers {
            viewer
                .output()
                .wrap_err_with(|| format!("Failed to render snippet '{}'", name))?;
        }

        if let Some(title) = &content.title {
            println!("# {}\n", title);
        }
        for (name, viewer) in &viewers {
            println!("## {}\n", name);
            println!("{}", viewer.render_markdown());
        }

        for (_, viewer) in viewers {
            viewer.unmount();
        }
        Ok(())
    }
}
