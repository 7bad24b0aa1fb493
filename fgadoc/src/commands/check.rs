use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_snippets;

#[derive(Args)]
pub struct CheckCommand {
    /// Content file (TOML, or JSON by extension)
    pub content: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (content, snippets) = load_snippets(&self.content);

        println!("✓ {} is valid\n", self.content.display());
        if let Some(title) = &content.title {
            println!("  {}\n", title);
        }

        let count = snippets.len();
        println!("  {} snippet{}:", count, if count == 1 { "" } else { "s" });
        for snippet in &snippets {
            println!("    {} ({})", snippet.name, snippet.model.kind());
        }

        let kinds: Vec<String> = content
            .kinds()
            .into_iter()
            .map(|(kind, count)| format!("{} {}", kind, count))
            .collect();
        if !kinds.is_empty() {
            println!("\n  by operation: {}", kinds.join(", "));
        }
        Ok(())
    }
}
