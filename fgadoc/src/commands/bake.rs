use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fgadoc_codegen::LanguageRegistry;
use fgadoc_snippets::SnippetGenerator;

use super::load_snippets;
use crate::ops::{self, BakeOptions};

#[derive(Args)]
pub struct BakeCommand {
    /// Content file (TOML, or JSON by extension)
    pub content: PathBuf,

    /// Output directory (defaults to ./snippets)
    #[arg(short, long, default_value = "snippets")]
    pub output: PathBuf,

    /// Only bake these languages (repeatable)
    #[arg(short, long = "language")]
    pub languages: Vec<String>,

    /// Preview generated snippets without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let (_, snippets) = load_snippets(&self.content);
        let generator = SnippetGenerator::new(LanguageRegistry::builtin());

        let report = ops::bake(
            &snippets,
            &generator,
            BakeOptions {
                output_dir: &self.output,
                languages: &self.languages,
                dry_run: self.dry_run,
            },
        )?;

        if self.dry_run {
            for file in &report.files {
                println!("── {} ──", file.path.display());
                println!("{}", file.content);
            }
            println!("── Summary ──");
            println!("{} files would be generated", report.files.len());
        } else {
            println!(
                "Generated {} files for {} snippets in {}",
                report.written,
                snippets.len(),
                self.output.display()
            );
        }
        Ok(())
    }
}
