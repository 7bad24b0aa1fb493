mod bake;
mod check;
mod completions;
mod languages;
mod render;
mod select;

use std::path::{Path, PathBuf};

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fgadoc_content::{Content, ValidatedSnippet};
use languages::LanguagesCommand;
use render::RenderCommand;
use select::SelectCommand;

/// Extension trait for exiting on content errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for fgadoc_content::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Parse and validate a content file, exiting with every report on failure.
pub(crate) fn load_snippets(path: &Path) -> (Content, Vec<ValidatedSnippet>) {
    let content = Content::from_file(path).unwrap_or_exit();
    match content.validate() {
        Ok(snippets) => (content, snippets),
        Err(errors) => {
            let count = errors.len();
            for e in errors {
                eprintln!("{:?}", miette::Report::new(*e));
            }
            eprintln!(
                "{} invalid snippet{} in {}",
                count,
                if count == 1 { "" } else { "s" },
                path.display()
            );
            std::process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(name = "fgadoc")]
#[command(version)]
#[command(about = "Render OpenFGA API snippets for documentation pages")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// File the selected language is persisted in
    #[arg(long, global = true, default_value = ".fgadoc/state.toml")]
    pub state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Languages(cmd) => cmd.run(&self.state),
            Commands::Select(cmd) => cmd.run(&self.state),
            Commands::Check(cmd) => cmd.run(),
            Commands::Render(cmd) => cmd.run(&self.state),
            Commands::Bake(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List supported languages, marking the selected one
    Languages(LanguagesCommand),

    /// Persist the selected language
    Select(SelectCommand),

    /// Validate a content file without rendering
    Check(CheckCommand),

    /// Render every snippet of a content file as markdown
    Render(RenderCommand),

    /// Write every snippet in every language to disk
    Bake(BakeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
