//! Bake operation - one file per snippet and language.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use fgadoc_content::ValidatedSnippet;
use fgadoc_core::File;
use fgadoc_snippets::SnippetGenerator;

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Directory receiving one subdirectory per language.
    pub output_dir: &'a Path,
    /// Only these language ids; every registered language when empty.
    pub languages: &'a [String],
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// A generated snippet file.
#[derive(Debug)]
pub struct BakedFile {
    pub path: PathBuf,
    pub language: &'static str,
    pub content: String,
}

#[derive(Debug)]
pub struct BakeReport {
    pub files: Vec<BakedFile>,
    /// Number of files written, zero for a dry run.
    pub written: usize,
}

/// Generate `<output>/<language>/<name>.<ext>` for every snippet and language.
pub fn bake(
    snippets: &[ValidatedSnippet],
    generator: &SnippetGenerator,
    opts: BakeOptions,
) -> Result<BakeReport> {
    let languages: Vec<&'static str> = if opts.languages.is_empty() {
        generator.registry().ids().collect()
    } else {
        opts.languages
            .iter()
            .map(|id| generator.registry().get(id).map(|language| language.id))
            .collect::<std::result::Result<_, _>>()?
    };

    let mut files = Vec::new();
    for &language in &languages {
        for snippet in snippets {
            let generated = generator
                .generate(&snippet.model, language)
                .wrap_err_with(|| format!("Failed to generate '{}'", snippet.name))?;
            let extension = generator.registry().get(language)?.profile.extension;
            files.push(BakedFile {
                path: opts
                    .output_dir
                    .join(language)
                    .join(format!("{}.{}", snippet.name, extension)),
                language,
                content: generated.code,
            });
        }
    }

    let mut written = 0;
    if !opts.dry_run {
        for baked in &files {
            File::new(&baked.path, baked.content.as_str())
                .write()
                .wrap_err_with(|| format!("Failed to write {}", baked.path.display()))?;
            written += 1;
        }
        tracing::info!(files = written, output = %opts.output_dir.display(), "baked snippets");
    }

    Ok(BakeReport { files, written })
}

#[cfg(test)]
mod tests {
    use fgadoc_codegen::LanguageRegistry;
    use fgadoc_ir::{OperationModel, ReadInput};
    use tempfile::TempDir;

    use super::*;

    fn snippets() -> Vec<ValidatedSnippet> {
        let model = OperationModel::read(ReadInput {
            store_id: "01H".into(),
            ..Default::default()
        })
        .unwrap();
        vec![ValidatedSnippet {
            name: "read-all".into(),
            model,
        }]
    }

    #[test]
    fn test_bake_writes_every_language() {
        let temp = TempDir::new().unwrap();
        let generator = SnippetGenerator::new(LanguageRegistry::builtin());

        let report = bake(
            &snippets(),
            &generator,
            BakeOptions {
                output_dir: temp.path(),
                languages: &[],
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(report.files.len(), 7);
        assert_eq!(report.written, 7);
        let python = temp.path().join("python").join("read-all.py");
        let content = std::fs::read_to_string(&python).unwrap();
        assert!(content.contains("fga_client.read("));
        assert!(temp.path().join("dotnet").join("read-all.cs").exists());
        assert!(temp.path().join("curl").join("read-all.sh").exists());
    }

    #[test]
    fn test_bake_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let generator = SnippetGenerator::new(LanguageRegistry::builtin());
        let languages = ["go".to_string()];

        let report = bake(
            &snippets(),
            &generator,
            BakeOptions {
                output_dir: temp.path(),
                languages: &languages,
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(report.written, 0);
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].path, temp.path().join("go").join("read-all.go"));
        assert!(!report.files[0].path.exists());
    }

    #[test]
    fn test_bake_unknown_language() {
        let temp = TempDir::new().unwrap();
        let generator = SnippetGenerator::new(LanguageRegistry::builtin());
        let languages = ["ruby".to_string()];

        let result = bake(
            &snippets(),
            &generator,
            BakeOptions {
                output_dir: temp.path(),
                languages: &languages,
                dry_run: false,
            },
        );

        assert!(result.is_err());
    }
}
