use std::{collections::HashSet, path::Path, str::FromStr};

use fgadoc_ir::{OperationInput, OperationKind, OperationModel};
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

const DEFAULT_FILENAME: &str = "fgadoc.toml";

/// Serialization format of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file name: `.json` is JSON, anything else TOML.
    pub fn from_filename(filename: &str) -> Self {
        let is_json = Path::new(filename)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json { Format::Json } else { Format::Toml }
    }
}

/// One named snippet: an operation input plus the name it is baked under.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnippetEntry {
    pub name: String,
    #[serde(flatten)]
    pub input: OperationInput,
}

/// A snippet whose input passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSnippet {
    pub name: String,
    pub model: OperationModel,
}

/// The snippets of one documentation page.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    /// Page title, used as the heading when rendering.
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, rename = "snippet", alias = "snippets")]
    pub snippets: Vec<SnippetEntry>,

    #[serde(skip)]
    source: SourceContext,
}

impl FromStr for Content {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl Content {
    /// Parse a content file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse content from a string with a custom filename for error reporting.
    ///
    /// The filename's extension selects the format.
    pub fn from_str_with_filename(src: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(src, filename);
        let mut content: Self = match Format::from_filename(filename) {
            Format::Toml => toml::from_str(src).map_err(|e| ctx.parse_error(e))?,
            Format::Json => serde_json::from_str(src).map_err(|e| ctx.json_error(e))?,
        };
        content.check_names(&ctx)?;
        content.source = ctx;
        Ok(content)
    }

    /// Source the content was parsed from.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Number of snippets per operation kind, in [`OperationKind::ALL`] order.
    pub fn kinds(&self) -> Vec<(OperationKind, usize)> {
        OperationKind::ALL
            .iter()
            .map(|&kind| {
                let count = self
                    .snippets
                    .iter()
                    .filter(|entry| entry.input.kind() == kind)
                    .count();
                (kind, count)
            })
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    /// Validate every snippet into an operation model.
    ///
    /// All entries are checked; on failure the errors of every invalid entry
    /// are returned in file order.
    pub fn validate(&self) -> std::result::Result<Vec<ValidatedSnippet>, Vec<Box<Error>>> {
        let mut snippets = Vec::with_capacity(self.snippets.len());
        let mut errors = Vec::new();
        for entry in &self.snippets {
            match entry.input.clone().validate() {
                Ok(model) => snippets.push(ValidatedSnippet {
                    name: entry.name.clone(),
                    model,
                }),
                Err(e) => errors.push(self.source.invalid_operation_error(&entry.name, e)),
            }
        }
        if errors.is_empty() {
            Ok(snippets)
        } else {
            Err(errors)
        }
    }

    fn check_names(&self, ctx: &SourceContext) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.snippets {
            if let Some(reason) = invalid_name_reason(&entry.name) {
                return Err(ctx.invalid_name_error(&entry.name, reason));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ctx.duplicate_name_error(&entry.name));
            }
        }
        Ok(())
    }
}

/// Names are used as file stems when baking.
/// Returns None if valid, Some(reason) if invalid
fn invalid_name_reason(name: &str) -> Option<&'static str> {
    let Some(first) = name.chars().next() else {
        return Some("names must not be empty");
    };
    if !first.is_ascii_alphanumeric() {
        return Some("names must start with a letter or number");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Some("names may not contain spaces, dots or slashes");
    }
    None
}
