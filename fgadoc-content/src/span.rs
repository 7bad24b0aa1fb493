//! Locating things in content source text for error labels.

use miette::SourceSpan;

/// Spans of every quoted occurrence of `name`, in source order.
///
/// Snippet names are always string values, so matching the quoted form
/// skips unrelated occurrences inside keys or longer strings.
pub(crate) fn find_name_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    if name.is_empty() {
        return Vec::new();
    }
    let mut spans = Vec::new();
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        spans.extend(
            src.match_indices(&pattern)
                .map(|(pos, _)| SourceSpan::from((pos + 1, name.len()))),
        );
    }
    spans.sort_by_key(|span| span.offset());
    spans
}

/// Byte offset of a 1-based line and column, as reported by serde_json.
///
/// Column 0 means the error sits before the first character of the line.
pub(crate) fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let column = column.saturating_sub(1).min(text.len());
            return Some(offset + column);
        }
        offset += text.len();
    }
    Some(src.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_name_spans_quoted_only() {
        let src = "name = \"check\"\n# check\nname = 'check'\n";
        let spans = find_name_spans(src, "check");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].offset(), 8);
        assert_eq!(spans[1].offset(), src.rfind("check").unwrap());
    }

    #[test]
    fn test_find_name_spans_empty_name() {
        assert!(find_name_spans("name = \"\"", "").is_empty());
    }

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n}\n";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(4));
        assert_eq!(offset_of(src, 3, 0), Some(src.find('}').unwrap()));
        assert_eq!(offset_of(src, 0, 0), None);
        assert_eq!(offset_of(src, 9, 1), Some(src.len()));
    }
}
