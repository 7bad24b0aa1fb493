//! Rendering JSON-like values as language literals.
//!
//! Context objects and authorization models arrive as `serde_json` values.
//! Each backend describes its literal syntax once through [`LiteralSyntax`];
//! [`literal`] walks the value and produces an [`Expr`] that keeps the
//! author's key order.

use serde_json::{Number, Value};

use crate::builder::{Composite, Expr};

/// Literal syntax of a target language.
pub trait LiteralSyntax {
    /// A quoted, escaped string literal.
    fn string(&self, value: &str) -> String;

    fn null(&self) -> String;

    fn bool(&self, value: bool) -> String {
        value.to_string()
    }

    fn number(&self, value: &Number) -> String {
        value.to_string()
    }

    /// An empty composite for a non-empty map: delimiters and separator.
    fn map(&self) -> Composite;

    /// A map entry for `key`.
    fn map_entry(&self, key: &str, value: Expr) -> MapEntry {
        MapEntry::Field(self.string(key), value)
    }

    fn empty_map(&self) -> String;

    /// An empty composite for a non-empty list.
    fn list(&self) -> Composite;

    fn empty_list(&self) -> String;
}

/// How a map entry is written.
pub enum MapEntry {
    /// `key <assign> value`, with the key already formatted.
    Field(String, Expr),
    /// A self-contained item such as `Map.entry("k", v)`.
    Item(Expr),
}

/// Render a value as a literal expression.
pub fn literal(value: &Value, syntax: &dyn LiteralSyntax) -> Expr {
    match value {
        Value::Null => Expr::Inline(syntax.null()),
        Value::Bool(b) => Expr::Inline(syntax.bool(*b)),
        Value::Number(n) => Expr::Inline(syntax.number(n)),
        Value::String(s) => Expr::Inline(syntax.string(s)),
        Value::Array(items) if items.is_empty() => Expr::Inline(syntax.empty_list()),
        Value::Array(items) => syntax
            .list()
            .items(items.iter().map(|item| literal(item, syntax)))
            .into(),
        Value::Object(map) => map_literal(map.iter(), syntax),
    }
}

/// Render key/value pairs as a map literal, in iteration order.
pub fn map_literal<'a, I>(entries: I, syntax: &dyn LiteralSyntax) -> Expr
where
    I: IntoIterator<Item = (&'a String, &'a Value)>,
{
    let mut composite = syntax.map();
    let mut empty = true;
    for (key, value) in entries {
        empty = false;
        composite = match syntax.map_entry(key, literal(value, syntax)) {
            MapEntry::Field(key, value) => composite.field(key, value),
            MapEntry::Item(item) => composite.item(item),
        };
    }
    if empty {
        Expr::Inline(syntax.empty_map())
    } else {
        composite.into()
    }
}

#[cfg(test)]
mod tests {
    use fgadoc_core::{QuoteStyle, quote};
    use serde_json::json;

    use super::*;
    use crate::builder::Indent;

    struct Python;

    impl LiteralSyntax for Python {
        fn string(&self, value: &str) -> String {
            quote(value, QuoteStyle::Double)
        }

        fn null(&self) -> String {
            "None".into()
        }

        fn bool(&self, value: bool) -> String {
            if value { "True" } else { "False" }.into()
        }

        fn map(&self) -> Composite {
            Composite::new("{", "}")
        }

        fn empty_map(&self) -> String {
            "{}".into()
        }

        fn list(&self) -> Composite {
            Composite::new("[", "]")
        }

        fn empty_list(&self) -> String {
            "[]".into()
        }
    }

    struct JavaLike;

    impl LiteralSyntax for JavaLike {
        fn string(&self, value: &str) -> String {
            quote(value, QuoteStyle::Double)
        }

        fn null(&self) -> String {
            "null".into()
        }

        fn map(&self) -> Composite {
            Composite::new("Map.ofEntries(", ")").trailing_comma(false)
        }

        fn map_entry(&self, key: &str, value: Expr) -> MapEntry {
            MapEntry::Item(Expr::wrap(
                format!("Map.entry({}, ", self.string(key)),
                value,
                ")",
            ))
        }

        fn empty_map(&self) -> String {
            "Map.of()".into()
        }

        fn list(&self) -> Composite {
            Composite::new("List.of(", ")").trailing_comma(false)
        }

        fn empty_list(&self) -> String {
            "List.of()".into()
        }
    }

    #[test]
    fn test_scalars() {
        assert_eq!(literal(&json!(null), &Python), Expr::inline("None"));
        assert_eq!(literal(&json!(true), &Python), Expr::inline("True"));
        assert_eq!(literal(&json!(42), &Python), Expr::inline("42"));
        assert_eq!(literal(&json!("a\"b"), &Python), Expr::inline("\"a\\\"b\""));
        assert_eq!(literal(&json!([]), &Python), Expr::inline("[]"));
        assert_eq!(literal(&json!({}), &Python), Expr::inline("{}"));
    }

    #[test]
    fn test_nested_keeps_key_order() {
        let value = json!({"zeta": 1, "alpha": {"list": [1, "two"]}});
        let lines = literal(&value, &Python).lines(Indent::FOUR);
        assert_eq!(
            lines,
            vec![
                "{",
                "    \"zeta\": 1,",
                "    \"alpha\": {",
                "        \"list\": [",
                "            1,",
                "            \"two\",",
                "        ],",
                "    },",
                "}",
            ]
        );
    }

    #[test]
    fn test_item_entries() {
        let value = json!({"a": 1, "b": "x"});
        let lines = literal(&value, &JavaLike).lines(Indent::FOUR);
        assert_eq!(
            lines,
            vec![
                "Map.ofEntries(",
                "    Map.entry(\"a\", 1),",
                "    Map.entry(\"b\", \"x\")",
                ")",
            ]
        );
    }
}
