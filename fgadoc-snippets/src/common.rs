//! Pieces shared by several backends.

use serde_json::Value;

/// First line of every SDK snippet.
pub(crate) const REQUIRES_API_URL: &str = "Requires the FGA_API_URL environment variable";

/// Environment variable the SDK clients read the API URL from.
pub(crate) const API_URL_ENV: &str = "FGA_API_URL";

/// Whether `name` can be written as a bare key or identifier
/// (`[A-Za-z_$][A-Za-z0-9_$]*`).
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Pretty-printed JSON with two-space indentation, keys in insertion order.
pub(crate) fn pretty_json(value: &Value) -> String {
    // Serializing a `Value` cannot fail: its keys are always strings.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Compact JSON, keys in insertion order.
pub(crate) fn compact_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
