//! String literal quoting for generated source text.

use std::fmt::Write;

/// Delimiter used for string literals in a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// `"value"`
    #[default]
    Double,
    /// `'value'`
    Single,
}

impl QuoteStyle {
    /// The delimiter character.
    pub fn as_char(&self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }
}

/// Quote a value as a C-family string literal.
///
/// Escapes the delimiter, backslashes and control characters. The escape
/// set (`\\`, `\"`, `\'`, `\n`, `\r`, `\t`, `\uXXXX`) is understood by every
/// SDK language the generator targets.
pub fn quote(value: &str, style: QuoteStyle) -> String {
    let delim = style.as_char();
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delim);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Quote a shell word for POSIX shells.
///
/// Words made only of characters that never need quoting are returned
/// unchanged; everything else is wrapped in single quotes.
pub fn shell_quote(value: &str) -> String {
    let safe = !value.is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '#' | '@' | '%' | '+' | '=' | ',' | '.' | '/')
        });
    if safe {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "'\\''"))
    }
}

/// Percent-encode a URL query component (RFC 3986 unreserved set kept).
pub fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}
