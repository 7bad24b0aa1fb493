//! Indentation configuration for code generation.

/// Indentation style for generated code.
///
/// Only the widths the supported languages use are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Two spaces.
    TwoSpaces,
    /// Four spaces.
    FourSpaces,
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Python, Java, C#).
    pub const FOUR: Self = Self::FourSpaces;

    /// 2-space indentation (JavaScript, shell).
    pub const TWO: Self = Self::TwoSpaces;

    /// Tab indentation (Go).
    pub const GO: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoSpaces => "  ",
            Self::FourSpaces => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}
