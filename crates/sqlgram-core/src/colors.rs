//! ANSI color codes for terminal output.
//!
//! - Cyan: production names
//! - Yellow: keywords and punctuation
//! - Green: identifiers and string literals
//! - Dim: spans, structural nodes
//! - Red: error markers

/// ANSI palette for parse tree dumps and grammar listings.
///
/// Standard 16-color codes only, so it reads on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub production: &'static str,
    pub keyword: &'static str,
    pub name: &'static str,
    pub dim: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        production: "\x1b[36m",
        keyword: "\x1b[33m",
        name: "\x1b[32m",
        dim: "\x1b[2m",
        error: "\x1b[31m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        production: "",
        keyword: "",
        name: "",
        dim: "",
        error: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
