//! Errors surfaced by a parse.

use std::fmt;

use serde::Serialize;

/// A legal continuation recorded when a leaf term fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Expectation {
    /// Keyword, punctuation or literal text, in canonical spelling.
    Keyword(&'static str),
    /// Semantic description: an identifier role ("table name") or a production label.
    Label(&'static str),
    EndOfInput,
}

impl Expectation {
    pub fn text(&self) -> &'static str {
        match self {
            Expectation::Keyword(text) | Expectation::Label(text) => text,
            Expectation::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Keyword(text) => write!(f, "'{text}'"),
            Expectation::Label(text) => f.write_str(text),
            Expectation::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A committed syntax error, or the best-effort summary when nothing committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    /// Token index the error points at (`tokens.len()` for end of input).
    pub position: usize,
    /// Legal continuations at `position`, in the order they were attempted.
    pub expected: Vec<Expectation>,
    /// Raw text of the token at `position`, `None` at end of input.
    pub found: Option<String>,
}

impl SyntaxError {
    pub fn is_at_end(&self) -> bool {
        self.found.is_none()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [init @ .., last] = self.expected.as_slice() {
            f.write_str("expected ")?;
            for (i, e) in init.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{e}")?;
            }
            if !init.is_empty() {
                f.write_str(" or ")?;
            }
            write!(f, "{last}, found ")?;
        } else {
            f.write_str("unexpected ")?;
        }
        match &self.found {
            Some(text) => write!(f, "'{text}'"),
            None => f.write_str("end of input"),
        }
    }
}

/// Errors that can occur while matching.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("syntax error at token {pos}: {0}", pos = .0.position)]
    Syntax(SyntaxError),

    /// Execution fuel exhausted (too many term attempts).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("parse cancelled")]
    Cancelled,

    #[error("unknown production `{0}`")]
    UnknownProduction(String),
}

impl ParseError {
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(err) => Some(err),
            _ => None,
        }
    }
}
