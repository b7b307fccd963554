//! Caret completion results.

use serde::Serialize;

use crate::engine::Expectation;

/// What may follow the tokens before a caret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Token index the suggestions apply to.
    pub caret: usize,
    /// Legal continuations, in the order the matcher tried them.
    pub suggestions: Vec<Expectation>,
    /// Open productions (outermost first) at each breakpoint reached at the caret.
    pub contexts: Vec<Vec<&'static str>>,
}

impl Completion {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Suggestion texts: keyword spellings and labels.
    pub fn texts(&self) -> Vec<&'static str> {
        self.suggestions.iter().map(|e| e.text()).collect()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.suggestions.iter().any(|e| e.text() == text)
    }

    /// Keyword suggestions starting with `prefix`, ignoring ASCII case.
    ///
    /// Labels are kept since they name a role rather than a spelling.
    pub fn matching(&self, prefix: &str) -> Vec<Expectation> {
        self.suggestions
            .iter()
            .copied()
            .filter(|e| match e {
                Expectation::Keyword(text) => text
                    .get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
                Expectation::Label(_) => true,
                Expectation::EndOfInput => prefix.is_empty(),
            })
            .collect()
    }
}
