//! Log of failed leaf attempts.
//!
//! Every failing leaf appends `(token index, expectation)`. Error assembly
//! and completion both read slices of this log: a hard failure looks at the
//! entries recorded since its sequence started, completion looks at the
//! entries recorded at the caret.

use indexmap::IndexSet;

use super::error::Expectation;

#[derive(Debug, Default)]
pub(crate) struct FailureLog {
    entries: Vec<(usize, Expectation)>,
}

impl FailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current length, to scope a later query to entries recorded after it.
    #[inline]
    pub fn mark(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn record(&mut self, position: usize, expected: Expectation) {
        self.entries.push((position, expected));
    }

    /// Furthest position among entries since `mark`.
    pub fn furthest_since(&self, mark: usize) -> Option<usize> {
        self.entries[mark..].iter().map(|(pos, _)| *pos).max()
    }

    /// Deduplicated expectations recorded at `position` since `mark`.
    pub fn expected_at(&self, mark: usize, position: usize) -> IndexSet<Expectation> {
        self.entries[mark..]
            .iter()
            .filter(|(pos, _)| *pos == position)
            .map(|(_, e)| *e)
            .collect()
    }

    /// Replace entries since `mark` with a single label at `start`.
    ///
    /// Applies only when nothing since `mark` got past `start`.
    pub fn collapse(&mut self, mark: usize, start: usize, label: &'static str) -> bool {
        if self.furthest_since(mark).is_some_and(|pos| pos > start) {
            return false;
        }
        self.entries.truncate(mark);
        self.entries.push((start, Expectation::Label(label)));
        true
    }
}
