//! Structural checks run once when a grammar is built.
//!
//! A grammar that passes is closed (every reference resolves) and every
//! sequence's commit threshold fits inside it, so the matcher never has to
//! handle a malformed table at parse time.

use super::types::{Grammar, Sequence, Term};

/// Static defect in a grammar table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("production `{0}` is defined more than once")]
    DuplicateProduction(String),

    #[error("root production `{0}` is not defined")]
    UnknownRoot(String),

    #[error("{path}: reference to undefined production `{target}`")]
    UnresolvedReference { path: String, target: String },

    #[error("{path}: commit threshold {commit} exceeds sequence length {len}")]
    CommitOutOfRange {
        path: String,
        commit: usize,
        len: usize,
    },

    #[error("{path}: empty sequence")]
    EmptySequence { path: String },

    #[error("{path}: alternation has no candidates")]
    EmptyAlternation { path: String },

    #[error("{path}: token set is empty")]
    EmptyTokenSet { path: String },
}

pub(crate) fn validate(grammar: &Grammar) -> Result<(), GrammarError> {
    if !grammar.contains(grammar.root) {
        return Err(GrammarError::UnknownRoot(grammar.root.to_string()));
    }
    for production in grammar.productions() {
        let mut walker = Walker {
            grammar,
            path: vec![production.name.to_string()],
        };
        walker.sequence(&production.body)?;
    }
    Ok(())
}

struct Walker<'g> {
    grammar: &'g Grammar,
    path: Vec<String>,
}

impl Walker<'_> {
    fn path(&self) -> String {
        self.path.join("/")
    }

    fn nested<T>(
        &mut self,
        segment: String,
        f: impl FnOnce(&mut Self) -> Result<T, GrammarError>,
    ) -> Result<T, GrammarError> {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    fn sequence(&mut self, seq: &Sequence) -> Result<(), GrammarError> {
        if seq.is_empty() {
            return Err(GrammarError::EmptySequence { path: self.path() });
        }
        if seq.commit > seq.len() {
            return Err(GrammarError::CommitOutOfRange {
                path: self.path(),
                commit: seq.commit,
                len: seq.len(),
            });
        }
        for (i, term) in seq.terms.iter().enumerate() {
            self.nested(i.to_string(), |w| w.term(term))?;
        }
        Ok(())
    }

    fn term(&mut self, term: &Term) -> Result<(), GrammarError> {
        match term {
            Term::Keyword(_)
            | Term::LiteralText(_)
            | Term::Identifier { .. }
            | Term::LiteralString { .. }
            | Term::Breakpoint => Ok(()),
            Term::TokenSet(set) if set.is_empty() => {
                Err(GrammarError::EmptyTokenSet { path: self.path() })
            }
            Term::TokenSet(_) => Ok(()),
            Term::Production(target) => {
                if self.grammar.contains(target) {
                    Ok(())
                } else {
                    Err(GrammarError::UnresolvedReference {
                        path: self.path(),
                        target: target.to_string(),
                    })
                }
            }
            Term::Optional(body) => self.nested("opt".into(), |w| w.sequence(body)),
            Term::Alternation(candidates) => {
                if candidates.is_empty() {
                    return Err(GrammarError::EmptyAlternation { path: self.path() });
                }
                for (i, candidate) in candidates.iter().enumerate() {
                    self.nested(format!("alt{i}"), |w| w.sequence(candidate))?;
                }
                Ok(())
            }
            Term::Repetition(rep) => {
                self.nested("item".into(), |w| w.sequence(&rep.item))?;
                if let Some(separator) = &rep.separator {
                    self.nested("sep".into(), |w| w.sequence(separator))?;
                }
                Ok(())
            }
        }
    }
}
