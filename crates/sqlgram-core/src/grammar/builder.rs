//! Grammar construction.
//!
//! The free functions are the vocabulary grammar tables are written in:
//!
//! | function | term |
//! |---|---|
//! | `kw(k)` | `Keyword(k)` |
//! | `lit("LIKE")` | `LiteralText` |
//! | `tokens(&[..])` | `TokenSet` |
//! | `id("table name")` / `var("variable name")` | `Identifier` |
//! | `string("error message")` | `LiteralString` |
//! | `prod("expr")` | `Production` |
//! | `opt([..])` / `opt_n(n, [..])` | `Optional` |
//! | `one_of([..])` / `alt([..])` | `Alternation` |
//! | `list(..)` / `list_by(..)` / `repeat(..)` | `Repetition` |
//! | `seq(n, [..])` | `Sequence` (alternation candidates, list items) |

use indexmap::IndexMap;

use super::types::{Grammar, Production, Repetition, Sequence, Term};
use super::validate::{GrammarError, validate};
use crate::token::{TokenKind, TokenSet};

pub fn seq<const N: usize>(commit: usize, terms: [Term; N]) -> Sequence {
    Sequence::new(commit, terms.into())
}

pub fn kw(kind: TokenKind) -> Term {
    Term::Keyword(kind)
}

pub fn lit(text: &'static str) -> Term {
    Term::LiteralText(text)
}

pub fn tokens(kinds: &[TokenKind]) -> Term {
    Term::TokenSet(TokenSet::new(kinds))
}

pub fn id(description: &'static str) -> Term {
    Term::Identifier {
        description,
        allows_bind_variable: false,
    }
}

pub fn var(description: &'static str) -> Term {
    Term::Identifier {
        description,
        allows_bind_variable: true,
    }
}

pub fn string(description: &'static str) -> Term {
    Term::LiteralString { description }
}

pub fn prod(name: &'static str) -> Term {
    Term::Production(name)
}

pub fn breakpoint() -> Term {
    Term::Breakpoint
}

/// Optional group that commits only when every term matched.
pub fn opt<const N: usize>(terms: [Term; N]) -> Term {
    Term::Optional(seq(N, terms))
}

pub fn opt_n<const N: usize>(commit: usize, terms: [Term; N]) -> Term {
    Term::Optional(seq(commit, terms))
}

/// Alternation of single terms; each candidate commits once its term matched.
pub fn one_of<const N: usize>(terms: [Term; N]) -> Term {
    Term::Alternation(terms.into_iter().map(|t| seq(1, [t])).collect())
}

pub fn alt<const N: usize>(candidates: [Sequence; N]) -> Term {
    Term::Alternation(candidates.into())
}

fn repetition(separator: Option<Sequence>, min_count: usize, item: Vec<Term>) -> Term {
    let commit = item.len();
    Term::Repetition(Box::new(Repetition {
        item: Sequence::new(commit, item),
        separator,
        min_count,
    }))
}

/// Repetition separated by a single token kind.
pub fn list<const N: usize>(separator: TokenKind, min_count: usize, item: [Term; N]) -> Term {
    repetition(Some(seq(1, [kw(separator)])), min_count, item.into())
}

/// Repetition separated by an arbitrary term (an operator alternation, a production).
pub fn list_by<const N: usize>(separator: Term, min_count: usize, item: [Term; N]) -> Term {
    repetition(Some(seq(1, [separator])), min_count, item.into())
}

/// Repetition without a separator.
pub fn repeat<const N: usize>(min_count: usize, item: [Term; N]) -> Term {
    repetition(None, min_count, item.into())
}

/// Collects productions in definition order, then validates them as a whole.
#[derive(Debug)]
pub struct GrammarBuilder {
    name: &'static str,
    root: &'static str,
    productions: IndexMap<&'static str, Production>,
    duplicates: Vec<&'static str>,
}

impl GrammarBuilder {
    pub fn new(name: &'static str, root: &'static str) -> Self {
        Self {
            name,
            root,
            productions: IndexMap::new(),
            duplicates: Vec::new(),
        }
    }

    pub fn production(self, name: &'static str, body: Sequence) -> Self {
        self.insert(name, None, body)
    }

    /// Production with a diagnostic label ("expression", "column definition").
    pub fn labeled(self, name: &'static str, label: &'static str, body: Sequence) -> Self {
        self.insert(name, Some(label), body)
    }

    fn insert(mut self, name: &'static str, label: Option<&'static str>, body: Sequence) -> Self {
        let production = Production { name, label, body };
        if self.productions.insert(name, production).is_some() {
            self.duplicates.push(name);
        }
        self
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        if let Some(name) = self.duplicates.first() {
            return Err(GrammarError::DuplicateProduction(name.to_string()));
        }
        let grammar = Grammar {
            name: self.name,
            root: self.root,
            productions: self.productions,
        };
        validate(&grammar)?;
        Ok(grammar)
    }
}
