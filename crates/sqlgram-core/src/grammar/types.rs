//! Grammar type definitions.

use indexmap::IndexMap;
use serde::Serialize;

use crate::token::{TokenKind, TokenSet};

/// Grammar term variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Term {
    /// Exactly one token of this kind.
    Keyword(TokenKind),
    /// One token whose raw text equals this, ignoring ASCII case.
    LiteralText(&'static str),
    /// One token whose kind is in the set.
    TokenSet(TokenSet),
    /// An identifier, or a bind variable when `allows_bind_variable` is set.
    Identifier {
        description: &'static str,
        allows_bind_variable: bool,
    },
    /// A string literal token.
    LiteralString { description: &'static str },
    /// Recursion into a production, resolved by name at match time.
    Production(&'static str),
    /// The sequence, or nothing.
    Optional(Sequence),
    /// Candidates tried in declaration order.
    Alternation(Vec<Sequence>),
    /// `item (separator item)*`, at least `min_count` items.
    Repetition(Box<Repetition>),
    /// Zero-width marker recording matcher state for completion.
    Breakpoint,
}

/// Ordered terms with a commit threshold.
///
/// Once `commit` terms have matched (and consumed input), a failure of any
/// later term is a syntax error rather than a reason to backtrack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequence {
    pub terms: Vec<Term>,
    pub commit: usize,
}

impl Sequence {
    pub fn new(commit: usize, terms: Vec<Term>) -> Self {
        Self { terms, commit }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repetition {
    pub item: Sequence,
    pub separator: Option<Sequence>,
    pub min_count: usize,
}

/// Named rule of the grammar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Production {
    pub name: &'static str,
    /// Summary used in diagnostics when the production fails without progress.
    pub label: Option<&'static str>,
    pub body: Sequence,
}

/// Validated, immutable set of productions.
///
/// Only [`GrammarBuilder::build`](super::GrammarBuilder::build) creates one, so
/// every `Production` reference inside resolves.
#[derive(Debug, Clone, Serialize)]
pub struct Grammar {
    pub(crate) name: &'static str,
    pub(crate) root: &'static str,
    /// Productions, preserving definition order.
    pub(crate) productions: IndexMap<&'static str, Production>,
}

impl Grammar {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Default root production.
    pub fn root(&self) -> &'static str {
        self.root
    }

    pub fn get(&self, name: &str) -> Option<&Production> {
        self.productions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.productions.contains_key(name)
    }

    pub fn productions(&self) -> impl Iterator<Item = &Production> {
        self.productions.values()
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Serialize the whole table as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
