#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for sqlgram.
//!
//! - [`token`]: token kinds, tokens and token sets
//! - [`lexer`]: reference SQLite lexer producing the token slice the matcher runs on
//! - [`grammar`]: the declarative term model and the built-in SQLite table
//! - [`colors`]: ANSI palette shared by the text renderers

pub mod colors;
pub mod grammar;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod token_tests;

pub use colors::Colors;
pub use grammar::{Grammar, GrammarError, Production, Sequence, Term, sqlite_grammar};
pub use lexer::{lex, token_index_at};
pub use token::{Token, TokenKind, TokenSet};
