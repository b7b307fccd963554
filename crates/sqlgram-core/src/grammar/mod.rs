//! Grammar tables: the term model, the builder vocabulary tables are written
//! in, structural validation, and the built-in SQLite grammar.

mod builder;
mod display;
mod sqlite;
mod types;
mod validate;


pub use builder::{
    GrammarBuilder, alt, breakpoint, id, kw, list, list_by, lit, one_of, opt, opt_n, prod, repeat,
    seq, string, tokens, var,
};
pub use sqlite::{SQL_STMT, TYPE_NAME_WORDS, build_sqlite_grammar, sqlite_grammar};
pub use types::{Grammar, Production, Repetition, Sequence, Term};
pub use validate::GrammarError;
