//! sqlgram: declarative SQL grammar matching with diagnostics and completion.
//!
//! # Example
//!
//! ```
//! use sqlgram_lib::{Diagnostics, Parser, lex};
//!
//! let source = "SELECT name FROM users WHERE id = 1";
//! let tokens = lex(source);
//! let parser = Parser::sqlite();
//!
//! match parser.parse(&tokens) {
//!     Ok(tree) => assert_eq!(tree.identifier("table name"), Some("users")),
//!     Err(err) => {
//!         let mut diagnostics = Diagnostics::new();
//!         if let Some(syntax) = err.as_syntax() {
//!             diagnostics.report_syntax_error(syntax, &tokens);
//!         }
//!         eprintln!("{}", diagnostics.render(source));
//!     }
//! }
//!
//! let completion = parser.complete(&lex("SELECT * FROM "), 3).expect("within limits");
//! assert!(completion.contains("table name"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod completion;
pub mod diagnostics;
pub mod engine;
pub mod parser;
pub mod tree;

#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod test_utils;

pub use completion::Completion;
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use engine::{CancelFlag, Expectation, MatchLimits, ParseError, SyntaxError};
pub use parser::{Parser, Prefix};
pub use sqlgram_core::{Colors, Grammar, Token, TokenKind, lex, sqlite_grammar, token_index_at};
pub use tree::{DumpOptions, NodeKind, ParseNode, ParseTree, TokenRange};

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;
