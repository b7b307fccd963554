//! Grammar matching engine.

mod cursor;
pub mod error;
mod failure;
pub mod limits;
pub(crate) mod matcher;
pub mod trace;

#[cfg(test)]
mod matcher_tests;

pub use error::{Expectation, ParseError, SyntaxError};
pub use limits::{CancelFlag, MatchLimits};
pub use trace::{LogTracer, NoopTracer, PrintTracer, Tracer, Verbosity};
