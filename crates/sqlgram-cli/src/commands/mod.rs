pub mod check;
pub mod complete;
pub mod grammar;
pub mod input;
pub mod run_common;
pub mod trace;
pub mod tree;

#[cfg(test)]
mod grammar_tests;
#[cfg(test)]
mod input_tests;
