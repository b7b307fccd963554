//! Helpers shared by the unit tests.

use sqlgram_core::{Token, lex};

use crate::engine::{Expectation, ParseError, SyntaxError, Tracer};
use crate::parser::Parser;
use crate::tree::{DumpOptions, ParseNode, ParseTree};

/// Compact S-expression of `source` parsed from `root` with the SQLite grammar.
pub fn sexp(root: &str, source: &str) -> String {
    let tokens = lex(source);
    let tree = Parser::sqlite()
        .with_root(root)
        .parse(&tokens)
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"));
    tree.dump(DumpOptions {
        compact: true,
        ..Default::default()
    })
}

/// Full indented dump of `source` parsed as a statement.
pub fn dump(source: &str, spans: bool) -> String {
    let tokens = lex(source);
    let tree = parse(&tokens);
    tree.dump(DumpOptions {
        spans,
        ..Default::default()
    })
}

pub fn parse(tokens: &[Token]) -> ParseTree<'_> {
    Parser::sqlite()
        .parse(tokens)
        .unwrap_or_else(|e| panic!("unexpected error: {e}"))
}

/// The syntax error `parser` reports for `source`.
pub fn syntax_error_with(parser: &Parser<'_>, source: &str) -> SyntaxError {
    match parser.parse(&lex(source)) {
        Ok(_) => panic!("{source:?} should not parse"),
        Err(ParseError::Syntax(err)) => err,
        Err(err) => panic!("expected a syntax error for {source:?}, got {err}"),
    }
}

pub fn syntax_error(source: &str) -> SyntaxError {
    syntax_error_with(&Parser::sqlite(), source)
}

/// Asserts that the children of every composite node tile its range.
pub fn assert_tiled(node: &ParseNode) {
    if node.children.is_empty() {
        return;
    }
    let mut at = node.span.start;
    for child in &node.children {
        assert_eq!(child.span.start, at, "gap or overlap before {:?}", child.kind);
        assert!(!child.span.is_empty(), "zero-width node {:?}", child.kind);
        assert_tiled(child);
        at = child.span.end;
    }
    assert_eq!(at, node.span.end, "children of {:?} stop short", node.kind);
}

/// Event recorded by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Enter(&'static str),
    Candidate(&'static str, usize),
    Commit(usize),
    Match(String),
    Failure(Option<Expectation>),
    Backtrack(usize),
}

/// Tracer that keeps the events tests care about.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn failed(&self, expected: Expectation) -> bool {
        self.events.contains(&Event::Failure(Some(expected)))
    }

    pub fn entered(&self, production: &str) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, Event::Enter(name) if *name == production))
    }
}

impl Tracer for EventLog {
    fn trace_enter(&mut self, production: &'static str, _position: usize) {
        self.events.push(Event::Enter(production));
    }

    fn trace_exit(&mut self, _production: &'static str, _matched: bool, _position: usize) {}

    fn trace_candidate(&mut self, production: &'static str, branch: usize, _position: usize) {
        self.events.push(Event::Candidate(production, branch));
    }

    fn trace_commit(&mut self, position: usize) {
        self.events.push(Event::Commit(position));
    }

    fn trace_match(&mut self, token: &Token, _position: usize) {
        self.events.push(Event::Match(token.text.clone()));
    }

    fn trace_failure(&mut self, expected: Option<Expectation>, _position: usize) {
        self.events.push(Event::Failure(expected));
    }

    fn trace_backtrack(&mut self, position: usize) {
        self.events.push(Event::Backtrack(position));
    }

    fn trace_breakpoint(&mut self, _stack: &[&'static str], _position: usize) {}
}
