//! Matcher semantics on small hand-written grammars.

use sqlgram_core::grammar::{
    Grammar, GrammarBuilder, alt, breakpoint, id, kw, list, opt, prod, repeat, seq,
};
use sqlgram_core::token::TokenKind::*;
use sqlgram_core::{Colors, lex};

use super::{CancelFlag, Expectation, MatchLimits, ParseError, PrintTracer, Verbosity};
use crate::parser::Parser;
use crate::test_utils::{Event, EventLog, syntax_error_with};

fn select_grammar(commit: usize) -> Grammar {
    GrammarBuilder::new("toy", "stmt")
        .production(
            "stmt",
            seq(
                1,
                [alt([
                    seq(commit, [kw(Select), id("column name")]),
                    seq(1, [kw(Select), kw(Star)]),
                ])],
            ),
        )
        .build()
        .unwrap()
}

#[test]
fn committed_candidate_fails_hard() {
    let grammar = select_grammar(1);
    let err = syntax_error_with(&Parser::new(&grammar), "SELECT *");

    assert_eq!(err.position, 1);
    assert_eq!(err.expected, vec![Expectation::Label("column name")]);
    assert_eq!(err.found.as_deref(), Some("*"));
    insta::assert_snapshot!(err, @"expected column name, found '*'");

    let tokens = lex("SELECT *");
    let err = Parser::new(&grammar).parse(&tokens).unwrap_err();
    insta::assert_snapshot!(err, @"syntax error at token 1: expected column name, found '*'");
}

#[test]
fn uncommitted_candidate_backtracks() {
    let grammar = select_grammar(2);
    let tokens = lex("SELECT *");
    let tree = Parser::new(&grammar).parse(&tokens).unwrap();

    let branch = tree.root().descendants().find_map(|n| n.branch());
    assert_eq!(branch, Some(1));
}

#[test]
fn zero_width_terms_do_not_commit() {
    let grammar = GrammarBuilder::new("toy", "stmt")
        .production(
            "stmt",
            seq(
                1,
                [alt([
                    seq(1, [opt([kw(With)]), kw(Select), kw(Star)]),
                    seq(1, [opt([kw(With)]), kw(Values)]),
                ])],
            ),
        )
        .build()
        .unwrap();
    let tokens = lex("VALUES");
    let tree = Parser::new(&grammar).parse(&tokens).unwrap();

    assert_eq!(tree.root().descendants().find_map(|n| n.branch()), Some(1));
}

fn pair_grammar() -> Grammar {
    GrammarBuilder::new("toy", "pair")
        .production(
            "pair",
            seq(
                1,
                [alt([
                    seq(2, [id("first"), opt([kw(Star)])]),
                    seq(3, [id("left"), id("right"), opt([kw(Star)])]),
                    seq(3, [id("a"), id("b"), opt([kw(Star)])]),
                ])],
            ),
        )
        .build()
        .unwrap()
}

#[test]
fn longest_provisional_candidate_wins() {
    let grammar = pair_grammar();
    let parser = Parser::new(&grammar);

    let tokens = lex("x y");
    let tree = parser.parse(&tokens).unwrap();
    assert_eq!(tree.root().descendants().find_map(|n| n.branch()), Some(1));
    assert_eq!(tree.identifier("right"), Some("y"));

    let tokens = lex("x");
    let tree = parser.parse(&tokens).unwrap();
    assert_eq!(tree.root().descendants().find_map(|n| n.branch()), Some(0));
}

fn list_grammar() -> Grammar {
    GrammarBuilder::new("toy", "items")
        .production("items", seq(1, [list(Comma, 1, [id("item")])]))
        .build()
        .unwrap()
}

#[test]
fn item_after_separator_is_mandatory() {
    let grammar = list_grammar();
    let err = syntax_error_with(&Parser::new(&grammar), "a, b,");

    assert_eq!(err.position, 4);
    assert_eq!(err.expected, vec![Expectation::Label("item")]);
    assert!(err.is_at_end());
}

#[test]
fn trailing_tokens_expect_end_of_input() {
    let grammar = list_grammar();
    let err = syntax_error_with(&Parser::new(&grammar), "a b");

    assert_eq!(err.position, 1);
    insta::assert_snapshot!(err, @"expected ',' or end of input, found 'b'");
}

#[test]
fn trailing_semicolon_is_accepted() {
    let grammar = list_grammar();
    let tokens = lex("a, b;");
    let tree = Parser::new(&grammar).parse(&tokens).unwrap();

    assert_eq!(tree.span().end, 3);
}

fn labeled_grammar() -> Grammar {
    GrammarBuilder::new("toy", "stmt")
        .production("stmt", seq(1, [kw(Select), prod("item")]))
        .labeled(
            "item",
            "result",
            seq(
                1,
                [
                    breakpoint(),
                    alt([
                        seq(1, [kw(Star)]),
                        seq(3, [id("table name"), kw(Dot), id("column name")]),
                    ]),
                ],
            ),
        )
        .build()
        .unwrap()
}

#[test]
fn failure_without_progress_reports_label() {
    let grammar = labeled_grammar();
    let err = syntax_error_with(&Parser::new(&grammar), "SELECT ,");

    assert_eq!(err.position, 1);
    assert_eq!(err.expected, vec![Expectation::Label("result")]);
}

#[test]
fn failure_after_progress_keeps_leaf_expectations() {
    let grammar = labeled_grammar();
    let tokens = lex("SELECT t.");
    let err = Parser::new(&grammar).parse(&tokens).unwrap_err();

    let err = err.as_syntax().unwrap();
    assert_eq!(err.position, 3);
    assert_eq!(err.expected, vec![Expectation::Label("column name")]);
}

#[test]
fn completion_sees_through_labels() {
    let grammar = labeled_grammar();
    let tokens = lex("SELECT ");
    let completion = Parser::new(&grammar).complete(&tokens, 1).unwrap();

    assert_eq!(completion.texts(), vec!["*", "table name"]);
    assert_eq!(completion.contexts, vec![vec!["stmt", "item"]]);
}

#[test]
fn completion_ignores_breakpoints_before_caret() {
    let grammar = labeled_grammar();
    let tokens = lex("SELECT a");
    let completion = Parser::new(&grammar).complete(&tokens, 2).unwrap();

    assert_eq!(completion.caret, 2);
    assert!(completion.contexts.is_empty());
}

#[test]
fn exec_fuel_is_enforced() {
    let grammar = list_grammar();
    let tokens = lex("a, b, c, d, e, f, g");
    let parser = Parser::new(&grammar).with_limits(MatchLimits::new().exec_fuel(5));

    assert_eq!(parser.parse(&tokens).unwrap_err(), ParseError::ExecFuelExhausted);
}

fn nest_grammar() -> Grammar {
    GrammarBuilder::new("toy", "nest")
        .production(
            "nest",
            seq(1, [kw(Lp), opt([prod("nest")]), kw(Rp)]),
        )
        .build()
        .unwrap()
}

#[test]
fn recursion_limit_is_enforced() {
    let grammar = nest_grammar();
    let tokens = lex("((((((()))))))");

    let shallow = Parser::new(&grammar).with_limits(MatchLimits::new().recursion_limit(4));
    assert_eq!(
        shallow.parse(&tokens).unwrap_err(),
        ParseError::RecursionLimitExceeded
    );

    let tree = Parser::new(&grammar).parse(&tokens).unwrap();
    assert_eq!(tree.find_all("nest").len(), 7);
}

#[test]
fn cancelled_parse_stops() {
    let grammar = list_grammar();
    let tokens = lex("a, b");
    let cancel = CancelFlag::new();
    let parser = Parser::new(&grammar).with_cancel_flag(cancel.clone());

    cancel.cancel();
    assert_eq!(parser.parse(&tokens).unwrap_err(), ParseError::Cancelled);

    cancel.reset();
    assert!(parser.parse(&tokens).is_ok());
}

#[test]
fn unknown_root_is_reported() {
    let grammar = list_grammar();
    let tokens = lex("a");
    let err = Parser::new(&grammar)
        .with_root("missing")
        .parse(&tokens)
        .unwrap_err();

    assert_eq!(err, ParseError::UnknownProduction("missing".to_string()));
}

#[test]
fn repetition_stops_without_progress() {
    let grammar = GrammarBuilder::new("toy", "stars")
        .production("stars", seq(0, [repeat(0, [opt([kw(Star)])])]))
        .build()
        .unwrap();
    let parser = Parser::new(&grammar);

    let tokens = lex("* *");
    assert_eq!(parser.parse(&tokens).unwrap().span().end, 2);

    let tokens = lex("");
    assert!(parser.parse(&tokens).unwrap().span().is_empty());
}

#[test]
fn tracer_sees_commit_and_backtrack() {
    let grammar = select_grammar(2);
    let tokens = lex("SELECT *");
    let mut log = EventLog::default();
    Parser::new(&grammar).parse_with(&tokens, &mut log).unwrap();

    assert!(log.failed(Expectation::Label("column name")));
    assert!(log.events.contains(&Event::Backtrack(0)));
    assert!(log.events.contains(&Event::Candidate("stmt", 1)));
}

#[test]
fn print_tracer_output() {
    let grammar = select_grammar(1);
    let tokens = lex("SELECT a");
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    Parser::new(&grammar).parse_with(&tokens, &mut tracer).unwrap();

    insta::assert_snapshot!(tracer.finish(), @r"
    stmt @0
      ? stmt #0
      SELECT @0
      ! commit @1
      a @1
      ! commit @2
    <- stmt @2
    ");
}

#[test]
fn verbose_print_tracer_shows_failures() {
    let grammar = select_grammar(1);
    let tokens = lex("SELECT *");
    let mut tracer = PrintTracer::new(Verbosity::Verbose, Colors::OFF);
    let _ = Parser::new(&grammar).parse_with(&tokens, &mut tracer);

    insta::assert_snapshot!(tracer.finish(), @r"
    stmt @0
      ? stmt #0
      SELECT @0
      ! commit @1
      x column name @1
    <- stmt failed
    ");
}
