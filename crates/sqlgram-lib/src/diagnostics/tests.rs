use rowan::TextRange;
use sqlgram_core::lex;

use super::*;
use crate::engine::ParseError;
use crate::parser::Parser;

fn diagnose(source: &str) -> Diagnostics {
    let tokens = lex(source);
    let mut diagnostics = Diagnostics::new();
    match Parser::sqlite().parse(&tokens) {
        Err(ParseError::Syntax(err)) => diagnostics.report_syntax_error(&err, &tokens),
        other => panic!("expected a syntax error for {source:?}, got {other:?}"),
    }
    diagnostics
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::EmptyStatement,
            TextRange::new(0.into(), 1.into()),
        )
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.warning_count(), 1);
    insta::assert_snapshot!(diagnostics.render(";"), @r"
    warning: empty statement
      |
    1 | ;
      | ^ empty statement
    ");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::UnexpectedToken,
            TextRange::new(0.into(), 5.into()),
        )
        .message("expected statement")
        .emit();

    let message = diagnostics.iter().next().unwrap();
    assert_eq!(message.message(), "expected statement");
    assert!(message.is_error());
}

#[test]
fn unexpected_end() {
    let diagnostics = diagnose("CREATE TABLE t (x INT, ");
    let message = diagnostics.iter().next().unwrap();

    assert_eq!(message.kind(), DiagnosticKind::UnexpectedEnd);
    insta::assert_snapshot!(
        message,
        @"error at 22..22: expected table constraint or column definition, found end of input"
    );
}

#[test]
fn trailing_input() {
    let source = "VACUUM x";
    let diagnostics = diagnose(source);
    let message = diagnostics.iter().next().unwrap();

    assert_eq!(message.kind(), DiagnosticKind::TrailingInput);
    assert_eq!(message.range(), TextRange::new(7.into(), 8.into()));
    insta::assert_snapshot!(diagnostics.render(source), @r"
    error: expected end of input, found 'x'
      |
    1 | VACUUM x
      |        ^ unexpected input after statement
    ");
}

#[test]
fn unexpected_token() {
    let source = "SELECT FROM t";
    let diagnostics = diagnose(source);
    let message = diagnostics.iter().next().unwrap();

    assert_eq!(message.kind(), DiagnosticKind::UnexpectedToken);
    assert_eq!(message.range(), TextRange::new(7.into(), 11.into()));
    assert!(message.message().ends_with("found 'FROM'"));
    assert!(diagnostics.render(source).contains("^^^^ unexpected token"));
}

#[test]
fn printer_with_path() {
    let source = "DROP TABLE";
    let diagnostics = diagnose(source);
    let rendered = diagnostics.printer().source(source).path("schema.sql").render();

    assert!(rendered.contains("schema.sql"));
    assert!(rendered.contains("unexpected end of input"));
}

#[test]
fn plain_format_without_source() {
    let mut diagnostics = diagnose("VACUUM x");
    let mut more = Diagnostics::new();
    more.report(
        DiagnosticKind::EmptyStatement,
        TextRange::new(8.into(), 9.into()),
    )
    .emit();
    diagnostics.extend(more);

    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 1);
    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 7..8: expected end of input, found 'x'
    warning at 8..9: empty statement
    ");
}
