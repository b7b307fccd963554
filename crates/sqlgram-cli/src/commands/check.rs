use sqlgram_lib::diagnostics::DiagnosticKind;
use sqlgram_lib::{Diagnostics, ParseError, Parser, Token, TokenKind, lex};

use super::input::SqlInput;
use super::run_common::{self, ParserConfig};

pub struct CheckArgs {
    pub input: SqlInput,
    pub config: ParserConfig,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let sql = run_common::load_or_exit(&args.input);
    let tokens = lex(&sql.text);
    let parser = args.config.parser();

    let diagnostics = check_script(&parser, &tokens).unwrap_or_else(|e| run_common::exit_with(e));

    if !diagnostics.is_empty() {
        eprintln!(
            "{}",
            run_common::render_diagnostics(&diagnostics, &sql, args.color)
        );
    }
    if diagnostics.has_errors() {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Check `;`-separated statements until the first one that fails.
///
/// Stray semicolons are reported as warnings. Resource and cancellation
/// errors abort the whole check.
pub fn check_script(parser: &Parser<'_>, tokens: &[Token]) -> Result<Diagnostics, ParseError> {
    let mut diagnostics = Diagnostics::new();
    let mut start = 0;

    while let Some(first) = tokens.get(start) {
        if first.kind == TokenKind::Semi {
            diagnostics
                .report(DiagnosticKind::EmptyStatement, first.span)
                .emit();
            start += 1;
            continue;
        }

        let statement = &tokens[start..];
        let prefix = match parser.parse_prefix(statement) {
            Ok(prefix) => prefix,
            Err(ParseError::Syntax(err)) => {
                diagnostics.report_syntax_error(&err, statement);
                break;
            }
            Err(e) => return Err(e),
        };

        let end = start + prefix.consumed;
        tracing::debug!(start, end, "statement");
        match tokens.get(end) {
            None => break,
            Some(t) if t.kind == TokenKind::Semi => start = end + 1,
            Some(_) => {
                // Reparse to require end of input, which records what could have continued the statement.
                if let Err(err) = parser.parse(statement) {
                    let Some(syntax) = err.as_syntax() else {
                        return Err(err);
                    };
                    diagnostics.report_syntax_error(syntax, statement);
                }
                break;
            }
        }
    }

    Ok(diagnostics)
}
