//! Suggest what may follow a prefix of the input.

use std::fmt::Write;
use std::ops::Range;

use serde::Serialize;
use sqlgram_lib::{Colors, Completion, Expectation, Token, lex, token_index_at};

use super::input::SqlInput;
use super::run_common::{self, ParserConfig};

pub struct CompleteArgs {
    pub input: SqlInput,
    pub config: ParserConfig,
    pub caret: Option<usize>,
    pub offset: Option<usize>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: CompleteArgs) {
    let sql = run_common::load_or_exit(&args.input);
    let tokens = lex(&sql.text);
    let caret = resolve_caret(&tokens, args.caret, args.offset);

    let completion = args
        .config
        .parser()
        .complete(&tokens, caret)
        .unwrap_or_else(|e| run_common::exit_with(e));

    if args.json {
        let report = CompletionReport {
            completion: &completion,
            replace: replaced_range(&tokens, caret),
        };
        let json = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| run_common::exit_with(e));
        println!("{}", json);
        return;
    }

    print!("{}", format_completion(&completion, Colors::new(args.color)));
}

#[derive(Serialize)]
struct CompletionReport<'a> {
    #[serde(flatten)]
    completion: &'a Completion,
    /// Source bytes a chosen suggestion replaces.
    replace: Option<Range<usize>>,
}

/// Byte range of the token at `caret`, if the caret sits on one.
pub fn replaced_range(tokens: &[Token], caret: usize) -> Option<Range<usize>> {
    let span = tokens.get(caret)?.span;
    Some(span.start().into()..span.end().into())
}

/// Token index to complete at: `--caret` as given, `--offset` mapped to the
/// token it touches, otherwise the end of input.
pub fn resolve_caret(tokens: &[Token], caret: Option<usize>, offset: Option<usize>) -> usize {
    match (caret, offset) {
        (Some(caret), _) => caret,
        (None, Some(offset)) => token_index_at(tokens, offset),
        (None, None) => tokens.len(),
    }
}

/// One suggestion per line, then the production stacks the caret is in.
pub fn format_completion(completion: &Completion, c: Colors) -> String {
    let mut out = String::new();
    for suggestion in &completion.suggestions {
        let _ = match suggestion {
            Expectation::Keyword(text) => writeln!(out, "{}{text}{}", c.keyword, c.reset),
            Expectation::Label(text) => writeln!(out, "{}<{text}>{}", c.name, c.reset),
            Expectation::EndOfInput => writeln!(out, "{}<end of input>{}", c.dim, c.reset),
        };
    }
    for stack in &completion.contexts {
        let _ = writeln!(out, "{}in {}{}", c.dim, stack.join(" > "), c.reset);
    }
    out
}
