//! Input loading and error reporting shared by the statement commands.

use std::fmt::Display;

use sqlgram_lib::{Diagnostics, MatchLimits, ParseError, Parser, Token};

use super::input::{LoadedSql, SqlInput};

/// Root and limits a command builds its parser from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub root: Option<String>,
    pub limits: MatchLimits,
}

impl ParserConfig {
    pub fn parser(&self) -> Parser<'static> {
        let parser = Parser::sqlite().with_limits(self.limits);
        match &self.root {
            Some(root) => parser.with_root(root.as_str()),
            None => parser,
        }
    }
}

pub fn load_or_exit(input: &SqlInput) -> LoadedSql {
    input.load().unwrap_or_else(|e| exit_with(e))
}

pub fn exit_with(msg: impl Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1);
}

/// Diagnostics for a failed parse, or `None` when `err` is not a syntax error.
pub fn syntax_diagnostics(err: &ParseError, tokens: &[Token]) -> Option<Diagnostics> {
    let syntax = err.as_syntax()?;
    let mut diagnostics = Diagnostics::new();
    diagnostics.report_syntax_error(syntax, tokens);
    Some(diagnostics)
}

pub fn render_diagnostics(diagnostics: &Diagnostics, sql: &LoadedSql, color: bool) -> String {
    let printer = diagnostics.printer().source(&sql.text).colored(color);
    match &sql.name {
        Some(name) => printer.path(name).render(),
        None => printer.render(),
    }
}

/// Print `err` against the source and exit 1.
pub fn exit_with_parse_error(err: &ParseError, tokens: &[Token], sql: &LoadedSql, color: bool) -> ! {
    match syntax_diagnostics(err, tokens) {
        Some(diagnostics) => {
            eprintln!("{}", render_diagnostics(&diagnostics, sql, color));
            std::process::exit(1);
        }
        None => exit_with(err),
    }
}
