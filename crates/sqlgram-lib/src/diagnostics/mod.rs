//! User-facing diagnostics for failed statements.
//!
//! A [`SyntaxError`] points at a token index; diagnostics point at source
//! bytes so they can be rendered against the text the tokens came from.

mod message;
mod printer;

#[cfg(test)]
mod tests;

use rowan::{TextRange, TextSize};
use sqlgram_core::Token;

pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;

use crate::engine::{Expectation, SyntaxError};

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and span.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    /// Report `err`, whose token index refers into `tokens`.
    ///
    /// An error at end of input gets an empty range just past the last token.
    pub fn report_syntax_error(&mut self, err: &SyntaxError, tokens: &[Token]) {
        let kind = if err.is_at_end() {
            DiagnosticKind::UnexpectedEnd
        } else if err.expected == [Expectation::EndOfInput] {
            DiagnosticKind::TrailingInput
        } else {
            DiagnosticKind::UnexpectedToken
        };
        let range = match tokens.get(err.position) {
            Some(token) => token.span,
            None => {
                let end = tokens.last().map_or(TextSize::from(0), |t| t.span.end());
                TextRange::empty(end)
            }
        };
        self.report(kind, range).message(err.to_string()).emit();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn printer<'s>(&self) -> DiagnosticsPrinter<'_, 's> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer().source(source).colored(colored).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Replace the kind's default message.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message.message = msg.into();
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
