//! Public entry point: parse, prefix-parse and complete token slices.

use indexmap::IndexSet;
use sqlgram_core::{Grammar, Token, TokenKind, sqlite_grammar};

use crate::Result;
use crate::completion::Completion;
use crate::engine::matcher::{Fail, Matcher};
use crate::engine::{CancelFlag, MatchLimits, NoopTracer, ParseError, Tracer};
use crate::tree::ParseTree;

/// Matches token slices against a grammar, starting from a root production.
///
/// A `Parser` holds no per-parse state; one instance can serve any number of
/// parses, from any number of threads.
#[derive(Debug, Clone)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    limits: MatchLimits,
    cancel: Option<CancelFlag>,
    root: String,
}

/// Result of [`Parser::parse_prefix`].
#[derive(Debug, Clone)]
pub struct Prefix<'t> {
    pub tree: ParseTree<'t>,
    /// Tokens matched by the root production.
    pub consumed: usize,
}

impl Parser<'static> {
    /// Parser over the built-in SQLite grammar, rooted at `sql-stmt`.
    pub fn sqlite() -> Self {
        Parser::new(sqlite_grammar())
    }
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            limits: MatchLimits::default(),
            cancel: None,
            root: grammar.root().to_string(),
        }
    }

    pub fn with_limits(mut self, limits: MatchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Start matching at `root` instead of the grammar's default root.
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Parse all of `tokens` as one root production plus an optional `;`.
    pub fn parse<'t>(&self, tokens: &'t [Token]) -> Result<ParseTree<'t>> {
        self.parse_with(tokens, &mut NoopTracer)
    }

    /// [`parse`](Self::parse), reporting every matcher step to `tracer`.
    pub fn parse_with<'t, T: Tracer>(
        &self,
        tokens: &'t [Token],
        tracer: &mut T,
    ) -> Result<ParseTree<'t>> {
        let span = tracing::debug_span!(
            "parse",
            root = %self.root,
            tokens = tokens.len(),
            fuel_used = tracing::field::Empty
        );
        let _guard = span.enter();

        let mut matcher = self.matcher(tokens, tracer);
        let result = matcher.run(&self.root);
        span.record("fuel_used", matcher.fuel_used());

        let root = result.map_err(|fail| matcher.into_error(fail))?;
        let mut end = root.span.end;
        if tokens.get(end).is_some_and(|t| t.kind == TokenKind::Semi) {
            end += 1;
        }
        if end < tokens.len() {
            tracing::debug!(position = end, "trailing input after statement");
            matcher.expect_end(end);
            return Err(ParseError::Syntax(matcher.syntax_error(0)));
        }
        Ok(ParseTree::new(root, tokens))
    }

    /// Match the root production at the start of `tokens` without requiring
    /// the rest of the input to be empty.
    pub fn parse_prefix<'t>(&self, tokens: &'t [Token]) -> Result<Prefix<'t>> {
        let mut tracer = NoopTracer;
        let mut matcher = self.matcher(tokens, &mut tracer);
        let root = matcher.run(&self.root).map_err(|fail| matcher.into_error(fail))?;
        let consumed = root.span.end;
        Ok(Prefix {
            tree: ParseTree::new(root, tokens),
            consumed,
        })
    }

    /// What may follow `tokens[..caret]`.
    ///
    /// Syntax errors in the prefix are not reported; the suggestions are
    /// whatever the matcher tried at the caret before giving up. Resource and
    /// cancellation errors still propagate.
    pub fn complete(&self, tokens: &[Token], caret: usize) -> Result<Completion> {
        let caret = caret.min(tokens.len());
        let mut tracer = NoopTracer;
        let mut matcher = self.matcher(&tokens[..caret], &mut tracer).completion_mode();

        match matcher.run(&self.root) {
            Ok(_) | Err(Fail::Soft) | Err(Fail::Abort(ParseError::Syntax(_))) => {}
            Err(Fail::Abort(err)) => return Err(err),
        }

        let suggestions: Vec<_> = matcher.log().expected_at(0, caret).into_iter().collect();
        let contexts: IndexSet<Vec<&'static str>> = matcher
            .breakpoints()
            .iter()
            .filter(|hit| hit.position == caret)
            .map(|hit| hit.stack.clone())
            .collect();
        tracing::debug!(
            caret,
            suggestions = suggestions.len(),
            contexts = contexts.len(),
            "completion"
        );

        Ok(Completion {
            caret,
            suggestions,
            contexts: contexts.into_iter().collect(),
        })
    }

    fn matcher<'t, 'r, T: Tracer>(
        &self,
        tokens: &'t [Token],
        tracer: &'r mut T,
    ) -> Matcher<'g, 't, 'r, T> {
        Matcher::new(self.grammar, tokens, self.limits, tracer).with_cancel(self.cancel.clone())
    }
}
