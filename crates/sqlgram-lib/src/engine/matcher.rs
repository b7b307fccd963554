//! Recursive matcher with commit/backtrack semantics.
//!
//! Failures come in two strengths. A soft failure rewinds the cursor and lets
//! an enclosing alternation, optional or repetition try something else. A
//! sequence that has reached its commit threshold turns any later soft failure
//! into a hard one: a [`SyntaxError`] that propagates straight to the caller.
//!
//! Commit counting only credits terms that consumed input, so an absent
//! optional prefix never commits a statement shape on its own.

use sqlgram_core::grammar::{Grammar, Repetition, Sequence, Term};
use sqlgram_core::{Token, TokenKind};

use super::cursor::TokenCursor;
use super::error::{Expectation, ParseError, SyntaxError};
use super::failure::FailureLog;
use super::limits::{CancelFlag, MatchLimits};
use super::trace::Tracer;
use crate::tree::{NodeKind, ParseNode, TokenRange};

/// Why a term did not match.
#[derive(Debug)]
pub(crate) enum Fail {
    /// Backtrackable.
    Soft,
    /// Committed syntax error or exhausted resource; ends the parse.
    Abort(ParseError),
}

/// Production stack captured when a breakpoint is reached at end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BreakpointHit {
    pub position: usize,
    pub stack: Vec<&'static str>,
}

pub(crate) struct Matcher<'g, 't, 'r, T: Tracer> {
    grammar: &'g Grammar,
    cursor: TokenCursor<'t>,
    log: FailureLog,
    tracer: &'r mut T,
    limits: MatchLimits,
    cancel: Option<CancelFlag>,
    exec_fuel: u32,
    recursion_depth: u32,
    stack: Vec<&'static str>,
    collapse_labels: bool,
    capture_breakpoints: bool,
    breakpoints: Vec<BreakpointHit>,
}

impl<'g, 't, 'r, T: Tracer> Matcher<'g, 't, 'r, T> {
    pub fn new(
        grammar: &'g Grammar,
        tokens: &'t [Token],
        limits: MatchLimits,
        tracer: &'r mut T,
    ) -> Self {
        Self {
            grammar,
            cursor: TokenCursor::new(tokens),
            log: FailureLog::new(),
            tracer,
            limits,
            cancel: None,
            exec_fuel: limits.exec_fuel,
            recursion_depth: 0,
            stack: Vec::new(),
            collapse_labels: true,
            capture_breakpoints: false,
            breakpoints: Vec::new(),
        }
    }

    pub fn with_cancel(mut self, cancel: Option<CancelFlag>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Keep leaf-level expectations and capture breakpoints at end of input.
    pub fn completion_mode(mut self) -> Self {
        self.collapse_labels = false;
        self.capture_breakpoints = true;
        self
    }

    /// Match production `root` from the first token.
    pub fn run(&mut self, root: &str) -> Result<ParseNode, Fail> {
        self.production(root)
    }

    pub fn fuel_used(&self) -> u32 {
        self.limits.exec_fuel - self.exec_fuel
    }

    pub fn log(&self) -> &FailureLog {
        &self.log
    }

    pub fn breakpoints(&self) -> &[BreakpointHit] {
        &self.breakpoints
    }

    /// Record that input had to end at `position`.
    pub fn expect_end(&mut self, position: usize) {
        self.log.record(position, Expectation::EndOfInput);
    }

    /// Assemble the error for everything logged since `mark`: the furthest
    /// position reached and the expectations recorded there.
    pub fn syntax_error(&self, mark: usize) -> SyntaxError {
        let position = self
            .log
            .furthest_since(mark)
            .unwrap_or_else(|| self.cursor.pos());
        SyntaxError {
            position,
            expected: self.log.expected_at(mark, position).into_iter().collect(),
            found: self
                .cursor
                .tokens()
                .get(position)
                .map(|t| t.text.clone()),
        }
    }

    /// Convert a failure escaping the root into the caller-facing error.
    pub fn into_error(&self, fail: Fail) -> ParseError {
        match fail {
            Fail::Soft => ParseError::Syntax(self.syntax_error(0)),
            Fail::Abort(err) => err,
        }
    }

    fn hard_failure(&self, mark: usize) -> Fail {
        let err = self.syntax_error(mark);
        tracing::debug!(position = err.position, "committed sequence failed");
        Fail::Abort(ParseError::Syntax(err))
    }

    #[inline]
    fn charge(&mut self) -> Result<(), Fail> {
        if self.exec_fuel == 0 {
            return Err(Fail::Abort(ParseError::ExecFuelExhausted));
        }
        self.exec_fuel -= 1;
        Ok(())
    }

    #[inline]
    fn check_cancel(&self) -> Result<(), Fail> {
        match &self.cancel {
            Some(flag) if flag.is_cancelled() => {
                tracing::debug!(position = self.cursor.pos(), "parse cancelled");
                Err(Fail::Abort(ParseError::Cancelled))
            }
            _ => Ok(()),
        }
    }

    fn backtrack(&mut self, to: usize) {
        if self.cursor.pos() != to {
            self.tracer.trace_backtrack(to);
            self.cursor.reset(to);
        }
    }

    /// Push a composite node for `start..pos` unless it is zero-width.
    fn push_span(&self, out: &mut Vec<ParseNode>, kind: NodeKind, start: usize, children: Vec<ParseNode>) {
        let end = self.cursor.pos();
        if end > start {
            out.push(ParseNode::new(kind, TokenRange::new(start, end), children));
        }
    }

    fn term(&mut self, term: &Term, out: &mut Vec<ParseNode>) -> Result<(), Fail> {
        self.charge()?;
        let kind = self.cursor.kind();
        match term {
            Term::Keyword(expected) => self.leaf(
                kind == *expected,
                NodeKind::Token,
                Some(Expectation::Keyword(expected.as_str())),
                out,
            ),
            Term::LiteralText(text) => {
                let matched = self
                    .cursor
                    .peek()
                    .is_some_and(|t| t.text.eq_ignore_ascii_case(text));
                self.leaf(matched, NodeKind::Token, Some(Expectation::Keyword(*text)), out)
            }
            Term::TokenSet(set) => {
                let matched = set.contains(kind);
                if !matched {
                    let position = self.cursor.pos();
                    for member in set.iter() {
                        self.log
                            .record(position, Expectation::Keyword(member.as_str()));
                    }
                }
                self.leaf(matched, NodeKind::Token, None, out)
            }
            Term::Identifier {
                description,
                allows_bind_variable,
            } => {
                let wanted = if *allows_bind_variable {
                    TokenKind::Variable
                } else {
                    TokenKind::Id
                };
                self.leaf(
                    kind == wanted,
                    NodeKind::Identifier(*description),
                    Some(Expectation::Label(*description)),
                    out,
                )
            }
            Term::LiteralString { description } => self.leaf(
                kind == TokenKind::String,
                NodeKind::LiteralString(*description),
                Some(Expectation::Label(*description)),
                out,
            ),
            Term::Production(name) => {
                let node = self.production(name)?;
                if !node.span.is_empty() {
                    out.push(node);
                }
                Ok(())
            }
            Term::Optional(body) => self.optional(body, out),
            Term::Alternation(candidates) => self.alternation(candidates, out),
            Term::Repetition(rep) => self.repetition(rep, out),
            Term::Breakpoint => {
                self.breakpoint();
                Ok(())
            }
        }
    }

    fn leaf(
        &mut self,
        matched: bool,
        kind: NodeKind,
        expected: Option<Expectation>,
        out: &mut Vec<ParseNode>,
    ) -> Result<(), Fail> {
        let position = self.cursor.pos();
        if let Some(token) = self.cursor.peek()
            && matched
        {
            self.tracer.trace_match(token, position);
            self.cursor.bump();
            out.push(ParseNode::leaf(kind, position));
            return Ok(());
        }
        if let Some(e) = expected {
            self.log.record(position, e);
        }
        self.tracer.trace_failure(expected, position);
        Err(Fail::Soft)
    }

    /// Match `seq`, appending child nodes to `out`.
    ///
    /// Returns whether the sequence committed. On soft failure the cursor and
    /// `out` are restored.
    fn sequence(&mut self, seq: &Sequence, out: &mut Vec<ParseNode>) -> Result<bool, Fail> {
        let start = self.cursor.pos();
        let mark = self.log.mark();
        let out_len = out.len();
        let mut matched = 0;
        let mut committed = false;

        for term in &seq.terms {
            self.check_cancel()?;
            if !committed && matched >= seq.commit {
                committed = true;
                self.tracer.trace_commit(self.cursor.pos());
            }
            let before = self.cursor.pos();
            match self.term(term, out) {
                Ok(()) => {
                    if self.cursor.pos() > before {
                        matched += 1;
                    }
                }
                Err(Fail::Soft) if committed => return Err(self.hard_failure(mark)),
                Err(Fail::Soft) => {
                    out.truncate(out_len);
                    self.backtrack(start);
                    return Err(Fail::Soft);
                }
                Err(abort) => return Err(abort),
            }
        }

        if !committed && matched >= seq.commit {
            committed = true;
            self.tracer.trace_commit(self.cursor.pos());
        }
        Ok(committed)
    }

    fn production(&mut self, name: &str) -> Result<ParseNode, Fail> {
        let Some(production) = self.grammar.get(name) else {
            return Err(Fail::Abort(ParseError::UnknownProduction(name.to_string())));
        };
        if self.recursion_depth >= self.limits.recursion_limit {
            return Err(Fail::Abort(ParseError::RecursionLimitExceeded));
        }

        let start = self.cursor.pos();
        let mark = self.log.mark();
        self.recursion_depth += 1;
        self.stack.push(production.name);
        self.tracer.trace_enter(production.name, start);

        let mut children = Vec::new();
        let result = self.sequence(&production.body, &mut children);

        self.tracer
            .trace_exit(production.name, result.is_ok(), self.cursor.pos());
        self.stack.pop();
        self.recursion_depth -= 1;

        match result {
            Ok(_) => Ok(ParseNode::new(
                NodeKind::Production(production.name),
                TokenRange::new(start, self.cursor.pos()),
                children,
            )),
            Err(Fail::Soft) => {
                if self.collapse_labels
                    && let Some(label) = production.label
                {
                    self.log.collapse(mark, start, label);
                }
                Err(Fail::Soft)
            }
            Err(abort) => Err(abort),
        }
    }

    fn optional(&mut self, body: &Sequence, out: &mut Vec<ParseNode>) -> Result<(), Fail> {
        let start = self.cursor.pos();
        let mut children = Vec::new();
        match self.sequence(body, &mut children) {
            Ok(_) => {
                self.push_span(out, NodeKind::Optional, start, children);
                Ok(())
            }
            Err(Fail::Soft) => Ok(()),
            Err(abort) => Err(abort),
        }
    }

    /// First committed candidate wins. Otherwise the longest uncommitted
    /// success, earliest on ties.
    fn alternation(&mut self, candidates: &[Sequence], out: &mut Vec<ParseNode>) -> Result<(), Fail> {
        let start = self.cursor.pos();
        let owner = self.stack.last().copied().unwrap_or_default();
        let mut provisional: Option<(usize, usize, Vec<ParseNode>)> = None;

        for (branch, candidate) in candidates.iter().enumerate() {
            self.cursor.reset(start);
            self.tracer.trace_candidate(owner, branch, start);
            let mut children = Vec::new();
            match self.sequence(candidate, &mut children) {
                Ok(true) => {
                    self.push_span(out, NodeKind::Alternation { branch }, start, children);
                    return Ok(());
                }
                Ok(false) => {
                    let end = self.cursor.pos();
                    if provisional.as_ref().is_none_or(|(best, ..)| end > *best) {
                        provisional = Some((end, branch, children));
                    }
                }
                Err(Fail::Soft) => {}
                Err(abort) => return Err(abort),
            }
        }

        match provisional {
            Some((end, branch, children)) => {
                self.cursor.reset(end);
                self.push_span(out, NodeKind::Alternation { branch }, start, children);
                Ok(())
            }
            None => {
                self.backtrack(start);
                Err(Fail::Soft)
            }
        }
    }

    /// `item (separator item)*`. A matched separator makes the next item
    /// mandatory.
    fn repetition(&mut self, rep: &Repetition, out: &mut Vec<ParseNode>) -> Result<(), Fail> {
        let start = self.cursor.pos();
        let mut children = Vec::new();
        let mut count = 0;

        loop {
            self.check_cancel()?;
            self.charge()?;
            let iteration_start = self.cursor.pos();
            let children_len = children.len();

            let mut separator_mark = None;
            if count > 0
                && let Some(separator) = &rep.separator
            {
                let mark = self.log.mark();
                let mut separator_children = Vec::new();
                match self.sequence(separator, &mut separator_children) {
                    Ok(_) => self.push_span(
                        &mut children,
                        NodeKind::Separator,
                        iteration_start,
                        separator_children,
                    ),
                    Err(Fail::Soft) => break,
                    Err(abort) => return Err(abort),
                }
                separator_mark = Some(mark);
            }

            let item_start = self.cursor.pos();
            let mut item_children = Vec::new();
            match self.sequence(&rep.item, &mut item_children) {
                Ok(_) if self.cursor.pos() == iteration_start => {
                    children.truncate(children_len);
                    break;
                }
                Ok(_) => {
                    self.push_span(&mut children, NodeKind::Item, item_start, item_children);
                    count += 1;
                }
                Err(Fail::Soft) => match separator_mark {
                    Some(mark) => return Err(self.hard_failure(mark)),
                    None => break,
                },
                Err(abort) => return Err(abort),
            }
        }

        if count < rep.min_count {
            self.backtrack(start);
            return Err(Fail::Soft);
        }
        self.push_span(out, NodeKind::Repetition, start, children);
        Ok(())
    }

    fn breakpoint(&mut self) {
        let position = self.cursor.pos();
        self.tracer.trace_breakpoint(&self.stack, position);
        if self.capture_breakpoints && self.cursor.at_end() {
            self.breakpoints.push(BreakpointHit {
                position,
                stack: self.stack.clone(),
            });
        }
    }
}
