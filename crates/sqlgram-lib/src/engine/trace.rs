//! Tracing infrastructure for debugging matcher execution.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The matcher is generic over [`Tracer`]. With `NoopTracer` every hook is an
//! `#[inline(always)]` empty function and the calls compile away, so the
//! untraced parse pays nothing for the instrumentation.
//!
//! Two real implementations exist:
//! - `PrintTracer` collects an indented, human-readable trace (CLI `trace`)
//! - `LogTracer` forwards every hook to `tracing` at TRACE level

use sqlgram_core::{Colors, Token};

use super::error::Expectation;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Productions, candidates, commits, matches and backtracks.
    #[default]
    Default,
    /// Also leaf failures and breakpoints.
    Verbose,
}

/// Tracer trait for matcher instrumentation.
///
/// Each method is called at a specific point during matching:
/// - `trace_enter` / `trace_exit` - around a production body
/// - `trace_candidate` - before an alternation candidate is attempted
/// - `trace_commit` - when a sequence reaches its commit threshold
/// - `trace_match` / `trace_failure` - after a leaf term is tested
/// - `trace_backtrack` - when a soft failure rewinds the cursor
/// - `trace_breakpoint` - when a breakpoint marker is reached
pub trait Tracer {
    fn trace_enter(&mut self, production: &'static str, position: usize);

    fn trace_exit(&mut self, production: &'static str, matched: bool, position: usize);

    /// `production` is the innermost open production owning the alternation.
    fn trace_candidate(&mut self, production: &'static str, branch: usize, position: usize);

    fn trace_commit(&mut self, position: usize);

    fn trace_match(&mut self, token: &Token, position: usize);

    /// `expected` is `None` for leaves that contribute no expectation (token sets).
    fn trace_failure(&mut self, expected: Option<Expectation>, position: usize);

    fn trace_backtrack(&mut self, position: usize);

    fn trace_breakpoint(&mut self, stack: &[&'static str], position: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _production: &'static str, _position: usize) {}

    #[inline(always)]
    fn trace_exit(&mut self, _production: &'static str, _matched: bool, _position: usize) {}

    #[inline(always)]
    fn trace_candidate(&mut self, _production: &'static str, _branch: usize, _position: usize) {}

    #[inline(always)]
    fn trace_commit(&mut self, _position: usize) {}

    #[inline(always)]
    fn trace_match(&mut self, _token: &Token, _position: usize) {}

    #[inline(always)]
    fn trace_failure(&mut self, _expected: Option<Expectation>, _position: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _position: usize) {}

    #[inline(always)]
    fn trace_breakpoint(&mut self, _stack: &[&'static str], _position: usize) {}
}

/// Tracer that collects an indented execution trace.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    depth: usize,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
            depth: 0,
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    fn push(&mut self, line: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{line}"));
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, production: &'static str, position: usize) {
        let c = self.colors;
        self.push(format!(
            "{}{production}{} {}@{position}{}",
            c.production, c.reset, c.dim, c.reset
        ));
        self.depth += 1;
    }

    fn trace_exit(&mut self, production: &'static str, matched: bool, position: usize) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        let line = if matched {
            format!("{}<- {production} @{position}{}", c.dim, c.reset)
        } else {
            format!("{}<- {production} failed{}", c.error, c.reset)
        };
        self.push(line);
    }

    fn trace_candidate(&mut self, production: &'static str, branch: usize, _position: usize) {
        let c = self.colors;
        self.push(format!("{}? {production} #{branch}{}", c.dim, c.reset));
    }

    fn trace_commit(&mut self, position: usize) {
        let c = self.colors;
        self.push(format!("{}! commit @{position}{}", c.dim, c.reset));
    }

    fn trace_match(&mut self, token: &Token, position: usize) {
        let c = self.colors;
        self.push(format!(
            "{}{}{} {}@{position}{}",
            c.keyword, token.text, c.reset, c.dim, c.reset
        ));
    }

    fn trace_failure(&mut self, expected: Option<Expectation>, position: usize) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let what = expected.map_or_else(|| "token set".to_string(), |e| e.to_string());
        self.push(format!(
            "{}x {what}{} {}@{position}{}",
            c.error, c.reset, c.dim, c.reset
        ));
    }

    fn trace_backtrack(&mut self, position: usize) {
        let c = self.colors;
        self.push(format!("{}<< backtrack @{position}{}", c.dim, c.reset));
    }

    fn trace_breakpoint(&mut self, stack: &[&'static str], position: usize) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        self.push(format!(
            "{}^ breakpoint @{position} [{}]{}",
            c.dim,
            stack.join(" > "),
            c.reset
        ));
    }
}

/// Tracer that forwards matcher events to `tracing` at TRACE level.
#[derive(Debug, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace_enter(&mut self, production: &'static str, position: usize) {
        tracing::trace!(production, position, "enter");
    }

    fn trace_exit(&mut self, production: &'static str, matched: bool, position: usize) {
        tracing::trace!(production, matched, position, "exit");
    }

    fn trace_candidate(&mut self, production: &'static str, branch: usize, position: usize) {
        tracing::trace!(production, branch, position, "candidate");
    }

    fn trace_commit(&mut self, position: usize) {
        tracing::trace!(position, "commit");
    }

    fn trace_match(&mut self, token: &Token, position: usize) {
        tracing::trace!(token = %token.text, position, "match");
    }

    fn trace_failure(&mut self, expected: Option<Expectation>, position: usize) {
        tracing::trace!(expected = ?expected, position, "failure");
    }

    fn trace_backtrack(&mut self, position: usize) {
        tracing::trace!(position, "backtrack");
    }

    fn trace_breakpoint(&mut self, stack: &[&'static str], position: usize) {
        tracing::trace!(stack = ?stack, position, "breakpoint");
    }
}
