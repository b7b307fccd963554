//! Position over a materialized token slice.

use sqlgram_core::{Token, TokenKind};

/// Token cursor with O(1) save and restore.
///
/// The position is a plain index, so a checkpoint is a `usize` and
/// backtracking is an assignment.
#[derive(Debug, Clone)]
pub(crate) struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn reset(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len());
        self.pos = pos;
    }

    /// Current token, `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(self.pos < self.tokens.len());
        self.pos += 1;
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn tokens(&self) -> &'t [Token] {
        self.tokens
    }
}
