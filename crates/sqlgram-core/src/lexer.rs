//! Reference lexer for SQLite text.
//!
//! The matcher only needs a materialized token slice; this lexer exists so the
//! CLI and tests can start from source text.
//!
//! ## Error handling
//!
//! Consecutive unlexable characters are coalesced into a single `Illegal` token
//! rather than one token per character.

use std::ops::Range;

use logos::Logos;
use rowan::TextRange;

use crate::token::{Token, TokenKind};

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes `source`, dropping whitespace and comments.
///
/// Bare words become keyword tokens when [`TokenKind::keyword`] recognises them.
/// Quoted identifiers always stay `Id`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    push(&mut tokens, source, TokenKind::Illegal, start..end);
                }
                if kind.is_trivia() {
                    continue;
                }
                let span = lexer.span();
                let kind = match kind {
                    TokenKind::Id if is_bare_word(lexer.slice()) => {
                        TokenKind::keyword(lexer.slice()).unwrap_or(TokenKind::Id)
                    }
                    other => other,
                };
                push(&mut tokens, source, kind, span);
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    push(&mut tokens, source, TokenKind::Illegal, start..source.len());
                }
                break;
            }
        }
    }

    tokens
}

fn push(tokens: &mut Vec<Token>, source: &str, kind: TokenKind, span: Range<usize>) {
    let text = &source[span.clone()];
    tokens.push(Token::new(kind, text, range_to_text_range(span)));
}

fn is_bare_word(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
}

/// Index of the first token whose span ends at or after `offset`.
///
/// Maps an editor caret (byte offset) to the token index completion works on:
/// a caret inside or at the end of a word selects that word's token, so the
/// partially typed word is replaced by the suggestion.
pub fn token_index_at(tokens: &[Token], offset: usize) -> usize {
    tokens
        .iter()
        .position(|t| usize::from(t.span.end()) >= offset)
        .unwrap_or(tokens.len())
}
