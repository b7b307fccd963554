use rowan::TextRange;

use crate::token::{Token, TokenKind, TokenSet};

#[test]
fn keyword_spelling_round_trips() {
    let keywords: Vec<_> = (0..TokenKind::COUNT as u16)
        .filter_map(TokenKind::from_raw)
        .filter(|k| k.is_keyword())
        .collect();
    assert!(keywords.len() > 100);
    for kind in keywords {
        assert_eq!(TokenKind::keyword(kind.as_str()), Some(kind), "{kind:?}");
    }
}

#[test]
fn non_keywords() {
    assert_eq!(TokenKind::keyword("foo"), None);
    assert!(!TokenKind::Id.is_keyword());
    assert!(!TokenKind::Comma.is_keyword());
    assert!(TokenKind::Abort.is_keyword());
    assert!(TokenKind::Without.is_keyword());
}

#[test]
fn from_raw_bounds() {
    assert_eq!(TokenKind::from_raw(0), Some(TokenKind::Lp));
    assert_eq!(TokenKind::from_raw(TokenKind::COUNT as u16), None);
    assert_eq!(TokenKind::from_raw(u16::MAX), None);
}

#[test]
fn token_set_membership() {
    const SET: TokenSet = TokenSet::new(&[TokenKind::Lp, TokenKind::Without, TokenKind::Eof]);

    assert!(SET.contains(TokenKind::Lp));
    assert!(SET.contains(TokenKind::Without));
    assert!(SET.contains(TokenKind::Eof));
    assert!(!SET.contains(TokenKind::Rp));
    assert_eq!(SET.len(), 3);
    assert_eq!(
        SET.iter().collect::<Vec<_>>(),
        vec![TokenKind::Lp, TokenKind::Without, TokenKind::Eof]
    );
}

#[test]
fn token_set_union() {
    let a = TokenSet::new(&[TokenKind::Select]);
    let b = TokenSet::new(&[TokenKind::Values]);
    let both = a.union(b);

    assert!(both.contains(TokenKind::Select));
    assert!(both.contains(TokenKind::Values));
    assert!(TokenSet::EMPTY.is_empty());
    assert!(!both.is_empty());
}

#[test]
fn token_text_from_str_or_string() {
    let range = TextRange::new(0.into(), 6.into());
    let borrowed = Token::new(TokenKind::Select, "SELECT", range);
    let owned = Token::new(TokenKind::Select, String::from("SELECT"), range);

    assert_eq!(borrowed, owned);
    assert_eq!(TokenKind::String.as_str(), "string");
    assert_eq!(TokenKind::keyword("into"), Some(TokenKind::Into));
}
