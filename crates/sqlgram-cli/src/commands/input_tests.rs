use std::path::PathBuf;

use super::input::{InputError, SqlInput};

#[test]
fn inline_text_wins() {
    let input = SqlInput {
        path: Some(PathBuf::from("ignored.sql")),
        text: Some("VACUUM".to_string()),
    };
    let loaded = input.load().unwrap();

    assert_eq!(loaded.text, "VACUUM");
    assert_eq!(loaded.name, None);
}

#[test]
fn missing_input() {
    let err = SqlInput::default().load().unwrap_err();

    assert!(matches!(err, InputError::Missing));
}

#[test]
fn unreadable_file() {
    let input = SqlInput {
        path: Some(PathBuf::from("does/not/exist.sql")),
        text: None,
    };
    let err = input.load().unwrap_err();

    assert!(err.to_string().starts_with("failed to read 'does/not/exist.sql': "));
}
