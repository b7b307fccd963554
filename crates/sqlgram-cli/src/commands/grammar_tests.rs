use sqlgram_lib::{Colors, sqlite_grammar};

use super::grammar::{list_productions, suggest_production};

#[test]
fn lists_productions_in_definition_order() {
    let listing = list_productions(sqlite_grammar(), Colors::OFF);
    let mut lines = listing.lines();

    assert_eq!(lines.next(), Some("sql-stmt"));
    assert!(listing.contains("\nexpr (expression)\n"));
    assert!(listing.ends_with("vacuum-stmt\n"));
}

#[test]
fn suggests_a_close_name() {
    let grammar = sqlite_grammar();

    assert_eq!(suggest_production(grammar, "vacuum"), Some("vacuum-stmt"));
    assert_eq!(suggest_production(grammar, "nothing"), None);
}
