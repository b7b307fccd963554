//! Grammar table introspection.

use std::fmt::Write;

use sqlgram_lib::{Colors, Grammar, sqlite_grammar};

pub struct GrammarArgs {
    pub production: Option<String>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: GrammarArgs) {
    let grammar = sqlite_grammar();
    let colors = Colors::new(args.color);

    let Some(name) = args.production else {
        if args.json {
            let json = grammar.to_json().unwrap_or_else(|e| super::run_common::exit_with(e));
            println!("{}", json);
        } else {
            print!("{}", list_productions(grammar, colors));
        }
        return;
    };

    let Some(production) = grammar.get(&name) else {
        eprintln!("error: unknown production '{}'", name);
        if let Some(suggestion) = suggest_production(grammar, &name) {
            eprintln!();
            eprintln!("Did you mean '{}'?", suggestion);
        }
        eprintln!();
        eprintln!("Run 'sqlgram grammar' for the full list.");
        std::process::exit(1);
    };

    if args.json {
        let json = serde_json::to_string_pretty(production)
            .unwrap_or_else(|e| super::run_common::exit_with(e));
        println!("{}", json);
    } else {
        println!("{}", production);
    }
}

/// Production names in definition order, labelled ones with their label.
pub fn list_productions(grammar: &Grammar, c: Colors) -> String {
    let mut out = String::new();
    for production in grammar.productions() {
        let _ = write!(out, "{}{}{}", c.production, production.name, c.reset);
        if let Some(label) = production.label {
            let _ = write!(out, " {}({label}){}", c.dim, c.reset);
        }
        out.push('\n');
    }
    out
}

/// Closest production name sharing a `-`-separated word with `name`.
pub fn suggest_production(grammar: &Grammar, name: &str) -> Option<&'static str> {
    let words: Vec<&str> = name.split('-').filter(|w| !w.is_empty()).collect();
    grammar
        .productions()
        .map(|p| {
            let shared = p.name.split('-').filter(|w| words.contains(w)).count();
            (shared, p.name)
        })
        .filter(|(shared, _)| *shared > 0)
        .max_by_key(|(shared, _)| *shared)
        .map(|(_, name)| name)
}
