//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: statement commands accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use sqlgram_lib::MatchLimits;
use sqlgram_lib::engine::Verbosity;

use super::*;
use crate::cli::commands::{
    check_command, complete_command, grammar_command, trace_command, tree_command,
};
use crate::commands::check::CheckArgs;
use crate::commands::complete::CompleteArgs;
use crate::commands::trace::TraceArgs;

#[test]
fn check_accepts_tree_and_complete_flags() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from([
        "check",
        "schema.sql",
        "--spans",
        "--json",
        "--caret",
        "3",
    ]);
    assert!(
        result.is_ok(),
        "check should accept unified flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.input.sql_path, Some(PathBuf::from("schema.sql")));
    assert_eq!(params.input.sql_text, None);
}

#[test]
fn check_defaults() {
    let m = check_command()
        .try_get_matches_from(["check", "-s", "VACUUM"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.input.sql_text.as_deref(), Some("VACUUM"));
    assert_eq!(params.input.root, None);
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.verbose, 0);

    let args: CheckArgs = params.into();
    assert_eq!(args.config.limits, MatchLimits::default());
}

#[test]
fn limits_and_root_are_extracted() {
    let m = tree_command()
        .try_get_matches_from([
            "tree",
            "-s",
            "1 + 2",
            "--root",
            "expr",
            "--fuel",
            "500",
            "--recursion-limit",
            "32",
        ])
        .unwrap();
    let params = TreeParams::from_matches(&m);

    assert_eq!(params.input.root.as_deref(), Some("expr"));
    assert_eq!(params.input.fuel, 500);
    assert_eq!(params.input.recursion_limit, 32);
}

#[test]
fn tree_output_flags() {
    let m = tree_command()
        .try_get_matches_from(["tree", "q.sql", "--spans", "--json", "--color", "never"])
        .unwrap();
    let params = TreeParams::from_matches(&m);

    assert!(params.spans);
    assert!(params.json);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn sql_text_conflicts_with_path() {
    let result = tree_command().try_get_matches_from(["tree", "q.sql", "-s", "VACUUM"]);

    assert!(result.is_err());
}

#[test]
fn complete_caret_and_offset() {
    let m = complete_command()
        .try_get_matches_from(["complete", "-s", "SELECT * FR", "--offset", "11"])
        .unwrap();
    let args: CompleteArgs = CompleteParams::from_matches(&m).into();
    assert_eq!(args.caret, None);
    assert_eq!(args.offset, Some(11));

    let result = complete_command().try_get_matches_from([
        "complete", "-s", "x", "--caret", "1", "--offset", "1",
    ]);
    assert!(result.is_err(), "--caret and --offset are exclusive");
}

#[test]
fn trace_verbosity() {
    let m = trace_command()
        .try_get_matches_from(["trace", "-s", "VACUUM"])
        .unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();
    assert_eq!(args.verbosity, Verbosity::Default);

    let m = trace_command()
        .try_get_matches_from(["trace", "-s", "VACUUM", "-vv", "--spans"])
        .unwrap();
    let params = TraceParams::from_matches(&m);
    assert_eq!(params.verbose, 2);
    let args: TraceArgs = params.into();
    assert_eq!(args.verbosity, Verbosity::Verbose);
}

#[test]
fn grammar_production_positional() {
    let m = grammar_command()
        .try_get_matches_from(["grammar", "select-stmt", "--json"])
        .unwrap();
    let params = GrammarParams::from_matches(&m);

    assert_eq!(params.production.as_deref(), Some("select-stmt"));
    assert!(params.json);
}

#[test]
fn grammar_rejects_statement_flags() {
    let result = grammar_command().try_get_matches_from(["grammar", "--fuel", "10"]);

    assert!(result.is_err());
}

#[test]
fn check_help_hides_unified_flags() {
    let help = check_command().render_help().to_string();

    assert!(help.contains("--fuel"));
    assert!(help.contains("--root"));
    assert!(!help.contains("--spans"));
    assert!(!help.contains("--caret"));
    assert!(!help.contains("--json"));
}

#[test]
fn complete_help_shows_caret_flags() {
    let help = complete_command().render_help().to_string();

    assert!(help.contains("--caret"));
    assert!(help.contains("--offset"));
    assert!(!help.contains("--spans"));
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["sqlgram"]);

    assert!(result.is_err());
}

#[test]
fn cli_dispatches_subcommands() {
    for name in ["check", "tree", "complete", "grammar", "trace"] {
        let m = build_cli()
            .try_get_matches_from(["sqlgram", name, "-v"])
            .unwrap();
        let (sub, sub_m) = m.subcommand().unwrap();
        assert_eq!(sub, name);
        assert_eq!(sub_m.get_count("verbose"), 1);
    }
}
