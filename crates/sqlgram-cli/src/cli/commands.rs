//! Command builders for the CLI.
//!
//! Statement commands (check/tree/complete/trace) accept each other's output
//! flags, with the ones they ignore hidden from `--help`.

use clap::Command;

use super::args::*;

/// SQL input, root and limit args shared by every statement command.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(sql_path_arg())
        .arg(sql_text_arg())
        .arg(root_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Add hidden tree output args (for commands that don't print a tree).
fn with_hidden_tree_args(cmd: Command) -> Command {
    cmd.arg(spans_arg().hide(true))
}

/// Add hidden completion args (for commands that don't complete).
fn with_hidden_complete_args(cmd: Command) -> Command {
    cmd.arg(caret_arg().hide(true))
        .arg(offset_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sqlgram")
        .about("SQLite grammar checking, parse trees and completion")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(tree_command())
        .subcommand(complete_command())
        .subcommand(grammar_command())
        .subcommand(trace_command())
}

/// Check every statement of a script.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check the statements of a SQL script")
        .override_usage(
            "\
  sqlgram check <FILE>
  sqlgram check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  sqlgram check schema.sql                  # every ;-separated statement
  sqlgram check -s 'SELECT * FROM t'        # inline SQL
  cat q.sql | sqlgram check -               # stdin
  sqlgram check -s 'x = 1' --root expr      # a single expression"#,
        );

    with_hidden_complete_args(with_hidden_tree_args(
        with_input_args(cmd).arg(json_arg().hide(true)),
    ))
}

/// Print the parse tree of one statement.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Print the parse tree of a statement")
        .override_usage(
            "\
  sqlgram tree <FILE>
  sqlgram tree -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  sqlgram tree -s 'SELECT a FROM t'         # indented tree
  sqlgram tree -s 'SELECT a FROM t' --spans # with token ranges
  sqlgram tree query.sql --json             # JSON"#,
        );

    with_hidden_complete_args(with_input_args(cmd).arg(spans_arg()).arg(json_arg()))
}

/// Suggest what may follow a prefix.
pub fn complete_command() -> Command {
    let cmd = Command::new("complete")
        .about("Suggest keywords and names at a caret")
        .override_usage(
            "\
  sqlgram complete <FILE> [--caret <INDEX> | --offset <BYTES>]
  sqlgram complete -s <TEXT> [--caret <INDEX> | --offset <BYTES>]",
        )
        .after_help(
            r#"EXAMPLES:
  sqlgram complete -s 'SELECT * FROM '          # at end of input
  sqlgram complete -s 'SELECT * FROM t' --caret 3
  sqlgram complete -s 'SELECT * FR' --offset 11 # replaces the partial word"#,
        );

    with_hidden_tree_args(
        with_input_args(cmd)
            .arg(caret_arg())
            .arg(offset_arg())
            .arg(json_arg()),
    )
}

/// Show the grammar table.
pub fn grammar_command() -> Command {
    Command::new("grammar")
        .about("List productions or render one")
        .override_usage(
            "\
  sqlgram grammar
  sqlgram grammar <NAME> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  sqlgram grammar                    # production names and labels
  sqlgram grammar select-stmt        # one production
  sqlgram grammar --json             # whole table as JSON"#,
        )
        .arg(production_arg())
        .arg(json_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Trace the matcher on one statement.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace the matcher for debugging")
        .override_usage(
            "\
  sqlgram trace <FILE> [-v]
  sqlgram trace -s <TEXT> [-v]",
        )
        .after_help(
            r#"EXAMPLES:
  sqlgram trace -s 'VACUUM'            # productions, commits, backtracks
  sqlgram trace -s 'SELECT FROM' -v    # also leaf failures and debug logs

NOTE: -v also enables debug logging on stderr."#,
        );

    with_hidden_complete_args(with_hidden_tree_args(
        with_input_args(cmd).arg(json_arg().hide(true)),
    ))
}
