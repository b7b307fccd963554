//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands can compose the same
//! definition, hiding the ones they accept but ignore.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// SQL file (positional, `-` for stdin).
pub fn sql_path_arg() -> Arg {
    Arg::new("sql_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("SQL file to read (`-` for stdin)")
}

/// Inline SQL text (-s/--sql).
pub fn sql_text_arg() -> Arg {
    Arg::new("sql_text")
        .short('s')
        .long("sql")
        .value_name("TEXT")
        .conflicts_with("sql_path")
        .help("Inline SQL text")
}

/// Production to start matching from (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("NAME")
        .help("Root production (default: sql-stmt)")
}

/// Term attempt budget (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Maximum term attempts per statement")
}

/// Production nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("160")
        .value_parser(value_parser!(u32))
        .help("Maximum production nesting depth")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Show token index ranges (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show token index ranges")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Completion point as a token index (--caret).
pub fn caret_arg() -> Arg {
    Arg::new("caret")
        .long("caret")
        .value_name("INDEX")
        .value_parser(value_parser!(usize))
        .help("Token index to complete at (default: end of input)")
}

/// Completion point as a byte offset (--offset).
pub fn offset_arg() -> Arg {
    Arg::new("offset")
        .long("offset")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .conflicts_with("caret")
        .help("Byte offset to complete at")
}

/// Production to show (positional).
pub fn production_arg() -> Arg {
    Arg::new("production")
        .value_name("NAME")
        .help("Production to render (default: list all)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log matcher activity (-v debug, -vv trace)")
}
