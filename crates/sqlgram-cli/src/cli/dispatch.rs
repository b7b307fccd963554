//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields, ignoring hidden ones
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use sqlgram_lib::MatchLimits;
use sqlgram_lib::engine::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::complete::CompleteArgs;
use crate::commands::grammar::GrammarArgs;
use crate::commands::input::SqlInput;
use crate::commands::run_common::ParserConfig;
use crate::commands::trace::TraceArgs;
use crate::commands::tree::TreeArgs;

/// Input, root and limit flags shared by the statement commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputParams {
    pub sql_path: Option<PathBuf>,
    pub sql_text: Option<String>,
    pub root: Option<String>,
    pub fuel: u32,
    pub recursion_limit: u32,
}

impl InputParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            sql_path: m.get_one::<PathBuf>("sql_path").cloned(),
            sql_text: m.get_one::<String>("sql_text").cloned(),
            root: m.get_one::<String>("root").cloned(),
            fuel: m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied().unwrap_or(160),
        }
    }

    fn input(&self) -> SqlInput {
        SqlInput {
            path: self.sql_path.clone(),
            text: self.sql_text.clone(),
        }
    }

    fn config(&self) -> ParserConfig {
        ParserConfig {
            root: self.root.clone(),
            limits: MatchLimits::new()
                .exec_fuel(self.fuel)
                .recursion_limit(self.recursion_limit),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub color: ColorChoice,
    pub verbose: u8,
    // Note: spans, json, caret, offset are parsed but not extracted (unified flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.input(),
            config: p.input.config(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct TreeParams {
    pub input: InputParams,
    pub spans: bool,
    pub json: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            input: p.input.input(),
            config: p.input.config(),
            spans: p.spans,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompleteParams {
    pub input: InputParams,
    pub caret: Option<usize>,
    pub offset: Option<usize>,
    pub json: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl CompleteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            caret: m.get_one::<usize>("caret").copied(),
            offset: m.get_one::<usize>("offset").copied(),
            json: m.get_flag("json"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CompleteParams> for CompleteArgs {
    fn from(p: CompleteParams) -> Self {
        Self {
            input: p.input.input(),
            config: p.input.config(),
            caret: p.caret,
            offset: p.offset,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GrammarParams {
    pub production: Option<String>,
    pub json: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl GrammarParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            production: m.get_one::<String>("production").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GrammarParams> for GrammarArgs {
    fn from(p: GrammarParams) -> Self {
        Self {
            production: p.production,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub input: InputParams,
    pub color: ColorChoice,
    pub verbose: u8,
    // Note: spans, json, caret, offset are parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            _ => Verbosity::Verbose,
        };

        Self {
            input: p.input.input(),
            config: p.input.config(),
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
