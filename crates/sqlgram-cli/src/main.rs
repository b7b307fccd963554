mod cli;
mod commands;

use clap::ArgMatches;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{CheckParams, CompleteParams, GrammarParams, TraceParams, TreeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    init_logging(m);

    match name {
        "check" => commands::check::run(CheckParams::from_matches(m).into()),
        "tree" => commands::tree::run(TreeParams::from_matches(m).into()),
        "complete" => commands::complete::run(CompleteParams::from_matches(m).into()),
        "grammar" => commands::grammar::run(GrammarParams::from_matches(m).into()),
        "trace" => commands::trace::run(TraceParams::from_matches(m).into()),
        _ => unreachable!("clap should have caught this"),
    }
}

/// Install a stderr subscriber; `-v` logs parses at DEBUG, `-vv` every matcher step.
fn init_logging(m: &ArgMatches) {
    let level = match m.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {}", e);
    }
}
