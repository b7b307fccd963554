//! Trace the matcher for debugging.

use sqlgram_lib::engine::{PrintTracer, Verbosity};
use sqlgram_lib::{Colors, lex};

use super::input::SqlInput;
use super::run_common::{self, ParserConfig};

pub struct TraceArgs {
    pub input: SqlInput,
    pub config: ParserConfig,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let sql = run_common::load_or_exit(&args.input);
    let tokens = lex(&sql.text);
    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(args.verbosity, colors);

    let result = args.config.parser().parse_with(&tokens, &mut tracer);
    print!("{}", tracer.finish());

    match result {
        Ok(tree) => {
            println!("{}---{}", colors.dim, colors.reset);
            println!("matched {} of {} tokens", tree.span().len(), tokens.len());
        }
        Err(e) => run_common::exit_with_parse_error(&e, &tokens, &sql, args.color),
    }
}
