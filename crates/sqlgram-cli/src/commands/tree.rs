//! Print the parse tree of one statement.

use sqlgram_lib::engine::LogTracer;
use sqlgram_lib::{Colors, DumpOptions, lex};

use super::input::SqlInput;
use super::run_common::{self, ParserConfig};

pub struct TreeArgs {
    pub input: SqlInput,
    pub config: ParserConfig,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let sql = run_common::load_or_exit(&args.input);
    let tokens = lex(&sql.text);

    let tree = match args.config.parser().parse_with(&tokens, &mut LogTracer) {
        Ok(tree) => tree,
        Err(e) => run_common::exit_with_parse_error(&e, &tokens, &sql, args.color),
    };

    if args.json {
        let json = tree.to_json().unwrap_or_else(|e| run_common::exit_with(e));
        println!("{}", json);
        return;
    }

    print!(
        "{}",
        tree.dump(DumpOptions {
            colors: Colors::new(args.color),
            spans: args.spans,
            compact: false,
        })
    );
}
