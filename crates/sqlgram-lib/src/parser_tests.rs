use indoc::indoc;
use sqlgram_core::lex;

use crate::engine::{Expectation, MatchLimits, ParseError};
use crate::parser::Parser;
use crate::test_utils::{EventLog, assert_tiled, parse, sexp, syntax_error};

#[test]
fn multiplication_binds_tighter_than_addition() {
    insta::assert_snapshot!(sexp("expr", "1 + 2 * 3"), @"(add-expr 1 + (mult-expr 2 * 3))");
    insta::assert_snapshot!(sexp("expr", "1 * 2 + 3"), @"(add-expr (mult-expr 1 * 2) + 3)");
}

#[test]
fn binary_tiers_are_left_associative() {
    insta::assert_snapshot!(sexp("expr", "1 - 2 - 3"), @"(add-expr 1 - 2 - 3)");
}

#[test]
fn and_binds_tighter_than_or() {
    insta::assert_snapshot!(sexp("expr", "a OR b AND c"), @"(or-expr a OR (and-expr b AND c))");
}

#[test]
fn parentheses_override_precedence() {
    insta::assert_snapshot!(
        sexp("expr", "(1 + 2) * 3"),
        @"(mult-expr (expr-term ( (add-expr 1 + 2) )) * 3)"
    );
}

#[test]
fn function_calls_and_qualified_columns() {
    insta::assert_snapshot!(
        sexp("expr", "count(x) + t.y"),
        @"(add-expr (expr-term count ( x )) + (expr-term t . y))"
    );
    insta::assert_snapshot!(sexp("expr", "count(*)"), @"(expr-term count ( * ))");
}

#[test]
fn scalar_subquery_and_parenthesized_expr_are_distinct() {
    insta::assert_snapshot!(sexp("expr", "(SELECT 1)"), @"(expr-term ( (select-stmt SELECT 1) ))");
    insta::assert_snapshot!(sexp("expr", "(1)"), @"(expr-term ( 1 ))");
}

#[test]
fn equality_family() {
    insta::assert_snapshot!(
        sexp("expr", "x NOT IN (1, 2)"),
        @"(eq-expr x (eq-expr-in NOT IN ( 1 , 2 )))"
    );
    insta::assert_snapshot!(
        sexp("expr", "a BETWEEN 1 AND 2"),
        @"(eq-expr a (eq-expr-between BETWEEN 1 AND 2))"
    );
    insta::assert_snapshot!(sexp("expr", "a NOT NULL"), @"(eq-expr a (eq-expr-is NOT NULL))");
    insta::assert_snapshot!(sexp("expr", "name LIKE 'a%'"), @"(eq-expr name (eq-expr-like LIKE 'a%'))");
}

#[test]
fn case_expression() {
    insta::assert_snapshot!(
        sexp("expr", "CASE WHEN a THEN 1 ELSE 2 END"),
        @"(expr-term CASE WHEN a THEN 1 ELSE 2 END)"
    );
}

#[test]
fn select_takes_the_select_branch() {
    let tokens = lex("SELECT * FROM t");
    let mut log = EventLog::default();
    let tree = Parser::sqlite().parse_with(&tokens, &mut log).unwrap();

    let select = tree.find("select-stmt").unwrap();
    assert_eq!(select.descendants().find_map(|n| n.branch()), Some(0));
    assert!(!log.failed(Expectation::Keyword("VALUES")));
    assert!(!log.entered("insert-stmt"));
}

#[test]
fn create_table_error_points_after_comma() {
    let err = syntax_error("CREATE TABLE t (x INT, ");

    assert_eq!(err.position, 7);
    assert_eq!(
        err.expected,
        vec![
            Expectation::Label("table constraint"),
            Expectation::Label("column definition"),
        ]
    );
    insta::assert_snapshot!(err, @"expected table constraint or column definition, found end of input");
}

#[test]
fn create_table() {
    let tokens = lex("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT NOT NULL)");
    let tree = parse(&tokens);

    let columns: Vec<_> = tree
        .find_all("column-def")
        .into_iter()
        .map(|n| tree.text(n))
        .collect();
    assert_eq!(columns, vec!["id INTEGER PRIMARY KEY", "name TEXT NOT NULL"]);
}

#[test]
fn create_table_accepts_columns_after_constraints() {
    let tokens = lex("CREATE TABLE t (x INT, UNIQUE (x), y TEXT)");
    let tree = parse(&tokens);

    assert_eq!(tree.find_all("column-def").len(), 2);
    assert_eq!(tree.find_all("table-constraint").len(), 1);
}

#[test]
fn alter_table_rename() {
    let tokens = lex("ALTER TABLE foo RENAME TO bar");
    let tree = parse(&tokens);

    let alter = tree.find("alter-table-stmt").unwrap();
    assert_eq!(alter.descendants().find_map(|n| n.branch()), Some(0));
    assert_eq!(tree.identifier("table name"), Some("foo"));
    assert_eq!(tree.identifier("new table name"), Some("bar"));
}

#[test]
fn pragma_with_value() {
    let tokens = lex("PRAGMA foo = 1");
    let tree = parse(&tokens);

    assert_eq!(tree.identifier("pragma name"), Some("foo"));
    let value = tree.find("signed-number").unwrap();
    assert_eq!(tree.text(value), "1");
    assert!(tree.find("pragma-value").is_some());
}

#[test]
fn pragma_forms() {
    for source in ["PRAGMA main.cache_size(-2000)", "PRAGMA foreign_keys = ON", "PRAGMA optimize"] {
        let tokens = lex(source);
        assert!(Parser::sqlite().parse(&tokens).is_ok(), "{source}");
    }
}

#[test]
fn spans_tile_the_input() {
    let tokens = lex("SELECT a, b FROM t WHERE a = 1 ORDER BY b DESC LIMIT 10");
    let tree = parse(&tokens);

    assert_eq!(tree.span().start, 0);
    assert_eq!(tree.span().end, tokens.len());
    assert_tiled(tree.root());
}

#[test]
fn joins() {
    let tokens = lex("SELECT * FROM a LEFT JOIN b ON a.id = b.id, c");
    let tree = parse(&tokens);
    assert_eq!(tree.find_all("join-operator").len(), 2);

    let tokens = lex("SELECT * FROM (a JOIN b USING (id))");
    let tree = parse(&tokens);
    assert!(tree.find("join-constraint").is_some());
}

#[test]
fn with_prefix_falls_through_to_insert() {
    let tokens = lex("WITH x AS (SELECT 1) INSERT INTO t VALUES (1)");
    let tree = parse(&tokens);

    assert!(tree.find("insert-stmt").is_some());
    assert!(tree.find("with-clause").is_some());
}

#[test]
fn statements() {
    let sources = [
        "SELECT DISTINCT a AS x FROM t WHERE b IS NOT NULL GROUP BY a HAVING count(*) > 1",
        "SELECT 1 UNION ALL SELECT 2 ORDER BY 1 LIMIT 1 OFFSET 1",
        "VALUES (1, 2), (3, 4)",
        "INSERT OR REPLACE INTO main.t (a, b) SELECT a, b FROM s",
        "INSERT INTO t DEFAULT VALUES",
        "UPDATE t SET a = a + 1, b = :b WHERE id = ?1",
        "DELETE FROM t WHERE x > 1",
        "CREATE UNIQUE INDEX IF NOT EXISTS i ON t (a COLLATE nocase DESC, b)",
        "CREATE VIEW v (a) AS SELECT a FROM t",
        "CREATE VIRTUAL TABLE f USING fts5 (body)",
        "DROP TABLE IF EXISTS main.t",
        "BEGIN IMMEDIATE TRANSACTION",
        "ROLLBACK TO SAVEPOINT sp",
        "ATTACH DATABASE 'other.db' AS other",
        "EXPLAIN QUERY PLAN SELECT 1",
        "VACUUM;",
    ];
    for source in sources {
        let tokens = lex(source);
        if let Err(err) = Parser::sqlite().parse(&tokens) {
            panic!("{source}: {err}");
        }
    }
}

#[test]
fn create_trigger() {
    let source = indoc! {"
        CREATE TRIGGER IF NOT EXISTS audit
        AFTER UPDATE OF balance ON accounts
        FOR EACH ROW WHEN new.balance < 0
        BEGIN
            INSERT INTO log VALUES (new.id, 'negative');
            SELECT RAISE(ABORT, 'negative balance');
        END
    "};
    let tokens = lex(source);
    let tree = parse(&tokens);

    assert_eq!(tree.identifier("trigger name"), Some("audit"));
    assert!(tree.find("raise-function").is_some());
}

#[test]
fn trailing_statement_is_rejected() {
    let err = syntax_error("SELECT 1; SELECT 2");

    assert_eq!(err.position, 3);
    assert_eq!(err.expected, vec![Expectation::EndOfInput]);
    assert_eq!(err.found.as_deref(), Some("SELECT"));
}

#[test]
fn empty_input_lists_statement_keywords() {
    let err = syntax_error("");

    assert_eq!(err.position, 0);
    assert!(err.is_at_end());
    assert_eq!(
        err.expected[..3],
        [
            Expectation::Keyword("EXPLAIN"),
            Expectation::Keyword("WITH"),
            Expectation::Keyword("SELECT"),
        ]
    );
}

#[test]
fn parse_prefix_stops_after_statement() {
    let tokens = lex("SELECT 1; VACUUM");
    let prefix = Parser::sqlite().parse_prefix(&tokens).unwrap();

    assert_eq!(prefix.consumed, 2);
    assert!(prefix.tree.find("select-stmt").is_some());
}

#[test]
fn deep_nesting_hits_recursion_limit() {
    let source = format!("SELECT {}1{}", "(".repeat(40), ")".repeat(40));
    let tokens = lex(&source);
    let parser = Parser::sqlite().with_limits(MatchLimits::new().recursion_limit(64));

    assert_eq!(
        parser.parse(&tokens).unwrap_err(),
        ParseError::RecursionLimitExceeded
    );
}

#[test]
fn nested_table_parens_parse_in_linear_fuel() {
    let source = format!("SELECT * FROM {}t{}", "(".repeat(30), ")".repeat(30));
    let tokens = lex(&source);

    let tree = Parser::sqlite().parse(&tokens).unwrap();
    assert_eq!(tree.find_all("join-clause").len(), 31);
    assert_eq!(tree.identifier("table name"), Some("t"));

    let tight = Parser::sqlite().with_limits(MatchLimits::new().exec_fuel(20_000));
    assert!(tight.parse(&tokens).is_ok());
}

#[test]
fn comma_list_is_a_join_chain() {
    let tokens = lex("SELECT * FROM a, b, c");
    let tree = parse(&tokens);

    assert_eq!(tree.find_all("join-clause").len(), 1);
    assert_eq!(tree.find_all("join-operator").len(), 2);
    assert_eq!(tree.find_all("table-or-subquery").len(), 3);

    let err = syntax_error("SELECT * FROM a,");
    assert_eq!(err.position, 5);
    assert!(err.is_at_end());
}

#[test]
fn default_recursion_limit_fits_a_small_stack() {
    let source = format!("SELECT {}1{}", "(".repeat(100), ")".repeat(100));
    let result = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || {
            let tokens = lex(&source);
            Parser::sqlite().parse(&tokens).map(|_| ())
        })
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(result, Err(ParseError::RecursionLimitExceeded));
}

#[test]
fn grammar_is_shared_across_threads() {
    let sources = ["SELECT 1", "VACUUM", "DELETE FROM t", "PRAGMA x"];
    std::thread::scope(|scope| {
        for source in sources {
            scope.spawn(move || {
                let tokens = lex(source);
                assert!(Parser::sqlite().parse(&tokens).is_ok());
            });
        }
    });
}
