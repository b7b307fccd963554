//! The SQLite statement and expression grammar.
//!
//! Operator precedence lives in the shape of the expression productions: each
//! binary tier is a left-associative repetition of the next tighter tier,
//! separated by that tier's operators. Loosest first:
//!
//! `expr` > `or-expr` > `and-expr` > `eq-expr` > `ineq-expr` > `bitwise-expr`
//! > `add-expr` > `mult-expr` > `concat-expr` > `unary-expr` > `collate-expr`
//! > `expr-term`
//!
//! Within an alternation the declaration order is the disambiguation policy.

use std::sync::LazyLock;

use super::builder::*;
use super::types::{Grammar, Sequence, Term};
use super::validate::GrammarError;
use crate::token::{TokenKind as K, TokenSet};

/// Name of the statement root production.
pub const SQL_STMT: &str = "sql-stmt";

/// Keywords SQLite also accepts as words of a declared column type.
pub const TYPE_NAME_WORDS: TokenSet = TokenSet::new(&[
    K::Explain,
    K::Query,
    K::Plan,
    K::Begin,
    K::Deferred,
    K::Immediate,
    K::Exclusive,
    K::End,
    K::Rollback,
    K::Savepoint,
    K::Release,
    K::If,
    K::Temp,
    K::Without,
    K::Abort,
    K::Action,
    K::After,
    K::Analyze,
    K::Asc,
    K::Attach,
    K::Before,
    K::By,
    K::Cascade,
    K::Cast,
    K::ColumnKw,
    K::Conflict,
    K::Database,
    K::Desc,
    K::Detach,
    K::Each,
    K::Fail,
    K::For,
    K::Ignore,
    K::Initially,
    K::Instead,
    K::LikeKw,
    K::Match,
    K::No,
    K::Key,
    K::Of,
    K::Offset,
    K::Pragma,
    K::Raise,
    K::Recursive,
    K::Replace,
    K::Restrict,
    K::Row,
    K::Trigger,
    K::Vacuum,
    K::View,
    K::Virtual,
    K::With,
    K::Reindex,
    K::Rename,
    K::CtimeKw,
    K::Autoincr,
    K::Deferrable,
]);

static SQLITE: LazyLock<Grammar> = LazyLock::new(|| {
    build_sqlite_grammar().unwrap_or_else(|e| panic!("built-in SQLite grammar is invalid: {e}"))
});

/// The process-wide SQLite grammar, built and validated on first use.
pub fn sqlite_grammar() -> &'static Grammar {
    &SQLITE
}

/// `[database-name .]`
fn db_prefix() -> Term {
    opt([id("database name"), kw(K::Dot)])
}

fn if_not_exists() -> Term {
    opt_n(1, [kw(K::If), kw(K::Not), kw(K::Exists)])
}

fn if_exists() -> Term {
    opt_n(1, [kw(K::If), kw(K::Exists)])
}

/// `( column-name, ... )`
fn column_names() -> [Term; 3] {
    [
        kw(K::Lp),
        list(K::Comma, 1, [id("column name")]),
        kw(K::Rp),
    ]
}

/// `[AS] alias`
fn alias(description: &'static str) -> Term {
    opt([opt([kw(K::As)]), id(description)])
}

/// `[[ORDER BY ...] LIMIT expr [(OFFSET | ,) expr]]` on UPDATE and DELETE.
fn limited_tail() -> Term {
    opt_n(
        2,
        [
            opt([
                kw(K::Order),
                kw(K::By),
                list(K::Comma, 1, [prod("ordering-term")]),
            ]),
            kw(K::Limit),
            prod("expr"),
            opt_n(1, [one_of([kw(K::Offset), kw(K::Comma)]), prod("expr")]),
        ],
    )
}

fn conflict_resolution() -> Term {
    one_of([
        kw(K::Rollback),
        kw(K::Abort),
        kw(K::Fail),
        kw(K::Ignore),
        kw(K::Replace),
    ])
}

fn drop_stmt(object: K, description: &'static str) -> Sequence {
    seq(
        2,
        [
            kw(K::Drop),
            kw(object),
            if_exists(),
            db_prefix(),
            id(description),
        ],
    )
}

/// Builds and validates the SQLite grammar table.
pub fn build_sqlite_grammar() -> Result<Grammar, GrammarError> {
    GrammarBuilder::new("sqlite", SQL_STMT)
        .production(
            "sql-stmt",
            seq(
                2,
                [
                    opt_n(
                        1,
                        [kw(K::Explain), opt_n(1, [kw(K::Query), kw(K::Plan)])],
                    ),
                    one_of([
                        prod("select-stmt"),
                        prod("update-stmt"),
                        prod("insert-stmt"),
                        prod("alter-table-stmt"),
                        prod("analyze-stmt"),
                        prod("attach-stmt"),
                        prod("begin-stmt"),
                        prod("commit-stmt"),
                        prod("create-index-stmt"),
                        prod("create-table-stmt"),
                        prod("create-trigger-stmt"),
                        prod("create-view-stmt"),
                        prod("create-virtual-table-stmt"),
                        prod("delete-stmt"),
                        prod("detach-stmt"),
                        prod("drop-index-stmt"),
                        prod("drop-table-stmt"),
                        prod("drop-trigger-stmt"),
                        prod("drop-view-stmt"),
                        prod("pragma-stmt"),
                        prod("reindex-stmt"),
                        prod("release-stmt"),
                        prod("rollback-stmt"),
                        prod("savepoint-stmt"),
                        prod("vacuum-stmt"),
                    ]),
                ],
            ),
        )
        // ALTER TABLE [db .] table (RENAME TO new | ADD [COLUMN] column-def)
        .production(
            "alter-table-stmt",
            seq(
                1,
                [
                    kw(K::Alter),
                    kw(K::Table),
                    db_prefix(),
                    id("table name"),
                    alt([
                        seq(1, [kw(K::Rename), kw(K::To), id("new table name")]),
                        seq(
                            1,
                            [kw(K::Add), opt([kw(K::ColumnKw)]), prod("column-def")],
                        ),
                    ]),
                ],
            ),
        )
        .production(
            "analyze-stmt",
            seq(
                1,
                [
                    kw(K::Analyze),
                    opt([
                        id("database, table, or index name"),
                        opt_n(1, [kw(K::Dot), id("table or index name")]),
                    ]),
                ],
            ),
        )
        .production(
            "attach-stmt",
            seq(
                1,
                [
                    kw(K::Attach),
                    opt([kw(K::Database)]),
                    prod("expr"),
                    kw(K::As),
                    id("database name"),
                ],
            ),
        )
        .production(
            "begin-stmt",
            seq(
                1,
                [
                    kw(K::Begin),
                    opt([one_of([
                        kw(K::Deferred),
                        kw(K::Immediate),
                        kw(K::Exclusive),
                    ])]),
                    opt([kw(K::Transaction)]),
                ],
            ),
        )
        .production(
            "commit-stmt",
            seq(
                1,
                [
                    one_of([kw(K::Commit), kw(K::End)]),
                    opt([kw(K::Transaction)]),
                ],
            ),
        )
        .production(
            "rollback-stmt",
            seq(
                1,
                [
                    kw(K::Rollback),
                    opt([kw(K::Transaction)]),
                    opt_n(
                        1,
                        [kw(K::To), opt([kw(K::Savepoint)]), id("savepoint name")],
                    ),
                ],
            ),
        )
        .production(
            "savepoint-stmt",
            seq(1, [kw(K::Savepoint), id("savepoint name")]),
        )
        .production(
            "release-stmt",
            seq(
                1,
                [
                    kw(K::Release),
                    opt([kw(K::Savepoint)]),
                    id("savepoint name"),
                ],
            ),
        )
        .production(
            "create-index-stmt",
            seq(
                3,
                [
                    kw(K::Create),
                    opt([kw(K::Unique)]),
                    kw(K::Index),
                    if_not_exists(),
                    db_prefix(),
                    id("index name"),
                    kw(K::On),
                    id("table name"),
                    kw(K::Lp),
                    list(K::Comma, 1, [prod("indexed-column")]),
                    kw(K::Rp),
                    opt_n(1, [kw(K::Where), prod("expr")]),
                ],
            ),
        )
        .labeled(
            "indexed-column",
            "indexed column",
            seq(
                1,
                [
                    one_of([prod("expr"), id("column name")]),
                    opt_n(1, [kw(K::Collate), id("collation name")]),
                    opt([one_of([kw(K::Asc), kw(K::Desc)])]),
                ],
            ),
        )
        // Column definitions are accepted after table constraints; SQLite itself
        // rejects that order. Kept loose on purpose.
        .production(
            "create-table-stmt",
            seq(
                3,
                [
                    kw(K::Create),
                    opt([kw(K::Temp)]),
                    kw(K::Table),
                    if_not_exists(),
                    db_prefix(),
                    id("table name"),
                    alt([
                        seq(
                            1,
                            [
                                kw(K::Lp),
                                list(
                                    K::Comma,
                                    1,
                                    [one_of([prod("table-constraint"), prod("column-def")])],
                                ),
                                kw(K::Rp),
                                opt_n(1, [kw(K::Without), lit("ROWID")]),
                            ],
                        ),
                        seq(1, [kw(K::As), prod("select-stmt")]),
                    ]),
                ],
            ),
        )
        .labeled(
            "column-def",
            "column definition",
            seq(
                1,
                [
                    id("column name"),
                    opt([prod("type-name")]),
                    repeat(0, [prod("column-constraint")]),
                ],
            ),
        )
        .labeled(
            "type-name",
            "type name",
            seq(
                1,
                [
                    repeat(
                        1,
                        [one_of([id("data type"), Term::TokenSet(TYPE_NAME_WORDS)])],
                    ),
                    opt([
                        kw(K::Lp),
                        prod("signed-number"),
                        opt([kw(K::Comma), prod("signed-number")]),
                        kw(K::Rp),
                    ]),
                ],
            ),
        )
        .labeled(
            "column-constraint",
            "column constraint",
            seq(
                2,
                [
                    opt_n(1, [kw(K::Constraint), id("constraint name")]),
                    alt([
                        seq(
                            1,
                            [
                                kw(K::Primary),
                                kw(K::Key),
                                opt([one_of([kw(K::Asc), kw(K::Desc)])]),
                                prod("conflict-clause"),
                                opt([kw(K::Autoincr)]),
                            ],
                        ),
                        seq(1, [kw(K::Not), kw(K::Null), prod("conflict-clause")]),
                        seq(1, [kw(K::Null), prod("conflict-clause")]),
                        seq(1, [kw(K::Unique), prod("conflict-clause")]),
                        seq(1, [kw(K::Check), kw(K::Lp), prod("expr"), kw(K::Rp)]),
                        seq(
                            1,
                            [
                                kw(K::Default),
                                alt([
                                    seq(1, [prod("signed-number")]),
                                    seq(1, [prod("literal-value")]),
                                    seq(1, [kw(K::Lp), prod("expr"), kw(K::Rp)]),
                                ]),
                            ],
                        ),
                        seq(1, [kw(K::Collate), id("collation name")]),
                        seq(1, [prod("foreign-key-clause")]),
                    ]),
                ],
            ),
        )
        .labeled(
            "signed-number",
            "number",
            seq(
                2,
                [
                    opt([one_of([kw(K::Plus), kw(K::Minus)])]),
                    one_of([kw(K::Integer), kw(K::Float)]),
                ],
            ),
        )
        .labeled(
            "table-constraint",
            "table constraint",
            seq(
                2,
                [
                    opt_n(1, [kw(K::Constraint), id("constraint name")]),
                    alt([
                        seq(
                            1,
                            [
                                alt([
                                    seq(1, [kw(K::Primary), kw(K::Key)]),
                                    seq(1, [kw(K::Unique)]),
                                ]),
                                kw(K::Lp),
                                list(K::Comma, 1, [prod("indexed-column")]),
                                kw(K::Rp),
                                prod("conflict-clause"),
                            ],
                        ),
                        seq(1, [kw(K::Check), kw(K::Lp), prod("expr"), kw(K::Rp)]),
                        seq(
                            1,
                            [
                                kw(K::Foreign),
                                kw(K::Key),
                                kw(K::Lp),
                                list(K::Comma, 1, [id("column name")]),
                                kw(K::Rp),
                                prod("foreign-key-clause"),
                            ],
                        ),
                    ]),
                ],
            ),
        )
        .production(
            "foreign-key-clause",
            seq(
                1,
                [
                    kw(K::References),
                    id("foreign table name"),
                    opt(column_names()),
                    repeat(
                        0,
                        [alt([
                            seq(
                                1,
                                [
                                    kw(K::On),
                                    one_of([kw(K::Delete), kw(K::Update)]),
                                    alt([
                                        seq(
                                            1,
                                            [kw(K::Set), one_of([kw(K::Null), kw(K::Default)])],
                                        ),
                                        seq(1, [kw(K::Cascade)]),
                                        seq(1, [kw(K::Restrict)]),
                                        seq(1, [kw(K::No), kw(K::Action)]),
                                    ]),
                                ],
                            ),
                            seq(1, [kw(K::Match), id("match type")]),
                        ])],
                    ),
                    opt([
                        opt([kw(K::Not)]),
                        kw(K::Deferrable),
                        opt_n(
                            1,
                            [
                                kw(K::Initially),
                                one_of([kw(K::Deferred), kw(K::Immediate)]),
                            ],
                        ),
                    ]),
                ],
            ),
        )
        .production(
            "conflict-clause",
            seq(
                1,
                [opt_n(
                    2,
                    [kw(K::On), kw(K::Conflict), conflict_resolution()],
                )],
            ),
        )
        .production(
            "create-trigger-stmt",
            seq(
                3,
                [
                    kw(K::Create),
                    opt([kw(K::Temp)]),
                    kw(K::Trigger),
                    if_not_exists(),
                    db_prefix(),
                    id("trigger name"),
                    opt([alt([
                        seq(1, [kw(K::Before)]),
                        seq(1, [kw(K::After)]),
                        seq(1, [kw(K::Instead), kw(K::Of)]),
                    ])]),
                    alt([
                        seq(1, [kw(K::Delete)]),
                        seq(1, [kw(K::Insert)]),
                        seq(
                            1,
                            [
                                kw(K::Update),
                                opt_n(
                                    1,
                                    [kw(K::Of), list(K::Comma, 1, [id("column name")])],
                                ),
                            ],
                        ),
                    ]),
                    kw(K::On),
                    id("table name"),
                    opt_n(1, [kw(K::For), kw(K::Each), kw(K::Row)]),
                    opt_n(1, [kw(K::When), prod("expr")]),
                    kw(K::Begin),
                    repeat(
                        1,
                        [
                            one_of([
                                prod("update-stmt"),
                                prod("insert-stmt"),
                                prod("delete-stmt"),
                                prod("select-stmt"),
                            ]),
                            kw(K::Semi),
                        ],
                    ),
                    kw(K::End),
                ],
            ),
        )
        .production(
            "create-view-stmt",
            seq(
                3,
                [
                    kw(K::Create),
                    opt([kw(K::Temp)]),
                    kw(K::View),
                    if_not_exists(),
                    db_prefix(),
                    id("view name"),
                    opt_n(1, column_names()),
                    kw(K::As),
                    prod("select-stmt"),
                ],
            ),
        )
        .production(
            "create-virtual-table-stmt",
            seq(
                2,
                [
                    kw(K::Create),
                    kw(K::Virtual),
                    kw(K::Table),
                    if_not_exists(),
                    db_prefix(),
                    id("table name"),
                    kw(K::Using),
                    id("module name"),
                    opt_n(
                        1,
                        [kw(K::Lp), list(K::Comma, 1, [prod("expr")]), kw(K::Rp)],
                    ),
                ],
            ),
        )
        .production(
            "with-clause",
            seq(
                1,
                [
                    kw(K::With),
                    opt([kw(K::Recursive)]),
                    list(K::Comma, 1, [prod("common-table-expression")]),
                ],
            ),
        )
        .production(
            "cte-table-name",
            seq(1, [id("table name"), opt_n(1, column_names())]),
        )
        .production(
            "common-table-expression",
            seq(
                1,
                [
                    prod("cte-table-name"),
                    kw(K::As),
                    kw(K::Lp),
                    prod("select-stmt"),
                    kw(K::Rp),
                ],
            ),
        )
        .production(
            "delete-stmt",
            seq(
                2,
                [
                    opt([prod("with-clause")]),
                    kw(K::Delete),
                    kw(K::From),
                    prod("qualified-table-name"),
                    opt_n(1, [kw(K::Where), prod("expr")]),
                    limited_tail(),
                ],
            ),
        )
        .production(
            "detach-stmt",
            seq(
                1,
                [kw(K::Detach), opt([kw(K::Database)]), id("database name")],
            ),
        )
        .production("drop-index-stmt", drop_stmt(K::Index, "index name"))
        .production("drop-table-stmt", drop_stmt(K::Table, "table name"))
        .production("drop-trigger-stmt", drop_stmt(K::Trigger, "trigger name"))
        .production("drop-view-stmt", drop_stmt(K::View, "view name"))
        // --- Expressions, loosest tier first ---
        .labeled("expr", "expression", seq(1, [prod("or-expr")]))
        .production(
            "or-expr",
            seq(1, [list(K::Or, 1, [prod("and-expr")])]),
        )
        .production(
            "and-expr",
            seq(1, [list(K::And, 1, [prod("eq-expr")])]),
        )
        .production(
            "eq-expr",
            seq(
                1,
                [
                    prod("ineq-expr"),
                    repeat(
                        0,
                        [one_of([
                            prod("eq-expr-op"),
                            prod("eq-expr-is"),
                            prod("eq-expr-in"),
                            prod("eq-expr-like"),
                            prod("eq-expr-between"),
                        ])],
                    ),
                ],
            ),
        )
        .production(
            "eq-expr-op",
            seq(
                1,
                [one_of([kw(K::Eq), kw(K::Ne)]), prod("ineq-expr")],
            ),
        )
        .production(
            "eq-expr-is",
            seq(
                1,
                [alt([
                    seq(1, [kw(K::Is), opt([kw(K::Not)]), prod("ineq-expr")]),
                    seq(1, [kw(K::IsNull)]),
                    seq(1, [kw(K::NotNull)]),
                    seq(2, [kw(K::Not), kw(K::Null)]),
                ])],
            ),
        )
        .production(
            "eq-expr-in",
            seq(
                2,
                [
                    opt([kw(K::Not)]),
                    kw(K::In),
                    alt([
                        seq(
                            1,
                            [
                                kw(K::Lp),
                                opt([one_of([
                                    prod("select-stmt"),
                                    list(K::Comma, 1, [prod("expr")]),
                                ])]),
                                kw(K::Rp),
                            ],
                        ),
                        seq(2, [db_prefix(), id("table name")]),
                    ]),
                ],
            ),
        )
        .production(
            "eq-expr-like",
            seq(
                2,
                [
                    opt([kw(K::Not)]),
                    one_of([lit("LIKE"), lit("GLOB"), lit("REGEXP"), lit("MATCH")]),
                    prod("ineq-expr"),
                    opt_n(1, [kw(K::Escape), prod("ineq-expr")]),
                ],
            ),
        )
        .production(
            "eq-expr-between",
            seq(
                2,
                [
                    opt([kw(K::Not)]),
                    kw(K::Between),
                    prod("ineq-expr"),
                    kw(K::And),
                    prod("ineq-expr"),
                ],
            ),
        )
        .production(
            "ineq-expr",
            seq(
                1,
                [list_by(
                    one_of([kw(K::Lt), kw(K::Le), kw(K::Gt), kw(K::Ge)]),
                    1,
                    [prod("bitwise-expr")],
                )],
            ),
        )
        .production(
            "bitwise-expr",
            seq(
                1,
                [list_by(
                    one_of([
                        kw(K::LShift),
                        kw(K::RShift),
                        kw(K::BitAnd),
                        kw(K::BitOr),
                    ]),
                    1,
                    [prod("add-expr")],
                )],
            ),
        )
        .production(
            "add-expr",
            seq(
                1,
                [list_by(
                    one_of([kw(K::Plus), kw(K::Minus)]),
                    1,
                    [prod("mult-expr")],
                )],
            ),
        )
        .production(
            "mult-expr",
            seq(
                1,
                [list_by(
                    one_of([kw(K::Star), kw(K::Slash), kw(K::Rem)]),
                    1,
                    [prod("concat-expr")],
                )],
            ),
        )
        .production(
            "concat-expr",
            seq(1, [list(K::Concat, 1, [prod("unary-expr")])]),
        )
        .production(
            "unary-expr",
            seq(
                2,
                [
                    opt([one_of([kw(K::Minus), kw(K::Plus), kw(K::Not)])]),
                    prod("collate-expr"),
                ],
            ),
        )
        .production(
            "collate-expr",
            seq(
                2,
                [
                    opt([kw(K::BitNot)]),
                    prod("expr-term"),
                    opt_n(1, [kw(K::Collate), id("collation name")]),
                ],
            ),
        )
        // Qualified column references come longest first so `t.x` is not cut
        // short at `t`. A function call must see `name (` before the bare
        // column form claims `name`.
        .production(
            "expr-term",
            seq(
                1,
                [
                    breakpoint(),
                    alt([
                        seq(1, [prod("literal-value")]),
                        seq(1, [var("variable name")]),
                        seq(
                            4,
                            [
                                id("database name"),
                                kw(K::Dot),
                                id("table name"),
                                kw(K::Dot),
                                id("column name"),
                            ],
                        ),
                        seq(
                            2,
                            [id("table name"), kw(K::Dot), id("column name")],
                        ),
                        seq(
                            2,
                            [
                                id("function name"),
                                kw(K::Lp),
                                opt([alt([
                                    seq(1, [kw(K::Star)]),
                                    seq(
                                        2,
                                        [
                                            opt([kw(K::Distinct)]),
                                            list(K::Comma, 1, [prod("expr")]),
                                        ],
                                    ),
                                ])]),
                                kw(K::Rp),
                            ],
                        ),
                        seq(1, [id("column name")]),
                        seq(
                            2,
                            [
                                opt([opt([kw(K::Not)]), kw(K::Exists)]),
                                kw(K::Lp),
                                prod("select-stmt"),
                                kw(K::Rp),
                            ],
                        ),
                        seq(1, [kw(K::Lp), prod("expr"), kw(K::Rp)]),
                        seq(
                            1,
                            [
                                kw(K::Cast),
                                kw(K::Lp),
                                prod("expr"),
                                kw(K::As),
                                prod("type-name"),
                                kw(K::Rp),
                            ],
                        ),
                        seq(
                            1,
                            [
                                kw(K::Case),
                                opt([prod("expr")]),
                                repeat(
                                    1,
                                    [kw(K::When), prod("expr"), kw(K::Then), prod("expr")],
                                ),
                                opt_n(1, [kw(K::Else), prod("expr")]),
                                kw(K::End),
                            ],
                        ),
                        seq(1, [prod("raise-function")]),
                    ]),
                ],
            ),
        )
        .production(
            "raise-function",
            seq(
                1,
                [
                    kw(K::Raise),
                    kw(K::Lp),
                    alt([
                        seq(1, [kw(K::Ignore)]),
                        seq(
                            1,
                            [
                                one_of([kw(K::Rollback), kw(K::Abort), kw(K::Fail)]),
                                kw(K::Comma),
                                string("error message"),
                            ],
                        ),
                    ]),
                    kw(K::Rp),
                ],
            ),
        )
        .labeled(
            "literal-value",
            "literal value",
            seq(
                1,
                [one_of([
                    kw(K::Integer),
                    kw(K::Float),
                    kw(K::String),
                    kw(K::Blob),
                    kw(K::Null),
                    lit("CURRENT_TIME"),
                    lit("CURRENT_DATE"),
                    lit("CURRENT_TIMESTAMP"),
                ])],
            ),
        )
        // --- DML ---
        .production(
            "insert-stmt",
            seq(
                2,
                [
                    opt([prod("with-clause")]),
                    alt([
                        seq(
                            1,
                            [
                                kw(K::Insert),
                                opt_n(1, [kw(K::Or), conflict_resolution()]),
                            ],
                        ),
                        seq(1, [kw(K::Replace)]),
                    ]),
                    kw(K::Into),
                    db_prefix(),
                    id("table name"),
                    opt(column_names()),
                    alt([
                        seq(
                            1,
                            [
                                kw(K::Values),
                                list(
                                    K::Comma,
                                    1,
                                    [
                                        kw(K::Lp),
                                        list(K::Comma, 1, [prod("expr")]),
                                        kw(K::Rp),
                                    ],
                                ),
                            ],
                        ),
                        seq(1, [prod("select-stmt")]),
                        seq(1, [kw(K::Default), kw(K::Values)]),
                    ]),
                ],
            ),
        )
        .production(
            "pragma-stmt",
            seq(
                1,
                [
                    kw(K::Pragma),
                    db_prefix(),
                    id("pragma name"),
                    opt([alt([
                        seq(1, [kw(K::Eq), prod("pragma-value")]),
                        seq(1, [kw(K::Lp), prod("pragma-value"), kw(K::Rp)]),
                    ])]),
                ],
            ),
        )
        .labeled(
            "pragma-value",
            "pragma value",
            seq(
                1,
                [one_of([
                    prod("signed-number"),
                    id("name"),
                    string("string"),
                    kw(K::On),
                    kw(K::Delete),
                    kw(K::Default),
                ])],
            ),
        )
        .production(
            "reindex-stmt",
            seq(
                1,
                [
                    kw(K::Reindex),
                    opt([db_prefix(), id("table, index, or collation name")]),
                ],
            ),
        )
        // A WITH prefix alone does not commit: `WITH ... INSERT` must fall
        // through to the insert statement.
        .production(
            "select-stmt",
            seq(
                2,
                [
                    opt_n(
                        1,
                        [
                            kw(K::With),
                            opt([kw(K::Recursive)]),
                            list(K::Comma, 1, [prod("common-table-expression")]),
                        ],
                    ),
                    list_by(
                        prod("compound-operator"),
                        1,
                        [alt([
                            seq(
                                1,
                                [
                                    kw(K::Select),
                                    opt([one_of([kw(K::Distinct), kw(K::All)])]),
                                    list(K::Comma, 1, [prod("result-column")]),
                                    opt_n(
                                        1,
                                        [
                                            kw(K::From),
                                            prod("join-clause"),
                                        ],
                                    ),
                                    opt_n(1, [kw(K::Where), prod("expr")]),
                                    opt_n(
                                        1,
                                        [
                                            kw(K::Group),
                                            kw(K::By),
                                            list(K::Comma, 1, [prod("expr")]),
                                            opt_n(1, [kw(K::Having), prod("expr")]),
                                        ],
                                    ),
                                ],
                            ),
                            seq(
                                1,
                                [
                                    kw(K::Values),
                                    list(
                                        K::Comma,
                                        1,
                                        [
                                            kw(K::Lp),
                                            list(K::Comma, 1, [prod("expr")]),
                                            kw(K::Rp),
                                        ],
                                    ),
                                ],
                            ),
                        ])],
                    ),
                    opt_n(
                        1,
                        [
                            kw(K::Order),
                            kw(K::By),
                            list(K::Comma, 1, [prod("ordering-term")]),
                        ],
                    ),
                    opt_n(
                        1,
                        [
                            kw(K::Limit),
                            prod("expr"),
                            opt_n(1, [one_of([kw(K::Offset), kw(K::Comma)]), prod("expr")]),
                        ],
                    ),
                ],
            ),
        )
        // A plain table list is a join chain whose operators are all ','. A
        // table is mandatory after each operator.
        .production(
            "join-clause",
            seq(
                1,
                [
                    prod("table-or-subquery"),
                    repeat(
                        0,
                        [alt([seq(
                            1,
                            [
                                prod("join-operator"),
                                prod("table-or-subquery"),
                                prod("join-constraint"),
                            ],
                        )])],
                    ),
                ],
            ),
        )
        .labeled(
            "table-or-subquery",
            "table or subquery",
            seq(
                1,
                [
                    breakpoint(),
                    alt([
                        seq(
                            3,
                            [
                                db_prefix(),
                                id("table function name"),
                                kw(K::Lp),
                                list(K::Comma, 0, [prod("expr")]),
                                kw(K::Rp),
                                alias("table alias"),
                            ],
                        ),
                        seq(
                            2,
                            [
                                db_prefix(),
                                id("table name"),
                                alias("table alias"),
                                opt([alt([
                                    seq(1, [kw(K::Indexed), kw(K::By), id("index name")]),
                                    seq(1, [kw(K::Not), kw(K::Indexed)]),
                                ])]),
                            ],
                        ),
                        seq(
                            2,
                            [
                                kw(K::Lp),
                                prod("select-stmt"),
                                kw(K::Rp),
                                alias("table alias"),
                            ],
                        ),
                        seq(
                            1,
                            [
                                kw(K::Lp),
                                prod("join-clause"),
                                kw(K::Rp),
                            ],
                        ),
                    ]),
                ],
            ),
        )
        .labeled(
            "result-column",
            "result column",
            seq(
                1,
                [
                    breakpoint(),
                    alt([
                        seq(1, [kw(K::Star)]),
                        seq(3, [id("table name"), kw(K::Dot), kw(K::Star)]),
                        seq(1, [prod("expr"), alias("column alias")]),
                    ]),
                ],
            ),
        )
        .production(
            "join-operator",
            seq(
                1,
                [alt([
                    seq(1, [kw(K::Comma)]),
                    seq(
                        1,
                        [
                            opt([lit("NATURAL")]),
                            opt([alt([
                                seq(1, [lit("LEFT"), opt([lit("OUTER")])]),
                                seq(1, [lit("INNER")]),
                                seq(1, [lit("CROSS")]),
                            ])]),
                            kw(K::Join),
                        ],
                    ),
                ])],
            ),
        )
        .production(
            "join-constraint",
            seq(
                1,
                [opt([alt([
                    seq(1, [kw(K::On), prod("expr")]),
                    seq(
                        1,
                        [
                            kw(K::Using),
                            kw(K::Lp),
                            list(K::Comma, 1, [id("column name")]),
                            kw(K::Rp),
                        ],
                    ),
                ])])],
            ),
        )
        .production(
            "ordering-term",
            seq(
                1,
                [
                    prod("expr"),
                    opt_n(1, [kw(K::Collate), id("collation name")]),
                    opt([one_of([kw(K::Asc), kw(K::Desc)])]),
                ],
            ),
        )
        .production(
            "compound-operator",
            seq(
                1,
                [alt([
                    seq(1, [kw(K::Union), opt([kw(K::All)])]),
                    seq(1, [kw(K::Intersect)]),
                    seq(1, [kw(K::Except)]),
                ])],
            ),
        )
        .production(
            "update-stmt",
            seq(
                2,
                [
                    opt([prod("with-clause")]),
                    kw(K::Update),
                    opt_n(1, [kw(K::Or), conflict_resolution()]),
                    prod("qualified-table-name"),
                    kw(K::Set),
                    list(
                        K::Comma,
                        1,
                        [id("column name"), kw(K::Eq), prod("expr")],
                    ),
                    opt_n(1, [kw(K::Where), prod("expr")]),
                    limited_tail(),
                ],
            ),
        )
        .production(
            "qualified-table-name",
            seq(
                2,
                [
                    breakpoint(),
                    db_prefix(),
                    id("table name"),
                    opt([alt([
                        seq(1, [kw(K::Indexed), kw(K::By), id("index name")]),
                        seq(1, [kw(K::Not), kw(K::Indexed)]),
                    ])]),
                ],
            ),
        )
        .production("vacuum-stmt", seq(1, [kw(K::Vacuum)]))
        .build()
}
