//! Token kinds for the SQLite dialect.
//!
//! `TokenKind` is both the logos-derived lexer enum and the vocabulary the
//! grammar table is written in. Bare words are lexed as `Id` and reclassified
//! through [`TokenKind::keyword`], so keyword variants carry no logos attributes.

use logos::Logos;
use rowan::TextRange;
use serde::Serialize;

/// Every token kind the lexer produces and the grammar refers to.
///
/// `#[repr(u16)]` backs `TokenSet` bit positions and `from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u16)]
pub enum TokenKind {
    // --- Punctuation and operators ---
    #[token("(")]
    Lp = 0,
    #[token(")")]
    Rp,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Rem,
    #[token("&")]
    BitAnd,
    #[token("|")]
    BitOr,
    #[token("~")]
    BitNot,
    #[token("<<")]
    LShift,
    #[token(">>")]
    RShift,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("=")]
    #[token("==")]
    Eq,
    #[token("!=")]
    #[token("<>")]
    Ne,
    #[token("||")]
    Concat,

    // --- Literals and names ---
    /// Bare or quoted identifier. Bare words are reclassified as keywords after lexing.
    #[regex(r"[A-Za-z_][A-Za-z0-9_$]*")]
    #[regex(r#""(?:[^"]|"")*""#)]
    #[regex(r"`(?:[^`]|``)*`")]
    #[regex(r"\[[^\]]*\]")]
    Id,
    #[regex(r"'(?:[^']|'')*'")]
    String,
    #[regex(r"[0-9]+")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Integer,
    #[regex(r"[0-9]+\.[0-9]*(?:[eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+(?:[eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,
    #[regex(r"[xX]'[0-9a-fA-F]*'")]
    Blob,
    /// Bind variable: `?`, `?NNN`, `:name`, `@name`, `$name`.
    #[regex(r"\?[0-9]*")]
    #[regex(r"[:@$][A-Za-z0-9_]+")]
    Variable,

    // --- Trivia (dropped by `lex`) ---
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"--[^\n]*", allow_greedy = true)]
    LineComment,
    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    // --- Keywords ---
    Abort,
    Action,
    Add,
    After,
    All,
    Alter,
    Analyze,
    And,
    As,
    Asc,
    Attach,
    Autoincr,
    Before,
    Begin,
    Between,
    By,
    Cascade,
    Case,
    Cast,
    Check,
    Collate,
    ColumnKw,
    Commit,
    Conflict,
    Constraint,
    Create,
    /// `CURRENT_TIME`, `CURRENT_DATE`, `CURRENT_TIMESTAMP`.
    CtimeKw,
    Database,
    Default,
    Deferrable,
    Deferred,
    Delete,
    Desc,
    Detach,
    Distinct,
    Drop,
    Each,
    Else,
    End,
    Escape,
    Except,
    Exclusive,
    Exists,
    Explain,
    Fail,
    For,
    Foreign,
    From,
    Group,
    Having,
    If,
    Ignore,
    Immediate,
    In,
    Index,
    Indexed,
    Initially,
    Insert,
    Instead,
    Intersect,
    Into,
    Is,
    IsNull,
    Join,
    /// `NATURAL`, `LEFT`, `RIGHT`, `FULL`, `OUTER`, `INNER`, `CROSS`.
    JoinKw,
    Key,
    /// `LIKE`, `GLOB`, `REGEXP`.
    LikeKw,
    Limit,
    Match,
    No,
    Not,
    NotNull,
    Null,
    Of,
    Offset,
    On,
    Or,
    Order,
    Plan,
    Pragma,
    Primary,
    Query,
    Raise,
    Recursive,
    References,
    Reindex,
    Release,
    Rename,
    Replace,
    Restrict,
    Rollback,
    Row,
    Savepoint,
    Select,
    Set,
    Table,
    /// `TEMP`, `TEMPORARY`.
    Temp,
    Then,
    To,
    Transaction,
    Trigger,
    Union,
    Unique,
    Update,
    Using,
    Vacuum,
    Values,
    View,
    Virtual,
    When,
    Where,
    With,
    Without,

    // --- Synthetic ---
    /// Coalesced unlexable characters.
    Illegal,
    /// End of input. Never produced by `lex`; the cursor reports it past the last token.
    Eof,

    // Must be last - used for bounds checking in `from_raw`
    #[doc(hidden)]
    __LAST,
}

impl TokenKind {
    /// Number of real kinds (excludes the sentinel).
    pub const COUNT: usize = Self::__LAST as usize;

    pub fn from_raw(raw: u16) -> Option<Self> {
        if raw >= Self::__LAST as u16 {
            return None;
        }
        // SAFETY: bounds checked above and TokenKind is repr(u16) with contiguous discriminants
        Some(unsafe { std::mem::transmute::<u16, TokenKind>(raw) })
    }

    /// Classify a bare word. Case-insensitive.
    pub fn keyword(word: &str) -> Option<Self> {
        use TokenKind::*;
        let kind = match word.to_ascii_lowercase().as_str() {
            "abort" => Abort,
            "action" => Action,
            "add" => Add,
            "after" => After,
            "all" => All,
            "alter" => Alter,
            "analyze" => Analyze,
            "and" => And,
            "as" => As,
            "asc" => Asc,
            "attach" => Attach,
            "autoincrement" => Autoincr,
            "before" => Before,
            "begin" => Begin,
            "between" => Between,
            "by" => By,
            "cascade" => Cascade,
            "case" => Case,
            "cast" => Cast,
            "check" => Check,
            "collate" => Collate,
            "column" => ColumnKw,
            "commit" => Commit,
            "conflict" => Conflict,
            "constraint" => Constraint,
            "create" => Create,
            "current_time" | "current_date" | "current_timestamp" => CtimeKw,
            "database" => Database,
            "default" => Default,
            "deferrable" => Deferrable,
            "deferred" => Deferred,
            "delete" => Delete,
            "desc" => Desc,
            "detach" => Detach,
            "distinct" => Distinct,
            "drop" => Drop,
            "each" => Each,
            "else" => Else,
            "end" => End,
            "escape" => Escape,
            "except" => Except,
            "exclusive" => Exclusive,
            "exists" => Exists,
            "explain" => Explain,
            "fail" => Fail,
            "for" => For,
            "foreign" => Foreign,
            "from" => From,
            "group" => Group,
            "having" => Having,
            "if" => If,
            "ignore" => Ignore,
            "immediate" => Immediate,
            "in" => In,
            "index" => Index,
            "indexed" => Indexed,
            "initially" => Initially,
            "insert" => Insert,
            "instead" => Instead,
            "intersect" => Intersect,
            "into" => Into,
            "is" => Is,
            "isnull" => IsNull,
            "join" => Join,
            "natural" | "left" | "right" | "full" | "outer" | "inner" | "cross" => JoinKw,
            "key" => Key,
            "like" | "glob" | "regexp" => LikeKw,
            "limit" => Limit,
            "match" => Match,
            "no" => No,
            "not" => Not,
            "notnull" => NotNull,
            "null" => Null,
            "of" => Of,
            "offset" => Offset,
            "on" => On,
            "or" => Or,
            "order" => Order,
            "plan" => Plan,
            "pragma" => Pragma,
            "primary" => Primary,
            "query" => Query,
            "raise" => Raise,
            "recursive" => Recursive,
            "references" => References,
            "reindex" => Reindex,
            "release" => Release,
            "rename" => Rename,
            "replace" => Replace,
            "restrict" => Restrict,
            "rollback" => Rollback,
            "row" => Row,
            "savepoint" => Savepoint,
            "select" => Select,
            "set" => Set,
            "table" => Table,
            "temp" | "temporary" => Temp,
            "then" => Then,
            "to" => To,
            "transaction" => Transaction,
            "trigger" => Trigger,
            "union" => Union,
            "unique" => Unique,
            "update" => Update,
            "using" => Using,
            "vacuum" => Vacuum,
            "values" => Values,
            "view" => View,
            "virtual" => Virtual,
            "when" => When,
            "where" => Where,
            "with" => With,
            "without" => Without,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical spelling, used in diagnostics and completion.
    ///
    /// Kinds shared by several spellings report the first one.
    pub fn as_str(self) -> &'static str {
        use TokenKind::*;
        match self {
            Lp => "(",
            Rp => ")",
            Comma => ",",
            Semi => ";",
            Dot => ".",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Rem => "%",
            BitAnd => "&",
            BitOr => "|",
            BitNot => "~",
            LShift => "<<",
            RShift => ">>",
            Lt => "<",
            Le => "<=",
            Gt => ">",
            Ge => ">=",
            Eq => "=",
            Ne => "!=",
            Concat => "||",
            Id => "identifier",
            String => "string",
            Integer => "integer",
            Float => "float",
            Blob => "blob",
            Variable => "variable",
            Whitespace => "whitespace",
            LineComment | BlockComment => "comment",
            Abort => "ABORT",
            Action => "ACTION",
            Add => "ADD",
            After => "AFTER",
            All => "ALL",
            Alter => "ALTER",
            Analyze => "ANALYZE",
            And => "AND",
            As => "AS",
            Asc => "ASC",
            Attach => "ATTACH",
            Autoincr => "AUTOINCREMENT",
            Before => "BEFORE",
            Begin => "BEGIN",
            Between => "BETWEEN",
            By => "BY",
            Cascade => "CASCADE",
            Case => "CASE",
            Cast => "CAST",
            Check => "CHECK",
            Collate => "COLLATE",
            ColumnKw => "COLUMN",
            Commit => "COMMIT",
            Conflict => "CONFLICT",
            Constraint => "CONSTRAINT",
            Create => "CREATE",
            CtimeKw => "CURRENT_TIME",
            Database => "DATABASE",
            Default => "DEFAULT",
            Deferrable => "DEFERRABLE",
            Deferred => "DEFERRED",
            Delete => "DELETE",
            Desc => "DESC",
            Detach => "DETACH",
            Distinct => "DISTINCT",
            Drop => "DROP",
            Each => "EACH",
            Else => "ELSE",
            End => "END",
            Escape => "ESCAPE",
            Except => "EXCEPT",
            Exclusive => "EXCLUSIVE",
            Exists => "EXISTS",
            Explain => "EXPLAIN",
            Fail => "FAIL",
            For => "FOR",
            Foreign => "FOREIGN",
            From => "FROM",
            Group => "GROUP",
            Having => "HAVING",
            If => "IF",
            Ignore => "IGNORE",
            Immediate => "IMMEDIATE",
            In => "IN",
            Index => "INDEX",
            Indexed => "INDEXED",
            Initially => "INITIALLY",
            Insert => "INSERT",
            Instead => "INSTEAD",
            Intersect => "INTERSECT",
            Into => "INTO",
            Is => "IS",
            IsNull => "ISNULL",
            Join => "JOIN",
            JoinKw => "NATURAL",
            Key => "KEY",
            LikeKw => "LIKE",
            Limit => "LIMIT",
            Match => "MATCH",
            No => "NO",
            Not => "NOT",
            NotNull => "NOTNULL",
            Null => "NULL",
            Of => "OF",
            Offset => "OFFSET",
            On => "ON",
            Or => "OR",
            Order => "ORDER",
            Plan => "PLAN",
            Pragma => "PRAGMA",
            Primary => "PRIMARY",
            Query => "QUERY",
            Raise => "RAISE",
            Recursive => "RECURSIVE",
            References => "REFERENCES",
            Reindex => "REINDEX",
            Release => "RELEASE",
            Rename => "RENAME",
            Replace => "REPLACE",
            Restrict => "RESTRICT",
            Rollback => "ROLLBACK",
            Row => "ROW",
            Savepoint => "SAVEPOINT",
            Select => "SELECT",
            Set => "SET",
            Table => "TABLE",
            Temp => "TEMP",
            Then => "THEN",
            To => "TO",
            Transaction => "TRANSACTION",
            Trigger => "TRIGGER",
            Union => "UNION",
            Unique => "UNIQUE",
            Update => "UPDATE",
            Using => "USING",
            Vacuum => "VACUUM",
            Values => "VALUES",
            View => "VIEW",
            Virtual => "VIRTUAL",
            When => "WHEN",
            Where => "WHERE",
            With => "WITH",
            Without => "WITHOUT",
            Illegal => "illegal token",
            Eof => "end of input",
            __LAST => "",
        }
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        use TokenKind::*;
        matches!(self, Whitespace | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (Self::Abort as u16..=Self::Without as u16).contains(&(self as u16))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed token: kind, raw text and byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    #[serde(serialize_with = "serialize_range")]
    pub span: TextRange,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: TextRange) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

fn serialize_range<S: serde::Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    let start: u32 = range.start().into();
    let end: u32 = range.end().into();
    (start, end).serialize(s)
}

/// 256-bit set of `TokenKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenSet([u64; 4]);

const _: () = assert!(TokenKind::COUNT <= 256, "TokenKind exceeds TokenSet capacity");

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet([0; 4]);

    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut words = [0u64; 4];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            words[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(words)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let kind = kind as u16;
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut words = self.0;
        let mut i = 0;
        while i < 4 {
            words[i] |= other.0[i];
            i += 1;
        }
        TokenSet(words)
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Kinds in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        (0..TokenKind::COUNT as u16)
            .filter_map(TokenKind::from_raw)
            .filter(|kind| self.contains(*kind))
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for TokenSet {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.iter())
    }
}
