//! EBNF-like rendering of grammar tables.
//!
//! Notation:
//! - `SELECT` keyword, `'('` punctuation, `"like"` literal text
//! - `<table name>` identifier, `<:variable name>` bind variable, `'<message>'` string literal
//! - `expr` production reference, `[ ... ]` optional, `( a | b )` alternation
//! - `{ item % sep }+` repetition (`*` for zero or more, `{n,}` otherwise)
//! - `!n` commit threshold, shown when it differs from the builder default
//! - `^` breakpoint

use std::fmt::{self, Display, Formatter};

use super::types::{Grammar, Production, Sequence, Term};

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Keyword(kind) if kind.is_keyword() => f.write_str(kind.as_str()),
            Term::Keyword(kind) => write!(f, "'{}'", kind.as_str()),
            Term::LiteralText(text) => write!(f, "\"{text}\""),
            Term::TokenSet(set) => {
                f.write_str("{")?;
                for (i, kind) in set.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    f.write_str(kind.as_str())?;
                }
                f.write_str("}")
            }
            Term::Identifier {
                description,
                allows_bind_variable: false,
            } => write!(f, "<{description}>"),
            Term::Identifier {
                description,
                allows_bind_variable: true,
            } => write!(f, "<:{description}>"),
            Term::LiteralString { description } => write!(f, "'<{description}>'"),
            Term::Production(name) => f.write_str(name),
            Term::Optional(body) => {
                f.write_str("[")?;
                write_sequence(f, body, body.len())?;
                f.write_str("]")
            }
            Term::Alternation(candidates) => {
                f.write_str("(")?;
                for (i, candidate) in candidates.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" |")?;
                    }
                    f.write_str(" ")?;
                    write_sequence(f, candidate, 1)?;
                }
                f.write_str(" )")
            }
            Term::Repetition(rep) => {
                f.write_str("{ ")?;
                write_sequence(f, &rep.item, rep.item.len())?;
                if let Some(separator) = &rep.separator {
                    f.write_str(" % ")?;
                    write_sequence(f, separator, 1)?;
                }
                match rep.min_count {
                    0 => f.write_str(" }*"),
                    1 => f.write_str(" }+"),
                    n => write!(f, " }}{{{n},}}"),
                }
            }
            Term::Breakpoint => f.write_str("^"),
        }
    }
}

fn write_sequence(f: &mut Formatter<'_>, seq: &Sequence, default_commit: usize) -> fmt::Result {
    if seq.commit != default_commit {
        write!(f, "!{} ", seq.commit)?;
    }
    for (i, term) in seq.terms.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{term}")?;
    }
    Ok(())
}

impl Display for Production {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ::= !{}", self.name, self.body.commit)?;
        for term in &self.body.terms {
            write!(f, " {term}")?;
        }
        Ok(())
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for production in self.productions() {
            writeln!(f, "{production}")?;
        }
        Ok(())
    }
}
