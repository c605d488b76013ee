use crate::parsers::{parse_bare_predicate, parse_predicate, ParseResult, Parser, Span};
use crate::search::Object;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

/// An atomic fact about the blocks world.
///
/// The derived ordering sorts all `CLEAR` facts before all `ON` facts and
/// then by argument names, which matches the lexicographic order of the
/// rendered text for the usual single-token block names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Predicate {
    /// `CLEAR a`: nothing sits on `a`.
    Clear(Object),
    /// `ON a b`: block `a` sits on `b`, where `b` may be the table.
    On(Object, Object),
}

impl Predicate {
    pub fn clear(object: impl Into<Object>) -> Self {
        Predicate::Clear(object.into())
    }

    pub fn on(block: impl Into<Object>, below: impl Into<Object>) -> Self {
        Predicate::On(block.into(), below.into())
    }

    pub fn is_on(&self) -> bool {
        matches!(self, Predicate::On(..))
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Predicate::Clear(object) => write!(f, "CLEAR {}", object),
            Predicate::On(block, below) => write!(f, "ON {} {}", block, below),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid predicate {input:?}, expected `ON <a> <b>` or `CLEAR <a>`")]
pub struct PredicateError {
    input: String,
}

impl FromStr for Predicate {
    type Err = PredicateError;

    /// Parses `ON a b` or `CLEAR a`, ignoring case and surrounding
    /// whitespace. Parentheses are not accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_bare_predicate(s.trim()) {
            Ok((remainder, predicate)) if remainder.is_empty() => Ok(predicate),
            _ => Err(PredicateError {
                input: s.to_string(),
            }),
        }
    }
}

impl Parser for Predicate {
    type Item = Predicate;

    /// Parses a parenthesised predicate, i.e. `(ON a b)` or `(CLEAR a)`.
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_predicate(input)
    }
}
