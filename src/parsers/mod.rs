//! Parsers for the blocks world problem file format.
//!
//! A problem file lists the facts of the initial state after `:INIT` and the
//! facts of the goal after `:GOAL`, each as a parenthesised predicate:
//!
//! ```text
//! (define (problem stack-3)
//! (:INIT (CLEAR A) (CLEAR B)
//!        (ON A B))
//! (:GOAL (ON A TABLE))
//! )
//! ```
//!
//! Keywords and names are case-insensitive; names are normalised to
//! uppercase. Anything before the `:INIT` keyword is ignored and `;` starts a
//! comment that runs to the end of the line.

mod comments;
mod predicate;
mod problem;
#[cfg(test)]
mod test_helpers;
mod utilities;

#[cfg(test)]
pub(crate) use test_helpers::Match;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    fn parse_span(input: Span) -> ParseResult<Self::Item> {
        Self::parse(input)
    }

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

// Parsers
pub use comments::ignore_single_line_comment;
pub use predicate::{parse_bare_predicate, parse_object, parse_predicate};
pub use problem::parse_problem;
pub use utilities::{leading_whitespace, parens, skip_trivia, whitespace_separated_list0};
