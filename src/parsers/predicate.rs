//! Provides parsers for objects and predicates.

use crate::parsers::{parens, ParseResult, Span};
use crate::search::{Object, Predicate};
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::multispace1;
use nom::combinator::map;
use nom::sequence::{pair, preceded};

/// Parses an object name: any run of characters other than whitespace,
/// parentheses and `;`. The name is normalised to uppercase.
pub fn parse_object<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Object> {
    map(
        take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')' && c != ';'),
        |name: Span<'a>| Object::new(name.fragment()),
    )(input.into())
}

/// Parses a predicate without parentheses, i.e. `ON a b` or `CLEAR a`.
///
/// ## Example
/// ```
/// # use bwsearch::parsers::parse_bare_predicate;
/// # use bwsearch::search::Predicate;
/// let (_, predicate) = parse_bare_predicate("on a table").unwrap();
/// assert_eq!(predicate, Predicate::on("A", "TABLE"));
/// ```
pub fn parse_bare_predicate<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Predicate> {
    alt((
        map(
            preceded(
                tag_no_case("ON"),
                pair(
                    preceded(multispace1, parse_object),
                    preceded(multispace1, parse_object),
                ),
            ),
            |(block, below)| Predicate::On(block, below),
        ),
        map(
            preceded(tag_no_case("CLEAR"), preceded(multispace1, parse_object)),
            Predicate::Clear,
        ),
    ))(input.into())
}

/// Parses a parenthesised predicate, i.e. `(ON a b)` or `(CLEAR a)`.
pub fn parse_predicate<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Predicate> {
    parens(parse_bare_predicate)(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Match;

    #[test]
    fn object_stops_at_delimiters() {
        assert!(parse_object("b1)").is_value(Object::new("B1")));
        assert!(parse_object("b1 b2").is_value(Object::new("B1")));
        assert!(parse_object("b1;x").is_value(Object::new("B1")));
        assert!(parse_object("").is_err());
        assert!(parse_object("(b1").is_err());
    }

    #[test]
    fn on_and_clear() {
        assert!(parse_predicate("(ON A B)").is_exactly(Predicate::on("A", "B")));
        assert!(parse_predicate("(clear a)").is_exactly(Predicate::clear("A")));
        assert!(parse_predicate("( ON  b1\tTABLE )").is_exactly(Predicate::on("B1", "TABLE")));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert!(parse_predicate("(ON A)").is_err());
        assert!(parse_predicate("(CLEAR A B)").is_err());
    }

    #[test]
    fn unknown_predicates_are_rejected() {
        assert!(parse_predicate("(HOLDING A)").is_err());
        assert!(parse_predicate("(ONTOP A B)").is_err());
    }

    #[test]
    fn bare_predicate_leaves_trailing_input() {
        let (remainder, predicate) = parse_bare_predicate("CLEAR A)").unwrap();
        assert_eq!(predicate, Predicate::clear("A"));
        assert_eq!(remainder.fragment(), &")");
    }
}
