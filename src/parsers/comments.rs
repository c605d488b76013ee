use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::is_not;
use nom::character::complete::char;
use nom::combinator::{opt, value};
use nom::sequence::pair;

/// Consumes a single `;` comment up to (not including) the line break.
pub fn ignore_single_line_comment<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value((), pair(char(';'), opt(is_not("\r\n"))))(input.into())
}
