//! Utility parsers.

use crate::parsers::{ignore_single_line_comment, ParseResult, Span};
use nom::{
    branch::alt,
    character::complete::{char, multispace1},
    combinator::value,
    multi::{many0, many0_count},
    sequence::{delimited, preceded},
};

/// Consumes any mix of whitespace and line comments.
pub fn skip_trivia<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        many0_count(alt((
            value((), multispace1::<Span<'a>, _>),
            ignore_single_line_comment,
        ))),
    )(input.into())
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading whitespace and comments, returning the output of `inner`.
pub fn leading_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(skip_trivia, inner)
}

/// A combinator that takes a parser `inner` and produces a parser that
/// consumes zero or more occurrences of `inner`, each optionally preceded by
/// whitespace, returning the outputs of `inner`.
pub fn whitespace_separated_list0<'a, F, O>(
    inner: F,
) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    many0(leading_whitespace(inner))
}

/// A combinator that takes a parser `inner` and produces a parser that consumes
/// surrounding parentheses, returning the outputs of `inner`.
pub fn parens<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(
        char('('),
        leading_whitespace(inner),
        leading_whitespace(char(')')),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{parse_object, Match};
    use crate::search::Object;

    #[test]
    fn parens_works() {
        let mut parser = parens(parse_object);
        assert!(parser(Span::new("(content)")).is_exactly(Object::new("content")));
        assert!(parser(Span::new("( content )")).is_exactly(Object::new("content")));
        assert!(parser(Span::new("content")).is_err());
    }

    #[test]
    fn trivia_skips_comments_and_blank_lines() {
        let (remainder, _) = skip_trivia("  ; first\n\n ; second\n  (ON A B)").unwrap();
        assert_eq!(remainder.fragment(), &"(ON A B)");
    }

    #[test]
    fn whitespace_separated_list0_works() {
        let mut parser = whitespace_separated_list0(parse_object);
        assert!(parser(Span::new("x y")).is_exactly(vec![Object::new("x"), Object::new("y")]));
        assert!(parser(Span::new("x")).is_exactly(vec![Object::new("x")]));
        assert!(parser(Span::new("")).is_exactly(vec![]));
    }

    #[test]
    fn whitespace_separated_list0_leaves_the_rest() {
        let mut parser = whitespace_separated_list0(parens(parse_object));
        assert!(
            parser(Span::new("(x) (y) ) z")).is_value(vec![Object::new("x"), Object::new("y")])
        );
    }
}
