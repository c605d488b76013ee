//! Provides parsers for problem definitions.

use crate::parsed_types::Problem;
use crate::parsers::{
    ignore_single_line_comment, leading_whitespace, parse_predicate, skip_trivia,
    whitespace_separated_list0, ParseResult, Span,
};
use crate::search::Predicate;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{anychar, char, multispace1};
use nom::combinator::{all_consuming, map, not, opt, value};
use nom::multi::many0_count;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};

/// Skips everything before the first `:INIT` keyword outside a comment,
/// ignoring case. If there is no such keyword the whole input is skipped.
fn skip_preamble(input: Span) -> ParseResult<()> {
    value(
        (),
        many0_count(alt((
            value((), multispace1::<Span, _>),
            ignore_single_line_comment,
            value((), preceded(not(tag_no_case(":INIT")), anychar)),
        ))),
    )(input)
}

/// Parses the predicates of a section, optionally wrapped in `(AND ...)`.
fn predicate_list(input: Span) -> ParseResult<Vec<Predicate>> {
    alt((
        delimited(
            pair(leading_whitespace(char('(')), leading_whitespace(tag_no_case("AND"))),
            whitespace_separated_list0(parse_predicate),
            leading_whitespace(char(')')),
        ),
        whitespace_separated_list0(parse_predicate),
    ))(input)
}

/// Parses a section such as `:INIT (ON A B) (CLEAR A)`, optionally opened by
/// `(` and closed by `)`.
fn section<'a>(keyword: &'static str) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<Predicate>> {
    preceded(
        leading_whitespace(pair(opt(char('(')), tag_no_case(keyword))),
        terminated(predicate_list, opt(leading_whitespace(char(')')))),
    )
}

/// Parses a problem definition: an `:INIT` section followed by a `:GOAL`
/// section and any number of closing parentheses.
///
/// ## Example
/// ```
/// # use bwsearch::parsers::parse_problem;
/// # use bwsearch::search::Predicate;
/// let input = r#"(define (problem stack-2)
///     (:domain blocks)
///     (:INIT (CLEAR A) (CLEAR B) (ON A B))
///     (:GOAL (AND (ON A TABLE))))"#;
///
/// let (remainder, problem) = parse_problem(input).unwrap();
///
/// assert!(remainder.is_empty());
/// assert_eq!(problem.init().len(), 3);
/// assert_eq!(problem.goal(), &[Predicate::on("A", "TABLE")]);
/// ```
pub fn parse_problem<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Problem> {
    map(
        all_consuming(tuple((
            preceded(skip_preamble, section(":INIT")),
            section(":GOAL"),
            terminated(many0_count(leading_whitespace(char(')'))), skip_trivia),
        ))),
        |(init, goal, _)| Problem::new(init, goal),
    )(input.into())
}

impl crate::parsers::Parser for Problem {
    type Item = Problem;

    /// Parses a problem definition.
    ///
    /// ## Example
    /// ```
    /// # use bwsearch::parsers::Parser;
    /// # use bwsearch::parsed_types::Problem;
    /// let problem = Problem::from_str(":INIT (ON A B) :GOAL (ON A TABLE)").unwrap();
    /// assert_eq!(problem.init().len(), 1);
    /// ```
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_problem(input)
    }
}
