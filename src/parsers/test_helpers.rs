use crate::parsers::ParseResult;

/// Assertion helpers for parser results in tests.
pub(crate) trait Match<T> {
    /// The parser succeeded and produced `value`, possibly leaving input.
    fn is_value(&self, value: T) -> bool;

    /// The parser succeeded, produced `value` and consumed all input.
    fn is_exactly(&self, value: T) -> bool;
}

impl<'a, T: PartialEq> Match<T> for ParseResult<'a, T> {
    fn is_value(&self, value: T) -> bool {
        matches!(self, Ok((_, parsed)) if *parsed == value)
    }

    fn is_exactly(&self, value: T) -> bool {
        matches!(self, Ok((remainder, parsed)) if remainder.is_empty() && *parsed == value)
    }
}
