//! Successful parse output.

use crate::value::Value;

/// A successful parse of a prefix of some input.
///
/// `consumed` and `remaining` borrow from the input handed to the parser, and
/// `consumed + remaining` always equals that input.
#[derive(Clone, Debug, PartialEq)]
pub struct Output<'a, C = ()> {
    /// The parsed value.
    pub value: Value<C>,
    /// The matched prefix of the input.
    pub consumed: &'a str,
    /// The unmatched suffix of the input.
    pub remaining: &'a str,
}

impl<'a, C> Output<'a, C> {
    /// Splits `input` after `len` bytes, producing `value`.
    ///
    /// `len` must fall on a character boundary of `input`.
    #[must_use]
    pub(crate) fn split(input: &'a str, len: usize, value: Value<C>) -> Self {
        let (consumed, remaining) = input.split_at(len);
        Self {
            value,
            consumed,
            remaining,
        }
    }

    /// An output that consumes nothing.
    #[must_use]
    pub(crate) fn empty(input: &'a str, value: Value<C>) -> Self {
        Self::split(input, 0, value)
    }

    /// Replaces the value, keeping the consumed and remaining slices.
    #[must_use]
    pub fn map_value(self, f: impl FnOnce(Value<C>) -> Value<C>) -> Self {
        Self {
            value: f(self.value),
            consumed: self.consumed,
            remaining: self.remaining,
        }
    }
}

/// Result of running a parser.
pub type ParseResult<'a, C = ()> = Result<Output<'a, C>, crate::error::ParseError>;
