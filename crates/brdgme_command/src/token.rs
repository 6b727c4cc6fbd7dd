//! Case-insensitive literals.

use crate::error::ParseError;
use crate::output::{Output, ParseResult};
use crate::spec::Spec;
use crate::text::shared_prefix;
use crate::value::Value;

/// Matches a literal word, ignoring case.
///
/// The whole token must be present; partial tokens are left to
/// [`Enum`](crate::Enum).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The literal text.
    pub text: String,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub(crate) fn parse<'a, C>(&self, input: &'a str) -> ParseResult<'a, C> {
        let shared = shared_prefix(input, &self.text);
        if shared.chars < self.text.chars().count() {
            return Err(ParseError::expecting(self.expected()));
        }
        Ok(Output::split(
            input,
            shared.bytes,
            Value::Text(self.text.clone()),
        ))
    }

    pub(crate) fn expected(&self) -> Vec<String> {
        vec![self.text.clone()]
    }

    pub(crate) fn to_spec(&self) -> Spec {
        Spec::Token(self.text.clone())
    }
}
