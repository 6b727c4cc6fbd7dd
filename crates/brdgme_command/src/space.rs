//! Whitespace separators.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::output::{Output, ParseResult};
use crate::value::Value;

static SPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+").expect("whitespace pattern is valid"));

/// Matches one or more whitespace characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Space;

impl Space {
    pub(crate) fn parse<'a, C>(self, input: &'a str) -> ParseResult<'a, C> {
        match SPACE_PATTERN.find(input) {
            Some(found) => Ok(Output::split(
                input,
                found.end(),
                Value::Text(found.as_str().to_string()),
            )),
            None => Err(ParseError::expecting(self.expected()).with_message("expected whitespace")),
        }
    }

    pub(crate) fn expected(self) -> Vec<String> {
        vec!["whitespace".to_string()]
    }
}
