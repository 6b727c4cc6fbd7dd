//! Bounded integer literals.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::output::{Output, ParseResult};
use crate::spec::Spec;
use crate::value::Value;

static INT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+").expect("integer pattern is valid"));

/// Matches an optionally negative decimal integer with inclusive bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Int {
    /// Smallest accepted value.
    pub min: Option<i64>,
    /// Largest accepted value.
    pub max: Option<i64>,
}

impl Int {
    /// Any integer.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Integers of 1 or more.
    #[must_use]
    pub const fn positive() -> Self {
        Self::at_least(1)
    }

    /// Integers of 0 or more.
    #[must_use]
    pub const fn not_negative() -> Self {
        Self::at_least(0)
    }

    /// Integers of `min` or more.
    #[must_use]
    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Integers of `max` or less.
    #[must_use]
    pub const fn at_most(max: i64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Integers between `min` and `max` inclusive.
    #[must_use]
    pub const fn bounded(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    fn expected_output(&self) -> String {
        match (self.min, self.max) {
            (None, None) => "number".to_string(),
            (Some(min), None) => format!("number {min} or higher"),
            (None, Some(max)) => format!("number {max} or lower"),
            (Some(min), Some(max)) => format!("number between {min} and {max}"),
        }
    }

    pub(crate) fn parse<'a, C>(&self, input: &'a str) -> ParseResult<'a, C> {
        let Some(found) = INT_PATTERN.find(input) else {
            return Err(ParseError::expecting(self.expected()));
        };
        let text = found.as_str();
        let value: i64 = text.parse().map_err(|_| {
            ParseError::expecting(self.expected()).with_message(format!("{text} is out of range"))
        })?;

        if let Some(min) = self.min {
            if value < min {
                return Err(ParseError::expecting(self.expected())
                    .with_message(format!("{value} is too low")));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(ParseError::expecting(self.expected())
                    .with_message(format!("{value} is too high")));
            }
        }
        Ok(Output::split(input, found.end(), Value::Int(value)))
    }

    pub(crate) fn expected(&self) -> Vec<String> {
        vec![self.expected_output()]
    }

    pub(crate) fn to_spec(self) -> Spec {
        Spec::Int {
            min: self.min,
            max: self.max,
        }
    }
}
