//! Bounded repetition.

use crate::error::ParseError;
use crate::output::{Output, ParseResult};
use crate::parser::{ParseContext, Parser};
use crate::spec::Spec;
use crate::value::Value;

/// Greedily repeats a parser, optionally separated by a delimiter.
///
/// Repetition stops at the first failure, at `max`, or when a repetition
/// (including its delimiter) consumes no input. Only the first item may be
/// zero-width when a delimiter is set. A `max` of zero, or a `min` above `max`, accepts
/// nothing and always succeeds.
#[derive(Debug)]
pub struct Many<C = ()> {
    /// The repeated parser.
    pub parser: Box<Parser<C>>,
    /// Fewest repetitions accepted.
    pub min: Option<usize>,
    /// Most repetitions consumed.
    pub max: Option<usize>,
    /// Required between repetitions.
    pub delim: Option<Box<Parser<C>>>,
}

impl<C> Many<C> {
    /// Any number of repetitions.
    #[must_use]
    pub fn any(parser: Parser<C>) -> Self {
        Self {
            parser: Box::new(parser),
            min: None,
            max: None,
            delim: None,
        }
    }

    /// One or more repetitions.
    #[must_use]
    pub fn some(parser: Parser<C>) -> Self {
        Self {
            min: Some(1),
            ..Self::any(parser)
        }
    }

    /// Between `min` and `max` repetitions inclusive.
    #[must_use]
    pub fn bounded(parser: Parser<C>, min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::any(parser)
        }
    }

    /// Builder method to require a delimiter between repetitions.
    #[must_use]
    pub fn with_delim(mut self, delim: Parser<C>) -> Self {
        self.delim = Some(Box::new(delim));
        self
    }

    fn accepts_nothing(&self) -> bool {
        match (self.min, self.max) {
            (_, Some(0)) => true,
            (Some(min), Some(max)) => min > max,
            _ => false,
        }
    }

    fn expected_prefix(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("between {min} and {max}"),
            (Some(min), None) => format!("{min} or more"),
            (None, Some(max)) => format!("up to {max}"),
            (None, None) => "any number of".to_string(),
        }
    }

    pub(crate) fn expected(&self, names: &[String]) -> Vec<String> {
        let prefix = self.expected_prefix();
        self.parser
            .expected(names)
            .into_iter()
            .map(|e| format!("{prefix} {e}"))
            .collect()
    }

    pub(crate) fn to_spec(&self) -> Spec {
        Spec::Many {
            spec: Box::new(self.parser.to_spec()),
            min: self.min,
            max: self.max,
            delim: self.delim.as_ref().map(|d| Box::new(d.to_spec())),
        }
    }
}

impl<C: Clone> Many<C> {
    pub(crate) fn parse<'a>(
        &self,
        input: &'a str,
        cx: &mut ParseContext<'_>,
    ) -> ParseResult<'a, C> {
        if self.accepts_nothing() {
            return Ok(Output::empty(input, Value::List(Vec::new())));
        }

        let mut parsed = Vec::new();
        let mut offset = 0;
        loop {
            let mut item_start = offset;
            if !parsed.is_empty() {
                if let Some(delim) = &self.delim {
                    match delim.parse_in(&input[offset..], cx) {
                        Ok(output) => item_start += output.consumed.len(),
                        Err(_) => break,
                    }
                }
            }

            let Ok(output) = self.parser.parse_in(&input[item_start..], cx) else {
                break;
            };
            parsed.push(output.value);
            let item_end = item_start + output.consumed.len();
            // A zero-width first item may still be followed by a delimiter.
            let stalled = item_end == offset && (self.delim.is_none() || parsed.len() > 1);
            offset = item_end;

            if stalled || self.max.is_some_and(|max| parsed.len() >= max) {
                break;
            }
        }

        if let Some(min) = self.min {
            if parsed.len() < min {
                return Err(ParseError::message(format!(
                    "expected at least {min} items but could only parse {}",
                    parsed.len()
                ))
                .at(offset));
            }
        }
        Ok(Output::split(input, offset, Value::List(parsed)))
    }
}
