//! Optional parsers.

use crate::output::{Output, ParseResult};
use crate::parser::{ParseContext, Parser};
use crate::spec::Spec;
use crate::value::Value;

/// Succeeds whether or not the wrapped parser does.
///
/// A failed child produces [`Value::None`] and consumes nothing.
#[derive(Debug)]
pub struct Opt<C = ()> {
    /// The optional parser.
    pub parser: Box<Parser<C>>,
}

impl<C> Opt<C> {
    /// Wraps a parser.
    #[must_use]
    pub fn new(parser: Parser<C>) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }

    pub(crate) fn expected(&self, names: &[String]) -> Vec<String> {
        self.parser
            .expected(names)
            .into_iter()
            .map(|e| format!("optional {e}"))
            .collect()
    }

    pub(crate) fn to_spec(&self) -> Spec {
        Spec::Opt(Box::new(self.parser.to_spec()))
    }
}

impl<C: Clone> Opt<C> {
    pub(crate) fn parse<'a>(
        &self,
        input: &'a str,
        cx: &mut ParseContext<'_>,
    ) -> ParseResult<'a, C> {
        Ok(self
            .parser
            .parse_in(input, cx)
            .unwrap_or_else(|_| Output::empty(input, Value::None)))
    }
}
