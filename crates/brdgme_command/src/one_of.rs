//! Ordered alternation.

use crate::error::ParseError;
use crate::output::ParseResult;
use crate::parser::{ParseContext, Parser};
use crate::spec::Spec;
use crate::text::comma_list_or;

/// Tries each parser in order, returning the first success.
///
/// When every alternative fails, only the failures that got furthest into
/// the input are reported: their expectations are concatenated and their
/// messages joined with "or".
#[derive(Debug)]
pub struct OneOf<C = ()> {
    /// Alternatives, in priority order.
    pub parsers: Vec<Parser<C>>,
}

impl<C> OneOf<C> {
    /// Creates an alternation.
    #[must_use]
    pub fn new(parsers: Vec<Parser<C>>) -> Self {
        Self { parsers }
    }

    /// Builder method to add another alternative.
    #[must_use]
    pub fn or(mut self, parser: Parser<C>) -> Self {
        self.parsers.push(parser);
        self
    }

    /// Returns true if there are no alternatives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    pub(crate) fn expected(&self, names: &[String]) -> Vec<String> {
        self.parsers.iter().flat_map(|p| p.expected(names)).collect()
    }

    pub(crate) fn to_spec(&self) -> Spec {
        Spec::OneOf(self.parsers.iter().map(Parser::to_spec).collect())
    }
}

impl<C: Clone> OneOf<C> {
    pub(crate) fn parse<'a>(
        &self,
        input: &'a str,
        cx: &mut ParseContext<'_>,
    ) -> ParseResult<'a, C> {
        let mut deepest: Vec<ParseError> = Vec::new();
        let mut deepest_offset = 0;

        for parser in &self.parsers {
            match parser.parse_in(input, cx) {
                Ok(output) => return Ok(output),
                Err(err) if err.offset > deepest_offset => {
                    deepest_offset = err.offset;
                    deepest = vec![err];
                }
                Err(err) if err.offset == deepest_offset => deepest.push(err),
                Err(_) => {}
            }
        }

        let messages: Vec<String> = deepest
            .iter()
            .filter_map(|e| e.message.clone())
            .filter(|m| !m.is_empty())
            .collect();
        let expected = deepest.into_iter().flat_map(|e| e.expected).collect();
        Err(ParseError {
            message: (!messages.is_empty()).then(|| comma_list_or(&messages)),
            expected,
            offset: deepest_offset,
        })
    }
}
