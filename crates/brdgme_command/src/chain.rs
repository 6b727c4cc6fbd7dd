//! Ordered sequences.

use crate::output::{Output, ParseResult};
use crate::parser::{ParseContext, Parser};
use crate::spec::Spec;
use crate::value::Value;

/// Runs each parser on the input left by the previous one.
///
/// Produces a [`Value::List`] of the child values. A failure is reported at
/// its absolute position, so alternation can rank it against failures in
/// other branches.
#[derive(Debug)]
pub struct Chain<C = ()> {
    /// Parsers, in sequence.
    pub parsers: Vec<Parser<C>>,
}

impl<C> Chain<C> {
    /// Creates a sequence.
    #[must_use]
    pub fn new(parsers: Vec<Parser<C>>) -> Self {
        Self { parsers }
    }

    /// Builder method to append a parser.
    #[must_use]
    pub fn then(mut self, parser: Parser<C>) -> Self {
        self.parsers.push(parser);
        self
    }

    /// Only the first parser can be reached without consuming input.
    pub(crate) fn expected(&self, names: &[String]) -> Vec<String> {
        self.parsers
            .first()
            .map(|p| p.expected(names))
            .unwrap_or_default()
    }

    pub(crate) fn to_spec(&self) -> Spec {
        Spec::Chain(self.parsers.iter().map(Parser::to_spec).collect())
    }
}

impl<C: Clone> Chain<C> {
    pub(crate) fn parse<'a>(
        &self,
        input: &'a str,
        cx: &mut ParseContext<'_>,
    ) -> ParseResult<'a, C> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut offset = 0;

        for parser in &self.parsers {
            let output = parser
                .parse_in(&input[offset..], cx)
                .map_err(|err| err.shifted(offset))?;
            values.push(output.value);
            offset += output.consumed.len();
        }

        Ok(Output::split(input, offset, Value::List(values)))
    }
}
