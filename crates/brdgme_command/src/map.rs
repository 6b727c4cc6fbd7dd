//! Value projections.

use std::fmt;

use crate::output::ParseResult;
use crate::parser::{ParseContext, Parser};
use crate::spec::Spec;
use crate::value::Value;

/// Transformation applied to a successful child value.
pub type MapFn<C> = Box<dyn Fn(Value<C>) -> Value<C> + Send + Sync>;

/// Rewrites the value of a successful parse.
///
/// Failures pass through untouched, and the function cannot fail. The
/// function is invisible to [`Spec`] reflection.
pub struct Map<C = ()> {
    /// The wrapped parser.
    pub parser: Box<Parser<C>>,
    func: MapFn<C>,
}

impl<C: 'static> Map<C> {
    /// Wraps a parser with a value transformation.
    #[must_use]
    pub fn new<F>(parser: Parser<C>, func: F) -> Self
    where
        F: Fn(Value<C>) -> Value<C> + Send + Sync + 'static,
    {
        Self {
            parser: Box::new(parser),
            func: Box::new(func),
        }
    }
}

impl<C> Map<C> {
    pub(crate) fn expected(&self, names: &[String]) -> Vec<String> {
        self.parser.expected(names)
    }

    pub(crate) fn to_spec(&self) -> Spec {
        self.parser.to_spec()
    }
}

impl<C: Clone> Map<C> {
    pub(crate) fn parse<'a>(
        &self,
        input: &'a str,
        cx: &mut ParseContext<'_>,
    ) -> ParseResult<'a, C> {
        self.parser
            .parse_in(input, cx)
            .map(|output| output.map_value(&self.func))
    }
}

impl<C: fmt::Debug> fmt::Debug for Map<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}
