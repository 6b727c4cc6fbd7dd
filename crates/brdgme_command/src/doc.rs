//! Documentation wrappers.

use crate::output::ParseResult;
use crate::parser::{ParseContext, Parser};
use crate::spec::Spec;

/// Names a parser for usage output without changing how it parses.
#[derive(Debug)]
pub struct Doc<C = ()> {
    /// Short name shown in usage syntax.
    pub name: String,
    /// Longer description shown beside the syntax.
    pub desc: Option<String>,
    /// The documented parser.
    pub parser: Box<Parser<C>>,
}

impl<C> Doc<C> {
    /// Names a parser.
    #[must_use]
    pub fn name(name: impl Into<String>, parser: Parser<C>) -> Self {
        Self {
            name: name.into(),
            desc: None,
            parser: Box::new(parser),
        }
    }

    /// Names and describes a parser.
    #[must_use]
    pub fn name_desc(name: impl Into<String>, desc: impl Into<String>, parser: Parser<C>) -> Self {
        Self {
            desc: Some(desc.into()),
            ..Self::name(name, parser)
        }
    }

    pub(crate) fn expected(&self, names: &[String]) -> Vec<String> {
        self.parser.expected(names)
    }

    pub(crate) fn to_spec(&self) -> Spec {
        Spec::Doc {
            name: self.name.clone(),
            desc: self.desc.clone(),
            spec: Box::new(self.parser.to_spec()),
        }
    }
}

impl<C: Clone> Doc<C> {
    pub(crate) fn parse<'a>(
        &self,
        input: &'a str,
        cx: &mut ParseContext<'_>,
    ) -> ParseResult<'a, C> {
        self.parser.parse_in(input, cx)
    }
}
