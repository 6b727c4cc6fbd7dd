//! The grammar node type and its dispatch.
//!
//! A [`Parser`] is a closed sum over every combinator. Games build a fresh
//! tree for each command attempt from their current state, parse with it, and
//! drop it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::doc::Doc;
use crate::enumeration::{Enum, EnumValue};
use crate::int::Int;
use crate::many::Many;
use crate::map::Map;
use crate::one_of::OneOf;
use crate::opt::Opt;
use crate::output::ParseResult;
use crate::player::Player;
use crate::space::Space;
use crate::spec::Spec;
use crate::token::Token;
use crate::trace::{TraceEvent, Tracer};
use crate::value::Value;

// =============================================================================
// Parser Kind
// =============================================================================

/// The variant tag shared by [`Parser`] and [`Spec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParserKind {
    /// Bounded integer literal.
    Int,
    /// Case-insensitive literal.
    Token,
    /// Prefix-matched candidate set.
    Enum,
    /// Ordered alternation.
    OneOf,
    /// Ordered sequence.
    Chain,
    /// Bounded repetition.
    Many,
    /// Optional parser.
    Opt,
    /// Documentation wrapper.
    Doc,
    /// Player name.
    Player,
    /// Whitespace.
    Space,
    /// Value projection.
    Map,
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "Int",
            Self::Token => "Token",
            Self::Enum => "Enum",
            Self::OneOf => "OneOf",
            Self::Chain => "Chain",
            Self::Many => "Many",
            Self::Opt => "Opt",
            Self::Doc => "Doc",
            Self::Player => "Player",
            Self::Space => "Space",
            Self::Map => "Map",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// Parse Context
// =============================================================================

/// Call-scoped state threaded through a single parse.
pub(crate) struct ParseContext<'c> {
    /// Player names for this call.
    pub(crate) names: &'c [String],
    tracer: Option<&'c mut Tracer>,
    origin_len: usize,
    depth: usize,
}

impl<'c> ParseContext<'c> {
    fn new(origin: &str, names: &'c [String], tracer: Option<&'c mut Tracer>) -> Self {
        Self {
            names,
            tracer,
            origin_len: origin.len(),
            depth: 0,
        }
    }

    /// Absolute byte position of `input` within the top-level input.
    fn position(&self, input: &str) -> usize {
        self.origin_len.saturating_sub(input.len())
    }

    fn tracing(&self) -> bool {
        self.tracer
            .as_deref()
            .is_some_and(|t| t.wants_depth(self.depth))
    }

    fn record(&mut self, event: TraceEvent) {
        let depth = self.depth;
        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.record(depth, event);
        }
    }
}

// =============================================================================
// Parser
// =============================================================================

/// A grammar node.
///
/// `C` is the consumer's command type, produced through [`Parser::map`].
#[derive(Debug)]
pub enum Parser<C = ()> {
    /// See [`Int`].
    Int(Int),
    /// See [`Token`].
    Token(Token),
    /// See [`Enum`].
    Enum(Enum<C>),
    /// See [`OneOf`].
    OneOf(OneOf<C>),
    /// See [`Chain`].
    Chain(Chain<C>),
    /// See [`Many`].
    Many(Many<C>),
    /// See [`Opt`].
    Opt(Opt<C>),
    /// See [`Doc`].
    Doc(Doc<C>),
    /// See [`Player`].
    Player(Player),
    /// See [`Space`].
    Space(Space),
    /// See [`Map`].
    Map(Map<C>),
}

impl<C: Clone> Parser<C> {
    /// Parses a prefix of `input`.
    ///
    /// `names` are the display names of the players in the current game,
    /// used by [`Player`] nodes.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`](crate::ParseError) describing the deepest
    /// failure when no prefix of `input` matches.
    pub fn parse<'a>(&self, input: &'a str, names: &[String]) -> ParseResult<'a, C> {
        let mut cx = ParseContext::new(input, names, None);
        self.parse_in(input, &mut cx)
    }

    /// Parses like [`Parser::parse`], recording every combinator attempt.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::parse`]; tracing never changes the result.
    pub fn parse_traced<'a>(
        &self,
        input: &'a str,
        names: &[String],
        tracer: &mut Tracer,
    ) -> ParseResult<'a, C> {
        let mut cx = ParseContext::new(input, names, Some(tracer));
        self.parse_in(input, &mut cx)
    }

    pub(crate) fn parse_in<'a>(
        &self,
        input: &'a str,
        cx: &mut ParseContext<'_>,
    ) -> ParseResult<'a, C> {
        let kind = self.kind();
        let at = cx.position(input);
        let tracing = cx.tracing();
        if tracing {
            cx.record(TraceEvent::Attempt { kind, at });
        }

        cx.depth += 1;
        let result = match self {
            Self::Int(p) => p.parse(input),
            Self::Token(p) => p.parse(input),
            Self::Enum(p) => p.parse(input),
            Self::OneOf(p) => p.parse(input, cx),
            Self::Chain(p) => p.parse(input, cx),
            Self::Many(p) => p.parse(input, cx),
            Self::Opt(p) => p.parse(input, cx),
            Self::Doc(p) => p.parse(input, cx),
            Self::Player(p) => p.parse(input, cx.names),
            Self::Space(p) => p.parse(input),
            Self::Map(p) => p.parse(input, cx),
        };
        cx.depth -= 1;

        if tracing {
            let event = match &result {
                Ok(output) => TraceEvent::Matched {
                    kind,
                    at,
                    consumed: output.consumed.to_string(),
                },
                Err(err) => TraceEvent::Failed {
                    kind,
                    at,
                    offset: err.offset,
                    message: err.message.clone(),
                    expected: err.expected.clone(),
                },
            };
            cx.record(event);
        }
        result
    }
}

impl<C> Parser<C> {
    /// Describes what this parser accepts, independent of input.
    #[must_use]
    pub fn expected(&self, names: &[String]) -> Vec<String> {
        match self {
            Self::Int(p) => p.expected(),
            Self::Token(p) => p.expected(),
            Self::Enum(p) => p.expected(),
            Self::OneOf(p) => p.expected(names),
            Self::Chain(p) => p.expected(names),
            Self::Many(p) => p.expected(names),
            Self::Opt(p) => p.expected(names),
            Self::Doc(p) => p.expected(names),
            Self::Player(p) => p.expected(names),
            Self::Space(p) => p.expected(),
            Self::Map(p) => p.expected(names),
        }
    }

    /// Reflects this grammar into a logic-free [`Spec`].
    #[must_use]
    pub fn to_spec(&self) -> Spec {
        match self {
            Self::Int(p) => p.to_spec(),
            Self::Token(p) => p.to_spec(),
            Self::Enum(p) => p.to_spec(),
            Self::OneOf(p) => p.to_spec(),
            Self::Chain(p) => p.to_spec(),
            Self::Many(p) => p.to_spec(),
            Self::Opt(p) => p.to_spec(),
            Self::Doc(p) => p.to_spec(),
            Self::Player(_) => Spec::Player,
            Self::Space(_) => Spec::Space,
            Self::Map(p) => p.to_spec(),
        }
    }

    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> ParserKind {
        match self {
            Self::Int(_) => ParserKind::Int,
            Self::Token(_) => ParserKind::Token,
            Self::Enum(_) => ParserKind::Enum,
            Self::OneOf(_) => ParserKind::OneOf,
            Self::Chain(_) => ParserKind::Chain,
            Self::Many(_) => ParserKind::Many,
            Self::Opt(_) => ParserKind::Opt,
            Self::Doc(_) => ParserKind::Doc,
            Self::Player(_) => ParserKind::Player,
            Self::Space(_) => ParserKind::Space,
            Self::Map(_) => ParserKind::Map,
        }
    }

    // -------------------------------------------------------------------------
    // Constructors
    // -------------------------------------------------------------------------

    /// An unbounded integer.
    #[must_use]
    pub fn int() -> Self {
        Self::Int(Int::any())
    }

    /// A case-insensitive literal.
    #[must_use]
    pub fn token(text: impl Into<String>) -> Self {
        Self::Token(Token::new(text))
    }

    /// A non-exact enum over named values.
    #[must_use]
    pub fn enumeration(values: Vec<EnumValue<C>>) -> Self {
        Self::Enum(Enum::partial(values))
    }

    /// An ordered alternation.
    #[must_use]
    pub fn one_of(parsers: Vec<Parser<C>>) -> Self {
        Self::OneOf(OneOf::new(parsers))
    }

    /// An ordered sequence producing a list.
    #[must_use]
    pub fn chain(parsers: Vec<Parser<C>>) -> Self {
        Self::Chain(Chain::new(parsers))
    }

    /// Any number of repetitions, without a delimiter.
    #[must_use]
    pub fn many(parser: Parser<C>) -> Self {
        Self::Many(Many::any(parser))
    }

    /// An optional parser.
    #[must_use]
    pub fn opt(parser: Parser<C>) -> Self {
        Self::Opt(Opt::new(parser))
    }

    /// Attaches a name to a parser.
    #[must_use]
    pub fn doc(name: impl Into<String>, parser: Parser<C>) -> Self {
        Self::Doc(Doc::name(name, parser))
    }

    /// Attaches a name and description to a parser.
    #[must_use]
    pub fn doc_desc(name: impl Into<String>, desc: impl Into<String>, parser: Parser<C>) -> Self {
        Self::Doc(Doc::name_desc(name, desc, parser))
    }

    /// A player name from the names supplied at parse time.
    #[must_use]
    pub fn player() -> Self {
        Self::Player(Player)
    }

    /// One or more whitespace characters.
    #[must_use]
    pub fn space() -> Self {
        Self::Space(Space)
    }
}

impl<C: 'static> Parser<C> {
    /// Transforms the value of a successful parse.
    #[must_use]
    pub fn map<F>(parser: Parser<C>, func: F) -> Self
    where
        F: Fn(Value<C>) -> Value<C> + Send + Sync + 'static,
    {
        Self::Map(Map::new(parser, func))
    }

    /// Requires whitespace before `parser`, keeping only `parser`'s value.
    #[must_use]
    pub fn after_space(parser: Parser<C>) -> Self {
        Self::map(Self::chain(vec![Self::space(), parser]), |value| {
            value.take(1)
        })
    }
}

macro_rules! impl_from_node {
    (generic $($node:ident),* $(,)?) => {
        $(
            impl<C> From<$node<C>> for Parser<C> {
                fn from(node: $node<C>) -> Self {
                    Self::$node(node)
                }
            }
        )*
    };
    ($($node:ident),* $(,)?) => {
        $(
            impl<C> From<$node> for Parser<C> {
                fn from(node: $node) -> Self {
                    Self::$node(node)
                }
            }
        )*
    };
}

impl_from_node!(Int, Token, Player, Space);
impl_from_node!(generic Enum, OneOf, Chain, Many, Opt, Doc, Map);
