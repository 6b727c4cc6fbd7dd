//! Logic-free reflection of a grammar.
//!
//! A [`Spec`] describes the shape of a [`Parser`](crate::Parser) without any
//! of its behaviour, so it can be serialized for clients that render command
//! help or offer completions.

use serde::{Deserialize, Serialize};

use crate::parser::ParserKind;

/// Serializable mirror of the parser variants.
///
/// `Map` has no counterpart; it reflects as the spec of the parser it wraps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spec {
    /// See [`Int`](crate::Int).
    Int {
        /// Lowest accepted value.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        /// Highest accepted value.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    /// See [`Token`](crate::Token).
    Token(String),
    /// See [`Enum`](crate::Enum).
    Enum {
        /// Candidate names.
        values: Vec<String>,
        /// Whether names must be typed in full.
        exact: bool,
    },
    /// See [`OneOf`](crate::OneOf).
    OneOf(Vec<Spec>),
    /// See [`Chain`](crate::Chain).
    Chain(Vec<Spec>),
    /// See [`Many`](crate::Many).
    Many {
        /// The repeated spec.
        spec: Box<Spec>,
        /// Fewest repetitions.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        /// Most repetitions.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
        /// Delimiter between repetitions.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delim: Option<Box<Spec>>,
    },
    /// See [`Opt`](crate::Opt).
    Opt(Box<Spec>),
    /// See [`Doc`](crate::Doc).
    Doc {
        /// Short name.
        name: String,
        /// Longer description.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        desc: Option<String>,
        /// The documented spec.
        spec: Box<Spec>,
    },
    /// See [`Player`](crate::Player).
    Player,
    /// See [`Space`](crate::Space).
    Space,
}

impl Spec {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> ParserKind {
        match self {
            Self::Int { .. } => ParserKind::Int,
            Self::Token(_) => ParserKind::Token,
            Self::Enum { .. } => ParserKind::Enum,
            Self::OneOf(_) => ParserKind::OneOf,
            Self::Chain(_) => ParserKind::Chain,
            Self::Many { .. } => ParserKind::Many,
            Self::Opt(_) => ParserKind::Opt,
            Self::Doc { .. } => ParserKind::Doc,
            Self::Player => ParserKind::Player,
            Self::Space => ParserKind::Space,
        }
    }

    /// Serializes to the JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses the JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid spec.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
