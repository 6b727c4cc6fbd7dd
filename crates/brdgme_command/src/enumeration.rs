//! Prefix matching against a set of named candidates.
//!
//! Players may type any unambiguous abbreviation of a candidate, so "azu"
//! selects "Azuchi". Resolution walks the candidates in order:
//!
//! - a longer shared prefix replaces every earlier candidate
//! - at equal length, a full match replaces earlier partial matches
//! - once a full match is held, partial matches of the same length are
//!   ignored, but further full matches are kept alongside it
//!
//! Exactly one survivor is a match. Several survivors are an ambiguity the
//! player has to resolve by typing more.

use crate::error::ParseError;
use crate::output::{Output, ParseResult};
use crate::spec::Spec;
use crate::text::{comma_list_and, shared_prefix};
use crate::value::Value;

/// A named candidate and the value it produces.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<C = ()> {
    /// Name the player types.
    pub name: String,
    /// Value produced on a match.
    pub value: Value<C>,
}

impl<C> EnumValue<C> {
    /// Creates a candidate.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value<C>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Matches a unique candidate by case-insensitive prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct Enum<C = ()> {
    /// Candidates, in priority order.
    pub values: Vec<EnumValue<C>>,
    /// Whether a candidate's whole name must be typed.
    pub exact: bool,
}

impl<C> Enum<C> {
    /// Candidates that must be typed in full.
    #[must_use]
    pub fn exact(values: Vec<EnumValue<C>>) -> Self {
        Self {
            values,
            exact: true,
        }
    }

    /// Candidates that may be abbreviated.
    #[must_use]
    pub fn partial(values: Vec<EnumValue<C>>) -> Self {
        Self {
            values,
            exact: false,
        }
    }

    /// Candidates named by strings, each producing its own name as text.
    #[must_use]
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>, exact: bool) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|name| {
                    let name = name.into();
                    EnumValue {
                        value: Value::Text(name.clone()),
                        name,
                    }
                })
                .collect(),
            exact,
        }
    }

    /// Candidates named by integers, each producing the integer.
    #[must_use]
    pub fn from_ints(values: impl IntoIterator<Item = i64>, exact: bool) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|n| EnumValue::new(n.to_string(), Value::Int(n)))
                .collect(),
            exact,
        }
    }

    /// Names of every candidate, in order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.values.iter().map(|v| v.name.clone()).collect()
    }

    pub(crate) fn expected(&self) -> Vec<String> {
        self.names()
    }

    pub(crate) fn to_spec(&self) -> Spec {
        Spec::Enum {
            values: self.names(),
            exact: self.exact,
        }
    }
}

impl<C: Clone> Enum<C> {
    pub(crate) fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, C> {
        let mut matched: Vec<&EnumValue<C>> = Vec::new();
        let mut match_len = 0;
        let mut match_bytes = 0;
        let mut full_match = false;

        for candidate in &self.values {
            let shared = shared_prefix(input, &candidate.name);
            let full = shared.chars == candidate.name.chars().count();
            if self.exact && !full {
                continue;
            }
            if shared.chars == 0 || shared.chars < match_len {
                continue;
            }

            if shared.chars > match_len || (full && !full_match) {
                matched.clear();
                match_len = shared.chars;
                match_bytes = shared.bytes;
                full_match = full;
            }
            if full || !full_match {
                matched.push(candidate);
            }
        }

        match matched.as_slice() {
            [only] => Ok(Output::split(input, match_bytes, only.value.clone())),
            [] => Err(ParseError::expecting(self.expected())),
            several => {
                let names: Vec<&str> = several.iter().map(|v| v.name.as_str()).collect();
                Err(ParseError::expecting(self.expected()).with_message(format!(
                    "matched {}, more input is required to uniquely match one",
                    comma_list_and(&names)
                )))
            }
        }
    }
}
