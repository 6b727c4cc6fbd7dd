//! Parse failure reporting.
//!
//! Uses `thiserror` so a [`ParseError`] can flow straight into a game's own
//! error type.

use thiserror::Error;

use crate::text::comma_list_or;

/// A failed parse.
///
/// `offset` is how many bytes of input the failing branch consumed before it
/// failed. Alternation uses it to prefer the branch that got furthest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{}", describe(.message, .expected))]
pub struct ParseError {
    /// Specific explanation, if the failing parser has one.
    pub message: Option<String>,
    /// Human-readable descriptions of what would have been accepted.
    pub expected: Vec<String>,
    /// Bytes consumed by the failing branch.
    pub offset: usize,
}

impl ParseError {
    /// Creates an error listing what was expected.
    #[must_use]
    pub fn expecting(expected: Vec<String>) -> Self {
        Self {
            message: None,
            expected,
            offset: 0,
        }
    }

    /// Creates an error with only a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            expected: Vec::new(),
            offset: 0,
        }
    }

    /// Builder method to attach a message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builder method to set the offset.
    #[must_use]
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Shifts the offset by input consumed before the failing parser ran.
    #[must_use]
    pub(crate) fn shifted(mut self, consumed: usize) -> Self {
        self.offset += consumed;
        self
    }
}

#[allow(clippy::ref_option)]
fn describe(message: &Option<String>, expected: &[String]) -> String {
    let mut out = String::new();
    if let Some(message) = message {
        out.push_str(message);
        if !expected.is_empty() {
            out.push_str(", ");
        }
    }
    if !expected.is_empty() {
        out.push_str("expected ");
        out.push_str(&comma_list_or(expected));
    }
    out
}
