//! Trace event and record types.

use serde::{Deserialize, Serialize};

use crate::parser::ParserKind;

// =============================================================================
// Trace Event
// =============================================================================

/// Something a combinator did during a traced parse.
///
/// `at` is the absolute byte position in the top-level input where the
/// combinator started.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum TraceEvent {
    /// A combinator is about to run.
    Attempt {
        /// Which combinator.
        kind: ParserKind,
        /// Where it started.
        at: usize,
    },

    /// A combinator succeeded.
    Matched {
        /// Which combinator.
        kind: ParserKind,
        /// Where it started.
        at: usize,
        /// The input it consumed.
        consumed: String,
    },

    /// A combinator failed.
    Failed {
        /// Which combinator.
        kind: ParserKind,
        /// Where it started.
        at: usize,
        /// Failure offset relative to `at`.
        offset: usize,
        /// Failure message, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        /// What would have been accepted.
        expected: Vec<String>,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Attempt { .. } => "attempt",
            Self::Matched { .. } => "matched",
            Self::Failed { .. } => "failed",
        }
    }

    /// Returns the combinator the event belongs to.
    #[must_use]
    pub fn kind(&self) -> ParserKind {
        match self {
            Self::Attempt { kind, .. } | Self::Matched { kind, .. } | Self::Failed { kind, .. } => {
                *kind
            }
        }
    }

    /// Returns true if this is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A numbered trace event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Unique record ID within the tracer's lifetime.
    pub id: u64,
    /// Combinator nesting depth, zero for the root.
    pub depth: usize,
    /// The trace event.
    #[serde(flatten)]
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, depth: usize, event: TraceEvent) -> Self {
        Self { id, depth, event }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
