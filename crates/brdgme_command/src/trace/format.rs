//! Trace output formatters.

use std::fmt::Write;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records, one per line.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records as an indented call tree.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut line = String::new();
        if self.show_ids {
            let _ = write!(line, "[{:06}] ", record.id);
        }
        for _ in 0..record.depth {
            line.push_str("  ");
        }

        match &record.event {
            TraceEvent::Attempt { kind, at } => {
                let _ = write!(line, "> {kind} @{at}");
            }
            TraceEvent::Matched { kind, at, consumed } => {
                let _ = write!(line, "+ {kind} @{at} {consumed:?}");
            }
            TraceEvent::Failed {
                kind,
                at,
                offset,
                message,
                expected,
            } => {
                let _ = write!(line, "- {kind} @{at}+{offset}");
                if let Some(message) = message {
                    let _ = write!(line, " {message}");
                }
                if !expected.is_empty() {
                    let _ = write!(line, " (expected {})", expected.join(", "));
                }
            }
        }
        line
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON objects.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        };
        json.unwrap_or_else(|err| json_error(&err))
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let json = if self.pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        };
        json.unwrap_or_else(|err| json_error(&err))
    }
}

fn json_error(err: &serde_json::Error) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}
