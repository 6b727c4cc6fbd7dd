//! Parse tracing.
//!
//! Records every combinator attempt during [`Parser::parse_traced`] so a game
//! author can see why an input was rejected. Tracing costs nothing unless a
//! tracer is passed in, and a disabled tracer returns from `record`
//! immediately.
//!
//! # Example
//!
//! ```
//! use brdgme_command::trace::{Tracer, TracerConfig};
//! use brdgme_command::Parser;
//!
//! let parser: Parser = Parser::chain(vec![
//!     Parser::token("bid"),
//!     Parser::after_space(Parser::int()),
//! ]);
//! let mut tracer = Tracer::new(TracerConfig::new().enabled());
//! let _ = parser.parse_traced("bid ten", &[], &mut tracer);
//! assert!(!tracer.buffer().failures().is_empty());
//! ```
//!
//! [`Parser::parse_traced`]: crate::Parser::parse_traced

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};

/// Records kept when no buffer size is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 10_000;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write each record to stderr as it is recorded.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Deepest combinator nesting to record (`None` = all).
    pub max_depth: Option<usize>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
            output: TraceOutput::None,
            json_format: false,
            max_depth: None,
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to limit recorded nesting.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Collects trace records for one or more parses.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            human_formatter: HumanFormatter::new(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns whether an event at `depth` would be recorded.
    #[must_use]
    #[inline]
    pub fn wants_depth(&self, depth: usize) -> bool {
        self.config.enabled && self.config.max_depth.is_none_or(|max| depth <= max)
    }

    /// Records a trace event at the given nesting depth.
    #[inline]
    pub fn record(&mut self, depth: usize, event: TraceEvent) {
        if !self.wants_depth(depth) {
            return;
        }

        self.buffer.push(depth, event);
        if self.config.output == TraceOutput::Stderr {
            let _ = self.write_last(&mut io::stderr());
        }
    }

    /// Writes the newest record as one formatted line.
    fn write_last<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.buffer.last() {
            Some(record) => writeln!(out, "{}", self.format_record(record)),
            None => Ok(()),
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Tests
// =============================================================================
