//! # Error Types
//!
//! Errors raised by the foundational types. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Load and validation failures live in `timeline-schema`; this module only
//! covers the primitives those layers are built on.

use thiserror::Error;

/// Top-level error type for the core primitives.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// A date value is not a parseable ISO-8601 timestamp.
    #[error("invalid ISO-8601 timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The text that was handed to the parser.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// A YAML value has no JSON equivalent.
    #[error("value conversion error: {0}")]
    Conversion(String),
}
