//! Parse error types for shorthand workout descriptions.

use thiserror::Error;

use crate::types::ValidationError;

/// An error that occurred while parsing a workout description.
///
/// Parsing is deterministic, so none of these are retryable; each names the
/// offending fragment so the caller can point the athlete at it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The description was empty or whitespace-only.
    #[error("workout description cannot be empty")]
    EmptyInput,

    /// Normalization and segmentation produced no step segments.
    #[error("no workout steps found in description")]
    NoStepsFound,

    /// A segment matched none of the grammar rules.
    #[error("cannot parse step: '{segment}'")]
    UnparsableSegment { segment: String },

    /// A duration used a unit token outside the synonym table.
    #[error("unknown duration unit: '{unit}'")]
    UnknownUnit { unit: String },

    /// A target clause contained a colon but no clean `M:SS` token.
    #[error("pace must be in 'M:SS' or 'MM:SS' format, got: '{text}'")]
    InvalidPaceFormat { text: String },

    /// A pace token's seconds field was 60 or more.
    #[error("pace seconds must be less than 60, got: {seconds}")]
    InvalidPaceSeconds { seconds: u32 },

    /// A constructed step violated an entity invariant (e.g. an in-grammar
    /// but out-of-range heart rate).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
