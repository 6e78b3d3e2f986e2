//! Error types for interval construction and identification.
//!
//! Every failure is an invalid-input class. Nothing here is transient,
//! so callers never retry.

use thiserror::Error;

/// Top-level error type for both operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntervalError {
    /// Token list has the wrong length, or a required slot is absent
    #[error("Missing argument: expected 2 or 3 tokens")]
    MissingArgument,

    /// Note token does not start with a natural note letter
    #[error("Invalid note: {0:?}")]
    InvalidNote(String),

    /// Interval token is not one of the canonical interval names
    #[error("Unknown interval: {0:?}")]
    UnknownInterval(String),

    /// Direction token is neither "asc" nor "dsc"
    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    /// Construction needs an accidental beyond double sharp or double flat
    #[error("No accidental spells a {offset} semitone adjustment")]
    UnresolvableAccidental { offset: i32 },

    /// Degree and semitone spans match none of the canonical intervals
    #[error("No interval spans {degrees} degrees and {semitones} semitones")]
    UnresolvableInterval { degrees: i32, semitones: i32 },
}
