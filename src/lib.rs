//! Diatonic interval engine for Western note spelling.
//!
//! Builds the note a named interval away from a root, and names the
//! interval between two spelled notes. Covers the eleven canonical
//! interval names from minor second through perfect octave, with single
//! and double accidentals, in either direction.
//!
//! The string-token surface lives in [`api`]; the typed operations are
//! [`construct`] and [`identify`].

pub mod api;
pub mod arithmetic;
pub mod error;
pub mod models;
pub mod parse;

// Re-export commonly used types
pub use api::{interval_construction, interval_identification};
pub use arithmetic::{construct, identify};
pub use error::IntervalError;
pub use models::*;
pub use parse::parse_note;
