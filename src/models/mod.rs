//! Value types for spelled notes, intervals, and direction.

pub mod interval;
pub mod note;

// Re-export commonly used types
pub use interval::{Direction, IntervalName};
pub use note::{Accidental, Note, NoteLetter, DEGREES_PER_OCTAVE, SEMITONES_PER_OCTAVE};
