//! Interval identification: two notes and a direction to the interval name.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::arithmetic::distance::{natural_degree_distance, natural_semitone_distance};
use crate::error::IntervalError;
use crate::models::{Direction, IntervalName, Note};

lazy_static! {
    /// Span pairs back to interval names, for lookup by measurement.
    static ref INTERVAL_BY_SPANS: HashMap<(i32, i32), IntervalName> = {
        let mut table = HashMap::new();
        for &name in IntervalName::ALL.iter() {
            table.insert((name.degree_span(), name.semitone_span()), name);
        }
        table
    };
}

/// Name the interval between two spelled notes.
///
/// Measures the degree and semitone spans between the notes, folds each
/// note's accidental into the semitone count, and looks the pair up in
/// the span table. Two notes on the same letter name an octave outright,
/// accidentals unexamined.
pub fn identify(
    first: Note,
    second: Note,
    direction: Direction,
) -> Result<IntervalName, IntervalError> {
    if first.letter == second.letter {
        return Ok(IntervalName::Perf8);
    }

    // +1 because an interval counts both of its endpoints
    let degrees = natural_degree_distance(first.letter, second.letter, direction) + 1;
    let natural_semitones = natural_semitone_distance(first.letter, second.letter, direction);

    let first_offset = first.accidental.semitone_offset();
    let second_offset = second.accidental.semitone_offset();

    // Descending treats the first note as the higher one, so the
    // accidental signs swap relative to ascending.
    let semitones = match direction {
        Direction::Ascending => natural_semitones - first_offset + second_offset,
        Direction::Descending => natural_semitones + first_offset - second_offset,
    };

    INTERVAL_BY_SPANS
        .get(&(degrees, semitones.abs()))
        .copied()
        .ok_or(IntervalError::UnresolvableInterval {
            degrees,
            semitones: semitones.abs(),
        })
}
