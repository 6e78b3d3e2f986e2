//! Interval construction: note + interval + direction to the other note.

use crate::arithmetic::distance::natural_semitone_distance;
use crate::error::IntervalError;
use crate::models::{Accidental, Direction, IntervalName, Note};

/// Build the note lying a named interval away from `root`.
///
/// The target letter comes from walking the letter cycle by the
/// interval's degree span. The target accidental then absorbs the gap
/// between the semitones the interval demands and the semitones the
/// naturals actually span, plus whatever accidental the root carries.
///
/// An octave returns the root's bare letter, accidental dropped.
pub fn construct(
    interval: IntervalName,
    root: Note,
    direction: Direction,
) -> Result<Note, IntervalError> {
    if interval == IntervalName::Perf8 {
        return Ok(Note::natural(root.letter));
    }

    // Span counts both endpoints, so the walk is one step shorter
    let mut degree_steps = interval.degree_span() - 1;
    if direction == Direction::Descending {
        degree_steps = -degree_steps;
    }
    let target_letter = root.letter.step(degree_steps);

    let mut interval_semitones = interval.semitone_span();
    let mut natural_semitones = natural_semitone_distance(root.letter, target_letter, direction);
    if direction == Direction::Descending {
        interval_semitones = -interval_semitones;
        natural_semitones = -natural_semitones;
    }

    let offset = interval_semitones - natural_semitones + root.accidental.semitone_offset();
    let accidental =
        Accidental::from_offset(offset).ok_or(IntervalError::UnresolvableAccidental { offset })?;

    Ok(Note::new(target_letter, accidental))
}
