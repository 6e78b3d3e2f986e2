//! Distance between natural notes, measured along the letter cycle.
//!
//! Both construction and identification reduce to the same question: how
//! far apart would two notes be if both were naturals? These helpers
//! answer it in scale degrees and in semitones, for either direction of
//! travel.

use crate::models::{Direction, NoteLetter, DEGREES_PER_OCTAVE, SEMITONES_PER_OCTAVE};

/// Semitone distance from `first` to `second`, walking in `direction`.
///
/// The irregular letter gaps are summed over the upward arc between the
/// two letters, then complemented to the other arc of the octave when
/// the walk actually traverses the cycle downward.
pub fn natural_semitone_distance(
    first: NoteLetter,
    second: NoteLetter,
    direction: Direction,
) -> i32 {
    let (low, high, effective) = oriented_span(first, second, direction);

    let mut semitones: i32 = NoteLetter::ALL[low..high]
        .iter()
        .map(|letter| letter.semitones_to_next())
        .sum();

    if effective == Direction::Descending {
        semitones = SEMITONES_PER_OCTAVE - semitones % SEMITONES_PER_OCTAVE;
    }
    semitones
}

/// Degree distance from `first` to `second`, walking in `direction`.
/// Counts steps between the letters, exclusive of the starting one.
pub fn natural_degree_distance(
    first: NoteLetter,
    second: NoteLetter,
    direction: Direction,
) -> i32 {
    let (low, high, effective) = oriented_span(first, second, direction);

    let mut degrees = (high - low) as i32;

    if effective == Direction::Descending {
        degrees = DEGREES_PER_OCTAVE - degrees % DEGREES_PER_OCTAVE;
    }
    degrees
}

/// Orient a letter pair as an upward arc plus the direction actually
/// traversed. Walking from a later letter to an earlier one covers the
/// arc backwards, which flips the requested direction.
fn oriented_span(
    first: NoteLetter,
    second: NoteLetter,
    direction: Direction,
) -> (usize, usize, Direction) {
    let first_index = first.index();
    let second_index = second.index();

    let low = first_index.min(second_index);
    let high = first_index.max(second_index);

    let effective = if second_index < first_index {
        direction.inverted()
    } else {
        direction
    };

    (low, high, effective)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_semitone_distance() {
        assert_eq!(
            natural_semitone_distance(NoteLetter::C, NoteLetter::D, Direction::Ascending),
            2
        );
        assert_eq!(
            natural_semitone_distance(NoteLetter::E, NoteLetter::F, Direction::Ascending),
            1
        );
        assert_eq!(
            natural_semitone_distance(NoteLetter::C, NoteLetter::B, Direction::Ascending),
            11
        );
    }

    #[test]
    fn test_descending_takes_the_other_arc() {
        // C down to B is the single half step below C
        assert_eq!(
            natural_semitone_distance(NoteLetter::C, NoteLetter::B, Direction::Descending),
            1
        );
        assert_eq!(
            natural_semitone_distance(NoteLetter::E, NoteLetter::B, Direction::Descending),
            5
        );
    }

    #[test]
    fn test_swapped_letters_flip_the_walk() {
        // B up to F wraps through C
        assert_eq!(
            natural_semitone_distance(NoteLetter::B, NoteLetter::F, Direction::Ascending),
            6
        );
        // B down to F stays inside the octave
        assert_eq!(
            natural_semitone_distance(NoteLetter::B, NoteLetter::F, Direction::Descending),
            6
        );
        assert_eq!(
            natural_semitone_distance(NoteLetter::G, NoteLetter::D, Direction::Descending),
            5
        );
    }

    #[test]
    fn test_degree_distance() {
        assert_eq!(
            natural_degree_distance(NoteLetter::C, NoteLetter::G, Direction::Ascending),
            4
        );
        assert_eq!(
            natural_degree_distance(NoteLetter::G, NoteLetter::D, Direction::Descending),
            3
        );
        assert_eq!(
            natural_degree_distance(NoteLetter::C, NoteLetter::B, Direction::Descending),
            1
        );
        assert_eq!(
            natural_degree_distance(NoteLetter::B, NoteLetter::F, Direction::Ascending),
            4
        );
    }
}
