use diatonic::{
    construct, identify, Accidental, Direction, IntervalError, IntervalName, Note, NoteLetter,
};
use pretty_assertions::assert_eq;

const DIRECTIONS: [Direction; 2] = [Direction::Ascending, Direction::Descending];

#[test]
fn test_identification_inverts_construction() {
    for interval in IntervalName::ALL {
        for letter in NoteLetter::ALL {
            for accidental in Accidental::ALL {
                let root = Note::new(letter, accidental);
                for direction in DIRECTIONS {
                    match construct(interval, root, direction) {
                        Ok(other) => {
                            assert_eq!(
                                identify(root, other, direction),
                                Ok(interval),
                                "{} from {} {} gave {}",
                                interval,
                                root,
                                direction,
                                other
                            );
                        }
                        // Spellings past the double accidentals are the
                        // only legitimate way out
                        Err(IntervalError::UnresolvableAccidental { .. }) => {}
                        Err(err) => {
                            panic!("{} from {} {} failed: {}", interval, root, direction, err)
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_octave_always_yields_the_bare_letter() {
    for letter in NoteLetter::ALL {
        for accidental in Accidental::ALL {
            for direction in DIRECTIONS {
                assert_eq!(
                    construct(IntervalName::Perf8, Note::new(letter, accidental), direction),
                    Ok(Note::natural(letter))
                );
            }
        }
    }
}

#[test]
fn test_matching_letters_always_identify_as_octave() {
    for letter in NoteLetter::ALL {
        for first in Accidental::ALL {
            for second in Accidental::ALL {
                for direction in DIRECTIONS {
                    assert_eq!(
                        identify(
                            Note::new(letter, first),
                            Note::new(letter, second),
                            direction
                        ),
                        Ok(IntervalName::Perf8)
                    );
                }
            }
        }
    }
}

#[test]
fn test_swapping_notes_and_direction_agree() {
    // Reading an interval downward is the same as reading it upward
    // from the other end.
    for first_letter in NoteLetter::ALL {
        for second_letter in NoteLetter::ALL {
            for accidental in Accidental::ALL {
                let first = Note::new(first_letter, accidental);
                let second = Note::natural(second_letter);
                for direction in DIRECTIONS {
                    assert_eq!(
                        identify(first, second, direction),
                        identify(second, first, direction.inverted()),
                        "{} vs {} {}",
                        first,
                        second,
                        direction
                    );
                }
            }
        }
    }
}
