//! String-token entry points.
//!
//! Both operations take an ordered slice of 2 or 3 token slots, the way a
//! command line would hand them over. Construction reads (interval, note,
//! direction) and identification reads (note, note, direction). The third
//! slot is optional and defaults to ascending; an absent required slot is
//! rejected before any token is interpreted.

use crate::arithmetic::{construct, identify};
use crate::error::IntervalError;
use crate::models::{Direction, IntervalName};
use crate::parse::parse_note;

/// Build the note a named interval away from a root note.
///
/// Tokens: interval name, root note, optional direction. Returns the
/// other note of the interval in note-token form, e.g. "D#".
pub fn interval_construction(tokens: &[Option<&str>]) -> Result<String, IntervalError> {
    log::debug!("interval_construction({:?})", tokens);
    let (first, second, third) = split_tokens(tokens)?;

    let interval = IntervalName::parse(first)
        .ok_or_else(|| IntervalError::UnknownInterval(first.to_string()))?;
    let root = parse_note(second)?;
    let direction = parse_direction(third)?;

    let note = construct(interval, root, direction)?;
    Ok(note.to_string())
}

/// Name the interval between two notes.
///
/// Tokens: first note, second note, optional direction. Returns one of
/// the canonical interval names, e.g. "m3".
pub fn interval_identification(tokens: &[Option<&str>]) -> Result<String, IntervalError> {
    log::debug!("interval_identification({:?})", tokens);
    let (first, second, third) = split_tokens(tokens)?;

    let first_note = parse_note(first)?;
    let second_note = parse_note(second)?;
    let direction = parse_direction(third)?;

    let interval = identify(first_note, second_note, direction)?;
    Ok(interval.to_string())
}

/// Unpack the 2-or-3 slot token list, rejecting absent slots.
fn split_tokens<'a>(
    tokens: &[Option<&'a str>],
) -> Result<(&'a str, &'a str, Option<&'a str>), IntervalError> {
    match tokens {
        [Some(first), Some(second)] => Ok((*first, *second, None)),
        [Some(first), Some(second), Some(third)] => Ok((*first, *second, Some(*third))),
        _ => Err(IntervalError::MissingArgument),
    }
}

fn parse_direction(token: Option<&str>) -> Result<Direction, IntervalError> {
    match token {
        Some(text) => {
            Direction::parse(text).ok_or_else(|| IntervalError::InvalidDirection(text.to_string()))
        }
        None => Ok(Direction::Ascending),
    }
}
