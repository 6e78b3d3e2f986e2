//! Note-token parsing.

use crate::error::IntervalError;
use crate::models::{Accidental, Note, NoteLetter};

/// Parse a note token such as "C", "F#", or "Abb".
///
/// The first character must be a natural note letter, case sensitive.
/// The rest of the token is matched against the accidental symbols, and
/// an unrecognized suffix falls back to no accidental rather than
/// failing, so "C%" parses as natural C. Only a bad letter is rejected.
pub fn parse_note(token: &str) -> Result<Note, IntervalError> {
    let mut chars = token.chars();
    let letter = chars
        .next()
        .and_then(NoteLetter::parse)
        .ok_or_else(|| IntervalError::InvalidNote(token.to_string()))?;

    let accidental = Accidental::parse(chars.as_str()).unwrap_or_default();

    Ok(Note::new(letter, accidental))
}
