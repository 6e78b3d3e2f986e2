//! Spelled notes: natural note letters plus accidentals.
//!
//! A note here is a spelling, not a pitch. G# and Ab are distinct values
//! even though they sound the same, and interval arithmetic depends on
//! that distinction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semitones in an octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Natural note letters in an octave.
pub const DEGREES_PER_OCTAVE: i32 = 7;

/// The seven natural note letters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteLetter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteLetter {
    /// All letters in cyclic order, C through B.
    pub const ALL: [NoteLetter; 7] = [
        NoteLetter::C,
        NoteLetter::D,
        NoteLetter::E,
        NoteLetter::F,
        NoteLetter::G,
        NoteLetter::A,
        NoteLetter::B,
    ];

    /// Position of this letter in the C-to-B cycle.
    pub fn index(&self) -> usize {
        match self {
            NoteLetter::C => 0,
            NoteLetter::D => 1,
            NoteLetter::E => 2,
            NoteLetter::F => 3,
            NoteLetter::G => 4,
            NoteLetter::A => 5,
            NoteLetter::B => 6,
        }
    }

    /// Semitones up to the next letter in the cycle.
    /// The diatonic half steps fall after E and after B.
    pub fn semitones_to_next(&self) -> i32 {
        match self {
            NoteLetter::E | NoteLetter::B => 1,
            _ => 2,
        }
    }

    /// Letter reached by walking `steps` positions around the cycle.
    /// Negative steps walk downward.
    pub fn step(&self, steps: i32) -> NoteLetter {
        // Double mod so negative steps wrap correctly
        let wrapped =
            ((self.index() as i32 + steps) % DEGREES_PER_OCTAVE + DEGREES_PER_OCTAVE) % DEGREES_PER_OCTAVE;
        NoteLetter::ALL[wrapped as usize]
    }

    /// Parse a letter from its character. Case sensitive, so 'c' is rejected.
    pub fn parse(ch: char) -> Option<Self> {
        match ch {
            'C' => Some(NoteLetter::C),
            'D' => Some(NoteLetter::D),
            'E' => Some(NoteLetter::E),
            'F' => Some(NoteLetter::F),
            'G' => Some(NoteLetter::G),
            'A' => Some(NoteLetter::A),
            'B' => Some(NoteLetter::B),
            _ => None,
        }
    }

    /// Get the letter as written.
    pub fn symbol(&self) -> &'static str {
        match self {
            NoteLetter::C => "C",
            NoteLetter::D => "D",
            NoteLetter::E => "E",
            NoteLetter::F => "F",
            NoteLetter::G => "G",
            NoteLetter::A => "A",
            NoteLetter::B => "B",
        }
    }
}

impl fmt::Display for NoteLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Accidental types for pitch modification
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accidental {
    /// No accidental
    Natural,

    /// Sharp (#)
    Sharp,

    /// Double sharp (##)
    DoubleSharp,

    /// Flat (b)
    Flat,

    /// Double flat (bb)
    DoubleFlat,
}

impl Accidental {
    /// All accidentals, flattest to sharpest.
    pub const ALL: [Accidental; 5] = [
        Accidental::DoubleFlat,
        Accidental::Flat,
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::DoubleSharp,
    ];

    /// Get the symbol for this accidental
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
        }
    }

    /// Get the semitone offset for this accidental
    pub fn semitone_offset(&self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
            Accidental::Flat => -1,
            Accidental::DoubleFlat => -2,
        }
    }

    /// Parse accidental from a string
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "##" => Some(Accidental::DoubleSharp),
            "#" => Some(Accidental::Sharp),
            "bb" => Some(Accidental::DoubleFlat),
            "b" => Some(Accidental::Flat),
            "" => Some(Accidental::Natural),
            _ => None,
        }
    }

    /// Accidental that spells the given semitone offset, if any does.
    /// Offsets beyond the double accidentals have no spelling.
    pub fn from_offset(offset: i32) -> Option<Self> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

impl Default for Accidental {
    fn default() -> Self {
        Accidental::Natural
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A spelled note: a natural letter plus an accidental.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: NoteLetter,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(letter: NoteLetter, accidental: Accidental) -> Self {
        Note { letter, accidental }
    }

    /// The letter with no accidental.
    pub fn natural(letter: NoteLetter) -> Self {
        Note {
            letter,
            accidental: Accidental::Natural,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.symbol(), self.accidental.symbol())
    }
}
