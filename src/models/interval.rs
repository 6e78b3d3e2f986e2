//! Interval names and direction of travel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eleven canonical interval names, minor second through perfect octave.
///
/// Each name fixes two measurements at once: how many scale letters the
/// interval covers and how many semitones it spans. No two names share the
/// same pair, so a (degree, semitone) pair identifies at most one name.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntervalName {
    /// Minor second (m2)
    Min2,

    /// Major second (M2)
    Maj2,

    /// Minor third (m3)
    Min3,

    /// Major third (M3)
    Maj3,

    /// Perfect fourth (P4)
    Perf4,

    /// Perfect fifth (P5)
    Perf5,

    /// Minor sixth (m6)
    Min6,

    /// Major sixth (M6)
    Maj6,

    /// Minor seventh (m7)
    Min7,

    /// Major seventh (M7)
    Maj7,

    /// Perfect octave (P8)
    Perf8,
}

impl IntervalName {
    /// All interval names, smallest to largest.
    pub const ALL: [IntervalName; 11] = [
        IntervalName::Min2,
        IntervalName::Maj2,
        IntervalName::Min3,
        IntervalName::Maj3,
        IntervalName::Perf4,
        IntervalName::Perf5,
        IntervalName::Min6,
        IntervalName::Maj6,
        IntervalName::Min7,
        IntervalName::Maj7,
        IntervalName::Perf8,
    ];

    /// Scale letters the interval covers, both endpoints included.
    pub fn degree_span(&self) -> i32 {
        match self {
            IntervalName::Min2 | IntervalName::Maj2 => 2,
            IntervalName::Min3 | IntervalName::Maj3 => 3,
            IntervalName::Perf4 => 4,
            IntervalName::Perf5 => 5,
            IntervalName::Min6 | IntervalName::Maj6 => 6,
            IntervalName::Min7 | IntervalName::Maj7 => 7,
            IntervalName::Perf8 => 8,
        }
    }

    /// The interval's size in semitones.
    pub fn semitone_span(&self) -> i32 {
        match self {
            IntervalName::Min2 => 1,
            IntervalName::Maj2 => 2,
            IntervalName::Min3 => 3,
            IntervalName::Maj3 => 4,
            IntervalName::Perf4 => 5,
            IntervalName::Perf5 => 7,
            IntervalName::Min6 => 8,
            IntervalName::Maj6 => 9,
            IntervalName::Min7 => 10,
            IntervalName::Maj7 => 11,
            IntervalName::Perf8 => 12,
        }
    }

    /// Get the written name, e.g. "m3" or "P5".
    pub fn symbol(&self) -> &'static str {
        match self {
            IntervalName::Min2 => "m2",
            IntervalName::Maj2 => "M2",
            IntervalName::Min3 => "m3",
            IntervalName::Maj3 => "M3",
            IntervalName::Perf4 => "P4",
            IntervalName::Perf5 => "P5",
            IntervalName::Min6 => "m6",
            IntervalName::Maj6 => "M6",
            IntervalName::Min7 => "m7",
            IntervalName::Maj7 => "M7",
            IntervalName::Perf8 => "P8",
        }
    }

    /// Parse an interval name from its written form.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "m2" => Some(IntervalName::Min2),
            "M2" => Some(IntervalName::Maj2),
            "m3" => Some(IntervalName::Min3),
            "M3" => Some(IntervalName::Maj3),
            "P4" => Some(IntervalName::Perf4),
            "P5" => Some(IntervalName::Perf5),
            "m6" => Some(IntervalName::Min6),
            "M6" => Some(IntervalName::Maj6),
            "m7" => Some(IntervalName::Min7),
            "M7" => Some(IntervalName::Maj7),
            "P8" => Some(IntervalName::Perf8),
            _ => None,
        }
    }
}

impl fmt::Display for IntervalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Direction of travel from the first note to the second.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Upward (asc)
    Ascending,

    /// Downward (dsc)
    Descending,
}

impl Direction {
    /// The opposite direction.
    pub fn inverted(&self) -> Direction {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Get the written token, "asc" or "dsc".
    pub fn symbol(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "dsc",
        }
    }

    /// Parse a direction token.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "asc" => Some(Direction::Ascending),
            "dsc" => Some(Direction::Descending),
            _ => None,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Ascending
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
