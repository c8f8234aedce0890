use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::InvalidArgument;

pub const FLAT: char = '♭';
pub const SHARP: char = '♯';

/// Flat-preferring spelling of the 12 pitch classes, C first.
const NOTE_NAMES: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];

/// One of the 12 chromatic pitch classes (0 = C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// The fixed chromatic table, C through B.
    pub const CHROMATIC: [PitchClass; 12] = [
        PitchClass(0),
        PitchClass(1),
        PitchClass(2),
        PitchClass(3),
        PitchClass(4),
        PitchClass(5),
        PitchClass(6),
        PitchClass(7),
        PitchClass(8),
        PitchClass(9),
        PitchClass(10),
        PitchClass(11),
    ];

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }
}

/// The chromatic table rotated so `root` sits at position 0.
///
/// Always a fresh array; the fixed table is never reordered.
pub fn chromatic_from(root: PitchClass) -> [PitchClass; 12] {
    let mut rotated = PitchClass::CHROMATIC;
    rotated.rotate_left(root.0 as usize);
    rotated
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = InvalidArgument;

    /// Accepts `D♭`, `Db`, `♭D`, `C#` and `C♯`; letters are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidArgument::Root(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();

        let mut first = chars.next().ok_or_else(invalid)?;
        let mut accidental: i8 = 0;

        // Prefix spelling: ♭D
        if first == FLAT {
            accidental = -1;
            first = chars.next().ok_or_else(invalid)?;
        }

        let base: i8 = match first.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(invalid()),
        };

        if accidental == 0 {
            match chars.next() {
                None => {}
                Some('b') | Some(FLAT) => accidental = -1,
                Some('#') | Some(SHARP) => accidental = 1,
                Some(_) => return Err(invalid()),
            }
        }

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(PitchClass((base + accidental).rem_euclid(12) as u8))
    }
}
