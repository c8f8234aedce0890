use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;
use crate::types::Interval;

/// The four heptatonic parent scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    Major,
    MelodicMinor,
    HarmonicMajor,
    HarmonicMinor,
}

impl ScaleFamily {
    pub const ALL: [ScaleFamily; 4] = [
        ScaleFamily::Major,
        ScaleFamily::MelodicMinor,
        ScaleFamily::HarmonicMajor,
        ScaleFamily::HarmonicMinor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScaleFamily::Major => "major",
            ScaleFamily::MelodicMinor => "melodic minor",
            ScaleFamily::HarmonicMajor => "harmonic major",
            ScaleFamily::HarmonicMinor => "harmonic minor",
        }
    }

    /// Ascending semitone offsets of the parent scale; degree 0 is 0.
    pub fn base_intervals(self) -> [Interval; 7] {
        match self {
            ScaleFamily::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleFamily::MelodicMinor => [0, 2, 3, 5, 7, 9, 11],
            ScaleFamily::HarmonicMajor => [0, 2, 4, 5, 7, 8, 11],
            ScaleFamily::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
        }
    }

    /// Conventional names of the seven modes, degree order.
    pub fn mode_names(self) -> [&'static str; 7] {
        match self {
            ScaleFamily::Major => [
                "ionian",
                "dorian",
                "phrygian",
                "lydian",
                "mixolydian",
                "aeolian",
                "locrian",
            ],
            ScaleFamily::MelodicMinor => [
                "ionian ♭3",
                "dorian ♭2",
                "lydian ♯5",
                "lydian ♭7",
                "mixolydian ♭6",
                "locrian ♮2",
                "super locrian",
            ],
            ScaleFamily::HarmonicMajor => [
                "ionian ♭6",
                "dorian ♭5",
                "phrygian ♭4",
                "lydian ♭3",
                "mixolydian ♭2",
                "lydian ♯2 ♯5",
                "locrian ♭♭7",
            ],
            ScaleFamily::HarmonicMinor => [
                "ionian ♭3 ♭6",
                "locrian ♮6",
                "ionian ♯5",
                "dorian ♯11",
                "phrygian dominant",
                "lydian ♯2",
                "super locrian ♭♭7",
            ],
        }
    }
}

impl fmt::Display for ScaleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleFamily {
    type Err = InvalidArgument;

    /// "melodic minor", "melodic-minor" and "Melodic_Minor" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        ScaleFamily::ALL
            .into_iter()
            .find(|family| family.name() == normalized)
            .ok_or_else(|| InvalidArgument::ScaleFamily(s.to_string()))
    }
}
