use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;
use crate::pitch::{PitchClass, FLAT, SHARP};

/// Semitone offset from an implicit tonic, 0..12.
pub type Interval = u8;

/// Triad shapes, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Suspended2,
    Suspended4,
}

impl TriadQuality {
    /// Suffix for chord symbol display
    pub fn symbol(&self) -> &'static str {
        match self {
            TriadQuality::Major => "maj",
            TriadQuality::Minor => "m",
            TriadQuality::Diminished => "dim",
            TriadQuality::Augmented => "aug",
            TriadQuality::Suspended2 => "sus2",
            TriadQuality::Suspended4 => "sus4",
        }
    }
}

/// Seventh-chord shapes, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeventhQuality {
    Major7,
    MinorMajor7,
    Minor7,
    Dominant7,
    Augmented7,
    Diminished7,
    HalfDiminished7,
    Suspended7,
}

impl SeventhQuality {
    /// Text before the extension digit ("m(maj" in "m(maj7)").
    pub fn head(&self) -> &'static str {
        match self {
            SeventhQuality::Major7 => "maj",
            SeventhQuality::MinorMajor7 => "m(maj",
            SeventhQuality::Minor7 => "m",
            SeventhQuality::Dominant7 => "",
            SeventhQuality::Augmented7 => "aug",
            SeventhQuality::Diminished7 => "dim",
            SeventhQuality::HalfDiminished7 => "m",
            SeventhQuality::Suspended7 => "sus",
        }
    }

    /// Text after the extension digit ("♭5" in "m7♭5").
    pub fn tail(&self) -> &'static str {
        match self {
            SeventhQuality::MinorMajor7 => ")",
            SeventhQuality::HalfDiminished7 => "♭5",
            _ => "",
        }
    }
}

/// Which extension tone a tension belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Extension {
    Ninth,
    Eleventh,
    Thirteenth,
}

impl Extension {
    pub const ALL: [Extension; 3] = [Extension::Ninth, Extension::Eleventh, Extension::Thirteenth];

    pub fn degree(self) -> u8 {
        match self {
            Extension::Ninth => 9,
            Extension::Eleventh => 11,
            Extension::Thirteenth => 13,
        }
    }

    /// Intervals of the (plain, flat, sharp) variants, reduced to one octave.
    pub fn intervals(self) -> [Interval; 3] {
        match self {
            Extension::Ninth => [2, 1, 3],
            Extension::Eleventh => [5, 4, 6],
            Extension::Thirteenth => [9, 8, 10],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alteration {
    Natural,
    Flat,
    Sharp,
}

/// One extension tone, possibly altered: 9, ♭9, ♯11, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tension {
    pub extension: Extension,
    pub alteration: Alteration,
}

impl fmt::Display for Tension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alteration {
            Alteration::Natural => {}
            Alteration::Flat => write!(f, "{}", FLAT)?,
            Alteration::Sharp => write!(f, "{}", SHARP)?,
        }
        write!(f, "{}", self.extension.degree())
    }
}

/// The tension tones of one extension found in a leftover set.
///
/// Never empty; ordered plain, flat, sharp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TensionSet(Vec<Tension>);

impl TensionSet {
    /// `None` when `tensions` is empty.
    pub fn new(tensions: Vec<Tension>) -> Option<Self> {
        if tensions.is_empty() {
            None
        } else {
            Some(TensionSet(tensions))
        }
    }

    /// True when the set holds only the unaltered tone.
    pub fn is_plain(&self) -> bool {
        matches!(self.0.as_slice(), [t] if t.alteration == Alteration::Natural)
    }

    pub fn tensions(&self) -> &[Tension] {
        &self.0
    }
}

impl fmt::Display for TensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, tensions: &[Tension]) -> fmt::Result {
    for (i, tension) in tensions.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", tension)?;
    }
    Ok(())
}

/// A chord name without its root: "maj", "m7", "m(maj9)", "7(♭9,11)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordSymbol {
    head: &'static str,
    degree: Option<u8>,
    tail: &'static str,
    tensions: Vec<Tension>,
}

impl ChordSymbol {
    pub fn triad(quality: TriadQuality) -> Self {
        ChordSymbol {
            head: quality.symbol(),
            degree: None,
            tail: "",
            tensions: Vec::new(),
        }
    }

    pub fn seventh(quality: SeventhQuality) -> Self {
        ChordSymbol {
            head: quality.head(),
            degree: Some(7),
            tail: quality.tail(),
            tensions: Vec::new(),
        }
    }

    /// Names the chord after `extension` instead of the seventh.
    pub fn extended_to(mut self, extension: Extension) -> Self {
        if self.degree.is_some() {
            self.degree = Some(extension.degree());
        }
        self
    }

    /// Appends tension tokens to the parenthesized suffix.
    pub fn with_tensions(mut self, tensions: impl IntoIterator<Item = Tension>) -> Self {
        self.tensions.extend(tensions);
        self
    }

    /// Highest stacked degree in the name (7, 9, 11, 13), `None` for triads.
    pub fn degree(&self) -> Option<u8> {
        self.degree
    }

    pub fn tensions(&self) -> &[Tension] {
        &self.tensions
    }

    /// Root-bound chord name, e.g. "D" + "m7" = "Dm7".
    pub fn with_root(&self, root: PitchClass) -> String {
        format!("{}{}", root, self)
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.head)?;
        if let Some(degree) = self.degree {
            write!(f, "{}", degree)?;
        }
        f.write_str(self.tail)?;
        if !self.tensions.is_empty() {
            f.write_str("(")?;
            write_joined(f, &self.tensions)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Highest chord tone requested from the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExtensionLevel {
    Triad,
    Seventh,
    Ninth,
    Eleventh,
    Thirteenth,
}

impl ExtensionLevel {
    pub const ALL: [ExtensionLevel; 5] = [
        ExtensionLevel::Triad,
        ExtensionLevel::Seventh,
        ExtensionLevel::Ninth,
        ExtensionLevel::Eleventh,
        ExtensionLevel::Thirteenth,
    ];

    pub fn degree(self) -> u8 {
        match self {
            ExtensionLevel::Triad => 3,
            ExtensionLevel::Seventh => 7,
            ExtensionLevel::Ninth => 9,
            ExtensionLevel::Eleventh => 11,
            ExtensionLevel::Thirteenth => 13,
        }
    }

    /// Extensions stacked above the seventh at this level, lowest first.
    pub fn extensions(self) -> &'static [Extension] {
        match self {
            ExtensionLevel::Triad | ExtensionLevel::Seventh => &[],
            ExtensionLevel::Ninth => &Extension::ALL[..1],
            ExtensionLevel::Eleventh => &Extension::ALL[..2],
            ExtensionLevel::Thirteenth => &Extension::ALL,
        }
    }
}

impl TryFrom<u8> for ExtensionLevel {
    type Error = InvalidArgument;

    fn try_from(degree: u8) -> Result<Self, Self::Error> {
        match degree {
            3 => Ok(ExtensionLevel::Triad),
            7 => Ok(ExtensionLevel::Seventh),
            9 => Ok(ExtensionLevel::Ninth),
            11 => Ok(ExtensionLevel::Eleventh),
            13 => Ok(ExtensionLevel::Thirteenth),
            other => Err(InvalidArgument::ExtensionLevel(other)),
        }
    }
}

impl fmt::Display for ExtensionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionLevel::Triad => write!(f, "triad"),
            other => write!(f, "{}th", other.degree()),
        }
    }
}

/// A mode bound to a concrete root: note names and root-prefixed chords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMode {
    /// "D dorian"
    pub label: String,
    pub mode_name: &'static str,
    pub root: PitchClass,
    /// Seven notes in scale order, `notes[0] == root`.
    pub notes: Vec<PitchClass>,
    pub triad_quality: Option<TriadQuality>,
    pub triad: Option<String>,
    pub seventh: Option<String>,
    pub ninth: Option<String>,
    pub eleventh: Option<String>,
    pub thirteenth: Option<String>,
}

impl ResolvedMode {
    /// Chord name at `level`, `None` when unclassified.
    pub fn chord(&self, level: ExtensionLevel) -> Option<&str> {
        match level {
            ExtensionLevel::Triad => self.triad.as_deref(),
            ExtensionLevel::Seventh => self.seventh.as_deref(),
            ExtensionLevel::Ninth => self.ninth.as_deref(),
            ExtensionLevel::Eleventh => self.eleventh.as_deref(),
            ExtensionLevel::Thirteenth => self.thirteenth.as_deref(),
        }
    }
}

/// The seven resolved modes of a diatonic chord stack, degree order.
pub type Harmonization = Vec<ResolvedMode>;
