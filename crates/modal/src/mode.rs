//! Modes of the four parent scales, derived once and shared read-only.

use std::sync::LazyLock;

use serde::Serialize;
use tracing::{debug, warn};

use crate::classify::{classify_extended, classify_triad};
use crate::error::{InvalidArgument, Result};
use crate::scale::ScaleFamily;
use crate::types::{ChordSymbol, ExtensionLevel, Interval, TriadQuality};

/// One rotation of a parent scale with its chords classified at every level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode {
    pub name: &'static str,
    pub family: ScaleFamily,
    pub degree: usize,
    /// Seven offsets from the mode's own tonic, `intervals[0] == 0`.
    pub intervals: [Interval; 7],
    pub triad_quality: Option<TriadQuality>,
    pub triad: Option<ChordSymbol>,
    pub seventh: Option<ChordSymbol>,
    pub ninth: Option<ChordSymbol>,
    pub eleventh: Option<ChordSymbol>,
    pub thirteenth: Option<ChordSymbol>,
}

impl Mode {
    pub fn chord(&self, level: ExtensionLevel) -> Option<&ChordSymbol> {
        match level {
            ExtensionLevel::Triad => self.triad.as_ref(),
            ExtensionLevel::Seventh => self.seventh.as_ref(),
            ExtensionLevel::Ninth => self.ninth.as_ref(),
            ExtensionLevel::Eleventh => self.eleventh.as_ref(),
            ExtensionLevel::Thirteenth => self.thirteenth.as_ref(),
        }
    }
}

/// Rotate `base` left by `degree` and re-zero on the new tonic.
///
/// Offsets that go negative wrap up an octave, so every result is in 0..12.
pub fn rotate_intervals(base: &[Interval; 7], degree: usize) -> [Interval; 7] {
    let mut rotated = *base;
    rotated.rotate_left(degree % 7);
    let tonic = rotated[0];
    rotated.map(|interval| (interval + 12 - tonic) % 12)
}

/// Derive and classify mode `degree` of `family`.
pub fn derive_mode(family: ScaleFamily, degree: usize) -> Mode {
    let intervals = rotate_intervals(&family.base_intervals(), degree);
    let name = family.mode_names()[degree % 7];

    let classify = |level: ExtensionLevel| {
        let symbol = classify_extended(&intervals, level);
        if symbol.is_none() {
            warn!(family = %family, mode = name, %level, "no chord template matches mode");
        }
        symbol
    };

    Mode {
        name,
        family,
        degree: degree % 7,
        intervals,
        triad_quality: classify_triad(&intervals),
        triad: classify(ExtensionLevel::Triad),
        seventh: classify(ExtensionLevel::Seventh),
        ninth: classify(ExtensionLevel::Ninth),
        eleventh: classify(ExtensionLevel::Eleventh),
        thirteenth: classify(ExtensionLevel::Thirteenth),
    }
}

static GLOBAL: LazyLock<ModeCatalog> = LazyLock::new(ModeCatalog::new);

/// All 28 modes (4 parent scales × 7 degrees), classified up front.
///
/// Immutable once built; share it by reference or `Arc` across threads.
#[derive(Debug, Clone)]
pub struct ModeCatalog {
    modes: [[Mode; 7]; 4],
}

impl ModeCatalog {
    pub fn new() -> Self {
        let modes = ScaleFamily::ALL.map(|family| {
            let modes: [Mode; 7] = std::array::from_fn(|degree| derive_mode(family, degree));
            debug!(family = %family, modes = modes.len(), "derived parent scale modes");
            modes
        });
        Self { modes }
    }

    /// Process-wide catalog, built on first use.
    pub fn global() -> &'static ModeCatalog {
        &GLOBAL
    }

    /// The seven modes of `family`, degree order.
    pub fn modes(&self, family: ScaleFamily) -> &[Mode; 7] {
        &self.modes[family as usize]
    }

    pub fn mode(&self, family: ScaleFamily, index: usize) -> Result<&Mode> {
        self.modes(family)
            .get(index)
            .ok_or(InvalidArgument::ModeIndex(index))
    }

    pub fn mode_names(&self, family: ScaleFamily) -> [&'static str; 7] {
        self.modes(family).each_ref().map(|mode| mode.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mode> {
        ScaleFamily::ALL
            .into_iter()
            .flat_map(move |family| self.modes(family).iter())
    }
}

impl Default for ModeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(mode: &Mode) -> [Option<String>; 5] {
        ExtensionLevel::ALL.map(|level| mode.chord(level).map(|s| s.to_string()))
    }

    #[test]
    fn rotation_wraps_negative_offsets() {
        let major = ScaleFamily::Major.base_intervals();
        assert_eq!(rotate_intervals(&major, 0), major);
        assert_eq!(rotate_intervals(&major, 1), [0, 2, 3, 5, 7, 9, 10]);
        assert_eq!(rotate_intervals(&major, 6), [0, 1, 3, 5, 6, 8, 10]);
    }

    #[test]
    fn harmonic_minor_fifth_mode() {
        let mode = derive_mode(ScaleFamily::HarmonicMinor, 4);
        assert_eq!(mode.name, "phrygian dominant");
        assert_eq!(mode.intervals, [0, 1, 4, 5, 7, 8, 10]);
        assert_eq!(
            names(&mode),
            [
                Some("maj".to_string()),
                Some("7".to_string()),
                Some("7(♭9)".to_string()),
                Some("7(♭9,11)".to_string()),
                Some("7(♭9,11,♭13)".to_string()),
            ]
        );
    }

    #[test]
    fn catalog_order_decides_ambiguous_modes() {
        // dorian ♭5 holds both dim7 and m7♭5 shapes
        let mode = derive_mode(ScaleFamily::HarmonicMajor, 1);
        assert_eq!(mode.intervals, [0, 2, 3, 5, 6, 9, 10]);
        assert_eq!(mode.seventh.map(|s| s.to_string()).as_deref(), Some("dim7"));
        assert_eq!(mode.triad_quality, Some(TriadQuality::Diminished));
    }

    #[test]
    fn raised_fifth_modes_are_augmented() {
        let catalog = ModeCatalog::global();
        for (family, degree, name) in [
            (ScaleFamily::MelodicMinor, 2, "lydian ♯5"),
            (ScaleFamily::HarmonicMinor, 2, "ionian ♯5"),
        ] {
            let mode = catalog.mode(family, degree).unwrap();
            assert_eq!(mode.name, name);
            assert_eq!(mode.triad_quality, Some(TriadQuality::Augmented));
            assert_eq!(mode.triad.as_ref().map(|s| s.to_string()).as_deref(), Some("aug"));
        }
    }

    #[test]
    fn catalog_holds_28_modes() {
        let catalog = ModeCatalog::new();
        assert_eq!(catalog.iter().count(), 28);
        for family in ScaleFamily::ALL {
            for (degree, mode) in catalog.modes(family).iter().enumerate() {
                assert_eq!(mode.degree, degree);
                assert_eq!(mode.family, family);
            }
        }
    }

    #[test]
    fn mode_index_out_of_range() {
        let catalog = ModeCatalog::global();
        assert_eq!(
            catalog.mode(ScaleFamily::Major, 7).unwrap_err(),
            InvalidArgument::ModeIndex(7)
        );
        assert_eq!(catalog.mode(ScaleFamily::Major, 5).unwrap().name, "aeolian");
    }

    #[test]
    fn global_is_built_once() {
        assert!(std::ptr::eq(ModeCatalog::global(), ModeCatalog::global()));
    }
}
