use tracing::debug;

use crate::error::Result;
use crate::mode::ModeCatalog;
use crate::pitch::PitchClass;
use crate::resolve::resolve;
use crate::scale::ScaleFamily;
use crate::types::Harmonization;

/// Build the diatonic chord stack of a mode: one resolved mode per degree.
///
/// Degree `i` is rooted on note `i` of the starting mode and uses mode
/// `(mode_index + i) % 7` of the same parent scale.
pub fn harmonize(
    catalog: &ModeCatalog,
    root: PitchClass,
    family: ScaleFamily,
    mode_index: usize,
) -> Result<Harmonization> {
    let tonic = resolve(catalog, root, family, mode_index)?;
    debug!(label = %tonic.label, "harmonizing");

    let mut degrees = Vec::with_capacity(7);
    for i in 1..7 {
        degrees.push(resolve(catalog, tonic.notes[i], family, (mode_index + i) % 7)?);
    }
    degrees.insert(0, tonic);
    Ok(degrees)
}

/// Same as [`harmonize`], with root and family given by name.
pub fn harmonize_named(
    catalog: &ModeCatalog,
    root: &str,
    family: &str,
    mode_index: usize,
) -> Result<Harmonization> {
    harmonize(catalog, root.parse()?, family.parse()?, mode_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidArgument;
    use crate::types::ResolvedMode;
    use pretty_assertions::assert_eq;

    fn column<'a>(
        harmonization: &'a Harmonization,
        pick: fn(&ResolvedMode) -> Option<&str>,
    ) -> Vec<&'a str> {
        harmonization
            .iter()
            .map(|mode| pick(mode).unwrap_or("-"))
            .collect()
    }

    #[test]
    fn c_major_stack() {
        let harmonization = harmonize_named(ModeCatalog::global(), "C", "major", 0).unwrap();
        assert_eq!(
            column(&harmonization, |m| m.triad.as_deref()),
            ["Cmaj", "Dm", "Em", "Fmaj", "Gmaj", "Am", "Bdim"]
        );
        assert_eq!(
            column(&harmonization, |m| m.seventh.as_deref()),
            ["Cmaj7", "Dm7", "Em7", "Fmaj7", "G7", "Am7", "Bm7♭5"]
        );
        let labels: Vec<&str> = harmonization.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "C ionian",
                "D dorian",
                "E phrygian",
                "F lydian",
                "G mixolydian",
                "A aeolian",
                "B locrian"
            ]
        );
    }

    #[test]
    fn a_harmonic_minor_stack() {
        let harmonization =
            harmonize_named(ModeCatalog::global(), "A", "harmonic minor", 0).unwrap();
        assert_eq!(
            column(&harmonization, |m| m.seventh.as_deref()),
            ["Am(maj7)", "Bdim7", "Caug7", "Dm7", "E7", "Fmaj7", "A♭dim7"]
        );
    }

    #[test]
    fn starting_from_another_mode_rotates_the_stack() {
        let harmonization = harmonize_named(ModeCatalog::global(), "D", "major", 1).unwrap();
        assert_eq!(harmonization.len(), 7);
        assert_eq!(harmonization[6].label, "C ionian");
        assert_eq!(harmonization[6].seventh.as_deref(), Some("Cmaj7"));
    }

    #[test]
    fn invalid_arguments_fail_up_front() {
        assert_eq!(
            harmonize_named(ModeCatalog::global(), "C", "major", 12),
            Err(InvalidArgument::ModeIndex(12))
        );
        assert_eq!(
            harmonize_named(ModeCatalog::global(), "X", "major", 0),
            Err(InvalidArgument::Root("X".to_string()))
        );
    }
}
