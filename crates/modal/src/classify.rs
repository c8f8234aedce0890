//! Interval-set to chord-symbol classification.
//!
//! Triads and seventh chords are found by scanning a fixed catalog for the
//! first template whose defining intervals are all present (a superset test:
//! a 7-note mode confirms a 4-note chord). Whatever the seventh chord leaves
//! over is searched for 9th/11th/13th tensions.

use crate::chord_templates::{first_match, SEVENTHS, TRIADS};
use crate::types::{
    Alteration, ChordSymbol, Extension, ExtensionLevel, Interval, SeventhQuality, Tension,
    TensionSet, TriadQuality,
};

/// First triad in catalog order fully present in `intervals`.
pub fn classify_triad(intervals: &[Interval]) -> Option<TriadQuality> {
    first_match(TRIADS, intervals).map(|template| template.quality)
}

/// First seventh chord in catalog order fully present in `intervals`, plus
/// the leftover: the input intervals outside that chord, in input order.
pub fn classify_seventh(intervals: &[Interval]) -> Option<(SeventhQuality, Vec<Interval>)> {
    let template = first_match(SEVENTHS, intervals)?;
    let leftover = intervals
        .iter()
        .copied()
        .filter(|&interval| !template.intervals.contains(interval))
        .collect();
    Some((template.quality, leftover))
}

/// Tension tones of `extension` present in `leftover`, plain then flat then sharp.
pub fn detect_tension(leftover: &[Interval], extension: Extension) -> Option<TensionSet> {
    let [plain, flat, sharp] = extension.intervals();
    let tensions = [
        (plain, Alteration::Natural),
        (flat, Alteration::Flat),
        (sharp, Alteration::Sharp),
    ]
    .into_iter()
    .filter(|(interval, _)| leftover.contains(interval))
    .map(|(_, alteration)| Tension {
        extension,
        alteration,
    })
    .collect();
    TensionSet::new(tensions)
}

/// 2 → "9", 1 → "♭9", 3 → "♯9"
pub fn detect_ninth(leftover: &[Interval]) -> Option<TensionSet> {
    detect_tension(leftover, Extension::Ninth)
}

/// 5 → "11", 4 → "♭11", 6 → "♯11"
pub fn detect_eleventh(leftover: &[Interval]) -> Option<TensionSet> {
    detect_tension(leftover, Extension::Eleventh)
}

/// 9 → "13", 8 → "♭13", 10 → "♯13"
///
/// Variants are comma-joined like the ninth and eleventh. Older chord
/// tables ran thirteenth variants together ("13♭13").
pub fn detect_thirteenth(leftover: &[Interval]) -> Option<TensionSet> {
    detect_tension(leftover, Extension::Thirteenth)
}

/// Classify `intervals` as a chord up to `level`.
///
/// Above the seventh, the chord is renamed after the highest extension of
/// an unbroken run of plain tensions (9, then 11, then 13). From the first
/// extension that is altered or absent, every detected tension is listed in
/// the parenthesized suffix instead: `m7(♭9,11,♭13)`, `maj9(♯11,13)`.
pub fn classify_extended(intervals: &[Interval], level: ExtensionLevel) -> Option<ChordSymbol> {
    if level == ExtensionLevel::Triad {
        return classify_triad(intervals).map(ChordSymbol::triad);
    }

    let (quality, leftover) = classify_seventh(intervals)?;
    let mut symbol = ChordSymbol::seventh(quality);

    let tensions: Vec<(Extension, Option<TensionSet>)> = level
        .extensions()
        .iter()
        .map(|&extension| (extension, detect_tension(&leftover, extension)))
        .collect();

    let plain_run = tensions
        .iter()
        .take_while(|(_, found)| found.as_ref().is_some_and(TensionSet::is_plain))
        .count();

    if plain_run > 0 {
        symbol = symbol.extended_to(tensions[plain_run - 1].0);
    }

    let outstanding = tensions[plain_run..]
        .iter()
        .filter_map(|(_, found)| found.as_ref())
        .flat_map(|set| set.tensions().iter().copied());

    Some(symbol.with_tensions(outstanding))
}
