//! Markdown rendering of resolved modes and harmonizations.

use std::fmt::Write;

use crate::types::{ExtensionLevel, Harmonization, ResolvedMode, TriadQuality};

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Roman numeral for scale degree `degree` (0-based), cased by triad quality.
///
/// Minor is lowercase, diminished lowercase with `°`, everything else
/// (including an unclassified triad) uppercase.
pub fn roman_numeral(degree: usize, triad: Option<TriadQuality>) -> String {
    let numeral = NUMERALS[degree % 7];
    match triad {
        Some(TriadQuality::Minor) => numeral.to_lowercase(),
        Some(TriadQuality::Diminished) => format!("{}°", numeral.to_lowercase()),
        _ => numeral.to_string(),
    }
}

/// "c melodic minor" → "C Melodic Minor"
fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn row_label(level: ExtensionLevel) -> &'static str {
    match level {
        ExtensionLevel::Triad => "triad",
        ExtensionLevel::Seventh => "7th",
        ExtensionLevel::Ninth => "9th",
        ExtensionLevel::Eleventh => "11th",
        ExtensionLevel::Thirteenth => "13th",
    }
}

/// The harmonization as a markdown table: one column per degree, one row
/// per extension level.
pub fn harmonization_table(harmonization: &Harmonization, unclassified: &str) -> String {
    let mut out = String::new();
    let title = harmonization
        .first()
        .map(|tonic| title_case(&tonic.label))
        .unwrap_or_default();

    let _ = writeln!(out, "<center><b>{}</b></center>", title);
    out.push('\n');

    out.push_str("| Chord |");
    for (degree, mode) in harmonization.iter().enumerate() {
        let _ = write!(out, " {} |", roman_numeral(degree, mode.triad_quality));
    }
    out.push('\n');

    out.push_str("|--|");
    for _ in harmonization {
        out.push_str("--|");
    }
    out.push('\n');

    for level in ExtensionLevel::ALL {
        let _ = write!(out, "| {} |", row_label(level));
        for mode in harmonization {
            let _ = write!(out, " {} |", mode.chord(level).unwrap_or(unclassified));
        }
        out.push('\n');
    }

    out
}

/// One resolved mode: label, notes and its chord at every level.
pub fn mode_summary(mode: &ResolvedMode, unclassified: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## {}", title_case(&mode.label));
    out.push('\n');

    let notes: Vec<&str> = mode.notes.iter().map(|n| n.name()).collect();
    let _ = writeln!(out, "notes: {}", notes.join(" "));
    out.push('\n');

    out.push_str("| level | chord |\n|--|--|\n");
    for level in ExtensionLevel::ALL {
        let _ = writeln!(
            out,
            "| {} | {} |",
            row_label(level),
            mode.chord(level).unwrap_or(unclassified)
        );
    }
    out
}
