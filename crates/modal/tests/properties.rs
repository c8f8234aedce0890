//! Properties that hold for every root, parent scale and mode.

use std::sync::Arc;
use std::thread;

use modal::{
    classify_extended, classify_seventh, classify_triad, ExtensionLevel, ModalEngine, ModeCatalog,
    PitchClass, ScaleFamily,
};
use pretty_assertions::assert_eq;

#[test]
fn degree_zero_mode_is_the_parent_scale() {
    let catalog = ModeCatalog::global();
    for family in ScaleFamily::ALL {
        assert_eq!(catalog.modes(family)[0].intervals, family.base_intervals());
    }
}

#[test]
fn every_mode_is_seven_distinct_offsets_from_zero() {
    for mode in ModeCatalog::global().iter() {
        let intervals = mode.intervals;
        assert_eq!(intervals[0], 0, "{}", mode.name);
        assert_eq!(intervals.iter().filter(|&&i| i == 0).count(), 1);
        assert!(intervals.iter().all(|&i| i < 12));

        let mut sorted = intervals;
        sorted.sort_unstable();
        assert!(sorted.windows(2).all(|w| w[0] != w[1]), "{}", mode.name);
    }
}

#[test]
fn every_mode_classifies_at_every_level() {
    for mode in ModeCatalog::global().iter() {
        for level in ExtensionLevel::ALL {
            assert!(
                mode.chord(level).is_some(),
                "{} {} has no {} chord",
                mode.family,
                mode.name,
                level
            );
        }
    }
}

#[test]
fn matched_shapes_survive_extra_extensions() {
    for mode in ModeCatalog::global().iter() {
        let triad = classify_triad(&mode.intervals);
        let (seventh, leftover) = classify_seventh(&mode.intervals).unwrap();

        // dropping tones the seventh chord did not use changes nothing
        let core: Vec<u8> = mode
            .intervals
            .iter()
            .copied()
            .filter(|i| !leftover.contains(i))
            .collect();
        assert_eq!(classify_seventh(&core).map(|(q, _)| q), Some(seventh));

        // re-adding them one at a time changes nothing either
        for &extra in &leftover {
            let mut with_extra = core.clone();
            with_extra.push(extra);
            assert_eq!(classify_seventh(&with_extra).map(|(q, _)| q), Some(seventh));
        }
        assert_eq!(classify_triad(&mode.intervals), triad);
    }
}

#[test]
fn resolved_root_is_first_note() {
    let engine = ModalEngine::new();
    for root in PitchClass::CHROMATIC {
        for family in ScaleFamily::ALL {
            for index in 0..7 {
                let mode = engine.resolve(root, family, index).unwrap();
                assert_eq!(mode.notes.len(), 7);
                assert_eq!(mode.notes[0], root);
                assert!(mode.label.starts_with(root.name()));
            }
        }
    }
}

#[test]
fn c_major_notes() {
    let engine = ModalEngine::new();
    let mode = engine.resolve_named("C", "major", 0).unwrap();
    let names: Vec<&str> = mode.notes.iter().map(|n| n.name()).collect();
    assert_eq!(names, ["C", "D", "E", "F", "G", "A", "B"]);
}

#[test]
fn harmonization_walks_the_scale() {
    let engine = ModalEngine::new();
    for root in PitchClass::CHROMATIC {
        for family in ScaleFamily::ALL {
            for index in 0..7 {
                let stack = engine.harmonize(root, family, index).unwrap();
                assert_eq!(stack.len(), 7);
                for (i, degree) in stack.iter().enumerate() {
                    assert_eq!(degree.root, stack[0].notes[i]);
                    assert_eq!(degree.notes[0], stack[0].notes[i]);
                    assert_eq!(
                        degree.mode_name,
                        family.mode_names()[(index + i) % 7]
                    );
                }
            }
        }
    }
}

#[test]
fn harmonized_degrees_share_the_parent_scale_notes() {
    let engine = ModalEngine::new();
    let stack = engine.harmonize_named("B♭", "harmonic major", 2).unwrap();
    let mut tonic_notes = stack[0].notes.clone();
    tonic_notes.sort();
    for degree in &stack {
        let mut notes = degree.notes.clone();
        notes.sort();
        assert_eq!(notes, tonic_notes, "{}", degree.label);
    }
}

#[test]
fn major_scale_ninth_is_plain() {
    let major = ScaleFamily::Major.base_intervals();
    let ninth = classify_extended(&major, ExtensionLevel::Ninth).unwrap();
    assert_eq!(ninth.to_string(), "maj9");
    assert_eq!(
        Some(&ninth),
        ModeCatalog::global().modes(ScaleFamily::Major)[0].ninth.as_ref()
    );
}

#[test]
fn resolve_rejects_h() {
    let engine = ModalEngine::new();
    let err = engine.resolve_named("H", "major", 0).unwrap_err();
    assert_eq!(err, modal::InvalidArgument::Root("H".to_string()));
    assert!(err.to_string().contains("root"));
}

#[test]
fn catalog_is_shared_across_threads() {
    let engine = ModalEngine::with_catalog(Arc::new(ModeCatalog::new()));
    let expected = engine.harmonize_named("E", "melodic minor", 0).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                scope.spawn(move || engine.harmonize_named("E", "melodic minor", 0).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
