use crate::types::{Interval, SeventhQuality, TriadQuality};

/// Set of intervals as a bitmask over the 12 semitones from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalMask(u16);

impl IntervalMask {
    pub const fn from_intervals(intervals: &[Interval]) -> Self {
        let mut mask = 0u16;
        let mut i = 0;
        while i < intervals.len() {
            if intervals[i] < 12 {
                mask |= 1 << intervals[i];
            }
            i += 1;
        }
        IntervalMask(mask)
    }

    pub fn contains(self, interval: Interval) -> bool {
        interval < 12 && self.0 & (1 << interval) != 0
    }

    /// True when every interval of `other` is present here.
    pub fn is_superset_of(self, other: IntervalMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A chord template: quality + defining interval set from the root.
pub struct ChordTemplate<Q> {
    pub quality: Q,
    pub intervals: IntervalMask,
}

impl<Q> ChordTemplate<Q> {
    const fn new(quality: Q, intervals: &[Interval]) -> Self {
        Self {
            quality,
            intervals: IntervalMask::from_intervals(intervals),
        }
    }
}

/// Triad catalog. Order is the tie-break: first full match wins.
pub static TRIADS: &[ChordTemplate<TriadQuality>] = &[
    ChordTemplate::new(TriadQuality::Major, &[0, 4, 7]),
    ChordTemplate::new(TriadQuality::Minor, &[0, 3, 7]),
    ChordTemplate::new(TriadQuality::Diminished, &[0, 3, 6]),
    ChordTemplate::new(TriadQuality::Augmented, &[0, 4, 8]),
    ChordTemplate::new(TriadQuality::Suspended2, &[0, 2, 7]),
    ChordTemplate::new(TriadQuality::Suspended4, &[0, 5, 7]),
];

/// Seventh-chord catalog. Order is the tie-break: first full match wins.
pub static SEVENTHS: &[ChordTemplate<SeventhQuality>] = &[
    ChordTemplate::new(SeventhQuality::Major7, &[0, 4, 7, 11]),
    ChordTemplate::new(SeventhQuality::MinorMajor7, &[0, 3, 7, 11]),
    ChordTemplate::new(SeventhQuality::Minor7, &[0, 3, 7, 10]),
    ChordTemplate::new(SeventhQuality::Dominant7, &[0, 4, 7, 10]),
    ChordTemplate::new(SeventhQuality::Augmented7, &[0, 4, 8, 11]),
    ChordTemplate::new(SeventhQuality::Diminished7, &[0, 3, 6, 9]),
    ChordTemplate::new(SeventhQuality::HalfDiminished7, &[0, 3, 6, 10]),
    ChordTemplate::new(SeventhQuality::Suspended7, &[0, 5, 7, 10]),
];

/// First template in `catalog` whose defining intervals all occur in `intervals`.
pub fn first_match<'a, Q>(
    catalog: &'a [ChordTemplate<Q>],
    intervals: &[Interval],
) -> Option<&'a ChordTemplate<Q>> {
    let present = IntervalMask::from_intervals(intervals);
    catalog
        .iter()
        .find(|template| present.is_superset_of(template.intervals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(TRIADS.len(), 6);
        assert!(TRIADS.iter().all(|t| t.intervals.len() == 3));
        assert_eq!(SEVENTHS.len(), 8);
        assert!(SEVENTHS.iter().all(|t| t.intervals.len() == 4));
    }

    #[test]
    fn every_template_contains_the_root() {
        assert!(TRIADS.iter().all(|t| t.intervals.contains(0)));
        assert!(SEVENTHS.iter().all(|t| t.intervals.contains(0)));
    }

    #[test]
    fn mask_ignores_out_of_range() {
        let mask = IntervalMask::from_intervals(&[0, 4, 14]);
        assert_eq!(mask.len(), 2);
        assert!(!mask.contains(14));
        assert!(IntervalMask::from_intervals(&[]).is_empty());
    }

    #[test]
    fn superset_match_takes_first_in_order() {
        // C E G A: holds major {0,4,7}; nothing earlier in the catalog
        let found = first_match(TRIADS, &[0, 4, 7, 9]).unwrap();
        assert_eq!(found.quality, TriadQuality::Major);

        // {0,3,6,9,10} satisfies both dim7 and m7♭5; dim7 comes first
        let found = first_match(SEVENTHS, &[0, 3, 6, 9, 10]).unwrap();
        assert_eq!(found.quality, SeventhQuality::Diminished7);
    }

    #[test]
    fn incomplete_shape_does_not_match() {
        assert!(first_match(TRIADS, &[0, 4]).is_none());
        assert!(first_match(SEVENTHS, &[0, 4, 7]).is_none());
    }
}
