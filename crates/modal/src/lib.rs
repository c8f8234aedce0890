//! Modal harmony: chord classification, modes of the four heptatonic parent
//! scales, and diatonic harmonization.
//!
//! # Example
//!
//! ```
//! use modal::ModalEngine;
//!
//! let engine = ModalEngine::new();
//! let stack = engine.harmonize_named("C", "major", 0).unwrap();
//! assert_eq!(stack[4].seventh.as_deref(), Some("G7"));
//! ```

pub mod chord_templates;
pub mod classify;
pub mod error;
pub mod harmonize;
pub mod mode;
pub mod pitch;
pub mod render;
pub mod resolve;
pub mod scale;
pub mod types;

pub use classify::{
    classify_extended, classify_seventh, classify_triad, detect_eleventh, detect_ninth,
    detect_thirteenth,
};
pub use error::InvalidArgument;
pub use mode::{Mode, ModeCatalog};
pub use pitch::PitchClass;
pub use scale::ScaleFamily;
pub use types::{
    Alteration, ChordSymbol, Extension, ExtensionLevel, Harmonization, Interval, ResolvedMode,
    SeventhQuality, Tension, TensionSet, TriadQuality,
};

use std::sync::Arc;

use tracing::info;

/// Facade over a shared [`ModeCatalog`].
///
/// Cheap to clone; every clone reads the same immutable catalog, so one
/// engine can serve any number of threads.
#[derive(Debug, Clone)]
pub struct ModalEngine {
    catalog: Arc<ModeCatalog>,
}

impl ModalEngine {
    /// Build a fresh catalog (28 modes) and wrap it.
    pub fn new() -> Self {
        let catalog = ModeCatalog::new();
        info!(modes = catalog.iter().count(), "mode catalog ready");
        Self::with_catalog(Arc::new(catalog))
    }

    /// Share an existing catalog.
    pub fn with_catalog(catalog: Arc<ModeCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ModeCatalog {
        &self.catalog
    }

    pub fn resolve(
        &self,
        root: PitchClass,
        family: ScaleFamily,
        mode_index: usize,
    ) -> error::Result<ResolvedMode> {
        resolve::resolve(&self.catalog, root, family, mode_index)
    }

    pub fn resolve_named(
        &self,
        root: &str,
        family: &str,
        mode_index: usize,
    ) -> error::Result<ResolvedMode> {
        resolve::resolve_named(&self.catalog, root, family, mode_index)
    }

    pub fn harmonize(
        &self,
        root: PitchClass,
        family: ScaleFamily,
        mode_index: usize,
    ) -> error::Result<Harmonization> {
        harmonize::harmonize(&self.catalog, root, family, mode_index)
    }

    pub fn harmonize_named(
        &self,
        root: &str,
        family: &str,
        mode_index: usize,
    ) -> error::Result<Harmonization> {
        harmonize::harmonize_named(&self.catalog, root, family, mode_index)
    }

    /// The seven mode names of `family`, degree order.
    pub fn list_mode_names(&self, family: ScaleFamily) -> [&'static str; 7] {
        self.catalog.mode_names(family)
    }

    /// Classify an interval set at extension degree 3, 7, 9, 11 or 13.
    ///
    /// `Ok(None)` is a classification miss, not an error.
    pub fn classify(&self, intervals: &[Interval], level: u8) -> error::Result<Option<ChordSymbol>> {
        let level = ExtensionLevel::try_from(level)?;
        Ok(classify_extended(intervals, level))
    }
}

impl Default for ModalEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_clones_share_catalog() {
        let engine = ModalEngine::new();
        let clone = engine.clone();
        assert!(std::ptr::eq(engine.catalog(), clone.catalog()));
    }

    #[test]
    fn engine_over_global_catalog() {
        let catalog = Arc::new(ModeCatalog::global().clone());
        let engine = ModalEngine::with_catalog(catalog);
        assert_eq!(engine.list_mode_names(ScaleFamily::Major)[5], "aeolian");
    }

    #[test]
    fn classify_rejects_unknown_level() {
        let engine = ModalEngine::new();
        assert_eq!(
            engine.classify(&[0, 4, 7], 5),
            Err(InvalidArgument::ExtensionLevel(5))
        );
        assert_eq!(engine.classify(&[0, 1, 2], 7), Ok(None));
        assert_eq!(
            engine
                .classify(&[0, 2, 4, 5, 7, 9, 11], 9)
                .unwrap()
                .map(|s| s.to_string())
                .as_deref(),
            Some("maj9")
        );
    }
}
