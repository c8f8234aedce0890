use tracing::trace;

use crate::error::Result;
use crate::mode::{Mode, ModeCatalog};
use crate::pitch::{chromatic_from, PitchClass};
use crate::scale::ScaleFamily;
use crate::types::{ChordSymbol, ResolvedMode};

/// Bind mode `mode_index` of `family` to `root`.
///
/// Fails with `InvalidArgument::ModeIndex` before doing any work when the
/// index is outside 0..7.
pub fn resolve(
    catalog: &ModeCatalog,
    root: PitchClass,
    family: ScaleFamily,
    mode_index: usize,
) -> Result<ResolvedMode> {
    let mode = catalog.mode(family, mode_index)?;
    trace!(%root, %family, mode = mode.name, "resolving mode");
    Ok(bind(mode, root))
}

/// Same as [`resolve`], with root and family given by name.
pub fn resolve_named(
    catalog: &ModeCatalog,
    root: &str,
    family: &str,
    mode_index: usize,
) -> Result<ResolvedMode> {
    let root: PitchClass = root.parse()?;
    let family: ScaleFamily = family.parse()?;
    resolve(catalog, root, family, mode_index)
}

fn bind(mode: &Mode, root: PitchClass) -> ResolvedMode {
    let chromatic = chromatic_from(root);
    let rooted = |symbol: &Option<ChordSymbol>| symbol.as_ref().map(|s| s.with_root(root));

    ResolvedMode {
        label: format!("{} {}", root, mode.name),
        mode_name: mode.name,
        root,
        notes: mode
            .intervals
            .iter()
            .map(|&interval| chromatic[interval as usize])
            .collect(),
        triad_quality: mode.triad_quality,
        triad: rooted(&mode.triad),
        seventh: rooted(&mode.seventh),
        ninth: rooted(&mode.ninth),
        eleventh: rooted(&mode.eleventh),
        thirteenth: rooted(&mode.thirteenth),
    }
}
