use thiserror::Error;

/// The only user-facing failure: a query argument outside its domain.
///
/// Raised before any computation starts. Classification misses are not
/// errors; they surface as `None` chord fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("invalid root note {0:?}: expected one of C, D♭, D, E♭, E, F, G♭, G, A♭, A, B♭, B")]
    Root(String),

    #[error("unsupported scale family {0:?}: expected major, melodic minor, harmonic major or harmonic minor")]
    ScaleFamily(String),

    #[error("invalid mode index {0}: expected 0..7")]
    ModeIndex(usize),

    #[error("invalid extension level {0}: expected 3, 7, 9, 11 or 13")]
    ExtensionLevel(u8),
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;
