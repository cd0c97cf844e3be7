use thiserror::Error;

/// Construction-time failures of the page effects.
///
/// Runtime behavior never errors: once an effect is built it only ever
/// clamps or wraps its inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("phrase list is empty")]
    EmptyPhrases,
    #[error("a path needs at least two waypoints, got {0}")]
    PathTooShort(usize),
    #[error("missing mount element #{0}")]
    MissingMount(&'static str),
}
