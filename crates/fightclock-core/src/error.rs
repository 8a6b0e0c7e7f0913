//! Error types for fightclock-core.

use thiserror::Error;

/// Errors raised when building a [`Script`](crate::Script).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// A script must contain at least one segment.
    #[error("script contains no segments")]
    Empty,

    /// The shot clock rule points at a segment the script does not have.
    #[error("shot clock segment index {index} out of range (script has {len} segments)")]
    ShotClockOutOfRange { index: usize, len: usize },
}
