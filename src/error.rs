use thiserror::Error;

/// Errors reported by the alignment engine.
///
/// `Internal` marks invariant violations in the DP table or traceback;
/// the fill order and band geometry make them unreachable for any validated
/// configuration, and they are surfaced rather than ignored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The maximum alignment length cap was zero.
    #[error("maximum alignment length must be positive")]
    InvalidAlignmentLength,

    /// The scoring scheme violates the cost-model invariants.
    #[error("invalid scoring scheme: {0}")]
    InvalidScheme(String),

    /// An aligned sequence contained bytes outside the supported alphabet.
    #[error("sequence is not valid UTF-8")]
    NonUtf8Sequence,

    /// A DP invariant was violated. This is a bug, not a usage error.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}
