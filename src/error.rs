//! Error type shared by sketch construction, merging and decoding.

use thiserror::Error;

use crate::config::{MAX_PRECISION, MIN_PRECISION};

/// Result type for sketch operations
pub type Result<T> = std::result::Result<T, SketchError>;

/// Sketch error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// Precision outside of the supported range
    #[error("precision {0} is out of range [{}, {}]", MIN_PRECISION, MAX_PRECISION)]
    PrecisionOutOfRange(u8),

    /// Merge between sketches of different precision
    #[error("precision mismatch: expected {expected}, got {actual}")]
    PrecisionMismatch { expected: u8, actual: u8 },

    /// Not enough bytes to decode the next stage of the wire format
    #[error("buffer too short")]
    TruncatedInput,

    /// Wire format version is not known
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),

    /// Input is complete but violates a sketch invariant
    #[error("malformed sketch data: {0}")]
    Malformed(&'static str),
}
