//! Sketch construction parameters.
#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchError};
use crate::estimator::Estimator;

/// Smallest supported precision
pub const MIN_PRECISION: u8 = 4;
/// Largest supported precision
pub const MAX_PRECISION: u8 = 18;
/// Precision used by `SketchConfig::default()`
pub const DEFAULT_PRECISION: u8 = 14;

/// Configuration of a `Sketch`:
/// - `precision`: number of index bits, the sketch uses `2^precision` registers.
/// - `sparse`: whether to start in sparse representation, if disabled the sketch
///   allocates all registers upfront and never uses sparse representation.
/// - `estimator`: strategy converting register statistics into an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct SketchConfig {
    pub precision: u8,
    pub sparse: bool,
    pub estimator: Estimator,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            sparse: true,
            estimator: Estimator::default(),
        }
    }
}

impl SketchConfig {
    #[inline]
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    #[inline]
    pub fn with_sparse(mut self, sparse: bool) -> Self {
        self.sparse = sparse;
        self
    }

    #[inline]
    pub fn with_estimator(mut self, estimator: impl Into<Estimator>) -> Self {
        self.estimator = estimator.into();
        self
    }

    /// Check that configuration describes a valid sketch
    pub fn validate(&self) -> Result<()> {
        validate_precision(self.precision)
    }

    /// Number of registers
    #[inline]
    pub fn m(&self) -> u32 {
        1 << self.precision
    }
}

#[inline]
pub(crate) fn validate_precision(precision: u8) -> Result<()> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        Ok(())
    } else {
        Err(SketchError::PrecisionOutOfRange(precision))
    }
}
