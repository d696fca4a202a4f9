use enum_dispatch::enum_dispatch;
use tracing::debug;

use crate::dense::Dense;
use crate::encoding::{decode_hash, PP};
use crate::estimator::Estimator;
use crate::sparse::Sparse;

/// Representation types supported by `Sketch`
#[derive(Clone, Debug, PartialEq, Eq)]
#[enum_dispatch]
pub(crate) enum Representation {
    Sparse(Sparse),
    Dense(Dense),
}

/// Representation trait which must be implemented by all representations.
#[enum_dispatch(Representation)]
pub(crate) trait RepresentationTrait {
    /// Insert 64-bit hash, returning `true` if state may have changed
    fn insert_hash(&mut self, hash: u64, precision: u8) -> bool;
    fn estimate(&self, precision: u8, estimator: &Estimator) -> u64;
    fn size_of(&self) -> usize;
}

impl Representation {
    /// Create empty representation, sparse or dense
    #[inline]
    pub(crate) fn new(precision: u8, sparse: bool) -> Self {
        if sparse {
            Representation::Sparse(Sparse::new())
        } else {
            Representation::Dense(Dense::new(precision))
        }
    }

    #[inline]
    pub(crate) fn is_sparse(&self) -> bool {
        matches!(self, Representation::Sparse(_))
    }

    /// Switch to dense representation once sparse list holds more than `m` codes
    #[inline]
    pub(crate) fn promote_if_needed(&mut self, precision: u8) {
        if let Representation::Sparse(sparse) = self {
            if sparse.list().len() > 1 << precision {
                self.promote(precision);
            }
        }
    }

    /// Replay all sparse codes into a new dense representation
    pub(crate) fn promote(&mut self, precision: u8) {
        if let Representation::Sparse(sparse) = self {
            sparse.flush();
            debug!(
                precision,
                sparse_len = sparse.list().len(),
                "promoting sparse representation to dense"
            );
            let mut dense = Dense::new(precision);
            replay(&mut dense, sparse, precision);
            *self = Representation::Dense(dense);
        }
    }
}

/// Insert every code of `sparse` into `dense`
#[inline]
pub(crate) fn replay(dense: &mut Dense, sparse: &Sparse, precision: u8) {
    for code in sparse.codes() {
        let (idx, rank) = decode_hash(code, precision, PP);
        dense.insert(idx, rank);
    }
}
