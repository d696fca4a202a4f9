//! ## Sketch
//! `Sketch` estimates the number of distinct byte strings inserted into it.
//!
//! It starts in sparse representation, storing codes observed at precision 25 in a temp
//! set which is merged into a compressed sorted list once it outgrows `m / 100` codes.
//! When the list holds more than `m` codes the sketch irreversibly switches to dense
//! representation of `m` 4-bit registers sharing a common base.
//!
//! Hashing is performed by the `BuildHasher` the sketch is created with,
//! `WyHash` by default.
use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};
use std::mem::size_of;

use tracing::debug;
use wyhash::WyHash;

use crate::config::SketchConfig;
use crate::error::{Result, SketchError};
use crate::representation::{replay, Representation, RepresentationTrait};
use crate::wire;

/// HyperLogLog-TailCut cardinality sketch
#[derive(Clone)]
pub struct Sketch<S = BuildHasherDefault<WyHash>> {
    config: SketchConfig,
    repr: Representation,
    build_hasher: S,
}

impl Sketch {
    /// Create sketch of given precision with default configuration and hasher
    #[inline]
    pub fn new(precision: u8) -> Result<Self> {
        Self::with_hasher(precision, BuildHasherDefault::default())
    }

    /// Create sketch from configuration with default hasher
    #[inline]
    pub fn with_config(config: SketchConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, BuildHasherDefault::default())
    }

    /// Decode sketch from its binary encoding
    #[inline]
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        let (config, repr) = wire::decode(data)?;
        Ok(Self {
            config,
            repr,
            build_hasher: BuildHasherDefault::default(),
        })
    }
}

impl<S: BuildHasher> Sketch<S> {
    /// Create sketch of given precision hashing inserted items with `build_hasher`
    #[inline]
    pub fn with_hasher(precision: u8, build_hasher: S) -> Result<Self> {
        let config = SketchConfig::default().with_precision(precision);
        Self::with_config_and_hasher(config, build_hasher)
    }

    /// Create sketch from configuration hashing inserted items with `build_hasher`
    pub fn with_config_and_hasher(config: SketchConfig, build_hasher: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            repr: Representation::new(config.precision, config.sparse),
            build_hasher,
        })
    }

    #[inline]
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    #[inline]
    pub fn precision(&self) -> u8 {
        self.config.precision
    }

    /// Return `true` while sketch uses sparse representation
    #[inline]
    pub fn is_sparse(&self) -> bool {
        self.repr.is_sparse()
    }

    /// Insert byte string, returning `true` if the sketch may have changed
    #[inline]
    pub fn insert(&mut self, bytes: &[u8]) -> bool {
        let mut hasher = self.build_hasher.build_hasher();
        hasher.write(bytes);
        self.insert_hash(hasher.finish())
    }

    /// Insert a hashable item, returning `true` if the sketch may have changed
    #[inline]
    pub fn insert_item<T: Hash + ?Sized>(&mut self, item: &T) -> bool {
        self.insert_hash(self.build_hasher.hash_one(item))
    }

    /// Insert 64-bit hash, returning `true` if the sketch may have changed
    #[inline]
    pub fn insert_hash(&mut self, hash: u64) -> bool {
        let precision = self.precision();
        let changed = self.repr.insert_hash(hash, precision);
        self.repr.promote_if_needed(precision);
        changed
    }

    /// Return cardinality estimate
    #[inline]
    pub fn estimate(&self) -> u64 {
        self.repr.estimate(self.precision(), &self.config.estimator)
    }

    /// Merge `rhs` into this sketch, leaving it unchanged on precision mismatch
    pub fn merge(&mut self, rhs: &Sketch<S>) -> Result<()> {
        let precision = self.precision();
        if precision != rhs.precision() {
            return Err(SketchError::PrecisionMismatch {
                expected: precision,
                actual: rhs.precision(),
            });
        }

        let merged = match (&mut self.repr, &rhs.repr) {
            (Representation::Sparse(lhs), Representation::Sparse(rhs)) => {
                for code in rhs.codes() {
                    lhs.insert_code(code);
                }
                lhs.flush();
                None
            }
            (Representation::Sparse(lhs), Representation::Dense(rhs)) => {
                let mut dense = rhs.clone();
                replay(&mut dense, lhs, precision);
                Some(Representation::Dense(dense))
            }
            (Representation::Dense(lhs), Representation::Sparse(rhs)) => {
                replay(lhs, rhs, precision);
                None
            }
            (Representation::Dense(lhs), Representation::Dense(rhs)) => {
                lhs.merge(rhs);
                None
            }
        };
        if let Some(repr) = merged {
            self.repr = repr;
        }
        self.repr.promote_if_needed(precision);
        Ok(())
    }

    /// Return memory size of `Sketch`
    #[inline]
    pub fn size_of(&self) -> usize {
        size_of::<SketchConfig>() + size_of::<S>() + self.repr.size_of()
    }

    /// Return binary encoding of the sketch
    #[inline]
    pub fn marshal_binary(&self) -> Vec<u8> {
        self.append_binary(Vec::new())
    }

    /// Append binary encoding of the sketch to `buf`
    #[inline]
    pub fn append_binary(&self, mut buf: Vec<u8>) -> Vec<u8> {
        wire::encode_into(self.precision(), &self.repr, &mut buf);
        buf
    }

    /// Replace sketch contents with decoded `data`.
    ///
    /// Configuration is kept if the sketch was never used and has the same precision,
    /// otherwise it is reset to match `data`. On error the sketch is left unchanged.
    pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
        let (config, repr) = wire::decode(data)?;
        if config.precision != self.precision() || self.is_used() {
            debug!(
                precision = config.precision,
                sparse = config.sparse,
                "reinitializing used sketch to unmarshal"
            );
            self.config = config.with_estimator(self.config.estimator);
        }
        self.repr = repr;
        Ok(())
    }

    /// Return `true` if the sketch holds any data or was created dense
    fn is_used(&self) -> bool {
        match &self.repr {
            Representation::Sparse(sparse) => sparse.pending() > 0 || sparse.list().len() > 0,
            Representation::Dense(_) => true,
        }
    }
}

impl<S: BuildHasher + Default> Default for Sketch<S> {
    fn default() -> Self {
        let config = SketchConfig::default();
        Self {
            config,
            repr: Representation::new(config.precision, config.sparse),
            build_hasher: S::default(),
        }
    }
}

impl<S> PartialEq for Sketch<S> {
    /// Sketches are equal when they have same precision and representation contents
    fn eq(&self, other: &Self) -> bool {
        self.config.precision == other.config.precision && self.repr == other.repr
    }
}

impl<S> Eq for Sketch<S> {}

impl<S: BuildHasher> Debug for Sketch<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = if self.is_sparse() { "sparse" } else { "dense" };
        write!(
            f,
            "{{ representation: {}, estimate: {}, size: {} }}",
            name,
            self.estimate(),
            self.size_of()
        )
    }
}

impl TryFrom<&[u8]> for Sketch {
    type Error = SketchError;

    #[inline]
    fn try_from(data: &[u8]) -> Result<Self> {
        Self::from_binary(data)
    }
}
