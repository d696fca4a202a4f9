//! `cardinality-sketch` is a Rust crate designed to estimate the number of distinct byte strings
//! in a stream or dataset using HyperLogLog-TailCut.
//!
//! # Data-structure design rationale
//!
//! ## Low memory footprint
//! - Small cardinalities are kept in sparse representation: codes of the observed
//!   (index, rank) pairs at precision 25, compressed as varint deltas of a sorted list.
//! - Large cardinalities use `2^P` registers of 4 bits each, two registers per byte,
//!   half of what 8-bit HyperLogLog++ registers take.
//!
//! ## High accuracy
//! - Sparse representation counts with linear counting at precision 25,
//!   which is nearly exact until the sketch switches to dense representation.
//! - Ranks beyond the 4-bit register range are kept by shifting all registers
//!   by a shared base once every register is above it.
//! - Dense estimates use HyperLogLog++ with linear counting and empirical bias
//!   correction, or LogLog-Beta.
//!   - Expected error:
//!     P = 10: 1.04 / sqrt(2^10) = 3.25%
//!     P = 12: 1.04 / sqrt(2^12) = 1.62%
//!     P = 14: 1.04 / sqrt(2^14) = 0.81%
//!     P = 18: 1.04 / sqrt(2^18) = 0.20%
//!
//! # Usage
//! ```
//! use cardinality_sketch::Sketch;
//!
//! let mut sketch = Sketch::new(14).unwrap();
//! for name in ["alice", "bob", "charlie", "alice"] {
//!     sketch.insert(name.as_bytes());
//! }
//! assert_eq!(sketch.estimate(), 3);
//!
//! let restored = Sketch::from_binary(&sketch.marshal_binary()).unwrap();
//! assert_eq!(restored.estimate(), 3);
//! ```
mod beta;
mod bias;
pub mod config;
mod dense;
mod encoding;
pub mod error;
pub mod estimator;
mod registers;
mod representation;
#[cfg(feature = "with_serde")]
mod serde;
pub mod sketch;
mod sparse;
mod wire;

pub use config::SketchConfig;
pub use error::{Result, SketchError};
pub use estimator::{BiasCorrected, Estimator, LogLogBeta};
pub use sketch::Sketch;
