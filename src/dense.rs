//! ## Dense representation
//! Register file of `m = 2^p` registers plus a `base` shared by all of them:
//! register `i` represents rank `base + registers[i]`.
//!
//! Registers are 4 bits wide, so a rank more than 15 above `base` cannot be stored
//! directly. When such a rank is observed and every register is at least `delta`
//! above `base`, all registers are shifted down by `delta` and `base` grows by `delta`.
//! Otherwise the register is capped at 15.
use std::mem::size_of;

use tracing::trace;

use crate::encoding::position_and_rank;
use crate::estimator::{alpha, Estimator, EstimatorTrait, RegisterStats};
use crate::registers::{Registers, REGISTER_MAX};
use crate::representation::RepresentationTrait;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Dense {
    registers: Registers,
    base: u8,
}

impl Dense {
    /// Create zero registers for precision `p`
    #[inline]
    pub(crate) fn new(precision: u8) -> Self {
        Self {
            registers: Registers::new(1 << precision),
            base: 0,
        }
    }

    #[inline]
    pub(crate) fn from_parts(registers: Registers, base: u8) -> Self {
        Self { registers, base }
    }

    #[inline]
    pub(crate) fn base(&self) -> u8 {
        self.base
    }

    #[inline]
    pub(crate) fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Observe `rank` at register `idx`, returning `true` if any register changed
    pub(crate) fn insert(&mut self, idx: u32, rank: u8) -> bool {
        let mut changed = false;
        if rank >= self.base.saturating_add(REGISTER_MAX + 1) {
            let delta = self.registers.min();
            if delta > 0 {
                trace!(base = self.base, delta, "rebasing dense registers");
                self.base += delta;
                self.registers.rebase(delta);
                changed = true;
            }
        }
        if rank > self.base {
            let val = (rank - self.base).min(REGISTER_MAX);
            if val > self.registers.get(idx) {
                self.registers.set(idx, val);
                changed = true;
            }
        }
        changed
    }

    /// Merge `rhs` registers keeping the largest absolute rank of every register
    pub(crate) fn merge(&mut self, rhs: &Dense) {
        if rhs.base > self.base {
            let delta = rhs.base - self.base;
            trace!(base = self.base, delta, "rebasing dense registers to merge");
            self.registers.rebase(delta);
            self.base = rhs.base;
        }
        let shift = self.base - rhs.base;
        for (idx, val) in (0u32..).zip(rhs.registers.values()) {
            let val = val.saturating_sub(shift);
            if val > self.registers.get(idx) {
                self.registers.set(idx, val);
            }
        }
    }

    /// Aggregate register statistics consumed by estimators
    pub(crate) fn stats(&self, precision: u8) -> RegisterStats {
        let m = self.registers.len();
        RegisterStats {
            precision,
            m: f64::from(m),
            alpha: alpha(m),
            base: self.base,
            sum: self.registers.sum(self.base),
            // every register has been observed once base is above zero
            zeros: if self.base == 0 {
                self.registers.zeros()
            } else {
                0
            },
        }
    }
}

impl RepresentationTrait for Dense {
    /// Insert hash into `Dense` representation
    #[inline]
    fn insert_hash(&mut self, hash: u64, precision: u8) -> bool {
        let (idx, rank) = position_and_rank(hash, precision);
        self.insert(idx, rank)
    }

    /// Return estimate of the configured estimator
    #[inline]
    fn estimate(&self, precision: u8, estimator: &Estimator) -> u64 {
        estimator.estimate(&self.stats(precision))
    }

    /// Return memory size of `Dense` representation
    #[inline]
    fn size_of(&self) -> usize {
        size_of::<u8>() + self.registers.size_of()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    /// Dense representation with every register at `rank`
    fn filled(precision: u8, rank: u8) -> Dense {
        let mut dense = Dense::new(precision);
        for idx in 0..1 << precision {
            dense.insert(idx, rank);
        }
        dense
    }

    #[test]
    fn test_insert_monotonic() {
        let mut dense = Dense::new(4);
        assert!(dense.insert(3, 5));
        assert!(!dense.insert(3, 4));
        assert!(!dense.insert(3, 5));
        assert!(dense.insert(3, 6));
        assert_eq!(dense.registers().get(3), 6);
        assert_eq!(dense.registers().zeros(), 15);
    }

    #[test]
    fn test_insert_caps_without_headroom() {
        // other registers are still zero, so no rebase is possible
        let mut dense = Dense::new(4);
        assert!(dense.insert(0, 40));
        assert_eq!(dense.base(), 0);
        assert_eq!(dense.registers().get(0), 15);
    }

    #[test]
    fn test_insert_rebase() {
        let mut dense = filled(4, 3);
        dense.insert(5, 10);

        // rank 19 would overflow, all registers are at least 3 above base
        assert!(dense.insert(7, 19));
        assert_eq!(dense.base(), 3);
        assert_eq!(dense.registers().get(0), 0);
        assert_eq!(dense.registers().get(5), 7);
        assert_eq!(dense.registers().get(7), 15);
        assert_eq!(dense.registers().zeros(), 14);

        // rank equal to base is not stored
        assert!(!dense.insert(0, 3));
        assert!(dense.insert(0, 4));
        assert_eq!(dense.registers().get(0), 1);
    }

    #[test]
    fn test_stats_zeros_with_base() {
        let mut dense = filled(4, 2);
        assert_eq!(dense.stats(4).zeros, 0);
        dense.insert(0, 30);
        assert_eq!(dense.base(), 2);
        assert_eq!(dense.registers().zeros(), 15);
        let stats = dense.stats(4);
        assert_eq!(stats.zeros, 0);
        // 15 registers at rank 2 and one capped at rank 17
        assert_eq!(stats.sum, 15.0 / 4.0 + 2f64.powi(-17));
    }

    #[test_case(0, 0; "same base")]
    #[test_case(0, 2; "rhs higher base")]
    #[test_case(3, 1; "lhs higher base")]
    fn test_merge_commutative(lhs_base: u8, rhs_base: u8) {
        let mut lhs = filled(4, lhs_base.max(1));
        let mut rhs = filled(4, rhs_base.max(1));
        if lhs_base > 0 {
            lhs.insert(2, 17 + lhs_base);
        }
        if rhs_base > 0 {
            rhs.insert(2, 17 + rhs_base);
        }
        lhs.insert(4, 9);
        rhs.insert(9, 12);
        assert_eq!(lhs.base(), lhs_base);
        assert_eq!(rhs.base(), rhs_base);

        let mut lhs_rhs = lhs.clone();
        lhs_rhs.merge(&rhs);
        let mut rhs_lhs = rhs.clone();
        rhs_lhs.merge(&lhs);
        assert_eq!(lhs_rhs, rhs_lhs);
        assert_eq!(lhs_rhs.base(), lhs_base.max(rhs_base));

        // absolute ranks are the maximum of both inputs
        let base = lhs_rhs.base();
        assert_eq!(base + lhs_rhs.registers().get(4), 9);
        assert_eq!(base + lhs_rhs.registers().get(9), 12);
    }

    #[test]
    fn test_merge_self_is_noop() {
        let mut dense = filled(4, 2);
        dense.insert(1, 8);
        let copy = dense.clone();
        dense.merge(&copy);
        assert_eq!(dense, copy);
    }
}
