//! ## Register file
//! `m` registers of 4 bits packed two per byte: register `2k` in the high nibble
//! and register `2k + 1` in the low nibble of byte `k`.
//! Number of non-zero registers is maintained on every `set`, so zero register
//! count is available in constant time.
use std::mem::size_of;

use crate::error::{Result, SketchError};

/// Largest value a register can hold
pub(crate) const REGISTER_MAX: u8 = 0xf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Registers {
    data: Vec<u8>,
    /// Number of registers holding non-zero value
    nz: u32,
}

impl Registers {
    /// Create `m` zero registers, `m` must be even
    #[inline]
    pub(crate) fn new(m: u32) -> Self {
        Self {
            data: vec![0; (m / 2) as usize],
            nz: 0,
        }
    }

    /// Create registers from one value per byte
    pub(crate) fn from_flat(values: &[u8]) -> Result<Self> {
        if values.len() % 2 != 0 {
            return Err(SketchError::Malformed("odd number of registers"));
        }
        if values.iter().any(|&v| v > REGISTER_MAX) {
            return Err(SketchError::Malformed("register value exceeds 4 bits"));
        }
        let data: Vec<u8> = values
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect();
        Ok(Self::from_packed(&data))
    }

    /// Create registers from packed nibbles, two per byte
    pub(crate) fn from_packed(data: &[u8]) -> Self {
        let mut registers = Self {
            data: data.to_vec(),
            nz: 0,
        };
        registers.nz = registers.count_non_zero();
        registers
    }

    /// Number of registers
    #[inline]
    pub(crate) fn len(&self) -> u32 {
        self.data.len() as u32 * 2
    }

    /// Get register `idx`
    #[inline]
    pub(crate) fn get(&self, idx: u32) -> u8 {
        let byte = self.data[(idx >> 1) as usize];
        if idx & 1 == 0 {
            byte >> 4
        } else {
            byte & 0xf
        }
    }

    /// Set register `idx` to value `val` in [0..15] range
    #[inline]
    pub(crate) fn set(&mut self, idx: u32, val: u8) {
        debug_assert!(val <= REGISTER_MAX);
        let old = self.get(idx);
        let byte = &mut self.data[(idx >> 1) as usize];
        if idx & 1 == 0 {
            *byte = (*byte & 0x0f) | (val << 4);
        } else {
            *byte = (*byte & 0xf0) | val;
        }
        match (old, val) {
            (0, 1..) => self.nz += 1,
            (1.., 0) => self.nz -= 1,
            _ => {}
        }
    }

    /// Decrease every register by `delta`, flooring at zero
    pub(crate) fn rebase(&mut self, delta: u8) {
        for byte in self.data.iter_mut() {
            let hi = (*byte >> 4).saturating_sub(delta);
            let lo = (*byte & 0xf).saturating_sub(delta);
            *byte = (hi << 4) | lo;
        }
        self.nz = self.count_non_zero();
    }

    /// Return `Σ 2^-(base + register)` over all registers
    pub(crate) fn sum(&self, base: u8) -> f64 {
        let mut histogram = [0u32; 16];
        for &byte in self.data.iter() {
            histogram[usize::from(byte >> 4)] += 1;
            histogram[usize::from(byte & 0xf)] += 1;
        }
        histogram
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(val, &count)| f64::from(count) * 2f64.powi(-(i32::from(base) + val as i32)))
            .sum()
    }

    /// Number of registers holding zero
    #[inline]
    pub(crate) fn zeros(&self) -> u32 {
        self.len() - self.nz
    }

    /// Smallest register value, zero as soon as any register is zero
    pub(crate) fn min(&self) -> u8 {
        if self.nz < self.len() {
            return 0;
        }
        self.values().min().unwrap_or(0)
    }

    /// Iterate register values in index order
    #[inline]
    pub(crate) fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().flat_map(|&byte| [byte >> 4, byte & 0xf])
    }

    /// Packed nibbles, two registers per byte
    #[inline]
    pub(crate) fn packed(&self) -> &[u8] {
        &self.data
    }

    /// Return memory size of `Registers`
    #[inline]
    pub(crate) fn size_of(&self) -> usize {
        size_of::<Self>() + self.data.capacity()
    }

    fn count_non_zero(&self) -> u32 {
        self.values().filter(|&v| v != 0).count() as u32
    }
}
