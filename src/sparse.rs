//! ## Sparse representation
//! Used while few distinct registers are observed. Stores sparse codes (see `encoding`)
//! at precision `PP` in two containers:
//! - temp set: unordered, deduplicated codes awaiting merge into the list
//! - list: ascending, duplicate-free codes compressed as varint deltas
//!
//! List byte encoding: every code is stored as the wrapping difference from its
//! predecessor (first code from 0), 7 bits per byte, high bit set on all bytes but the last.
use std::cmp::Ordering;
use std::collections::HashSet;
use std::iter::Peekable;
use std::mem::size_of;

use tracing::trace;

use crate::encoding::{encode_hash, MP, PP};
use crate::error::{Result, SketchError};
use crate::estimator::{linear_counting, Estimator};
use crate::representation::RepresentationTrait;

/// Ascending, duplicate-free list of sparse codes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SparseList {
    /// Number of codes stored
    count: u32,
    /// Last appended code, base for the next delta
    last: u32,
    /// Varint encoded deltas
    bytes: Vec<u8>,
}

impl SparseList {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            count: 0,
            last: 0,
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Number of codes stored
    #[inline]
    pub(crate) fn len(&self) -> u32 {
        self.count
    }

    /// Append `code`, which must be greater than the last appended code
    #[inline]
    pub(crate) fn append(&mut self, code: u32) {
        debug_assert!(self.count == 0 || code > self.last);
        let mut x = code.wrapping_sub(self.last);
        while x & 0xffff_ff80 != 0 {
            self.bytes.push((x & 0x7f) as u8 | 0x80);
            x >>= 7;
        }
        self.bytes.push(x as u8);
        self.last = code;
        self.count += 1;
    }

    /// Return ascending iterator over stored codes
    #[inline]
    pub(crate) fn iter(&self) -> SparseIter<'_> {
        SparseIter {
            bytes: &self.bytes,
            pos: 0,
            last: 0,
        }
    }

    /// Build a new list holding the union of stored codes and ascending, duplicate-free `keys`
    pub(crate) fn merge_with(&self, keys: &[u32]) -> SparseList {
        let mut merged = SparseList::with_capacity(self.bytes.len() + keys.len() * 2);
        for code in Union::new(self.iter(), keys.iter().copied()) {
            merged.append(code);
        }
        merged
    }

    /// Return memory size of `SparseList`
    #[inline]
    pub(crate) fn size_of(&self) -> usize {
        size_of::<Self>() + self.bytes.capacity()
    }

    /// Append wire encoding: `count`, `last`, byte length (`u32` big-endian each), then bytes
    pub(crate) fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.count.to_be_bytes());
        buf.extend_from_slice(&self.last.to_be_bytes());
        buf.extend_from_slice(&(self.bytes.len() as u32).to_be_bytes());
        buf.extend_from_slice(&self.bytes);
    }

    /// Decode list from the start of `buf`, returning it along with the remaining bytes
    pub(crate) fn decode(buf: &[u8]) -> Result<(Self, &[u8])> {
        let (count, buf) = read_u32(buf)?;
        // the recorded `last` is recomputed from the payload below
        let (_, buf) = read_u32(buf)?;
        let (byte_len, buf) = read_u32(buf)?;
        let byte_len = byte_len as usize;
        if buf.len() < byte_len {
            return Err(SketchError::TruncatedInput);
        }
        let (bytes, rest) = buf.split_at(byte_len);

        let mut pos = 0;
        let mut decoded = 0u32;
        let mut last = 0u32;
        while pos < bytes.len() {
            let (delta, len) = read_varint(&bytes[pos..])
                .ok_or(SketchError::Malformed("invalid varint in sparse list"))?;
            pos += len;
            let code = last.wrapping_add(delta);
            if decoded > 0 && code <= last {
                return Err(SketchError::Malformed("sparse list is not strictly ascending"));
            }
            last = code;
            decoded += 1;
        }
        if decoded != count {
            return Err(SketchError::Malformed("sparse list count does not match its payload"));
        }

        let list = Self {
            count,
            last,
            bytes: bytes.to_vec(),
        };
        Ok((list, rest))
    }
}

/// Read big-endian `u32` from the start of `buf`
#[inline]
pub(crate) fn read_u32(buf: &[u8]) -> Result<(u32, &[u8])> {
    match buf.split_first_chunk::<4>() {
        Some((head, rest)) => Ok((u32::from_be_bytes(*head), rest)),
        None => Err(SketchError::TruncatedInput),
    }
}

/// Read varint from the start of `bytes`, returning its value and encoded length
#[inline]
fn read_varint(bytes: &[u8]) -> Option<(u32, usize)> {
    let mut x = 0u32;
    let mut shift = 0;
    for (i, &b) in bytes.iter().enumerate() {
        x |= u32::from(b & 0x7f) << shift;
        if b & 0x80 == 0 {
            return Some((x, i + 1));
        }
        shift += 7;
        if shift > 28 {
            return None;
        }
    }
    None
}

/// Ascending iterator over codes of `SparseList`
pub(crate) struct SparseIter<'a> {
    bytes: &'a [u8],
    pos: usize,
    last: u32,
}

impl Iterator for SparseIter<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        match read_varint(&self.bytes[self.pos..]) {
            Some((delta, len)) => {
                self.pos += len;
                self.last = self.last.wrapping_add(delta);
                Some(self.last)
            }
            None => {
                self.pos = self.bytes.len();
                None
            }
        }
    }
}

/// Ascending union of two ascending, duplicate-free sequences
pub(crate) struct Union<L: Iterator<Item = u32>, R: Iterator<Item = u32>> {
    lhs: Peekable<L>,
    rhs: Peekable<R>,
}

impl<L: Iterator<Item = u32>, R: Iterator<Item = u32>> Union<L, R> {
    #[inline]
    pub(crate) fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs: lhs.peekable(),
            rhs: rhs.peekable(),
        }
    }
}

impl<L: Iterator<Item = u32>, R: Iterator<Item = u32>> Iterator for Union<L, R> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        match (self.lhs.peek().copied(), self.rhs.peek().copied()) {
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Less => self.lhs.next(),
                Ordering::Greater => self.rhs.next(),
                Ordering::Equal => {
                    self.rhs.next();
                    self.lhs.next()
                }
            },
            (Some(_), None) => self.lhs.next(),
            (None, _) => self.rhs.next(),
        }
    }
}

/// Sparse representation: temp set of pending codes plus compressed sorted list
#[derive(Clone, Debug, Default)]
pub(crate) struct Sparse {
    tmp_set: HashSet<u32>,
    list: SparseList,
}

impl Sparse {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create sparse representation from already decoded parts
    #[inline]
    pub(crate) fn from_parts(tmp_set: HashSet<u32>, list: SparseList) -> Self {
        Self { tmp_set, list }
    }

    /// Add sparse code to temp set, returning `true` if it was not pending yet.
    /// Codes already merged into the list are not looked up.
    #[inline]
    pub(crate) fn insert_code(&mut self, code: u32) -> bool {
        self.tmp_set.insert(code)
    }

    /// Number of codes waiting in temp set
    #[inline]
    pub(crate) fn pending(&self) -> usize {
        self.tmp_set.len()
    }

    /// Sparse list
    #[inline]
    pub(crate) fn list(&self) -> &SparseList {
        &self.list
    }

    /// Temp set codes in ascending order
    #[inline]
    pub(crate) fn sorted_tmp(&self) -> Vec<u32> {
        let mut keys: Vec<u32> = self.tmp_set.iter().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Merge temp set into sparse list
    pub(crate) fn flush(&mut self) {
        if self.tmp_set.is_empty() {
            return;
        }
        let keys = self.sorted_tmp();
        self.list = self.list.merge_with(&keys);
        self.tmp_set.clear();
        trace!(list_len = self.list.len(), "flushed sparse temp set");
    }

    /// Number of distinct codes across temp set and list
    #[inline]
    pub(crate) fn len(&self) -> u32 {
        if self.tmp_set.is_empty() {
            return self.list.len();
        }
        self.codes().count() as u32
    }

    /// Ascending iterator over distinct codes across temp set and list
    #[inline]
    pub(crate) fn codes(&self) -> Union<SparseIter<'_>, std::vec::IntoIter<u32>> {
        Union::new(self.list.iter(), self.sorted_tmp().into_iter())
    }
}

impl RepresentationTrait for Sparse {
    /// Insert hash into `Sparse` representation, flushing temp set once it outgrows `m / 100`
    #[inline]
    fn insert_hash(&mut self, hash: u64, precision: u8) -> bool {
        let changed = self.insert_code(encode_hash(hash, precision, PP));
        if self.tmp_set.len() * 100 > 1 << precision {
            self.flush();
        }
        changed
    }

    /// Return linear counting estimate at sparse precision
    #[inline]
    fn estimate(&self, _precision: u8, _estimator: &Estimator) -> u64 {
        let mp = f64::from(MP);
        let zeros = mp - f64::from(self.len());
        (linear_counting(mp, zeros) + 0.5) as u64
    }

    /// Return memory size of `Sparse` representation
    #[inline]
    fn size_of(&self) -> usize {
        size_of::<HashSet<u32>>() + self.tmp_set.capacity() * size_of::<u32>() + self.list.size_of()
    }
}

impl PartialEq for Sparse {
    fn eq(&self, other: &Self) -> bool {
        self.codes().eq(other.codes())
    }
}

impl Eq for Sparse {}
