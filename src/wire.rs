//! ## Binary format
//! All integers are big-endian.
//!
//! Header:
//! - byte 0        - format version, `2` is written, `1` and `2` are read
//! - byte 1        - precision
//! - byte 2        - base of dense registers, `0` for sparse representation
//! - byte 3        - representation flag: `1` for sparse, `0` for dense
//!
//! Sparse representation:
//! - `u32` number of temp set codes, followed by the codes in ascending order
//! - sparse list: `u32` count, `u32` last code, `u32` byte length, varint deltas
//!
//! Dense representation:
//! - `u32` register array length
//! - version 2: one byte per register
//! - version 1: two registers per byte, even register in the high nibble
use std::collections::HashSet;

use crate::config::{validate_precision, SketchConfig};
use crate::dense::Dense;
use crate::error::{Result, SketchError};
use crate::registers::Registers;
use crate::representation::Representation;
use crate::sparse::{read_u32, Sparse, SparseList};

/// Format version written by `encode_into`
pub(crate) const VERSION: u8 = 2;
/// Legacy format version storing dense registers as packed nibbles
pub(crate) const VERSION_PACKED: u8 = 1;

const MODE_DENSE: u8 = 0;
const MODE_SPARSE: u8 = 1;

/// Header plus the first `u32` of either representation
const MIN_LEN: usize = 8;

/// Append binary encoding of `repr` to `buf`
pub(crate) fn encode_into(precision: u8, repr: &Representation, buf: &mut Vec<u8>) {
    match repr {
        Representation::Sparse(sparse) => {
            let keys = sparse.sorted_tmp();
            buf.reserve(MIN_LEN + keys.len() * 4 + 12 + sparse.list().size_of());
            buf.extend_from_slice(&[VERSION, precision, 0, MODE_SPARSE]);
            buf.extend_from_slice(&(keys.len() as u32).to_be_bytes());
            for key in keys {
                buf.extend_from_slice(&key.to_be_bytes());
            }
            sparse.list().encode_into(buf);
        }
        Representation::Dense(dense) => {
            let registers = dense.registers();
            buf.reserve(MIN_LEN + registers.len() as usize);
            buf.extend_from_slice(&[VERSION, precision, dense.base(), MODE_DENSE]);
            buf.extend_from_slice(&registers.len().to_be_bytes());
            buf.extend(registers.values());
        }
    }
}

/// Decode configuration and representation from `data`, trailing bytes are ignored
pub(crate) fn decode(data: &[u8]) -> Result<(SketchConfig, Representation)> {
    if data.len() < MIN_LEN {
        return Err(SketchError::TruncatedInput);
    }
    let (version, precision, base, mode) = (data[0], data[1], data[2], data[3]);
    if version != VERSION && version != VERSION_PACKED {
        return Err(SketchError::UnsupportedVersion(version));
    }
    validate_precision(precision)?;

    let payload = &data[4..];
    let repr = match mode {
        MODE_SPARSE => Representation::Sparse(decode_sparse(payload)?),
        MODE_DENSE => Representation::Dense(decode_dense(version, precision, base, payload)?),
        _ => return Err(SketchError::Malformed("unknown representation flag")),
    };
    let config = SketchConfig::default()
        .with_precision(precision)
        .with_sparse(mode == MODE_SPARSE);
    Ok((config, repr))
}

fn decode_sparse(payload: &[u8]) -> Result<Sparse> {
    let (len, rest) = read_u32(payload)?;
    let tmp_len = len as usize * 4;
    if rest.len() < tmp_len {
        return Err(SketchError::TruncatedInput);
    }
    let (keys, rest) = rest.split_at(tmp_len);
    let tmp_set: HashSet<u32> = keys
        .chunks_exact(4)
        .map(|key| u32::from_be_bytes([key[0], key[1], key[2], key[3]]))
        .collect();
    let (list, _) = SparseList::decode(rest)?;
    Ok(Sparse::from_parts(tmp_set, list))
}

fn decode_dense(version: u8, precision: u8, base: u8, payload: &[u8]) -> Result<Dense> {
    // rank never exceeds 64 - precision + 1
    if base > 65 - precision {
        return Err(SketchError::Malformed("base exceeds largest possible rank"));
    }
    let m = 1u32 << precision;
    let expected = if version == VERSION_PACKED { m / 2 } else { m };
    let (len, rest) = read_u32(payload)?;
    if len != expected {
        return Err(SketchError::Malformed("register array length does not match precision"));
    }
    let len = len as usize;
    if rest.len() < len {
        return Err(SketchError::TruncatedInput);
    }
    let registers = if version == VERSION_PACKED {
        Registers::from_packed(&rest[..len])
    } else {
        Registers::from_flat(&rest[..len])?
    };
    Ok(Dense::from_parts(registers, base))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::Sketch;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn random_sketch(precision: u8, n: usize) -> Sketch {
        let mut rng = StdRng::seed_from_u64((u64::from(precision) << 32) | n as u64);
        let mut sketch = Sketch::new(precision).unwrap();
        for _ in 0..n {
            sketch.insert_hash(rng.gen());
        }
        sketch
    }

    /// Encode dense sketch in legacy packed layout
    fn encode_packed(sketch: &Sketch) -> Vec<u8> {
        let data = sketch.marshal_binary();
        let (_, repr) = decode(&data).unwrap();
        let Representation::Dense(dense) = repr else {
            panic!("sketch should be dense");
        };
        let packed = dense.registers().packed();
        let mut buf = vec![VERSION_PACKED, sketch.precision(), dense.base(), MODE_DENSE];
        buf.extend_from_slice(&(packed.len() as u32).to_be_bytes());
        buf.extend_from_slice(packed);
        buf
    }

    #[test]
    fn test_short_sparse_payload() {
        // precision 14, sparse, empty temp set, list of one code with stale `last`
        let data = [
            0x01, 0x0e, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x7f,
        ];
        let sketch = Sketch::from_binary(&data).unwrap();
        assert!(sketch.is_sparse());
        assert_eq!(sketch.estimate(), 1);
        for i in 0..data.len() {
            assert_eq!(
                Sketch::from_binary(&data[..i]),
                Err(SketchError::TruncatedInput),
                "prefix length {i}"
            );
        }
    }

    #[test_case(14, 0; "empty")]
    #[test_case(14, 100; "sparse pending temp set")]
    #[test_case(14, 200; "sparse list and temp set")]
    #[test_case(14, 3_000; "sparse list")]
    #[test_case(10, 5_000; "dense")]
    #[test_case(4, 10_000; "dense rebased")]
    fn test_round_trip(precision: u8, n: usize) {
        let sketch = random_sketch(precision, n);
        let data = sketch.marshal_binary();
        let decoded = Sketch::from_binary(&data).unwrap();
        assert_eq!(decoded, sketch);
        assert_eq!(decoded.estimate(), sketch.estimate());
        assert_eq!(decoded.is_sparse(), sketch.is_sparse());
        assert_eq!(decoded.marshal_binary(), data);
    }

    #[test_case(14, 200)]
    #[test_case(8, 2_000)]
    fn test_truncated(precision: u8, n: usize) {
        let data = random_sketch(precision, n).marshal_binary();
        for i in 0..data.len() {
            assert_eq!(
                Sketch::from_binary(&data[..i]),
                Err(SketchError::TruncatedInput),
                "prefix length {i}"
            );
        }
    }

    #[test]
    fn test_sparse_layout() {
        let sketch = random_sketch(14, 100);
        let data = sketch.marshal_binary();
        assert_eq!(&data[..4], &[VERSION, 14, 0, MODE_SPARSE]);
        assert_eq!(&data[4..8], &100u32.to_be_bytes());
        let keys: Vec<u32> = data[8..408]
            .chunks_exact(4)
            .map(|key| u32::from_be_bytes([key[0], key[1], key[2], key[3]]))
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        // empty sparse list
        assert_eq!(&data[408..], &[0; 12]);
    }

    #[test]
    fn test_dense_layout() {
        let sketch = random_sketch(8, 5_000);
        assert!(!sketch.is_sparse());
        let data = sketch.marshal_binary();
        assert_eq!(data.len(), 8 + 256);
        assert_eq!(&data[..2], &[VERSION, 8]);
        assert_eq!(data[3], MODE_DENSE);
        assert_eq!(&data[4..8], &256u32.to_be_bytes());
        assert!(data[8..].iter().all(|&v| v <= 15));
    }

    #[test]
    fn test_insertion_order_independent_bytes() {
        let mut rng = StdRng::seed_from_u64(11);
        let hashes: Vec<u64> = (0..150).map(|_| rng.gen()).collect();
        let mut forward = Sketch::new(14).unwrap();
        let mut backward = Sketch::new(14).unwrap();
        for (&a, &b) in hashes.iter().zip(hashes.iter().rev()) {
            forward.insert_hash(a);
            backward.insert_hash(b);
        }
        assert_eq!(forward.marshal_binary(), backward.marshal_binary());
    }

    #[test_case(4, 10_000)]
    #[test_case(10, 5_000)]
    #[test_case(14, 1_000_000)]
    fn test_version_1_migration(precision: u8, n: usize) {
        let sketch = random_sketch(precision, n);
        let packed = encode_packed(&sketch);
        let migrated = Sketch::from_binary(&packed).unwrap();
        assert_eq!(migrated, sketch);
        assert_eq!(migrated.estimate(), sketch.estimate());
        // re-encoded in the current version
        assert_eq!(migrated.marshal_binary(), sketch.marshal_binary());
    }

    #[test]
    fn test_append_binary() {
        let sketch = random_sketch(12, 50);
        let data = sketch.append_binary(vec![0xde, 0xad]);
        assert_eq!(&data[..2], &[0xde, 0xad]);
        assert_eq!(&data[2..], sketch.marshal_binary().as_slice());
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let sketch = random_sketch(6, 1_000);
        let mut data = sketch.marshal_binary();
        data.extend_from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(Sketch::from_binary(&data).unwrap(), sketch);
    }

    #[test_case(0)]
    #[test_case(3)]
    #[test_case(255)]
    fn test_unsupported_version(version: u8) {
        let mut data = random_sketch(12, 10).marshal_binary();
        data[0] = version;
        assert_eq!(
            Sketch::from_binary(&data),
            Err(SketchError::UnsupportedVersion(version))
        );
    }

    #[test_case(3)]
    #[test_case(19)]
    fn test_precision_out_of_range(precision: u8) {
        let mut data = random_sketch(12, 10).marshal_binary();
        data[1] = precision;
        assert_eq!(
            Sketch::from_binary(&data),
            Err(SketchError::PrecisionOutOfRange(precision))
        );
    }

    #[test_case(|data: &mut Vec<u8>| data[3] = 2; "unknown flag")]
    #[test_case(|data: &mut Vec<u8>| data[6] = 0; "register length")]
    #[test_case(|data: &mut Vec<u8>| data[1] = 9; "precision mismatch with length")]
    #[test_case(|data: &mut Vec<u8>| data[8] = 16; "register value")]
    #[test_case(|data: &mut Vec<u8>| data[2] = 60; "base")]
    fn test_malformed_dense(corrupt: fn(&mut Vec<u8>)) {
        let mut data = random_sketch(8, 5_000).marshal_binary();
        corrupt(&mut data);
        assert!(matches!(
            Sketch::from_binary(&data),
            Err(SketchError::Malformed(_))
        ));
    }
}
