//! ## Hash encoding
//! Splits a 64-bit hash into a register index and rank, and packs an index/rank
//! pair observed at the sparse precision `PP` into a single `u32` code.
//!
//! Sparse code layout:
//! - bit 0         - flag, set when the rank is stored explicitly
//! - flag `1`: bits 1..6 store `zeros` (rank - (PP - P)), bits 7..31 store the `PP`-bit index
//! - flag `0`: bits 1..25 store the `PP`-bit index, rank is recovered from its low `PP - P` bits
//!
//! The flag is only needed when the `PP - P` bits below the normal index are all zero,
//! because then the normal rank depends on hash bits which are not part of the index.

/// Precision used by the sparse representation
pub(crate) const PP: u8 = 25;
/// Number of registers addressable at sparse precision
pub(crate) const MP: u32 = 1 << PP;

/// Return normal index and rank of hash `x` at precision `p`.
///
/// Rank is `1 +` the number of leading zeros in the `64 - p` bits following the index,
/// bounded by `64 - p + 1` through a sentinel bit placed right after that window.
#[inline]
pub(crate) fn position_and_rank(x: u64, p: u8) -> (u32, u8) {
    let idx = (x >> (64 - p)) as u32;
    let w = (x << p) | (1 << (p - 1));
    let rank = w.leading_zeros() as u8 + 1;
    (idx, rank)
}

/// Compute the sparse encoding of hash `x` for normal precision `p` and sparse precision `pp`
#[inline]
pub(crate) fn encode_hash(x: u64, p: u8, pp: u8) -> u32 {
    let idx = (x >> (64 - pp)) as u32;
    let extra_mask = (1u32 << (pp - p)) - 1;
    if idx & extra_mask == 0 {
        let zeros = ((x << pp) | ((1 << pp) - 1)).leading_zeros() + 1;
        (idx << 7) | (zeros << 1) | 1
    } else {
        idx << 1
    }
}

/// Return normal index and rank from encoded sparse hash
#[inline]
pub(crate) fn decode_hash(h: u32, p: u8, pp: u8) -> (u32, u8) {
    if h & 1 == 1 {
        let idx = h >> (32 - p);
        // codes read from untrusted input may claim more zeros than a hash has bits
        let rank = (((h >> 1) & 0x3f) as u8 + (pp - p)).min(65 - p);
        (idx, rank)
    } else {
        let idx = (h >> (pp - p + 1)) & ((1 << p) - 1);
        let rank = (h << (32 - pp + p - 1)).leading_zeros() as u8 + 1;
        (idx, rank)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    #[test_case(16, 0x0001_0fff_ffff_ffff => (0x0001, 5))]
    #[test_case(16, 0x0002_ffff_ffff_ffff => (0x0002, 1))]
    #[test_case(16, 0x0003_0000_0000_0000 => (0x0003, 49))]
    #[test_case(16, 0x0003_0000_0000_0001 => (0x0003, 48))]
    #[test_case(16, 0xff03_7000_0000_0000 => (0xff03, 2))]
    #[test_case(16, 0xff03_0800_0000_0000 => (0xff03, 5))]
    #[test_case(4, 0x1fff_ffff_ffff_ffff => (0x1, 1))]
    #[test_case(4, 0xffff_ffff_ffff_ffff => (0xf, 1))]
    #[test_case(4, 0x00ff_ffff_ffff_ffff => (0x0, 5))]
    #[test_case(4, 0x0000_0000_0000_0000 => (0x0, 61))]
    #[test_case(18, 0x0000_0000_0000_0000 => (0x0, 47))]
    fn test_position_and_rank(p: u8, x: u64) -> (u32, u8) {
        position_and_rank(x, p)
    }

    #[test_case(0xffff_ff80_0000_0000 => (0xff, 1))]
    #[test_case(0xff00_0000_0000_0000 => (0xff, 57))]
    #[test_case(0xff30_0000_0000_0000 => (0xff, 3))]
    #[test_case(0xaa10_0000_0000_0000 => (0xaa, 4))]
    #[test_case(0xaa0f_0000_0000_0000 => (0xaa, 5))]
    fn test_encode_decode_p8(x: u64) -> (u32, u8) {
        decode_hash(encode_hash(x, 8, PP), 8, PP)
    }

    #[test]
    fn test_encode_flag() {
        // bits below the 14-bit index are non-zero: rank derivable from the index
        let h = encode_hash(0x0001_0fff_ffff_ffff, 14, PP);
        assert_eq!(h & 1, 0);
        assert!(h < 1 << 26);

        // bits below the 14-bit index are zero: rank stored explicitly
        let h = encode_hash(0x0000_0000_0000_0000, 14, PP);
        assert_eq!(h & 1, 1);
        assert_eq!((h >> 1) & 0x3f, 40);
    }

    #[test_case(4 => (0, 61))]
    #[test_case(14 => (0, 51))]
    #[test_case(18 => (0, 47))]
    fn test_decode_rank_bounded(p: u8) -> (u32, u8) {
        // flagged code claiming 63 zeros
        decode_hash(0x7f, p, PP)
    }

    #[test_case(4)]
    #[test_case(8)]
    #[test_case(12)]
    #[test_case(14)]
    #[test_case(16)]
    #[test_case(18)]
    #[test_case(25)]
    fn test_sparse_round_trip(p: u8) {
        let mut rng = StdRng::seed_from_u64(u64::from(p));
        for _ in 0..200_000 {
            let x: u64 = rng.gen();
            let h = encode_hash(x, p, PP);
            assert_eq!(decode_hash(h, p, PP), position_and_rank(x, p), "x = {x:#018x}");
        }
    }

    #[test]
    fn test_sparse_round_trip_sparse_bits() {
        // hashes with long zero runs exercise the explicit-rank branch
        let mut rng = StdRng::seed_from_u64(42);
        for p in 4..=18 {
            for _ in 0..10_000 {
                let x: u64 = rng.gen::<u64>() >> rng.gen_range(0..64u32);
                let x = x & !(((1u64 << (PP - p)) - 1) << (64 - PP));
                let h = encode_hash(x, p, PP);
                assert_eq!(h & 1, 1);
                assert_eq!(decode_hash(h, p, PP), position_and_rank(x, p), "x = {x:#018x}");
            }
        }
    }
}
