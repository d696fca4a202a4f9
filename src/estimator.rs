//! ## Estimators
//! Strategies turning aggregate statistics of dense registers into a cardinality estimate:
//! - `BiasCorrected`: HyperLogLog++ raw estimate with linear counting for small
//!   cardinalities and empirical bias correction up to `5m`.
//! - `LogLogBeta`: analytic LogLog-Beta estimate, no tables.
//!
//! [HyperLogLog++ paper](https://static.googleusercontent.com/media/research.google.com/en//pubs/archive/40671.pdf)
//!
//! [LogLog-Beta paper](https://arxiv.org/pdf/1612.02284.pdf)
use enum_dispatch::enum_dispatch;
#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

use crate::beta::beta_horner;
use crate::bias::{BIAS_DATA, RAW_ESTIMATE_DATA, THRESHOLD};
use crate::config::MIN_PRECISION;

/// Aggregate statistics of a dense register file
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RegisterStats {
    pub(crate) precision: u8,
    /// Number of registers
    pub(crate) m: f64,
    pub(crate) alpha: f64,
    pub(crate) base: u8,
    /// `Σ 2^-(base + register)`
    pub(crate) sum: f64,
    /// Number of registers never observed
    pub(crate) zeros: u32,
}

/// Estimator strategies supported by `Sketch`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[enum_dispatch]
pub enum Estimator {
    BiasCorrected(BiasCorrected),
    LogLogBeta(LogLogBeta),
}

impl Default for Estimator {
    fn default() -> Self {
        Estimator::BiasCorrected(BiasCorrected)
    }
}

/// Estimator trait which must be implemented by all estimator strategies.
#[enum_dispatch(Estimator)]
pub(crate) trait EstimatorTrait {
    fn estimate(&self, stats: &RegisterStats) -> u64;
}

/// HyperLogLog++ estimator with empirical bias correction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct BiasCorrected;

/// LogLog-Beta estimator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct LogLogBeta;

impl EstimatorTrait for BiasCorrected {
    fn estimate(&self, stats: &RegisterStats) -> u64 {
        let m = stats.m;
        let ez = f64::from(stats.zeros);
        let table = usize::from(stats.precision - MIN_PRECISION);

        // registers below a non-zero base were all observed and carry no zero count
        let raw = if stats.base == 0 {
            stats.alpha * m * (m - ez) / (stats.sum + beta_horner(ez, stats.precision))
        } else {
            stats.alpha * m * m / stats.sum
        };

        if stats.zeros > 0 {
            let lc = linear_counting(m, ez);
            if lc <= THRESHOLD[table] {
                return round(lc);
            }
        }

        if raw <= 5.0 * m {
            round(raw - interpolate(raw, RAW_ESTIMATE_DATA[table], BIAS_DATA[table]))
        } else {
            round(raw)
        }
    }
}

impl EstimatorTrait for LogLogBeta {
    fn estimate(&self, stats: &RegisterStats) -> u64 {
        let m = stats.m;
        let ez = f64::from(stats.zeros);
        round(stats.alpha * m * (m - ez) / (stats.sum + beta_horner(ez, stats.precision)))
    }
}

/// Parameter for bias correction
#[inline]
pub(crate) fn alpha(m: u32) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / f64::from(m)),
    }
}

/// Linear counting estimate for `m` buckets out of which `zeros` are empty
#[inline]
pub(crate) fn linear_counting(m: f64, zeros: f64) -> f64 {
    m * (m / zeros).ln()
}

/// Piecewise linear interpolation of `ys` over ascending `xs`, clamped to the first
/// and last points outside of their range
fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let (Some(&first), Some(&last)) = (xs.first(), xs.last()) else {
        return 0.0;
    };
    if x <= first {
        return ys[0];
    }
    if x >= last {
        return ys[ys.len() - 1];
    }
    let i = xs.partition_point(|&v| v < x);
    let (x0, x1) = (xs[i - 1], xs[i]);
    let (y0, y1) = (ys[i - 1], ys[i]);
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

#[inline]
fn round(estimate: f64) -> u64 {
    (estimate.max(0.0) + 0.5) as u64
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::config::MAX_PRECISION;
    use test_case::test_case;

    /// Statistics of `m` base-zero registers out of which `observed` hold rank 1
    fn stats(precision: u8, observed: u32) -> RegisterStats {
        let m = 1u32 << precision;
        RegisterStats {
            precision,
            m: f64::from(m),
            alpha: alpha(m),
            base: 0,
            sum: f64::from(m - observed) + f64::from(observed) * 0.5,
            zeros: m - observed,
        }
    }

    #[test_case(16 => 0.673)]
    #[test_case(32 => 0.697)]
    #[test_case(64 => 0.709)]
    #[test_case(128 => 0.7213 / (1.0 + 1.079 / 128.0))]
    fn test_alpha(m: u32) -> f64 {
        alpha(m)
    }

    #[test_case(2.0, &[1.0, 3.0], &[10.0, 30.0] => 20.0; "midpoint")]
    #[test_case(1.5, &[1.0, 3.0, 4.0], &[10.0, 30.0, 0.0] => 15.0; "first segment")]
    #[test_case(3.5, &[1.0, 3.0, 4.0], &[10.0, 30.0, 0.0] => 15.0; "last segment")]
    #[test_case(3.0, &[1.0, 3.0, 4.0], &[10.0, 30.0, 0.0] => 30.0; "exact point")]
    #[test_case(0.0, &[1.0, 3.0], &[10.0, 30.0] => 10.0; "clamped below")]
    #[test_case(9.0, &[1.0, 3.0], &[10.0, 30.0] => 30.0; "clamped above")]
    #[test_case(9.0, &[], &[] => 0.0; "empty")]
    fn test_interpolate(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
        interpolate(x, xs, ys)
    }

    #[test]
    fn test_tables() {
        assert_eq!(RAW_ESTIMATE_DATA.len(), usize::from(MAX_PRECISION - MIN_PRECISION + 1));
        for (raw, bias) in RAW_ESTIMATE_DATA.iter().zip(BIAS_DATA.iter()) {
            assert_eq!(raw.len(), bias.len());
            assert!(raw.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test_case(Estimator::BiasCorrected(BiasCorrected); "bias corrected")]
    #[test_case(Estimator::LogLogBeta(LogLogBeta); "loglog beta")]
    fn test_empty(estimator: Estimator) {
        for precision in MIN_PRECISION..=MAX_PRECISION {
            assert_eq!(estimator.estimate(&stats(precision, 0)), 0);
        }
    }

    #[test_case(10, 5 => 5)]
    #[test_case(14, 100 => 100)]
    #[test_case(14, 1000 => 1032)]
    fn test_bias_corrected_linear_counting(precision: u8, observed: u32) -> u64 {
        // few observed registers stay below the linear counting threshold
        let m = f64::from(1u32 << precision);
        let expected = linear_counting(m, m - f64::from(observed));
        let estimate = BiasCorrected.estimate(&stats(precision, observed));
        assert_eq!(estimate, (expected + 0.5) as u64);
        estimate
    }

    #[test]
    fn test_loglog_beta_matches_formula() {
        let stats = stats(12, 2000);
        let expected = stats.alpha * stats.m * (stats.m - f64::from(stats.zeros))
            / (stats.sum + beta_horner(f64::from(stats.zeros), 12));
        assert_eq!(LogLogBeta.estimate(&stats), (expected + 0.5) as u64);
    }

    #[test]
    fn test_bias_corrected_with_base() {
        // every register at absolute rank 3: raw estimate is alpha * m^2 / (m / 8)
        let m = 1u32 << 10;
        let stats = RegisterStats {
            precision: 10,
            m: f64::from(m),
            alpha: alpha(m),
            base: 3,
            sum: f64::from(m) / 8.0,
            zeros: 0,
        };
        let raw = stats.alpha * stats.m * 8.0;
        let estimate = BiasCorrected.estimate(&stats) as f64;
        assert!((estimate - raw).abs() / raw < 0.05, "{estimate} vs {raw}");
    }

    #[test]
    fn test_estimator_from() {
        assert_eq!(Estimator::default(), Estimator::from(BiasCorrected));
        assert_eq!(Estimator::LogLogBeta(LogLogBeta), LogLogBeta.into());
    }
}
