/// Computes LogLog-Beta estimate bias correction using Horner's method.
///
/// Paper: https://arxiv.org/pdf/1612.02284.pdf
/// Wikipedia: https://en.wikipedia.org/wiki/Horner%27s_method
#[inline]
pub(crate) fn beta_horner(z: f64, precision: u8) -> f64 {
    let beta = if precision < 16 { &BETA_14 } else { &BETA_16 };
    let zl = (z + 1.0).ln();
    let mut res = 0.0;
    for i in (1..8).rev() {
        res = res * zl + beta[i];
    }
    res * zl + beta[0] * z
}

/// LogLog-Beta polynomial coefficients fitted at precision 14, used below precision 16.
const BETA_14: [f64; 8] = [
    -0.370393911,
    0.070471823,
    0.17393686,
    0.16339839,
    -0.09237745,
    0.03738027,
    -0.005384159,
    0.00042419,
];

/// LogLog-Beta polynomial coefficients fitted at precision 16, used from precision 16 on.
const BETA_16: [f64; 8] = [
    -0.3733187664375306,
    -1.41704077448123,
    0.40729184796612533,
    1.5615203390658416,
    -0.9924223353428613,
    0.2606468139948309,
    -0.03053811369682807,
    0.00155770210179105,
];
