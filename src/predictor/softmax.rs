//! Numerically stable softmax
//!
//! `p_i = exp(s_i - max(s)) / (sum_j exp(s_j - max(s)) + eps)`
//!
//! Subtracting the max keeps `exp` from overflowing for large scores.
//! NaN anywhere in the input propagates to every output.

use super::weights::SOFTMAX_EPSILON;

/// Softmax over a fixed-size score array
pub fn softmax<const N: usize>(scores: &[f64; N]) -> [f64; N] {
    let max = nan_max(scores);
    let exp = scores.map(|s| (s - max).exp());
    let sum: f64 = exp.iter().sum();
    exp.map(|e| e / (sum + SOFTMAX_EPSILON))
}

/// Index of the first maximum.
///
/// A NaN counts as the maximum, so the first NaN wins if present.
pub fn argmax(values: &[f64]) -> usize {
    if let Some(i) = values.iter().position(|v| v.is_nan()) {
        return i;
    }
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

/// `max` that returns NaN when any element is NaN (`f64::max` skips NaN)
fn nan_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, |m, v| {
        if v.is_nan() || v > m { v } else { m }
    })
}
