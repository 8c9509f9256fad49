//! Shannon entropy of weighted candidate distributions

/// Shannon entropy in bits of the distribution induced by the given weights
///
/// Weights are normalized to probabilities before summation, so any positive
/// weighting scheme works unchanged. Returns `None` for an empty slice
/// (entropy is undefined with no candidates) and `Some(0.0)` for a single
/// candidate. A non-positive or non-finite total also yields `None`, since no
/// distribution can be formed from it.
pub fn shannon_entropy_bits(weights: &[f64]) -> Option<f64> {
    if weights.is_empty() {
        return None;
    }
    if weights.len() == 1 {
        return Some(0.0);
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let mut bits = 0.0;
    for &weight in weights {
        if weight > 0.0 {
            let p = weight / total;
            bits -= p * p.log2();
        }
    }
    Some(bits)
}
