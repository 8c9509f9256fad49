//! Tests for Shannon entropy over weighted candidate distributions

#[cfg(test)]
mod tests {
    use wavetile::math::entropy::shannon_entropy_bits;

    // Tests entropy is undefined for an empty candidate set
    // Verified by returning zero for empty slices
    #[test]
    fn test_empty_undefined() {
        assert_eq!(shannon_entropy_bits(&[]), None);
    }

    // Tests a singleton distribution carries zero bits
    // Verified by running the summation for single candidates
    #[test]
    fn test_singleton_zero() {
        assert!(shannon_entropy_bits(&[0.7]).unwrap().abs() < 1e-12);
        assert!(shannon_entropy_bits(&[123.0]).unwrap().abs() < 1e-12);
    }

    // Tests uniform distributions hit exact bit counts
    // Verified by using the natural log instead of log2
    #[test]
    fn test_uniform_bits() {
        let two = shannon_entropy_bits(&[1.0, 1.0]).unwrap();
        assert!((two - 1.0).abs() < 1e-12);

        let four = shannon_entropy_bits(&[0.5, 0.5, 0.5, 0.5]).unwrap();
        assert!((four - 2.0).abs() < 1e-12);
    }

    // Tests skewed distributions carry fewer bits than uniform ones
    // Verified by dropping the normalization before the summation
    #[test]
    fn test_skew_reduces_entropy() {
        let uniform = shannon_entropy_bits(&[1.0, 1.0, 1.0]).unwrap();
        let skewed = shannon_entropy_bits(&[10.0, 1.0, 1.0]).unwrap();
        assert!(skewed < uniform);
        assert!(skewed > 0.0);
    }

    // Tests the reference terrain weights against a hand computation
    // Verified by perturbing the probability normalization
    #[test]
    fn test_reference_weights() {
        let weights = [1.0, 0.7, 0.4];
        let total: f64 = weights.iter().sum();
        let expected: f64 = weights
            .iter()
            .map(|w| {
                let p = w / total;
                -p * p.log2()
            })
            .sum();
        let actual = shannon_entropy_bits(&weights).unwrap();
        assert!((actual - expected).abs() < 1e-12);
    }

    // Tests zero-weight members contribute nothing
    // Verified by feeding zero probabilities into log2
    #[test]
    fn test_zero_weight_members() {
        let bits = shannon_entropy_bits(&[1.0, 0.0]).unwrap();
        assert!((bits - 0.0).abs() < 1e-12);
    }

    // Tests degenerate totals are undefined rather than infinite
    // Verified by dividing by the unchecked total
    #[test]
    fn test_degenerate_totals() {
        assert_eq!(shannon_entropy_bits(&[0.0, 0.0]), None);
        assert_eq!(shannon_entropy_bits(&[f64::INFINITY, 1.0]), None);
    }
}
