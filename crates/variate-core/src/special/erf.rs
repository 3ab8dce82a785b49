//! Error function through the incomplete gamma function

use super::{gamma_lower_regularized, gamma_upper_regularized};

/// Error function `erf(x) = sign(x) P(1/2, x²)`.
///
/// `erf(0)` is exactly 0 and `erf(-x) == -erf(x)`, so any cdf built from it
/// is exactly 1/2 at its centre of symmetry.
///
/// # Example
///
/// ```
/// use variate_core::special::erf;
///
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(1.0) - 0.842_700_792_949_714_9).abs() < 1e-13);
/// ```
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x == 0.0 {
        return 0.0;
    }
    let p = gamma_lower_regularized(0.5, x * x);
    if x < 0.0 {
        -p
    } else {
        p
    }
}

/// Complementary error function `erfc(x) = 1 - erf(x)`, computed as
/// `Q(1/2, x²)` for positive `x` so the upper tail keeps its precision.
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x < 0.0 {
        1.0 + gamma_lower_regularized(0.5, x * x)
    } else {
        gamma_upper_regularized(0.5, x * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_known_values() {
        assert_abs_diff_eq!(erf(0.5), 0.520_499_877_813_046_5, epsilon = 1e-14);
        assert_abs_diff_eq!(erf(1.0), 0.842_700_792_949_714_9, epsilon = 1e-14);
        assert_abs_diff_eq!(erf(2.0), 0.995_322_265_018_952_7, epsilon = 1e-14);
        assert_eq!(erf(f64::INFINITY), 1.0);
        assert_eq!(erf(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn test_odd_symmetry() {
        for &x in &[1e-8, 0.1, 0.7, 1.3, 3.5] {
            assert_eq!(erf(-x), -erf(x));
        }
    }

    #[test]
    fn test_erfc() {
        assert_eq!(erfc(0.0), 1.0);
        assert_abs_diff_eq!(erfc(-1.0), 1.0 + erf(1.0), epsilon = 1e-15);
        // deep tail keeps relative precision
        assert_relative_eq!(
            erfc(5.0),
            statrs::function::erf::erfc(5.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_against_statrs() {
        for i in -30..=30 {
            let x = i as f64 * 0.1;
            assert_abs_diff_eq!(erf(x), statrs::function::erf::erf(x), epsilon = 1e-12);
        }
    }
}
