//! Exponential distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::{kernels, RandomSource, Result, Support};

/// Exponential distribution with rate `lambda`.
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    pub fn new(lambda: f64) -> Result<Self> {
        ensure(
            lambda > 0.0 && lambda.is_finite(),
            "lambda > 0",
            &[("lambda", lambda)],
        )?;
        Ok(Self { lambda })
    }

    pub fn rate(&self) -> f64 {
        self.lambda
    }
}

impl Sampleable for Exponential {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        Ok(kernels::exponential(rng, self.lambda))
    }
}

impl DensityEvaluable for Exponential {
    fn density_at(&self, x: f64) -> f64 {
        self.lambda * (-self.lambda * x).exp()
    }
}

impl CdfEvaluable for Exponential {
    fn cumulative_at(&self, x: f64) -> f64 {
        -(-self.lambda * x).exp_m1()
    }
}

impl SupportBounded for Exponential {
    fn support(&self) -> Support {
        Support::positive(true)
    }
}

impl Distribution for Exponential {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("lambda", self.lambda)]
    }

    fn inverse_cdf(&self, p: f64) -> Option<f64> {
        Some(-(-p).ln_1p() / self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_rate_values() {
        let e = Exponential::new(1.0).unwrap();
        assert_eq!(e.cdf(0.0), 0.0);
        assert_eq!(e.pdf(0.0), 1.0);
        assert_abs_diff_eq!(e.cdf(2f64.ln()), 0.5, epsilon = 1e-15);
        assert_eq!(e.pdf(-0.1), 0.0);
    }

    #[test]
    fn test_constant_hazard() {
        let e = Exponential::new(2.5).unwrap();
        for x in [0.1, 1.0, 3.0] {
            assert_abs_diff_eq!(e.hazard(x), 2.5, epsilon = 1e-9);
            assert_abs_diff_eq!(e.cumulative_hazard(x), 2.5 * x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quantile() {
        let e = Exponential::new(0.5).unwrap();
        assert_abs_diff_eq!(e.quantile(0.5).unwrap(), 2.0 * 2f64.ln(), epsilon = 1e-14);
        assert_eq!(e.quantile(1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_validation() {
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(f64::INFINITY).is_err());
    }
}
