//! Weibull and Rayleigh distributions

use crate::traits::{
    delegate_primitives, CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters,
    Sampleable, SupportBounded,
};
use std::f64::consts::SQRT_2;
use variate_core::error::ensure;
use variate_core::special::xlogy;
use variate_core::{kernels, Bound, RandomSource, Result, Support};

/// Weibull distribution with scale `lambda` and shape `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Weibull {
    lambda: f64,
    k: f64,
}

impl Weibull {
    pub fn new(lambda: f64, k: f64) -> Result<Self> {
        ensure(
            lambda > 0.0 && lambda.is_finite(),
            "lambda > 0",
            &[("lambda", lambda)],
        )?;
        ensure(k > 0.0 && k.is_finite(), "k > 0", &[("k", k)])?;
        Ok(Self { lambda, k })
    }

    fn quantile_closed(&self, p: f64) -> f64 {
        self.lambda * (-(-p).ln_1p()).powf(1.0 / self.k)
    }
}

impl Sampleable for Weibull {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        Ok(self.lambda * kernels::exponential(rng, 1.0).powf(1.0 / self.k))
    }
}

impl DensityEvaluable for Weibull {
    fn density_at(&self, x: f64) -> f64 {
        let z = x / self.lambda;
        (self.k / self.lambda) * (xlogy(self.k - 1.0, z) - z.powf(self.k)).exp()
    }
}

impl CdfEvaluable for Weibull {
    fn cumulative_at(&self, x: f64) -> f64 {
        -(-(x / self.lambda).powf(self.k)).exp_m1()
    }
}

impl SupportBounded for Weibull {
    fn support(&self) -> Support {
        // the density diverges at the origin for k < 1
        Support::new(Bound::new(0.0, self.k >= 1.0), Bound::open(f64::INFINITY))
    }
}

impl Distribution for Weibull {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("lambda", self.lambda), ("k", self.k)]
    }

    fn inverse_cdf(&self, p: f64) -> Option<f64> {
        Some(self.quantile_closed(p))
    }
}

/// Rayleigh distribution with scale `sigma`: a Weibull with scale
/// `sigma · sqrt(2)` and shape 2.
#[derive(Debug, Clone, PartialEq)]
pub struct Rayleigh {
    sigma: f64,
    inner: Weibull,
}

impl Rayleigh {
    pub fn new(sigma: f64) -> Result<Self> {
        ensure(
            sigma > 0.0 && sigma.is_finite(),
            "sigma > 0",
            &[("sigma", sigma)],
        )?;
        Ok(Self {
            sigma,
            inner: Weibull::new(sigma * SQRT_2, 2.0)?,
        })
    }
}

delegate_primitives!(Rayleigh => inner);

impl Distribution for Rayleigh {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("sigma", self.sigma)]
    }

    fn inverse_cdf(&self, p: f64) -> Option<f64> {
        self.inner.inverse_cdf(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use statrs::distribution::{Continuous, ContinuousCDF};

    #[test]
    fn test_against_statrs() {
        for (lambda, k) in [(1.0, 1.0), (2.0, 0.6), (0.5, 3.0)] {
            let w = Weibull::new(lambda, k).unwrap();
            // statrs takes shape first
            let reference = statrs::distribution::Weibull::new(k, lambda).unwrap();
            for x in [0.1, 0.5, 1.3, 4.0] {
                assert_abs_diff_eq!(w.pdf(x), reference.pdf(x), epsilon = 1e-12);
                assert_abs_diff_eq!(w.cdf(x), reference.cdf(x), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_quantile_round_trip() {
        let w = Weibull::new(2.0, 1.7).unwrap();
        for p in [0.01, 0.5, 0.93] {
            assert_abs_diff_eq!(w.cdf(w.quantile(p).unwrap()), p, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rayleigh() {
        let r = Rayleigh::new(1.5).unwrap();
        let sigma2 = 1.5 * 1.5;
        for x in [0.2f64, 1.0, 3.0] {
            let pdf = x / sigma2 * (-x * x / (2.0 * sigma2)).exp();
            let cdf = 1.0 - (-x * x / (2.0 * sigma2)).exp();
            assert_abs_diff_eq!(r.pdf(x), pdf, epsilon = 1e-12);
            assert_abs_diff_eq!(r.cdf(x), cdf, epsilon = 1e-12);
        }
        assert_eq!(r.parameter_count(), 1);
        // median sigma sqrt(2 ln 2)
        assert_abs_diff_eq!(
            r.quantile(0.5).unwrap(),
            1.5 * (2.0 * 2f64.ln()).sqrt(),
            epsilon = 1e-12
        );
    }
}
