//! Laplace (double exponential) distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::{kernels, RandomSource, Result, Support};

/// Laplace distribution with location `mu` and scale `b`.
///
/// A variate is an exponential with mean `b` given a random sign.
#[derive(Debug, Clone, PartialEq)]
pub struct Laplace {
    mu: f64,
    b: f64,
}

impl Laplace {
    pub fn new(mu: f64, b: f64) -> Result<Self> {
        ensure(mu.is_finite(), "mu finite", &[("mu", mu)])?;
        ensure(b > 0.0 && b.is_finite(), "b > 0", &[("b", b)])?;
        Ok(Self { mu, b })
    }
}

impl Sampleable for Laplace {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        let s = kernels::sign(rng, 0.5);
        Ok(self.mu + s * kernels::exponential(rng, 1.0 / self.b))
    }
}

impl DensityEvaluable for Laplace {
    fn density_at(&self, x: f64) -> f64 {
        0.5 * (-(x - self.mu).abs() / self.b).exp() / self.b
    }
}

impl CdfEvaluable for Laplace {
    fn cumulative_at(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.b;
        if z < 0.0 {
            0.5 * z.exp()
        } else {
            1.0 - 0.5 * (-z).exp()
        }
    }
}

impl SupportBounded for Laplace {
    fn support(&self) -> Support {
        Support::real_line()
    }
}

impl Distribution for Laplace {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("mu", self.mu), ("b", self.b)]
    }

    fn inverse_cdf(&self, p: f64) -> Option<f64> {
        Some(if p < 0.5 {
            self.mu + self.b * (2.0 * p).ln()
        } else {
            self.mu - self.b * (2.0 - 2.0 * p).ln()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use statrs::distribution::{Continuous, ContinuousCDF};

    #[test]
    fn test_against_statrs() {
        let l = Laplace::new(-1.0, 2.0).unwrap();
        let reference = statrs::distribution::Laplace::new(-1.0, 2.0).unwrap();
        for x in [-8.0, -1.0, 0.0, 3.5] {
            assert_abs_diff_eq!(l.pdf(x), reference.pdf(x), epsilon = 1e-14);
            assert_abs_diff_eq!(l.cdf(x), reference.cdf(x), epsilon = 1e-14);
        }
    }

    #[test]
    fn test_symmetric_quantiles() {
        let l = Laplace::new(3.0, 0.5).unwrap();
        assert_eq!(l.quantile(0.5).unwrap(), 3.0);
        let lo = l.quantile(0.1).unwrap();
        let hi = l.quantile(0.9).unwrap();
        assert_abs_diff_eq!(3.0 - lo, hi - 3.0, epsilon = 1e-12);
    }
}
