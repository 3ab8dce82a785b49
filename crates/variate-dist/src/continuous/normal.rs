//! Normal distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use std::f64::consts::{PI, SQRT_2};
use variate_core::error::ensure;
use variate_core::special::erf;
use variate_core::{kernels, RandomSource, Result, Support};

/// Normal distribution with mean `mu` and standard deviation `sigma`.
///
/// Variates come from the Box–Muller kernel; the cdf uses the error function,
/// so `cdf(mu)` is exactly one half.
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
    /// `sigma · sqrt(2π)`
    norm: f64,
    /// `sigma · sqrt(2)`
    scale: f64,
}

impl Normal {
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        ensure(mu.is_finite(), "mu finite", &[("mu", mu)])?;
        ensure(
            sigma > 0.0 && sigma.is_finite(),
            "sigma > 0",
            &[("sigma", sigma)],
        )?;
        Ok(Self {
            mu,
            sigma,
            norm: sigma * (2.0 * PI).sqrt(),
            scale: sigma * SQRT_2,
        })
    }

    /// Standard normal
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
            norm: (2.0 * PI).sqrt(),
            scale: SQRT_2,
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Sampleable for Normal {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        Ok(kernels::normal(rng, self.mu, self.sigma))
    }
}

impl DensityEvaluable for Normal {
    fn density_at(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        (-0.5 * z * z).exp() / self.norm
    }
}

impl CdfEvaluable for Normal {
    fn cumulative_at(&self, x: f64) -> f64 {
        0.5 * (1.0 + erf((x - self.mu) / self.scale))
    }
}

impl SupportBounded for Normal {
    fn support(&self) -> Support {
        Support::real_line()
    }
}

impl Distribution for Normal {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("mu", self.mu), ("sigma", self.sigma)]
    }
}
