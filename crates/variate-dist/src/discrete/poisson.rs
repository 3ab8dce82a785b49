//! Poisson distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::special::{gamma_upper_regularized, log_gamma, xlogy};
use variate_core::{kernels, IterationLimits, RandomSource, Result, Support};

/// Poisson distribution with mean `lambda`.
///
/// Variates come from the two-regime Poisson kernel. The cdf is the upper
/// regularized incomplete gamma function `Q(k + 1, lambda)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
    limits: IterationLimits,
}

impl Poisson {
    pub fn new(lambda: f64) -> Result<Self> {
        ensure(
            lambda > 0.0 && lambda.is_finite(),
            "lambda > 0",
            &[("lambda", lambda)],
        )?;
        Ok(Self {
            lambda,
            limits: IterationLimits::default(),
        })
    }

    /// Replace the rejection cap of the sampler and the stride cap of the
    /// quantile search.
    pub fn with_limits(mut self, limits: IterationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn mean(&self) -> f64 {
        self.lambda
    }
}

impl Sampleable for Poisson {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        Ok(kernels::poisson_bounded(rng, self.lambda, self.limits.max_trials)? as f64)
    }
}

impl DensityEvaluable for Poisson {
    fn density_at(&self, x: f64) -> f64 {
        (xlogy(x, self.lambda) - self.lambda - log_gamma(x + 1.0)).exp()
    }
}

impl CdfEvaluable for Poisson {
    fn cumulative_at(&self, x: f64) -> f64 {
        gamma_upper_regularized(x + 1.0, self.lambda)
    }
}

impl SupportBounded for Poisson {
    fn support(&self) -> Support {
        Support::positive(true)
    }
}

impl Distribution for Poisson {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn parameters(&self) -> Parameters {
        vec![("lambda", self.lambda)]
    }

    fn iteration_limits(&self) -> IterationLimits {
        self.limits
    }
}
