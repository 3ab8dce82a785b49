//! Raised cosine distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use std::f64::consts::PI;
use variate_core::error::ensure;
use variate_core::rejection::rejection_sample;
use variate_core::{IterationLimits, RandomSource, Result, Support};

/// Raised cosine distribution on `[mu - s, mu + s]`.
///
/// Sampled by rejection from a uniform proposal over the support; the
/// acceptance rate is one half.
#[derive(Debug, Clone, PartialEq)]
pub struct RaisedCosine {
    mu: f64,
    s: f64,
    limits: IterationLimits,
}

impl RaisedCosine {
    pub fn new(mu: f64, s: f64) -> Result<Self> {
        ensure(mu.is_finite(), "mu finite", &[("mu", mu)])?;
        ensure(s > 0.0 && s.is_finite(), "s > 0", &[("s", s)])?;
        Ok(Self {
            mu,
            s,
            limits: IterationLimits::default(),
        })
    }

    /// Replace the rejection cap and the caps of the quantile search.
    pub fn with_limits(mut self, limits: IterationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Density relative to its peak, in `[0, 1]`.
    fn shape(&self, x: f64) -> f64 {
        0.5 * (1.0 + (PI * (x - self.mu) / self.s).cos())
    }
}

impl Sampleable for RaisedCosine {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        let lower = self.mu - self.s;
        let width = 2.0 * self.s;
        rejection_sample(
            rng,
            self.limits.max_trials,
            |r| Ok(lower + width * r.next_f64()),
            |x| self.shape(x),
        )
    }
}

impl DensityEvaluable for RaisedCosine {
    fn density_at(&self, x: f64) -> f64 {
        self.shape(x) / self.s
    }
}

impl CdfEvaluable for RaisedCosine {
    fn cumulative_at(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.s;
        0.5 * (1.0 + z + (PI * z).sin() / PI)
    }
}

impl SupportBounded for RaisedCosine {
    fn support(&self) -> Support {
        Support::closed(self.mu - self.s, self.mu + self.s)
    }
}

impl Distribution for RaisedCosine {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("mu", self.mu), ("s", self.s)]
    }

    fn iteration_limits(&self) -> IterationLimits {
        self.limits
    }
}
