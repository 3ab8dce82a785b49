//! Flory–Schulz distribution

use crate::quantile::discrete_quantile;
use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::{Bound, RandomSource, Result, Support};

/// Flory–Schulz distribution on `{1, 2, ...}` with parameter `0 < a < 1`,
/// the chain-length distribution of step-growth polymerization.
///
/// Variates are drawn by inverse transform: the smallest `k` whose cdf
/// reaches a uniform draw, found with a bounded search.
#[derive(Debug, Clone, PartialEq)]
pub struct FlorySchulz {
    a: f64,
    /// `ln(1 - a)`
    log_q: f64,
}

impl FlorySchulz {
    pub fn new(a: f64) -> Result<Self> {
        ensure(a > 0.0 && a < 1.0, "0 < a < 1", &[("a", a)])?;
        Ok(Self {
            a,
            log_q: (-a).ln_1p(),
        })
    }
}

impl Sampleable for FlorySchulz {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        let u = rng.next_f64();
        if u == 0.0 {
            return Ok(1.0);
        }
        discrete_quantile(|x| self.cdf(x), &self.support(), u, &self.iteration_limits())
    }
}

impl DensityEvaluable for FlorySchulz {
    fn density_at(&self, x: f64) -> f64 {
        self.a * self.a * x * ((x - 1.0) * self.log_q).exp()
    }
}

impl CdfEvaluable for FlorySchulz {
    fn cumulative_at(&self, x: f64) -> f64 {
        1.0 - (x * self.log_q).exp() * (1.0 + self.a * x)
    }
}

impl SupportBounded for FlorySchulz {
    fn support(&self) -> Support {
        Support::new(Bound::closed(1.0), Bound::open(f64::INFINITY))
    }
}

impl Distribution for FlorySchulz {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn parameters(&self) -> Parameters {
        vec![("a", self.a)]
    }
}
