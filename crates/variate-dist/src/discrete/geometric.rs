//! Geometric distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::{RandomSource, Result, Support};

/// Number of failures before the first success in trials with success
/// probability `p`, on `{0, 1, 2, ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometric {
    p: f64,
    /// `ln(1 - p)`
    log_q: f64,
}

impl Geometric {
    pub fn new(p: f64) -> Result<Self> {
        ensure(p > 0.0 && p <= 1.0, "0 < p <= 1", &[("p", p)])?;
        Ok(Self {
            p,
            log_q: (-p).ln_1p(),
        })
    }
}

impl Sampleable for Geometric {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        if self.p == 1.0 {
            return Ok(0.0);
        }
        Ok((rng.next_open().ln() / self.log_q).floor())
    }
}

impl DensityEvaluable for Geometric {
    fn density_at(&self, x: f64) -> f64 {
        // 0 · ln(0) for p = 1
        if x == 0.0 {
            return self.p;
        }
        self.p * (x * self.log_q).exp()
    }
}

impl CdfEvaluable for Geometric {
    fn cumulative_at(&self, x: f64) -> f64 {
        -((x + 1.0) * self.log_q).exp_m1()
    }
}

impl SupportBounded for Geometric {
    fn support(&self) -> Support {
        Support::positive(true)
    }
}

impl Distribution for Geometric {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn parameters(&self) -> Parameters {
        vec![("p", self.p)]
    }
}
