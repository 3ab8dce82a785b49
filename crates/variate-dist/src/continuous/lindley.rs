//! Lindley distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::special::lambert_wm1;
use variate_core::{RandomSource, Result, Support};

/// Lindley distribution with rate `theta`, a mixture of `Exp(theta)` and
/// `Gamma(2, theta)`.
///
/// The cdf is inverted in closed form through the lower Lambert W branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Lindley {
    theta: f64,
    /// `1 + theta`
    shift: f64,
    /// `(1 + theta) e^-(1 + theta)`
    w_scale: f64,
}

impl Lindley {
    pub fn new(theta: f64) -> Result<Self> {
        ensure(
            theta > 0.0 && theta.is_finite(),
            "theta > 0",
            &[("theta", theta)],
        )?;
        let shift = 1.0 + theta;
        Ok(Self {
            theta,
            shift,
            w_scale: shift * (-shift).exp(),
        })
    }

    /// Quantile at upper tail probability `q = 1 - p`.
    fn upper_quantile(&self, q: f64) -> Result<f64> {
        let w = lambert_wm1(-q * self.w_scale)?;
        Ok((-(w + self.shift) / self.theta).max(0.0))
    }
}

impl Sampleable for Lindley {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        self.upper_quantile(rng.next_open())
    }
}

impl DensityEvaluable for Lindley {
    fn density_at(&self, x: f64) -> f64 {
        self.theta * self.theta * (1.0 + x) * (-self.theta * x).exp() / self.shift
    }
}

impl CdfEvaluable for Lindley {
    fn cumulative_at(&self, x: f64) -> f64 {
        1.0 - (-self.theta * x).exp() * (self.shift + self.theta * x) / self.shift
    }
}

impl SupportBounded for Lindley {
    fn support(&self) -> Support {
        Support::positive(true)
    }
}

impl Distribution for Lindley {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("theta", self.theta)]
    }

    fn inverse_cdf(&self, p: f64) -> Option<f64> {
        self.upper_quantile(1.0 - p).ok()
    }
}
