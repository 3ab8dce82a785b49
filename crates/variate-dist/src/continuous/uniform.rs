//! Continuous uniform distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::{RandomSource, Result, Support};

/// Uniform distribution on `[xmin, xmax]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    xmin: f64,
    xmax: f64,
    width: f64,
}

impl Uniform {
    /// # Errors
    ///
    /// [`variate_core::Error::InvalidParameter`] unless `xmin < xmax`, both
    /// finite.
    pub fn new(xmin: f64, xmax: f64) -> Result<Self> {
        ensure(
            xmin.is_finite() && xmax.is_finite() && xmin < xmax,
            "xmin < xmax",
            &[("xmin", xmin), ("xmax", xmax)],
        )?;
        Ok(Self {
            xmin,
            xmax,
            width: xmax - xmin,
        })
    }
}

impl Sampleable for Uniform {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        Ok(self.xmin + self.width * rng.next_f64())
    }
}

impl DensityEvaluable for Uniform {
    fn density_at(&self, _x: f64) -> f64 {
        1.0 / self.width
    }
}

impl CdfEvaluable for Uniform {
    fn cumulative_at(&self, x: f64) -> f64 {
        (x - self.xmin) / self.width
    }
}

impl SupportBounded for Uniform {
    fn support(&self) -> Support {
        Support::closed(self.xmin, self.xmax)
    }
}

impl Distribution for Uniform {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("xmin", self.xmin), ("xmax", self.xmax)]
    }

    fn inverse_cdf(&self, p: f64) -> Option<f64> {
        Some(self.xmin + p * self.width)
    }
}
