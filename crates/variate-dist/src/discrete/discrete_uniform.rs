//! Discrete uniform distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::{RandomSource, Result, Support};

/// Uniform distribution over the integers `xmin..=xmax`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteUniform {
    xmin: i64,
    xmax: i64,
    count: usize,
}

impl DiscreteUniform {
    pub fn new(xmin: i64, xmax: i64) -> Result<Self> {
        ensure(
            xmin <= xmax,
            "xmin <= xmax",
            &[("xmin", xmin as f64), ("xmax", xmax as f64)],
        )?;
        let count = usize::try_from(xmax.abs_diff(xmin))
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| {
                variate_core::Error::parameter(
                    "range too large",
                    &[("xmin", xmin as f64), ("xmax", xmax as f64)],
                )
            })?;
        Ok(Self { xmin, xmax, count })
    }
}

impl Sampleable for DiscreteUniform {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        Ok(self.xmin as f64 + rng.next_index(self.count) as f64)
    }
}

impl DensityEvaluable for DiscreteUniform {
    fn density_at(&self, _x: f64) -> f64 {
        1.0 / self.count as f64
    }
}

impl CdfEvaluable for DiscreteUniform {
    fn cumulative_at(&self, x: f64) -> f64 {
        (1.0 + x - self.xmin as f64) / self.count as f64
    }
}

impl SupportBounded for DiscreteUniform {
    fn support(&self) -> Support {
        Support::closed(self.xmin as f64, self.xmax as f64)
    }
}

impl Distribution for DiscreteUniform {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn parameters(&self) -> Parameters {
        vec![("xmin", self.xmin as f64), ("xmax", self.xmax as f64)]
    }
}
