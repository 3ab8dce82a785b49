//! Slash distribution

use super::Normal;
use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use std::f64::consts::PI;
use variate_core::algorithms::{bracket, invert_cdf, RootSettings};
use variate_core::{IterationLimits, RandomSource, Result, Support};

/// Below this magnitude the density and cdf use Taylor expansions, avoiding
/// the cancellation in `φ(0) - φ(x)`.
const SERIES_CUTOFF: f64 = 1e-3;

/// Uniforms are kept this far from 0 and 1 so the inverted cdf stays finite.
const TAIL_GUARD: f64 = f64::EPSILON;

/// Slash distribution: the ratio of a standard normal and an independent
/// uniform.
///
/// Its quantile function has no closed form, so variates are drawn by
/// numerically inverting the cdf.
#[derive(Debug, Clone, PartialEq)]
pub struct Slash {
    normal: Normal,
    /// `φ(0) = 1 / sqrt(2π)`
    peak: f64,
    limits: IterationLimits,
}

impl Slash {
    pub fn new() -> Self {
        Self {
            normal: Normal::standard(),
            peak: 1.0 / (2.0 * PI).sqrt(),
            limits: IterationLimits::default(),
        }
    }

    /// Replace the caps and tolerance of the cdf inversion.
    pub fn with_limits(mut self, limits: IterationLimits) -> Self {
        self.limits = limits;
        self
    }

    fn invert(&self, p: f64) -> Result<f64> {
        let settings = RootSettings::from_limits(&self.limits);
        let excess = |x: f64| self.cdf(x) - p;
        let (lo, hi) = bracket(excess, -1.0, 1.0, &Support::real_line(), &settings)?;
        invert_cdf(
            |x| self.cdf(x),
            |x| self.pdf(x),
            p,
            0.5 * (lo + hi),
            lo,
            hi,
            &settings,
        )
    }
}

impl Default for Slash {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampleable for Slash {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        let p = rng.next_f64().clamp(TAIL_GUARD, 1.0 - TAIL_GUARD);
        self.invert(p)
    }
}

impl DensityEvaluable for Slash {
    fn density_at(&self, x: f64) -> f64 {
        if x.abs() < SERIES_CUTOFF {
            let x2 = x * x;
            self.peak * (0.5 - x2 / 8.0 + x2 * x2 / 48.0)
        } else {
            (self.peak - self.normal.density_at(x)) / (x * x)
        }
    }
}

impl CdfEvaluable for Slash {
    fn cumulative_at(&self, x: f64) -> f64 {
        if x == 0.0 {
            return 0.5;
        }
        let correction = if x.abs() < SERIES_CUTOFF {
            let x2 = x * x;
            self.peak * x * (0.5 - x2 / 8.0 + x2 * x2 / 48.0)
        } else {
            (self.peak - self.normal.density_at(x)) / x
        };
        self.normal.cumulative_at(x) - correction
    }
}

impl SupportBounded for Slash {
    fn support(&self) -> Support {
        Support::real_line()
    }
}

impl Distribution for Slash {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        Vec::new()
    }

    fn inverse_cdf(&self, p: f64) -> Option<f64> {
        self.invert(p).ok()
    }

    fn iteration_limits(&self) -> IterationLimits {
        self.limits
    }
}
