//! Capability traits and the distribution contract
//!
//! A concrete distribution implements four primitives, each through its own
//! trait so that a missing one is a compile error:
//!
//! - [`Sampleable::generate`] draws one variate,
//! - [`DensityEvaluable::density_at`] evaluates the pdf/pmf inside the support,
//! - [`CdfEvaluable::cumulative_at`] evaluates the cdf inside the support,
//! - [`SupportBounded::support`] describes the support interval.
//!
//! [`Distribution`] adds the kind and parameters and derives everything else
//! (boundary handling, survival, hazard, likelihoods, quantiles and
//! goodness-of-fit tests) from those four.

use crate::quantile::{continuous_quantile, discrete_quantile};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use variate_core::algorithms::neumaier_sum;
use variate_core::config::IterationLimits;
use variate_core::{Error, RandomSource, Result, Support};
use variate_gof::{goodness_of_fit, GofConfig, GofResult, Reference};

/// Whether a distribution lives on the integers or the real line.
///
/// Discrete distributions round their argument to the nearest integer before
/// evaluating the pmf or cdf and are tested with the chi-square test;
/// continuous ones use the argument as is and are tested with the
/// Kolmogorov–Smirnov test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Discrete,
    Continuous,
}

/// Draws single variates.
pub trait Sampleable {
    /// One variate, using only `rng` as the source of randomness.
    ///
    /// # Errors
    ///
    /// [`Error::Convergence`] when a bounded rejection loop or solver gives up.
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64>;
}

/// Probability density or mass, valid inside the support only.
pub trait DensityEvaluable {
    fn density_at(&self, x: f64) -> f64;
}

/// Cumulative probability, valid inside the support only.
pub trait CdfEvaluable {
    fn cumulative_at(&self, x: f64) -> f64;
}

/// Support interval.
pub trait SupportBounded {
    fn support(&self) -> Support;
}

/// Named parameter values, in constructor order.
pub type Parameters = Vec<(&'static str, f64)>;

/// A probability distribution.
///
/// Implementors supply [`kind`](Self::kind), [`parameters`](Self::parameters)
/// and the four primitives; all other methods are provided.
///
/// # Example
///
/// ```
/// use variate_dist::prelude::*;
///
/// let exp = Exponential::new(1.0).unwrap();
/// assert_eq!(exp.pdf(0.0), 1.0);
/// assert_eq!(exp.cdf(-1.0), 0.0);
/// assert!((exp.cdf(2f64.ln()) - 0.5).abs() < 1e-15);
///
/// let mut rng = Xoshiro128Plus::from_seed_u32(42);
/// let sample = exp.sample_n(&mut rng, 1000).unwrap();
/// assert!(exp.test(&sample).unwrap().passed);
/// ```
pub trait Distribution:
    Sampleable + DensityEvaluable + CdfEvaluable + SupportBounded + Send + Sync
{
    fn kind(&self) -> Kind;

    fn parameters(&self) -> Parameters;

    /// Number of parameters, subtracted from the chi-square degrees of
    /// freedom when testing discrete samples.
    fn parameter_count(&self) -> usize {
        self.parameters().len()
    }

    /// Closed-form quantile for `p` in `(0, 1)`, if the distribution has one.
    ///
    /// Returning `None` makes [`quantile`](Self::quantile) fall back to a
    /// numerical search.
    fn inverse_cdf(&self, _p: f64) -> Option<f64> {
        None
    }

    /// Caps and tolerance for the iterative parts of this distribution:
    /// rejection loops, inner solvers and the numerical quantile search.
    fn iteration_limits(&self) -> IterationLimits {
        IterationLimits::default()
    }

    /// One variate.
    fn sample(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        self.generate(rng)
    }

    /// `n` independent variates.
    #[instrument(level = "trace", skip(self, rng))]
    fn sample_n(&self, rng: &mut dyn RandomSource, n: usize) -> Result<Vec<f64>> {
        (0..n).map(|_| self.generate(rng)).collect()
    }

    /// `n` variates drawn in parallel.
    ///
    /// The output is cut into fixed-size chunks and every chunk gets its own
    /// generator seeded from `seed` and the chunk index, so the result is the
    /// same for any number of threads.
    #[cfg(feature = "parallel")]
    fn sample_par(&self, n: usize, seed: u32) -> Result<Vec<f64>> {
        crate::parallel::sample_par(self, n, seed)
    }

    /// Density (or mass) with support boundaries applied. Discrete
    /// distributions round `x` first. NaN maps to NaN.
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let x = round_for(self.kind(), x);
        let support = self.support();
        if support.below(x) || support.above(x) {
            0.0
        } else {
            self.density_at(x)
        }
    }

    /// Cumulative probability with support boundaries applied: 0 below the
    /// lower bound, 1 at or above the upper bound value.
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let x = round_for(self.kind(), x);
        let support = self.support();
        if support.below(x) {
            0.0
        } else if x >= support.upper.value {
            1.0
        } else {
            self.cumulative_at(x)
        }
    }

    /// `1 - cdf(x)`
    fn survival(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// `pdf(x) / survival(x)`
    fn hazard(&self, x: f64) -> f64 {
        self.pdf(x) / self.survival(x)
    }

    /// `-ln(survival(x))`
    fn cumulative_hazard(&self, x: f64) -> f64 {
        -self.survival(x).ln()
    }

    /// `ln(pdf(x))`
    fn log_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Sum of [`log_pdf`](Self::log_pdf) over `data`, with compensated
    /// summation.
    fn log_likelihood(&self, data: &[f64]) -> f64 {
        neumaier_sum(data.iter().map(|&x| self.log_pdf(x)))
    }

    /// Akaike information criterion `2k - 2 ln L`.
    fn aic(&self, data: &[f64]) -> f64 {
        2.0 * self.parameter_count() as f64 - 2.0 * self.log_likelihood(data)
    }

    /// Bayesian information criterion `k ln n - 2 ln L`.
    fn bic(&self, data: &[f64]) -> f64 {
        (data.len() as f64).ln() * self.parameter_count() as f64
            - 2.0 * self.log_likelihood(data)
    }

    /// Quantile function.
    ///
    /// `p = 0` and `p = 1` give the support bounds. Otherwise the closed form
    /// from [`inverse_cdf`](Self::inverse_cdf) is used when available; discrete
    /// distributions fall back to the smallest integer `k` with
    /// `cdf(k) ≥ p` and continuous ones to Brent's method on `cdf(x) - p`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for `p` outside `[0, 1]`,
    /// [`Error::Convergence`] if the numerical search fails.
    fn quantile(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::parameter("0 <= p <= 1", &[("p", p)]));
        }
        let support = self.support();
        if p == 0.0 {
            return Ok(support.lower.value);
        }
        if p == 1.0 {
            return Ok(support.upper.value);
        }
        if let Some(x) = self.inverse_cdf(p) {
            return Ok(x);
        }
        let limits = self.iteration_limits();
        match self.kind() {
            Kind::Discrete => discrete_quantile(|x| self.cdf(x), &support, p, &limits),
            Kind::Continuous => continuous_quantile(|x| self.cdf(x), &support, p, &limits),
        }
    }

    /// Goodness-of-fit test of `values` against this distribution at the
    /// default settings: chi-square for discrete kinds, Kolmogorov–Smirnov
    /// for continuous ones.
    fn test(&self, values: &[f64]) -> Result<GofResult> {
        self.test_with(values, &GofConfig::default())
    }

    /// [`test`](Self::test) with explicit settings.
    fn test_with(&self, values: &[f64], config: &GofConfig) -> Result<GofResult> {
        match self.kind() {
            Kind::Discrete => {
                let pmf = |x: f64| self.pdf(x);
                let reference = Reference::Discrete {
                    pmf: &pmf,
                    parameter_count: self.parameter_count(),
                };
                goodness_of_fit(values, &reference, config)
            }
            Kind::Continuous => {
                let cdf = |x: f64| self.cdf(x);
                goodness_of_fit(values, &Reference::Continuous { cdf: &cdf }, config)
            }
        }
    }
}

/// Discrete arguments are rounded to the nearest integer.
fn round_for(kind: Kind, x: f64) -> f64 {
    match kind {
        Kind::Discrete => x.round(),
        Kind::Continuous => x,
    }
}

/// Forward the four primitives of a wrapper type to one of its fields.
///
/// Used by reparametrized families such as `Erlang` over `Gamma`; the wrapper
/// still implements [`Distribution`] itself so it reports its own parameters.
macro_rules! delegate_primitives {
    ($ty:ty => $field:ident) => {
        impl $crate::traits::Sampleable for $ty {
            fn generate(
                &self,
                rng: &mut dyn variate_core::RandomSource,
            ) -> variate_core::Result<f64> {
                $crate::traits::Sampleable::generate(&self.$field, rng)
            }
        }

        impl $crate::traits::DensityEvaluable for $ty {
            fn density_at(&self, x: f64) -> f64 {
                $crate::traits::DensityEvaluable::density_at(&self.$field, x)
            }
        }

        impl $crate::traits::CdfEvaluable for $ty {
            fn cumulative_at(&self, x: f64) -> f64 {
                $crate::traits::CdfEvaluable::cumulative_at(&self.$field, x)
            }
        }

        impl $crate::traits::SupportBounded for $ty {
            fn support(&self) -> variate_core::Support {
                $crate::traits::SupportBounded::support(&self.$field)
            }
        }
    };
}

pub(crate) use delegate_primitives;
