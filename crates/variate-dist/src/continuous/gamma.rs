//! Gamma distribution and its integer-shape reparametrizations

use crate::traits::{
    delegate_primitives, CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters,
    Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::special::{gamma_lower_regularized, log_gamma, xlogy};
use variate_core::{kernels, Bound, IterationLimits, RandomSource, Result, Support};

/// Gamma distribution with shape `alpha` and rate `beta`.
///
/// The lower bound 0 belongs to the support only for `alpha ≥ 1`; below that
/// the density diverges at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Gamma {
    alpha: f64,
    beta: f64,
    /// `alpha ln(beta) - ln Γ(alpha)`
    log_norm: f64,
    limits: IterationLimits,
}

impl Gamma {
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        ensure(
            alpha > 0.0 && alpha.is_finite(),
            "alpha > 0",
            &[("alpha", alpha)],
        )?;
        ensure(beta > 0.0 && beta.is_finite(), "beta > 0", &[("beta", beta)])?;
        Ok(Self {
            alpha,
            beta,
            log_norm: alpha * beta.ln() - log_gamma(alpha),
            limits: IterationLimits::default(),
        })
    }

    /// Replace the rejection cap of the sampler and the caps of the
    /// quantile search.
    pub fn with_limits(mut self, limits: IterationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn shape(&self) -> f64 {
        self.alpha
    }

    pub fn rate(&self) -> f64 {
        self.beta
    }

    /// Mode of the density, 0 for `alpha < 1`
    pub fn mode(&self) -> f64 {
        if self.alpha >= 1.0 {
            (self.alpha - 1.0) / self.beta
        } else {
            0.0
        }
    }
}

impl Sampleable for Gamma {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        kernels::gamma_bounded(rng, self.alpha, self.beta, self.limits.max_trials)
    }
}

impl DensityEvaluable for Gamma {
    fn density_at(&self, x: f64) -> f64 {
        (self.log_norm - self.beta * x + xlogy(self.alpha - 1.0, x)).exp()
    }
}

impl CdfEvaluable for Gamma {
    fn cumulative_at(&self, x: f64) -> f64 {
        gamma_lower_regularized(self.alpha, self.beta * x)
    }
}

impl SupportBounded for Gamma {
    fn support(&self) -> Support {
        Support::new(
            Bound::new(0.0, self.alpha >= 1.0),
            Bound::open(f64::INFINITY),
        )
    }
}

impl Distribution for Gamma {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("alpha", self.alpha), ("beta", self.beta)]
    }

    fn iteration_limits(&self) -> IterationLimits {
        self.limits
    }
}

/// Erlang distribution: a gamma with integer shape `k` and rate `lambda`.
///
/// `k` is rounded to the nearest integer.
#[derive(Debug, Clone, PartialEq)]
pub struct Erlang {
    k: f64,
    lambda: f64,
    inner: Gamma,
}

impl Erlang {
    pub fn new(k: f64, lambda: f64) -> Result<Self> {
        let k = k.round();
        ensure(k >= 1.0, "k >= 1", &[("k", k)])?;
        Ok(Self {
            k,
            lambda,
            inner: Gamma::new(k, lambda)?,
        })
    }
}

delegate_primitives!(Erlang => inner);

impl Distribution for Erlang {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("k", self.k), ("lambda", self.lambda)]
    }
}

/// Chi-squared distribution with `k` degrees of freedom, a gamma with shape
/// `k / 2` and rate `1 / 2`.
///
/// `k` is rounded to the nearest integer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquared {
    k: f64,
    inner: Gamma,
}

impl ChiSquared {
    pub fn new(k: f64) -> Result<Self> {
        ensure(k > 0.0 && k.round() >= 1.0, "k > 0", &[("k", k)])?;
        let k = k.round();
        Ok(Self {
            k,
            inner: Gamma::new(k / 2.0, 0.5)?,
        })
    }

    pub fn degrees_of_freedom(&self) -> f64 {
        self.k
    }
}

delegate_primitives!(ChiSquared => inner);

impl Distribution for ChiSquared {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn parameters(&self) -> Parameters {
        vec![("k", self.k)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use statrs::distribution::{Continuous, ContinuousCDF};

    #[test]
    fn test_against_statrs() {
        for (alpha, beta) in [(0.5, 1.0), (1.0, 2.0), (2.5, 0.7), (30.0, 3.0)] {
            let g = Gamma::new(alpha, beta).unwrap();
            let reference = statrs::distribution::Gamma::new(alpha, beta).unwrap();
            for x in [0.05, 0.5, 1.0, 4.0, 12.0] {
                assert_abs_diff_eq!(g.pdf(x), reference.pdf(x), epsilon = 1e-10);
                assert_abs_diff_eq!(g.cdf(x), reference.cdf(x), epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_lower_bound_closedness() {
        let g = Gamma::new(1.0, 2.0).unwrap();
        assert!(g.support().lower.closed);
        assert_abs_diff_eq!(g.pdf(0.0), 2.0, epsilon = 1e-14);

        let g = Gamma::new(0.5, 1.0).unwrap();
        assert!(!g.support().lower.closed);
        assert_eq!(g.pdf(0.0), 0.0);

        let g = Gamma::new(3.0, 1.0).unwrap();
        assert_eq!(g.pdf(0.0), 0.0);
        assert_eq!(g.mode(), 2.0);
    }

    #[test]
    fn test_limits_reach_the_quantile_search() {
        let g = Gamma::new(2.0, 1.0).unwrap();
        assert!(g.quantile(1.0 - 1e-6).is_ok());
        let tight = g.clone().with_limits(IterationLimits::default().with_max_iter(2));
        assert!(tight.quantile(1.0 - 1e-6).unwrap_err().is_convergence());
        assert_eq!(tight.iteration_limits().max_iter, 2);
    }

    #[test]
    fn test_erlang_is_integer_gamma() {
        let e = Erlang::new(2.6, 1.5).unwrap();
        let g = Gamma::new(3.0, 1.5).unwrap();
        assert_eq!(e.parameters(), vec![("k", 3.0), ("lambda", 1.5)]);
        for x in [0.0, 0.3, 2.0, 7.0] {
            assert_eq!(e.pdf(x), g.pdf(x));
            assert_eq!(e.cdf(x), g.cdf(x));
        }
        assert!(Erlang::new(0.2, 1.0).is_err());
        assert!(Erlang::new(2.0, -1.0).is_err());
    }

    #[test]
    fn test_chi_squared() {
        let c = ChiSquared::new(4.0).unwrap();
        let reference = statrs::distribution::ChiSquared::new(4.0).unwrap();
        for x in [0.5, 3.0, 9.0] {
            assert_abs_diff_eq!(c.pdf(x), reference.pdf(x), epsilon = 1e-12);
            assert_abs_diff_eq!(c.cdf(x), reference.cdf(x), epsilon = 1e-10);
        }
        assert_eq!(c.parameter_count(), 1);
        // 99% point for two degrees of freedom
        let two = ChiSquared::new(2.0).unwrap();
        assert_abs_diff_eq!(two.quantile(0.99).unwrap(), 9.210_340_37, epsilon = 1e-6);
        assert!(ChiSquared::new(0.0).is_err());
        assert!(ChiSquared::new(0.4).is_err());
    }
}
