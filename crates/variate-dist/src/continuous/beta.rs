//! Beta distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::special::{log_beta, regularized_beta_incomplete, xlogy};
use variate_core::{kernels, Bound, IterationLimits, RandomSource, Result, Support};

/// Beta distribution on `[0, 1]` with shapes `alpha` and `beta`.
///
/// Each end of the unit interval belongs to the support only when the
/// matching shape is at least 1, since the density diverges there otherwise.
/// Variates are `X / (X + Y)` for independent gammas `X ~ Gamma(alpha, 1)`
/// and `Y ~ Gamma(beta, 1)`, formed from `ln X` and `ln Y` so that small
/// shapes cannot underflow both gammas to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Beta {
    alpha: f64,
    beta: f64,
    log_norm: f64,
    limits: IterationLimits,
}

impl Beta {
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
            log_norm: log_beta(alpha, beta),
            limits: IterationLimits::default(),
        })
    }

    /// Replace the rejection cap of the gamma draws and the caps of the
    /// quantile search.
    pub fn with_limits(mut self, limits: IterationLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl Sampleable for Beta {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        let trials = self.limits.max_trials;
        let log_x = kernels::log_gamma_variate(rng, self.alpha, trials)?;
        let log_y = kernels::log_gamma_variate(rng, self.beta, trials)?;
        // x / (x + y) as a logistic of ln y - ln x
        let d = log_y - log_x;
        let z = if d > 0.0 {
            let e = (-d).exp();
            e / (1.0 + e)
        } else {
            1.0 / (1.0 + d.exp())
        };
        // ratios beyond f64 resolution land on the nearest interior point
        Ok(z.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON / 2.0))
    }
}

impl DensityEvaluable for Beta {
    fn density_at(&self, x: f64) -> f64 {
        let log_density =
            xlogy(self.alpha - 1.0, x) + xlogy(self.beta - 1.0, 1.0 - x) - self.log_norm;
        let density = log_density.exp();
        if density.is_finite() {
            density
        } else {
            0.0
        }
    }
}

impl CdfEvaluable for Beta {
    fn cumulative_at(&self, x: f64) -> f64 {
        regularized_beta_incomplete(self.alpha, self.beta, x)
    }
}

impl SupportBounded for Beta {
    fn support(&self) -> Support {
        Support::new(
            Bound::new(0.0, self.alpha >= 1.0),
            Bound::new(1.0, self.beta >= 1.0),
        )
    }
}

impl Distribution for Beta {
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use statrs::distribution::{Continuous, ContinuousCDF};

    #[test]
    fn test_against_statrs() {
        for (a, b) in [(0.5, 0.5), (2.0, 5.0), (1.0, 3.0), (8.0, 1.5)] {
            let d = Beta::new(a, b).unwrap();
            let reference = statrs::distribution::Beta::new(a, b).unwrap();
            for x in [0.01, 0.2, 0.5, 0.77, 0.99] {
                assert_abs_diff_eq!(d.pdf(x), reference.pdf(x), epsilon = 1e-9);
                assert_abs_diff_eq!(d.cdf(x), reference.cdf(x), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_boundary_closedness_at_shape_one() {
        // alpha == 1 closes the lower end and the density is finite there
        let d = Beta::new(1.0, 3.0).unwrap();
        let support = d.support();
        assert!(support.lower.closed);
        assert!(support.upper.closed);
        assert_abs_diff_eq!(d.pdf(0.0), 3.0, epsilon = 1e-12);
        assert_eq!(d.pdf(1.0), 0.0);
        assert_eq!(d.cdf(0.0), 0.0);
        assert_eq!(d.cdf(1.0), 1.0);

        // just below 1 both ends open and the boundary itself has no mass
        let d = Beta::new(0.999, 0.999).unwrap();
        let support = d.support();
        assert!(!support.lower.closed);
        assert!(!support.upper.closed);
        assert_eq!(d.pdf(0.0), 0.0);
        assert_eq!(d.pdf(1.0), 0.0);
        assert_eq!(d.cdf(1.0), 1.0);
        assert!(d.pdf(1e-6) > 1.0);
    }

    #[test]
    fn test_samples_in_unit_interval() {
        let mut rng = variate_core::Xoshiro128Plus::from_seed_u32(11);
        let d = Beta::new(0.2, 0.3).unwrap();
        for _ in 0..5000 {
            let x = d.sample(&mut rng).unwrap();
            assert!((0.0..=1.0).contains(&x), "{x}");
        }
    }

    #[test]
    fn test_tiny_shapes_stay_inside_the_support() {
        let mut rng = variate_core::Xoshiro128Plus::from_seed_u32(23);
        let d = Beta::new(0.01, 0.01).unwrap();
        let xs = d.sample_n(&mut rng, 20_000).unwrap();
        assert!(xs.iter().all(|&x| x > 0.0 && x < 1.0));
        // symmetric, with almost all mass piled at the two ends
        let below = xs.iter().filter(|&&x| x < 0.5).count() as f64 / xs.len() as f64;
        assert!((below - 0.5).abs() < 0.03, "share below 1/2: {below}");
        let extreme = xs.iter().filter(|&&x| !(1e-10..=1.0 - 1e-10).contains(&x)).count();
        assert!(extreme > xs.len() / 2);

        let skewed = Beta::new(0.02, 3.0).unwrap();
        let ys = skewed.sample_n(&mut rng, 5_000).unwrap();
        assert!(ys.iter().all(|&y| y > 0.0 && y < 1.0));
    }

    #[test]
    fn test_limits_reach_the_quantile_search() {
        let d = Beta::new(2.0, 5.0).unwrap();
        let tight = d.clone().with_limits(IterationLimits::default().with_max_iter(1));
        assert_eq!(tight.iteration_limits().max_iter, 1);
        // brent gets two iterations, far too few for 1e-12
        assert!(tight.quantile(0.3).unwrap_err().is_convergence());
        assert!(d.quantile(0.3).is_ok());
    }
}
