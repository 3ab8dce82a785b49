//! Binomial distribution

use crate::traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::special::{log_binomial, regularized_beta_incomplete, xlogy};
use variate_core::{AliasTable, RandomSource, Result, Support};

/// Largest number of trials for which the full pmf is tabulated.
pub const MAX_TRIALS: u64 = 1 << 20;

/// Number of successes in `n` independent trials with success probability
/// `p`.
///
/// The pmf is tabulated once at construction and sampled through an alias
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
    table: AliasTable,
}

impl Binomial {
    /// # Errors
    ///
    /// [`variate_core::Error::InvalidParameter`] unless `0 ≤ p ≤ 1` and
    /// `n ≤ MAX_TRIALS`.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        ensure((0.0..=1.0).contains(&p), "0 <= p <= 1", &[("p", p)])?;
        ensure(
            n <= MAX_TRIALS,
            "n <= 2^20",
            &[("n", n as f64)],
        )?;
        let pmf: Vec<f64> = (0..=n).map(|k| log_pmf(n, p, k as f64).exp()).collect();
        Ok(Self {
            n,
            p,
            table: AliasTable::new(&pmf)?,
        })
    }
}

fn log_pmf(n: u64, p: f64, k: f64) -> f64 {
    let n = n as f64;
    log_binomial(n, k) + xlogy(k, p) + xlogy(n - k, 1.0 - p)
}

impl Sampleable for Binomial {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        Ok(self.table.sample(rng) as f64)
    }
}

impl DensityEvaluable for Binomial {
    fn density_at(&self, x: f64) -> f64 {
        log_pmf(self.n, self.p, x).exp()
    }
}

impl CdfEvaluable for Binomial {
    fn cumulative_at(&self, x: f64) -> f64 {
        // P(X <= k) = I_{1-p}(n - k, k + 1), for k < n
        regularized_beta_incomplete(self.n as f64 - x, x + 1.0, 1.0 - self.p)
    }
}

impl SupportBounded for Binomial {
    fn support(&self) -> Support {
        Support::closed(0.0, self.n as f64)
    }
}

impl Distribution for Binomial {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn parameters(&self) -> Parameters {
        vec![("n", self.n as f64), ("p", self.p)]
    }
}
