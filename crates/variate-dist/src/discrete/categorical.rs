//! Categorical distribution and its fixed-weight specializations

use crate::traits::{
    delegate_primitives, CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters,
    Sampleable, SupportBounded,
};
use variate_core::error::ensure;
use variate_core::{AliasTable, RandomSource, Result, Support};

/// Distribution over the integers `min, min + 1, ..., min + n - 1` with
/// probabilities proportional to `n` weights.
///
/// Sampling goes through an alias table and costs O(1) per variate.
///
/// # Example
///
/// ```
/// use variate_dist::prelude::*;
///
/// let loaded = Categorical::new(&[1.0, 1.0, 2.0], 1).unwrap();
/// assert_eq!(loaded.pdf(3.0), 0.5);
/// assert_eq!(loaded.cdf(2.0), 0.5);
/// assert_eq!(loaded.pdf(4.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Categorical {
    table: AliasTable,
    min: i64,
}

impl Categorical {
    /// # Errors
    ///
    /// [`variate_core::Error::InvalidParameter`] for an empty weight vector,
    /// negative or non-finite weights, or weights summing to zero.
    pub fn new(weights: &[f64], min: i64) -> Result<Self> {
        Ok(Self {
            table: AliasTable::new(weights)?,
            min,
        })
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn index(&self, x: f64) -> usize {
        // callers stay inside the support, so the offset is non-negative
        (x - self.min as f64).max(0.0) as usize
    }
}

impl Sampleable for Categorical {
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<f64> {
        Ok((self.min + self.table.sample(rng) as i64) as f64)
    }
}

impl DensityEvaluable for Categorical {
    fn density_at(&self, x: f64) -> f64 {
        self.table.pmf(self.index(x))
    }
}

impl CdfEvaluable for Categorical {
    fn cumulative_at(&self, x: f64) -> f64 {
        self.table.cdf(self.index(x)).min(1.0)
    }
}

impl SupportBounded for Categorical {
    fn support(&self) -> Support {
        let lower = self.min as f64;
        let upper = lower + self.table.len().saturating_sub(1) as f64;
        Support::closed(lower, upper)
    }
}

impl Distribution for Categorical {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn parameters(&self) -> Parameters {
        vec![("n", self.table.len() as f64), ("min", self.min as f64)]
    }
}

/// Bernoulli distribution: 1 with probability `p`, 0 otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Bernoulli {
    p: f64,
    inner: Categorical,
}

impl Bernoulli {
    pub fn new(p: f64) -> Result<Self> {
        ensure((0.0..=1.0).contains(&p), "0 <= p <= 1", &[("p", p)])?;
        Ok(Self {
            p,
            inner: Categorical::new(&[1.0 - p, p], 0)?,
        })
    }
}

delegate_primitives!(Bernoulli => inner);

impl Distribution for Bernoulli {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn parameters(&self) -> Parameters {
        vec![("p", self.p)]
    }
}

/// Zipf distribution on `1..=n` with exponent `s`: `P(k) ∝ k^-s`.
#[derive(Debug, Clone, PartialEq)]
pub struct Zipf {
    s: f64,
    n: usize,
    inner: Categorical,
}

impl Zipf {
    pub fn new(s: f64, n: usize) -> Result<Self> {
        ensure(s.is_finite() && s >= 0.0, "s >= 0", &[("s", s)])?;
        ensure(n >= 1, "n >= 1", &[("n", n as f64)])?;
        let weights: Vec<f64> = (1..=n).map(|k| (k as f64).powf(-s)).collect();
        Ok(Self {
            s,
            n,
            inner: Categorical::new(&weights, 1)?,
        })
    }
}

delegate_primitives!(Zipf => inner);

impl Distribution for Zipf {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn parameters(&self) -> Parameters {
        vec![("s", self.s), ("n", self.n as f64)]
    }
}
