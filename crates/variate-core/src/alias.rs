//! Alias tables for O(1) sampling from a weighted discrete distribution
//!
//! Construction follows Vose's method: weights are scaled so their mean is 1,
//! split into under-full and over-full slots, and each under-full slot is
//! topped up by an alias drawn from an over-full one.

use crate::error::{Error, Result};
use crate::rng::RandomSource;
use num_traits::ToPrimitive;
use tracing::debug;

/// Precomputed acceptance and alias columns for a categorical distribution.
///
/// # Example
///
/// ```
/// use variate_core::alias::AliasTable;
/// use variate_core::rng::Xoshiro128Plus;
///
/// let table = AliasTable::new(&[1u32, 2, 1]).unwrap();
/// assert_eq!(table.pmf(1), 0.5);
///
/// let mut rng = Xoshiro128Plus::from_seed_u32(4);
/// assert!(table.sample(&mut rng) < 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
    pmf: Vec<f64>,
    cdf: Vec<f64>,
}

impl AliasTable {
    /// Build a table from non-negative weights. The weights need not sum to 1.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for an empty vector, a negative or
    /// non-finite weight, or weights summing to zero.
    pub fn new<W: ToPrimitive>(weights: &[W]) -> Result<Self> {
        if weights.is_empty() {
            return Err(Error::parameter("weights must not be empty", &[]));
        }

        let mut w = Vec::with_capacity(weights.len());
        for (i, weight) in weights.iter().enumerate() {
            let value = weight.to_f64().unwrap_or(f64::NAN);
            if !(value >= 0.0 && value.is_finite()) {
                return Err(Error::InvalidParameter(format!(
                    "weights must be finite and non-negative (weight {i} = {value})"
                )));
            }
            w.push(value);
        }

        let total: f64 = w.iter().sum();
        if !(total > 0.0 && total.is_finite()) {
            return Err(Error::parameter(
                "weights must have a positive finite sum",
                &[("sum", total)],
            ));
        }

        let n = w.len();
        let pmf: Vec<f64> = w.iter().map(|x| x / total).collect();
        let mut cdf = Vec::with_capacity(n);
        let mut running = 0.0;
        for p in &pmf {
            running += p;
            cdf.push(running.min(1.0));
        }
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }

        let (prob, alias) = vose(&pmf);
        debug!(categories = n, "built alias table");
        Ok(Self {
            prob,
            alias,
            pmf,
            cdf,
        })
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.pmf.len()
    }

    /// Always false; a table has at least one category
    pub fn is_empty(&self) -> bool {
        self.pmf.is_empty()
    }

    /// Draw a category index in `[0, len)`.
    ///
    /// A single-category table returns 0 without consuming randomness.
    #[inline]
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        let n = self.prob.len();
        if n <= 1 {
            return 0;
        }
        let i = rng.next_index(n);
        if rng.next_f64() < self.prob[i] {
            i
        } else {
            self.alias[i]
        }
    }

    /// Probability of category `i`, 0 outside the table
    pub fn pmf(&self, i: usize) -> f64 {
        self.pmf.get(i).copied().unwrap_or(0.0)
    }

    /// Probability of a category `≤ i`, 1 beyond the table
    pub fn cdf(&self, i: usize) -> f64 {
        self.cdf.get(i).copied().unwrap_or(1.0)
    }

    /// Normalized weights
    pub fn probabilities(&self) -> &[f64] {
        &self.pmf
    }

    /// Acceptance probability of each slot
    pub fn acceptance(&self) -> &[f64] {
        &self.prob
    }

    /// Fallback category of each slot
    pub fn aliases(&self) -> &[usize] {
        &self.alias
    }
}

/// Vose's construction from normalized probabilities.
fn vose(pmf: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let n = pmf.len();
    let mut prob = vec![1.0; n];
    let mut alias: Vec<usize> = (0..n).collect();
    if n <= 1 {
        return (prob, alias);
    }

    let mut scaled: Vec<f64> = pmf.iter().map(|p| p * n as f64).collect();
    let (mut small, mut large): (Vec<usize>, Vec<usize>) =
        (0..n).partition(|&i| scaled[i] < 1.0);

    loop {
        let (s, l) = match (small.pop(), large.pop()) {
            (Some(s), Some(l)) => (s, l),
            (s, l) => {
                small.extend(s);
                large.extend(l);
                break;
            }
        };
        prob[s] = scaled[s];
        alias[s] = l;
        scaled[l] += scaled[s] - 1.0;
        if scaled[l] < 1.0 {
            small.push(l);
        } else {
            large.push(l);
        }
    }

    // leftovers are full up to rounding
    for i in small.into_iter().chain(large) {
        prob[i] = 1.0;
        alias[i] = i;
    }
    (prob, alias)
}
