//! Chi-square goodness-of-fit test for discrete samples

use crate::config::GofConfig;
use crate::critical_values::critical_value;
use crate::types::GofResult;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use tracing::{debug, instrument};
use variate_core::{Error, Result};

/// Count occurrences of each distinct value.
pub fn frequencies(values: &[f64]) -> BTreeMap<OrderedFloat<f64>, usize> {
    let mut counts = BTreeMap::new();
    for &v in values {
        *counts.entry(OrderedFloat(v)).or_insert(0) += 1;
    }
    counts
}

/// Pearson's chi-square test of `values` against a probability mass function.
///
/// Values are bucketed exactly; each distinct value `x` observed `o` times
/// contributes `(o - m)² / m` with expected count `m = pmf(x) · n`. A value
/// the pmf gives zero mass makes the statistic infinite and the test fail.
/// Degrees of freedom are `max(1, distinct - parameter_count - 1)`.
///
/// # Errors
///
/// [`Error::InsufficientData`] for an empty sample, [`Error::InvalidInput`]
/// if the sample contains NaN.
///
/// # Example
///
/// ```
/// use variate_gof::{chi_square, GofConfig};
///
/// // a fair die rolled 60 times, each face 10 times
/// let rolls: Vec<f64> = (0..60).map(|i| (i % 6 + 1) as f64).collect();
/// let result = chi_square(&rolls, |_| 1.0 / 6.0, 0, &GofConfig::default()).unwrap();
/// assert!(result.statistic.abs() < 1e-12);
/// assert!(result.passed);
/// ```
#[instrument(skip(values, pmf, config), fields(n = values.len()))]
pub fn chi_square<F>(
    values: &[f64],
    pmf: F,
    parameter_count: usize,
    config: &GofConfig,
) -> Result<GofResult>
where
    F: Fn(f64) -> f64,
{
    if values.is_empty() {
        return Err(Error::empty_input("chi-square test"));
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err(Error::InvalidInput("sample contains NaN".to_string()));
    }

    let n = values.len() as f64;
    let counts = frequencies(values);
    let statistic: f64 = counts
        .iter()
        .map(|(x, &observed)| {
            let expected = pmf(x.into_inner()) * n;
            (observed as f64 - expected).powi(2) / expected
        })
        .sum();

    let df = counts.len().saturating_sub(parameter_count + 1).max(1);
    let critical = critical_value(df, config)?;
    let passed = statistic <= critical;
    debug!(statistic, df, critical, passed, "chi-square test");

    Ok(GofResult {
        statistic,
        passed,
        critical_value: critical,
        degrees_of_freedom: Some(df),
    })
}
