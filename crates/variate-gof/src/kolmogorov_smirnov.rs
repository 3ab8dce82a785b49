//! Kolmogorov–Smirnov goodness-of-fit test for continuous samples

use crate::config::GofConfig;
use crate::types::GofResult;
use tracing::{debug, instrument};
use variate_core::utils::sorted;
use variate_core::{Error, Result};

/// KS statistic `D = max |(i + 1)/n - cdf(x_i)|` over the sorted sample.
///
/// The caller's slice is not reordered; a sorted copy is used.
pub fn ks_statistic<F>(values: &[f64], cdf: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = values.len() as f64;
    sorted(values)
        .iter()
        .enumerate()
        .map(|(i, &x)| ((i + 1) as f64 / n - cdf(x)).abs())
        .fold(0.0, f64::max)
}

/// Kolmogorov–Smirnov test of `values` against a cumulative distribution
/// function. Passes when `D ≤ ks_coefficient / sqrt(n)`.
///
/// # Errors
///
/// [`Error::InsufficientData`] for an empty sample, [`Error::InvalidInput`]
/// if the sample contains NaN.
///
/// # Example
///
/// ```
/// use variate_gof::{kolmogorov_smirnov, GofConfig};
///
/// let grid: Vec<f64> = (0..100).map(|i| (i as f64 + 0.5) / 100.0).collect();
/// let uniform = |x: f64| x.clamp(0.0, 1.0);
/// assert!(kolmogorov_smirnov(&grid, uniform, &GofConfig::default()).unwrap().passed);
/// ```
#[instrument(skip(values, cdf, config), fields(n = values.len()))]
pub fn kolmogorov_smirnov<F>(values: &[f64], cdf: F, config: &GofConfig) -> Result<GofResult>
where
    F: Fn(f64) -> f64,
{
    if values.is_empty() {
        return Err(Error::empty_input("Kolmogorov-Smirnov test"));
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err(Error::InvalidInput("sample contains NaN".to_string()));
    }

    let statistic = ks_statistic(values, cdf);
    let critical = config.ks_coefficient / (values.len() as f64).sqrt();
    let passed = statistic <= critical;
    debug!(statistic, critical, passed, "Kolmogorov-Smirnov test");

    Ok(GofResult {
        statistic,
        passed,
        critical_value: critical,
        degrees_of_freedom: None,
    })
}
