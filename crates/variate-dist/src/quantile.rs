//! Numerical quantile search for distributions without a closed-form inverse

use tracing::{debug, warn};
use variate_core::algorithms::{bracket, brent, RootSettings};
use variate_core::config::IterationLimits;
use variate_core::{Error, Result, Support};

/// Growth factor of the discrete search.
const GOLDEN: f64 = 1.618;

/// Smallest integer `k` in the support with `cdf(k) ≥ p`.
///
/// Steps outwards from the lower bound with growing strides until the cdf
/// reaches `p`, then bisects over the integers in between. `cdf` must be the
/// boundary-aware cdf (0 below the support, 1 at its upper end).
///
/// # Errors
///
/// [`Error::Convergence`] if `p` is not reached within `limits.max_iter`
/// strides.
pub fn discrete_quantile<F>(
    cdf: F,
    support: &Support,
    p: f64,
    limits: &IterationLimits,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let max_iter = limits.max_iter;
    let lower = support.lower.value;
    let upper = support.upper.value;

    // invariant: cdf(lo) < p <= cdf(hi)
    let mut lo = if lower.is_finite() {
        if support.lower.closed {
            lower - 1.0
        } else {
            lower
        }
    } else {
        let mut lo = -1.0;
        let mut step = 1.0;
        let mut found = false;
        for _ in 0..max_iter {
            if cdf(lo) < p {
                found = true;
                break;
            }
            lo -= step;
            step = (step * GOLDEN).ceil();
        }
        if !found {
            return Err(Error::convergence("discrete quantile search", max_iter));
        }
        lo
    };

    let mut step = 1.0;
    let mut hi = None;
    for _ in 0..max_iter {
        let candidate = (lo + step).min(upper);
        if cdf(candidate) >= p {
            hi = Some(candidate);
            break;
        }
        lo = candidate;
        step = (step * GOLDEN).ceil();
    }
    let Some(mut hi) = hi else {
        warn!(p, lo, "discrete quantile search did not reach p");
        return Err(Error::convergence("discrete quantile search", max_iter));
    };

    while hi - lo > 1.0 {
        let mid = lo + ((hi - lo) / 2.0).floor();
        if cdf(mid) >= p {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(hi)
}

/// Solve `cdf(x) = p` over the support by bracketing then Brent's method.
///
/// The initial interval is the support itself when it is finite, otherwise a
/// unit interval against the finite bound (or around zero). Both stages
/// take their caps and tolerance from `limits`.
pub fn continuous_quantile<F>(
    cdf: F,
    support: &Support,
    p: f64,
    limits: &IterationLimits,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let lower = support.lower.value;
    let upper = support.upper.value;
    let (a0, b0) = match (lower.is_finite(), upper.is_finite()) {
        (true, true) => (lower, upper),
        (true, false) => (lower, lower + 1.0),
        (false, true) => (upper - 1.0, upper),
        (false, false) => (-1.0, 1.0),
    };

    let excess = |x: f64| cdf(x) - p;
    let settings = RootSettings::from_limits(limits);
    let (a, b) = bracket(excess, a0, b0, support, &settings)?;
    let x = brent(excess, a, b, &settings)?;
    debug!(p, x, "quantile by root finding");
    Ok(x)
}
