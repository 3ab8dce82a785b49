//! Real branches of the Lambert W function

use crate::config::MAX_ITER;
use crate::error::{Error, Result};
use std::f64::consts::E;
use tracing::warn;

/// Branch point `-1/e`, where `W0` and `W-1` meet at -1.
const BRANCH_POINT: f64 = -1.0 / E;

/// Slack allowed below the branch point for rounding in `-1/e` itself.
const BRANCH_SLACK: f64 = 1e-15;

const TOLERANCE: f64 = 1e-14;

/// Principal branch `W0(z)` for `z ≥ -1/e`.
///
/// # Errors
///
/// [`Error::Domain`] below the branch point or for NaN, [`Error::Convergence`]
/// if Halley's iteration does not settle.
///
/// # Example
///
/// ```
/// use variate_core::special::lambert_w0;
///
/// // W0(e) = 1
/// let w = lambert_w0(std::f64::consts::E).unwrap();
/// assert!((w - 1.0).abs() < 1e-14);
/// ```
pub fn lambert_w0(z: f64) -> Result<f64> {
    if z.is_nan() || z < BRANCH_POINT - BRANCH_SLACK {
        return Err(Error::domain("lambert_w0", z));
    }
    if z <= BRANCH_POINT {
        return Ok(-1.0);
    }
    if z == 0.0 {
        return Ok(0.0);
    }
    if z == f64::INFINITY {
        return Ok(f64::INFINITY);
    }

    let w = if z < -0.25 {
        branch_series((2.0 * (E * z + 1.0)).sqrt())
    } else if z < 3.0 {
        z.ln_1p()
    } else {
        asymptotic(z.ln())
    };
    halley(z, w, "lambert_w0")
}

/// Lower branch `W-1(z)` for `-1/e ≤ z < 0`.
///
/// # Errors
///
/// [`Error::Domain`] outside `[-1/e, 0)` or for NaN, [`Error::Convergence`]
/// if Halley's iteration does not settle.
///
/// # Example
///
/// ```
/// use variate_core::special::lambert_wm1;
///
/// // W-1(-2 e^-2) = -2
/// let w = lambert_wm1(-2.0 * (-2.0f64).exp()).unwrap();
/// assert!((w + 2.0).abs() < 1e-12);
/// ```
pub fn lambert_wm1(z: f64) -> Result<f64> {
    if z.is_nan() || z < BRANCH_POINT - BRANCH_SLACK || z >= 0.0 {
        return Err(Error::domain("lambert_wm1", z));
    }
    if z <= BRANCH_POINT {
        return Ok(-1.0);
    }

    let w = if z < -0.25 {
        branch_series(-(2.0 * (E * z + 1.0)).sqrt())
    } else {
        asymptotic((-z).ln())
    };
    halley(z, w, "lambert_wm1")
}

/// Series about the branch point in `p = ±sqrt(2(ez + 1))`.
#[inline]
fn branch_series(p: f64) -> f64 {
    -1.0 + p - p * p / 3.0 + 11.0 / 72.0 * p * p * p
}

/// Leading terms of the asymptotic expansion, given `l1 = ln|z|`.
#[inline]
fn asymptotic(l1: f64) -> f64 {
    let l2 = l1.abs().ln();
    l1 - l2 + l2 / l1
}

fn halley(z: f64, mut w: f64, branch: &'static str) -> Result<f64> {
    for _ in 0..MAX_ITER {
        let ew = w.exp();
        let f = w * ew - z;
        let wp1 = w + 1.0;
        if wp1 == 0.0 {
            return Ok(w);
        }
        let dw = f / (ew * wp1 - (w + 2.0) * f / (2.0 * wp1));
        if !dw.is_finite() {
            break;
        }
        w -= dw;
        if dw.abs() <= TOLERANCE * (1.0 + w.abs()) {
            return Ok(w);
        }
    }
    warn!(z, w, branch, "Halley iteration did not converge");
    Err(Error::convergence(branch, MAX_ITER))
}
