//! Root bracketing and solving
//!
//! Used to invert distribution functions that have no closed-form quantile.
//! [`bracket`] grows an interval until the function changes sign,
//! [`brent`] and [`invert_cdf`] then shrink it to a root.

use crate::config::IterationLimits;
use crate::error::{Error, Result};
use crate::support::Support;
use tracing::{debug, warn};

/// Growth factor of the bracketing search.
const SCALE: f64 = 1.618;

/// Stopping criteria for the root solvers.
///
/// The solvers stop once the bracket is narrower than `x_tol` relative to
/// the iterate, or once `|f| ≤ f_tol`. `f_tol` defaults to 0 so only an exact
/// zero ends the search early: an absolute threshold on a distribution
/// function stops far from the root wherever the function is flat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSettings {
    /// Relative tolerance on the root location
    pub x_tol: f64,
    /// Absolute tolerance on the function value
    pub f_tol: f64,
    /// Maximum number of solver iterations
    pub max_iter: usize,
    /// Maximum number of [`bracket`] expansions
    pub max_expansions: usize,
}

impl Default for RootSettings {
    fn default() -> Self {
        Self::from_limits(&IterationLimits::default())
    }
}

impl RootSettings {
    /// Settings derived from the library-wide limits.
    ///
    /// The solver gets twice `max_iter`, enough for plain bisection across
    /// the whole f64 range at the default; bracketing gets `max_iter`.
    pub fn from_limits(limits: &IterationLimits) -> Self {
        Self {
            x_tol: limits.tolerance,
            f_tol: 0.0,
            max_iter: 2 * limits.max_iter,
            max_expansions: limits.max_iter,
        }
    }

    /// Set the relative tolerance on the root location
    pub fn with_x_tol(mut self, x_tol: f64) -> Self {
        self.x_tol = x_tol;
        self
    }

    /// Set the absolute tolerance on the function value
    pub fn with_f_tol(mut self, f_tol: f64) -> Self {
        self.f_tol = f_tol;
        self
    }
}

/// Width below which an iterate around `x` counts as converged.
#[inline]
fn step_tolerance(x_tol: f64, x: f64) -> f64 {
    2.0 * f64::EPSILON * x.abs() + 0.5 * x_tol * x.abs() + f64::MIN_POSITIVE
}

/// Expand `[a0, b0]` until `f` takes opposite signs at its ends.
///
/// The side with the smaller `|f|` is pushed outwards by `1.618` times the
/// current width. Expansion never crosses the support: an open finite
/// boundary is approached through a shrinking offset instead of being
/// evaluated.
///
/// # Errors
///
/// [`Error::InvalidInput`] for an empty initial interval,
/// [`Error::Computation`] if `f` is NaN at an endpoint,
/// [`Error::Convergence`] if no sign change is found within
/// `settings.max_expansions` expansions.
pub fn bracket<F>(
    mut f: F,
    a0: f64,
    b0: f64,
    support: &Support,
    settings: &RootSettings,
) -> Result<(f64, f64)>
where
    F: FnMut(f64) -> f64,
{
    if a0 == b0 || a0.is_nan() || b0.is_nan() {
        return Err(Error::InvalidInput(format!(
            "cannot bracket from [{a0}, {b0}]"
        )));
    }

    let min = support.lower.value;
    let max = support.upper.value;
    let mut delta_a: f64 = if support.lower.closed { 0.0 } else { 1.0 };
    let mut delta_b: f64 = if support.upper.closed { 0.0 } else { 1.0 };

    let mut a = a0.min(b0);
    let mut b = a0.max(b0);
    let mut fa = f(a);
    let mut fb = f(b);

    for _ in 0..settings.max_expansions {
        if fa.is_nan() || fb.is_nan() {
            return Err(Error::non_finite("bracketed function"));
        }
        if fa * fb <= 0.0 {
            debug!(a, b, "root bracketed");
            return Ok((a, b));
        }

        let expansion = SCALE * (b - a);
        let grow_left = fa.abs() <= fb.abs();
        let grow_right = fa.abs() >= fb.abs();
        if grow_left {
            a = (a - expansion).max(min + delta_a.min((a - min) / 2.0));
            delta_a /= SCALE;
            fa = f(a);
        }
        if grow_right {
            b = (b + expansion).min(max - delta_b.min((max - b) / 2.0));
            delta_b /= SCALE;
            fb = f(b);
        }
    }

    warn!(a0, b0, a, b, "failed to bracket a root");
    Err(Error::convergence("bracket", settings.max_expansions))
}

/// Brent's method on a bracketing interval `[a, b]`.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `f(a)` and `f(b)` have the same sign,
/// [`Error::Convergence`] after `settings.max_iter` iterations.
///
/// # Example
///
/// ```
/// use variate_core::algorithms::root::{brent, RootSettings};
///
/// let root = brent(|x| x * x - 2.0, 0.0, 2.0, &RootSettings::default()).unwrap();
/// assert!((root - 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn brent<F>(mut f: F, a: f64, b: f64, settings: &RootSettings) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa.is_nan() || fb.is_nan() || (fa > 0.0) == (fb > 0.0) {
        return Err(Error::InvalidInput(format!(
            "root is not bracketed by [{a}, {b}]"
        )));
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..settings.max_iter {
        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = step_tolerance(settings.x_tol, b);
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb.abs() <= settings.f_tol {
            return Ok(b);
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // inverse quadratic interpolation, or secant when a == c
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol { d } else { tol.copysign(xm) };
        fb = f(b);
        if fb.is_nan() {
            return Err(Error::non_finite("brent iterate"));
        }
    }

    warn!(b, fb, "brent did not converge");
    Err(Error::convergence("brent", settings.max_iter))
}

/// Solve `cdf(x) = p` on `[lo, hi]` with Newton steps, falling back to
/// bisection whenever a step leaves the current bracket or the density
/// vanishes.
///
/// `lo` and `hi` must be finite with `cdf(lo) ≤ p ≤ cdf(hi)`; `x0` is the
/// starting estimate and is replaced by the midpoint if it lies outside.
///
/// # Example
///
/// ```
/// use variate_core::algorithms::root::{invert_cdf, RootSettings};
///
/// let cdf = |x: f64| 1.0 - (-x).exp();
/// let pdf = |x: f64| (-x).exp();
/// let x = invert_cdf(cdf, pdf, 0.5, 1.0, 0.0, 10.0, &RootSettings::default()).unwrap();
/// assert!((x - 2f64.ln()).abs() < 1e-12);
/// ```
pub fn invert_cdf<C, D>(
    cdf: C,
    pdf: D,
    p: f64,
    x0: f64,
    lo: f64,
    hi: f64,
    settings: &RootSettings,
) -> Result<f64>
where
    C: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
        return Err(Error::InvalidInput(format!(
            "invalid search interval [{lo}, {hi}]"
        )));
    }

    let mut lo = lo;
    let mut hi = hi;
    let mut x = if x0 > lo && x0 < hi { x0 } else { 0.5 * (lo + hi) };

    for _ in 0..settings.max_iter {
        let fx = cdf(x) - p;
        if fx.is_nan() {
            return Err(Error::non_finite("cdf"));
        }
        if fx.abs() <= settings.f_tol {
            return Ok(x);
        }
        if fx < 0.0 {
            lo = x;
        } else {
            hi = x;
        }

        let density = pdf(x);
        let newton = x - fx / density;
        let next = if density > 0.0 && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };

        if (next - x).abs() <= step_tolerance(settings.x_tol, next) {
            return Ok(next);
        }
        x = next;
    }

    warn!(p, x, "cdf inversion did not converge");
    Err(Error::convergence("invert_cdf", settings.max_iter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::Bound;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn settings() -> RootSettings {
        RootSettings::default()
    }

    #[test]
    fn test_bracket_expands_to_sign_change() {
        let (a, b) = bracket(|x| x - 100.0, 0.0, 1.0, &Support::real_line(), &settings()).unwrap();
        assert!(a <= 100.0 && b >= 100.0);
    }

    #[test]
    fn test_bracket_respects_closed_support() {
        let support = Support::closed(0.0, 1.0);
        let (a, b) = bracket(|x| x - 0.999, 0.2, 0.3, &support, &settings()).unwrap();
        assert!(a >= 0.0 && b <= 1.0);
        assert!(a <= 0.999 && b >= 0.999);
    }

    #[test]
    fn test_bracket_never_touches_open_bound() {
        // log is -inf at 0 and undefined below
        let support = Support::new(Bound::open(0.0), Bound::open(f64::INFINITY));
        let (a, b) = bracket(|x| x.ln() + 30.0, 1.0, 2.0, &support, &settings()).unwrap();
        assert!(a > 0.0);
        assert!(a.ln() + 30.0 <= 0.0 && b.ln() + 30.0 >= 0.0);
    }

    #[test]
    fn test_bracket_failures() {
        assert!(matches!(
            bracket(|x| x, 1.0, 1.0, &Support::real_line(), &settings()),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            bracket(|x| x * x + 1.0, -1.0, 1.0, &Support::real_line(), &settings()),
            Err(Error::Convergence { .. })
        ));
    }

    #[test]
    fn test_brent() {
        let settings = RootSettings::default();
        let root = brent(|x| x.cos() - x, 0.0, 1.0, &settings).unwrap();
        assert_abs_diff_eq!(root, 0.739_085_133_215_160_6, epsilon = 1e-11);

        let root = brent(|x| x.powi(3) - 2.0 * x - 5.0, 2.0, 3.0, &settings).unwrap();
        assert_abs_diff_eq!(root, 2.094_551_481_542_326_5, epsilon = 1e-11);

        assert!(brent(|x| x * x + 1.0, -1.0, 1.0, &settings).is_err());
    }

    #[test]
    fn test_brent_iteration_cap() {
        let settings = RootSettings {
            x_tol: 1e-300,
            f_tol: 0.0,
            max_iter: 3,
            max_expansions: 3,
        };
        let err = brent(|x| x.powi(3) - 2.0 * x - 5.0, 2.0, 3.0, &settings).unwrap_err();
        assert!(err.is_convergence());
    }

    #[test]
    fn test_brent_tiny_root_is_relative() {
        let root = brent(|x| x - 1e-12, 0.0, 1.0, &settings()).unwrap();
        assert_relative_eq!(root, 1e-12, max_relative = 1e-9);
    }

    #[test]
    fn test_brent_flat_tail_not_stopped_by_function_value() {
        // e^-x is below 1e-14 from x = 32.3 on, so an absolute threshold on
        // |f| would stop anywhere past that
        let target = 1e-20f64;
        let root = brent(|x| (-x).exp() - target, 0.0, 100.0, &settings()).unwrap();
        assert_relative_eq!(root, -target.ln(), max_relative = 1e-10);
    }

    #[test]
    fn test_settings_follow_iteration_limits() {
        let limits = IterationLimits::default().with_max_iter(7).with_tolerance(1e-6);
        let settings = RootSettings::from_limits(&limits);
        assert_eq!(settings.max_iter, 14);
        assert_eq!(settings.max_expansions, 7);
        assert_eq!(settings.x_tol, 1e-6);
        assert_eq!(settings.f_tol, 0.0);

        let err = bracket(|x| x - 1e6, 0.0, 1.0, &Support::real_line(), &settings).unwrap_err();
        assert!(matches!(
            err,
            Error::Convergence {
                algorithm: "bracket",
                iterations: 7
            }
        ));
    }

    #[test]
    fn test_invert_cdf_logistic() {
        let cdf = |x: f64| 1.0 / (1.0 + (-x).exp());
        let pdf = |x: f64| cdf(x) * (1.0 - cdf(x));
        for &p in &[1e-6, 0.01, 0.3, 0.5, 0.8, 0.999_999] {
            let x = invert_cdf(cdf, pdf, p, 0.0, -50.0, 50.0, &RootSettings::default()).unwrap();
            assert_abs_diff_eq!(x, (p / (1.0 - p)).ln(), epsilon = 1e-7);
        }
    }

    #[test]
    fn test_invert_cdf_zero_density_falls_back_to_bisection() {
        // uniform on [0, 1], density reported as zero everywhere
        let cdf = |x: f64| x.clamp(0.0, 1.0);
        let x = invert_cdf(cdf, |_| 0.0, 0.25, 0.9, 0.0, 1.0, &RootSettings::default()).unwrap();
        assert_abs_diff_eq!(x, 0.25, epsilon = 1e-10);
    }

    #[test]
    fn test_invert_cdf_rejects_infinite_interval() {
        let r = invert_cdf(|x| x, |_| 1.0, 0.5, 0.0, f64::NEG_INFINITY, 1.0, &RootSettings::default());
        assert!(matches!(r, Err(Error::InvalidInput(_))));
    }
}
