//! Special functions used by densities, distribution functions and kernels
//!
//! Everything here is a pure function of its arguments. Series and continued
//! fractions stop after [`MAX_TERMS`] terms (more for the incomplete gamma
//! function at large shapes) and return their best estimate; the Lambert W
//! solvers report non-convergence as an error instead.

mod beta;
mod erf;
mod gamma;
mod incomplete_gamma;
mod lambert_w;

pub use beta::{beta, beta_incomplete, log_beta, regularized_beta_incomplete};
pub use erf::{erf, erfc};
pub use gamma::{gamma, log_binomial, log_gamma};
pub use incomplete_gamma::{
    gamma_lower_incomplete, gamma_lower_regularized, gamma_upper_incomplete,
    gamma_upper_regularized,
};
pub use lambert_w::{lambert_w0, lambert_wm1};

/// Term cap for the incomplete gamma and beta expansions.
///
/// The series for `P(s, x)` needs on the order of `sqrt(s)` terms near the
/// crossover; the incomplete gamma function raises its cap to `12 sqrt(s)`
/// when that exceeds this floor.
pub const MAX_TERMS: usize = 1000;

/// `x ln y`, taken as 0 when `x == 0` so that `0 ln 0` does not produce NaN.
///
/// ```
/// use variate_core::special::xlogy;
///
/// assert_eq!(xlogy(0.0, 0.0), 0.0);
/// assert!((xlogy(2.0, std::f64::consts::E) - 2.0).abs() < 1e-15);
/// ```
#[inline]
pub fn xlogy(x: f64, y: f64) -> f64 {
    if x == 0.0 && !y.is_nan() {
        0.0
    } else {
        x * y.ln()
    }
}
