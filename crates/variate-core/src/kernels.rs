//! Standard variate generators
//!
//! Small exact or rejection-based samplers reused by the concrete
//! distributions. They draw uniforms only through [`RandomSource`], so a
//! seeded source makes them reproducible.
//!
//! Rejection loops are capped at [`MAX_TRIALS`] by default. Exhausting the cap
//! means the parameters are pathological (or the source is broken) and is
//! reported as [`Error::Convergence`]; it is never retried.

use crate::config::MAX_TRIALS;
use crate::error::{ensure, Error, Result};
use crate::rng::RandomSource;
use crate::special::log_gamma;
use std::f64::consts::PI;
use tracing::warn;

/// Below this rate Poisson variates are drawn by multiplying uniforms.
pub const POISSON_SMALL_MEAN: f64 = 30.0;

/// Standard normal variate by the Box–Muller transform.
#[inline]
pub fn standard_normal<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    // u in (0, 1] keeps the log finite
    let u = rng.next_open();
    let v = rng.next_f64();
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Normal variate with mean `mu` and standard deviation `sigma`.
///
/// # Example
///
/// ```
/// use variate_core::kernels::normal;
/// use variate_core::rng::Xoshiro128Plus;
///
/// let mut rng = Xoshiro128Plus::from_seed_u32(1);
/// let x = normal(&mut rng, 10.0, 0.5);
/// assert!(x.is_finite());
/// ```
#[inline]
pub fn normal<R: RandomSource + ?Sized>(rng: &mut R, mu: f64, sigma: f64) -> f64 {
    sigma * standard_normal(rng) + mu
}

/// Exponential variate with the given rate, by inversion.
#[inline]
pub fn exponential<R: RandomSource + ?Sized>(rng: &mut R, rate: f64) -> f64 {
    -rng.next_open().ln() / rate
}

/// `+1` with probability `p`, `-1` otherwise.
#[inline]
pub fn sign<R: RandomSource + ?Sized>(rng: &mut R, p: f64) -> f64 {
    if rng.next_f64() < p {
        1.0
    } else {
        -1.0
    }
}

/// Gamma variate with shape `alpha` and rate `beta`.
///
/// Uses Marsaglia and Tsang's squeeze-free rejection for `alpha > 1` and the
/// boost `Gamma(alpha + 1) · U^(1/alpha)` otherwise.
///
/// # Errors
///
/// [`Error::InvalidParameter`] unless both parameters are positive and
/// finite, [`Error::Convergence`] after [`MAX_TRIALS`] rejected proposals.
pub fn gamma<R: RandomSource + ?Sized>(rng: &mut R, alpha: f64, beta: f64) -> Result<f64> {
    gamma_bounded(rng, alpha, beta, MAX_TRIALS)
}

/// [`gamma`] with an explicit trial cap.
pub fn gamma_bounded<R: RandomSource + ?Sized>(
    rng: &mut R,
    alpha: f64,
    beta: f64,
    max_trials: usize,
) -> Result<f64> {
    ensure(
        alpha > 0.0 && alpha.is_finite(),
        "alpha > 0",
        &[("alpha", alpha)],
    )?;
    ensure(beta > 0.0 && beta.is_finite(), "beta > 0", &[("beta", beta)])?;

    if alpha <= 1.0 {
        let boosted = gamma_bounded(rng, alpha + 1.0, beta, max_trials)?;
        return Ok(boosted * rng.next_open().powf(1.0 / alpha));
    }

    let d = alpha - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    for _ in 0..max_trials {
        let z = standard_normal(rng);
        if z > -1.0 / c {
            let v = (1.0 + c * z).powi(3);
            let u = rng.next_open();
            if u.ln() < 0.5 * z * z + d * (1.0 - v + v.ln()) {
                return Ok(d * v / beta);
            }
        }
    }

    warn!(alpha, beta, max_trials, "gamma rejection sampler exhausted its trials");
    Err(Error::convergence("gamma rejection", max_trials))
}

/// Natural logarithm of a unit-rate gamma variate with shape `alpha`.
///
/// For `alpha < 1` the boost factor `U^(1/alpha)` is applied in log space,
/// so the result stays finite where the variate itself would underflow to 0.
///
/// # Errors
///
/// As [`gamma_bounded`].
pub fn log_gamma_variate<R: RandomSource + ?Sized>(
    rng: &mut R,
    alpha: f64,
    max_trials: usize,
) -> Result<f64> {
    if alpha < 1.0 {
        let boosted = gamma_bounded(rng, alpha + 1.0, 1.0, max_trials)?;
        Ok(boosted.ln() + rng.next_open().ln() / alpha)
    } else {
        Ok(gamma_bounded(rng, alpha, 1.0, max_trials)?.ln())
    }
}

/// Poisson variate with mean `lambda`.
///
/// Knuth's product-of-uniforms method below [`POISSON_SMALL_MEAN`], Atkinson's
/// logistic-envelope rejection at and above it.
///
/// # Errors
///
/// [`Error::InvalidParameter`] unless `lambda` is finite and non-negative,
/// [`Error::Convergence`] after [`MAX_TRIALS`] rejected proposals.
///
/// # Example
///
/// ```
/// use variate_core::kernels::poisson;
/// use variate_core::rng::Xoshiro128Plus;
///
/// let mut rng = Xoshiro128Plus::from_seed_u32(3);
/// let k = poisson(&mut rng, 4.0).unwrap();
/// assert!(k < 100);
/// ```
pub fn poisson<R: RandomSource + ?Sized>(rng: &mut R, lambda: f64) -> Result<u64> {
    poisson_bounded(rng, lambda, MAX_TRIALS)
}

/// [`poisson`] with an explicit trial cap.
pub fn poisson_bounded<R: RandomSource + ?Sized>(
    rng: &mut R,
    lambda: f64,
    max_trials: usize,
) -> Result<u64> {
    ensure(
        lambda >= 0.0 && lambda.is_finite(),
        "lambda >= 0",
        &[("lambda", lambda)],
    )?;

    if lambda < POISSON_SMALL_MEAN {
        poisson_knuth(rng, lambda, max_trials)
    } else {
        poisson_rejection(rng, lambda, max_trials)
    }
}

fn poisson_knuth<R: RandomSource + ?Sized>(
    rng: &mut R,
    lambda: f64,
    max_trials: usize,
) -> Result<u64> {
    let limit = (-lambda).exp();
    let mut product = 1.0;
    for k in 0..max_trials {
        product *= rng.next_f64();
        if product <= limit {
            return Ok(k as u64);
        }
    }
    warn!(lambda, max_trials, "Knuth Poisson sampler exhausted its trials");
    Err(Error::convergence("poisson product", max_trials))
}

fn poisson_rejection<R: RandomSource + ?Sized>(
    rng: &mut R,
    lambda: f64,
    max_trials: usize,
) -> Result<u64> {
    let c = 0.767 - 3.36 / lambda;
    let beta = PI / (3.0 * lambda).sqrt();
    let alpha = beta * lambda;
    let k = c.ln() - lambda - beta.ln();
    let log_lambda = lambda.ln();

    // negative candidates are redrawn and still count as trials
    for _ in 0..max_trials {
        let u = rng.next_f64();
        let x = (alpha - ((1.0 - u) / u).ln()) / beta;
        let n = (x + 0.5).floor();
        if n < 0.0 {
            continue;
        }

        let v = rng.next_open();
        let y = alpha - beta * x;
        let lhs = y + (v / (1.0 + y.exp()).powi(2)).ln();
        let rhs = k + n * log_lambda - log_gamma(n + 1.0);
        if lhs <= rhs {
            return Ok(n as u64);
        }
    }

    warn!(lambda, max_trials, "Poisson rejection sampler exhausted its trials");
    Err(Error::convergence("poisson rejection", max_trials))
}
