//! Generic rejection sampling

use crate::config::MAX_TRIALS;
use crate::error::{Error, Result};
use crate::rng::RandomSource;
use tracing::warn;

/// Draw proposals until one is accepted.
///
/// `propose` draws a candidate from the proposal distribution and
/// `accept_probability` maps it to an acceptance probability in `[0, 1]`. A
/// candidate `x` is kept when a fresh uniform falls below
/// `accept_probability(x)`.
///
/// # Errors
///
/// Propagates errors from `propose`; returns [`Error::Convergence`] after
/// `max_trials` rejections.
///
/// # Example
///
/// ```
/// use variate_core::rejection::rejection_sample;
/// use variate_core::rng::{RandomSource, Xoshiro128Plus};
///
/// // triangular density 2x on [0, 1] from a uniform proposal
/// let mut rng = Xoshiro128Plus::from_seed_u32(10);
/// let x = rejection_sample(&mut rng, 1000, |r| Ok(r.next_f64()), |x| x).unwrap();
/// assert!((0.0..1.0).contains(&x));
/// ```
pub fn rejection_sample<R, P, A>(
    rng: &mut R,
    max_trials: usize,
    mut propose: P,
    accept_probability: A,
) -> Result<f64>
where
    R: RandomSource + ?Sized,
    P: FnMut(&mut R) -> Result<f64>,
    A: Fn(f64) -> f64,
{
    for _ in 0..max_trials {
        let x = propose(rng)?;
        if rng.next_f64() < accept_probability(x) {
            return Ok(x);
        }
    }
    warn!(max_trials, "rejection sampler exhausted its trials");
    Err(Error::convergence("rejection sampling", max_trials))
}

/// [`rejection_sample`] with the default trial cap.
pub fn rejection<R, P, A>(rng: &mut R, propose: P, accept_probability: A) -> Result<f64>
where
    R: RandomSource + ?Sized,
    P: FnMut(&mut R) -> Result<f64>,
    A: Fn(f64) -> f64,
{
    rejection_sample(rng, MAX_TRIALS, propose, accept_probability)
}
