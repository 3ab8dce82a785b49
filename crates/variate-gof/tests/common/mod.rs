#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Inverse-transform draws from an exponential with the given rate.
pub fn exponential_sample(rng: &mut ChaCha8Rng, rate: f64, n: usize) -> Vec<f64> {
    use rand::Rng;
    (0..n).map(|_| -(1.0 - rng.gen::<f64>()).ln() / rate).collect()
}

/// Draws from Binomial(trials, p) by counting successes.
pub fn binomial_sample(rng: &mut ChaCha8Rng, trials: u32, p: f64, n: usize) -> Vec<f64> {
    use rand::Rng;
    (0..n)
        .map(|_| (0..trials).filter(|_| rng.gen::<f64>() < p).count() as f64)
        .collect()
}
