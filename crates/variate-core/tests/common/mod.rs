//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded source for reproducible sampling tests
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Sample mean and unbiased variance
pub fn moments(xs: &[f64]) -> (f64, f64) {
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var)
}

/// Largest distance between the empirical cdf of `xs` and `cdf`
pub fn ks_distance(xs: &[f64], cdf: impl Fn(f64) -> f64) -> f64 {
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len() as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            ((i + 1) as f64 / n - f).abs().max((f - i as f64 / n).abs())
        })
        .fold(0.0, f64::max)
}
