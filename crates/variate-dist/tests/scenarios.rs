//! End-to-end behavior on concrete distributions

mod common;

use approx::assert_abs_diff_eq;
use variate_core::AliasTable;
use variate_dist::prelude::*;

#[test]
fn test_exponential_unit_rate() {
    let d = Exponential::new(1.0).unwrap();
    assert_eq!(d.cdf(0.0), 0.0);
    assert_abs_diff_eq!(d.cdf(2f64.ln()), 0.5, epsilon = 1e-12);
    assert_eq!(d.pdf(0.0), 1.0);
}

#[test]
fn test_standard_normal() {
    let d = Normal::new(0.0, 1.0).unwrap();
    assert_eq!(d.cdf(0.0), 0.5);
    assert_abs_diff_eq!(d.pdf(0.0), 0.398_942_3, epsilon = 1e-7);
}

#[test]
fn test_bernoulli() {
    let d = Bernoulli::new(0.3).unwrap();
    assert_eq!(d.pdf(1.0), 0.3);
    assert_eq!(d.pdf(0.0), 0.7);
    assert_eq!(d.cdf(0.0), 0.7);
    assert_eq!(d.cdf(1.0), 1.0);
}

#[test]
fn test_poisson_sample_passes_chi_square() {
    common::init_tracing();
    let d = Poisson::new(5.0).unwrap();
    let runs = 4000;
    let mut passes = 0;
    for seed in 0..runs {
        let mut rng = Xoshiro128Plus::from_seed_u32(seed);
        let sample = d.sample_n(&mut rng, 1000).unwrap();
        passes += usize::from(d.test(&sample).unwrap().passed);
    }
    // pass rate of at least 0.9 within two standard errors
    let rate = passes as f64 / f64::from(runs);
    let standard_error = (rate * (1.0 - rate) / f64::from(runs)).sqrt();
    assert!(rate + 2.0 * standard_error >= 0.9, "pass rate {rate}");
}

#[test]
fn test_uniform_sample_against_uniform_and_exponential() {
    let uniform = Uniform::new(0.0, 1.0).unwrap();
    let exponential = Exponential::new(1.0).unwrap();
    let mut rng = Xoshiro128Plus::from_seed_str("ks scenario");
    let sample = uniform.sample_n(&mut rng, 1000).unwrap();
    assert!(uniform.test(&sample).unwrap().passed);
    assert!(!exponential.test(&sample).unwrap().passed);
}

#[test]
fn test_alias_table_uniform_weights() {
    let table = AliasTable::new(&[1.0, 1.0, 1.0, 1.0]).unwrap();
    let mut rng = Xoshiro128Plus::from_seed_u32(40);
    let mut counts = [0usize; 4];
    for _ in 0..40_000 {
        counts[table.sample(&mut rng)] += 1;
    }
    for c in counts {
        let frequency = c as f64 / 40_000.0;
        assert!((0.23..=0.27).contains(&frequency), "{frequency}");
    }
}

#[test]
fn test_alias_table_exactness_by_chi_square() {
    let weights = [5.0, 1.0, 0.5, 2.5, 1.0];
    let categorical = Categorical::new(&weights, 0).unwrap();
    let mut rng = Xoshiro128Plus::from_seed_u32(100);
    let sample = categorical.sample_n(&mut rng, 100_000).unwrap();
    let total: f64 = weights.iter().sum();
    for (k, w) in weights.iter().enumerate() {
        let frequency = sample.iter().filter(|&&x| x == k as f64).count() as f64 / 1e5;
        assert!((frequency - w / total).abs() < 0.01);
    }

    // two parameters leave df = 2 for five categories, so a true sample
    // fails about one run in twenty
    let runs = 40;
    let passes = (0..runs)
        .filter(|&seed| {
            let mut rng = Xoshiro128Plus::from_seed_u32(500 + seed);
            let sample = categorical.sample_n(&mut rng, 20_000).unwrap();
            categorical.test(&sample).unwrap().passed
        })
        .count();
    assert!(passes >= 33, "passed {passes}/{runs}");
}

#[test]
fn test_parameter_errors_name_constraint() {
    let err = Gamma::new(-1.0, 1.0).unwrap_err();
    assert_eq!(err.to_string(), "Invalid parameter: alpha > 0 (alpha = -1)");
    assert!(matches!(Beta::new(1.0, 0.0), Err(Error::InvalidParameter(_))));
    assert!(matches!(
        Categorical::new(&[1.0, -1.0], 0),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_same_seed_same_sample() {
    let d = Lindley::new(0.7).unwrap();
    let mut a = Xoshiro128Plus::from_seed_str("lindley");
    let mut b = Xoshiro128Plus::from_seed_str("lindley");
    assert_eq!(d.sample_n(&mut a, 100).unwrap(), d.sample_n(&mut b, 100).unwrap());
}

#[test]
fn test_any_rand_generator_drives_sampling() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(9);
    let d = Beta::new(2.0, 3.0).unwrap();
    let sample = d.sample_n(&mut rng, 2000).unwrap();
    assert!(d.test(&sample).unwrap().passed);
}
