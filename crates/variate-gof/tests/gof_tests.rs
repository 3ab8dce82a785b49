mod common;

use common::{binomial_sample, exponential_sample, seeded};
use proptest::prelude::*;
use statrs::distribution::{Binomial, ContinuousCDF, Discrete, Exp};
use variate_gof::critical_values::{exact_critical_value, tabulated_critical_value};
use variate_gof::prelude::*;

#[test]
fn test_ks_accepts_matching_distribution() {
    let reference = Exp::new(2.0).unwrap();
    let cdf = |x: f64| reference.cdf(x);
    let mut passes = 0;
    for seed in 0..10 {
        let sample = exponential_sample(&mut seeded(seed), 2.0, 500);
        let r = kolmogorov_smirnov(&sample, cdf, &GofConfig::default()).unwrap();
        passes += usize::from(r.passed);
    }
    assert!(passes >= 9, "passed {passes}/10");
}

#[test]
fn test_ks_rejects_wrong_rate() {
    let reference = Exp::new(2.0).unwrap();
    let cdf = |x: f64| reference.cdf(x);
    let sample = exponential_sample(&mut seeded(7), 1.0, 2000);
    let r = kolmogorov_smirnov(&sample, cdf, &GofConfig::default()).unwrap();
    assert!(!r.passed, "D = {}", r.statistic);
}

#[test]
fn test_chi_square_accepts_matching_distribution() {
    let reference = Binomial::new(0.3, 10).unwrap();
    let pmf = |x: f64| reference.pmf(x as u64);
    let mut passes = 0;
    for seed in 0..10 {
        let sample = binomial_sample(&mut seeded(seed), 10, 0.3, 2000);
        let r = chi_square(&sample, pmf, 2, &GofConfig::default()).unwrap();
        passes += usize::from(r.passed);
    }
    assert!(passes >= 7, "passed {passes}/10");
}

#[test]
fn test_chi_square_rejects_shifted_distribution() {
    let reference = Binomial::new(0.3, 10).unwrap();
    let pmf = |x: f64| reference.pmf(x as u64);
    let sample = binomial_sample(&mut seeded(3), 10, 0.5, 2000);
    let r = chi_square(&sample, pmf, 2, &GofConfig::default()).unwrap();
    assert!(!r.passed, "statistic {}", r.statistic);
}

#[test]
fn test_exact_mode_uses_confidence() {
    let values = [0.0, 0.0, 0.0, 1.0];
    let pmf = |_: f64| 0.5;
    let config = GofConfig::default()
        .with_critical_values(CriticalValueMethod::Exact)
        .with_confidence(0.5);
    let r = chi_square(&values, pmf, 0, &config).unwrap();
    // median of chi-square(1)
    assert!((r.critical_value - 0.454_936).abs() < 1e-5);
    assert!(!r.passed);
}

#[test]
fn test_table_falls_back_beyond_range() {
    // 800 distinct values with uniform mass give df = 799
    let values: Vec<f64> = (0..800).map(f64::from).collect();
    let pmf = |_: f64| 1.0 / 800.0;
    let r = chi_square(&values, pmf, 0, &GofConfig::default()).unwrap();
    assert_eq!(r.degrees_of_freedom, Some(799));
    assert!(tabulated_critical_value(799).is_none());
    let exact = exact_critical_value(799, 0.99).unwrap();
    assert!((r.critical_value - exact).abs() < 1e-9);
    assert!(r.passed);
}

proptest! {
    #[test]
    fn ks_statistic_in_unit_interval(sample in prop::collection::vec(-10.0f64..10.0, 1..200)) {
        let cdf = |x: f64| 1.0 / (1.0 + (-x).exp());
        let r = kolmogorov_smirnov(&sample, cdf, &GofConfig::default()).unwrap();
        prop_assert!((0.0..=1.0).contains(&r.statistic));
    }

    #[test]
    fn ks_statistic_order_invariant(mut sample in prop::collection::vec(0.0f64..1.0, 1..100)) {
        let cdf = |x: f64| x;
        let a = kolmogorov_smirnov(&sample, cdf, &GofConfig::default()).unwrap().statistic;
        sample.reverse();
        let b = kolmogorov_smirnov(&sample, cdf, &GofConfig::default()).unwrap().statistic;
        prop_assert_eq!(a, b);
    }

    #[test]
    fn chi_square_statistic_non_negative(sample in prop::collection::vec(0u8..6, 1..300)) {
        let values: Vec<f64> = sample.into_iter().map(f64::from).collect();
        let r = chi_square(&values, |_| 1.0 / 6.0, 0, &GofConfig::default()).unwrap();
        prop_assert!(r.statistic >= 0.0);
        prop_assert!(r.degrees_of_freedom.unwrap_or(0) >= 1);
    }
}
