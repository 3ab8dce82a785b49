#![allow(dead_code)]

use variate_dist::prelude::*;

/// Install a test subscriber; `RUST_LOG=variate_gof=debug` shows the test
/// statistics.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub type Zoo = Vec<(&'static str, Box<dyn Distribution>)>;

pub fn continuous_zoo() -> Zoo {
    vec![
        ("uniform", Box::new(Uniform::new(-2.0, 5.0).unwrap())),
        ("normal", Box::new(Normal::new(1.0, 2.0).unwrap())),
        ("exponential", Box::new(Exponential::new(1.5).unwrap())),
        ("laplace", Box::new(Laplace::new(-1.0, 0.5).unwrap())),
        ("gamma small shape", Box::new(Gamma::new(0.6, 2.0).unwrap())),
        ("gamma", Box::new(Gamma::new(4.5, 0.8).unwrap())),
        ("erlang", Box::new(Erlang::new(3.0, 2.0).unwrap())),
        ("chi-squared", Box::new(ChiSquared::new(5.0).unwrap())),
        ("beta", Box::new(Beta::new(2.0, 5.0).unwrap())),
        ("beta u-shaped", Box::new(Beta::new(0.5, 0.5).unwrap())),
        ("weibull", Box::new(Weibull::new(2.0, 1.5).unwrap())),
        ("rayleigh", Box::new(Rayleigh::new(0.8).unwrap())),
        ("lindley", Box::new(Lindley::new(1.3).unwrap())),
        (
            "generalized exponential",
            Box::new(GeneralizedExponential::new(0.5, 1.0, 2.0).unwrap()),
        ),
        ("raised cosine", Box::new(RaisedCosine::new(0.5, 1.5).unwrap())),
        ("slash", Box::new(Slash::new())),
    ]
}

pub fn discrete_zoo() -> Zoo {
    vec![
        (
            "categorical",
            Box::new(Categorical::new(&[0.1, 0.4, 0.2, 0.3], 2).unwrap()),
        ),
        ("bernoulli", Box::new(Bernoulli::new(0.3).unwrap())),
        ("binomial", Box::new(Binomial::new(20, 0.4).unwrap())),
        ("poisson", Box::new(Poisson::new(5.0).unwrap())),
        ("poisson large mean", Box::new(Poisson::new(60.0).unwrap())),
        ("geometric", Box::new(Geometric::new(0.5).unwrap())),
        ("discrete uniform", Box::new(DiscreteUniform::new(1, 8).unwrap())),
        ("zipf", Box::new(Zipf::new(1.2, 10).unwrap())),
        ("flory-schulz", Box::new(FlorySchulz::new(0.6).unwrap())),
    ]
}

/// Probabilities at which identities and consistency are checked.
pub fn probability_grid() -> Vec<f64> {
    (0..10).map(|i| 0.05 + 0.1 * i as f64).collect()
}

/// Composite Simpson rule on `[a, b]` with `steps` (even) panels.
pub fn simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, steps: usize) -> f64 {
    if a >= b {
        return 0.0;
    }
    let h = (b - a) / steps as f64;
    let inner: f64 = (1..steps)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(a + i as f64 * h)
        })
        .sum();
    (f(a) + inner + f(b)) * h / 3.0
}
