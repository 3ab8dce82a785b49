//! Probability distributions built on `variate-core`
//!
//! Every distribution implements the capability traits in [`traits`] and gets
//! the full [`Distribution`] interface from them: boundary-aware `pdf` and
//! `cdf`, survival and hazard functions, log-likelihood and information
//! criteria, quantiles and a goodness-of-fit `test` against its own pmf or
//! cdf.
//!
//! # Distributions
//!
//! - Continuous ([`continuous`]): uniform, normal, exponential, Laplace,
//!   gamma, Erlang, chi-squared, beta, Weibull, Rayleigh, Lindley,
//!   generalized exponential, raised cosine and slash.
//! - Discrete ([`discrete`]): categorical, Bernoulli, binomial, Poisson,
//!   geometric, discrete uniform, Zipf and Flory–Schulz.
//!
//! Constructors validate their parameters and return
//! [`Error::InvalidParameter`](variate_core::Error::InvalidParameter) naming
//! the violated constraint. A constructed distribution is immutable and can
//! be shared between threads.
//!
//! # Example
//!
//! ```rust
//! use variate_dist::prelude::*;
//!
//! let mut rng = Xoshiro128Plus::from_seed_str("docs");
//! let poisson = Poisson::new(5.0).unwrap();
//! let draws = poisson.sample_n(&mut rng, 1000).unwrap();
//! let result = poisson.test(&draws).unwrap();
//! println!("chi-square = {:.2}, passed = {}", result.statistic, result.passed);
//!
//! assert!(Gamma::new(-1.0, 1.0).is_err());
//! ```
//!
//! # Features
//!
//! - `parallel`: [`Distribution::sample_par`] draws large samples on the
//!   rayon thread pool.

pub mod continuous;
pub mod discrete;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod quantile;
pub mod traits;

pub use continuous::{
    Beta, ChiSquared, Erlang, Exponential, Gamma, GeneralizedExponential, Laplace, Lindley,
    Normal, RaisedCosine, Rayleigh, Slash, Uniform, Weibull,
};
pub use discrete::{
    Bernoulli, Binomial, Categorical, DiscreteUniform, FlorySchulz, Geometric, Poisson, Zipf,
};
pub use traits::{
    CdfEvaluable, DensityEvaluable, Distribution, Kind, Parameters, Sampleable, SupportBounded,
};

/// Commonly used items
pub mod prelude {
    pub use crate::continuous::*;
    pub use crate::discrete::*;
    pub use crate::traits::{
        CdfEvaluable, DensityEvaluable, Distribution, Kind, Sampleable, SupportBounded,
    };
    pub use variate_core::{Error, RandomSource, Result, Support, Xoshiro128Plus};
    pub use variate_gof::{GofConfig, GofResult};
}
