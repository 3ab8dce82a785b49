//! Probability distributions with samplers, densities and goodness-of-fit
//! tests.
//!
//! This crate re-exports the workspace members:
//!
//! - [`variate_core`]: random sources, special functions, variate kernels, alias
//!   tables and root finding
//! - [`variate_gof`]: Kolmogorov–Smirnov and chi-square goodness-of-fit tests
//! - [`variate_dist`]: the distribution catalogue and the [`Distribution`] trait
//!
//! # Example
//!
//! ```rust
//! use variate::prelude::*;
//!
//! let gamma = Gamma::new(2.0, 1.5).unwrap();
//! let mut rng = Xoshiro128Plus::from_seed_str("variate");
//! let sample = gamma.sample_n(&mut rng, 500).unwrap();
//!
//! assert!(sample.iter().all(|&x| x > 0.0));
//! assert!(gamma.quantile(0.5).unwrap() > 0.0);
//! let result = gamma.test(&sample).unwrap();
//! assert!(result.statistic >= 0.0);
//! ```

pub use variate_core;
pub use variate_dist;
pub use variate_gof;

pub use variate_core::{Error, RandomSource, Result, Support, Xoshiro128Plus};
pub use variate_dist::{Distribution, Kind};

/// Everything needed to build, sample and test distributions
pub mod prelude {
    pub use variate_dist::prelude::*;
    pub use variate_gof::Reference;
}
