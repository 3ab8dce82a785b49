//! Goodness-of-fit tests for sampled data
//!
//! Two classical tests compare an empirical sample with a reference
//! distribution:
//!
//! - [`chi_square`] for discrete data, against a probability mass function.
//!   Critical values come from a literal 99% table or, optionally, from the
//!   exact chi-square quantile (see [`critical_values`]).
//! - [`kolmogorov_smirnov`] for continuous data, against a cumulative
//!   distribution function, using the asymptotic `1.628 / sqrt(n)` threshold.
//!
//! [`goodness_of_fit`] picks the test from a [`Reference`].
//!
//! # Example
//!
//! ```rust
//! use variate_gof::prelude::*;
//!
//! let sample: Vec<f64> = (0..200).map(|i| (i as f64 + 0.5) / 200.0).collect();
//! let cdf = |x: f64| x.clamp(0.0, 1.0);
//! let result = goodness_of_fit(
//!     &sample,
//!     &Reference::Continuous { cdf: &cdf },
//!     &GofConfig::default(),
//! )
//! .unwrap();
//! assert!(result.passed);
//! ```

pub mod chi_square;
pub mod config;
pub mod critical_values;
pub mod kolmogorov_smirnov;
pub mod types;

pub use chi_square::chi_square;
pub use config::{CriticalValueMethod, GofConfig};
pub use kolmogorov_smirnov::kolmogorov_smirnov;
pub use types::{GofResult, Reference};

use variate_core::Result;

/// Run the test matching `reference`: chi-square for a discrete reference,
/// Kolmogorov–Smirnov for a continuous one.
///
/// # Errors
///
/// See [`chi_square()`] and [`kolmogorov_smirnov()`].
pub fn goodness_of_fit(
    values: &[f64],
    reference: &Reference<'_>,
    config: &GofConfig,
) -> Result<GofResult> {
    match reference {
        Reference::Discrete {
            pmf,
            parameter_count,
        } => chi_square(values, pmf, *parameter_count, config),
        Reference::Continuous { cdf } => kolmogorov_smirnov(values, cdf, config),
    }
}

/// Commonly used items
pub mod prelude {
    pub use crate::chi_square::chi_square;
    pub use crate::config::{CriticalValueMethod, GofConfig};
    pub use crate::goodness_of_fit;
    pub use crate::kolmogorov_smirnov::kolmogorov_smirnov;
    pub use crate::types::{GofResult, Reference};
}
