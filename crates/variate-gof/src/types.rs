//! Result and reference types

use serde::{Deserialize, Serialize};

/// Outcome of a goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GofResult {
    /// Chi-square sum or KS D statistic
    pub statistic: f64,
    /// Whether the statistic is within the critical value
    pub passed: bool,
    /// Threshold the statistic was compared against
    pub critical_value: f64,
    /// Degrees of freedom, for chi-square tests
    pub degrees_of_freedom: Option<usize>,
}

/// What a sample is tested against.
///
/// Discrete references are checked with the chi-square test and continuous
/// ones with the Kolmogorov–Smirnov test.
pub enum Reference<'a> {
    /// Probability mass function plus the number of fitted parameters, which
    /// is subtracted from the degrees of freedom
    Discrete {
        pmf: &'a dyn Fn(f64) -> f64,
        parameter_count: usize,
    },
    /// Cumulative distribution function
    Continuous { cdf: &'a dyn Fn(f64) -> f64 },
}

impl std::fmt::Debug for Reference<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discrete {
                parameter_count, ..
            } => f
                .debug_struct("Discrete")
                .field("parameter_count", parameter_count)
                .finish_non_exhaustive(),
            Self::Continuous { .. } => f.debug_struct("Continuous").finish_non_exhaustive(),
        }
    }
}
