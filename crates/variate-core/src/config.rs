//! Iteration limits and numerical tolerances

use serde::{Deserialize, Serialize};

/// Maximum number of trials for rejection samplers.
pub const MAX_TRIALS: usize = 1000;

/// Maximum number of iterations for series, continued fractions and root finders.
pub const MAX_ITER: usize = 100;

/// Relative convergence tolerance of the special functions.
pub const EPS: f64 = 1e-15;

/// Floor applied to continued-fraction denominators.
pub const DELTA: f64 = 1e-30;

/// Default relative tolerance on the location of a root.
pub const ROOT_TOLERANCE: f64 = 1e-12;

/// Caps on the bounded iterative algorithms.
///
/// Every rejection loop and every iterative solver in the library is bounded.
/// Running out of trials is reported as [`crate::Error::Convergence`], never
/// retried. Root solvers take their settings from here through
/// [`RootSettings::from_limits`](crate::algorithms::RootSettings::from_limits);
/// distributions that sample by rejection or by root finding accept a copy
/// through their `with_limits` builders.
///
/// # Example
///
/// ```
/// use variate_core::config::IterationLimits;
///
/// let limits = IterationLimits::default().with_max_trials(5000);
/// assert_eq!(limits.max_trials, 5000);
/// assert_eq!(limits.max_iter, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationLimits {
    /// Trials allowed to a rejection sampler before giving up
    pub max_trials: usize,
    /// Iterations allowed to series, continued fractions and root finders
    pub max_iter: usize,
    /// Relative tolerance on the location of a root
    pub tolerance: f64,
}

impl Default for IterationLimits {
    fn default() -> Self {
        Self {
            max_trials: MAX_TRIALS,
            max_iter: MAX_ITER,
            tolerance: ROOT_TOLERANCE,
        }
    }
}

impl IterationLimits {
    /// Set the rejection trial cap
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        assert!(max_trials > 0, "max_trials must be positive");
        self.max_trials = max_trials;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        assert!(max_iter > 0, "max_iter must be positive");
        self.max_iter = max_iter;
        self
    }

    /// Set the relative tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        assert!(
            tolerance > 0.0 && tolerance < 1.0,
            "tolerance must be in (0, 1)"
        );
        self.tolerance = tolerance;
        self
    }
}
