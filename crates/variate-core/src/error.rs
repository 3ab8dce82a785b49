//! Error types for variate
//!
//! A single error type is shared by every crate in the workspace. Parameter
//! validation failures and exhausted iterative algorithms are the only errors
//! a caller sees during normal use; evaluating a density outside its support
//! is a defined value, not an error.

use thiserror::Error;

/// Core error type for sampling and evaluation
#[derive(Error, Debug)]
pub enum Error {
    /// A distribution or kernel parameter violates its constraint
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A bounded iterative algorithm ran out of trials or iterations
    #[error("Convergence error: {algorithm} did not converge within {iterations} iterations")]
    Convergence {
        algorithm: &'static str,
        iterations: usize,
    },

    /// Argument outside the domain of a special function
    #[error("Domain error: {0}")]
    Domain(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a parameter error naming the violated constraint and the values
    /// that violated it.
    ///
    /// ```
    /// use variate_core::Error;
    ///
    /// let err = Error::parameter("alpha > 0", &[("alpha", -1.0)]);
    /// assert_eq!(err.to_string(), "Invalid parameter: alpha > 0 (alpha = -1)");
    /// ```
    pub fn parameter(constraint: &str, params: &[(&str, f64)]) -> Self {
        if params.is_empty() {
            return Self::InvalidParameter(constraint.to_string());
        }
        let values = params
            .iter()
            .map(|(name, value)| format!("{name} = {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        Self::InvalidParameter(format!("{constraint} ({values})"))
    }

    /// Create an error for an exhausted trial or iteration budget
    pub fn convergence(algorithm: &'static str, iterations: usize) -> Self {
        Self::Convergence {
            algorithm,
            iterations,
        }
    }

    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for an out-of-domain argument
    pub fn domain(function: &str, x: f64) -> Self {
        Self::Domain(format!("{function} is undefined at {x}"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// True for trial or iteration exhaustion
    pub fn is_convergence(&self) -> bool {
        matches!(self, Self::Convergence { .. })
    }
}

/// Check a parameter constraint, returning a descriptive error when it fails.
///
/// ```
/// use variate_core::error::ensure;
///
/// let sigma = 2.0;
/// assert!(ensure(sigma > 0.0, "sigma > 0", &[("sigma", sigma)]).is_ok());
/// assert!(ensure(-sigma > 0.0, "sigma > 0", &[("sigma", -sigma)]).is_err());
/// ```
pub fn ensure(condition: bool, constraint: &str, params: &[(&str, f64)]) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::parameter(constraint, params))
    }
}
