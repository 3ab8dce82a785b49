//! Goodness-of-fit configuration

use serde::{Deserialize, Serialize};

/// Asymptotic KS coefficient for roughly 99% confidence.
pub const KS_COEFFICIENT: f64 = 1.628;

/// Where chi-square critical values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CriticalValueMethod {
    /// The literal 99% tables (see [`crate::critical_values`])
    #[default]
    Table,
    /// Exact chi-square quantiles at [`GofConfig::confidence`]
    Exact,
}

/// Settings shared by the chi-square and Kolmogorov–Smirnov tests.
///
/// The defaults reproduce the tabulated 99% chi-square thresholds and the
/// `1.628 / sqrt(n)` KS threshold.
///
/// # Example
///
/// ```
/// use variate_gof::{CriticalValueMethod, GofConfig};
///
/// let config = GofConfig::default()
///     .with_critical_values(CriticalValueMethod::Exact)
///     .with_confidence(0.95);
/// assert_eq!(config.confidence, 0.95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GofConfig {
    /// Source of chi-square critical values
    pub critical_values: CriticalValueMethod,
    /// Confidence level for exact chi-square critical values
    pub confidence: f64,
    /// KS test passes when `D ≤ ks_coefficient / sqrt(n)`
    pub ks_coefficient: f64,
}

impl Default for GofConfig {
    fn default() -> Self {
        Self {
            critical_values: CriticalValueMethod::Table,
            confidence: 0.99,
            ks_coefficient: KS_COEFFICIENT,
        }
    }
}

impl GofConfig {
    /// Select the chi-square critical value source
    pub fn with_critical_values(mut self, method: CriticalValueMethod) -> Self {
        self.critical_values = method;
        self
    }

    /// Set the confidence level used by exact critical values
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        assert!(
            confidence > 0.0 && confidence < 1.0,
            "confidence must be in (0, 1)"
        );
        self.confidence = confidence;
        self
    }

    /// Set the KS threshold coefficient
    pub fn with_ks_coefficient(mut self, coefficient: f64) -> Self {
        assert!(coefficient > 0.0, "KS coefficient must be positive");
        self.ks_coefficient = coefficient;
        self
    }
}
