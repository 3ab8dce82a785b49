//! Support intervals
//!
//! A support is an ordered pair of boundaries. Each boundary is a value plus a
//! closedness flag; infinite values stand for an unbounded side and are
//! always open.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One end of a support interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    /// Boundary value, `±∞` when unbounded
    pub value: f64,
    /// Whether the boundary value itself belongs to the support
    pub closed: bool,
}

impl Bound {
    /// Create a boundary. Infinite values are forced open.
    pub fn new(value: f64, closed: bool) -> Self {
        Self {
            value,
            closed: closed && value.is_finite(),
        }
    }

    /// A boundary that includes its value
    pub fn closed(value: f64) -> Self {
        Self::new(value, true)
    }

    /// A boundary that excludes its value
    pub fn open(value: f64) -> Self {
        Self::new(value, false)
    }

    /// True when the side is unbounded
    pub fn is_unbounded(&self) -> bool {
        self.value.is_infinite()
    }
}

/// Interval `(lower, upper)` on which a density may be non-zero.
///
/// # Example
///
/// ```
/// use variate_core::support::{Bound, Support};
///
/// let s = Support::new(Bound::closed(0.0), Bound::open(f64::INFINITY));
/// assert!(s.contains(0.0));
/// assert!(!s.contains(-1e-12));
/// assert_eq!(s.to_string(), "[0, inf)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    pub lower: Bound,
    pub upper: Bound,
}

impl Support {
    /// Create a support from its two boundaries. `lower.value` must not exceed
    /// `upper.value`.
    pub fn new(lower: Bound, upper: Bound) -> Self {
        debug_assert!(
            lower.value <= upper.value,
            "support lower bound {} exceeds upper bound {}",
            lower.value,
            upper.value
        );
        Self { lower, upper }
    }

    /// The whole real line
    pub fn real_line() -> Self {
        Self::new(Bound::open(f64::NEG_INFINITY), Bound::open(f64::INFINITY))
    }

    /// `[0, ∞)` or `(0, ∞)`
    pub fn positive(zero_closed: bool) -> Self {
        Self::new(Bound::new(0.0, zero_closed), Bound::open(f64::INFINITY))
    }

    /// Closed interval `[lower, upper]`
    pub fn closed(lower: f64, upper: f64) -> Self {
        Self::new(Bound::closed(lower), Bound::closed(upper))
    }

    /// True when `x` lies below the lower boundary (at it, for an open one).
    #[inline]
    pub fn below(&self, x: f64) -> bool {
        if self.lower.closed {
            x < self.lower.value
        } else {
            x <= self.lower.value
        }
    }

    /// True when `x` lies above the upper boundary (at it, for an open one).
    #[inline]
    pub fn above(&self, x: f64) -> bool {
        if self.upper.closed {
            x > self.upper.value
        } else {
            x >= self.upper.value
        }
    }

    /// True when `x` is inside the support
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        !x.is_nan() && !self.below(x) && !self.above(x)
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower.closed { '[' } else { '(' };
        let close = if self.upper.closed { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.lower.value, self.upper.value)
    }
}
