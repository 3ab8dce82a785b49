//! Utility functions for working with samples

/// Sort data into a new vector, leaving the input untouched.
///
/// NaN values are placed at the end.
///
/// # Examples
///
/// ```rust
/// use variate_core::utils::sorted;
///
/// let data = vec![3.0, f64::NAN, 1.0, 2.0];
/// let s = sorted(&data);
/// assert_eq!(&s[..3], &[1.0, 2.0, 3.0]);
/// assert!(s[3].is_nan());
/// assert_eq!(data[0], 3.0);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
    sorted
}
