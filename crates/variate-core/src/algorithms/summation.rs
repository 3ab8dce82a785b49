//! Compensated summation

/// Neumaier's variant of Kahan summation.
///
/// Tracks the low-order bits lost by each addition, including the case where
/// the incoming term is larger than the running sum.
///
/// # Example
///
/// ```
/// use variate_core::algorithms::neumaier_sum;
///
/// let values = [1.0, 1e100, 1.0, -1e100];
/// assert_eq!(neumaier_sum(values), 2.0);
/// assert_eq!(values.iter().sum::<f64>(), 0.0);
/// ```
pub fn neumaier_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for x in values {
        let t = sum + x;
        if f64::abs(sum) >= f64::abs(x) {
            compensation += (sum - t) + x;
        } else {
            compensation += (x - t) + sum;
        }
        sum = t;
    }
    // compensation is meaningless once the plain sum has left the finite range
    if sum.is_finite() {
        sum + compensation
    } else {
        sum
    }
}
