//! Numerical algorithms shared by the samplers and distributions

pub mod root;
pub mod summation;

pub use root::{bracket, brent, invert_cdf, RootSettings};
pub use summation::neumaier_sum;
