//! Numerical core for sampling and evaluating probability distributions
//!
//! This crate holds the pieces every distribution is built from:
//!
//! - **Random sources** ([`rng`]): the [`RandomSource`] trait, implemented for
//!   every `rand` generator, and the seedable [`Xoshiro128Plus`].
//! - **Special functions** ([`special`]): gamma, log-gamma, incomplete gamma
//!   and beta, error function and the real Lambert W branches.
//! - **Standard variate kernels** ([`kernels`]): Box–Muller normal,
//!   Marsaglia–Tsang gamma, exponential and two-regime Poisson samplers.
//! - **Alias tables** ([`alias`]) for O(1) weighted discrete sampling.
//! - **Rejection sampling** ([`rejection`]) and **root finding**
//!   ([`algorithms`]) for distributions without a closed-form sampler.
//!
//! Every rejection loop and iterative solver is bounded (see [`config`]).
//! Running out of iterations is reported as [`Error::Convergence`].
//!
//! # Example
//!
//! ```rust
//! use variate_core::prelude::*;
//!
//! let mut rng = Xoshiro128Plus::from_seed_u32(42);
//! let x = kernels::gamma(&mut rng, 2.0, 1.0).unwrap();
//! assert!(x > 0.0);
//!
//! let table = AliasTable::new(&[1.0, 3.0]).unwrap();
//! let i = table.sample(&mut rng);
//! assert!(i < 2);
//! ```

pub mod algorithms;
pub mod alias;
pub mod config;
pub mod error;
pub mod kernels;
pub mod rejection;
pub mod rng;
pub mod special;
pub mod support;
pub mod utils;

pub use alias::AliasTable;
pub use config::IterationLimits;
pub use error::{Error, Result};
pub use rng::{RandomSource, Xoshiro128Plus};
pub use support::{Bound, Support};

/// Commonly used items
pub mod prelude {
    pub use crate::alias::AliasTable;
    pub use crate::config::IterationLimits;
    pub use crate::error::{Error, Result};
    pub use crate::kernels;
    pub use crate::rng::{RandomSource, Xoshiro128Plus};
    pub use crate::support::{Bound, Support};
}
