//! Discrete distributions

mod binomial;
mod categorical;
mod discrete_uniform;
mod flory_schulz;
mod geometric;
mod poisson;

pub use binomial::{Binomial, MAX_TRIALS as BINOMIAL_MAX_TRIALS};
pub use categorical::{Bernoulli, Categorical, Zipf};
pub use discrete_uniform::DiscreteUniform;
pub use flory_schulz::FlorySchulz;
pub use geometric::Geometric;
pub use poisson::Poisson;
