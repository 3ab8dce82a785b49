//! Continuous distributions

mod beta;
mod exponential;
mod gamma;
mod generalized_exponential;
mod laplace;
mod lindley;
mod normal;
mod raised_cosine;
mod slash;
mod uniform;
mod weibull;

pub use beta::Beta;
pub use exponential::Exponential;
pub use gamma::{ChiSquared, Erlang, Gamma};
pub use generalized_exponential::GeneralizedExponential;
pub use laplace::Laplace;
pub use lindley::Lindley;
pub use normal::Normal;
pub use raised_cosine::RaisedCosine;
pub use slash::Slash;
pub use uniform::Uniform;
pub use weibull::{Rayleigh, Weibull};
