//! Probability distributions.
//!
//! Thin wrappers over `statrs` that validate their parameters through the
//! workspace error type instead of panicking.

/// Beta distribution and moment matching.
pub mod beta;
/// Poisson distribution.
pub mod poisson;

pub use beta::BetaDistribution;
pub use poisson::PoissonDistribution;
