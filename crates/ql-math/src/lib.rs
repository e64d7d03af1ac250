//! # ql-math
//!
//! Mathematical utilities used by the risk simulators: a seedable
//! Mersenne-Twister generator, the Beta and Poisson distributions (via
//! statrs), and a running statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{BetaDistribution, PoissonDistribution};
pub use random_numbers::MersenneTwisterUniformRng;
pub use statistics::Statistics;
