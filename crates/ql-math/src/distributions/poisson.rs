//! Poisson distribution.

use ql_core::{ensure_config, Real, Result};
use statrs::distribution::{Discrete, Poisson};

/// Poisson distribution with mean `lambda`.
#[derive(Debug, Clone)]
pub struct PoissonDistribution {
    dist: Poisson,
}

impl PoissonDistribution {
    /// Create a Poisson distribution with mean `lambda > 0`.
    pub fn new(lambda: Real) -> Result<Self> {
        ensure_config!(
            lambda > 0.0 && lambda.is_finite(),
            "poisson mean must be positive and finite, got {lambda}"
        );
        let dist = Poisson::new(lambda)
            .map_err(|e| ql_core::Error::Configuration(format!("poisson distribution: {e}")))?;
        Ok(Self { dist })
    }

    /// `P(N = k)`.
    pub fn pmf(&self, k: u64) -> Real {
        self.dist.pmf(k)
    }
}
