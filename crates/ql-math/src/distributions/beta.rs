//! Beta distribution on `[0, 1]`.

use ql_core::{ensure_config, Real, Result};
use statrs::distribution::Beta;

/// Beta distribution with shape parameters `α` and `β`.
#[derive(Debug, Clone)]
pub struct BetaDistribution {
    alpha: Real,
    beta: Real,
}

impl BetaDistribution {
    /// Create a Beta(α, β) distribution.
    pub fn new(alpha: Real, beta: Real) -> Result<Self> {
        ensure_config!(
            alpha > 0.0 && alpha.is_finite(),
            "beta shape alpha must be positive and finite, got {alpha}"
        );
        ensure_config!(
            beta > 0.0 && beta.is_finite(),
            "beta shape beta must be positive and finite, got {beta}"
        );
        Beta::new(alpha, beta)
            .map_err(|e| ql_core::Error::Configuration(format!("beta distribution: {e}")))?;
        Ok(Self { alpha, beta })
    }

    /// Moment-matched Beta distribution with the given mean and variance.
    ///
    /// Requires `0 < mean < 1` and `0 < variance < mean·(1 − mean)`; with
    /// `ν = mean·(1 − mean)/variance − 1` the shapes are `α = mean·ν` and
    /// `β = (1 − mean)·ν`.
    pub fn from_moments(mean: Real, variance: Real) -> Result<Self> {
        ensure_config!(
            mean > 0.0 && mean < 1.0,
            "beta mean must lie in (0, 1), got {mean}"
        );
        let max_variance = mean * (1.0 - mean);
        ensure_config!(
            variance > 0.0 && variance < max_variance,
            "beta variance must lie in (0, {max_variance}) for mean {mean}, got {variance}"
        );
        let nu = max_variance / variance - 1.0;
        Self::new(mean * nu, (1.0 - mean) * nu)
    }

    /// Shape parameter α.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Shape parameter β.
    pub fn beta(&self) -> Real {
        self.beta
    }

    /// `α / (α + β)`.
    pub fn mean(&self) -> Real {
        self.alpha / (self.alpha + self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn uniform_special_case() {
        let d = BetaDistribution::from_moments(0.5, 1.0 / 12.0).unwrap();
        assert_relative_eq!(d.alpha(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.beta(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.mean(), 0.5);
    }

    #[test]
    fn from_moments_recovers_moments() {
        let d = BetaDistribution::from_moments(0.1, 0.0225).unwrap();
        assert_relative_eq!(d.alpha(), 0.3, epsilon = 1e-12);
        assert_relative_eq!(d.beta(), 2.7, epsilon = 1e-12);
        assert_relative_eq!(d.mean(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn from_moments_rejects_impossible_variance() {
        assert!(BetaDistribution::from_moments(0.5, 0.25).is_err());
        assert!(BetaDistribution::from_moments(0.5, 0.0).is_err());
        assert!(BetaDistribution::from_moments(1.2, 0.01).is_err());
        assert!(BetaDistribution::new(-1.0, 2.0).is_err());
    }
}
