//! Running statistics accumulator.

use ql_core::{Real, Size};

/// Incremental accumulator for sample mean, variance, and extremes.
///
/// Uses Welford's update so long runs of simulated annual losses (mostly
/// zeros, occasionally very large) do not lose precision.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: Size,
    mean: Real,
    m2: Real,
    min: Real,
    max: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: Real::INFINITY,
            max: Real::NEG_INFINITY,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as Real;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Add every sample of an iterator.
    pub fn extend<I: IntoIterator<Item = Real>>(&mut self, samples: I) {
        for x in samples {
            self.add(x);
        }
    }

    /// Number of samples.
    pub fn samples(&self) -> Size {
        self.count
    }

    /// Sample mean, `None` when empty.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then_some(self.mean)
    }

    /// Unbiased sample variance, `None` for fewer than 2 samples.
    pub fn variance(&self) -> Option<Real> {
        (self.count > 1).then(|| self.m2 / (self.count - 1) as Real)
    }

    /// Sample standard deviation, `None` for fewer than 2 samples.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }

    /// Smallest sample, `None` when empty.
    pub fn minimum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.min)
    }

    /// Largest sample, `None` when empty.
    pub fn maximum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.max)
    }

    /// Reset the accumulator to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn basic_statistics() {
        let mut s = Statistics::new();
        s.extend([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.samples(), 5);
        assert_relative_eq!(s.mean().unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(s.variance().unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(s.std_dev().unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(s.minimum(), Some(1.0));
        assert_eq!(s.maximum(), Some(5.0));
    }

    #[test]
    fn empty_and_single() {
        let mut s = Statistics::default();
        assert!(s.mean().is_none());
        assert!(s.minimum().is_none());
        s.add(4.0);
        assert_eq!(s.mean(), Some(4.0));
        assert!(s.variance().is_none());
        s.reset();
        assert_eq!(s.samples(), 0);
    }

    #[test]
    fn sparse_large_samples_keep_precision() {
        let mut s = Statistics::new();
        for i in 0..10_000 {
            s.add(if i % 100 == 0 { 1.0e9 } else { 0.0 });
        }
        let p: f64 = 0.01;
        assert_relative_eq!(s.mean().unwrap(), 1.0e7, max_relative = 1e-10);
        let expected_var = 1.0e18 * p * (1.0 - p) * 10_000.0 / 9_999.0;
        assert_relative_eq!(s.variance().unwrap(), expected_var, max_relative = 1e-9);
    }
}
