//! Risky notional models.
//!
//! A cat bond's principal is reduced when cumulative catastrophe losses
//! breach its trigger. A [`NotionalRisk`] turns one simulated loss path into
//! the [`NotionalPath`] of remaining principal over that period.

use ql_core::{ensure_config, Real, Result};
use ql_time::Date;

use crate::cat_risk::CatEvent;

// ── NotionalPath ──────────────────────────────────────────────────────────────

/// Remaining notional, as a fraction of the original, over time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotionalPath {
    /// `(date, remaining_rate)` pairs in date order.
    reductions: Vec<(Date, Real)>,
}

impl NotionalPath {
    /// A path with the full notional outstanding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the full notional.
    pub fn reset(&mut self) {
        self.reductions.clear();
    }

    /// Record that from `date` on only `new_rate` of the notional remains.
    ///
    /// Reductions must be added in date order.
    pub fn add_reduction(&mut self, date: Date, new_rate: Real) {
        debug_assert!(
            self.reductions.last().map_or(true, |&(d, _)| d <= date),
            "reductions must be added in date order"
        );
        self.reductions.push((date, new_rate));
    }

    /// Fraction of the notional outstanding on `date`.
    pub fn notional_rate(&self, date: Date) -> Real {
        let applied = self.reductions.partition_point(|&(d, _)| d <= date);
        match applied {
            0 => 1.0,
            n => self.reductions[n - 1].1,
        }
    }

    /// Fraction of the notional lost by the end of the path.
    pub fn loss(&self) -> Real {
        self.reductions.last().map_or(0.0, |&(_, rate)| 1.0 - rate)
    }

    /// The recorded reductions.
    pub fn reductions(&self) -> &[(Date, Real)] {
        &self.reductions
    }
}

// ── NotionalRisk ──────────────────────────────────────────────────────────────

/// Maps catastrophe losses onto notional reductions.
pub trait NotionalRisk: std::fmt::Debug + Send + Sync {
    /// Rebuild `path` from the date-sorted `events`.
    fn update_path(&self, events: &[CatEvent], path: &mut NotionalPath);
}

/// Binary trigger: the whole notional is lost on the first date cumulative
/// losses exceed `threshold`.
#[derive(Debug, Clone)]
pub struct DigitalNotionalRisk {
    threshold: Real,
}

impl DigitalNotionalRisk {
    /// Create a digital trigger at `threshold`.
    pub fn new(threshold: Real) -> Result<Self> {
        ensure_config!(
            threshold >= 0.0 && threshold.is_finite(),
            "trigger threshold must be non-negative and finite, got {threshold}"
        );
        Ok(Self { threshold })
    }

    /// Loss level that triggers the default.
    pub fn threshold(&self) -> Real {
        self.threshold
    }
}

impl NotionalRisk for DigitalNotionalRisk {
    fn update_path(&self, events: &[CatEvent], path: &mut NotionalPath) {
        path.reset();
        let mut losses = 0.0;
        for e in events {
            losses += e.loss;
            if losses > self.threshold {
                path.add_reduction(e.date, 0.0);
                return;
            }
        }
    }
}

/// Layered trigger: between `attachment` and `exhaustion` the notional
/// shrinks linearly with cumulative losses.
///
/// ```text
/// remaining = clamp((exhaustion − losses) / (exhaustion − attachment), 0, 1)
/// ```
#[derive(Debug, Clone)]
pub struct ProportionalNotionalRisk {
    attachment: Real,
    exhaustion: Real,
}

impl ProportionalNotionalRisk {
    /// Create a layer `[attachment, exhaustion]`.
    pub fn new(attachment: Real, exhaustion: Real) -> Result<Self> {
        ensure_config!(
            attachment >= 0.0 && attachment.is_finite(),
            "attachment must be non-negative and finite, got {attachment}"
        );
        ensure_config!(
            exhaustion > attachment && exhaustion.is_finite(),
            "exhaustion ({exhaustion}) must exceed attachment ({attachment})"
        );
        Ok(Self {
            attachment,
            exhaustion,
        })
    }

    /// Loss level where the notional starts to erode.
    pub fn attachment(&self) -> Real {
        self.attachment
    }

    /// Loss level where the notional is gone.
    pub fn exhaustion(&self) -> Real {
        self.exhaustion
    }
}

impl NotionalRisk for ProportionalNotionalRisk {
    fn update_path(&self, events: &[CatEvent], path: &mut NotionalPath) {
        path.reset();
        let mut losses = 0.0;
        for e in events {
            losses += e.loss;
            if losses <= self.attachment {
                continue;
            }
            let rate = ((self.exhaustion - losses) / (self.exhaustion - self.attachment))
                .clamp(0.0, 1.0);
            path.add_reduction(e.date, rate);
            if rate == 0.0 {
                return;
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn notional_path_steps() {
        let mut path = NotionalPath::new();
        assert_eq!(path.loss(), 0.0);
        assert_eq!(path.notional_rate(date(2020, 6, 1)), 1.0);

        path.add_reduction(date(2020, 3, 1), 0.7);
        path.add_reduction(date(2020, 6, 1), 0.3);

        assert_eq!(path.notional_rate(date(2020, 2, 29)), 1.0);
        assert_eq!(path.notional_rate(date(2020, 3, 1)), 0.7);
        assert_eq!(path.notional_rate(date(2020, 5, 31)), 0.7);
        assert_eq!(path.notional_rate(date(2021, 1, 1)), 0.3);
        assert_abs_diff_eq!(path.loss(), 0.7, epsilon = 1e-12);

        path.reset();
        assert!(path.reductions().is_empty());
    }

    #[test]
    fn digital_trigger() {
        let risk = DigitalNotionalRisk::new(100.0).unwrap();
        let mut path = NotionalPath::new();

        let events = [
            CatEvent::new(date(2020, 3, 1), 60.0),
            CatEvent::new(date(2020, 6, 1), 50.0),
            CatEvent::new(date(2020, 9, 1), 30.0),
        ];
        risk.update_path(&events, &mut path);
        assert_eq!(path.reductions(), &[(date(2020, 6, 1), 0.0)]);
        assert_eq!(path.loss(), 1.0);

        risk.update_path(&events[..1], &mut path);
        assert_eq!(path.loss(), 0.0);
    }

    #[test]
    fn digital_threshold_is_exclusive() {
        let risk = DigitalNotionalRisk::new(100.0).unwrap();
        let mut path = NotionalPath::new();
        risk.update_path(&[CatEvent::new(date(2020, 3, 1), 100.0)], &mut path);
        assert_eq!(path.loss(), 0.0);
    }

    #[test]
    fn proportional_layer() {
        let risk = ProportionalNotionalRisk::new(500.0, 1500.0).unwrap();
        let mut path = NotionalPath::new();

        risk.update_path(&[CatEvent::new(date(2020, 6, 1), 1000.0)], &mut path);
        assert_abs_diff_eq!(path.loss(), 0.5, epsilon = 1e-12);

        risk.update_path(&[CatEvent::new(date(2020, 6, 1), 2000.0)], &mut path);
        assert_abs_diff_eq!(path.loss(), 1.0, epsilon = 1e-12);

        risk.update_path(&[CatEvent::new(date(2020, 6, 1), 300.0)], &mut path);
        assert_eq!(path.loss(), 0.0);
    }

    #[test]
    fn proportional_layer_erodes_step_by_step() {
        let risk = ProportionalNotionalRisk::new(500.0, 1500.0).unwrap();
        let mut path = NotionalPath::new();
        let events = [
            CatEvent::new(date(2020, 3, 1), 400.0),
            CatEvent::new(date(2020, 6, 1), 200.0),
            CatEvent::new(date(2020, 9, 1), 1000.0),
            CatEvent::new(date(2020, 11, 1), 50.0),
        ];
        risk.update_path(&events, &mut path);
        // 600 → 0.9 remaining, 1600 → exhausted; later events change nothing.
        assert_eq!(path.reductions().len(), 2);
        assert_abs_diff_eq!(path.notional_rate(date(2020, 7, 1)), 0.9, epsilon = 1e-12);
        assert_eq!(path.notional_rate(date(2020, 12, 31)), 0.0);
    }

    #[test]
    fn rejects_bad_layers() {
        assert!(ProportionalNotionalRisk::new(500.0, 500.0).is_err());
        assert!(ProportionalNotionalRisk::new(-1.0, 500.0).is_err());
        assert!(DigitalNotionalRisk::new(f64::INFINITY).is_err());
    }
}
