//! Catastrophe risk interfaces.
//!
//! A [`CatRisk`] is an immutable model that can be asked for any number of
//! independent [`CatSimulation`]s, each bound to one `[start, end)` window.
//! A simulation hands out one path per yearly sub-period of its window:
//!
//! ```text
//! [start, start+1Y) [start+1Y, start+2Y) ... [start+kY, end)
//! ```
//!
//! The last sub-period is shorter than a year when the window is not a
//! whole number of years.

use ql_core::{Real, Result, Size};
use ql_math::Statistics;
use ql_time::{Date, TimeUnit};

// ── Events ────────────────────────────────────────────────────────────────────

/// A single catastrophe occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatEvent {
    /// Date of the event.
    pub date: Date,
    /// Loss amount, in the currency unit of the bond's trigger.
    pub loss: Real,
}

impl CatEvent {
    /// Create an event.
    pub fn new(date: Date, loss: Real) -> Self {
        Self { date, loss }
    }
}

impl From<(Date, Real)> for CatEvent {
    fn from((date, loss): (Date, Real)) -> Self {
        Self { date, loss }
    }
}

// ── Traits ────────────────────────────────────────────────────────────────────

/// A stateful generator of loss paths over one simulation window.
///
/// Instances are single-owner: the cursor or RNG they carry is mutated by
/// every call. Run simulations in parallel by asking the [`CatRisk`] for one
/// simulation per worker.
pub trait CatSimulation: Send {
    /// Fill `path` with the events of the next yearly sub-period, sorted by
    /// date.
    ///
    /// Returns `false`, leaving `path` empty, once the window is exhausted.
    fn next_path(&mut self, path: &mut Vec<CatEvent>) -> bool;

    /// The `[start, end)` sub-period the next call to
    /// [`next_path`](Self::next_path) will cover, or `None` when exhausted.
    fn period(&self) -> Option<(Date, Date)>;
}

/// A catastrophe risk model: a reusable factory of simulations.
pub trait CatRisk: std::fmt::Debug + Send + Sync {
    /// Create a fresh simulation over `[start, end)`.
    fn new_simulation(&self, start: Date, end: Date) -> Result<Box<dyn CatSimulation>>;
}

// ── Sub-periods ───────────────────────────────────────────────────────────────

/// The yearly sub-periods of a `[start, end)` window.
///
/// Sub-period `k` starts at `start + k` years, always measured from `start`
/// so that a February 29 start comes back on leap years.
#[derive(Debug, Clone)]
pub struct YearlyPeriods {
    start: Date,
    end: Date,
    next: i32,
}

impl YearlyPeriods {
    /// Sub-periods of `[start, end)`. Empty when `end <= start`.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            next: 0,
        }
    }

    /// Window start.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Window end.
    pub fn end(&self) -> Date {
        self.end
    }

    /// The sub-period [`Iterator::next`] would return, without consuming it.
    pub fn peek(&self) -> Option<(Date, Date)> {
        let period_start = self
            .start
            .advance(self.next, TimeUnit::Years)
            .ok()
            .filter(|d| *d < self.end)?;
        // Past the end of the supported date range means past `end` as well.
        let period_end = self
            .start
            .advance(self.next + 1, TimeUnit::Years)
            .map_or(self.end, |d| d.min(self.end));
        Some((period_start, period_end))
    }
}

impl Iterator for YearlyPeriods {
    type Item = (Date, Date);

    fn next(&mut self) -> Option<Self::Item> {
        let period = self.peek()?;
        self.next += 1;
        Some(period)
    }
}

// ── Loss aggregation ──────────────────────────────────────────────────────────

/// Total loss of a path.
pub fn path_loss(path: &[CatEvent]) -> Real {
    path.iter().map(|e| e.loss).sum()
}

/// Drain `simulation`, returning the total loss of every path in order.
pub fn annual_losses(simulation: &mut dyn CatSimulation) -> Vec<Real> {
    let mut path = Vec::new();
    let mut losses = Vec::new();
    while simulation.next_path(&mut path) {
        losses.push(path_loss(&path));
    }
    losses
}

/// Drain `simulation` into `stats`, one sample per path. Returns the number
/// of paths.
pub fn accumulate_losses(simulation: &mut dyn CatSimulation, stats: &mut Statistics) -> Size {
    let mut path = Vec::new();
    let mut paths = 0;
    while simulation.next_path(&mut path) {
        stats.add(path_loss(&path));
        paths += 1;
    }
    paths
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn whole_years() {
        let periods: Vec<_> = YearlyPeriods::new(date(2015, 1, 1), date(2017, 1, 1)).collect();
        assert_eq!(
            periods,
            vec![
                (date(2015, 1, 1), date(2016, 1, 1)),
                (date(2016, 1, 1), date(2017, 1, 1)),
            ]
        );
    }

    #[test]
    fn trailing_partial_period() {
        let periods: Vec<_> = YearlyPeriods::new(date(2015, 1, 2), date(2016, 1, 5)).collect();
        assert_eq!(
            periods,
            vec![
                (date(2015, 1, 2), date(2016, 1, 2)),
                (date(2016, 1, 2), date(2016, 1, 5)),
            ]
        );
    }

    #[test]
    fn empty_and_short_windows() {
        let d = date(2015, 6, 1);
        assert_eq!(YearlyPeriods::new(d, d).count(), 0);
        assert_eq!(YearlyPeriods::new(d, d - 1).count(), 0);
        assert_eq!(
            YearlyPeriods::new(d, d + 10).collect::<Vec<_>>(),
            vec![(d, d + 10)]
        );
    }

    #[test]
    fn leap_day_start_does_not_drift() {
        let mut periods = YearlyPeriods::new(date(2016, 2, 29), date(2021, 1, 1));
        assert_eq!(periods.peek(), Some((date(2016, 2, 29), date(2017, 2, 28))));
        let starts: Vec<_> = periods.by_ref().map(|(s, _)| s).collect();
        assert_eq!(starts[3], date(2019, 2, 28));
        assert_eq!(starts[4], date(2020, 2, 29));
        assert_eq!(periods.peek(), None);
    }

    #[test]
    fn window_ending_at_the_last_supported_date() {
        let periods: Vec<_> = YearlyPeriods::new(date(2198, 6, 1), Date::MAX).collect();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[1], (date(2199, 6, 1), Date::MAX));
    }

    #[test]
    fn path_loss_sums_events() {
        let path = [
            CatEvent::new(date(2015, 2, 1), 100.0),
            CatEvent::from((date(2015, 7, 1), 50.0)),
        ];
        assert_eq!(path_loss(&path), 150.0);
        assert_eq!(path_loss(&[]), 0.0);
    }
}
