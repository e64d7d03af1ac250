//! Deterministic replay of a historical (or synthetic) event set.
//!
//! The event set's `[events_start, events_end)` span is cut into template
//! years `[events_start + j·1Y, events_start + (j+1)·1Y)`, the last one
//! clipped to `events_end`. Sub-period `k` of a simulation replays template
//! year `k mod Y`, moving each event onto the same calendar position in the
//! sub-period. Windows longer than the template cycle through it again
//! from its first year.

use std::sync::Arc;

use ql_core::{ensure, ensure_config, Error, Result, Size};
use ql_time::{Date, TimeUnit};
use tracing::{debug, trace};

use crate::cat_risk::{CatEvent, CatRisk, CatSimulation, YearlyPeriods};

// ── EventSet ──────────────────────────────────────────────────────────────────

/// Catastrophe risk given by a fixed, date-sorted list of events observed
/// over `[events_start, events_end)`.
///
/// The list is shared with every simulation the set spawns; it is never
/// copied or modified.
#[derive(Debug, Clone)]
pub struct EventSet {
    events: Arc<[CatEvent]>,
    events_start: Date,
    events_end: Date,
}

impl EventSet {
    /// Create an event set.
    ///
    /// # Errors
    /// A configuration error if `events_start > events_end`, if the events
    /// are not sorted by date, if an event lies outside
    /// `[events_start, events_end)`, or if a loss is negative or not finite.
    pub fn new(
        events: impl Into<Arc<[CatEvent]>>,
        events_start: Date,
        events_end: Date,
    ) -> Result<Self> {
        let events = events.into();
        ensure_config!(
            events_start <= events_end,
            "event set start {events_start} is after its end {events_end}"
        );
        if let Some(i) = events.windows(2).position(|w| w[1].date < w[0].date) {
            return Err(Error::Configuration(format!(
                "events must be sorted by date: {} at position {} follows {}",
                events[i + 1].date,
                i + 1,
                events[i].date
            )));
        }
        for e in events.iter() {
            ensure_config!(
                events_start <= e.date && e.date < events_end,
                "event on {} lies outside [{events_start}, {events_end})",
                e.date
            );
            ensure_config!(
                e.loss >= 0.0 && e.loss.is_finite(),
                "event on {} has invalid loss {}",
                e.date,
                e.loss
            );
        }
        Ok(Self {
            events,
            events_start,
            events_end,
        })
    }

    /// The events, sorted by date.
    pub fn events(&self) -> &[CatEvent] {
        &self.events
    }

    /// Start of the observation span.
    pub fn events_start(&self) -> Date {
        self.events_start
    }

    /// End (exclusive) of the observation span.
    pub fn events_end(&self) -> Date {
        self.events_end
    }
}

impl CatRisk for EventSet {
    /// # Errors
    /// A precondition error if `start > end`, or if the observation span is
    /// shorter than one year and so cannot serve as a yearly template.
    fn new_simulation(&self, start: Date, end: Date) -> Result<Box<dyn CatSimulation>> {
        ensure!(
            start <= end,
            "simulation start {start} is after its end {end}"
        );
        let covers_a_year = self
            .events_start
            .advance(1, TimeUnit::Years)
            .is_ok_and(|d| d <= self.events_end);
        ensure!(
            covers_a_year,
            "event set span [{}, {}) is shorter than one year",
            self.events_start,
            self.events_end
        );
        debug!(
            %start,
            %end,
            events = self.events.len(),
            events_start = %self.events_start,
            events_end = %self.events_end,
            "new event set simulation"
        );
        Ok(Box::new(EventSetSimulation::new(
            Arc::clone(&self.events),
            self.events_start,
            self.events_end,
            start,
            end,
        )))
    }
}

// ── EventSetSimulation ────────────────────────────────────────────────────────

/// Replays an [`EventSet`] over a simulation window, one year at a time.
///
/// Given the same event set and window, two instances produce identical
/// path sequences.
#[derive(Debug, Clone)]
pub struct EventSetSimulation {
    events: Arc<[CatEvent]>,
    events_start: Date,
    events_end: Date,
    /// Number of template years `Y`.
    template_years: i32,
    periods: YearlyPeriods,
    /// Index of the next sub-period.
    year: i32,
    /// First event not yet scanned.
    cursor: Size,
}

impl EventSetSimulation {
    /// Create a replay of `events` (observed over
    /// `[events_start, events_end)` and sorted) over `[start, end)`.
    ///
    /// Prefer [`EventSet::new_simulation`], which validates its inputs.
    pub fn new(
        events: Arc<[CatEvent]>,
        events_start: Date,
        events_end: Date,
        start: Date,
        end: Date,
    ) -> Self {
        let template_years = YearlyPeriods::new(events_start, events_end).count().max(1);
        Self {
            events,
            events_start,
            events_end,
            template_years: i32::try_from(template_years).unwrap_or(i32::MAX),
            periods: YearlyPeriods::new(start, end),
            year: 0,
            cursor: 0,
        }
    }

    /// Number of template years the event set is cut into.
    pub fn template_years(&self) -> i32 {
        self.template_years
    }

    /// `[from, to)` bounds of template year `j`.
    fn template_year(&self, j: i32) -> (Date, Date) {
        let from = self
            .events_start
            .advance(j, TimeUnit::Years)
            .map_or(self.events_end, |d| d.min(self.events_end));
        let to = self
            .events_start
            .advance(j + 1, TimeUnit::Years)
            .map_or(self.events_end, |d| d.min(self.events_end));
        (from, to)
    }
}

impl CatSimulation for EventSetSimulation {
    fn next_path(&mut self, path: &mut Vec<CatEvent>) -> bool {
        path.clear();
        let Some((period_start, period_end)) = self.periods.next() else {
            return false;
        };
        let k = self.year;
        self.year += 1;

        let j = k.rem_euclid(self.template_years);
        if j == 0 {
            self.cursor = 0;
        }
        let (from, to) = self.template_year(j);

        // Template dates move by whole years into the sub-period's year,
        // then by the residual days between the two year starts.
        let years = i32::from(period_start.year()) - i32::from(from.year());
        let residual = from
            .advance(years, TimeUnit::Years)
            .map_or(0, |anchor| anchor.days_between(period_start));
        let full_year = period_start
            .advance(1, TimeUnit::Years)
            .is_ok_and(|d| d == period_end);
        let last_day = period_end - 1;

        while let Some(e) = self.events.get(self.cursor) {
            if e.date >= to {
                break;
            }
            self.cursor += 1;
            if e.date < from {
                continue;
            }
            let date = e
                .date
                .advance(years, TimeUnit::Years)
                .and_then(|d| d.add_days(residual))
                .map_or(period_end, |d| d.max(period_start));
            if date < period_end {
                path.push(CatEvent::new(date, e.loss));
            } else if full_year {
                // A leap template year is one day longer than the sub-period.
                path.push(CatEvent::new(last_day, e.loss));
            }
        }

        trace!(
            %period_start,
            %period_end,
            template_year = j,
            events = path.len(),
            "event set path"
        );
        true
    }

    fn period(&self) -> Option<(Date, Date)> {
        self.periods.peek()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
