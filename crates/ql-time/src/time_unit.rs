//! `TimeUnit`: the step sizes accepted by [`Date::advance`](crate::Date::advance).

/// A calendar unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar months.
    Months,
    /// Calendar years (12 months).
    Years,
}
