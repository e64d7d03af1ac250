//! `DayCounter` trait and the Actual/Actual (ISDA) convention.
//!
//! A day counter turns a pair of dates into a number of days and a fraction
//! of a year. The catastrophe simulators use it to scale annual arrival rates
//! to sub-periods that are not exactly one year long.

use crate::date::{is_leap_year, Date};
use ql_core::{Real, Time};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Number of days between `d1` and `d2` according to this convention.
    ///
    /// Defaults to actual calendar days.
    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        d1.days_between(d2) as i64
    }

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/Actual (ISDA).
///
/// Days falling in a leap year count 1/366, the others 1/365. A span
/// covering whole calendar years therefore measures an exact integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualActualIsda;

impl ActualActualIsda {
    fn days_in_year(year: u16) -> Real {
        if is_leap_year(year) {
            366.0
        } else {
            365.0
        }
    }
}

impl DayCounter for ActualActualIsda {
    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        if d1 == d2 {
            return 0.0;
        }
        if d2 < d1 {
            return -self.year_fraction(d2, d1);
        }
        let (y1, y2) = (d1.year(), d2.year());
        if y1 == y2 {
            return self.day_count(d1, d2) as Real / Self::days_in_year(y1);
        }
        // Stub to the end of the first year, whole years in between, stub
        // from the start of the last year. Both boundaries are valid dates
        // because y1 < y2 lie inside the supported range.
        let days_left_in_first = match Date::from_ymd(y1 + 1, 1, 1) {
            Ok(jan1) => d1.days_between(jan1) as Real,
            Err(_) => return 0.0,
        };
        let days_into_last = match Date::from_ymd(y2, 1, 1) {
            Ok(jan1) => jan1.days_between(d2) as Real,
            Err(_) => return 0.0,
        };
        days_left_in_first / Self::days_in_year(y1)
            + (y2 - y1 - 1) as Real
            + days_into_last / Self::days_in_year(y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn isda_whole_years_are_integral() {
        let dc = ActualActualIsda;
        assert_abs_diff_eq!(
            dc.year_fraction(date(2015, 1, 1), date(2016, 1, 1)),
            1.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            dc.year_fraction(date(2016, 1, 1), date(2019, 1, 1)),
            3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn isda_is_antisymmetric() {
        let dc = ActualActualIsda;
        let (a, b) = (date(2015, 3, 10), date(2017, 8, 1));
        assert_abs_diff_eq!(dc.year_fraction(a, b), -dc.year_fraction(b, a), epsilon = 1e-12);
    }
}
