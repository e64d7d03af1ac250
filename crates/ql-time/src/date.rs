//! `Date` type.
//!
//! Dates are stored as a serial number of days. The numbering follows the
//! spreadsheet convention used across the quant ecosystem: serial 367 is
//! January 1, 1901 and serial 36526 is January 1, 2000. The valid range is
//! 1901-01-01 to 2199-12-31.

use std::str::FromStr;

use crate::time_unit::TimeUnit;
use ql_core::errors::{Error, Result};

const MIN_YEAR: u16 = 1901;
const MAX_YEAR: u16 = 2199;

/// Offset between days-since-1970-01-01 and the serial numbering.
const SERIAL_OFFSET: i32 = 25_569;

/// A calendar date with day granularity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Earliest representable date: January 1, 1901.
    pub const MIN: Date = Date(days_from_civil(MIN_YEAR as i32, 1, 1) + SERIAL_OFFSET);

    /// Latest representable date: December 31, 2199.
    pub const MAX: Date = Date(days_from_civil(MAX_YEAR as i32, 12, 31) + SERIAL_OFFSET);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(
            days_from_civil(year as i32, month as i32, day as i32) + SERIAL_OFFSET,
        ))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Year (1901–2199).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// `(year, month, day)` in one conversion.
    pub fn ymd(&self) -> (u16, u8, u8) {
        let (y, m, d) = civil_from_days(self.0 - SERIAL_OFFSET);
        (y as u16, m as u8, d as u8)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` calendar days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
            .map_err(|_| Error::Date(format!("{self:?} + {n} days is out of range")))
    }

    /// Move by `n` units.
    ///
    /// Month and year steps keep the day of month, clamped to the length of
    /// the target month (Jan 31 + 1M = Feb 28/29, Feb 29 + 1Y = Feb 28).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Months => {
                let (y, m, d) = self.ymd();
                let months = y as i32 * 12 + (m as i32 - 1) + n;
                let new_y = months.div_euclid(12);
                let new_m = (months.rem_euclid(12) + 1) as u8;
                if !(MIN_YEAR as i32..=MAX_YEAR as i32).contains(&new_y) {
                    return Err(Error::Date(format!(
                        "{self:?} + {n} months is out of range"
                    )));
                }
                let new_y = new_y as u16;
                Date::from_ymd(new_y, new_m, d.min(days_in_month(new_y, new_m)))
            }
            TimeUnit::Years => self.advance(n * 12, TimeUnit::Months),
        }
    }

    /// Number of calendar days from `self` to `other` (positive if `other`
    /// is later).
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// ISO-8601 `YYYY-MM-DD` representation.
    pub fn to_iso_string(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{y:04}-{m:02}-{d:02}")
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Formatting & parsing ──────────────────────────────────────────────────────

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{d} {} {y}", MONTH_NAMES[m as usize - 1])
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::InvalidArgument(format!("cannot parse {s:?} as YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let y = parts.next().ok_or_else(bad)?.parse::<u16>().map_err(|_| bad())?;
        let m = parts.next().ok_or_else(bad)?.parse::<u8>().map_err(|_| bad())?;
        let d = parts.next().ok_or_else(bad)?.parse::<u8>().map_err(|_| bad())?;
        Date::from_ymd(y, m, d)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Days since 1970-01-01 of a proleptic Gregorian date (years >= 1).
const fn days_from_civil(y: i32, m: i32, d: i32) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = y / 400;
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
const fn civil_from_days(z: i32) -> (i32, i32, i32) {
    let z = z + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
