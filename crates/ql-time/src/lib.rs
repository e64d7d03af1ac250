//! # ql-time
//!
//! Dates, time units, and the Actual/Actual (ISDA) day-count convention.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// `TimeUnit` enum.
pub mod time_unit;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use day_counter::{ActualActualIsda, DayCounter};
pub use time_unit::TimeUnit;
