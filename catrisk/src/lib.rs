//! # catrisk
//!
//! Catastrophe risk event simulation for cat bond modelling.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `ql-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! catrisk = "0.1"
//! ```
//!
//! ```rust
//! use catrisk::catbonds::{annual_losses, CatEvent, CatRisk, EventSet};
//! use catrisk::time::Date;
//!
//! let events = vec![CatEvent::new(Date::from_ymd(2012, 10, 29)?, 650.0)];
//! let risk = EventSet::new(
//!     events,
//!     Date::from_ymd(2010, 1, 1)?,
//!     Date::from_ymd(2015, 1, 1)?,
//! )?;
//! let mut simulation =
//!     risk.new_simulation(Date::from_ymd(2020, 1, 1)?, Date::from_ymd(2025, 1, 1)?)?;
//! let losses = annual_losses(simulation.as_mut());
//! assert_eq!(losses, vec![0.0, 0.0, 650.0, 0.0, 0.0]);
//! # Ok::<(), catrisk::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ql_core as core;

/// Dates, periods, and day counters.
pub use ql_time as time;

/// Distributions, random numbers, and sample statistics.
pub use ql_math as math;

/// Catastrophe risk models, simulations, and notional reduction.
pub use ql_catbonds as catbonds;
