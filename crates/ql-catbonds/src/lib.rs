//! # ql-catbonds
//!
//! Catastrophe risk simulation for cat bond modelling.
//!
//! - [`CatRisk`] / [`CatSimulation`]: model factory and yearly path iterator
//! - [`EventSet`]: deterministic replay of a recorded event set
//! - [`BetaRisk`]: Poisson arrivals with Beta-distributed severities
//! - [`NotionalRisk`]: turns simulated losses into principal reductions
//! - [`CatRiskConfig`]: declarative model selection
//!
//! ```
//! use ql_catbonds::{BetaRisk, CatRisk, CatSimulation};
//! use ql_time::Date;
//!
//! let risk = BetaRisk::new(1000.0, 10.0, 10.0, 60.0)?.with_seed(7);
//! let start = Date::from_ymd(2020, 1, 1)?;
//! let end = Date::from_ymd(2025, 1, 1)?;
//! let mut simulation = risk.new_simulation(start, end)?;
//!
//! let mut path = Vec::new();
//! let mut years = 0;
//! while simulation.next_path(&mut path) {
//!     years += 1;
//! }
//! assert_eq!(years, 5);
//! # Ok::<(), ql_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Simulation of Poisson/Beta catastrophe losses.
pub mod beta_risk;

/// Risk and simulation traits, events, and loss aggregation.
pub mod cat_risk;

/// Declarative model configuration.
pub mod config;

/// Replay of recorded event sets.
pub mod event_set;

/// Notional reduction on catastrophe losses.
pub mod notional_risk;

pub use beta_risk::{BetaRisk, BetaRiskSimulation, MAX_EVENTS_PER_YEAR};
pub use cat_risk::{
    accumulate_losses, annual_losses, path_loss, CatEvent, CatRisk, CatSimulation, YearlyPeriods,
};
pub use config::CatRiskConfig;
pub use event_set::{EventSet, EventSetSimulation};
pub use notional_risk::{
    DigitalNotionalRisk, NotionalPath, NotionalRisk, ProportionalNotionalRisk,
};
