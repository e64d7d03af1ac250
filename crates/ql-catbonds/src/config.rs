//! Declarative model configuration.
//!
//! A [`CatRiskConfig`] names a model and its parameters; [`build`] validates
//! it and returns the matching [`CatRisk`] as a trait object. With the
//! `serde` feature the configuration reads from JSON (or any serde format):
//!
//! ```json
//! { "model": "beta", "max_loss": 1000.0, "years": 10.0,
//!   "mean": 10.0, "std_dev": 57.0, "seed": 7 }
//! ```
//!
//! [`build`]: CatRiskConfig::build

use ql_core::{Real, Result};
use ql_time::Date;

use crate::beta_risk::BetaRisk;
use crate::cat_risk::{CatEvent, CatRisk};
use crate::event_set::EventSet;

/// Parameters of a catastrophe risk model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "snake_case"))]
pub enum CatRiskConfig {
    /// Replay of a recorded event set.
    EventSet {
        /// Date-sorted events.
        events: Vec<CatEvent>,
        /// Start of the observation span.
        events_start: Date,
        /// End (exclusive) of the observation span.
        events_end: Date,
    },
    /// Poisson arrivals with Beta severities.
    Beta {
        /// Largest single-event loss.
        max_loss: Real,
        /// Average number of years between events.
        years: Real,
        /// Mean annual aggregate loss.
        mean: Real,
        /// Standard deviation of the annual aggregate loss.
        std_dev: Real,
        /// Base seed; the model default when absent.
        #[cfg_attr(feature = "serde", serde(default))]
        seed: Option<u64>,
    },
}

impl CatRiskConfig {
    /// Validate the parameters and build the model.
    pub fn build(&self) -> Result<Box<dyn CatRisk>> {
        match self {
            CatRiskConfig::EventSet {
                events,
                events_start,
                events_end,
            } => Ok(Box::new(EventSet::new(
                events.as_slice(),
                *events_start,
                *events_end,
            )?)),
            CatRiskConfig::Beta {
                max_loss,
                years,
                mean,
                std_dev,
                seed,
            } => {
                let risk = BetaRisk::new(*max_loss, *years, *mean, *std_dev)?;
                Ok(Box::new(match seed {
                    Some(seed) => risk.with_seed(*seed),
                    None => risk,
                }))
            }
        }
    }
}
