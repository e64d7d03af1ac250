//! Parametric catastrophe risk: Poisson arrivals with Beta-distributed
//! severities.
//!
//! The model is calibrated from an observed annual loss distribution. With
//! `N ~ Poisson(λ)` events a year and severities `X = max_loss · B`,
//! `B ~ Beta(α, β)`, the aggregate annual loss `S` is compound Poisson:
//!
//! ```text
//! E[S]   = λ · E[X]
//! Var[S] = λ · E[X²]
//! ```
//!
//! `λ = 1 / years` fixes the arrival rate (one event per `years` on
//! average); the two moment equations then give the severity mean and
//! variance, and those pin `α` and `β`.

use std::sync::atomic::{AtomicU64, Ordering};

use ql_core::{ensure, ensure_config, Error, Real, Result};
use ql_math::distributions::BetaDistribution;
use ql_math::random_numbers::{derive_seed, MersenneTwisterUniformRng, DEFAULT_SEED};
use ql_time::{ActualActualIsda, Date, DayCounter};
use rand::Rng;
use rand_distr::{Distribution, Gamma, Poisson};
use tracing::{debug, trace};

use crate::cat_risk::{CatEvent, CatRisk, CatSimulation, YearlyPeriods};

/// Largest accepted arrival rate, in events per year.
pub const MAX_EVENTS_PER_YEAR: Real = 1.0e4;

// ── BetaRisk ──────────────────────────────────────────────────────────────────

/// Stochastic catastrophe risk model: Poisson arrival of events with
/// Beta-distributed losses scaled by `max_loss`.
#[derive(Debug)]
pub struct BetaRisk {
    max_loss: Real,
    lambda: Real,
    severity: BetaDistribution,
    seed: u64,
    simulations: AtomicU64,
}

impl BetaRisk {
    /// Calibrate the model.
    ///
    /// - `max_loss`: scale of the severity distribution (largest possible
    ///   single-event loss)
    /// - `years`: average number of years between events
    /// - `mean`: mean of the annual aggregate loss
    /// - `std_dev`: standard deviation of the annual aggregate loss
    ///
    /// # Errors
    /// A configuration error if any input is non-positive or not finite, if
    /// `1 / years` exceeds [`MAX_EVENTS_PER_YEAR`], if the implied mean event
    /// loss `mean · years` is not below `max_loss`,
    /// or if the implied severity variance is not attainable by a Beta
    /// distribution with that mean.
    pub fn new(max_loss: Real, years: Real, mean: Real, std_dev: Real) -> Result<Self> {
        for (name, value) in [
            ("maximum loss", max_loss),
            ("years", years),
            ("mean", mean),
            ("standard deviation", std_dev),
        ] {
            ensure_config!(
                value > 0.0 && value.is_finite(),
                "{name} must be positive and finite, got {value}"
            );
        }
        let lambda = 1.0 / years;
        ensure_config!(
            lambda <= MAX_EVENTS_PER_YEAR,
            "one event every {years} years exceeds {MAX_EVENTS_PER_YEAR} events a year"
        );
        let severity_mean = mean / lambda;
        ensure_config!(
            severity_mean < max_loss,
            "mean {mean} over {years} years implies a mean event loss of {severity_mean}, \
             which must be less than the maximum loss {max_loss}"
        );
        let severity_variance = std_dev * std_dev / lambda - severity_mean * severity_mean;
        ensure_config!(
            severity_variance > 0.0,
            "standard deviation {std_dev} is too small for mean {mean} over {years} years: \
             implied event loss variance {severity_variance} is not positive"
        );
        let severity = BetaDistribution::from_moments(
            severity_mean / max_loss,
            severity_variance / (max_loss * max_loss),
        )
        .map_err(|e| {
            Error::Configuration(format!(
                "standard deviation {std_dev} is impossible to achieve with mean {mean} \
                 and maximum loss {max_loss}: {e}"
            ))
        })?;

        Ok(Self {
            max_loss,
            lambda,
            severity,
            seed: DEFAULT_SEED,
            simulations: AtomicU64::new(0),
        })
    }

    /// Use `seed` as the base seed of every simulation this model creates.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.simulations = AtomicU64::new(0);
        self
    }

    /// Largest possible single-event loss.
    pub fn max_loss(&self) -> Real {
        self.max_loss
    }

    /// Expected number of events per year.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    /// Shape α of the normalised severity.
    pub fn alpha(&self) -> Real {
        self.severity.alpha()
    }

    /// Shape β of the normalised severity.
    pub fn beta(&self) -> Real {
        self.severity.beta()
    }

    /// Expected loss of a single event.
    pub fn expected_severity(&self) -> Real {
        self.max_loss * self.severity.mean()
    }

    /// Base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Clone for BetaRisk {
    fn clone(&self) -> Self {
        Self {
            max_loss: self.max_loss,
            lambda: self.lambda,
            severity: self.severity.clone(),
            seed: self.seed,
            simulations: AtomicU64::new(self.simulations.load(Ordering::Relaxed)),
        }
    }
}

impl CatRisk for BetaRisk {
    /// Each simulation draws from its own generator. Its seed is derived
    /// from the model seed and the number of simulations created so far, so
    /// two models built with the same seed hand out the same sequence of
    /// simulations.
    fn new_simulation(&self, start: Date, end: Date) -> Result<Box<dyn CatSimulation>> {
        let index = self.simulations.fetch_add(1, Ordering::Relaxed);
        let seed = derive_seed(self.seed, index);
        debug!(
            %start,
            %end,
            lambda = self.lambda,
            alpha = self.alpha(),
            beta = self.beta(),
            seed,
            "new beta risk simulation"
        );
        let simulation = BetaRiskSimulation::new(
            start,
            end,
            self.max_loss,
            self.lambda,
            self.alpha(),
            self.beta(),
            seed,
        )?;
        Ok(Box::new(simulation))
    }
}

// ── BetaRiskSimulation ────────────────────────────────────────────────────────

/// Monte Carlo path generator for [`BetaRisk`].
#[derive(Debug, Clone)]
pub struct BetaRiskSimulation {
    max_loss: Real,
    lambda: Real,
    periods: YearlyPeriods,
    day_counter: ActualActualIsda,
    rng: MersenneTwisterUniformRng,
    gamma_alpha: Gamma<Real>,
    gamma_beta: Gamma<Real>,
}

impl BetaRiskSimulation {
    /// Create a simulation over `[start, end)` with an explicit seed.
    ///
    /// # Errors
    /// A precondition error if `start > end`; a configuration error for
    /// non-positive `max_loss`, `alpha`, or `beta`, or for `lambda` outside
    /// `[0, MAX_EVENTS_PER_YEAR]`.
    pub fn new(
        start: Date,
        end: Date,
        max_loss: Real,
        lambda: Real,
        alpha: Real,
        beta: Real,
        seed: u64,
    ) -> Result<Self> {
        ensure!(
            start <= end,
            "simulation start {start} is after its end {end}"
        );
        ensure_config!(
            max_loss > 0.0 && max_loss.is_finite(),
            "maximum loss must be positive and finite, got {max_loss}"
        );
        ensure_config!(
            (0.0..=MAX_EVENTS_PER_YEAR).contains(&lambda),
            "arrival rate must lie in [0, {MAX_EVENTS_PER_YEAR}], got {lambda}"
        );
        let gamma = |shape: Real| {
            Gamma::new(shape, 1.0).map_err(|e| {
                Error::Configuration(format!("invalid severity shape {shape}: {e}"))
            })
        };
        Ok(Self {
            max_loss,
            lambda,
            periods: YearlyPeriods::new(start, end),
            day_counter: ActualActualIsda,
            rng: MersenneTwisterUniformRng::new(seed),
            gamma_alpha: gamma(alpha)?,
            gamma_beta: gamma(beta)?,
        })
    }

    /// One severity draw, `max_loss · X / (X + Y)` with `X ~ Γ(α)` and
    /// `Y ~ Γ(β)`.
    pub fn generate_beta(&mut self) -> Real {
        let x = self.gamma_alpha.sample(&mut self.rng);
        let y = self.gamma_beta.sample(&mut self.rng);
        if x + y > 0.0 {
            self.max_loss * x / (x + y)
        } else {
            0.0
        }
    }

    fn event_count(&mut self, mean: Real) -> u64 {
        if mean <= 0.0 {
            return 0;
        }
        // `mean` is bounded by the rate checked in `new`.
        let Ok(poisson) = Poisson::new(mean) else {
            debug_assert!(false, "invalid Poisson mean {mean}");
            return 0;
        };
        let n: Real = poisson.sample(&mut self.rng);
        n as u64
    }
}

impl CatSimulation for BetaRiskSimulation {
    fn next_path(&mut self, path: &mut Vec<CatEvent>) -> bool {
        path.clear();
        let Some((period_start, period_end)) = self.periods.next() else {
            return false;
        };

        let day_count = self.day_counter.day_count(period_start, period_end);
        let year_fraction = self.day_counter.year_fraction(period_start, period_end);
        let n = self.event_count(self.lambda * year_fraction);
        for _ in 0..n {
            // Strictly before `period_end`, itself a valid date.
            let date = period_start + self.rng.gen_range(0..day_count) as i32;
            let loss = self.generate_beta();
            path.push(CatEvent::new(date, loss));
        }
        path.sort_by_key(|e| e.date);

        trace!(
            %period_start,
            %period_end,
            year_fraction,
            events = path.len(),
            "beta risk path"
        );
        true
    }

    fn period(&self) -> Option<(Date, Date)> {
        self.periods.peek()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
