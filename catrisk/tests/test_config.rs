//! Models read from JSON and run through the façade.

use approx::assert_relative_eq;
use catrisk::catbonds::{accumulate_losses, annual_losses, CatRiskConfig};
use catrisk::math::Statistics;
use catrisk::time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn event_set_from_json() {
    let json = r#"{
        "model": "event_set",
        "events": [
            { "date": "2011-08-27", "loss": 400.0 },
            { "date": "2012-10-29", "loss": 1200.0 }
        ],
        "events_start": "2011-01-01",
        "events_end": "2013-01-01"
    }"#;
    let config: CatRiskConfig = serde_json::from_str(json).unwrap();
    let risk = config.build().unwrap();
    let mut sim = risk.new_simulation(date(2021, 1, 1), date(2025, 1, 1)).unwrap();
    assert_eq!(annual_losses(sim.as_mut()), vec![400.0, 1200.0, 400.0, 1200.0]);
}

#[test]
fn beta_model_from_json() {
    let json = r#"{
        "model": "beta",
        "max_loss": 1000.0,
        "years": 2.0,
        "mean": 100.0,
        "std_dev": 300.0,
        "seed": 11
    }"#;
    let config: CatRiskConfig = serde_json::from_str(json).unwrap();
    let a = config.build().unwrap();
    let b = config.build().unwrap();

    let mut stats = Statistics::new();
    let mut sim = a.new_simulation(date(2020, 1, 1), date(2120, 1, 1)).unwrap();
    assert_eq!(accumulate_losses(sim.as_mut(), &mut stats), 100);

    let mut replay = Statistics::new();
    let mut sim = b.new_simulation(date(2020, 1, 1), date(2120, 1, 1)).unwrap();
    accumulate_losses(sim.as_mut(), &mut replay);
    assert_relative_eq!(stats.mean().unwrap(), replay.mean().unwrap());
}

#[test]
fn rejects_unknown_models() {
    let json = r#"{ "model": "gumbel", "scale": 1.0 }"#;
    assert!(serde_json::from_str::<CatRiskConfig>(json).is_err());
}
