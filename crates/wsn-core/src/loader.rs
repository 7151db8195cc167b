//! JSON loader for parameters and scenarios.
//!
//! # Accepted shapes
//!
//! Flat (one object holding both parameters and positions):
//!
//! ```json
//! {
//!   "sensor_radius": 0.2,
//!   "initial_battery_level": 64,
//!   "reshuffle_interval": 8,
//!   "stop_condition": "ZeroCoverage",
//!   "stop_threshold": 0.0,
//!   "max_ticks": 1000,
//!   "targets": [{"x": 0.5, "y": 0.5}],
//!   "sensors": [{"x": 0.4, "y": 0.5}]
//! }
//! ```
//!
//! Nested, as written by older tooling:
//!
//! ```json
//! { "parameters": { ... }, "scenario": { "target_positions": [...], "sensor_positions": [...] } }
//! ```
//!
//! Integer fields are read as signed values first so that a negative battery
//! or interval is reported as a validation error rather than a parse error.
//! `stop_threshold` may be omitted and defaults to `0.0`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::{SimulationParameters, SimulationScenario, StopCondition, WsnError, WsnResult};

// ── Raw record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ParametersRecord {
    #[serde(alias = "sensor_radious")]
    sensor_radius:         f64,
    #[serde(alias = "initial_battery_lvl")]
    initial_battery_level: i64,
    reshuffle_interval:    i64,
    stop_condition:        StopCondition,
    #[serde(default)]
    stop_threshold:        f64,
    max_ticks:             i64,
}

impl ParametersRecord {
    fn into_parameters(self) -> WsnResult<SimulationParameters> {
        let params = SimulationParameters {
            sensor_radius:         self.sensor_radius,
            initial_battery_level: non_negative_u32("initial_battery_level", self.initial_battery_level)?,
            reshuffle_interval:    non_negative_u32("reshuffle_interval", self.reshuffle_interval)?,
            stop_condition:        self.stop_condition,
            stop_threshold:        self.stop_threshold,
            max_ticks:             u64::try_from(self.max_ticks).map_err(|_| {
                WsnError::Validation(format!("max_ticks must be non-negative, got {}", self.max_ticks))
            })?,
        };
        params.validate()?;
        Ok(params)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate [`SimulationParameters`] from a JSON file.
///
/// Unknown keys are ignored, so a combined flat file is also a valid
/// parameters file.
pub fn load_parameters_json(path: &Path) -> WsnResult<SimulationParameters> {
    load_parameters_reader(BufReader::new(File::open(path)?))
}

/// Like [`load_parameters_json`] but accepts any `Read` source.
pub fn load_parameters_reader<R: Read>(reader: R) -> WsnResult<SimulationParameters> {
    let value: Value = serde_json::from_reader(reader)?;
    let section = value.get("parameters").cloned().unwrap_or(value);
    parameters_from_value(section)
}

/// Load and validate a [`SimulationScenario`] from a JSON file.
pub fn load_scenario_json(path: &Path) -> WsnResult<SimulationScenario> {
    load_scenario_reader(BufReader::new(File::open(path)?))
}

/// Like [`load_scenario_json`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R) -> WsnResult<SimulationScenario> {
    let value: Value = serde_json::from_reader(reader)?;
    let section = value.get("scenario").cloned().unwrap_or(value);
    scenario_from_value(section)
}

/// Load parameters and scenario from one combined JSON file (flat or nested).
pub fn load_json(path: &Path) -> WsnResult<(SimulationParameters, SimulationScenario)> {
    load_json_reader(BufReader::new(File::open(path)?))
}

/// Like [`load_json`] but accepts any `Read` source.
pub fn load_json_reader<R: Read>(reader: R) -> WsnResult<(SimulationParameters, SimulationScenario)> {
    let value: Value = serde_json::from_reader(reader)?;
    if !value.is_object() {
        return Err(WsnError::Parse("configuration root must be a JSON object".into()));
    }
    let (params, scenario) = match (value.get("parameters"), value.get("scenario")) {
        (Some(p), Some(s)) => (p.clone(), s.clone()),
        (None, None) => (value.clone(), value),
        _ => {
            return Err(WsnError::Parse(
                "nested configuration needs both \"parameters\" and \"scenario\"".into(),
            ));
        }
    };
    Ok((parameters_from_value(params)?, scenario_from_value(scenario)?))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parameters_from_value(value: Value) -> WsnResult<SimulationParameters> {
    let record: ParametersRecord = serde_json::from_value(value)?;
    record.into_parameters()
}

fn scenario_from_value(value: Value) -> WsnResult<SimulationScenario> {
    let scenario: SimulationScenario = serde_json::from_value(value)?;
    scenario.validate()?;
    Ok(scenario)
}

fn non_negative_u32(field: &str, v: i64) -> WsnResult<u32> {
    u32::try_from(v).map_err(|_| {
        WsnError::Validation(format!("{field} must be a non-negative 32-bit integer, got {v}"))
    })
}
