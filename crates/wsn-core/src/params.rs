//! Run parameters and the early-termination policy.

use serde::{Deserialize, Serialize};

use crate::{WsnError, WsnResult};

/// Policy for ending a run before `max_ticks`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StopCondition {
    /// Never stop early.
    #[default]
    #[serde(alias = "kManual")]
    Manual,
    /// Stop once no target is covered.
    #[serde(alias = "kZeroCoverage")]
    ZeroCoverage,
    /// Stop once the covered fraction drops below `stop_threshold`.
    #[serde(alias = "kCoverageBelowThreshold")]
    CoverageBelowThreshold,
    /// Stop once any target covered at tick 0 becomes uncovered.
    #[serde(alias = "kAnyCoverageLost")]
    AnyCoverageLost,
}

/// Immutable configuration of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationParameters {
    /// Sensing radius shared by every sensor, in unit-square coordinates.
    pub sensor_radius:         f64,
    /// Battery every sensor starts with, in ticks of active operation.
    pub initial_battery_level: u32,
    /// Ticks between reshuffles.  Tick 0 is always a reshuffle.
    pub reshuffle_interval:    u32,
    pub stop_condition:        StopCondition,
    /// Fraction in `[0, 1]`; only read by `CoverageBelowThreshold`.
    pub stop_threshold:        f64,
    /// Hard cap: the last recorded tick is at most `max_ticks`.
    pub max_ticks:             u64,
}

impl SimulationParameters {
    pub fn new(
        sensor_radius:         f64,
        initial_battery_level: u32,
        reshuffle_interval:    u32,
        stop_condition:        StopCondition,
        stop_threshold:        f64,
        max_ticks:             u64,
    ) -> Self {
        Self {
            sensor_radius,
            initial_battery_level,
            reshuffle_interval,
            stop_condition,
            stop_threshold,
            max_ticks,
        }
    }

    /// Check every field against its legal domain.
    ///
    /// Integer fields are non-negative by construction; the JSON loader
    /// rejects negative inputs before they reach this type.
    pub fn validate(&self) -> WsnResult<()> {
        if !self.sensor_radius.is_finite() || self.sensor_radius <= 0.0 {
            return Err(WsnError::Validation(format!(
                "sensor_radius must be a positive finite number, got {}",
                self.sensor_radius
            )));
        }
        if self.reshuffle_interval == 0 {
            return Err(WsnError::Validation(
                "reshuffle_interval must be at least 1 tick".into(),
            ));
        }
        if !self.stop_threshold.is_finite() || !(0.0..=1.0).contains(&self.stop_threshold) {
            return Err(WsnError::Validation(format!(
                "stop_threshold must lie in [0, 1], got {}",
                self.stop_threshold
            )));
        }
        Ok(())
    }
}
