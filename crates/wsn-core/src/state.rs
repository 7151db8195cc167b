//! Sensor state and the per-tick simulation snapshot.

use serde::{Deserialize, Serialize};

use crate::Tick;

/// Duty-cycle state of one sensor.
///
/// `Dead` is terminal: a sensor enters it exactly when its battery reaches
/// zero and never leaves it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorState {
    #[serde(alias = "kOn")]
    On,
    #[serde(alias = "kOff")]
    Off,
    #[serde(alias = "kDead")]
    Dead,
}

impl SensorState {
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, SensorState::On)
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        matches!(self, SensorState::Dead)
    }

    /// Short label used by text reports and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            SensorState::On   => "on",
            SensorState::Off  => "off",
            SensorState::Dead => "dead",
        }
    }
}

impl std::fmt::Display for SensorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of the network recorded once per tick.
///
/// All vectors are indexed by `SensorId` / `TargetId`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub tick:                  Tick,
    pub sensor_states:         Vec<SensorState>,
    pub sensor_battery_levels: Vec<u32>,
    pub is_target_covered:     Vec<bool>,
    /// `covered_target_count / target_count`, or `0.0` with no targets.
    pub coverage_percentage:   f64,
    pub covered_target_count:  u32,
    /// `true` iff every target is covered.  Vacuously `true` with no targets.
    pub all_targets_covered:   bool,
}

impl SimulationState {
    /// Assemble a snapshot, deriving the coverage summary from
    /// `is_target_covered` so the counters can never disagree with it.
    pub fn new(
        tick:                  Tick,
        sensor_states:         Vec<SensorState>,
        sensor_battery_levels: Vec<u32>,
        is_target_covered:     Vec<bool>,
    ) -> Self {
        let total = is_target_covered.len();
        let covered = is_target_covered.iter().filter(|&&c| c).count();
        let coverage_percentage = if total == 0 {
            0.0
        } else {
            covered as f64 / total as f64
        };
        Self {
            tick,
            sensor_states,
            sensor_battery_levels,
            is_target_covered,
            coverage_percentage,
            covered_target_count: covered as u32,
            all_targets_covered: covered == total,
        }
    }

    pub fn sensor_count(&self) -> usize {
        self.sensor_states.len()
    }

    pub fn target_count(&self) -> usize {
        self.is_target_covered.len()
    }

    /// Number of sensors in `state`.
    pub fn count_in(&self, state: SensorState) -> usize {
        self.sensor_states.iter().filter(|&&s| s == state).count()
    }

    /// `true` if every sensor is `Dead` (vacuously `true` with no sensors).
    pub fn all_sensors_dead(&self) -> bool {
        self.sensor_states.iter().all(|s| s.is_dead())
    }
}
