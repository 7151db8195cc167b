//! Plain data row types written by output backends.

use wsn_core::{SensorState, SimulationState};

/// One sensor's state and battery at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSnapshotRow {
    pub sensor_id: u32,
    pub tick:      u64,
    pub state:     SensorState,
    pub battery:   u32,
}

impl SensorSnapshotRow {
    /// One row per sensor, ascending by id.
    pub fn from_state(state: &SimulationState) -> Vec<Self> {
        state
            .sensor_states
            .iter()
            .zip(&state.sensor_battery_levels)
            .enumerate()
            .map(|(i, (&s, &battery))| Self {
                sensor_id: i as u32,
                tick:      state.tick.0,
                state:     s,
                battery,
            })
            .collect()
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub on_sensors:      u32,
    pub off_sensors:     u32,
    pub dead_sensors:    u32,
    pub covered_targets: u32,
    /// Covered fraction in `[0, 1]`.
    pub coverage:        f64,
}

impl TickSummaryRow {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            tick:            state.tick.0,
            on_sensors:      state.count_in(SensorState::On) as u32,
            off_sensors:     state.count_in(SensorState::Off) as u32,
            dead_sensors:    state.count_in(SensorState::Dead) as u32,
            covered_targets: state.covered_target_count,
            coverage:        state.coverage_percentage,
        }
    }
}
