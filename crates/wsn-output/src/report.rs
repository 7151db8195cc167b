//! End-of-run summary for humans (text) and tools (JSON).

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use wsn_core::{SensorState, SimulationState};
use wsn_sim::StopReason;

use crate::OutputResult;

/// Final state of one sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorReport {
    pub sensor_id: u32,
    pub state:     SensorState,
    pub battery:   u32,
}

/// Read-only summary of a recorded history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub final_tick:       u64,
    pub stop_reason:      Option<StopReason>,
    pub sensor_count:     usize,
    pub target_count:     usize,
    pub covered_targets:  u32,
    /// Covered fraction at the final tick, in `[0, 1]`.
    pub final_coverage:   f64,
    pub alive_sensors:    usize,
    pub dead_sensors:     usize,
    /// Last tick at which every target was covered.  `None` if that never
    /// happened or there are no targets.
    pub network_lifetime: Option<u64>,
    pub sensors:          Vec<SensorReport>,
}

impl RunReport {
    /// Summarize `states`.  Returns `None` for an empty history.
    pub fn from_states(states: &[SimulationState], stop_reason: Option<StopReason>) -> Option<Self> {
        let last = states.last()?;
        let network_lifetime = if last.target_count() == 0 {
            None
        } else {
            states.iter().rev().find(|s| s.all_targets_covered).map(|s| s.tick.0)
        };
        let dead = last.count_in(SensorState::Dead);
        let sensors = last
            .sensor_states
            .iter()
            .zip(&last.sensor_battery_levels)
            .enumerate()
            .map(|(i, (&state, &battery))| SensorReport { sensor_id: i as u32, state, battery })
            .collect();

        Some(Self {
            final_tick: last.tick.0,
            stop_reason,
            sensor_count: last.sensor_count(),
            target_count: last.target_count(),
            covered_targets: last.covered_target_count,
            final_coverage: last.coverage_percentage,
            alive_sensors: last.sensor_count() - dead,
            dead_sensors: dead,
            network_lifetime,
            sensors,
        })
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> OutputResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn write_text(&self, path: &Path) -> OutputResult<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation report")?;
        writeln!(f, "  final tick       : {}", self.final_tick)?;
        match self.stop_reason {
            Some(r) => writeln!(f, "  stop reason      : {r}")?,
            None    => writeln!(f, "  stop reason      : (still running)")?,
        }
        writeln!(
            f,
            "  sensors          : {} ({} alive, {} dead)",
            self.sensor_count, self.alive_sensors, self.dead_sensors
        )?;
        writeln!(
            f,
            "  targets          : {} ({} covered, {:.2}%)",
            self.target_count,
            self.covered_targets,
            self.final_coverage * 100.0
        )?;
        match self.network_lifetime {
            Some(t) => writeln!(f, "  network lifetime : full coverage through tick {t}")?,
            None    => writeln!(f, "  network lifetime : full coverage never reached")?,
        }
        writeln!(f)?;
        writeln!(f, "  {:>6}  {:<5}  {:>7}", "sensor", "state", "battery")?;
        for s in &self.sensors {
            writeln!(f, "  {:>6}  {:<5}  {:>7}", s.sensor_id, s.state.as_str(), s.battery)?;
        }
        Ok(())
    }
}
