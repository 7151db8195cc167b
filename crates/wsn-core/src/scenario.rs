//! Target and sensor placement for one run.

use serde::{Deserialize, Serialize};

use crate::{Point, SimRng, WsnError, WsnResult};

/// Ordered target and sensor positions.
///
/// Order is identity: target `i` is `TargetId(i)` and sensor `j` is
/// `SensorId(j)` for the lifetime of the run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationScenario {
    #[serde(default, alias = "target_positions")]
    pub targets: Vec<Point>,
    #[serde(default, alias = "sensor_positions")]
    pub sensors: Vec<Point>,
}

impl SimulationScenario {
    pub fn new(targets: Vec<Point>, sensors: Vec<Point>) -> Self {
        Self { targets, sensors }
    }

    /// Uniformly random placement in the unit square.
    ///
    /// Targets and sensors draw from separate child streams, so the target
    /// layout for a given seed does not depend on `sensor_count`.
    pub fn random(target_count: usize, sensor_count: usize, seed: u64) -> Self {
        let mut root = SimRng::new(seed);
        let mut target_rng = root.child(0);
        let mut sensor_rng = root.child(1);
        let targets = (0..target_count).map(|_| target_rng.unit_point()).collect();
        let sensors = (0..sensor_count).map(|_| sensor_rng.unit_point()).collect();
        Self { targets, sensors }
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Reject empty scenarios and positions outside the unit square.
    ///
    /// A scenario with targets but no sensors (or the reverse) is legal and
    /// simply produces a trivial coverage result.
    pub fn validate(&self) -> WsnResult<()> {
        if self.targets.is_empty() && self.sensors.is_empty() {
            return Err(WsnError::Validation(
                "scenario has neither targets nor sensors".into(),
            ));
        }
        if let Some((i, p)) = self.targets.iter().enumerate().find(|(_, p)| !p.in_unit_square()) {
            return Err(WsnError::Validation(format!(
                "target {i} at {p} lies outside the unit square"
            )));
        }
        if let Some((i, p)) = self.sensors.iter().enumerate().find(|(_, p)| !p.in_unit_square()) {
            return Err(WsnError::Validation(format!(
                "sensor {i} at {p} lies outside the unit square"
            )));
        }
        Ok(())
    }
}
