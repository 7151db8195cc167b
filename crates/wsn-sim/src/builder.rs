//! Fluent builder for constructing a [`Simulation`].

use log::info;

use wsn_core::{SimulationParameters, SimulationScenario};
use wsn_network::{CoverageMap, SensorStore};
use wsn_schedule::ReshufflePolicy;

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation<P>`].
///
/// # Required inputs
///
/// - [`SimulationParameters`]: radius, battery, reshuffle interval, stop rule
/// - [`SimulationScenario`]: target and sensor positions
/// - `P: ReshufflePolicy`: the duty-cycle rule (e.g. [`wsn_schedule::GreedyReshuffle`])
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                              |
/// |---------------------------|--------------------------------------|
/// | `.initial_batteries(v)`   | `initial_battery_level` for everyone |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(params, scenario, GreedyReshuffle)
///     .initial_batteries(vec![2, 5])
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: ReshufflePolicy> {
    params:    SimulationParameters,
    scenario:  SimulationScenario,
    policy:    P,
    batteries: Option<Vec<u32>>,
}

impl<P: ReshufflePolicy> SimBuilder<P> {
    pub fn new(params: SimulationParameters, scenario: SimulationScenario, policy: P) -> Self {
        Self { params, scenario, policy, batteries: None }
    }

    /// Per-sensor starting batteries, overriding `initial_battery_level`.
    /// A sensor starting at zero is `Dead` from tick 0.
    pub fn initial_batteries(mut self, batteries: Vec<u32>) -> Self {
        self.batteries = Some(batteries);
        self
    }

    /// Validate the inputs, index coverage, and process tick 0.
    ///
    /// # Errors
    ///
    /// - [`SimError::Core`] if the parameters or scenario fail validation.
    /// - [`SimError::CountMismatch`] if `initial_batteries` does not have one
    ///   entry per sensor.
    pub fn build(self) -> SimResult<Simulation<P>> {
        self.params.validate()?;
        self.scenario.validate()?;

        let n = self.scenario.sensor_count();
        let sensors = match self.batteries {
            Some(b) if b.len() != n => {
                return Err(SimError::CountMismatch {
                    expected: n,
                    got:      b.len(),
                    what:     "initial_batteries",
                });
            }
            Some(b) => SensorStore::with_batteries(self.scenario.sensors.clone(), b),
            None => SensorStore::new(self.scenario.sensors.clone(), self.params.initial_battery_level),
        };

        let coverage = CoverageMap::build(
            &self.scenario.sensors,
            &self.scenario.targets,
            self.params.sensor_radius,
        );
        info!(
            "initializing {} sensor(s), {} target(s), radius {}, policy {}",
            n,
            self.scenario.target_count(),
            self.params.sensor_radius,
            self.policy.name(),
        );

        Ok(Simulation::start(
            self.params,
            self.scenario.targets,
            sensors,
            coverage,
            self.policy,
        ))
    }
}
