//! `SimulationManager`: load, initialize, run, and inspect one simulation.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use wsn_core::{
    SimulationParameters, SimulationScenario, SimulationState, load_json, load_parameters_json,
    load_scenario_json,
};
use wsn_schedule::{GreedyReshuffle, ReshufflePolicy};

use crate::{NoopObserver, Replay, SimBuilder, SimError, SimObserver, SimResult, Simulation, StopReason};

/// Where a [`SimulationManager`] is in its lifecycle.
///
/// ```text
/// Uninitialized ─load─▶ Configured ─initialize─▶ Initialized ─run/step─▶ Running
///       ▲                                             │                    │
///       └──────────────── reset ◀─────────────── Completed ◀──stop rule────┘
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Nothing loaded.
    Uninitialized,
    /// Parameters and/or scenario loaded; not yet initialized.
    Configured,
    /// Tick 0 processed; no further tick yet.
    Initialized,
    /// At least one tick past 0 processed; no stop rule has fired.
    Running,
    /// A stop rule fired.  Only inspection and `reset` remain useful.
    Completed,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Owns the configuration, the running [`Simulation`], and its history.
///
/// The reshuffle policy defaults to [`GreedyReshuffle`] and survives
/// [`reset`](Self::reset).
pub struct SimulationManager {
    parameters: Option<SimulationParameters>,
    scenario:   Option<SimulationScenario>,
    policy:     Arc<dyn ReshufflePolicy>,
    simulation: Option<Simulation<Arc<dyn ReshufflePolicy>>>,
    lifecycle:  Lifecycle,
}

impl Default for SimulationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationManager {
    pub fn new() -> Self {
        Self {
            parameters: None,
            scenario:   None,
            policy:     Arc::new(GreedyReshuffle),
            simulation: None,
            lifecycle:  Lifecycle::Uninitialized,
        }
    }

    /// Builder-style variant of [`set_policy`](Self::set_policy).
    pub fn with_policy(mut self, policy: impl ReshufflePolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_initialized(&self) -> bool {
        self.simulation.is_some()
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Replace the reshuffle policy.  Only legal before `initialize`.
    pub fn set_policy(&mut self, policy: Box<dyn ReshufflePolicy>) -> SimResult<()> {
        self.ensure_configurable("set_policy")?;
        self.policy = Arc::from(policy);
        Ok(())
    }

    pub fn load_parameters(&mut self, parameters: SimulationParameters) -> SimResult<()> {
        self.ensure_configurable("load_parameters")?;
        parameters.validate()?;
        self.parameters = Some(parameters);
        self.lifecycle = Lifecycle::Configured;
        Ok(())
    }

    pub fn load_scenario(&mut self, scenario: SimulationScenario) -> SimResult<()> {
        self.ensure_configurable("load_scenario")?;
        scenario.validate()?;
        self.scenario = Some(scenario);
        self.lifecycle = Lifecycle::Configured;
        Ok(())
    }

    pub fn load_parameters_from_json(&mut self, path: &Path) -> SimResult<()> {
        self.ensure_configurable("load_parameters_from_json")?;
        let parameters = load_parameters_json(path)?;
        self.load_parameters(parameters)
    }

    pub fn load_scenario_from_json(&mut self, path: &Path) -> SimResult<()> {
        self.ensure_configurable("load_scenario_from_json")?;
        let scenario = load_scenario_json(path)?;
        self.load_scenario(scenario)
    }

    /// Load parameters and scenario from one file.  Nothing is stored
    /// unless both parse and validate.
    pub fn load_from_json(&mut self, path: &Path) -> SimResult<()> {
        self.ensure_configurable("load_from_json")?;
        let (parameters, scenario) = load_json(path)?;
        self.load_parameters(parameters)?;
        self.load_scenario(scenario)
    }

    /// Load a uniformly random scenario, reproducible from `seed`.
    pub fn load_random_scenario(
        &mut self,
        target_count: usize,
        sensor_count: usize,
        seed:         u64,
    ) -> SimResult<()> {
        self.load_scenario(SimulationScenario::random(target_count, sensor_count, seed))
    }

    pub fn parameters(&self) -> SimResult<&SimulationParameters> {
        self.parameters.as_ref().ok_or(SimError::NotConfigured("parameters"))
    }

    pub fn scenario(&self) -> SimResult<&SimulationScenario> {
        self.scenario.as_ref().ok_or(SimError::NotConfigured("scenario"))
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Process tick 0.  If a stop rule already fires there, the manager goes
    /// straight to [`Lifecycle::Completed`].
    pub fn initialize(&mut self) -> SimResult<()> {
        if self.simulation.is_some() {
            return Err(SimError::AlreadyInitialized);
        }
        let parameters = self.parameters()?.clone();
        let scenario = self.scenario()?.clone();

        let sim = SimBuilder::new(parameters, scenario, Arc::clone(&self.policy)).build()?;
        self.lifecycle = if sim.is_finished() {
            Lifecycle::Completed
        } else {
            Lifecycle::Initialized
        };
        self.simulation = Some(sim);
        Ok(())
    }

    /// Run to completion without callbacks.
    pub fn run(&mut self) -> SimResult<Option<StopReason>> {
        self.run_with(&mut NoopObserver)
    }

    /// Run until a stop rule fires or `observer` requests cancellation.
    ///
    /// Returns the stop reason, or `None` if cancelled.  On a completed run
    /// this is a no-op that returns the original reason.
    pub fn run_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<StopReason>> {
        let sim = self.simulation.as_mut().ok_or(SimError::NotInitialized)?;
        if sim.is_finished() {
            warn!("run() called on a completed simulation; nothing to do");
            return Ok(sim.stop_reason());
        }
        self.lifecycle = Lifecycle::Running;
        let reason = sim.run(observer);
        if reason.is_some() {
            self.lifecycle = Lifecycle::Completed;
        }
        Ok(reason)
    }

    /// Advance one tick.  Returns `Ok(None)` once the run has completed.
    pub fn step(&mut self) -> SimResult<Option<&SimulationState>> {
        self.step_with(&mut NoopObserver)
    }

    pub fn step_with<O: SimObserver>(
        &mut self,
        observer: &mut O,
    ) -> SimResult<Option<&SimulationState>> {
        let sim = self.simulation.as_mut().ok_or(SimError::NotInitialized)?;
        if sim.is_finished() {
            return Ok(None);
        }
        sim.step(observer);
        self.lifecycle = if sim.is_finished() {
            Lifecycle::Completed
        } else {
            Lifecycle::Running
        };
        Ok(sim.current_state())
    }

    /// Discard parameters, scenario, simulation, and history.  The policy is
    /// kept.
    pub fn reset(&mut self) {
        if self.lifecycle != Lifecycle::Uninitialized {
            info!("resetting simulation manager (was {})", self.lifecycle);
        }
        self.parameters = None;
        self.scenario = None;
        self.simulation = None;
        self.lifecycle = Lifecycle::Uninitialized;
    }

    // ── Inspection ────────────────────────────────────────────────────────

    /// Every recorded state, ordered by tick.  Empty before `initialize`.
    pub fn simulation_states(&self) -> &[SimulationState] {
        self.simulation.as_ref().map(Simulation::states).unwrap_or(&[])
    }

    pub fn current_state(&self) -> Option<&SimulationState> {
        self.simulation.as_ref().and_then(|s| s.current_state())
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.simulation.as_ref().and_then(|s| s.stop_reason())
    }

    pub fn replay(&self) -> Replay<'_> {
        Replay::new(self.simulation_states())
    }

    /// The running simulation, for direct access to the sensor store and
    /// coverage map.
    pub fn simulation(&self) -> Option<&Simulation<Arc<dyn ReshufflePolicy>>> {
        self.simulation.as_ref()
    }

    fn ensure_configurable(&self, op: &str) -> SimResult<()> {
        if self.simulation.is_some() {
            return Err(SimError::Configuration(format!(
                "{op} is not allowed after initialize(); call reset() first"
            )));
        }
        Ok(())
    }
}
