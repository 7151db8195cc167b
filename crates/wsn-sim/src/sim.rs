//! The `Simulation` struct and its tick loop.

use log::{info, trace};

use wsn_core::{Point, SimulationParameters, SimulationState, Tick};
use wsn_network::{CoverageMap, SensorStore, deplete_tick};
use wsn_schedule::{ReshufflePolicy, reshuffle};

use crate::{SimObserver, StopEvaluator, StopReason};

// ── Simulation ────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Simulation<P>` holds the network state and the recorded history, and
/// drives the per-tick sequence described in the [crate docs](crate).
/// Tick 0 has already been processed by the time a value of this type
/// exists.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<P: ReshufflePolicy> {
    /// Run parameters, validated at build time.
    pub params: SimulationParameters,

    /// Target positions, indexed by `TargetId`.
    pub targets: Vec<Point>,

    /// Sensor state (SoA arrays).  Policies see it through
    /// `ReshuffleContext`.
    pub sensors: SensorStore,

    /// Precomputed covering sets; positions never change during a run.
    pub coverage: CoverageMap,

    /// The duty-cycle policy.  Called at every reshuffle tick.
    pub policy: P,

    tick:        Tick,
    stop:        StopEvaluator,
    stop_reason: Option<StopReason>,
    history:     Vec<SimulationState>,
    /// Set once an observer has been shown the recorded history.
    started:     bool,
}

impl<P: ReshufflePolicy> Simulation<P> {
    /// Process tick 0: initial reshuffle, coverage, and stop check.
    pub(crate) fn start(
        params:   SimulationParameters,
        targets:  Vec<Point>,
        sensors:  SensorStore,
        coverage: CoverageMap,
        policy:   P,
    ) -> Self {
        let stop = StopEvaluator::new(&params);
        let mut sim = Self {
            params,
            targets,
            sensors,
            coverage,
            policy,
            tick: Tick::ZERO,
            stop,
            stop_reason: None,
            history: Vec::new(),
            started: false,
        };

        let outcome = reshuffle(&sim.policy, Tick::ZERO, &sim.coverage, &mut sim.sensors);
        if !outcome.uncoverable.is_empty() {
            info!(
                "{} target(s) have no sensor in range and stay uncovered",
                outcome.uncoverable.len()
            );
        }
        let state = sim.snapshot();
        sim.stop_reason = sim.stop.evaluate(&state);
        if let Some(reason) = sim.stop_reason {
            info!("run finished at {}: {reason}", state.tick);
        }
        sim.history.push(state);
        sim
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Current tick: the tick of the most recent state.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Every state recorded so far, ordered by tick starting at 0.
    pub fn states(&self) -> &[SimulationState] {
        &self.history
    }

    /// The most recent state.
    pub fn current_state(&self) -> Option<&SimulationState> {
        self.history.last()
    }

    /// Why the run ended, or `None` while it is still going.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn is_finished(&self) -> bool {
        self.stop_reason.is_some()
    }

    /// Run until a stop rule fires or the observer requests cancellation.
    ///
    /// Returns the stop reason, or `None` if the run was cancelled first.
    /// Calling `run` on a finished simulation is a no-op.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Option<StopReason> {
        observer.on_run_start(&self.history);
        self.started = true;
        while !self.is_finished() {
            if observer.cancel_requested() {
                info!("run paused at {} on observer request", self.tick);
                return None;
            }
            self.step(observer);
        }
        self.stop_reason
    }

    /// Advance exactly one tick and return the new state, or `None` if the
    /// run has already finished.
    ///
    /// The first call made before any `run` hands the observer the tick-0
    /// history through [`SimObserver::on_run_start`].
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<&SimulationState> {
        if !self.started {
            observer.on_run_start(&self.history);
            self.started = true;
        }
        if self.is_finished() {
            return None;
        }
        let now = self.tick.next();
        self.process_tick(now, observer);
        self.tick = now;

        let state = self.snapshot();
        self.stop_reason = self.stop.evaluate(&state);
        observer.on_tick_end(&state);
        if let Some(reason) = self.stop_reason {
            info!("run finished at {now}: {reason}");
            observer.on_stop(now, reason);
        }
        self.history.push(state);
        self.history.last()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        // ── Phase 1: battery ──────────────────────────────────────────────
        let depletion = deplete_tick(&mut self.sensors);
        trace!(
            "{now}: drained {} sensor(s), {} died",
            depletion.drained,
            depletion.died.len()
        );

        // ── Phase 2: reshuffle ────────────────────────────────────────────
        //
        // Runs after depletion so sensors that just died are never selected.
        if now.is_reshuffle_point(self.params.reshuffle_interval) {
            let outcome = reshuffle(&self.policy, now, &self.coverage, &mut self.sensors);
            observer.on_reshuffle(now, &outcome);
        }
    }

    /// Capture the current network state at `self.tick`.
    fn snapshot(&self) -> SimulationState {
        SimulationState::new(
            self.tick,
            self.sensors.state.clone(),
            self.sensors.battery.clone(),
            self.coverage.evaluate(&self.sensors.state),
        )
    }
}
