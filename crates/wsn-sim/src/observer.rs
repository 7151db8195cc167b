//! Simulation observer trait for progress reporting and data collection.

use wsn_core::{SimulationState, Tick};
use wsn_schedule::ReshuffleOutcome;

use crate::StopReason;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] and
/// [`SimulationManager::run_with`][crate::SimulationManager::run_with].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: coverage printer
///
/// ```rust,ignore
/// struct CoveragePrinter;
///
/// impl SimObserver for CoveragePrinter {
///     fn on_tick_end(&mut self, state: &SimulationState) {
///         println!("{}: {:.1}%", state.tick, state.coverage_percentage * 100.0);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called with every state recorded so far (at least the tick-0 state)
    /// each time `run` starts, and before the first `step` if no `run`
    /// came first.
    fn on_run_start(&mut self, _history: &[SimulationState]) {}

    /// Called after a reshuffle at tick `tick ≥ 1` has been applied.
    fn on_reshuffle(&mut self, _tick: Tick, _outcome: &ReshuffleOutcome) {}

    /// Called with each newly recorded state.
    fn on_tick_end(&mut self, _state: &SimulationState) {}

    /// Called once when a stop rule fires.
    fn on_stop(&mut self, _final_tick: Tick, _reason: StopReason) {}

    /// Polled before every tick; returning `true` pauses the run.  A paused
    /// run can be resumed with another `run` call.
    fn cancel_requested(&mut self) -> bool {
        false
    }
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
