//! Early-termination rules.

use std::fmt;

use log::debug;
use serde::Serialize;

use wsn_core::{SimulationParameters, SimulationState, StopCondition, TargetId, Tick};

/// Why a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StopReason {
    /// The tick counter reached `max_ticks`.
    MaxTicks,
    /// Every sensor is `Dead`.
    AllSensorsDead,
    /// No target is covered.
    ZeroCoverage,
    /// The covered fraction fell below `stop_threshold`.
    CoverageBelowThreshold,
    /// `target` was covered at tick 0 and is not any more.
    CoverageLost { target: TargetId },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::MaxTicks               => f.write_str("max ticks reached"),
            StopReason::AllSensorsDead         => f.write_str("all sensors dead"),
            StopReason::ZeroCoverage           => f.write_str("zero coverage"),
            StopReason::CoverageBelowThreshold => f.write_str("coverage below threshold"),
            StopReason::CoverageLost { target } => write!(f, "coverage lost on {target}"),
        }
    }
}

/// Applies the stop rules to each recorded state, in order:
///
/// 1. the configured [`StopCondition`];
/// 2. every sensor `Dead`;
/// 3. `tick >= max_ticks`.
///
/// The first state evaluated is taken as the tick-0 baseline for
/// [`StopCondition::AnyCoverageLost`].
#[derive(Clone, Debug)]
pub struct StopEvaluator {
    condition: StopCondition,
    threshold: f64,
    max_ticks: Tick,
    baseline:  Option<Vec<bool>>,
}

impl StopEvaluator {
    pub fn new(params: &SimulationParameters) -> Self {
        Self {
            condition: params.stop_condition,
            threshold: params.stop_threshold,
            max_ticks: Tick(params.max_ticks),
            baseline:  None,
        }
    }

    /// Targets covered at tick 0, once a state has been evaluated.
    pub fn baseline(&self) -> Option<&[bool]> {
        self.baseline.as_deref()
    }

    /// Return the reason `state` ends the run, or `None` to keep going.
    pub fn evaluate(&mut self, state: &SimulationState) -> Option<StopReason> {
        if self.baseline.is_none() {
            self.baseline = Some(state.is_target_covered.clone());
        }

        let reason = self
            .condition_met(state)
            .or_else(|| state.all_sensors_dead().then_some(StopReason::AllSensorsDead))
            .or_else(|| (state.tick >= self.max_ticks).then_some(StopReason::MaxTicks));
        if let Some(r) = reason {
            debug!("{}: stop rule fired: {r}", state.tick);
        }
        reason
    }

    fn condition_met(&self, state: &SimulationState) -> Option<StopReason> {
        match self.condition {
            StopCondition::Manual => None,
            StopCondition::ZeroCoverage => (state.target_count() > 0
                && state.covered_target_count == 0)
                .then_some(StopReason::ZeroCoverage),
            StopCondition::CoverageBelowThreshold => (state.coverage_percentage
                < self.threshold)
                .then_some(StopReason::CoverageBelowThreshold),
            StopCondition::AnyCoverageLost => {
                let baseline = self.baseline.as_deref()?;
                baseline
                    .iter()
                    .zip(&state.is_target_covered)
                    .position(|(&was, &is)| was && !is)
                    .map(|i| StopReason::CoverageLost { target: TargetId(i as u32) })
            }
        }
    }
}
