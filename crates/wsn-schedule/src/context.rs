//! Read-only view of the network handed to a reshuffle policy.

use wsn_core::{SensorId, SensorState, TargetId, Tick};
use wsn_network::{CoverageMap, SensorStore};

/// Everything a policy may look at when choosing the active set.
pub struct ReshuffleContext<'a> {
    /// The tick being reshuffled.
    pub tick:     Tick,
    /// Static covering sets for this run.
    pub coverage: &'a CoverageMap,
    /// Remaining battery per sensor.
    pub battery:  &'a [u32],
    /// Current state per sensor (before the reshuffle is applied).
    pub state:    &'a [SensorState],
}

impl<'a> ReshuffleContext<'a> {
    pub fn new(tick: Tick, coverage: &'a CoverageMap, store: &'a SensorStore) -> Self {
        Self {
            tick,
            coverage,
            battery: &store.battery,
            state:   &store.state,
        }
    }

    pub fn sensor_count(&self) -> usize {
        self.state.len()
    }

    pub fn target_count(&self) -> usize {
        self.coverage.target_count()
    }

    /// Any non-`Dead` sensor may be selected.
    #[inline]
    pub fn is_candidate(&self, sensor: SensorId) -> bool {
        !self.state[sensor.index()].is_dead()
    }

    #[inline]
    pub fn battery_of(&self, sensor: SensorId) -> u32 {
        self.battery[sensor.index()]
    }

    /// Living sensors able to cover `target`, ascending.
    pub fn candidates_for(&self, target: TargetId) -> impl Iterator<Item = SensorId> + '_ {
        self.coverage
            .covering_set(target)
            .iter()
            .copied()
            .filter(move |&s| self.is_candidate(s))
    }

    /// Targets no living sensor can reach this round.
    pub fn uncoverable_targets(&self) -> Vec<TargetId> {
        (0..self.target_count() as u32)
            .map(TargetId)
            .filter(|&t| !self.coverage.is_coverable(t, self.state))
            .collect()
    }
}
