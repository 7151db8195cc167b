//! Target coverage.
//!
//! A target is covered iff at least one `On` sensor lies within the sensing
//! radius (closed disk).  Two implementations are provided:
//!
//! - [`compute_coverage`]: the reference definition, a pure
//!   O(active × targets) scan with no precomputation.
//! - [`CoverageMap`]: precomputes each target's *covering set* once per
//!   run.  Positions and radius are immutable for a run, so the sets never
//!   change; only sensor states do.  Both the scheduler and the per-tick
//!   coverage pass read from it.

use wsn_core::{Point, SensorId, SensorState, TargetId};

use crate::PointIndex;

/// Coverage flag per target, given the positions of the active sensors.
pub fn compute_coverage(active: &[Point], radius: f64, targets: &[Point]) -> Vec<bool> {
    targets
        .iter()
        .map(|&t| active.iter().any(|&s| s.covers(t, radius)))
        .collect()
}

/// Static target ↔ sensor reachability for one run.
#[derive(Clone, Debug)]
pub struct CoverageMap {
    /// `covering[t]`: sensors within `radius` of target `t`, ascending.
    covering: Vec<Vec<SensorId>>,
    /// `reach[s]`: targets within `radius` of sensor `s`, ascending.
    reach:    Vec<Vec<TargetId>>,
}

impl CoverageMap {
    /// Build covering sets with one R-tree query per target.
    ///
    /// Time complexity: O(S log S) for the bulk load plus one range query
    /// per target.
    pub fn build(sensors: &[Point], targets: &[Point], radius: f64) -> Self {
        let index = PointIndex::new(sensors);
        let query = |t: &Point| -> Vec<SensorId> {
            index.within(*t, radius).into_iter().map(SensorId).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let covering: Vec<Vec<SensorId>> = targets.iter().map(query).collect();

        #[cfg(feature = "parallel")]
        let covering: Vec<Vec<SensorId>> = {
            use rayon::prelude::*;
            targets.par_iter().map(query).collect()
        };

        // Inverting in ascending target order keeps every reach list sorted.
        let mut reach = vec![Vec::new(); sensors.len()];
        for (t, set) in covering.iter().enumerate() {
            for s in set {
                reach[s.index()].push(TargetId(t as u32));
            }
        }

        Self { covering, reach }
    }

    pub fn target_count(&self) -> usize {
        self.covering.len()
    }

    pub fn sensor_count(&self) -> usize {
        self.reach.len()
    }

    /// Sensors able to cover `target`, ascending.
    #[inline]
    pub fn covering_set(&self, target: TargetId) -> &[SensorId] {
        &self.covering[target.index()]
    }

    /// Targets `sensor` is able to cover, ascending.
    #[inline]
    pub fn reach(&self, sensor: SensorId) -> &[TargetId] {
        &self.reach[sensor.index()]
    }

    /// `true` if some non-`Dead` sensor could cover `target`.
    pub fn is_coverable(&self, target: TargetId, states: &[SensorState]) -> bool {
        self.covering_set(target)
            .iter()
            .any(|s| !states[s.index()].is_dead())
    }

    /// Coverage flag per target under the given sensor states.
    pub fn evaluate(&self, states: &[SensorState]) -> Vec<bool> {
        self.covering
            .iter()
            .map(|set| set.iter().any(|s| states[s.index()].is_on()))
            .collect()
    }
}
