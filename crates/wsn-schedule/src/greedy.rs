//! Greedy highest-battery set cover.

use wsn_core::{SensorId, TargetId};

use crate::{ReshuffleContext, ReshufflePolicy};

/// The default reshuffle rule.
///
/// Targets are visited in ascending id order.  A target not yet covered by
/// an already-selected sensor gets the living coverer with the most
/// battery left, lowest id on ties.  Targets with no living coverer stay
/// uncovered.
///
/// Preferring the fullest battery rotates duty among redundant sensors:
/// a sensor that has been on for a while drops below its idle neighbours
/// and is replaced at the next reshuffle.
///
/// Not an optimal set cover.  Cost is O(sensors + Σ covering-set sizes)
/// per reshuffle.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyReshuffle;

impl ReshufflePolicy for GreedyReshuffle {
    fn select(&self, ctx: &ReshuffleContext<'_>) -> Vec<SensorId> {
        let mut selected: Vec<SensorId> = Vec::new();
        let mut covered = vec![false; ctx.target_count()];

        for t in 0..ctx.target_count() {
            if covered[t] {
                continue;
            }
            let best = ctx
                .candidates_for(TargetId(t as u32))
                .max_by(|&a, &b| {
                    ctx.battery_of(a)
                        .cmp(&ctx.battery_of(b))
                        .then_with(|| b.cmp(&a))
                });
            let Some(best) = best else {
                continue;
            };
            selected.push(best);
            for &reached in ctx.coverage.reach(best) {
                covered[reached.index()] = true;
            }
        }

        selected.sort_unstable();
        selected
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}
