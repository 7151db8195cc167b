//! Greedy selection pruned down to a minimal cover.

use wsn_core::SensorId;

use crate::{GreedyReshuffle, ReshuffleContext, ReshufflePolicy};

/// Greedy selection followed by redundancy pruning.
///
/// The greedy pass can pick a sensor whose targets are later all covered
/// by sensors chosen for other targets.  This policy then visits the
/// selected sensors from lowest battery to highest (lowest id on ties) and
/// switches off any sensor whose every reachable target is still covered
/// by some other selected sensor.  The result covers the same targets and
/// every remaining sensor is the sole coverer of at least one of them.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalCoverReshuffle;

impl ReshufflePolicy for MinimalCoverReshuffle {
    fn select(&self, ctx: &ReshuffleContext<'_>) -> Vec<SensorId> {
        let greedy = GreedyReshuffle.select(ctx);

        let mut cover_count = vec![0u32; ctx.target_count()];
        for &s in &greedy {
            for t in ctx.coverage.reach(s) {
                cover_count[t.index()] += 1;
            }
        }

        let mut order = greedy.clone();
        order.sort_unstable_by_key(|&s| (ctx.battery_of(s), s));

        let mut keep = vec![false; ctx.sensor_count()];
        for &s in &greedy {
            keep[s.index()] = true;
        }
        for s in order {
            let reach = ctx.coverage.reach(s);
            if reach.iter().all(|t| cover_count[t.index()] >= 2) {
                keep[s.index()] = false;
                for t in reach {
                    cover_count[t.index()] -= 1;
                }
            }
        }

        greedy.into_iter().filter(|s| keep[s.index()]).collect()
    }

    fn name(&self) -> &'static str {
        "minimal-cover"
    }
}
