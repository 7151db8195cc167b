//! Applying a policy's selection to the sensor store.

use log::{debug, warn};

use wsn_core::{SensorId, TargetId, Tick};
use wsn_network::{CoverageMap, SensorStore};

use crate::{ReshuffleContext, ReshufflePolicy};

/// Result of one reshuffle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReshuffleOutcome {
    /// Sensors switched `On`, ascending.
    pub selected:    Vec<SensorId>,
    /// Targets with no living sensor in range; uncovered until the end.
    pub uncoverable: Vec<TargetId>,
}

/// Switch exactly the selected living sensors `On` and every other living
/// sensor `Off`.
///
/// `Dead` entries in `selected` are skipped.  Returns the sensors actually
/// switched on, ascending and de-duplicated.
pub fn apply_selection(store: &mut SensorStore, selected: &[SensorId]) -> Vec<SensorId> {
    let mut want = vec![false; store.count];
    for &s in selected {
        if store.is_alive(s) {
            want[s.index()] = true;
        } else {
            warn!("reshuffle policy selected dead sensor {s}; ignored");
        }
    }

    let mut on = Vec::new();
    for (i, &w) in want.iter().enumerate() {
        let sensor = SensorId(i as u32);
        if store.set_active(sensor, w) && w {
            on.push(sensor);
        }
    }
    on
}

/// Run `policy` against the current store and apply its selection.
pub fn reshuffle<P: ReshufflePolicy + ?Sized>(
    policy:   &P,
    tick:     Tick,
    coverage: &CoverageMap,
    store:    &mut SensorStore,
) -> ReshuffleOutcome {
    let (selection, uncoverable) = {
        let ctx = ReshuffleContext::new(tick, coverage, store);
        (policy.select(&ctx), ctx.uncoverable_targets())
    };
    let selected = apply_selection(store, &selection);
    debug!(
        "{tick}: {} reshuffle selected {} of {} sensors, {} target(s) uncoverable",
        policy.name(),
        selected.len(),
        store.count,
        uncoverable.len(),
    );
    ReshuffleOutcome { selected, uncoverable }
}
