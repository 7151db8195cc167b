//! Per-tick energy model.
//!
//! Each `On` sensor spends one unit per tick.  `Off` and `Dead` sensors
//! spend nothing; duty-cycling is the only way to save energy.

use log::debug;

use wsn_core::{SensorId, SensorState};

use crate::SensorStore;

/// Outcome of one depletion pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Depletion {
    /// Number of sensors that spent energy this tick.
    pub drained: usize,
    /// Sensors whose battery reached zero this tick, ascending.
    pub died:    Vec<SensorId>,
}

/// Spend one tick of energy on every `On` sensor.
///
/// A sensor reaching zero becomes `Dead` regardless of its previous
/// `On` state.
pub fn deplete_tick(store: &mut SensorStore) -> Depletion {
    let mut out = Depletion::default();
    for (i, (state, battery)) in store.state.iter_mut().zip(store.battery.iter_mut()).enumerate() {
        if !state.is_on() {
            continue;
        }
        // On implies alive implies battery > 0.
        *battery = battery.saturating_sub(1);
        out.drained += 1;
        if *battery == 0 {
            *state = SensorState::Dead;
            let sensor = SensorId(i as u32);
            debug!("sensor {sensor} exhausted its battery");
            out.died.push(sensor);
        }
    }
    out
}
