//! Structure-of-Arrays storage for sensor state.
//!
//! Every `Vec` field has exactly `count` elements and `SensorId` is the
//! index into all of them:
//!
//! ```ignore
//! let level = store.battery[sensor.index()];
//! ```
//!
//! Positions never change after construction.  Battery and state are
//! mutated only by the battery model and by reshuffle selection.

use wsn_core::{Point, SensorId, SensorState};

/// Per-sensor simulation state.
#[derive(Clone, Debug)]
pub struct SensorStore {
    /// Number of sensors.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Fixed position of each sensor.
    pub position: Vec<Point>,

    /// Remaining energy, in ticks of active operation.
    pub battery: Vec<u32>,

    /// Duty-cycle state.  `Dead` exactly when `battery == 0`.
    pub state: Vec<SensorState>,
}

impl SensorStore {
    /// Create a store where every sensor starts with `initial_battery`.
    pub fn new(positions: Vec<Point>, initial_battery: u32) -> Self {
        let batteries = vec![initial_battery; positions.len()];
        Self::with_batteries(positions, batteries)
    }

    /// Create a store with an explicit battery level per sensor.
    ///
    /// Sensors start `Off`; the first reshuffle decides who is `On`.  A
    /// sensor with an empty battery starts `Dead`.
    ///
    /// `batteries` must be the same length as `positions`; `SimBuilder`
    /// checks this before calling.
    pub fn with_batteries(positions: Vec<Point>, batteries: Vec<u32>) -> Self {
        debug_assert_eq!(positions.len(), batteries.len());
        let state = batteries
            .iter()
            .map(|&b| if b == 0 { SensorState::Dead } else { SensorState::Off })
            .collect();
        Self {
            count: positions.len(),
            position: positions,
            battery: batteries,
            state,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `SensorId`s in ascending index order.
    pub fn sensor_ids(&self) -> impl Iterator<Item = SensorId> + '_ {
        (0..self.count as u32).map(SensorId)
    }

    #[inline]
    pub fn is_alive(&self, sensor: SensorId) -> bool {
        !self.state[sensor.index()].is_dead()
    }

    /// `true` when no sensor can ever be switched on again.
    pub fn all_dead(&self) -> bool {
        self.state.iter().all(|s| s.is_dead())
    }

    pub fn count_in(&self, state: SensorState) -> usize {
        self.state.iter().filter(|&&s| s == state).count()
    }

    /// Positions of the sensors currently `On`, in ascending id order.
    pub fn active_positions(&self) -> Vec<Point> {
        self.position
            .iter()
            .zip(&self.state)
            .filter(|(_, s)| s.is_on())
            .map(|(&p, _)| p)
            .collect()
    }

    /// Switch a living sensor `On` or `Off`.
    ///
    /// Returns `false` and leaves the sensor untouched if it is `Dead`;
    /// death is permanent.  Use the battery model to kill a sensor.
    pub fn set_active(&mut self, sensor: SensorId, on: bool) -> bool {
        let state = &mut self.state[sensor.index()];
        if state.is_dead() {
            return false;
        }
        *state = if on { SensorState::On } else { SensorState::Off };
        true
    }
}
