//! `wsn-core`: foundational types for the `wsn-lifetime` simulator.
//!
//! This crate is a dependency of every other `wsn-*` crate.  It has no
//! `wsn-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`ids`]        | `SensorId`, `TargetId`                                    |
//! | [`geo`]        | `Point`, closed-disk containment                          |
//! | [`time`]       | `Tick`                                                    |
//! | [`rng`]        | `SimRng` (seeded scenario generation)                     |
//! | [`params`]     | `SimulationParameters`, `StopCondition`                   |
//! | [`scenario`]   | `SimulationScenario`                                      |
//! | [`state`]      | `SensorState`, `SimulationState`                          |
//! | [`loader`]     | JSON loading for parameters and scenarios                 |
//! | [`error`]      | `WsnError`, `WsnResult`                                   |

pub mod error;
pub mod geo;
pub mod ids;
pub mod loader;
pub mod params;
pub mod rng;
pub mod scenario;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WsnError, WsnResult};
pub use geo::Point;
pub use ids::{SensorId, TargetId};
pub use loader::{
    load_json, load_json_reader, load_parameters_json, load_parameters_reader,
    load_scenario_json, load_scenario_reader,
};
pub use params::{SimulationParameters, StopCondition};
pub use rng::SimRng;
pub use scenario::SimulationScenario;
pub use state::{SensorState, SimulationState};
pub use time::Tick;
