//! `wsn-sim`: tick loop and run lifecycle for the wsn-lifetime simulator.
//!
//! # Tick loop
//!
//! ```text
//! tick 0 (initialize):
//!   reshuffle → coverage → stop check → record
//! tick t ≥ 1:
//!   ① Battery   : every On sensor spends one unit; empty ones die.
//!   ② Reshuffle : iff t % reshuffle_interval == 0, the policy picks
//!                 the On set among living sensors.
//!   ③ Coverage  : recompute which targets an On sensor reaches.
//!   ④ Stop      : stop condition, then all-dead, then max_ticks.
//!   ⑤ Record    : append the SimulationState to the history.
//! ```
//!
//! Everything runs on the caller's thread, in this fixed order, so the same
//! parameters and scenario always produce the same history.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wsn_sim::SimulationManager;
//!
//! let mut manager = SimulationManager::new();
//! manager.load_from_json(Path::new("scenario.json"))?;
//! manager.initialize()?;
//! manager.run()?;
//! let last = manager.simulation_states().last();
//! ```

pub mod builder;
pub mod error;
pub mod manager;
pub mod observer;
pub mod replay;
pub mod sim;
pub mod stop;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use manager::{Lifecycle, SimulationManager};
pub use observer::{NoopObserver, SimObserver};
pub use replay::Replay;
pub use sim::Simulation;
pub use stop::{StopEvaluator, StopReason};
