//! `wsn-schedule`: deciding which sensors are `On`.
//!
//! At tick 0 and every `reshuffle_interval` ticks the simulation asks a
//! [`ReshufflePolicy`] for the set of sensors to power.  Every other living
//! sensor is switched `Off`; `Dead` sensors are never touched.
//!
//! | Policy                    | Rule                                                   |
//! |---------------------------|--------------------------------------------------------|
//! | [`GreedyReshuffle`]       | Per target in id order, pick the highest-battery coverer (default) |
//! | [`MinimalCoverReshuffle`] | Greedy, then drop redundant sensors, lowest battery first |

pub mod apply;
pub mod context;
pub mod greedy;
pub mod minimal;
pub mod policy;


pub use apply::{ReshuffleOutcome, apply_selection, reshuffle};
pub use context::ReshuffleContext;
pub use greedy::GreedyReshuffle;
pub use minimal::MinimalCoverReshuffle;
pub use policy::{ReshufflePolicy, policy_by_name};
