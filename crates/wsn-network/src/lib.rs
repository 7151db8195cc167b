//! `wsn-network`: the static sensor field: who is where, who is powered,
//! and which targets are covered.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`store`]    | `SensorStore` (SoA position / battery / state arrays)         |
//! | [`battery`]  | `deplete_tick`, `Depletion`                                   |
//! | [`index`]    | `PointIndex` (R-tree over scenario points)                    |
//! | [`coverage`] | `compute_coverage` (reference), `CoverageMap` (precomputed)   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                       |
//! |------------|--------------------------------------------------------------|
//! | `parallel` | Builds `CoverageMap` covering sets with Rayon.               |

pub mod battery;
pub mod coverage;
pub mod index;
pub mod store;


pub use battery::{Depletion, deplete_tick};
pub use coverage::{CoverageMap, compute_coverage};
pub use index::PointIndex;
pub use store::SensorStore;
