//! `wsn-output`: reports and output writers for the wsn-lifetime simulator.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                  |
//! |-----------|-------------|------------------------------------------------|
//! | *(none)*  | CSV         | `sensor_snapshots.csv`, `tick_summaries.csv`   |
//! | `sqlite`  | SQLite      | `output.db`                                    |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `wsn_sim::SimObserver`.
//!
//! [`RunReport`] summarizes a finished history as text or JSON.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wsn_output::{CsvWriter, RunReport, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! manager.run_with(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//!
//! let report = RunReport::from_states(manager.simulation_states(), manager.stop_reason());
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use report::{RunReport, SensorReport};
pub use row::{SensorSnapshotRow, TickSummaryRow};
pub use writer::{OutputWriter, write_history};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
