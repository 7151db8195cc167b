//! The `OutputWriter` trait implemented by all backend writers.

use wsn_core::SimulationState;

use crate::{OutputResult, SensorSnapshotRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// When driven by [`SimOutputObserver`][crate::SimOutputObserver], errors are
/// stored internally and retrieved with `take_error`.
pub trait OutputWriter {
    /// Write a batch of sensor snapshots.
    fn write_snapshots(&mut self, rows: &[SensorSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write the summary row and, if `snapshots` is set, one snapshot row per
    /// sensor for `state`.
    fn write_state(&mut self, state: &SimulationState, snapshots: bool) -> OutputResult<()> {
        self.write_tick_summary(&TickSummaryRow::from_state(state))?;
        if snapshots {
            let rows = SensorSnapshotRow::from_state(state);
            if !rows.is_empty() {
                self.write_snapshots(&rows)?;
            }
        }
        Ok(())
    }
}

/// Write a whole recorded history and finish the writer.
pub fn write_history<W: OutputWriter>(writer: &mut W, states: &[SimulationState]) -> OutputResult<()> {
    for state in states {
        writer.write_state(state, true)?;
    }
    writer.finish()
}
