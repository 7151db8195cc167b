//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use wsn_core::{SimulationState, Tick};
use wsn_sim::{SimObserver, StopReason};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries and sensor snapshots to any
/// [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
///
/// A run paused by cancellation can be resumed with the same observer; states
/// already written are not written again.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    written_through:   Option<Tick>,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that snapshots every tick.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            snapshot_interval: 1,
            written_through:   None,
            last_error:        None,
        }
    }

    /// Only write per-sensor snapshots on ticks that are multiples of
    /// `interval`.  Tick summaries are always written.  `0` disables
    /// snapshots.
    pub fn with_snapshot_interval(mut self, interval: u64) -> Self {
        self.snapshot_interval = interval;
        self
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Flush the writer.  Called automatically when a stop rule fires; call
    /// it yourself after a cancelled run.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    fn record(&mut self, state: &SimulationState) {
        if self.written_through.is_some_and(|t| state.tick <= t) {
            return;
        }
        let snapshots = self.snapshot_interval > 0 && state.tick.0 % self.snapshot_interval == 0;
        let result = self.writer.write_state(state, snapshots);
        self.store_err(result);
        self.written_through = Some(state.tick);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_run_start(&mut self, history: &[SimulationState]) {
        for state in history {
            self.record(state);
        }
    }

    fn on_tick_end(&mut self, state: &SimulationState) {
        self.record(state);
    }

    fn on_stop(&mut self, _final_tick: Tick, _reason: StopReason) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
