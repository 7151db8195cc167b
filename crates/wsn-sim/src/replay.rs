//! Cursor over a recorded history.

use wsn_core::{SimulationState, Tick};

/// Forward iterator over recorded states that can be rewound or moved to a
/// given tick.
///
/// ```rust,ignore
/// let mut replay = manager.replay();
/// replay.seek(Tick(10));
/// for state in replay.by_ref().take(5) { ... }
/// replay.rewind();
/// ```
#[derive(Clone, Debug)]
pub struct Replay<'a> {
    states: &'a [SimulationState],
    cursor: usize,
}

impl<'a> Replay<'a> {
    pub fn new(states: &'a [SimulationState]) -> Self {
        Self { states, cursor: 0 }
    }

    /// Go back to tick 0.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Position the cursor so the next call to `next` yields the state at
    /// `tick`.  Returns `false` (cursor unchanged) if no such state exists.
    pub fn seek(&mut self, tick: Tick) -> bool {
        // Histories start at tick 0 with no gaps, so the tick is the index.
        match usize::try_from(tick.0) {
            Ok(i) if i < self.states.len() => {
                self.cursor = i;
                true
            }
            _ => false,
        }
    }

    /// The state the next call to `next` will return.
    pub fn peek(&self) -> Option<&'a SimulationState> {
        self.states.get(self.cursor)
    }

    /// Number of states in the whole history.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<'a> Iterator for Replay<'a> {
    type Item = &'a SimulationState;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.states.get(self.cursor)?;
        self.cursor += 1;
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.states.len().saturating_sub(self.cursor);
        (rest, Some(rest))
    }
}
