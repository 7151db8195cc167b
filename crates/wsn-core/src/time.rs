//! Discrete simulation time.
//!
//! One tick is one unit of energy for an active sensor.  Tick 0 is the
//! state produced by initialization, before any energy has been spent.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An absolute simulation tick counter.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The tick immediately after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        self.offset(1)
    }

    /// `true` if a reshuffle is due at this tick for the given interval.
    ///
    /// Tick 0 is always a reshuffle point.  An interval of 0 is rejected by
    /// parameter validation; here it is treated as "only at tick 0".
    #[inline]
    pub fn is_reshuffle_point(self, interval: u32) -> bool {
        if interval == 0 {
            return self.0 == 0;
        }
        self.0.is_multiple_of(interval as u64)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
