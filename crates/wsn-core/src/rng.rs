//! Deterministic RNG for scenario generation.
//!
//! The simulation itself is fully deterministic and never draws random
//! numbers; randomness is confined to building scenarios.  The same seed
//! always yields the same positions, in the same order.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Point;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG used to place targets and sensors.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, e.g. one stream
    /// for targets and one for sensors so that changing the sensor count does
    /// not move any target.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// A point drawn uniformly from the unit square.
    #[inline]
    pub fn unit_point(&mut self) -> Point {
        let x = self.0.gen_range(0.0..=1.0);
        let y = self.0.gen_range(0.0..=1.0);
        Point::new(x, y)
    }
}
