//! Planar coordinate type and containment primitives.
//!
//! Scenario space is the unit square `[0, 1] × [0, 1]`.  Coordinates are
//! `f64` so that radius comparisons near the disk boundary stay stable.

use serde::{Deserialize, Serialize};

/// An immutable 2-D coordinate in scenario space.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Prefer this over [`distance`](Self::distance)
    /// on hot paths; it avoids the square root.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// `true` if `other` lies inside the closed disk of `radius` around `self`.
    ///
    /// A point exactly on the boundary is contained.  The comparison is done
    /// on squared values so it agrees with the R-tree queries in
    /// `wsn-network`, which also work in squared distance.
    #[inline]
    pub fn covers(self, other: Point, radius: f64) -> bool {
        self.distance_squared(other) <= radius * radius
    }

    /// `true` if both coordinates are finite and inside `[0, 1]`.
    #[inline]
    pub fn in_unit_square(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && (0.0..=1.0).contains(&self.x)
            && (0.0..=1.0).contains(&self.y)
    }

    /// `[x, y]` array form, as used by `rstar`.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
