//! R-tree index over a fixed set of scenario points.
//!
//! Used once per run to find, for each target, the sensors inside the
//! sensing disk.  Queries work in squared distance with an inclusive
//! bound, the same comparison as [`Point::covers`], so the indexed and
//! brute-force coverage paths agree exactly at the disk boundary.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use wsn_core::Point;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` point and its position in the
/// original slice.
#[derive(Clone)]
struct IndexedPoint {
    point: [f64; 2],
    idx:   u32,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── PointIndex ────────────────────────────────────────────────────────────────

/// Static spatial index; bulk-loaded once, never mutated.
pub struct PointIndex {
    tree: RTree<IndexedPoint>,
    len:  usize,
}

impl PointIndex {
    /// Bulk-load `points`.  Index values returned by queries are positions
    /// in this slice.
    pub fn new(points: &[Point]) -> Self {
        let entries: Vec<IndexedPoint> = points
            .iter()
            .enumerate()
            .map(|(i, p)| IndexedPoint { point: p.to_array(), idx: i as u32 })
            .collect();
        Self {
            len:  entries.len(),
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices of all points inside the closed disk of `radius` around
    /// `center`, in ascending order.
    pub fn within(&self, center: Point, radius: f64) -> Vec<u32> {
        let mut hits: Vec<u32> = self
            .tree
            .locate_within_distance(center.to_array(), radius * radius)
            .map(|e| e.idx)
            .collect();
        hits.sort_unstable();
        hits
    }
}
