#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{Polygon, PolygonId, Zone};

/// Even-odd point-in-polygon test in world space.
///
/// Points exactly on an edge may land either way. Polygons with fewer than
/// three vertices contain nothing.
#[must_use]
pub fn polygon_contains(polygon: &Polygon, pt: Point) -> bool {
    let pts = &polygon.points;
    if pts.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = pts.len() - 1;
    for i in 0..pts.len() {
        let (a, b) = (pts[i], pts[j]);
        if (a.y > pt.y) != (b.y > pt.y) {
            let cross_x = a.x + (pt.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if pt.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Topmost polygon in `zone` under `world_pt`, if any.
#[must_use]
pub fn hit_test(zone: &Zone, world_pt: Point) -> Option<PolygonId> {
    zone.iter().rev().find(|p| polygon_contains(p, world_pt)).map(|p| p.id)
}
