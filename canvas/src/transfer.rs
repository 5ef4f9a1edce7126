//! Re-projection of a dragged polygon from one zone's coordinates into another's.
//!
//! While dragging, the polygon keeps the on-screen size it had in its source
//! zone and moves rigidly with the pointer. On drop each vertex is therefore
//! taken to client pixels through the source mapping, shifted by the pointer
//! travel, and brought back into world units through the target mapping. The
//! two zones' view boxes are independent, so the polygon's world size changes
//! whenever their zoom levels differ.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use crate::camera::{Point, ZoneMapping};
use crate::doc::Polygon;

/// Client-pixel position of `polygon`'s vertices after the pointer moved from
/// `grab_client` to `current_client`, as drawn by the drag ghost.
#[must_use]
pub fn ghost_points(polygon: &Polygon, from: &ZoneMapping, grab_client: Point, current_client: Point) -> Option<Vec<Point>> {
    let delta = current_client.delta_from(grab_client);
    polygon
        .points
        .iter()
        .map(|p| from.world_to_client(*p).map(|c| c.offset(delta)))
        .collect()
}

/// Re-project `polygon` from the `from` zone into the `to` zone for a drag
/// that started at `grab_client` and was released at `drop_client`.
///
/// Id and colors are preserved. Returns `None` when either mapping is
/// degenerate, in which case the caller should abort the move.
#[must_use]
pub fn reproject(
    polygon: &Polygon,
    from: &ZoneMapping,
    to: &ZoneMapping,
    grab_client: Point,
    drop_client: Point,
) -> Option<Polygon> {
    if !from.is_valid() || !to.is_valid() {
        return None;
    }
    let delta = drop_client.delta_from(grab_client);
    polygon.try_map_points(|p| {
        let client = from.world_to_client(p)?.offset(delta);
        to.client_to_world(client)
    })
}
