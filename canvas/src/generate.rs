//! Random polygon generation for the buffer zone.
//!
//! Polygons are star-ish blobs: vertices are spread evenly around a centre
//! with a little angular jitter and a per-vertex radius scale, then floored to
//! whole world units. All randomness comes from the caller's [`Rng`], so a
//! seeded generator gives a reproducible batch.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::camera::Point;
use crate::consts::{
    ANGLE_JITTER, BATCH_MIN, BATCH_SPREAD, CENTER_X_RANGE, CENTER_Y_RANGE, POLYGON_FILL, POLYGON_STROKE,
    RADIUS_RANGE, RADIUS_SCALE_MIN, RADIUS_SCALE_SPREAD, VERTICES_MIN, VERTICES_SPREAD,
};
use crate::doc::Polygon;

/// Pick how many polygons one "create" click produces (5..=20).
pub fn batch_size<R: Rng + ?Sized>(rng: &mut R) -> usize {
    BATCH_MIN + rng.random_range(0..BATCH_SPREAD)
}

/// Generate `count` random polygons.
pub fn random_polygons<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Polygon> {
    (0..count).map(|_| random_polygon(rng)).collect()
}

/// Generate a single random polygon.
pub fn random_polygon<R: Rng + ?Sized>(rng: &mut R) -> Polygon {
    let vertices = VERTICES_MIN + rng.random_range(0..VERTICES_SPREAD);
    let cx = in_range(rng, CENTER_X_RANGE);
    let cy = in_range(rng, CENTER_Y_RANGE);
    let r = in_range(rng, RADIUS_RANGE);

    #[allow(clippy::cast_precision_loss)]
    let n = vertices as f64;
    let points = (0..vertices)
        .map(|j| {
            #[allow(clippy::cast_precision_loss)]
            let j = j as f64;
            let ang = (j / n) * TAU + (rng.random::<f64>() - 0.5) * ANGLE_JITTER;
            let rad = r * (RADIUS_SCALE_MIN + rng.random::<f64>() * RADIUS_SCALE_SPREAD);
            Point::new((cx + ang.cos() * rad).floor(), (cy + ang.sin() * rad).floor())
        })
        .collect();

    let id = uuid::Builder::from_random_bytes(rng.random()).into_uuid();
    Polygon::new(id, points, POLYGON_FILL, POLYGON_STROKE)
}

fn in_range<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    lo + rng.random::<f64>() * (hi - lo)
}

