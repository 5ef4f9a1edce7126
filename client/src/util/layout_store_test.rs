use canvas::camera::{Point, ViewBox};
use canvas::doc::{Polygon, PolygonId, Zone};

use super::*;

fn sample() -> LayoutSnapshot {
    let poly = Polygon::new(
        PolygonId::from_u128(7),
        vec![Point::new(1.0, 2.0), Point::new(30.0, 2.0), Point::new(15.0, 40.0)],
        "#940025",
        "#FFF",
    );
    LayoutSnapshot::new(Zone::new(), Zone::from_polygons(vec![poly]), ViewBox::new(10.0, 20.0, 500.0, 200.0))
}

#[test]
fn decode_accepts_encoded_layout() {
    let snap = sample();
    let raw = snap.to_json().unwrap();
    assert_eq!(decode(&raw), Some(snap));
}

#[test]
fn decode_rejects_garbage() {
    assert_eq!(decode("not json"), None);
    assert_eq!(decode("{}"), None);
}

#[test]
fn decode_rejects_unknown_version() {
    let mut snap = sample();
    snap.version = 99;
    let raw = snap.to_json().unwrap();
    assert_eq!(decode(&raw), None);
}

#[test]
fn decode_rejects_degenerate_view() {
    let mut snap = sample();
    snap.work_view = ViewBox::new(0.0, 0.0, 0.0, 400.0);
    let raw = snap.to_json().unwrap();
    assert_eq!(decode(&raw), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_is_absent_outside_the_browser() {
    assert!(!save(&sample()));
    assert_eq!(load(), None);
    clear();
}
