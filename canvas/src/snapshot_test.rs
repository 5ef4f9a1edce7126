use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::generate::random_polygons;

fn sample() -> LayoutSnapshot {
    let mut rng = SmallRng::seed_from_u64(11);
    LayoutSnapshot::new(
        Zone::from_polygons(random_polygons(&mut rng, 3)),
        Zone::from_polygons(random_polygons(&mut rng, 2)),
        ViewBox::new(-40.0, 12.5, 640.0, 256.0),
    )
}

#[test]
fn new_uses_current_version() {
    assert_eq!(sample().version, SNAPSHOT_VERSION);
}

#[test]
fn json_round_trip_preserves_layout() {
    let snap = sample();
    let raw = snap.to_json().unwrap();
    let back = LayoutSnapshot::from_json(&raw).unwrap();
    assert_eq!(back, snap);
    assert_eq!(back.polygon_count(), 5);
}

#[test]
fn json_shape_has_named_zones() {
    let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
    assert_eq!(value["version"], 1);
    assert!(value["buffer"].is_array());
    assert!(value["work"].is_array());
    assert_eq!(value["work_view"]["w"], 640.0);
    assert!(value["buffer"][0]["points"][0]["x"].is_number());
}

#[test]
fn rejects_garbage() {
    let err = LayoutSnapshot::from_json("not json").unwrap_err();
    assert!(matches!(err, SnapshotError::Parse(_)));
}

#[test]
fn rejects_unknown_version() {
    let mut snap = sample();
    snap.version = 99;
    let raw = snap.to_json().unwrap();
    let err = LayoutSnapshot::from_json(&raw).unwrap_err();
    assert!(matches!(err, SnapshotError::UnsupportedVersion(99)));
    assert_eq!(err.to_string(), "unsupported layout snapshot version: 99");
}

#[test]
fn rejects_zero_size_view() {
    let mut snap = sample();
    snap.work_view.w = 0.0;
    let raw = snap.to_json().unwrap();
    assert!(matches!(LayoutSnapshot::from_json(&raw), Err(SnapshotError::InvalidView)));
}
