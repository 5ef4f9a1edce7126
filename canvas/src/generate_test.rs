use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[test]
fn batch_size_stays_within_5_to_20() {
    let mut r = rng(1);
    for _ in 0..1000 {
        let n = batch_size(&mut r);
        assert!((5..=20).contains(&n), "batch size {n} out of range");
    }
}

#[test]
fn batch_size_reaches_both_ends() {
    let mut r = rng(2);
    let sizes: Vec<usize> = (0..5000).map(|_| batch_size(&mut r)).collect();
    assert!(sizes.contains(&5));
    assert!(sizes.contains(&20));
}

#[test]
fn random_polygons_returns_requested_count() {
    let mut r = rng(3);
    assert_eq!(random_polygons(&mut r, 7).len(), 7);
    assert!(random_polygons(&mut r, 0).is_empty());
}

#[test]
fn vertex_count_is_3_to_8() {
    let mut r = rng(4);
    for poly in random_polygons(&mut r, 500) {
        assert!((3..=8).contains(&poly.points.len()), "{} vertices", poly.points.len());
    }
}

#[test]
fn vertices_are_whole_numbers() {
    let mut r = rng(5);
    for poly in random_polygons(&mut r, 100) {
        for p in &poly.points {
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y.fract(), 0.0);
        }
    }
}

#[test]
fn vertices_stay_near_their_centre_range() {
    // Centre range plus the largest possible radius (80 * 1.4), floored.
    let max_reach = 80.0 * 1.4 + 1.0;
    let mut r = rng(6);
    for poly in random_polygons(&mut r, 500) {
        for p in &poly.points {
            assert!(p.x >= 100.0 - max_reach && p.x <= 900.0 + max_reach);
            assert!(p.y >= 40.0 - max_reach && p.y <= 360.0 + max_reach);
        }
    }
}

#[test]
fn generated_polygons_use_default_colors() {
    let mut r = rng(7);
    let poly = random_polygon(&mut r);
    assert_eq!(poly.fill, "#940025");
    assert_eq!(poly.stroke, "#FFF");
}

#[test]
fn generated_ids_are_unique() {
    let mut r = rng(8);
    let polys = random_polygons(&mut r, 200);
    let mut ids: Vec<_> = polys.iter().map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}

#[test]
fn same_seed_gives_same_batch() {
    let a = random_polygons(&mut rng(42), 10);
    let b = random_polygons(&mut rng(42), 10);
    assert_eq!(a, b);
}

#[test]
fn points_str_matches_points_for_generated_polygons() {
    let mut r = rng(9);
    for poly in random_polygons(&mut r, 20) {
        let expected: Vec<String> = poly.points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
        assert_eq!(poly.points_str(), expected.join(" "));
    }
}
