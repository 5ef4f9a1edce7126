#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn rect() -> ScreenRect {
    ScreenRect::new(100.0, 50.0, 500.0, 200.0)
}

// --- Point ---

#[test]
fn point_delta_and_offset_are_inverse() {
    let a = Point::new(10.0, 20.0);
    let b = Point::new(3.0, -4.0);
    let d = a.delta_from(b);
    assert_eq!(d, Point::new(7.0, 24.0));
    assert_eq!(b.offset(d), a);
}

// --- ViewBox ---

#[test]
fn view_box_default_is_1000_by_400() {
    let vb = ViewBox::default();
    assert_eq!(vb, ViewBox::new(0.0, 0.0, 1000.0, 400.0));
}

#[test]
fn view_box_attr_formats_integers_without_fraction() {
    assert_eq!(ViewBox::default().attr(), "0 0 1000 400");
    assert_eq!(ViewBox::new(-12.5, 3.0, 800.0, 320.0).attr(), "-12.5 3 800 320");
}

#[test]
fn view_box_zero_width_is_invalid() {
    assert!(!ViewBox::new(0.0, 0.0, 0.0, 400.0).is_valid());
    assert!(!ViewBox::new(0.0, 0.0, 10.0, f64::NAN).is_valid());
}

// --- zoom_at ---

#[test]
fn zoom_out_grows_box_by_factor() {
    let mut vb = ViewBox::default();
    vb.zoom_at(Point::new(100.0, 50.0), rect(), 120.0);
    assert!(approx_eq(vb.w, 1120.0));
    assert!(approx_eq(vb.h, 448.0));
}

#[test]
fn zoom_in_shrinks_box_by_factor() {
    let mut vb = ViewBox::default();
    vb.zoom_at(Point::new(100.0, 50.0), rect(), -120.0);
    assert!(approx_eq(vb.w, 900.0));
    assert!(approx_eq(vb.h, 360.0));
}

#[test]
fn zero_delta_zooms_in() {
    let mut vb = ViewBox::default();
    vb.zoom_at(Point::new(100.0, 50.0), rect(), 0.0);
    assert!(approx_eq(vb.w, 900.0));
}

#[test]
fn zoom_keeps_world_point_under_cursor_fixed() {
    let r = rect();
    let cursor = Point::new(420.0, 130.0);
    let mut vb = ViewBox::new(-30.0, 15.0, 1000.0, 400.0);
    let before = ZoneMapping::new(vb, r).client_to_world(cursor).unwrap();

    vb.zoom_at(cursor, r, 1.0);
    let after_out = ZoneMapping::new(vb, r).client_to_world(cursor).unwrap();
    assert!(point_approx_eq(before, after_out));

    vb.zoom_at(cursor, r, -1.0);
    let after_in = ZoneMapping::new(vb, r).client_to_world(cursor).unwrap();
    assert!(point_approx_eq(before, after_in));
}

#[test]
fn zoom_in_clamps_at_min_width_and_keeps_aspect() {
    let mut vb = ViewBox::default();
    for _ in 0..200 {
        vb.zoom_at(Point::new(350.0, 150.0), rect(), -1.0);
    }
    assert!(approx_eq(vb.w, crate::consts::MIN_VIEW_WIDTH));
    assert!(approx_eq(vb.w / vb.h, 2.5));
}

#[test]
fn zoom_out_clamps_at_max_width() {
    let mut vb = ViewBox::default();
    for _ in 0..200 {
        vb.zoom_at(Point::new(350.0, 150.0), rect(), 1.0);
    }
    assert!(approx_eq(vb.w, crate::consts::MAX_VIEW_WIDTH));
}

#[test]
fn zoom_with_degenerate_rect_is_noop() {
    let mut vb = ViewBox::default();
    vb.zoom_at(Point::new(0.0, 0.0), ScreenRect::new(0.0, 0.0, 0.0, 200.0), 1.0);
    assert_eq!(vb, ViewBox::default());
}

// --- pan_by ---

#[test]
fn pan_scales_pixel_delta_by_view_ratio() {
    let mut vb = ViewBox::default();
    // 500px wide rect shows 1000 world units: 1px = 2 units.
    vb.pan_by(10.0, 5.0, rect());
    assert!(approx_eq(vb.x, -20.0));
    assert!(approx_eq(vb.y, -10.0));
    assert!(approx_eq(vb.w, 1000.0));
    assert!(approx_eq(vb.h, 400.0));
}

#[test]
fn pan_keeps_content_under_pointer() {
    let r = rect();
    let mut vb = ViewBox::new(40.0, -8.0, 700.0, 280.0);
    let grab = Point::new(200.0, 100.0);
    let world = ZoneMapping::new(vb, r).client_to_world(grab).unwrap();
    let release = Point::new(260.0, 70.0);
    vb.pan_by(release.x - grab.x, release.y - grab.y, r);
    let moved = ZoneMapping::new(vb, r).client_to_world(release).unwrap();
    assert!(point_approx_eq(world, moved));
}

#[test]
fn pan_with_degenerate_rect_is_noop() {
    let mut vb = ViewBox::default();
    vb.pan_by(10.0, 10.0, ScreenRect::default());
    assert_eq!(vb, ViewBox::default());
}

// --- ScreenRect ---

#[test]
fn screen_rect_contains_is_inclusive() {
    let r = rect();
    assert!(r.contains(Point::new(100.0, 50.0)));
    assert!(r.contains(Point::new(600.0, 250.0)));
    assert!(r.contains(Point::new(300.0, 100.0)));
    assert!(!r.contains(Point::new(99.9, 100.0)));
    assert!(!r.contains(Point::new(300.0, 250.1)));
}

#[test]
fn screen_rect_edges() {
    let r = rect();
    assert_eq!(r.right(), 600.0);
    assert_eq!(r.bottom(), 250.0);
}

// --- ZoneMapping ---

#[test]
fn client_to_world_interpolates_linearly() {
    let m = ZoneMapping::new(ViewBox::default(), rect());
    let w = m.client_to_world(Point::new(350.0, 150.0)).unwrap();
    assert!(point_approx_eq(w, Point::new(500.0, 200.0)));
}

#[test]
fn world_to_client_interpolates_linearly() {
    let m = ZoneMapping::new(ViewBox::new(100.0, 0.0, 500.0, 200.0), rect());
    let c = m.world_to_client(Point::new(350.0, 100.0)).unwrap();
    assert!(point_approx_eq(c, Point::new(350.0, 150.0)));
}

#[test]
fn mapping_conversions_round_trip() {
    let m = ZoneMapping::new(ViewBox::new(-250.0, 33.0, 640.0, 90.0), ScreenRect::new(8.0, 412.0, 983.0, 400.0));
    let p = Point::new(17.25, -4.5);
    let back = m.client_to_world(m.world_to_client(p).unwrap()).unwrap();
    assert!(point_approx_eq(p, back));
}

#[test]
fn degenerate_mapping_returns_none() {
    let m = ZoneMapping::new(ViewBox::default(), ScreenRect::new(0.0, 0.0, 100.0, 0.0));
    assert!(m.client_to_world(Point::new(1.0, 1.0)).is_none());
    assert!(m.world_to_client(Point::new(1.0, 1.0)).is_none());
}
