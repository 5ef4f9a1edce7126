use uuid::Uuid;

use super::*;
use crate::camera::{ScreenRect, ViewBox};

fn poly() -> Polygon {
    Polygon::new(
        Uuid::new_v4(),
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 8.0)],
        "#940025",
        "#FFF",
    )
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert!(!state.is_panning());
    assert!(state.dragged().is_none());
}

#[test]
fn panning_state_reports_panning() {
    let state = InputState::Panning { last_client: Point::new(1.0, 2.0) };
    assert!(state.is_panning());
    assert!(!state.is_idle());
    assert!(state.dragged().is_none());
}

#[test]
fn dragging_state_exposes_polygon() {
    let p = poly();
    let id = p.id;
    let state = InputState::DraggingPolygon {
        polygon: p,
        source: ZoneKind::Buffer,
        source_index: 0,
        source_mapping: ZoneMapping::new(ViewBox::default(), ScreenRect::new(0.0, 0.0, 1000.0, 400.0)),
        grab_client: Point::new(3.0, 4.0),
        current_client: Point::new(3.0, 4.0),
    };
    assert_eq!(state.dragged().map(|p| p.id), Some(id));
    assert!(!state.is_idle());
    assert!(!state.is_panning());
}
