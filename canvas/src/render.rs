//! Scene building: turns editor state into the values the SVG templates bind.
//!
//! The host renders with SVG elements rather than drawing pixels, so this
//! module produces plain data (grid ticks, polygon attributes, ghost points)
//! and never touches the DOM. Nothing here mutates application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Point, ViewBox};
use crate::consts::{AXIS_MIN_STEP, AXIS_X_DIVISIONS, AXIS_Y_DIVISIONS};
use crate::doc::{Polygon, PolygonId, points_to_str};
use crate::engine::EditorCore;

/// Label offset from a vertical grid line, in world units.
const X_LABEL_DX: f64 = 2.0;
/// Label baseline below the top edge of the view, in world units.
const X_LABEL_DY: f64 = 12.0;
/// Label offset from the left edge of the view, in world units.
const Y_LABEL_DX: f64 = 4.0;
/// Label baseline above a horizontal grid line, in world units.
const Y_LABEL_DY: f64 = -2.0;

/// Orientation of an axis grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAxis {
    /// Vertical line at a constant x.
    X,
    /// Horizontal line at a constant y.
    Y,
}

/// One grid line with its coordinate label, in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub axis: TickAxis,
    pub start: Point,
    pub end: Point,
    pub label_at: Point,
    pub label: String,
}

/// Attributes for one `<polygon>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonView {
    pub id: PolygonId,
    pub points: String,
    pub fill: String,
    pub stroke: String,
}

impl From<&Polygon> for PolygonView {
    fn from(p: &Polygon) -> Self {
        Self { id: p.id, points: p.points_str(), fill: p.fill.clone(), stroke: p.stroke.clone() }
    }
}

/// Grid spacing for a view: `(x_step, y_step)`.
///
/// Ten columns across and eight rows down, rounded to whole units and never
/// closer than [`AXIS_MIN_STEP`].
#[must_use]
pub fn axis_steps(vb: &ViewBox) -> (f64, f64) {
    let x_step = (vb.w / AXIS_X_DIVISIONS).round().max(AXIS_MIN_STEP);
    let y_step = (vb.h / AXIS_Y_DIVISIONS).round().max(AXIS_MIN_STEP);
    (x_step, y_step)
}

/// Grid lines and labels covering the visible part of the work zone.
///
/// Ticks start at the floored view origin and continue while inside the view.
/// An unusable view box yields no ticks.
#[must_use]
pub fn axis_ticks(vb: &ViewBox) -> Vec<AxisTick> {
    if !vb.is_valid() {
        return Vec::new();
    }
    let (x_step, y_step) = axis_steps(vb);
    let mut ticks = Vec::new();

    let mut x = vb.x.floor();
    while x < vb.x + vb.w {
        ticks.push(AxisTick {
            axis: TickAxis::X,
            start: Point::new(x, vb.y),
            end: Point::new(x, vb.y + vb.h),
            label_at: Point::new(x + X_LABEL_DX, vb.y + X_LABEL_DY),
            label: format_label(x),
        });
        x += x_step;
    }

    let mut y = vb.y.floor();
    while y < vb.y + vb.h {
        ticks.push(AxisTick {
            axis: TickAxis::Y,
            start: Point::new(vb.x, y),
            end: Point::new(vb.x + vb.w, y),
            label_at: Point::new(vb.x + Y_LABEL_DX, y + Y_LABEL_DY),
            label: format_label(y),
        });
        y += y_step;
    }
    ticks
}

fn format_label(value: f64) -> String {
    // `+ 0.0` folds -0 into 0 so labels never read "-0".
    format!("{}", value.round() + 0.0)
}

/// `<polygon>` attributes for every polygon, in draw order.
#[must_use]
pub fn polygon_views<'a>(polygons: impl IntoIterator<Item = &'a Polygon>) -> Vec<PolygonView> {
    polygons.into_iter().map(PolygonView::from).collect()
}

/// The drag ghost as a `<polygon>` in client-pixel space, if a drag is in progress.
#[must_use]
pub fn ghost_view(core: &EditorCore) -> Option<PolygonView> {
    let polygon = core.dragging()?;
    let points = core.ghost()?;
    Some(PolygonView {
        id: polygon.id,
        points: points_to_str(&points),
        fill: polygon.fill.clone(),
        stroke: polygon.stroke.clone(),
    })
}
