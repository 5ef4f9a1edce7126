//! Input model: mouse buttons, wheel deltas, and the gesture state machine.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying all context needed to follow the pointer and to
//! finish (or undo) the gesture on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{Point, ZoneMapping};
use crate::doc::{Polygon, ZoneKind};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
    /// Any other button, such as back or forward.
    Other,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the work zone by dragging empty space.
    Panning {
        /// Client position of the previous pointer event, used to compute the pan delta.
        last_client: Point,
    },
    /// The user is carrying a polygon lifted out of its zone.
    DraggingPolygon {
        /// The lifted polygon, still in its source zone's world coordinates.
        polygon: Polygon,
        /// Zone the polygon was lifted from; it returns there if the drop misses.
        source: ZoneKind,
        /// Index the polygon held in its source zone.
        source_index: usize,
        /// Source zone mapping captured at grab time, used for both the ghost and the drop.
        source_mapping: ZoneMapping,
        /// Client position of the pointer-down that started the drag.
        grab_client: Point,
        /// Latest client position of the pointer.
        current_client: Point,
    },
}

impl InputState {
    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the work zone is being panned.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// The polygon being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<&Polygon> {
        match self {
            Self::DraggingPolygon { polygon, .. } => Some(polygon),
            _ => None,
        }
    }
}
