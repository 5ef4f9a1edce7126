//! Shared numeric constants for the canvas crate.

// ── Viewport ────────────────────────────────────────────────────

/// Width of the initial view box for both zones, in world units.
pub const DEFAULT_VIEW_WIDTH: f64 = 1000.0;

/// Height of the initial view box for both zones, in world units.
pub const DEFAULT_VIEW_HEIGHT: f64 = 400.0;

/// View box scale applied per wheel notch when scrolling down (zoom out).
pub const ZOOM_OUT_FACTOR: f64 = 1.12;

/// View box scale applied per wheel notch when scrolling up (zoom in).
pub const ZOOM_IN_FACTOR: f64 = 0.9;

/// Narrowest work view box, in world units.
pub const MIN_VIEW_WIDTH: f64 = 50.0;

/// Widest work view box, in world units.
pub const MAX_VIEW_WIDTH: f64 = 50_000.0;

// ── Axes ────────────────────────────────────────────────────────

/// Number of vertical grid divisions across the view width.
pub const AXIS_X_DIVISIONS: f64 = 10.0;

/// Number of horizontal grid divisions across the view height.
pub const AXIS_Y_DIVISIONS: f64 = 8.0;

/// Smallest spacing between grid lines, in world units.
pub const AXIS_MIN_STEP: f64 = 10.0;

// ── Generation ──────────────────────────────────────────────────

/// Fewest polygons produced by one "create" click.
pub const BATCH_MIN: usize = 5;

/// Number of distinct batch sizes above [`BATCH_MIN`] (5..=20).
pub const BATCH_SPREAD: usize = 16;

/// Fewest vertices on a generated polygon.
pub const VERTICES_MIN: usize = 3;

/// Number of distinct vertex counts above [`VERTICES_MIN`] (3..=8).
pub const VERTICES_SPREAD: usize = 6;

/// Horizontal range of generated polygon centres.
pub const CENTER_X_RANGE: (f64, f64) = (100.0, 900.0);

/// Vertical range of generated polygon centres.
pub const CENTER_Y_RANGE: (f64, f64) = (40.0, 360.0);

/// Range of the base radius of a generated polygon.
pub const RADIUS_RANGE: (f64, f64) = (20.0, 80.0);

/// Maximum angular jitter per vertex, in radians (applied as ±half).
pub const ANGLE_JITTER: f64 = 0.4;

/// Per-vertex radius scale is drawn from `RADIUS_SCALE_MIN..RADIUS_SCALE_MIN + RADIUS_SCALE_SPREAD`.
pub const RADIUS_SCALE_MIN: f64 = 0.6;

/// See [`RADIUS_SCALE_MIN`].
pub const RADIUS_SCALE_SPREAD: f64 = 0.8;

// ── Style ───────────────────────────────────────────────────────

/// Fill color of generated polygons.
pub const POLYGON_FILL: &str = "#940025";

/// Stroke color of generated polygons.
pub const POLYGON_STROKE: &str = "#FFF";
