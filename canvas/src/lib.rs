//! Editor core for the two-zone polygon editor.
//!
//! Holds everything that does not need a browser: the polygon model, the
//! buffer and work zones, view-box pan/zoom math, hit-testing, the drag
//! gesture state machine, cross-zone re-projection, and the saved layout
//! format. The Leptos client feeds pointer and wheel events in client pixels
//! and applies the returned [`engine::Action`]s; everything here runs and is
//! tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EditorCore`]: zones, views, gestures |
//! | [`doc`] | Polygons and ordered zones |
//! | [`camera`] | View boxes, screen rects, client ↔ world mapping |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Point-in-polygon hit-testing |
//! | [`transfer`] | Re-projecting a dragged polygon between zones |
//! | [`generate`] | Random polygon batches |
//! | [`render`] | Axis ticks and SVG attribute values |
//! | [`snapshot`] | Saved layout format |
//! | [`consts`] | Shared numeric constants (zoom limits, generator ranges, etc.) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod generate;
pub mod hit;
pub mod input;
pub mod render;
pub mod snapshot;
pub mod transfer;
