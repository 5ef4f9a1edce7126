//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the zones and editor chrome while reading/writing the
//! shared `EditorState` from Leptos context.

pub mod buffer_zone;
pub mod drag_ghost;
pub mod toolbar;
pub mod work_zone;
pub mod zone_events;
