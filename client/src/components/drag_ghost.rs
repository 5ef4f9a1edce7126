//! Drag ghost overlay.
//!
//! A full-viewport, click-through `<svg>` in client pixels that draws the
//! dragged polygon under the pointer. It exists only while a drag is active.

use leptos::prelude::*;

use canvas::render::ghost_view;

use crate::state::editor::EditorState;

/// Overlay showing the polygon currently being dragged.
#[component]
pub fn DragGhost() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let ghost = move || editor.with(|s| ghost_view(&s.core));

    move || {
        ghost().map(|poly| {
            view! {
                <svg class="drag-ghost" aria-hidden="true">
                    <polygon points=poly.points fill=poly.fill stroke=poly.stroke stroke-width="2"></polygon>
                </svg>
            }
        })
    }
}
