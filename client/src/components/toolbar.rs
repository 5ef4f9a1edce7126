//! Top bar with the layout commands.
//!
//! "Create" fills the buffer zone with a random batch; "Save" writes both
//! zones and the work view to `localStorage`; "Reset" empties everything and
//! forgets the saved layout.

use leptos::prelude::*;

use crate::state::editor::{EditorState, dispatch};
use crate::util::layout_store;

/// Top toolbar for the editor page.
#[component]
pub fn Toolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let on_create = move |_| {
        dispatch(editor, EditorState::create_polygons);
    };

    let on_save = move |_| {
        let snapshot = editor.with_untracked(|s| s.core.snapshot());
        if layout_store::save(&snapshot) {
            log::info!("saved layout with {} polygons", snapshot.polygon_count());
        }
    };

    let on_reset = move |_| {
        layout_store::clear();
        dispatch(editor, |state| state.core.reset());
    };

    view! {
        <header class="toolbar">
            <button class="btn" on:click=on_create title="Add random polygons to the buffer">
                "Create"
            </button>

            <span class="toolbar__spacer"></span>

            <button class="btn" on:click=on_save title="Save the layout in this browser">
                "Save"
            </button>
            <button class="btn" on:click=on_reset title="Clear both zones and the saved layout">
                "Reset"
            </button>
        </header>
    }
}
