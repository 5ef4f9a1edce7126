//! Editor page: toolbar, buffer zone, work zone and the drag ghost.
//!
//! The page owns the window listeners that follow gestures, so they are torn
//! down with it.

use leptos::prelude::*;

use crate::components::buffer_zone::BufferZone;
use crate::components::drag_ghost::DragGhost;
use crate::components::toolbar::Toolbar;
use crate::components::work_zone::WorkZone;
use crate::components::zone_events::install_window_listeners;
use crate::state::editor::EditorState;
use crate::util::zone_input::ZoneRefs;

/// Editor page. Stacks the two zones under the toolbar.
#[component]
pub fn EditorPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let refs = ZoneRefs::new();
    provide_context(refs);
    install_window_listeners(editor, refs);

    let cursor = move || editor.with(|s| s.cursor);
    let busy = move || editor.with(|s| !s.core.input.is_idle());

    view! {
        <main class="editor" class:busy=busy style:cursor=cursor>
            <Toolbar/>
            <BufferZone/>
            <WorkZone/>
            <DragGhost/>
        </main>
    }
}
