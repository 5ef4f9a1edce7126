//! Buffer zone: the fixed-view pool of freshly created polygons.

use leptos::prelude::*;

use canvas::doc::ZoneKind;
use canvas::render::polygon_views;

use crate::components::zone_events::zone_pointer_down;
use crate::state::editor::EditorState;
use crate::util::zone_input::ZoneRefs;

/// Buffer zone SVG. Its view box never changes.
#[component]
pub fn BufferZone() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let refs = expect_context::<ZoneRefs>();

    let view_box = move || editor.with(|s| s.core.buffer_view.attr());
    let polygons = move || editor.with(|s| polygon_views(s.core.buffer.iter()));

    view! {
        <section class="zone zone--buffer">
            <svg
                node_ref=refs.buffer
                class="zone__svg"
                viewBox=view_box
                preserveAspectRatio="none"
                on:pointerdown=zone_pointer_down(ZoneKind::Buffer, editor, refs)
            >
                <For each=polygons key=|poly| (poly.id, poly.points.clone()) let:poly>
                    <polygon points=poly.points fill=poly.fill stroke=poly.stroke stroke-width="1"></polygon>
                </For>
            </svg>
        </section>
    }
}
