//! Work zone: the pannable, zoomable canvas with coordinate axes.
//!
//! The `<svg>` view box is bound straight to the core's work view, so pan and
//! zoom are just view-box rewrites. Grid lines keep a one-pixel stroke at any
//! zoom; labels scale with the view like the polygons do.

use leptos::prelude::*;

use canvas::doc::ZoneKind;
use canvas::render::{axis_ticks, polygon_views};

use crate::components::zone_events::{work_wheel, zone_pointer_down};
use crate::state::editor::EditorState;
use crate::util::zone_input::ZoneRefs;

/// Grid line and label color.
const AXIS_COLOR: &str = "#FFF";

/// Work zone SVG with axes and placed polygons.
#[component]
pub fn WorkZone() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let refs = expect_context::<ZoneRefs>();

    let view_box = move || editor.with(|s| s.core.work_view.attr());
    let polygons = move || editor.with(|s| polygon_views(s.core.work.iter()));
    let axes = move || {
        editor
            .with(|s| axis_ticks(&s.core.work_view))
            .into_iter()
            .map(|tick| {
                view! {
                    <line
                        class="axis"
                        x1=tick.start.x.to_string()
                        y1=tick.start.y.to_string()
                        x2=tick.end.x.to_string()
                        y2=tick.end.y.to_string()
                        stroke=AXIS_COLOR
                        vector-effect="non-scaling-stroke"
                    ></line>
                    <text
                        x=tick.label_at.x.to_string()
                        y=tick.label_at.y.to_string()
                        font-size="12"
                        fill=AXIS_COLOR
                    >
                        {tick.label}
                    </text>
                }
            })
            .collect_view()
    };

    view! {
        <section class="zone zone--work">
            <svg
                node_ref=refs.work
                class="zone__svg zone__svg--work"
                viewBox=view_box
                preserveAspectRatio="none"
                on:pointerdown=zone_pointer_down(ZoneKind::Work, editor, refs)
                on:wheel=work_wheel(editor, refs)
            >
                <g class="axes">{axes}</g>
                <For each=polygons key=|poly| (poly.id, poly.points.clone()) let:poly>
                    <polygon points=poly.points fill=poly.fill stroke=poly.stroke stroke-width="1"></polygon>
                </For>
            </svg>
        </section>
    }
}
