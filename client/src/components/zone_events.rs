//! Pointer, wheel and window event wiring shared by the zone components.
//!
//! ARCHITECTURE
//! ============
//! A gesture starts on a zone's `<svg>` (pointer-down) but is followed on
//! `window`, so a drag keeps tracking when the pointer leaves both zones and
//! a release anywhere on the page ends it. Every handler re-measures the
//! zones first so the core maps client pixels against current rects.

use leptos::prelude::*;

use canvas::doc::ZoneKind;

use crate::state::editor::EditorState;
#[cfg(feature = "hydrate")]
use crate::state::editor::dispatch;
use crate::util::zone_input::ZoneRefs;
#[cfg(feature = "hydrate")]
use crate::util::zone_input::{map_button, pointer_client, sync_zone_rects, wheel_client, wheel_delta};

/// Pointer-down handler for the zone `kind`: lifts a polygon or starts a pan.
pub fn zone_pointer_down(
    kind: ZoneKind,
    editor: RwSignal<EditorState>,
    refs: ZoneRefs,
) -> impl Fn(leptos::ev::PointerEvent) + Clone + 'static {
    #[cfg(feature = "hydrate")]
    {
        move |ev: leptos::ev::PointerEvent| {
            let client = pointer_client(&ev);
            let button = map_button(ev.button());
            if editor.with_untracked(|s| s.core.input.is_idle()) {
                ev.prevent_default();
            }
            dispatch(editor, |state| {
                sync_zone_rects(&mut state.core, refs);
                state.core.on_pointer_down(kind, client, button)
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, editor, refs);
        move |_ev: leptos::ev::PointerEvent| {}
    }
}

/// Wheel handler for the work zone: zooms around the cursor.
pub fn work_wheel(editor: RwSignal<EditorState>, refs: ZoneRefs) -> impl Fn(leptos::ev::WheelEvent) + Clone + 'static {
    #[cfg(feature = "hydrate")]
    {
        move |ev: leptos::ev::WheelEvent| {
            ev.prevent_default();
            let client = wheel_client(&ev);
            let delta = wheel_delta(&ev);
            dispatch(editor, |state| {
                sync_zone_rects(&mut state.core, refs);
                state.core.on_wheel(client, delta)
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (editor, refs);
        move |_ev: leptos::ev::WheelEvent| {}
    }
}

/// Follow active gestures on `window` for as long as the calling component lives.
///
/// Move and release are ignored while idle. Pointer-cancel and Escape
/// abandon the gesture, putting a dragged polygon back where it was.
pub fn install_window_listeners(editor: RwSignal<EditorState>, refs: ZoneRefs) {
    #[cfg(feature = "hydrate")]
    {
        let idle = move || editor.with_untracked(|s| s.core.input.is_idle());

        let on_move = window_event_listener(leptos::ev::pointermove, move |ev| {
            if idle() {
                return;
            }
            let client = pointer_client(&ev);
            dispatch(editor, |state| state.core.on_pointer_move(client));
        });

        let on_up = window_event_listener(leptos::ev::pointerup, move |ev| {
            if idle() {
                return;
            }
            let client = pointer_client(&ev);
            dispatch(editor, |state| {
                sync_zone_rects(&mut state.core, refs);
                state.core.on_pointer_up(client)
            });
        });

        let on_cancel = window_event_listener(leptos::ev::pointercancel, move |_ev| {
            dispatch(editor, |state| state.core.cancel_gesture());
        });

        let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && !idle() {
                ev.prevent_default();
                dispatch(editor, |state| state.core.cancel_gesture());
            }
        });

        on_cleanup(move || {
            on_move.remove();
            on_up.remove();
            on_cancel.remove();
            on_key.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (editor, refs);
    }
}
