//! DOM event to editor-core input mapping.
//!
//! The core works in CSS client pixels, which is exactly what pointer and
//! wheel events report and what `getBoundingClientRect` returns, so no
//! scroll or device-pixel correction happens here.

#[cfg(test)]
#[path = "zone_input_test.rs"]
mod zone_input_test;

use leptos::prelude::*;

use canvas::input::Button;

#[cfg(feature = "hydrate")]
use canvas::camera::{Point, ScreenRect};
#[cfg(feature = "hydrate")]
use canvas::doc::ZoneKind;
#[cfg(feature = "hydrate")]
use canvas::engine::EditorCore;
#[cfg(feature = "hydrate")]
use canvas::input::WheelDelta;

/// The two zone `<svg>` elements, shared so any handler can re-measure both.
#[derive(Clone, Copy)]
pub struct ZoneRefs {
    pub buffer: NodeRef<leptos::svg::Svg>,
    pub work: NodeRef<leptos::svg::Svg>,
}

impl ZoneRefs {
    pub fn new() -> Self {
        Self { buffer: NodeRef::new(), work: NodeRef::new() }
    }
}

impl Default for ZoneRefs {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a DOM `button` index to the core's button.
pub fn map_button(button: i16) -> Button {
    match button {
        0 => Button::Primary,
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Other,
    }
}

#[cfg(feature = "hydrate")]
pub fn pointer_client(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "hydrate")]
pub fn wheel_client(ev: &leptos::ev::WheelEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "hydrate")]
pub fn wheel_delta(ev: &leptos::ev::WheelEvent) -> WheelDelta {
    WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() }
}

/// On-screen rectangle of an element in client pixels.
#[cfg(feature = "hydrate")]
pub fn element_rect(element: &web_sys::Element) -> ScreenRect {
    let rect = element.get_bounding_client_rect();
    ScreenRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Re-measure both zones and hand the rects to the core.
///
/// Called before every pointer-down, pointer-up and wheel event so layout
/// shifts and page scroll never leave stale rects behind.
#[cfg(feature = "hydrate")]
pub fn sync_zone_rects(core: &mut EditorCore, refs: ZoneRefs) {
    if let Some(svg) = refs.buffer.get_untracked() {
        core.set_zone_rect(ZoneKind::Buffer, element_rect(&svg));
    }
    if let Some(svg) = refs.work.get_untracked() {
        core.set_zone_rect(ZoneKind::Work, element_rect(&svg));
    }
}
