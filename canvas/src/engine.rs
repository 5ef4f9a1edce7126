use rand::Rng;

use crate::camera::{Point, ScreenRect, ViewBox, ZoneMapping};
use crate::doc::{Polygon, PolygonId, Zone, ZoneKind};
use crate::generate::{batch_size, random_polygons};
use crate::hit::hit_test;
use crate::input::{Button, InputState, WheelDelta};
use crate::snapshot::LayoutSnapshot;
use crate::transfer::{ghost_points, reproject};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A batch of random polygons was appended to the buffer zone.
    PolygonsCreated { count: usize },
    /// A polygon was lifted out of `from` and now follows the pointer.
    DragStarted { id: PolygonId, from: ZoneKind },
    /// A polygon was dropped into the other zone with its coordinates re-projected.
    PolygonTransferred { id: PolygonId, from: ZoneKind, to: ZoneKind },
    /// A drag ended without a valid target; the polygon went back to `to`.
    DragCancelled { id: PolygonId, to: ZoneKind },
    /// The work zone view box moved or zoomed.
    ViewChanged(ViewBox),
    /// Both zones were emptied and the work view reset.
    LayoutReset,
    /// A saved layout replaced the current one.
    LayoutRestored { polygons: usize },
    /// The host should switch the pointer cursor.
    SetCursor(&'static str),
    RenderNeeded,
}

/// Editor state: both zones, their viewports, and the active gesture.
///
/// Independent of the DOM so it can be tested natively; the host reports
/// zone rects and pointer positions in client pixels and applies the returned
/// [`Action`]s.
#[derive(Debug, Clone)]
pub struct EditorCore {
    pub buffer: Zone,
    pub work: Zone,
    /// The buffer view never pans or zooms.
    pub buffer_view: ViewBox,
    pub work_view: ViewBox,
    pub buffer_rect: ScreenRect,
    pub work_rect: ScreenRect,
    pub input: InputState,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self {
            buffer: Zone::new(),
            work: Zone::new(),
            buffer_view: ViewBox::default(),
            work_view: ViewBox::default(),
            buffer_rect: ScreenRect::default(),
            work_rect: ScreenRect::default(),
            input: InputState::default(),
        }
    }
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// Polygons in a zone, in draw order.
    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &Zone {
        match kind {
            ZoneKind::Buffer => &self.buffer,
            ZoneKind::Work => &self.work,
        }
    }

    fn zone_mut(&mut self, kind: ZoneKind) -> &mut Zone {
        match kind {
            ZoneKind::Buffer => &mut self.buffer,
            ZoneKind::Work => &mut self.work,
        }
    }

    /// The view box of a zone.
    #[must_use]
    pub fn view(&self, kind: ZoneKind) -> ViewBox {
        match kind {
            ZoneKind::Buffer => self.buffer_view,
            ZoneKind::Work => self.work_view,
        }
    }

    /// The last on-screen rect reported for a zone.
    #[must_use]
    pub fn rect(&self, kind: ZoneKind) -> ScreenRect {
        match kind {
            ZoneKind::Buffer => self.buffer_rect,
            ZoneKind::Work => self.work_rect,
        }
    }

    /// Client ↔ world mapping for a zone.
    #[must_use]
    pub fn mapping(&self, kind: ZoneKind) -> ZoneMapping {
        ZoneMapping::new(self.view(kind), self.rect(kind))
    }

    /// The polygon currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&Polygon> {
        self.input.dragged()
    }

    /// Client-pixel vertices of the drag ghost, while a drag is in progress.
    #[must_use]
    pub fn ghost(&self) -> Option<Vec<Point>> {
        let InputState::DraggingPolygon { polygon, source_mapping, grab_client, current_client, .. } = &self.input
        else {
            return None;
        };
        ghost_points(polygon, source_mapping, *grab_client, *current_client)
    }

    // --- Data inputs ---

    /// Report where a zone is drawn on screen. Must be kept current before
    /// pointer events are fed in.
    pub fn set_zone_rect(&mut self, kind: ZoneKind, rect: ScreenRect) {
        match kind {
            ZoneKind::Buffer => self.buffer_rect = rect,
            ZoneKind::Work => self.work_rect = rect,
        }
    }

    /// Append a random batch of polygons to the buffer zone.
    pub fn create_polygons<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Action> {
        let count = batch_size(rng);
        self.add_polygons(random_polygons(rng, count))
    }

    /// Append polygons to the buffer zone.
    pub fn add_polygons(&mut self, polygons: Vec<Polygon>) -> Vec<Action> {
        let count = polygons.len();
        self.buffer.extend(polygons);
        vec![Action::PolygonsCreated { count }, Action::RenderNeeded]
    }

    /// Empty both zones and return the work view to its initial box.
    pub fn reset(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        self.buffer.clear();
        self.work.clear();
        self.work_view = ViewBox::default();
        vec![Action::LayoutReset, Action::SetCursor("default"), Action::RenderNeeded]
    }

    /// Capture both zones and the work view.
    ///
    /// A polygon that is mid-drag is recorded back in its source zone.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        let mut buffer = self.buffer.clone();
        let mut work = self.work.clone();
        if let InputState::DraggingPolygon { polygon, source, source_index, .. } = &self.input {
            let zone = match source {
                ZoneKind::Buffer => &mut buffer,
                ZoneKind::Work => &mut work,
            };
            zone.insert(*source_index, polygon.clone());
        }
        LayoutSnapshot::new(buffer, work, self.work_view)
    }

    /// Replace the current layout with a saved one, abandoning any gesture.
    pub fn restore(&mut self, snapshot: LayoutSnapshot) -> Vec<Action> {
        let polygons = snapshot.polygon_count();
        self.input = InputState::Idle;
        self.buffer = snapshot.buffer;
        self.work = snapshot.work;
        self.work_view = snapshot.work_view;
        vec![Action::LayoutRestored { polygons }, Action::ViewChanged(self.work_view), Action::RenderNeeded]
    }

    // --- Input events ---

    /// Pointer pressed inside `zone` at `client`.
    ///
    /// A primary press on a polygon lifts it; a primary press on empty
    /// work-zone space starts panning. Everything else is ignored.
    pub fn on_pointer_down(&mut self, zone: ZoneKind, client: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !self.input.is_idle() {
            return Vec::new();
        }
        let mapping = self.mapping(zone);
        let Some(world) = mapping.client_to_world(client) else {
            return Vec::new();
        };

        if let Some(id) = hit_test(self.zone(zone), world) {
            let Some(source_index) = self.zone(zone).position(&id) else {
                return Vec::new();
            };
            let Some(polygon) = self.zone_mut(zone).take(&id) else {
                return Vec::new();
            };
            self.input = InputState::DraggingPolygon {
                polygon,
                source: zone,
                source_index,
                source_mapping: mapping,
                grab_client: client,
                current_client: client,
            };
            return vec![Action::DragStarted { id, from: zone }, Action::SetCursor("grabbing"), Action::RenderNeeded];
        }

        if zone == ZoneKind::Work {
            self.input = InputState::Panning { last_client: client };
            return vec![Action::SetCursor("grabbing")];
        }
        Vec::new()
    }

    /// Pointer moved to `client` anywhere in the window.
    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::DraggingPolygon { current_client, .. } => {
                *current_client = client;
                vec![Action::RenderNeeded]
            }
            InputState::Panning { last_client } => {
                let dx = client.x - last_client.x;
                let dy = client.y - last_client.y;
                *last_client = client;
                self.work_view.pan_by(dx, dy, self.work_rect);
                vec![Action::ViewChanged(self.work_view), Action::RenderNeeded]
            }
        }
    }

    /// Pointer released at `client` anywhere in the window.
    ///
    /// A dragged polygon released over the other zone is re-projected into it.
    /// Released anywhere else, or if either zone's mapping is unusable, it is
    /// appended back onto its source zone unchanged.
    pub fn on_pointer_up(&mut self, client: Point) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { .. } => vec![Action::SetCursor("default")],
            InputState::DraggingPolygon { polygon, source, source_mapping, grab_client, .. } => {
                let target = source.other();
                let id = polygon.id;
                let moved = if self.rect(target).contains(client) {
                    reproject(&polygon, &source_mapping, &self.mapping(target), grab_client, client)
                } else {
                    None
                };
                let action = if let Some(moved) = moved {
                    self.zone_mut(target).push(moved);
                    Action::PolygonTransferred { id, from: source, to: target }
                } else {
                    self.zone_mut(source).push(polygon);
                    Action::DragCancelled { id, to: source }
                };
                vec![action, Action::SetCursor("default"), Action::RenderNeeded]
            }
        }
    }

    /// Wheel scrolled at `client`. Zooms the work zone around the cursor.
    pub fn on_wheel(&mut self, client: Point, delta: WheelDelta) -> Vec<Action> {
        if !self.work_rect.contains(client) {
            return Vec::new();
        }
        let before = self.work_view;
        self.work_view.zoom_at(client, self.work_rect, delta.dy);
        if self.work_view == before {
            return Vec::new();
        }
        vec![Action::ViewChanged(self.work_view), Action::RenderNeeded]
    }

    /// Abandon the active gesture (pointer cancelled or lost).
    ///
    /// A dragged polygon goes back to its original slot in its source zone.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { .. } => vec![Action::SetCursor("default")],
            InputState::DraggingPolygon { polygon, source, source_index, .. } => {
                let id = polygon.id;
                self.zone_mut(source).insert(source_index, polygon);
                vec![Action::DragCancelled { id, to: source }, Action::SetCursor("default"), Action::RenderNeeded]
            }
        }
    }
}
