//! Editor state shared through context.
//!
//! DESIGN
//! ======
//! `EditorCore` is pure and DOM-free, so the whole editor lives inside one
//! `RwSignal<EditorState>`. Components read zones and views reactively and
//! feed input through `update`; the engine's `RenderNeeded` is satisfied by
//! the signal notification itself. This struct adds what the core leaves to
//! the host: the pointer cursor and the random source for new batches.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use leptos::prelude::*;

use canvas::doc::ZoneKind;
use canvas::engine::{Action, EditorCore};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Cursor shown when no gesture is active.
pub const DEFAULT_CURSOR: &str = "default";

/// Root editor state provided via context.
#[derive(Clone, Debug)]
pub struct EditorState {
    pub core: EditorCore,
    /// CSS cursor requested by the last `SetCursor` action.
    pub cursor: &'static str,
    rng: SmallRng,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl EditorState {
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { core: EditorCore::new(), cursor: DEFAULT_CURSOR, rng: SmallRng::seed_from_u64(seed) }
    }

    /// Replace the random source, e.g. once real entropy is available after hydration.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Append a random batch to the buffer zone.
    pub fn create_polygons(&mut self) -> Vec<Action> {
        self.core.create_polygons(&mut self.rng)
    }

    /// Apply the host-side effects of engine actions.
    ///
    /// Returns one human-readable line per action worth logging.
    pub fn apply(&mut self, actions: Vec<Action>) -> Vec<String> {
        let mut lines = Vec::new();
        for action in actions {
            if let Action::SetCursor(cursor) = action {
                self.cursor = cursor;
            }
            if let Some(line) = describe(&action) {
                lines.push(line);
            }
        }
        lines
    }
}

fn zone_name(kind: ZoneKind) -> &'static str {
    match kind {
        ZoneKind::Buffer => "buffer",
        ZoneKind::Work => "work",
    }
}

/// Log line for an action, or `None` for high-frequency bookkeeping.
#[must_use]
pub fn describe(action: &Action) -> Option<String> {
    match action {
        Action::PolygonsCreated { count } => Some(format!("created {count} polygons")),
        Action::PolygonTransferred { id, from, to } => {
            Some(format!("moved polygon {id} from {} to {}", zone_name(*from), zone_name(*to)))
        }
        Action::DragCancelled { id, to } => Some(format!("returned polygon {id} to {}", zone_name(*to))),
        Action::LayoutReset => Some("layout reset".to_owned()),
        Action::LayoutRestored { polygons } => Some(format!("restored layout with {polygons} polygons")),
        Action::DragStarted { .. } | Action::ViewChanged(_) | Action::SetCursor(_) | Action::RenderNeeded => None,
    }
}

/// A seed drawn from the browser clock and `Math.random`.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn browser_seed() -> u64 {
    let random = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    let clock = js_sys::Date::now() as u64;
    random ^ clock.rotate_left(32)
}

/// Run `f` against the editor, apply the actions it returns, and log the notable ones.
///
/// Subscribers are only notified when `f` produced at least one action.
pub fn dispatch(editor: RwSignal<EditorState>, f: impl FnOnce(&mut EditorState) -> Vec<Action>) {
    let Some((changed, lines)) = editor.try_update_untracked(|state| {
        let actions = f(state);
        let changed = !actions.is_empty();
        (changed, state.apply(actions))
    }) else {
        return;
    };
    if changed {
        editor.notify();
    }
    for line in lines {
        log::info!("{line}");
    }
}
