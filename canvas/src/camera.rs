//! Viewport math: view boxes, on-screen rects, and the mapping between them.
//!
//! Every zone draws its polygons into an SVG whose `viewBox` is a [`ViewBox`]
//! and whose on-screen placement is a [`ScreenRect`]. A [`ZoneMapping`] pairs
//! the two and interpolates linearly per axis between client pixels and zone
//! world coordinates. The SVGs use `preserveAspectRatio="none"`, so this
//! linear mapping is exactly what the browser draws.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH, MAX_VIEW_WIDTH, MIN_VIEW_WIDTH, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};

/// A point in either client (screen) or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Translate by `delta`.
    #[must_use]
    pub fn offset(self, delta: Point) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }
}

/// The visible world rectangle of a zone, as written to the SVG `viewBox`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, w: DEFAULT_VIEW_WIDTH, h: DEFAULT_VIEW_HEIGHT }
    }
}

impl ViewBox {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Render as an SVG `viewBox` attribute value: `"x y w h"`.
    #[must_use]
    pub fn attr(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.w, self.h)
    }

    /// Whether the box has a usable, finite, positive size.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
    }

    /// Zoom around the client point `client`, keeping the world point under it fixed.
    ///
    /// Scrolling down (`delta_y > 0`) grows the box by [`ZOOM_OUT_FACTOR`]; any
    /// other delta shrinks it by [`ZOOM_IN_FACTOR`]. The resulting width is
    /// clamped to `[MIN_VIEW_WIDTH, MAX_VIEW_WIDTH]` with the aspect ratio kept.
    /// No-op when `rect` is degenerate.
    pub fn zoom_at(&mut self, client: Point, rect: ScreenRect, delta_y: f64) {
        if !rect.is_valid() || !self.is_valid() {
            return;
        }
        let fx = (client.x - rect.left) / rect.width;
        let fy = (client.y - rect.top) / rect.height;
        let anchor_x = self.x + fx * self.w;
        let anchor_y = self.y + fy * self.h;

        let factor = if delta_y > 0.0 { ZOOM_OUT_FACTOR } else { ZOOM_IN_FACTOR };
        let new_w = (self.w * factor).clamp(MIN_VIEW_WIDTH, MAX_VIEW_WIDTH);
        let new_h = self.h * (new_w / self.w);

        self.x = anchor_x - fx * new_w;
        self.y = anchor_y - fy * new_h;
        self.w = new_w;
        self.h = new_h;
    }

    /// Pan by a pointer drag of `(dx, dy)` client pixels.
    ///
    /// Dragging right moves the content right, so the box moves left.
    /// No-op when `rect` is degenerate.
    pub fn pan_by(&mut self, dx: f64, dy: f64, rect: ScreenRect) {
        if !rect.is_valid() {
            return;
        }
        self.x -= dx / rect.width * self.w;
        self.y -= dy / rect.height * self.h;
    }
}

/// A zone's on-screen rectangle in CSS client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the rect has a finite, positive size.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Inclusive containment test; points on the border count as inside.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }
}

/// A zone's view box paired with where it is drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneMapping {
    pub view: ViewBox,
    pub rect: ScreenRect,
}

impl ZoneMapping {
    #[must_use]
    pub fn new(view: ViewBox, rect: ScreenRect) -> Self {
        Self { view, rect }
    }

    /// Whether conversions through this mapping are defined.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.view.is_valid() && self.rect.is_valid()
    }

    /// Convert a client-pixel point to zone world coordinates.
    #[must_use]
    pub fn client_to_world(&self, client: Point) -> Option<Point> {
        if !self.is_valid() {
            return None;
        }
        Some(Point {
            x: self.view.x + (client.x - self.rect.left) / self.rect.width * self.view.w,
            y: self.view.y + (client.y - self.rect.top) / self.rect.height * self.view.h,
        })
    }

    /// Convert a zone world point to client pixels.
    #[must_use]
    pub fn world_to_client(&self, world: Point) -> Option<Point> {
        if !self.is_valid() {
            return None;
        }
        Some(Point {
            x: self.rect.left + (world.x - self.view.x) / self.view.w * self.rect.width,
            y: self.rect.top + (world.y - self.view.y) / self.view.h * self.rect.height,
        })
    }
}
