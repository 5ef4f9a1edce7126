//! Document model: polygons and the ordered zones that hold them.
//!
//! A [`Polygon`] stores its vertices in the world coordinates of whichever
//! zone currently owns it; moving it between zones rewrites those vertices
//! (see [`crate::transfer`]). A [`Zone`] is an ordered list whose order is
//! draw order: later polygons are drawn on top and win hit-tests.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;


use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;

/// Unique identifier for a polygon.
pub type PolygonId = Uuid;

/// Which of the two zones a polygon lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// The source pool of freshly generated, unplaced polygons.
    Buffer,
    /// The pannable/zoomable canvas holding placed polygons.
    Work,
}

impl ZoneKind {
    /// The zone a polygon from `self` can be dropped into.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Buffer => Self::Work,
            Self::Work => Self::Buffer,
        }
    }
}

/// A closed polygon shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Unique identifier; survives zone transfers.
    pub id: PolygonId,
    /// Ordered vertices in the owning zone's world coordinates.
    pub points: Vec<Point>,
    /// Fill color as a CSS color string.
    pub fill: String,
    /// Stroke color as a CSS color string.
    pub stroke: String,
}

impl Polygon {
    #[must_use]
    pub fn new(id: PolygonId, points: Vec<Point>, fill: impl Into<String>, stroke: impl Into<String>) -> Self {
        Self { id, points, fill: fill.into(), stroke: stroke.into() }
    }

    /// The SVG `points` attribute: `"x1,y1 x2,y2 ..."`.
    ///
    /// Always derived from `points`, so the two can never disagree.
    #[must_use]
    pub fn points_str(&self) -> String {
        points_to_str(&self.points)
    }

    /// A copy with every vertex passed through `f`; `None` if any vertex maps to `None`.
    #[must_use]
    pub fn try_map_points(&self, f: impl Fn(Point) -> Option<Point>) -> Option<Polygon> {
        let points = self.points.iter().map(|p| f(*p)).collect::<Option<Vec<_>>>()?;
        Some(Polygon { points, ..self.clone() })
    }
}

/// Join points as `"x,y"` pairs separated by single spaces.
#[must_use]
pub fn points_to_str(points: &[Point]) -> String {
    points.iter().map(|p| format!("{},{}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}

/// Ordered polygon store for one zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zone {
    polygons: Vec<Polygon>,
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new() -> Self {
        Self { polygons: Vec::new() }
    }

    /// Build a zone from polygons already in draw order.
    #[must_use]
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Append a polygon on top of the others.
    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Append a batch of polygons in order.
    pub fn extend(&mut self, polygons: impl IntoIterator<Item = Polygon>) {
        self.polygons.extend(polygons);
    }

    /// Insert a polygon at `index` in draw order; indexes past the end append.
    pub fn insert(&mut self, index: usize, polygon: Polygon) {
        let index = index.min(self.polygons.len());
        self.polygons.insert(index, polygon);
    }

    /// Draw-order position of a polygon.
    #[must_use]
    pub fn position(&self, id: &PolygonId) -> Option<usize> {
        self.polygons.iter().position(|p| &p.id == id)
    }

    /// Remove a polygon by id and return it; the rest keep their order.
    pub fn take(&mut self, id: &PolygonId) -> Option<Polygon> {
        let idx = self.position(id)?;
        Some(self.polygons.remove(idx))
    }

    /// Look up a polygon by id.
    #[must_use]
    pub fn get(&self, id: &PolygonId) -> Option<&Polygon> {
        self.polygons.iter().find(|p| &p.id == id)
    }

    /// Polygons in draw order (bottom first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Polygon> {
        self.polygons.iter()
    }

    /// Polygons in draw order as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Polygon] {
        &self.polygons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Remove every polygon.
    pub fn clear(&mut self) {
        self.polygons.clear();
    }
}
