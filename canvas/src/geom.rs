#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::dom::NodeId;

/// A point in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An axis-aligned rectangle in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// This rectangle translated so that `origin`'s corner becomes (0, 0).
    #[must_use]
    pub fn relative_to(self, origin: Rect) -> Rect {
        Rect { left: self.left - origin.left, top: self.top - origin.top, ..self }
    }
}

/// Live bounding geometry owned by the host platform.
///
/// The engine never computes layout. Geometry is read back the way a browser
/// overlay reads `getBoundingClientRect`: reconstructed on every call, never
/// cached. Implementations return `None` for nodes they cannot measure.
/// The trait seam also lets tests substitute fixed geometry.
pub trait GeometrySource {
    /// Viewport bounding rectangle of `node`, if measurable.
    fn bounding_rect(&self, node: NodeId) -> Option<Rect>;
}
