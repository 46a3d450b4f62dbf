//! Diagram projection for the schematic triangle rendering.
//!
//! Purely presentational: maps solved leg lengths into the fixed 120-unit
//! viewport the frontend draws into. Never feeds back into the
//! measurement set.

use super::types::{usable, TriangleValues};
use crate::geometry::Point2;

/// Viewport extent the longest side is scaled to.
const VIEW_EXTENT: f64 = 120.0;

/// Project the solved legs into viewport coordinates: x along the base
/// leg `b`, y along the vertical leg `a`. Returns `None` when either leg
/// is missing or unusable, so the caller can keep its previous point.
pub fn project(values: &TriangleValues) -> Option<Point2> {
    let a = usable(values.a)?;
    let b = usable(values.b)?;
    let max_dimension = a.max(b).max(values.c.unwrap_or(0.0));
    let scale = VIEW_EXTENT / max_dimension;
    Some(Point2::new(b * scale, a * scale))
}

/// The diagram anchor before anything has been solved (and after Clear).
pub fn origin() -> Point2 {
    Point2::new(0.0, 0.0)
}
