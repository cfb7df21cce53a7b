//! Planar geometry helpers kept outside the spatial index itself.
//!
//! These wrap the `geo` crate for the collaborators around the index: the
//! point-in-polygon test the fill/selection logic uses, and a convenience
//! constructor for query ranges. Neither is part of the region tree's core
//! contract.

use crate::error::Result;
use crate::geom::Bounds;
use geo::{Contains, Point, Polygon};

/// Check if a point is contained within a polygon.
///
/// Uses the `geo::Contains` trait (an even-odd ray-cast under the hood); a
/// point exactly on the boundary is not "contained".
///
/// # Examples
///
/// ```rust
/// use overgrid::spatial::point_in_polygon;
/// use geo::{polygon, Point, Polygon};
///
/// let poly: Polygon = polygon![
///     (x: 0.0, y: 0.0),
///     (x: 100.0, y: 0.0),
///     (x: 100.0, y: 100.0),
///     (x: 0.0, y: 100.0),
///     (x: 0.0, y: 0.0),
/// ];
///
/// assert!(point_in_polygon(&poly, &Point::new(50.0, 50.0)));
/// assert!(!point_in_polygon(&poly, &Point::new(150.0, 50.0)));
/// ```
pub fn point_in_polygon(polygon: &Polygon, point: &Point<f64>) -> bool {
    polygon.contains(point)
}

/// Create query bounds from (left, top, right, bottom) pixel edges.
///
/// Thin alias for [`Bounds::new`], matching the argument order drawing code
/// typically has at hand.
///
/// # Errors
///
/// Returns an error if left > right or top > bottom.
///
/// # Examples
///
/// ```rust
/// use overgrid::spatial::bounding_box;
///
/// let range = bounding_box(0.0, 0.0, 600.0, 400.0).unwrap();
/// assert_eq!(range.width(), 600.0);
/// assert!(bounding_box(10.0, 0.0, 0.0, 400.0).is_err());
/// ```
pub fn bounding_box(left: f64, top: f64, right: f64, bottom: f64) -> Result<Bounds> {
    Bounds::new(left, top, right, bottom)
}
