//! Axis-aligned rectangle geometry for the region tree.
//!
//! `Bounds` is the one geometric primitive the index needs: a validated,
//! inclusive axis-aligned box used both as a node's spatial extent and as an
//! ad-hoc query range. It is deliberately its own type rather than
//! `geo::Rect`: `geo::Rect::new` silently reorders inverted corners, while an
//! inverted box here indicates a programming mistake upstream and must fail
//! fast, and containment has to be inclusive on all four edges.

use crate::error::{OvergridError, Result};
use geo::Point;

/// An axis-aligned rectangle in image pixel coordinates (y grows downward).
///
/// Containment is inclusive on all four edges, so a degenerate zero-area
/// rectangle is legal and matches exactly one coordinate — the single-point
/// membership probe used by overlap detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Create bounds from (left, top, right, bottom) edges.
    ///
    /// # Errors
    ///
    /// Returns [`OvergridError::InvalidBounds`] if min > max on either axis
    /// or any coordinate is non-finite.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(OvergridError::InvalidBounds(
                "coordinates must be finite".to_string(),
            ));
        }
        if min_x > max_x {
            return Err(OvergridError::InvalidBounds(format!(
                "left ({}) must be <= right ({})",
                min_x, max_x
            )));
        }
        if min_y > max_y {
            return Err(OvergridError::InvalidBounds(format!(
                "top ({}) must be <= bottom ({})",
                min_y, max_y
            )));
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Degenerate zero-area bounds covering exactly one coordinate.
    pub fn at_point(point: &Point<f64>) -> Result<Self> {
        Self::new(point.x(), point.y(), point.x(), point.y())
    }

    /// Square bounds extending `radius` pixels from `point` on each side.
    pub fn around_point(point: &Point<f64>, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(OvergridError::InvalidBounds(format!(
                "radius ({}) must be finite and non-negative",
                radius
            )));
        }
        Self::new(
            point.x() - radius,
            point.y() - radius,
            point.x() + radius,
            point.y() + radius,
        )
    }

    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Top edge.
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The midpoint of the rectangle.
    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Check whether a point lies within the bounds, inclusive of all edges.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }

    /// Check whether two rectangles share any space. Touching edges count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Split into four equal quadrants at the midpoint of each axis.
    ///
    /// Order is top-left, top-right, bottom-left, bottom-right; together the
    /// quadrants tile the parent exactly, overlapping only on the shared
    /// midlines.
    pub fn quarter(&self) -> [Self; 4] {
        let center = self.center();
        let (cx, cy) = (center.x(), center.y());
        [
            Self {
                min_x: self.min_x,
                min_y: self.min_y,
                max_x: cx,
                max_y: cy,
            },
            Self {
                min_x: cx,
                min_y: self.min_y,
                max_x: self.max_x,
                max_y: cy,
            },
            Self {
                min_x: self.min_x,
                min_y: cy,
                max_x: cx,
                max_y: self.max_y,
            },
            Self {
                min_x: cx,
                min_y: cy,
                max_x: self.max_x,
                max_y: self.max_y,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_rejects_inverted_axes() {
        assert!(Bounds::new(10.0, 0.0, 0.0, 10.0).is_err());
        assert!(Bounds::new(0.0, 10.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn test_bounds_rejects_non_finite() {
        assert!(Bounds::new(f64::NAN, 0.0, 10.0, 10.0).is_err());
        assert!(Bounds::new(0.0, 0.0, f64::INFINITY, 10.0).is_err());
    }

    #[test]
    fn test_degenerate_bounds_are_legal() {
        let point = Point::new(5.0, 5.0);
        let bounds = Bounds::at_point(&point).unwrap();
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
        assert!(bounds.contains(&point));
        assert!(!bounds.contains(&Point::new(5.0, 5.000001)));
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let bounds = Bounds::new(0.0, 0.0, 600.0, 400.0).unwrap();
        assert!(bounds.contains(&Point::new(0.0, 0.0)));
        assert!(bounds.contains(&Point::new(600.0, 400.0)));
        assert!(bounds.contains(&Point::new(600.0, 0.0)));
        assert!(!bounds.contains(&Point::new(601.0, 400.0)));
        assert!(!bounds.contains(&Point::new(600.0, 400.1)));
    }

    #[test]
    fn test_intersects_counts_touching_edges() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Bounds::new(10.0, 10.0, 20.0, 20.0).unwrap();
        let c = Bounds::new(10.5, 0.0, 20.0, 10.0).unwrap();
        let inner = Bounds::new(3.0, 3.0, 7.0, 7.0).unwrap();

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&inner));
        assert!(inner.intersects(&a));
    }

    #[test]
    fn test_quarter_tiles_parent_exactly() {
        let bounds = Bounds::new(0.0, 0.0, 600.0, 400.0).unwrap();
        let [tl, tr, bl, br] = bounds.quarter();

        assert_eq!(tl, Bounds::new(0.0, 0.0, 300.0, 200.0).unwrap());
        assert_eq!(tr, Bounds::new(300.0, 0.0, 600.0, 200.0).unwrap());
        assert_eq!(bl, Bounds::new(0.0, 200.0, 300.0, 400.0).unwrap());
        assert_eq!(br, Bounds::new(300.0, 200.0, 600.0, 400.0).unwrap());

        // No gaps: every quadrant shares the parent's center corner.
        let center = bounds.center();
        for quadrant in [tl, tr, bl, br] {
            assert!(quadrant.contains(&center));
        }
    }

    #[test]
    fn test_around_point() {
        let probe = Bounds::around_point(&Point::new(100.0, 100.0), 1.0).unwrap();
        assert!(probe.contains(&Point::new(99.0, 101.0)));
        assert!(!probe.contains(&Point::new(98.9, 100.0)));
        assert!(Bounds::around_point(&Point::new(0.0, 0.0), -1.0).is_err());
    }

    #[test]
    fn test_center() {
        let bounds = Bounds::new(0.0, 0.0, 600.0, 400.0).unwrap();
        assert_eq!(bounds.center(), Point::new(300.0, 200.0));
    }
}
