//! The region tree: a recursive quadtree partition over 2D points.
//!
//! Each node covers an axis-aligned rectangle and holds points directly until
//! it reaches its capacity, at which point it splits once into four equal
//! quadrants and delegates further inserts to them. A node that has exhausted
//! its subdivision depth budget stops splitting and accepts points without
//! limit — a deliberate degradation into a flat bucket that keeps recursion
//! bounded.
//!
//! The tree answers two queries: an axis-aligned range query and a cross-tree
//! matching query ("which of my points also exist in that other tree"), the
//! primitive behind polygon overlap detection.

use crate::config::{Config, MatchPolicy};
use crate::error::{OvergridError, Result};
use crate::geom::Bounds;
use geo::Point;
use smallvec::SmallVec;

/// One leaf rectangle of the partition, yielded by the debug traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafOutline {
    /// The leaf's spatial extent.
    pub bounds: Bounds,
    /// The midpoint of `bounds`.
    pub center: Point<f64>,
}

/// A quadtree node; the root doubles as the tree handle.
///
/// Built fresh per logical point collection (one per polygon for debug
/// visualization, one per role for overlap detection), populated by inserting
/// every boundary point once, and read-only afterwards. Each node exclusively
/// owns its children: a strict tree with no shared or back references.
#[derive(Debug, Clone)]
pub struct RegionTree {
    bounds: Bounds,
    capacity: usize,
    depth: usize,
    points: SmallVec<[Point<f64>; 1]>,
    children: Option<Box<[RegionTree; 4]>>,
}

impl RegionTree {
    /// Create an empty tree covering `bounds`.
    ///
    /// `capacity` is the number of points a node holds before splitting;
    /// `max_depth` is the remaining subdivision budget.
    ///
    /// # Errors
    ///
    /// Returns [`OvergridError::InvalidInput`] if `capacity` is zero.
    pub fn new(bounds: Bounds, capacity: usize, max_depth: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(OvergridError::InvalidInput(
                "Node capacity must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            bounds,
            capacity,
            depth: max_depth,
            points: SmallVec::new(),
            children: None,
        })
    }

    /// Create an empty tree covering the configured canvas.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.canvas_bounds()?,
            config.node_capacity,
            config.max_depth,
        )
    }

    /// The rectangle this node covers.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Whether this node has split into four quadrants.
    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    /// Total number of points stored in this subtree.
    pub fn len(&self) -> usize {
        let mut count = self.points.len();
        if let Some(children) = &self.children {
            count += children.iter().map(Self::len).sum::<usize>();
        }
        count
    }

    /// Whether the subtree stores no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a point, returning whether it was accepted.
    ///
    /// A point outside this node's bounds is rejected by returning `false` —
    /// a normal outcome, not an error: at the root it means the point lies off
    /// the canvas, below the root it means the point belongs to a sibling
    /// quadrant. In-bounds points always succeed: the node stores the point
    /// directly while under capacity, subdivides (at most once) otherwise,
    /// and a node whose depth budget is exhausted accepts without limit.
    ///
    /// A point exactly on a shared quadrant boundary goes to the first child
    /// whose inclusive bounds test passes, in the fixed evaluation order
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn insert(&mut self, point: Point<f64>) -> bool {
        if !self.bounds.contains(&point) {
            return false;
        }

        // Depth budget exhausted: flat overflow bucket, unbounded by design.
        if self.depth == 0 {
            self.points.push(point);
            return true;
        }

        if self.points.len() < self.capacity {
            self.points.push(point);
            return true;
        }

        self.subdivide();
        match &mut self.children {
            Some(children) => children.iter_mut().any(|child| child.insert(point)),
            None => false,
        }
    }

    /// Split once into four equal quadrants. Idempotent.
    fn subdivide(&mut self) {
        if self.children.is_some() {
            return;
        }
        let children = self.bounds.quarter().map(|quadrant| Self {
            bounds: quadrant,
            capacity: self.capacity,
            depth: self.depth - 1,
            points: SmallVec::new(),
            children: None,
        });
        self.children = Some(Box::new(children));
    }

    /// Return every stored point whose coordinates fall within `range`,
    /// inclusive of its edges.
    ///
    /// Subtrees whose bounds do not intersect `range` are pruned wholesale.
    /// The result is order-stable: a node's own points first, in insertion
    /// order, then its children in quadrant order, recursively. Degenerate
    /// point-sized ranges behave like any other rectangle.
    pub fn query_range(&self, range: &Bounds) -> Vec<Point<f64>> {
        let mut results = Vec::new();
        self.collect_range(range, &mut results);
        results
    }

    fn collect_range(&self, range: &Bounds, results: &mut Vec<Point<f64>>) {
        if !self.bounds.intersects(range) {
            return;
        }
        for point in &self.points {
            if range.contains(point) {
                results.push(*point);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_range(range, results);
            }
        }
    }

    /// Whether any stored point falls within `range`, short-circuiting on the
    /// first hit.
    pub fn contains_in(&self, range: &Bounds) -> bool {
        if !self.bounds.intersects(range) {
            return false;
        }
        if self.points.iter().any(|point| range.contains(point)) {
            return true;
        }
        match &self.children {
            Some(children) => children.iter().any(|child| child.contains_in(range)),
            None => false,
        }
    }

    /// Whether the tree holds a point matching `point` under `policy`.
    ///
    /// Exact matching probes with a degenerate zero-area range; tolerance
    /// matching inflates the probe by the tolerance radius on each side.
    pub fn contains_match(&self, point: &Point<f64>, policy: MatchPolicy) -> bool {
        let probe = match policy {
            MatchPolicy::Exact => Bounds::at_point(point),
            MatchPolicy::Tolerance(radius) => Bounds::around_point(point, radius),
        };
        match probe {
            Ok(range) => self.contains_in(&range),
            Err(_) => {
                log::warn!("rejecting match probe with non-finite coordinates");
                false
            }
        }
    }

    /// Return every point held by `self` that `other` also contains at
    /// matching coordinates under `policy`.
    ///
    /// Each directly stored point is probed against `other`'s root, then the
    /// children are visited against the same root — O(points · depth), which
    /// is fine at interpolated-polygon point counts. The two trees need not
    /// share structure; only their coordinate space must agree.
    pub fn common_points(&self, other: &Self, policy: MatchPolicy) -> Vec<Point<f64>> {
        let mut results = Vec::new();
        self.collect_common(other, policy, &mut results);
        results
    }

    fn collect_common(&self, other: &Self, policy: MatchPolicy, results: &mut Vec<Point<f64>>) {
        if !self.bounds.intersects(other.bounds()) {
            return;
        }
        for point in &self.points {
            if other.contains_match(point, policy) {
                results.push(*point);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_common(other, policy, results);
            }
        }
    }

    /// Yield every leaf rectangle (and its center) in quadrant order.
    ///
    /// Visualization aid for inspecting how a polygon's points partitioned
    /// the canvas; the output carries no semantic meaning beyond debugging.
    pub fn outline(&self) -> Vec<LeafOutline> {
        let mut outlines = Vec::new();
        self.collect_outline(&mut outlines);
        outlines
    }

    fn collect_outline(&self, outlines: &mut Vec<LeafOutline>) {
        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.collect_outline(outlines);
                }
            }
            None => outlines.push(LeafOutline {
                bounds: self.bounds,
                center: self.bounds.center(),
            }),
        }
    }
}
