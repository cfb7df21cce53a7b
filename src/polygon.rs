//! Finalized polygon records and the actor roles that own them.

use crate::config::Config;
use crate::error::{OvergridError, Result};
use crate::tree::RegionTree;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which actor authored a polygon. Selects the shared per-role tree its
/// boundary points accumulate into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The admin-side actor.
    #[default]
    Admin,
    /// The user-side actor.
    User,
}

/// An RGB display color for a polygon, carried for the rendering collaborator.
pub type Color = [u8; 3];

/// One finalized polygon: its densified boundary points, display color, role
/// tag, and an exclusively-owned region tree built from its own points for
/// partition visualization. Immutable once created.
#[derive(Debug, Clone)]
pub struct PolygonRecord {
    points: Vec<Point<f64>>,
    color: Color,
    role: Role,
    tree: RegionTree,
}

impl PolygonRecord {
    /// Build a record from an already-densified boundary point sequence.
    ///
    /// The per-polygon debug tree is populated here; points off the canvas
    /// stay in the boundary sequence but are silently absent from the tree.
    ///
    /// # Errors
    ///
    /// Returns [`OvergridError::InvalidPolygon`] if `points` holds fewer than
    /// three distinct coordinates — a closed region needs at least a triangle.
    pub fn new(points: Vec<Point<f64>>, color: Color, role: Role, config: &Config) -> Result<Self> {
        if count_distinct(&points) < 3 {
            return Err(OvergridError::InvalidPolygon(format!(
                "a polygon needs at least 3 distinct boundary points, got {}",
                count_distinct(&points)
            )));
        }

        let mut tree = RegionTree::from_config(config)?;
        for point in &points {
            tree.insert(*point);
        }

        Ok(Self {
            points,
            color,
            role,
            tree,
        })
    }

    /// The densified boundary point sequence, in interpolation order.
    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    /// The display color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Who authored the polygon.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The per-polygon partition tree, for debug visualization only.
    pub fn tree(&self) -> &RegionTree {
        &self.tree
    }
}

fn count_distinct(points: &[Point<f64>]) -> usize {
    let mut seen = HashSet::new();
    for point in points {
        seen.insert((point.x().to_bits(), point.y().to_bits()));
        if seen.len() >= 3 {
            break;
        }
    }
    seen.len()
}
