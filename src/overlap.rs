//! Overlap detection across the two per-role point collections.
//!
//! The detector owns two long-lived region trees, one accumulating every
//! boundary point from every finalized admin polygon and one doing the same
//! for user polygons. Whenever either accumulation changes it recomputes the
//! overlap set: the admin points whose coordinates the user tree also holds,
//! under the configured matching policy. The detector carries no state beyond
//! the two trees and the last computed sequence; given the trees' contents it
//! is pure.

use crate::config::{Config, MatchPolicy};
use crate::error::Result;
use crate::polygon::Role;
use crate::tree::RegionTree;
use geo::Point;

/// Size accounting for the detector's trees and the current overlap set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapStats {
    /// Points accumulated from admin polygons.
    pub admin_points: usize,
    /// Points accumulated from user polygons.
    pub user_points: usize,
    /// Points in the last computed overlap sequence.
    pub overlap_points: usize,
}

/// Detects where admin-drawn and user-drawn polygon boundaries coincide.
#[derive(Debug, Clone)]
pub struct OverlapDetector {
    admin: RegionTree,
    user: RegionTree,
    policy: MatchPolicy,
    overlap: Vec<Point<f64>>,
}

impl OverlapDetector {
    /// Create a detector with two empty trees over the configured canvas.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            admin: RegionTree::from_config(config)?,
            user: RegionTree::from_config(config)?,
            policy: config.match_policy(),
            overlap: Vec::new(),
        })
    }

    /// Feed one finalized polygon's boundary points into the tree selected by
    /// `role`, then recompute the overlap set.
    ///
    /// Returns the number of accepted points. Points outside the canvas are
    /// skipped, not errors; the skip count is logged at debug level.
    pub fn insert_polygon(&mut self, role: Role, points: &[Point<f64>]) -> usize {
        let tree = match role {
            Role::Admin => &mut self.admin,
            Role::User => &mut self.user,
        };
        let accepted = points.iter().filter(|point| tree.insert(**point)).count();
        let skipped = points.len() - accepted;
        if skipped > 0 {
            log::debug!(
                "skipped {} out-of-canvas boundary point(s) for {:?} polygon",
                skipped,
                role
            );
        }
        self.recompute();
        accepted
    }

    /// Recompute the overlap sequence with the admin tree as receiver.
    fn recompute(&mut self) {
        self.overlap = self.admin.common_points(&self.user, self.policy);
    }

    /// The last computed overlap sequence, for highlight rendering.
    pub fn overlap(&self) -> &[Point<f64>] {
        &self.overlap
    }

    /// The matching policy in effect.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// The accumulated tree for `role`.
    pub fn tree(&self, role: Role) -> &RegionTree {
        match role {
            Role::Admin => &self.admin,
            Role::User => &self.user,
        }
    }

    /// Current size accounting.
    pub fn stats(&self) -> OverlapStats {
        OverlapStats {
            admin_points: self.admin.len(),
            user_points: self.user.len(),
            overlap_points: self.overlap.len(),
        }
    }
}
