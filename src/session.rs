//! Explicit session state for a drawing application.
//!
//! The drawing surface, image rendering and input capture live outside this
//! crate; what they need from the core is a single mutable state record that
//! owns the finalized polygons, the role toggle, and the overlap detector.
//! `Session` is that record: the drawing collaborator calls
//! [`Session::finalize_polygon`] with each densified boundary sequence, and
//! the rendering collaborator reads [`Session::overlap`] and the per-polygon
//! debug trees back out.

use crate::config::Config;
use crate::error::Result;
use crate::overlap::{OverlapDetector, OverlapStats};
use crate::polygon::{Color, PolygonRecord, Role};
use geo::Point;

/// Mutable application state: role toggle, polygon list, overlap detector.
#[derive(Debug)]
pub struct Session {
    config: Config,
    active_role: Role,
    polygons: Vec<PolygonRecord>,
    detector: OverlapDetector,
}

impl Session {
    /// Start a session with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let detector = OverlapDetector::new(&config)?;
        Ok(Self {
            config,
            active_role: Role::default(),
            polygons: Vec::new(),
            detector,
        })
    }

    /// Start a session over the default 600x400 canvas.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Config::default())
    }

    /// The configuration this session was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The role new polygons are attributed to.
    pub fn active_role(&self) -> Role {
        self.active_role
    }

    /// Switch which actor subsequent polygons belong to.
    pub fn set_active_role(&mut self, role: Role) {
        self.active_role = role;
    }

    /// Finalize one drawn polygon under the active role.
    ///
    /// `points` is the densified boundary sequence from the interpolation
    /// collaborator. The record keeps the full sequence; the shared per-role
    /// tree accepts only the points on the canvas, and the overlap set is
    /// recomputed before this returns.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::OvergridError::InvalidPolygon`] for sequences with
    /// fewer than three distinct points.
    pub fn finalize_polygon(
        &mut self,
        points: Vec<Point<f64>>,
        color: Color,
    ) -> Result<&PolygonRecord> {
        let role = self.active_role;
        let record = PolygonRecord::new(points, color, role, &self.config)?;
        self.detector.insert_polygon(role, record.points());
        let index = self.polygons.len();
        self.polygons.push(record);
        Ok(&self.polygons[index])
    }

    /// Every finalized polygon, in creation order.
    pub fn polygons(&self) -> &[PolygonRecord] {
        &self.polygons
    }

    /// The finalized polygons belonging to `role`.
    pub fn polygons_for(&self, role: Role) -> impl Iterator<Item = &PolygonRecord> {
        self.polygons.iter().filter(move |p| p.role() == role)
    }

    /// The current overlap highlight sequence.
    pub fn overlap(&self) -> &[Point<f64>] {
        self.detector.overlap()
    }

    /// The overlap detector, for direct tree access.
    pub fn detector(&self) -> &OverlapDetector {
        &self.detector
    }

    /// Size accounting for the detector's trees and overlap set.
    pub fn stats(&self) -> OverlapStats {
        self.detector.stats()
    }
}
