//! Configuration for the overgrid core.
//!
//! All knobs are fixed at construction time: the canvas extent the root tree
//! covers, how many points a node may hold before it splits, how deep the
//! partition may recurse, and the coordinate-matching policy used by overlap
//! detection.

use crate::error::{OvergridError, Result};
use crate::geom::Bounds;
use serde::{Deserialize, Serialize};

/// Coordinate equality policy used when matching points across trees.
///
/// Boundary points come from incremental interpolation of independently drawn
/// polygons, so exact equality only triggers when both polygons pass through
/// identical pixel coordinates. A pixel tolerance makes the match forgiving;
/// it is an explicit policy rather than a hidden constant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MatchPolicy {
    /// Two points match only with bit-exact equal coordinates.
    #[default]
    Exact,
    /// Two points match when both coordinates differ by at most the given
    /// radius (in pixels).
    Tolerance(f64),
}

/// Core configuration.
///
/// Designed to be easily serializable and loadable from JSON while keeping
/// complexity minimal.
///
/// # Example
///
/// ```rust
/// use overgrid::Config;
///
/// let config = Config::default();
/// assert_eq!(config.node_capacity, 1);
///
/// let json = r#"{
///     "canvas_width": 800.0,
///     "canvas_height": 600.0,
///     "max_depth": 6
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.max_depth, 6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Width of the canvas in pixels; the root tree spans `0..=canvas_width`.
    #[serde(default = "Config::default_canvas_width")]
    pub canvas_width: f64,

    /// Height of the canvas in pixels; the root tree spans `0..=canvas_height`.
    #[serde(default = "Config::default_canvas_height")]
    pub canvas_height: f64,

    /// Maximum number of points a node holds before it subdivides.
    #[serde(default = "Config::default_node_capacity")]
    pub node_capacity: usize,

    /// Maximum subdivision depth. A node that has exhausted its depth budget
    /// becomes a flat bucket and accepts points without limit.
    #[serde(default = "Config::default_max_depth")]
    pub max_depth: usize,

    /// Optional matching tolerance in pixels for overlap detection
    /// (None means exact coordinate equality).
    #[serde(default)]
    pub match_tolerance: Option<f64>,
}

impl Config {
    const fn default_canvas_width() -> f64 {
        600.0
    }

    const fn default_canvas_height() -> f64 {
        400.0
    }

    const fn default_node_capacity() -> usize {
        1
    }

    const fn default_max_depth() -> usize {
        8
    }

    /// Set the canvas extent covered by the root trees.
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Canvas dimensions must be positive"
        );
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the per-node capacity before subdivision.
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Node capacity must be greater than zero");
        self.node_capacity = capacity;
        self
    }

    /// Set the maximum subdivision depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable tolerance-based point matching for overlap detection.
    pub fn with_match_tolerance(mut self, tolerance: f64) -> Self {
        assert!(
            tolerance.is_finite() && tolerance >= 0.0,
            "Match tolerance must be finite and non-negative"
        );
        self.match_tolerance = Some(tolerance);
        self
    }

    /// The matching policy derived from `match_tolerance`.
    ///
    /// A zero tolerance degenerates to exact matching.
    pub fn match_policy(&self) -> MatchPolicy {
        match self.match_tolerance {
            Some(t) if t > 0.0 => MatchPolicy::Tolerance(t),
            _ => MatchPolicy::Exact,
        }
    }

    /// The root bounds spanned by trees built from this configuration.
    pub fn canvas_bounds(&self) -> Result<Bounds> {
        Bounds::new(0.0, 0.0, self.canvas_width, self.canvas_height)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.canvas_width.is_finite() || self.canvas_width <= 0.0 {
            return Err(OvergridError::InvalidInput(
                "Canvas width must be finite and positive".to_string(),
            ));
        }
        if !self.canvas_height.is_finite() || self.canvas_height <= 0.0 {
            return Err(OvergridError::InvalidInput(
                "Canvas height must be finite and positive".to_string(),
            ));
        }
        if self.node_capacity == 0 {
            return Err(OvergridError::InvalidInput(
                "Node capacity must be greater than zero".to_string(),
            ));
        }
        if let Some(tolerance) = self.match_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(OvergridError::InvalidInput(
                    "Match tolerance must be finite and non-negative".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Self::default_canvas_width(),
            canvas_height: Self::default_canvas_height(),
            node_capacity: Self::default_node_capacity(),
            max_depth: Self::default_max_depth(),
            match_tolerance: None,
        }
    }
}
