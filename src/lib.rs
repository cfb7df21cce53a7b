//! Embedded 2D quadtree point index with polygon overlap detection.
//!
//! ```rust
//! use overgrid::{Point, Role, Session};
//!
//! let mut session = Session::with_defaults()?;
//! session.finalize_polygon(
//!     vec![
//!         Point::new(50.0, 50.0),
//!         Point::new(150.0, 50.0),
//!         Point::new(100.0, 120.0),
//!     ],
//!     [255, 0, 0],
//! )?;
//!
//! session.set_active_role(Role::User);
//! session.finalize_polygon(
//!     vec![
//!         Point::new(50.0, 50.0),
//!         Point::new(200.0, 80.0),
//!         Point::new(120.0, 180.0),
//!     ],
//!     [0, 0, 255],
//! )?;
//!
//! assert_eq!(session.overlap(), &[Point::new(50.0, 50.0)]);
//! # Ok::<(), overgrid::OvergridError>(())
//! ```

pub mod config;
pub mod error;
pub mod geom;
pub mod overlap;
pub mod polygon;
pub mod session;
pub mod spatial;
pub mod tree;

pub use config::{Config, MatchPolicy};
pub use error::{OvergridError, Result};
pub use geom::Bounds;
pub use overlap::{OverlapDetector, OverlapStats};
pub use polygon::{Color, PolygonRecord, Role};
pub use session::Session;
pub use tree::{LeafOutline, RegionTree};

pub use geo::{Point, Polygon};

pub use spatial::{bounding_box, point_in_polygon};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, MatchPolicy, OvergridError, Result};

    pub use geo::{Point, Polygon};

    pub use crate::{Bounds, LeafOutline, RegionTree};

    pub use crate::{OverlapDetector, OverlapStats};

    pub use crate::{Color, PolygonRecord, Role, Session};

    pub use crate::spatial::{bounding_box, point_in_polygon};
}
