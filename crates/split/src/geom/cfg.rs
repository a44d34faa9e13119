//! Tolerance defaults for board geometry (internal).
//!
//! Policy
//! - Fixed constants; the board is small (tens of units) and all call sites
//!   share one scale.

/// Slack on `|d(p,a) + d(p,b) - len|` for "point lies on segment".
pub(crate) const CONTAINS_TOL: f64 = 0.01;
/// Horizontal offset below which a direction counts as vertical for polar angles.
pub(crate) const VERTICAL_EPS: f64 = 1e-5;
/// Distance at or below which two coordinates are the same location. Matches
/// `CONTAINS_TOL`: closer points cannot be told apart by segment containment.
pub(crate) const SNAP_TOL: f64 = CONTAINS_TOL;
/// Relative cross-product threshold for parallel directions.
pub(crate) const PARALLEL_EPS: f64 = 1e-9;
/// Signed areas at or below this are treated as degenerate faces.
pub(crate) const AREA_EPS: f64 = 1e-9;
