//! Plane geometry for the board.
//!
//! Purpose
//! - Points and segments in board coordinates (`Vector2<f64>`, y grows upward).
//! - Segment intersection via the implicit line equation `A·x + B·y + C = 0`,
//!   tolerant containment, perpendicular projection, polar angles.
//!
//! Conventions
//! - Segment containment uses an absolute slack (`cfg::CONTAINS_TOL`) large
//!   enough to absorb the error of the intersection solve.
//! - Two points are the same location when they are within `cfg::SNAP_TOL`,
//!   the same slack containment uses; exact float equality is too brittle for
//!   points produced by intersection arithmetic.
//! - Polar angles are in `[0, 2π)` and grow counter-clockwise, so sorting by
//!   angle yields counter-clockwise polygons.

pub(crate) mod cfg;
mod segment;
mod types;
mod util;

pub use segment::Segment;
pub use types::{Color, LineId, PlayerId, Point, PointId};
pub use util::{distance, polar_angle, same_location, signed_area};

#[cfg(test)]
mod tests;
