use std::fmt;

use crate::geom::LineId;

/// Why a move was rejected. Rejections never modify the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// A line was submitted while an area choice is pending.
    PendingAreaSelection,
    /// A line move lacks one or both endpoints.
    MissingEndpoint,
    /// A referenced line is not on the board (already split or never existed).
    UnknownLine { line: LineId },
    /// An endpoint sits on an existing line endpoint.
    DuplicateEndpoint,
    /// Both endpoints resolve onto one existing line.
    DegenerateSplit,
    /// An endpoint does not lie on the line it claims to split.
    EndpointOffLine { line: LineId },
    /// The segment crosses a line it is not meant to split.
    CrossingExistingLine,
    /// The segment's midpoint lies in already scored territory.
    InsideScoredArea,
    /// An area choice carries no area.
    NoAreaSelected,
    /// An area choice outside area selection, or not one of the offered pair.
    InvalidAreaChoice,
    /// The region could not be cut into two polygons of at least 3 vertices.
    DegenerateAreaSplit,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::PendingAreaSelection => {
                write!(f, "an area must be chosen before the next line")
            }
            MoveError::MissingEndpoint => write!(f, "line move must have two endpoints"),
            MoveError::UnknownLine { line } => write!(f, "{line} is not on the board"),
            MoveError::DuplicateEndpoint => {
                write!(f, "cannot place an endpoint on an existing endpoint")
            }
            MoveError::DegenerateSplit => write!(f, "both endpoints are on the same line"),
            MoveError::EndpointOffLine { line } => {
                write!(f, "endpoint does not lie on {line}")
            }
            MoveError::CrossingExistingLine => write!(f, "line crosses an existing line"),
            MoveError::InsideScoredArea => write!(f, "cannot draw inside a scored area"),
            MoveError::NoAreaSelected => write!(f, "an area must be chosen"),
            MoveError::InvalidAreaChoice => write!(f, "area is not an offered choice"),
            MoveError::DegenerateAreaSplit => {
                write!(f, "region cannot be split into two polygons")
            }
        }
    }
}

impl std::error::Error for MoveError {}
