//! Error types for the cut-geometry engine.

use crate::{BoardEdge, Face};
use thiserror::Error;

/// Errors that can occur while resolving a cut descriptor.
///
/// Only structurally invalid descriptors are rejected; numeric anomalies
/// (angle at the domain edge, oversized depth) produce a geometrically
/// consistent cutter instead of an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutError {
    /// The explicit entry edge is not one of the two faces adjacent to the
    /// cut face along its edge axis.
    #[error("face {face:?} has no entry edge {edge:?}")]
    EntryEdgeNotAdjacent {
        /// The face being cut.
        face: Face,
        /// The rejected entry edge.
        edge: Face,
    },

    /// The entry face is not one of the two faces meeting at the pivot edge.
    #[error("edge {edge:?} does not border face {face:?}")]
    EntryFaceNotOnEdge {
        /// The pivot edge.
        edge: BoardEdge,
        /// The rejected entry face.
        face: Face,
    },
}

/// Result type for cut-geometry operations.
pub type Result<T> = std::result::Result<T, CutError>;
