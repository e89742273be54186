#![warn(missing_docs)]

//! Document model for the ligna woodworking designer.
//!
//! This crate defines the plain data types the editor stores: boards
//! (rectangular prisms with a corner position, dimensions, and an Euler
//! orientation) and the cuts applied to their faces. It is shared between
//! the kernel, the editor store, the undo history, and the persistence
//! layer.
//!
//! The model is purely declarative — no derived geometry, just the fields
//! a user edits. Cutter poses and visual centers are recomputed from
//! scratch by the engine on every read, so snapshots of a [`Document`] are
//! always complete and self-contained.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a board in a document.
pub type BoardId = u64;

/// 3D vector with f64 components (conventionally meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// One of the six axis-aligned faces of a board.
///
/// Faces map to local axes as: `Right` +X, `Left` −X, `Top` +Y,
/// `Bottom` −Y, `Front` +Z, `Back` −Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// −X face.
    Left,
    /// +X face.
    Right,
    /// −Y face.
    Bottom,
    /// +Y face.
    Top,
    /// −Z face.
    Back,
    /// +Z face.
    Front,
}

/// One of the twelve board edges, named by the pair of faces it joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardEdge {
    /// Edge joining the top and front faces.
    TopFront,
    /// Edge joining the top and back faces.
    TopBack,
    /// Edge joining the top and left faces.
    TopLeft,
    /// Edge joining the top and right faces.
    TopRight,
    /// Edge joining the bottom and front faces.
    BottomFront,
    /// Edge joining the bottom and back faces.
    BottomBack,
    /// Edge joining the bottom and left faces.
    BottomLeft,
    /// Edge joining the bottom and right faces.
    BottomRight,
    /// Edge joining the front and left faces.
    FrontLeft,
    /// Edge joining the front and right faces.
    FrontRight,
    /// Edge joining the back and left faces.
    BackLeft,
    /// Edge joining the back and right faces.
    BackRight,
}

/// A cut applied to a board — the tagged union of the two descriptor kinds.
///
/// Which variant is present selects the geometry algorithm: [`CutOp::FaceCut`]
/// uses the production face-edge model, [`CutOp::EdgeCut`] the edge-pivot
/// model. Cuts carry no derived state; the engine recomputes the cutter pose
/// on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CutOp {
    /// Angled wedge defined by a face, a blade entry edge, and an angle.
    FaceCut {
        /// The face being cut.
        face: Face,
        /// Blade angle in degrees, 0..=89. Zero removes no material.
        angle: f64,
        /// Which adjacent face the blade enters from. Each face has two
        /// permissible entries and a default when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        edge: Option<Face>,
        /// Cut depth in meters from the face. Omitted = full through-cut.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        depth: Option<f64>,
    },
    /// Angled cut defined by a pivot edge and the face the blade enters.
    EdgeCut {
        /// The board edge the cutter pivots around.
        edge: BoardEdge,
        /// Which of the edge's two faces the blade enters through.
        entry_face: Face,
        /// Blade angle in degrees.
        angle: f64,
    },
}

/// A rectangular-prism board.
///
/// `position` is the corner of the board's local (pre-rotation) bounding
/// box — NOT the geometric center. The world-space centroid is derived by
/// the engine from corner + rotated half-dimensions, which lets groups of
/// boards rotate rigidly about a shared pivot without disturbing any
/// board's own corner-based storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier.
    pub id: BoardId,
    /// Optional human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Local-frame minimum corner.
    pub position: Vec3,
    /// Width, height, depth — all positive.
    pub dimensions: Vec3,
    /// Euler angles in radians about world X, Y, Z; a vector is rotated
    /// around Z first, then Y, then X.
    pub rotation: Vec3,
    /// Cuts applied to this board. Deleted with the board.
    #[serde(default)]
    pub cuts: Vec<CutOp>,
}

impl Board {
    /// Create a board with identity rotation and no cuts.
    pub fn new(id: BoardId, position: Vec3, dimensions: Vec3) -> Self {
        Self {
            id,
            name: None,
            position,
            dimensions,
            rotation: Vec3::zero(),
            cuts: Vec::new(),
        }
    }
}

/// A ligna document — the `.ligna` file format.
///
/// Plain structured data with no derived fields; the undo history snapshots
/// whole documents and the persistence layer serializes them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Format version string (e.g. "0.4").
    pub version: String,
    /// All boards, keyed by [`BoardId`].
    pub boards: HashMap<BoardId, Board>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: "0.4".to_string(),
            boards: HashMap::new(),
        }
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
