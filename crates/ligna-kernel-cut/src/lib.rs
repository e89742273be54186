#![warn(missing_docs)]

//! Cut geometry for the ligna modeling kernel.
//!
//! Given a board's dimensions and a cut descriptor, computes the
//! position/orientation/scale of an oversized cutter solid whose boolean
//! subtraction from the board produces the desired angled cut. The actual
//! subtraction is performed by the external CSG evaluator; this crate only
//! derives poses.
//!
//! Two algorithmic variants coexist:
//!
//! - the **face-edge model** ([`wedge`]), driven by a fixed per-face sign
//!   convention table;
//! - the **edge-pivot model** ([`miter`]), which disambiguates the rotation
//!   sign numerically with a point-containment probe.
//!
//! All poses are expressed in the board's local frame, centered at the
//! board's geometric center. Every function is pure.

pub mod error;
pub mod miter;
pub mod wedge;

pub use error::{CutError, Result};
pub use miter::{miter_cutter_pose, nearest_edge_on_face, MiterCut};
pub use wedge::{wedge_cutter_pose, WedgeCut};

use ligna_kernel_math::{Axis, Point3, Vec3};

/// Cutter edge length as a multiple of the board's largest dimension.
///
/// Oversizing guarantees the cutter spans the whole board laterally for any
/// permitted angle, so only the near-face plane matters geometrically.
pub const CUTTER_SIZE_FACTOR: f64 = 3.0;

/// Edge length of the cubic cutter solid for a board of these dimensions.
pub fn cutter_size(dimensions: &Vec3) -> f64 {
    CUTTER_SIZE_FACTOR * dimensions.max()
}

/// One of the six axis-aligned faces of a board.
///
/// Faces map to local axes as: `Right` +X, `Left` −X, `Top` +Y,
/// `Bottom` −Y, `Front` +Z, `Back` −Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

impl Face {
    /// The axis this face's outward normal lies along.
    pub fn normal_axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Bottom | Face::Top => Axis::Y,
            Face::Back | Face::Front => Axis::Z,
        }
    }

    /// Sign of the outward normal along [`Face::normal_axis`].
    pub fn normal_sign(self) -> f64 {
        match self {
            Face::Right | Face::Top | Face::Front => 1.0,
            Face::Left | Face::Bottom | Face::Back => -1.0,
        }
    }

    /// Outward unit normal of this face.
    pub fn outward_normal(self) -> Vec3 {
        let mut n = Vec3::zeros();
        n[self.normal_axis().index()] = self.normal_sign();
        n
    }

    /// The face on the opposite side of the board.
    pub fn opposite(self) -> Face {
        match self {
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Bottom => Face::Top,
            Face::Top => Face::Bottom,
            Face::Back => Face::Front,
            Face::Front => Face::Back,
        }
    }
}

/// One of the twelve board edges, named by the pair of faces it joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

impl BoardEdge {
    /// The two faces meeting at this edge.
    pub fn faces(self) -> (Face, Face) {
        match self {
            BoardEdge::TopFront => (Face::Top, Face::Front),
            BoardEdge::TopBack => (Face::Top, Face::Back),
            BoardEdge::TopLeft => (Face::Top, Face::Left),
            BoardEdge::TopRight => (Face::Top, Face::Right),
            BoardEdge::BottomFront => (Face::Bottom, Face::Front),
            BoardEdge::BottomBack => (Face::Bottom, Face::Back),
            BoardEdge::BottomLeft => (Face::Bottom, Face::Left),
            BoardEdge::BottomRight => (Face::Bottom, Face::Right),
            BoardEdge::FrontLeft => (Face::Front, Face::Left),
            BoardEdge::FrontRight => (Face::Front, Face::Right),
            BoardEdge::BackLeft => (Face::Back, Face::Left),
            BoardEdge::BackRight => (Face::Back, Face::Right),
        }
    }

    /// The axis the edge runs along (orthogonal to both face normals).
    pub fn axis(self) -> Axis {
        let (a, b) = self.faces();
        third_axis(a.normal_axis(), b.normal_axis())
    }

    /// Whether `face` is one of the two faces meeting at this edge.
    pub fn borders(self, face: Face) -> bool {
        let (a, b) = self.faces();
        a == face || b == face
    }

    /// Midpoint of the edge in the board's centered local frame.
    pub fn anchor(self, dimensions: &Vec3) -> Point3 {
        let (a, b) = self.faces();
        let mut p = Point3::origin();
        p[a.normal_axis().index()] =
            a.normal_sign() * dimensions[a.normal_axis().index()] * 0.5;
        p[b.normal_axis().index()] =
            b.normal_sign() * dimensions[b.normal_axis().index()] * 0.5;
        p
    }

    /// Endpoints of the edge in the board's centered local frame.
    ///
    /// Used by the viewport to render pivot guides.
    pub fn line(self, dimensions: &Vec3) -> (Point3, Point3) {
        let anchor = self.anchor(dimensions);
        let mut half = Vec3::zeros();
        let i = self.axis().index();
        half[i] = dimensions[i] * 0.5;
        (anchor - half, anchor + half)
    }
}

/// The four edges bounding a face.
pub fn face_edges(face: Face) -> [BoardEdge; 4] {
    match face {
        Face::Top => [
            BoardEdge::TopFront,
            BoardEdge::TopBack,
            BoardEdge::TopLeft,
            BoardEdge::TopRight,
        ],
        Face::Bottom => [
            BoardEdge::BottomFront,
            BoardEdge::BottomBack,
            BoardEdge::BottomLeft,
            BoardEdge::BottomRight,
        ],
        Face::Front => [
            BoardEdge::TopFront,
            BoardEdge::BottomFront,
            BoardEdge::FrontLeft,
            BoardEdge::FrontRight,
        ],
        Face::Back => [
            BoardEdge::TopBack,
            BoardEdge::BottomBack,
            BoardEdge::BackLeft,
            BoardEdge::BackRight,
        ],
        Face::Left => [
            BoardEdge::TopLeft,
            BoardEdge::BottomLeft,
            BoardEdge::FrontLeft,
            BoardEdge::BackLeft,
        ],
        Face::Right => [
            BoardEdge::TopRight,
            BoardEdge::BottomRight,
            BoardEdge::FrontRight,
            BoardEdge::BackRight,
        ],
    }
}

/// The axis orthogonal to both `a` and `b` (which must differ).
pub(crate) fn third_axis(a: Axis, b: Axis) -> Axis {
    debug_assert_ne!(a, b);
    match 3 - a.index() - b.index() {
        0 => Axis::X,
        1 => Axis::Y,
        _ => Axis::Z,
    }
}

/// Pose of a cutter solid, in the board's centered local frame.
///
/// Consumed as the second operand of a boolean subtraction against the
/// board's base solid; the same pose is reused for the removed-material
/// highlight overlay (intersection instead of subtraction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutterPose {
    /// Center of the cutter solid.
    pub position: Point3,
    /// Orientation as Euler angles in radians (same convention as boards:
    /// Z applied first, then Y, then X).
    pub rotation: Vec3,
    /// Edge lengths of the cutter solid.
    pub scale: Vec3,
}
