#![warn(missing_docs)]

//! ligna — geometric modeling kernel for a woodworking designer.
//!
//! Evaluates [`ligna_ir`] documents against the kernel crates: each cut on
//! a board resolves to the pose of an oversized cutter solid (consumed by
//! the external CSG evaluator for the actual subtraction and for the
//! removed-material overlay), and rotation requests resolve to updated
//! board records for the store to persist. Every operation is a pure
//! function of its inputs; the board collection itself lives in the
//! calling editor.
//!
//! # Example
//!
//! ```
//! use ligna::{cutter_poses, group_pivot, rotate_group, Axis};
//! use ligna::ligna_ir::{Board, CutOp, Face, Vec3};
//!
//! let mut shelf = Board::new(1, Vec3::zero(), Vec3::new(0.6, 0.018, 0.3));
//! shelf.cuts.push(CutOp::FaceCut {
//!     face: Face::Top,
//!     angle: 45.0,
//!     edge: None,
//!     depth: None,
//! });
//!
//! let poses = cutter_poses(&shelf).unwrap();
//! assert_eq!(poses.len(), 1);
//!
//! let pivot = group_pivot(std::slice::from_ref(&shelf)).unwrap();
//! let rotated = rotate_group(
//!     std::slice::from_ref(&shelf),
//!     Axis::Y,
//!     std::f64::consts::FRAC_PI_2,
//!     pivot,
//! );
//! assert_eq!(rotated.len(), 1);
//! ```

pub use ligna_ir;
pub use ligna_kernel_cut;
pub use ligna_kernel_math;

pub use ligna_kernel_cut::CutterPose;
pub use ligna_kernel_math::Axis;

use ligna_ir::{Board, BoardId, CutOp, Document};
use ligna_kernel_cut::{miter_cutter_pose, wedge_cutter_pose, CutError, MiterCut, WedgeCut};
use ligna_kernel_math::{
    compose_rotation, corner_from_visual_center, rotate_point_around_axis, visual_center, Point3,
    Vec3,
};
use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    /// The document has no board with this id.
    #[error("no board with id {0}")]
    UnknownBoard(BoardId),
    /// A cut descriptor could not be resolved.
    #[error("cut geometry error: {0}")]
    Cut(#[from] CutError),
}

fn to_point(v: &ligna_ir::Vec3) -> Point3 {
    Point3::new(v.x, v.y, v.z)
}

fn to_vector(v: &ligna_ir::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn from_point(p: &Point3) -> ligna_ir::Vec3 {
    ligna_ir::Vec3::new(p.x, p.y, p.z)
}

fn from_vector(v: &Vec3) -> ligna_ir::Vec3 {
    ligna_ir::Vec3::new(v.x, v.y, v.z)
}

fn to_kernel_face(face: ligna_ir::Face) -> ligna_kernel_cut::Face {
    use ligna_ir::Face as Ir;
    use ligna_kernel_cut::Face as K;
    match face {
        Ir::Left => K::Left,
        Ir::Right => K::Right,
        Ir::Bottom => K::Bottom,
        Ir::Top => K::Top,
        Ir::Back => K::Back,
        Ir::Front => K::Front,
    }
}

fn to_kernel_edge(edge: ligna_ir::BoardEdge) -> ligna_kernel_cut::BoardEdge {
    use ligna_ir::BoardEdge as Ir;
    use ligna_kernel_cut::BoardEdge as K;
    match edge {
        Ir::TopFront => K::TopFront,
        Ir::TopBack => K::TopBack,
        Ir::TopLeft => K::TopLeft,
        Ir::TopRight => K::TopRight,
        Ir::BottomFront => K::BottomFront,
        Ir::BottomBack => K::BottomBack,
        Ir::BottomLeft => K::BottomLeft,
        Ir::BottomRight => K::BottomRight,
        Ir::FrontLeft => K::FrontLeft,
        Ir::FrontRight => K::FrontRight,
        Ir::BackLeft => K::BackLeft,
        Ir::BackRight => K::BackRight,
    }
}

/// Compute the cutter pose for a single cut on a board of these dimensions.
///
/// Dispatches on the descriptor variant: [`CutOp::FaceCut`] uses the
/// face-edge model, [`CutOp::EdgeCut`] the edge-pivot model. The pose is in
/// the board's centered local frame; the viewport composes it with the
/// board's own transform.
pub fn cutter_pose(dimensions: &ligna_ir::Vec3, cut: &CutOp) -> Result<CutterPose, EngineError> {
    let dims = to_vector(dimensions);
    let pose = match cut {
        CutOp::FaceCut {
            face,
            angle,
            edge,
            depth,
        } => wedge_cutter_pose(
            &dims,
            &WedgeCut {
                face: to_kernel_face(*face),
                angle_deg: *angle,
                edge: edge.map(to_kernel_face),
                depth: *depth,
            },
        )?,
        CutOp::EdgeCut {
            edge,
            entry_face,
            angle,
        } => miter_cutter_pose(
            &dims,
            &MiterCut::new(to_kernel_edge(*edge), to_kernel_face(*entry_face), *angle),
        )?,
    };
    Ok(pose)
}

/// Compute cutter poses for every cut on a board, in cut order.
pub fn cutter_poses(board: &Board) -> Result<Vec<CutterPose>, EngineError> {
    board
        .cuts
        .iter()
        .map(|cut| cutter_pose(&board.dimensions, cut))
        .collect()
}

/// Compute cutter poses for a board looked up by id in a document.
pub fn board_cutter_poses(doc: &Document, id: BoardId) -> Result<Vec<CutterPose>, EngineError> {
    let board = doc.boards.get(&id).ok_or(EngineError::UnknownBoard(id))?;
    cutter_poses(board)
}

/// World-space centroid of a board.
///
/// Derived from the stored corner and the rotated half-dimensions; never
/// stored on the board itself.
pub fn board_visual_center(board: &Board) -> Point3 {
    visual_center(
        &to_point(&board.position),
        &to_vector(&board.dimensions),
        &to_vector(&board.rotation),
    )
}

/// Shared pivot for a group rotation: the centroid of the boards' visual
/// centers. Returns `None` for an empty selection.
pub fn group_pivot(boards: &[Board]) -> Option<Point3> {
    if boards.is_empty() {
        return None;
    }
    let mut sum = Vec3::zeros();
    for board in boards {
        sum += board_visual_center(board).coords;
    }
    Some(Point3::from(sum / boards.len() as f64))
}

/// Rotate one board rigidly about an axis-aligned line through `pivot`.
///
/// The visual center orbits the pivot, the board's own rotation picks up a
/// world-axis increment, and the stored corner is re-derived from the moved
/// center using the *new* rotation. Returns the updated record; the input
/// is untouched.
pub fn rotated_board(board: &Board, axis: Axis, angle: f64, pivot: Point3) -> Board {
    let dims = to_vector(&board.dimensions);
    let center = board_visual_center(board);
    let moved = rotate_point_around_axis(&center, &pivot, axis, angle);
    let rotation = compose_rotation(&to_vector(&board.rotation), axis, angle);
    let corner = corner_from_visual_center(&moved, &dims, &rotation);

    let mut out = board.clone();
    out.position = from_point(&corner);
    out.rotation = from_vector(&rotation);
    out
}

/// Rotate a group of boards rigidly about a shared pivot.
///
/// Relative arrangement is preserved exactly; no group transform is ever
/// stored. Returns the updated records in input order.
pub fn rotate_group(boards: &[Board], axis: Axis, angle: f64, pivot: Point3) -> Vec<Board> {
    boards
        .iter()
        .map(|b| rotated_board(b, axis, angle, pivot))
        .collect()
}
