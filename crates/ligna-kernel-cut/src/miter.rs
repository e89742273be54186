//! Edge-pivot cut model (experimental).
//!
//! The pivot is one of the twelve board edges rather than a face/edge pair.
//! Rotating the cutter by `+angle` and `-angle` about the same edge are
//! both geometrically valid wedges, so no static sign table can apply;
//! instead the rotation sign is disambiguated numerically: a sample point
//! just inside the board next to the entry face is tested for containment
//! against both candidate cutters, and the containing candidate wins.

use crate::{cutter_size, face_edges, BoardEdge, CutError, CutterPose, Face, Result};
use ligna_kernel_math::{Axis, Point3, Tolerance, Vec3};
use nalgebra::Rotation3;

/// Descriptor for an edge-pivot miter cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiterCut {
    /// The board edge the cutter pivots around.
    pub edge: BoardEdge,
    /// Which of the edge's two faces the blade enters through.
    pub entry_face: Face,
    /// Blade angle in degrees.
    pub angle_deg: f64,
}

impl MiterCut {
    /// Create a miter cut descriptor.
    pub fn new(edge: BoardEdge, entry_face: Face, angle_deg: f64) -> Self {
        Self {
            edge,
            entry_face,
            angle_deg,
        }
    }
}

/// Probe sweep from the pivot edge toward the entry face's center, as a
/// fraction of the board dimension along that direction.
const PROBE_SWEEP: f64 = 0.25;

/// Probe inset below the entry face, as a fraction of the board dimension
/// along the face normal. Must stay well under [`PROBE_SWEEP`] so the probe
/// lands inside the removed wedge at any non-degenerate angle.
const PROBE_INSET: f64 = 0.01;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    angle: f64,
    rotation: Rotation3<f64>,
    center: Point3,
}

fn candidate(anchor: &Point3, axis: Axis, entry_normal: &Vec3, half: f64, angle: f64) -> Candidate {
    let rotation = Rotation3::from_axis_angle(&axis.unit(), angle);
    let center = anchor + rotation * (entry_normal * half);
    Candidate {
        angle,
        rotation,
        center,
    }
}

/// Oriented-bounding-volume containment: inverse-rotate the sample into the
/// candidate's local frame and check all three axes against the half size.
fn contains(c: &Candidate, point: &Point3, half: f64) -> bool {
    let local = c.rotation.inverse_transform_vector(&(point - c.center));
    let limit = half + Tolerance::DEFAULT.linear;
    local.x.abs() <= limit && local.y.abs() <= limit && local.z.abs() <= limit
}

/// Compute the cutter pose for an edge-pivot miter cut.
///
/// The pose is in the board's centered local frame. The selected rotation
/// is the one that removes material adjacent to the entry face rather than
/// the far side; when the probe lands in neither candidate (angle ≈ 0) or
/// in both, the `+angle` candidate is chosen.
pub fn miter_cutter_pose(dimensions: &Vec3, cut: &MiterCut) -> Result<CutterPose> {
    let (a, b) = cut.edge.faces();
    let other = if cut.entry_face == a {
        b
    } else if cut.entry_face == b {
        a
    } else {
        return Err(CutError::EntryFaceNotOnEdge {
            edge: cut.edge,
            face: cut.entry_face,
        });
    };

    let axis = cut.edge.axis();
    let anchor = cut.edge.anchor(dimensions);
    let size = cutter_size(dimensions);
    let half = size * 0.5;
    let theta = cut.angle_deg.to_radians();

    let entry_normal = cut.entry_face.outward_normal();
    let other_normal = other.outward_normal();

    // Sample just inside the board: hugging the entry face, swept from the
    // pivot edge toward the face center.
    let sweep = PROBE_SWEEP * dimensions[other.normal_axis().index()];
    let inset = PROBE_INSET * dimensions[cut.entry_face.normal_axis().index()];
    let probe = anchor - other_normal * sweep - entry_normal * inset;

    let plus = candidate(&anchor, axis, &entry_normal, half, theta);
    let minus = candidate(&anchor, axis, &entry_normal, half, -theta);

    let chosen = if contains(&plus, &probe, half) {
        plus
    } else if contains(&minus, &probe, half) {
        minus
    } else {
        plus
    };

    let mut rotation = Vec3::zeros();
    rotation[axis.index()] = chosen.angle;

    Ok(CutterPose {
        position: chosen.center,
        rotation,
        scale: Vec3::new(size, size, size),
    })
}

/// Resolve a clicked point on a face to the closest of its four edges.
///
/// `point` is in the board's centered local frame; distance is measured
/// point-to-line against each edge.
pub fn nearest_edge_on_face(face: Face, dimensions: &Vec3, point: &Point3) -> BoardEdge {
    let edges = face_edges(face);
    let mut best = edges[0];
    let mut best_dist = f64::INFINITY;
    for edge in edges {
        let (p0, p1) = edge.line(dimensions);
        let d = point_to_line_distance(point, &p0, &p1);
        if d < best_dist {
            best_dist = d;
            best = edge;
        }
    }
    best
}

fn point_to_line_distance(q: &Point3, p0: &Point3, p1: &Point3) -> f64 {
    let dir = (p1 - p0).normalize();
    let w = q - p0;
    (w - dir * w.dot(&dir)).norm()
}
