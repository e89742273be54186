//! Face-edge cut model (production).
//!
//! A wedge cut is described by the face being cut, the blade angle, the
//! entry edge (which side the blade enters from), and an optional depth.
//! A fixed per-face table supplies the normal axis, the pivot axis, and the
//! rotation-sign convention; the pivot point sits on the face plane at the
//! edge opposite the entry, the side that stays intact at every angle.

use crate::{cutter_size, third_axis, CutError, CutterPose, Face, Result};
use ligna_kernel_math::{rotate_point_around_axis, Axis, Point3, Vec3};

/// Descriptor for a face-edge wedge cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeCut {
    /// The face being cut.
    pub face: Face,
    /// Blade angle in degrees, 0..=89. Zero leaves the cutter's near face
    /// coplanar with the board face and removes no material.
    pub angle_deg: f64,
    /// Which adjacent face the blade enters from; per-face default if `None`.
    pub edge: Option<Face>,
    /// Cut depth in meters from the face; `None` = full through-cut.
    pub depth: Option<f64>,
}

impl WedgeCut {
    /// Full-depth wedge cut with the face's default entry edge.
    pub fn new(face: Face, angle_deg: f64) -> Self {
        Self {
            face,
            angle_deg,
            edge: None,
            depth: None,
        }
    }
}

/// Per-face cut convention: normal axis and direction, the axis the wedge
/// pivots around, and the rotation-sign convention for that face.
#[derive(Debug, Clone, Copy)]
struct FaceConfig {
    normal_axis: Axis,
    normal_sign: f64,
    pivot_axis: Axis,
    rotation_sign: f64,
}

/// Permissible entry edges for a face: the two faces adjacent along the
/// axis orthogonal to both the normal and pivot axes, default first.
#[derive(Debug, Clone, Copy)]
struct EntryConfig {
    options: [Face; 2],
}

// Indexed by Face discriminant: Left, Right, Bottom, Top, Back, Front.
// Pivot axes stay in {X, Z}; rotation signs are antisymmetric across each
// opposite-face pair so mirrored cuts get mirrored rotations.
const FACE_CONFIGS: [FaceConfig; 6] = [
    // Left (−X)
    FaceConfig {
        normal_axis: Axis::X,
        normal_sign: -1.0,
        pivot_axis: Axis::Z,
        rotation_sign: -1.0,
    },
    // Right (+X)
    FaceConfig {
        normal_axis: Axis::X,
        normal_sign: 1.0,
        pivot_axis: Axis::Z,
        rotation_sign: 1.0,
    },
    // Bottom (−Y)
    FaceConfig {
        normal_axis: Axis::Y,
        normal_sign: -1.0,
        pivot_axis: Axis::X,
        rotation_sign: -1.0,
    },
    // Top (+Y)
    FaceConfig {
        normal_axis: Axis::Y,
        normal_sign: 1.0,
        pivot_axis: Axis::X,
        rotation_sign: 1.0,
    },
    // Back (−Z)
    FaceConfig {
        normal_axis: Axis::Z,
        normal_sign: -1.0,
        pivot_axis: Axis::X,
        rotation_sign: 1.0,
    },
    // Front (+Z)
    FaceConfig {
        normal_axis: Axis::Z,
        normal_sign: 1.0,
        pivot_axis: Axis::X,
        rotation_sign: -1.0,
    },
];

const ENTRY_CONFIGS: [EntryConfig; 6] = [
    // Left
    EntryConfig {
        options: [Face::Top, Face::Bottom],
    },
    // Right
    EntryConfig {
        options: [Face::Top, Face::Bottom],
    },
    // Bottom
    EntryConfig {
        options: [Face::Front, Face::Back],
    },
    // Top
    EntryConfig {
        options: [Face::Front, Face::Back],
    },
    // Back
    EntryConfig {
        options: [Face::Top, Face::Bottom],
    },
    // Front
    EntryConfig {
        options: [Face::Top, Face::Bottom],
    },
];

fn face_config(face: Face) -> &'static FaceConfig {
    &FACE_CONFIGS[face as usize]
}

fn entry_config(face: Face) -> &'static EntryConfig {
    &ENTRY_CONFIGS[face as usize]
}

/// The default entry edge for a face.
pub fn default_entry_edge(face: Face) -> Face {
    entry_config(face).options[0]
}

/// The two permissible entry edges for a face, default first.
pub fn entry_edges(face: Face) -> [Face; 2] {
    entry_config(face).options
}

/// Compute the cutter pose for a face-edge wedge cut.
///
/// The pose is in the board's centered local frame. At angle 0 the cutter's
/// near face is exactly coplanar with the board face (zero removed volume);
/// increasing the angle sweeps the near face inward from the entry edge
/// toward the pivot edge. Out-of-range `depth` values are not rejected:
/// they shift the pivot past the board and the cut degrades to removing the
/// whole face region.
pub fn wedge_cutter_pose(dimensions: &Vec3, cut: &WedgeCut) -> Result<CutterPose> {
    let cfg = face_config(cut.face);
    let entries = entry_config(cut.face);

    let entry = match cut.edge {
        None => entries.options[0],
        Some(e) if entries.options.contains(&e) => e,
        Some(e) => {
            return Err(CutError::EntryEdgeNotAdjacent {
                face: cut.face,
                edge: e,
            })
        }
    };

    let edge_axis = third_axis(cfg.normal_axis, cfg.pivot_axis);
    let n = cfg.normal_axis.index();
    let e = edge_axis.index();

    // Pivot: on the face plane, at the edge opposite the entry.
    let pivot_sign = -entry.normal_sign();
    let mut pivot = Point3::origin();
    pivot[n] = cfg.normal_sign * dimensions[n] * 0.5;
    pivot[e] = pivot_sign * dimensions[e] * 0.5;

    // Partial cut: the pivot drops inward so that depth == full dimension
    // coincides with the through-cut.
    if let Some(depth) = cut.depth {
        pivot[n] -= cfg.normal_sign * (dimensions[n] - depth);
    }

    let rotation_angle = pivot_sign * cfg.rotation_sign * cut.angle_deg.to_radians();

    // Cutter center starts directly outside the face, half a cutter away
    // from the pivot, then swings about the pivot axis through the pivot.
    let size = cutter_size(dimensions);
    let rest = pivot + cut.face.outward_normal() * (size * 0.5);
    let position = rotate_point_around_axis(&rest, &pivot, cfg.pivot_axis, rotation_angle);

    let mut rotation = Vec3::zeros();
    rotation[cfg.pivot_axis.index()] = rotation_angle;

    Ok(CutterPose {
        position,
        rotation,
        scale: Vec3::new(size, size, size),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    const ALL_FACES: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Bottom,
        Face::Top,
        Face::Back,
        Face::Front,
    ];

    #[test]
    fn test_unit_board_top_front_45() {
        // Unit board, top face, blade entering from the front at 45°.
        let dims = Vec3::new(1.0, 1.0, 1.0);
        let cut = WedgeCut {
            face: Face::Top,
            angle_deg: 45.0,
            edge: Some(Face::Front),
            depth: None,
        };
        let pose = wedge_cutter_pose(&dims, &cut).unwrap();

        // Pivot sits at the back edge of the top face: (0, 0.5, -0.5).
        // Rotation is -45° about X (pivot sign -1 × top face sign +1).
        assert_relative_eq!(pose.rotation.x, -FRAC_PI_4, epsilon = 1e-12);
        assert_eq!(pose.rotation.y, 0.0);
        assert_eq!(pose.rotation.z, 0.0);
        assert_eq!(pose.scale, Vec3::new(3.0, 3.0, 3.0));

        let half = 1.5;
        let (s, c) = (-FRAC_PI_4).sin_cos();
        let expected = Point3::new(0.0, 0.5 + c * half, -0.5 + s * half);
        assert!((pose.position - expected).norm() < 1e-12);
    }

    #[test]
    fn test_zero_angle_near_face_is_coplanar() {
        let dims = Vec3::new(0.8, 0.3, 2.0);
        let size = cutter_size(&dims);
        for face in ALL_FACES {
            for edge in entry_edges(face) {
                for depth in [None, Some(0.1)] {
                    let cut = WedgeCut {
                        face,
                        angle_deg: 0.0,
                        edge: Some(edge),
                        depth,
                    };
                    let pose = wedge_cutter_pose(&dims, &cut).unwrap();
                    assert_eq!(pose.rotation, Vec3::zeros());

                    // Near face plane along the normal axis.
                    let n = face.normal_axis().index();
                    let near = pose.position[n] - face.normal_sign() * size * 0.5;
                    let plane = match depth {
                        None => face.normal_sign() * dims[n] * 0.5,
                        Some(d) => {
                            face.normal_sign() * dims[n] * 0.5
                                - face.normal_sign() * (dims[n] - d)
                        }
                    };
                    assert_relative_eq!(near, plane, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_mirror_symmetry_front_back_entries() {
        let dims = Vec3::new(1.0, 1.0, 1.0);
        let front = wedge_cutter_pose(
            &dims,
            &WedgeCut {
                face: Face::Top,
                angle_deg: 30.0,
                edge: Some(Face::Front),
                depth: None,
            },
        )
        .unwrap();
        let back = wedge_cutter_pose(
            &dims,
            &WedgeCut {
                face: Face::Top,
                angle_deg: 30.0,
                edge: Some(Face::Back),
                depth: None,
            },
        )
        .unwrap();

        // Mirror images across the face's center plane z = 0.
        assert_relative_eq!(front.position.x, back.position.x, epsilon = 1e-12);
        assert_relative_eq!(front.position.y, back.position.y, epsilon = 1e-12);
        assert_relative_eq!(front.position.z, -back.position.z, epsilon = 1e-12);
        assert_relative_eq!(front.rotation.x, -back.rotation.x, epsilon = 1e-12);
    }

    #[test]
    fn test_mirror_symmetry_left_right_faces() {
        let dims = Vec3::new(2.0, 1.0, 0.5);
        let left = wedge_cutter_pose(&dims, &WedgeCut::new(Face::Left, 20.0)).unwrap();
        let right = wedge_cutter_pose(&dims, &WedgeCut::new(Face::Right, 20.0)).unwrap();
        assert_relative_eq!(left.position.x, -right.position.x, epsilon = 1e-12);
        assert_relative_eq!(left.position.y, right.position.y, epsilon = 1e-12);
        assert_relative_eq!(left.position.z, right.position.z, epsilon = 1e-12);
        assert_relative_eq!(left.rotation.z, -right.rotation.z, epsilon = 1e-12);
    }

    #[test]
    fn test_default_entry_edge_matches_explicit() {
        let dims = Vec3::new(1.0, 0.5, 0.25);
        for face in ALL_FACES {
            let implicit = wedge_cutter_pose(&dims, &WedgeCut::new(face, 15.0)).unwrap();
            let explicit = wedge_cutter_pose(
                &dims,
                &WedgeCut {
                    face,
                    angle_deg: 15.0,
                    edge: Some(default_entry_edge(face)),
                    depth: None,
                },
            )
            .unwrap();
            assert_eq!(implicit, explicit);
        }
    }

    #[test]
    fn test_full_depth_equals_through_cut() {
        let dims = Vec3::new(0.6, 0.018, 0.3);
        for face in ALL_FACES {
            let n = face.normal_axis().index();
            let through = wedge_cutter_pose(&dims, &WedgeCut::new(face, 45.0)).unwrap();
            let full_depth = wedgecut_with_depth(face, 45.0, dims[n]);
            let pose = wedge_cutter_pose(&dims, &full_depth).unwrap();
            assert!((pose.position - through.position).norm() < 1e-12);
            assert_eq!(pose.rotation, through.rotation);
        }
    }

    fn wedgecut_with_depth(face: Face, angle_deg: f64, depth: f64) -> WedgeCut {
        WedgeCut {
            face,
            angle_deg,
            edge: None,
            depth: Some(depth),
        }
    }

    #[test]
    fn test_partial_depth_shifts_pivot_inward() {
        // Unit board, top face, depth 0.3: pivot drops from y=0.5 to y=-0.2.
        let dims = Vec3::new(1.0, 1.0, 1.0);
        let pose = wedge_cutter_pose(&dims, &wedgecut_with_depth(Face::Top, 0.0, 0.3)).unwrap();
        let near_y = pose.position.y - cutter_size(&dims) * 0.5;
        assert_relative_eq!(near_y, -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_oversized_depth_is_not_an_error() {
        let dims = Vec3::new(1.0, 1.0, 1.0);
        let pose = wedge_cutter_pose(&dims, &wedgecut_with_depth(Face::Top, 10.0, 5.0));
        let pose = pose.unwrap();
        assert!(pose.position.y.is_finite());
    }

    #[test]
    fn test_invalid_entry_edge_rejected() {
        let dims = Vec3::new(1.0, 1.0, 1.0);
        let err = wedge_cutter_pose(
            &dims,
            &WedgeCut {
                face: Face::Top,
                angle_deg: 45.0,
                edge: Some(Face::Left),
                depth: None,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            CutError::EntryEdgeNotAdjacent {
                face: Face::Top,
                edge: Face::Left,
            }
        );
    }
}
