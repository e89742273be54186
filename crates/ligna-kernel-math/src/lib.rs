#![warn(missing_docs)]

//! Rotation algebra for the ligna modeling kernel.
//!
//! Thin wrappers around nalgebra providing the math that keeps a board's
//! stored corner position, dimensions, and orientation mutually consistent:
//! Euler rotation in the fixed Z-then-Y-then-X application order, rotation
//! composition in world axes, planar rotation about a pivot, and the
//! corner ↔ visual-center conversion.
//!
//! Every function is a pure computation over its arguments; nothing in this
//! crate holds state.

use nalgebra::{Rotation3, Unit, UnitQuaternion, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// One of the three world coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// World X axis.
    X,
    /// World Y axis.
    Y,
    /// World Z axis.
    Z,
}

impl Axis {
    /// Unit direction vector along this axis.
    pub fn unit(self) -> Dir3 {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }

    /// Component index of this axis (x = 0, y = 1, z = 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Build the rotation matrix for an Euler triple `(rx, ry, rz)` in radians.
///
/// The matrix is the product `Rx · Ry · Rz`, so a vector is rotated around
/// Z first, then Y, then X. This is the one rotation convention used by the
/// whole kernel; board `rotation` fields are always interpreted this way.
pub fn euler_to_rotation(angles: &Vec3) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angles.x)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), angles.y)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), angles.z)
}

/// Recover the Euler triple `(rx, ry, rz)` from a rotation matrix.
///
/// Inverse of [`euler_to_rotation`] up to angle aliasing: the returned
/// triple always reproduces the same rotation, not necessarily the same
/// numbers. At gimbal lock (cos ry = 0) the Z angle folds into X and the
/// result has `rz = 0`.
pub fn euler_from_rotation(rotation: &Rotation3<f64>) -> Vec3 {
    let m = rotation.matrix();
    let sy = m[(0, 2)].clamp(-1.0, 1.0);
    if sy.abs() < 1.0 - 1e-9 {
        Vec3::new(
            (-m[(1, 2)]).atan2(m[(2, 2)]),
            sy.asin(),
            (-m[(0, 1)]).atan2(m[(0, 0)]),
        )
    } else if sy > 0.0 {
        // ry = +pi/2: row 1 is (sin(rx+rz), cos(rx+rz), 0)
        Vec3::new(m[(1, 0)].atan2(m[(1, 1)]), std::f64::consts::FRAC_PI_2, 0.0)
    } else {
        // ry = -pi/2: row 1 is (-sin(rx-rz), cos(rx-rz), 0)
        Vec3::new(
            (-m[(1, 0)]).atan2(m[(1, 1)]),
            -std::f64::consts::FRAC_PI_2,
            0.0,
        )
    }
}

/// Rotate a vector by an Euler triple (Z first, then Y, then X).
pub fn rotate_vector_by_euler(v: &Vec3, angles: &Vec3) -> Vec3 {
    euler_to_rotation(angles) * v
}

/// World-space centroid of a board stored as corner + dimensions + rotation.
///
/// `position` is the board's local-frame minimum corner; the center is
/// derived by rotating the half-dimensions vector into world space:
/// `center = position + R · (dimensions / 2)`.
pub fn visual_center(position: &Point3, dimensions: &Vec3, rotation: &Vec3) -> Point3 {
    position + rotate_vector_by_euler(&(dimensions * 0.5), rotation)
}

/// Exact inverse of [`visual_center`].
///
/// Recovers the stored corner from a (possibly moved) visual center. The
/// half-dimensions vector must be rotated by the board's *current* rotation;
/// after a group rotation that is the newly composed rotation, not the old
/// one.
pub fn corner_from_visual_center(center: &Point3, dimensions: &Vec3, rotation: &Vec3) -> Point3 {
    center - rotate_vector_by_euler(&(dimensions * 0.5), rotation)
}

/// Rotate a point about an axis-aligned line through `pivot`.
///
/// The component along `axis` is unchanged; the remaining two components,
/// taken in (x, y, z) order, rotate by the planar `[cos, -sin; sin, cos]`
/// matrix. About Y this turns in the opposite sense from the Euler `Ry`
/// matrix — group moves in the editor are defined in this planar form.
pub fn rotate_point_around_axis(point: &Point3, pivot: &Point3, axis: Axis, angle: f64) -> Point3 {
    let (s, c) = angle.sin_cos();
    let d = point - pivot;
    match axis {
        Axis::X => Point3::new(
            point.x,
            pivot.y + c * d.y - s * d.z,
            pivot.z + s * d.y + c * d.z,
        ),
        Axis::Y => Point3::new(
            pivot.x + c * d.x - s * d.z,
            point.y,
            pivot.z + s * d.x + c * d.z,
        ),
        Axis::Z => Point3::new(
            pivot.x + c * d.x - s * d.y,
            pivot.y + s * d.x + c * d.y,
            point.z,
        ),
    }
}

/// Compose a world-axis rotation increment onto an existing Euler triple.
///
/// The increment is applied as a quaternion left-multiplication
/// `next = delta ∘ current`, so it is interpreted in world axes regardless
/// of the board's current orientation. (Right-multiplication would rotate
/// in the board's own frame and diverge for any non-axis-aligned board.)
/// The result is decomposed back to the kernel's Euler convention.
pub fn compose_rotation(current: &Vec3, axis: Axis, angle: f64) -> Vec3 {
    let delta = UnitQuaternion::from_axis_angle(&axis.unit(), angle);
    let cur = UnitQuaternion::from_rotation_matrix(&euler_to_rotation(current));
    euler_from_rotation(&(delta * cur).to_rotation_matrix())
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in meters.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default kernel tolerances (1e-9 m linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two angles are effectively equal (in radians).
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity_euler() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = rotate_vector_by_euler(&v, &Vec3::zeros());
        assert!((r - v).norm() < 1e-12);
    }

    #[test]
    fn test_single_axis_rotations() {
        // Z by 90°: (1,0,0) -> (0,1,0)
        let r = rotate_vector_by_euler(&Vec3::x(), &Vec3::new(0.0, 0.0, FRAC_PI_2));
        assert!((r - Vec3::y()).norm() < 1e-12);
        // X by 90°: (0,1,0) -> (0,0,1)
        let r = rotate_vector_by_euler(&Vec3::y(), &Vec3::new(FRAC_PI_2, 0.0, 0.0));
        assert!((r - Vec3::z()).norm() < 1e-12);
        // Y by 90°: (1,0,0) -> (0,0,-1)
        let r = rotate_vector_by_euler(&Vec3::x(), &Vec3::new(0.0, FRAC_PI_2, 0.0));
        assert!((r - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_euler_application_order_is_z_then_y_then_x() {
        let angles = Vec3::new(0.3, -0.7, 1.1);
        let v = Vec3::new(0.5, -2.0, 4.0);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), angles.z);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angles.y);
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angles.x);
        let expected = rx * (ry * (rz * v));
        let got = rotate_vector_by_euler(&v, &angles);
        assert!((got - expected).norm() < 1e-12);
    }

    #[test]
    fn test_euler_round_trip_as_rotation() {
        for angles in [
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(-1.2, 0.9, 2.5),
            Vec3::new(3.0, -1.4, -0.2),
            Vec3::new(0.0, FRAC_PI_2, 0.7), // gimbal lock
            Vec3::new(0.4, -FRAC_PI_2, 1.3),
        ] {
            let r = euler_to_rotation(&angles);
            let back = euler_to_rotation(&euler_from_rotation(&r));
            // Compare as rotations: the triples may alias.
            assert!((r.matrix() - back.matrix()).norm() < 1e-9);
        }
    }

    #[test]
    fn test_compose_rotation_world_y_quarter_turn() {
        let rot = compose_rotation(&Vec3::zeros(), Axis::Y, FRAC_PI_2);
        let r = rotate_vector_by_euler(&Vec3::x(), &rot);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_compose_rotation_is_world_frame() {
        // Tip a board 90° about X, then add a world-Z quarter turn. In world
        // frame the result maps (1,0,0) -> (0,1,0); an object-frame (right)
        // composition would send it elsewhere.
        let tipped = compose_rotation(&Vec3::zeros(), Axis::X, FRAC_PI_2);
        let rot = compose_rotation(&tipped, Axis::Z, FRAC_PI_2);
        let r = rotate_vector_by_euler(&Vec3::x(), &rot);
        assert!((r - Vec3::y()).norm() < 1e-9);
    }

    #[test]
    fn test_visual_center_round_trip() {
        let dims = Vec3::new(0.04, 0.09, 2.4);
        for rot in [
            Vec3::zeros(),
            Vec3::new(0.5, -1.1, 2.2),
            Vec3::new(PI, FRAC_PI_2, -0.3),
        ] {
            let pos = Point3::new(1.25, -0.5, 3.75);
            let center = visual_center(&pos, &dims, &rot);
            let corner = corner_from_visual_center(&center, &dims, &rot);
            assert!((corner - pos).norm() < 1e-9);
        }
    }

    #[test]
    fn test_visual_center_identity_rotation() {
        let pos = Point3::new(0.0, 0.0, 0.0);
        let dims = Vec3::new(2.0, 4.0, 6.0);
        let c = visual_center(&pos, &dims, &Vec3::zeros());
        assert!((c - Point3::new(1.0, 2.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn test_rotate_point_keeps_axis_component() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let pivot = Point3::new(-0.5, 4.0, 0.25);
        assert_eq!(rotate_point_around_axis(&p, &pivot, Axis::X, 0.8).x, p.x);
        assert_eq!(rotate_point_around_axis(&p, &pivot, Axis::Y, 0.8).y, p.y);
        assert_eq!(rotate_point_around_axis(&p, &pivot, Axis::Z, 0.8).z, p.z);
    }

    #[test]
    fn test_rotate_point_preserves_distance_to_pivot() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let pivot = Point3::new(-1.0, 0.5, 2.0);
        let before = (p - pivot).norm();
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let q = rotate_point_around_axis(&p, &pivot, axis, 1.234);
            assert_relative_eq!((q - pivot).norm(), before, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_group_rigidity_two_centers() {
        // Two visual centers rotated 90° about world Y through (1,0,0).
        let pivot = Point3::new(1.0, 0.0, 0.0);
        let a = rotate_point_around_axis(&Point3::origin(), &pivot, Axis::Y, FRAC_PI_2);
        let b = rotate_point_around_axis(&Point3::new(2.0, 0.0, 0.0), &pivot, Axis::Y, FRAC_PI_2);
        assert!((a - Point3::new(1.0, 0.0, -1.0)).norm() < 1e-12);
        assert!((b - Point3::new(1.0, 0.0, 1.0)).norm() < 1e-12);
        assert_relative_eq!((b - a).norm(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-10, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.0 + 1e-6, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
    }
}
