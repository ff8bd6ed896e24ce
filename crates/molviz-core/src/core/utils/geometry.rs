use nalgebra::{Point3, Rotation3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error(
        "Bond endpoints coincide at ({x}, {y}, {z}); a zero-length bond cannot be oriented",
        x = position.x,
        y = position.y,
        z = position.z
    )]
    DegenerateBond { position: Point3<f64> },
}

/// Placement of a unit cylinder primitive along a bond.
///
/// The primitive is modelled along its local +Z axis. Applying `pitch` about Y
/// and then `yaw` about Z (XYZ Euler order with zero roll) aligns that axis with
/// the bond direction, while `center` and `length` place and stretch it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderPose {
    pub center: Point3<f64>,
    pub length: f64,
    /// Rotation about Z, in radians.
    pub yaw: f64,
    /// Rotation about Y, in radians.
    pub pitch: f64,
    /// Display radius handed through to the primitive.
    pub radius: f64,
}

impl CylinderPose {
    pub fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_euler_angles(0.0, self.pitch, self.yaw)
    }

    /// Unit vector along the cylinder axis after orientation.
    pub fn axis(&self) -> Vector3<f64> {
        self.rotation() * Vector3::z()
    }
}

/// Computes the cylinder pose connecting `source` to `target`.
///
/// # Arguments
///
/// * `source` - Position of the first bonded atom.
/// * `target` - Position of the second bonded atom.
/// * `radius` - Display radius of the cylinder; not used in the pose math.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateBond`] when both points are identical.
pub fn compute_pose(
    source: &Point3<f64>,
    target: &Point3<f64>,
    radius: f64,
) -> Result<CylinderPose, GeometryError> {
    let delta = target - source;
    let length = delta.norm();

    if length == 0.0 {
        return Err(GeometryError::DegenerateBond { position: *source });
    }

    let center = nalgebra::center(source, target);
    let yaw = delta.y.atan2(delta.x);
    // |dz| <= length always holds; the clamp absorbs rounding overshoot.
    let pitch = (delta.z / length).clamp(-1.0, 1.0).acos();

    Ok(CylinderPose {
        center,
        length,
        yaw,
        pitch,
        radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn vertical_bond_has_zero_pitch() {
        let pose = compute_pose(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 0.0, 1.0),
            0.08,
        )
        .unwrap();

        assert!(f64_approx_equal(pose.length, 1.0));
        assert!(f64_approx_equal(pose.pitch, 0.0));
        assert!(f64_approx_equal(pose.yaw, 0.0));
        assert_eq!(pose.center, Point3::new(0.0, 0.0, 0.5));
        assert_eq!(pose.radius, 0.08);
    }

    #[test]
    fn downward_bond_is_flipped() {
        let pose = compute_pose(
            &Point3::new(1.0, 1.0, 2.0),
            &Point3::new(1.0, 1.0, -1.0),
            0.1,
        )
        .unwrap();
        assert!(f64_approx_equal(pose.length, 3.0));
        assert!(f64_approx_equal(pose.pitch, PI));
    }

    #[test]
    fn horizontal_bond_angles_follow_xy_direction() {
        let pose = compute_pose(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 1.0, 0.0),
            0.1,
        )
        .unwrap();
        assert!(f64_approx_equal(pose.length, 2f64.sqrt()));
        assert!(f64_approx_equal(pose.pitch, FRAC_PI_2));
        assert!(f64_approx_equal(pose.yaw, FRAC_PI_4));
    }

    #[test]
    fn center_is_exact_midpoint() {
        let source = Point3::new(-1.5, 2.0, 4.0);
        let target = Point3::new(2.5, -6.0, 1.0);
        let pose = compute_pose(&source, &target, 0.1).unwrap();
        assert_eq!(pose.center, Point3::new(0.5, -2.0, 2.5));
    }

    #[test]
    fn identical_endpoints_are_degenerate() {
        let p = Point3::new(3.0, -2.0, 1.0);
        let result = compute_pose(&p, &p, 0.1);
        assert_eq!(result, Err(GeometryError::DegenerateBond { position: p }));
    }

    #[test]
    fn nearly_identical_endpoints_are_not_degenerate() {
        let pose = compute_pose(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 0.0, 1e-12),
            0.1,
        )
        .unwrap();
        assert!(pose.length > 0.0);
    }

    #[test]
    fn rotated_axis_points_along_bond() {
        let source = Point3::new(0.3, -1.2, 0.7);
        let target = Point3::new(-2.1, 0.4, 3.3);
        let pose = compute_pose(&source, &target, 0.1).unwrap();
        let expected = (target - source).normalize();
        assert!((pose.axis() - expected).norm() < TOLERANCE);
    }

    #[test]
    fn pitch_stays_finite_for_axis_aligned_bonds() {
        for target in [
            Point3::new(0.0, 0.0, 1e-3),
            Point3::new(0.0, 0.0, -7.0),
            Point3::new(5.0, 0.0, 0.0),
        ] {
            let pose = compute_pose(&Point3::origin(), &target, 0.1).unwrap();
            assert!(pose.pitch.is_finite());
            assert!(pose.yaw.is_finite());
        }
    }
}
