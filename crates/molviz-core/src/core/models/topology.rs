use crate::core::utils::geometry::CylinderPose;
use nalgebra::Point3;

/// A bond between two atoms of the same molecule, with the pose of the cylinder
/// that draws it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub id: i64,
    pub source_id: i64, // Atom id of the first endpoint
    pub target_id: i64, // Atom id of the second endpoint
    pub source_position: Point3<f64>,
    pub target_position: Point3<f64>,
    pub pose: CylinderPose,
}

impl Bond {
    pub fn contains(&self, atom_id: i64) -> bool {
        self.source_id == atom_id || self.target_id == atom_id
    }

    pub fn length(&self) -> f64 {
        self.pose.length
    }
}
