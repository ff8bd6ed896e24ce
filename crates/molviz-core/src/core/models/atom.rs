use super::color::Color;
use nalgebra::Point3;

/// An atom ready to be turned into a sphere primitive by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The file-assigned atom id (not necessarily contiguous or 1-based).
    pub id: i64,
    /// The normalized element symbol (e.g. "C", "Cl"); may be empty.
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The color registered for `element` in the owning molecule.
    pub color: Color,
    /// The display radius of the sphere.
    pub radius: f64,
}

impl Atom {
    pub fn new(id: i64, element: &str, position: Point3<f64>, color: Color, radius: f64) -> Self {
        Self {
            id,
            element: element.to_string(),
            position,
            color,
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_keeps_all_fields() {
        let atom = Atom::new(
            7,
            "Cl",
            Point3::new(1.0, 2.0, 3.0),
            Color::rgb(0.0, 1.0, 0.0),
            0.2,
        );

        assert_eq!(atom.id, 7);
        assert_eq!(atom.element, "Cl");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.color, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(atom.radius, 0.2);
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new(1, "O", Point3::origin(), Color::rgb(1.0, 0.0, 0.0), 0.2);
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
