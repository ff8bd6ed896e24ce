use super::atom::Atom;
use super::topology::Bond;
use crate::core::colors::registry::ColorRegistry;

/// The generic name given to molecules when the caller supplies none.
pub const DEFAULT_MOLECULE_NAME: &str = "Molecule";

/// The renderable model produced from one MOL2 molecule record.
///
/// Atoms and bonds are plain value records in file order; bonds refer to their
/// endpoints by atom id. The element color registry is owned by the molecule so
/// that later imports can reuse its colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub name: String,
    /// The title line of the MOL2 molecule record, if present.
    pub title: Option<String>,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub element_colors: ColorRegistry,
}

/// Per-molecule counts, in the spirit of an atoms/bonds statistics panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoleculeStatistics {
    pub atom_count: usize,
    pub bond_count: usize,
    /// Number of atoms per element symbol, in first-seen order.
    pub element_counts: Vec<(String, usize)>,
}

impl Molecule {
    /// Returns the first atom carrying `id`.
    pub fn atom_by_id(&self, id: i64) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.id == id)
    }

    pub fn bonds_of(&self, atom_id: i64) -> impl Iterator<Item = &Bond> + '_ {
        self.bonds.iter().filter(move |bond| bond.contains(atom_id))
    }

    pub fn statistics(&self) -> MoleculeStatistics {
        let mut element_counts: Vec<(String, usize)> = Vec::new();
        for atom in &self.atoms {
            match element_counts.iter_mut().find(|(e, _)| *e == atom.element) {
                Some((_, count)) => *count += 1,
                None => element_counts.push((atom.element.clone(), 1)),
            }
        }
        MoleculeStatistics {
            atom_count: self.atoms.len(),
            bond_count: self.bonds.len(),
            element_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::color::Color;
    use crate::core::utils::geometry::compute_pose;
    use nalgebra::Point3;

    fn water() -> Molecule {
        let o = Color::rgb(1.0, 0.0, 0.0);
        let h = Color::rgb(1.0, 1.0, 1.0);
        let mut element_colors = ColorRegistry::new();
        element_colors.insert("O", o);
        element_colors.insert("H", h);

        let atoms = vec![
            Atom::new(1, "O", Point3::new(0.0, 0.0, 0.0), o, 0.2),
            Atom::new(2, "H", Point3::new(0.96, 0.0, 0.0), h, 0.2),
            Atom::new(3, "H", Point3::new(-0.24, 0.93, 0.0), h, 0.2),
        ];
        let bonds = [(1, 1, 2), (2, 1, 3)]
            .iter()
            .map(|&(id, s, t)| {
                let source_position = atoms[(s - 1) as usize].position;
                let target_position = atoms[(t - 1) as usize].position;
                Bond {
                    id,
                    source_id: s,
                    target_id: t,
                    source_position,
                    target_position,
                    pose: compute_pose(&source_position, &target_position, 0.08).unwrap(),
                }
            })
            .collect();

        Molecule {
            name: DEFAULT_MOLECULE_NAME.to_string(),
            title: Some("water".to_string()),
            atoms,
            bonds,
            element_colors,
        }
    }

    #[test]
    fn atom_by_id_finds_first_match() {
        let molecule = water();
        assert_eq!(molecule.atom_by_id(2).map(|a| a.element.as_str()), Some("H"));
        assert!(molecule.atom_by_id(99).is_none());
    }

    #[test]
    fn bonds_of_lists_incident_bonds() {
        let molecule = water();
        assert_eq!(molecule.bonds_of(1).count(), 2);
        assert_eq!(molecule.bonds_of(3).map(|b| b.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn statistics_count_atoms_bonds_and_elements() {
        let stats = water().statistics();
        assert_eq!(stats.atom_count, 3);
        assert_eq!(stats.bond_count, 2);
        assert_eq!(
            stats.element_counts,
            vec![("O".to_string(), 1), ("H".to_string(), 2)]
        );
    }

    #[test]
    fn statistics_of_empty_molecule_are_zero() {
        let molecule = Molecule {
            name: DEFAULT_MOLECULE_NAME.to_string(),
            title: None,
            atoms: Vec::new(),
            bonds: Vec::new(),
            element_colors: ColorRegistry::new(),
        };
        assert_eq!(molecule.statistics(), MoleculeStatistics::default());
    }
}
