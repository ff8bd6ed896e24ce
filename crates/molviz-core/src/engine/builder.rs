use super::config::BuildConfig;
use super::error::BuildError;
use crate::core::colors::registry::ColorRegistry;
use crate::core::io::mol2::ParsedMolecule;
use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::Bond;
use crate::core::utils::geometry::compute_pose;
use crate::core::utils::identifiers::normalize_element_symbol;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Turns the raw records of one molecule into a [`Molecule`].
///
/// Colors can be seeded from a palette and, when the configuration asks for
/// shared colors, from molecules built earlier in the same import. Candidates
/// are consulted in that order and the first one offering an element wins.
pub struct MoleculeBuilder<'a> {
    config: &'a BuildConfig,
    palette: Option<&'a ColorRegistry>,
    previous: &'a [Molecule],
}

impl<'a> MoleculeBuilder<'a> {
    pub fn new(config: &'a BuildConfig) -> Self {
        Self {
            config,
            palette: None,
            previous: &[],
        }
    }

    pub fn with_palette(mut self, palette: &'a ColorRegistry) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn with_previous_molecules(mut self, molecules: &'a [Molecule]) -> Self {
        self.previous = molecules;
        self
    }

    /// Builds the molecule.
    ///
    /// # Arguments
    ///
    /// * `parsed` - The raw atom and bond records, in file order.
    /// * `rng` - Source of randomness for colors of newly seen elements.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnresolvedBondReference`] if a bond names an atom id
    /// absent from this molecule, and [`BuildError::DegenerateBond`] if a bond
    /// joins two atoms at the same position. No partial molecule is returned.
    pub fn build<R: Rng + ?Sized>(
        &self,
        parsed: &ParsedMolecule,
        rng: &mut R,
    ) -> Result<Molecule, BuildError> {
        let mut element_colors = self.seed_registry(parsed);

        let atoms: Vec<Atom> = parsed
            .atom_records
            .iter()
            .map(|record| {
                let element = normalize_element_symbol(&record.raw_type);
                let color = element_colors.assign_or_reuse(&element, &mut *rng);
                Atom::new(
                    record.id,
                    &element,
                    record.position,
                    color,
                    self.config.atom_radius,
                )
            })
            .collect();

        let mut index_by_id: HashMap<i64, usize> = HashMap::with_capacity(atoms.len());
        for (idx, atom) in atoms.iter().enumerate() {
            index_by_id.entry(atom.id).or_insert(idx);
        }

        let mut bonds = Vec::with_capacity(parsed.bond_records.len());
        for record in &parsed.bond_records {
            let resolve = |atom_id: i64| {
                index_by_id
                    .get(&atom_id)
                    .map(|&idx| &atoms[idx])
                    .ok_or(BuildError::UnresolvedBondReference {
                        bond_id: record.id,
                        atom_id,
                        line: record.line,
                    })
            };
            let source = resolve(record.source_id)?;
            let target = resolve(record.target_id)?;

            let pose = compute_pose(&source.position, &target.position, self.config.bond_radius)
                .map_err(|e| BuildError::DegenerateBond {
                    bond_id: record.id,
                    line: record.line,
                    source: e,
                })?;

            bonds.push(Bond {
                id: record.id,
                source_id: source.id,
                target_id: target.id,
                source_position: source.position,
                target_position: target.position,
                pose,
            });
        }

        debug!(
            "Built molecule with {} atom(s), {} bond(s) and {} element color(s).",
            atoms.len(),
            bonds.len(),
            element_colors.len()
        );

        Ok(Molecule {
            name: self.config.name().to_string(),
            title: parsed.title.clone(),
            atoms,
            bonds,
            element_colors,
        })
    }

    fn seed_registry(&self, parsed: &ParsedMolecule) -> ColorRegistry {
        let mut registry = ColorRegistry::new();
        let shared: &[Molecule] = if self.config.share_colors {
            self.previous
        } else {
            &[]
        };
        if self.palette.is_none() && shared.is_empty() {
            return registry;
        }

        let elements: HashSet<String> = parsed
            .atom_records
            .iter()
            .map(|record| normalize_element_symbol(&record.raw_type))
            .collect();

        let candidates = self
            .palette
            .into_iter()
            .chain(shared.iter().map(|m| &m.element_colors))
            .map(|source| (source, &elements));
        let imported = registry.import_from(candidates);
        debug!("Imported {} color(s) from other registries.", imported);
        registry
    }
}
