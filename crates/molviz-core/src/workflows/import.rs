use crate::core::colors::registry::ColorRegistry;
use crate::core::io::mol2::Mol2Parser;
use crate::core::models::molecule::Molecule;
use crate::engine::builder::MoleculeBuilder;
use crate::engine::config::BuildConfig;
use crate::engine::error::{BuildError, ImportError};
use crate::engine::progress::{Progress, ProgressReporter};
use rand::Rng;
use std::path::Path;
use tracing::{info, instrument, warn};

/// A molecule of the input that could not be built.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeFailure {
    /// Zero-based position of the molecule record in the input.
    pub index: usize,
    pub title: Option<String>,
    pub error: BuildError,
}

/// A molecule that was built, with its position among the molecule records of
/// the input.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedMolecule {
    /// Zero-based position of the molecule record in the input.
    pub index: usize,
    pub molecule: Molecule,
}

/// Outcome of importing one MOL2 buffer.
///
/// A failure aborts only its own molecule; every molecule that could be built
/// is kept, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub molecules: Vec<ImportedMolecule>,
    pub failures: Vec<MoleculeFailure>,
}

impl ImportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of molecule records found in the input.
    pub fn total(&self) -> usize {
        self.molecules.len() + self.failures.len()
    }
}

/// Imports every molecule of a MOL2 text buffer.
///
/// # Arguments
///
/// * `text` - The MOL2 content.
/// * `config` - Color sharing, radii and naming options.
/// * `palette` - Optional colors that take precedence for matching elements.
/// * `rng` - Source of randomness for colors of newly seen elements.
/// * `reporter` - Receives progress events.
///
/// # Errors
///
/// Returns [`ImportError::NoMoleculesFound`] if the text holds no molecule
/// marker. Failures of individual molecules are collected in the report.
#[instrument(skip_all, name = "import_workflow")]
pub fn run<R: Rng + ?Sized>(
    text: &str,
    config: &BuildConfig,
    palette: Option<&ColorRegistry>,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<ImportReport, ImportError> {
    // Parser construction fails only when no molecule marker is present.
    let parser = Mol2Parser::new(text).map_err(|_| {
        warn!("No mol2 compatible molecule found.");
        ImportError::NoMoleculesFound
    })?;
    info!("Found {} molecule(s).", parser.expected());
    reporter.report(Progress::ImportStart {
        total_molecules: parser.expected() as u64,
    });

    // Later builds borrow every earlier molecule as one slice.
    let mut built: Vec<Molecule> = Vec::with_capacity(parser.len());
    let mut built_indices: Vec<usize> = Vec::with_capacity(parser.len());
    let mut failures = Vec::new();
    for (index, parsed) in parser.enumerate() {
        let result = {
            let mut builder = MoleculeBuilder::new(config).with_previous_molecules(&built);
            if let Some(palette) = palette {
                builder = builder.with_palette(palette);
            }
            builder.build(&parsed, &mut *rng)
        };

        match result {
            Ok(molecule) => {
                reporter.report(Progress::MoleculeBuilt {
                    index,
                    atoms: molecule.atoms.len(),
                    bonds: molecule.bonds.len(),
                });
                built.push(molecule);
                built_indices.push(index);
            }
            Err(error) => {
                warn!("Molecule {} was not created: {}", index + 1, error);
                reporter.report(Progress::MoleculeFailed {
                    index,
                    reason: error.to_string(),
                });
                failures.push(MoleculeFailure {
                    index,
                    title: parsed.title.clone(),
                    error,
                });
            }
        }
    }

    let report = ImportReport {
        molecules: built_indices
            .into_iter()
            .zip(built)
            .map(|(index, molecule)| ImportedMolecule { index, molecule })
            .collect(),
        failures,
    };

    reporter.report(Progress::ImportFinish {
        built: report.molecules.len(),
        failed: report.failures.len(),
    });
    info!(
        "Import finished: {} molecule(s) created, {} failed.",
        report.molecules.len(),
        report.failures.len()
    );
    Ok(report)
}

/// Reads a MOL2 file and imports it with [`run`].
///
/// # Errors
///
/// Returns [`ImportError::FileUnreadable`] if the file cannot be read, and
/// otherwise the errors of [`run`].
pub fn run_path<P: AsRef<Path>, R: Rng + ?Sized>(
    path: P,
    config: &BuildConfig,
    palette: Option<&ColorRegistry>,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<ImportReport, ImportError> {
    let path = path.as_ref();
    info!("Loading MOL2 file {:?}", path);
    let text = std::fs::read_to_string(path).map_err(|e| ImportError::FileUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    run(&text, config, palette, rng, reporter)
}
