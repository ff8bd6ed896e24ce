use super::mol2::ParsedMolecule;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading molecule records from a file format.
///
/// Implementors turn a text source into raw per-molecule records; building the
/// renderable model from those records is left to the engine.
pub trait MoleculeSource {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads every molecule record from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the input holds no molecule.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ParsedMolecule>, Self::Error>;

    /// Reads every molecule record from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ParsedMolecule>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
