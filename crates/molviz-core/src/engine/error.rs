use crate::core::utils::geometry::GeometryError;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single molecule could not be built. Only that molecule is lost.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    #[error(
        "Bond {bond_id} on line {line} references atom {atom_id}, which is not part of this molecule"
    )]
    UnresolvedBondReference {
        bond_id: i64,
        atom_id: i64,
        line: usize,
    },

    #[error("Bond {bond_id} on line {line} cannot be drawn: {source}")]
    DegenerateBond {
        bond_id: i64,
        line: usize,
        #[source]
        source: GeometryError,
    },
}

/// Reasons a whole import produced no molecules.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Cannot read file '{path}': {source}", path = path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No MOL2 compatible molecule found")]
    NoMoleculesFound,
}

impl ImportError {
    /// Whether the error should stop the caller, as opposed to being reported
    /// as an empty result.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ImportError::NoMoleculesFound)
    }
}
