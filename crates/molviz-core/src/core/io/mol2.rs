use super::traits::MoleculeSource;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

pub const MOLECULE_MARKER: &str = "@<TRIPOS>MOLECULE";
pub const ATOM_MARKER: &str = "@<TRIPOS>ATOM";
pub const BOND_MARKER: &str = "@<TRIPOS>BOND";
const RECORD_PREFIX: &str = "@<TRIPOS>";

const MIN_ATOM_FIELDS: usize = 5;
const MIN_BOND_FIELDS: usize = 4;

#[derive(Debug, Error)]
pub enum Mol2Error {
    #[error("Unable to read MOL2 input: {0}")]
    Io(#[from] io::Error),
    #[error("No @<TRIPOS>MOLECULE record found in input")]
    NoMoleculesFound,
}

/// One `@<TRIPOS>ATOM` line, before any normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub id: i64,
    pub raw_type: String,
    pub position: Point3<f64>,
    /// 1-based line number in the input.
    pub line: usize,
}

/// One `@<TRIPOS>BOND` line, referring to atoms by their file-assigned ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondRecord {
    pub id: i64,
    pub source_id: i64,
    pub target_id: i64,
    /// 1-based line number in the input.
    pub line: usize,
}

/// The raw records of a single molecule, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedMolecule {
    pub title: Option<String>,
    pub atom_records: Vec<AtomRecord>,
    pub bond_records: Vec<BondRecord>,
}

/// A forward-only cursor over the lines of one input buffer.
///
/// Successive single-molecule passes share the cursor; each pass leaves it on
/// the line where it stopped.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.lines.len()
    }

    pub fn remaining(&self) -> &[&'a str] {
        &self.lines[self.position.min(self.lines.len())..]
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.get(self.position).copied()?;
        self.position += 1;
        Some((self.position, line))
    }

    fn step_back(&mut self) {
        self.position = self.position.saturating_sub(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Seeking,
    Atoms,
    Bonds,
    Ignored,
}

/// Counts the lines that contain the molecule-start marker.
pub fn count_molecule_markers(lines: &[&str]) -> usize {
    lines
        .iter()
        .filter(|line| line.contains(MOLECULE_MARKER))
        .count()
}

/// Extracts one molecule starting at the cursor position.
///
/// The pass ends on the first molecule marker met after the bond section has
/// started (that line is left for the next pass) or at the end of input.
/// Lines too short to be records, or whose numeric fields do not parse, are
/// skipped.
pub fn parse_next(cursor: &mut LineCursor<'_>) -> ParsedMolecule {
    let mut molecule = ParsedMolecule::default();
    let mut section = Section::Seeking;
    let mut bonds_started = false;
    let mut awaiting_title = false;

    while let Some((line_num, raw)) = cursor.next_line() {
        let line = raw.trim();

        if line.contains(MOLECULE_MARKER) {
            if bonds_started {
                cursor.step_back();
                break;
            }
            trace!("Line {}: molecule record starts.", line_num);
            section = Section::Seeking;
            awaiting_title = true;
            continue;
        }
        if line.contains(ATOM_MARKER) {
            trace!("Line {}: entering atom section.", line_num);
            section = Section::Atoms;
            awaiting_title = false;
            continue;
        }
        if line.contains(BOND_MARKER) {
            trace!("Line {}: entering bond section.", line_num);
            section = Section::Bonds;
            bonds_started = true;
            awaiting_title = false;
            continue;
        }
        if line.contains(RECORD_PREFIX) {
            trace!("Line {}: ignoring section '{}'.", line_num, line);
            section = Section::Ignored;
            awaiting_title = false;
            continue;
        }

        if awaiting_title && !line.is_empty() {
            if molecule.title.is_none() {
                molecule.title = Some(line.to_string());
            }
            awaiting_title = false;
            continue;
        }

        match section {
            Section::Atoms => {
                if let Some(record) = parse_atom_line(line, line_num) {
                    molecule.atom_records.push(record);
                }
            }
            Section::Bonds => {
                if let Some(record) = parse_bond_line(line, line_num) {
                    molecule.bond_records.push(record);
                }
            }
            Section::Seeking | Section::Ignored => {}
        }
    }

    debug!(
        "Parsed molecule record with {} atom(s) and {} bond(s); cursor at line {}.",
        molecule.atom_records.len(),
        molecule.bond_records.len(),
        cursor.position()
    );
    molecule
}

fn parse_atom_line(line: &str, line_num: usize) -> Option<AtomRecord> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_ATOM_FIELDS {
        if !parts.is_empty() {
            trace!("Line {}: too few fields for an atom, skipped.", line_num);
        }
        return None;
    }

    let parsed = (
        parts[0].parse::<i64>(),
        parts[2].parse::<f64>(),
        parts[3].parse::<f64>(),
        parts[4].parse::<f64>(),
    );
    match parsed {
        (Ok(id), Ok(x), Ok(y), Ok(z)) => Some(AtomRecord {
            id,
            raw_type: parts[1].to_string(),
            position: Point3::new(x, y, z),
            line: line_num,
        }),
        _ => {
            debug!(
                "Line {}: non-numeric atom id or coordinate, skipped: '{}'",
                line_num, line
            );
            None
        }
    }
}

fn parse_bond_line(line: &str, line_num: usize) -> Option<BondRecord> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_BOND_FIELDS {
        if !parts.is_empty() {
            trace!("Line {}: too few fields for a bond, skipped.", line_num);
        }
        return None;
    }

    let parsed = (
        parts[0].parse::<i64>(),
        parts[1].parse::<i64>(),
        parts[2].parse::<i64>(),
    );
    match parsed {
        (Ok(id), Ok(source_id), Ok(target_id)) => Some(BondRecord {
            id,
            source_id,
            target_id,
            line: line_num,
        }),
        _ => {
            debug!(
                "Line {}: non-numeric bond id field, skipped: '{}'",
                line_num, line
            );
            None
        }
    }
}

/// Splits a MOL2 buffer into its molecule records.
///
/// The number of passes is fixed up front by counting molecule markers; each
/// pass resumes where the previous one stopped.
#[derive(Debug, Clone)]
pub struct Mol2Parser<'a> {
    cursor: LineCursor<'a>,
    expected: usize,
    produced: usize,
}

impl<'a> Mol2Parser<'a> {
    /// # Errors
    ///
    /// Returns [`Mol2Error::NoMoleculesFound`] if the text holds no molecule marker.
    pub fn new(text: &'a str) -> Result<Self, Mol2Error> {
        let cursor = LineCursor::new(text);
        let expected = count_molecule_markers(cursor.remaining());
        debug!("Found {} molecule marker(s).", expected);
        if expected == 0 {
            return Err(Mol2Error::NoMoleculesFound);
        }
        Ok(Self {
            cursor,
            expected,
            produced: 0,
        })
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn cursor(&self) -> &LineCursor<'a> {
        &self.cursor
    }
}

impl Iterator for Mol2Parser<'_> {
    type Item = ParsedMolecule;

    fn next(&mut self) -> Option<Self::Item> {
        if self.produced >= self.expected {
            return None;
        }
        self.produced += 1;
        Some(parse_next(&mut self.cursor))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.expected - self.produced;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Mol2Parser<'_> {}

/// Parses every molecule record of a MOL2 buffer.
pub fn parse_all(text: &str) -> Result<Vec<ParsedMolecule>, Mol2Error> {
    Ok(Mol2Parser::new(text)?.collect())
}

pub struct Mol2File;

impl MoleculeSource for Mol2File {
    type Error = Mol2Error;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ParsedMolecule>, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        parse_all(&text)
    }
}
