//! # Core Module
//!
//! The stateless foundation of MolViz: value models, MOL2 input, element
//! identity and color assignment, and the pure geometry that orients bond
//! cylinders.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, colors and molecules
//! - **File Input** ([`io`]) - Segmenting MOL2 text into raw atom and bond records
//! - **Element Colors** ([`colors`]) - Deduplicated element-to-color registries and palettes
//! - **Utilities** ([`utils`]) - Element symbol normalization and bond geometry
//!
//! Nothing in this module performs rendering or holds process-wide state.

pub mod colors;
pub mod io;
pub mod models;
pub mod utils;
