//! # MolViz Core Library
//!
//! Imports molecules from Tripos MOL2 text and turns them into models that a
//! renderer can draw directly: colored atom spheres and bond cylinders with a
//! ready-made pose.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three layers throughout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Molecule`, `Atom`, `Bond`),
//!   the element color registry, the MOL2 reader and pure geometry helpers.
//!
//! - **[`engine`]: The Logic Core.** Build configuration, the `MoleculeBuilder` that
//!   resolves bonds and assigns colors, progress reporting and error types.
//!
//! - **[`workflows`]: The Public API.** Complete import procedures over a text buffer
//!   or a file path, collecting per-molecule failures without stopping the import.

pub mod core;
pub mod engine;
pub mod workflows;
