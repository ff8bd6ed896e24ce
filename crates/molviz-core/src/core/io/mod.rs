//! Provides input functionality for molecular file formats.
//!
//! The [`mol2`] module implements a tolerant, line-oriented reader for Tripos
//! MOL2 text holding one or more concatenated molecules. [`traits`] defines the
//! common reading interface.

pub mod mol2;
pub mod traits;
