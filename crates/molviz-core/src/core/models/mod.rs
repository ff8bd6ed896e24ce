//! # Core Models Module
//!
//! Value types describing a molecule as it is handed to a rendering host.
//!
//! - [`atom`] - Atoms with their element symbol, position, color and radius
//! - [`topology`] - Bonds between atoms, with the cylinder pose that draws them
//! - [`color`] - Opaque RGBA display colors
//! - [`molecule`] - The complete molecule: atoms, bonds and element colors
//!
//! No model holds a pointer to another; bonds reference atoms by their
//! file-assigned id.

pub mod atom;
pub mod color;
pub mod molecule;
pub mod topology;
