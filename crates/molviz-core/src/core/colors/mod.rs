//! Element color assignment.
//!
//! A [`registry::ColorRegistry`] maps each element symbol of a molecule to a
//! display color, either drawn at random on first sight or copied from another
//! registry (an earlier molecule, or a palette file loaded through
//! [`palette`]).

pub mod palette;
pub mod registry;
