//! # Engine Module
//!
//! The stateful layer that turns raw MOL2 records into renderable molecules.
//!
//! - **Configuration** ([`config`]) - Color sharing, display radii and naming
//! - **Molecule Building** ([`builder`]) - Element normalization, color assignment and bond resolution
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for hosts
//! - **Error Handling** ([`error`]) - Per-molecule and per-import error types
//!
//! Molecules are built strictly one after another: with shared colors enabled,
//! each molecule reads the color registries of those built before it.

pub mod builder;
pub mod config;
pub mod error;
pub mod progress;
