//! # Workflows Module
//!
//! High-level entry points that tie the `core` and `engine` layers together.
//!
//! - **Import Workflow** ([`import`]) - Reads MOL2 text holding one or more
//!   molecules and builds each of them, collecting per-molecule failures
//!   instead of failing the whole file.

pub mod import;
