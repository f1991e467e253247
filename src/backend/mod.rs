//! persistgen backend
//!
//! This module turns raw host classes into generated Rust.
//!
//! The pipeline is:
//! 1. Raw classes from a host → `ir::lower` → `ClassArtifact`
//! 2. `ClassArtifact` → `ir::emit` → formatted text (or tokens for the proc-macro host)
//! 3. Optionally, `output` writes units to disk (CLI host only)
//!
//! ## Module Organization
//!
//! - `ir/` - descriptors, IR, lowering, emission and the generation pass
//! - `config.rs` - `GeneratorConfig`
//! - `output.rs` - artifact file layout and writing

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod ir;
pub mod output;

pub use config::GeneratorConfig;
pub use ir::{ClassIdentity, GeneratedUnit, GenerationError, GenerationPass, PassOutput};
pub use output::{ArtifactWriter, OutputError};
