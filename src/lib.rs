#![forbid(unsafe_code)]
//! persistgen: managed-entity boilerplate generator
//!
//! From per-field `persisted` and per-class `managed` annotations, persistgen derives typed accessors,
//! optional audit and soft-delete bookkeeping, and the three lifecycle mappers (insert, update, delete)
//! that copy selected properties from a working entity onto an authority entity.
//!
//! This crate provides the engine (frontend model, resolvers, IR, emitter, generation pass) and the
//! `persistgen` CLI host. The `#[managed]` proc-macro host lives in `persistgen_derive`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Host input**: names and types handed in by hosts are parsed with `syn`; invalid input is an error for
//!   that class, never a panic.

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod version;

pub use frontend::diagnostics;
pub use frontend::model;

pub use backend::{ArtifactWriter, GenerationPass, GeneratorConfig, PassOutput};
