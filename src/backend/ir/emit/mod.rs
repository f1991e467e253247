//! Emit Rust source code from class artifacts.
//!
//! This module defines [`ArtifactEmitter`] and wires together the focused submodules that implement
//! artifact → Rust emission. `mod.rs` only holds the emitter state.
//!
//! ## Notes
//! - Emission produces a Rust syntax tree (`syn`) and formats it via `prettyplease`.
//! - Text handed in by hosts (declared types, field names, derive paths) is parsed with `syn`, so invalid
//!   input becomes an [`EmitError`] instead of a panic.
//!
//! ## See also
//! - [`program`]: artifact-level emission and formatting
//! - [`decls`]: struct, `Default` impl, accessors and mappers
//! - [`statements`]: mapper statement emission
//! - [`types`]: type, visibility and identifier helpers

mod decls;
mod errors;
mod program;
mod statements;
mod types;

pub use errors::EmitError;

use crate::backend::config::GeneratorConfig;

/// Emit Rust source code from a [`super::ClassArtifact`].
///
/// ## Notes
/// - The public API is `emit_tokens()` / `emit_artifact()` (implemented in `program.rs`).
/// - Emission is pure: the same artifact and configuration always render to the same text.
pub struct ArtifactEmitter<'a> {
    config: &'a GeneratorConfig,
    /// Parsed `config.runtime_path`
    runtime: syn::Path,
}

impl<'a> ArtifactEmitter<'a> {
    /// Create an emitter for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidPath`] when the configured runtime path is not a Rust path.
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, EmitError> {
        let runtime = syn::parse_str::<syn::Path>(&config.runtime_path).map_err(|e| EmitError::InvalidPath {
            path: config.runtime_path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { config, runtime })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_path_must_parse() {
        let config = GeneratorConfig::new().with_runtime_path("not a path");
        assert!(matches!(ArtifactEmitter::new(&config), Err(EmitError::InvalidPath { .. })));

        let config = GeneratorConfig::new().with_runtime_path("crate::runtime");
        assert!(ArtifactEmitter::new(&config).is_ok());
    }
}
