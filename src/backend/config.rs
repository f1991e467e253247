//! Generator configuration
//!
//! Settings that shape a generation pass. Hosts build one with the builder methods; the core reads no
//! environment variables and no on-disk state.

use persistgen_core::lang::conventions::{ARTIFACT_FILE_SUFFIX, DEFAULT_RUNTIME_PATH};

/// Generation pass configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path generated code uses to reach the runtime support crate
    pub runtime_path: String,
    /// Whether a class not declared at namespace scope fails instead of being skipped with a warning
    pub strict_structure: bool,
    /// Whether rendered text starts with the version header line
    pub emit_header: bool,
    /// Suffix of per-class artifact file stems
    pub file_suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            strict_structure: false,
            emit_header: true,
            file_suffix: ARTIFACT_FILE_SUFFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime path (e.g. `crate::runtime`)
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Set structural strictness
    pub fn with_strict_structure(mut self, strict: bool) -> Self {
        self.strict_structure = strict;
        self
    }

    /// Set whether to emit the header line
    pub fn with_header(mut self, emit: bool) -> Self {
        self.emit_header = emit;
        self
    }

    /// Set the artifact file suffix
    pub fn with_file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }
}
