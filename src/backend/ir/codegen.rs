//! Generation pass
//!
//! This module provides [`GenerationPass`], the entrypoint that drives every class a host supplies through
//! the pipeline:
//!
//! ```text
//! RawClass → lower_class → ClassArtifact → ArtifactEmitter (quote!) → prettyplease → text
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use persistgen::backend::{GenerationPass, GeneratorConfig};
//!
//! let pass = GenerationPass::new(GeneratorConfig::default());
//! let output = pass.run(&model.classes);
//! for unit in &output.units {
//!     println!("{}", unit.text);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Errors are local to one class. A failing class is recorded in [`PassOutput::failures`] (plus an error
//! diagnostic) and never blocks its siblings; the units of all other classes are still produced, in input
//! order.

use miette::Diagnostic as _;
use proc_macro2::TokenStream;
use thiserror::Error;

use super::emit::{ArtifactEmitter, EmitError};
use super::lower::{self, ConfigurationError, Lowered};
use super::{ClassArtifact, ClassIdentity};
use crate::backend::config::GeneratorConfig;
use crate::frontend::diagnostics::{Diagnostic, catalog};
use crate::frontend::model::RawClass;

/// Error during generation of one class.
///
/// ## Examples
///
/// ```rust,ignore
/// use persistgen::backend::GenerationError;
///
/// match error {
///     GenerationError::Configuration(e) => eprintln!("annotation problem: {e}"),
///     GenerationError::Structural { class, .. } => eprintln!("{class} skipped"),
///     GenerationError::Emission { source, .. } => eprintln!("render failed: {source}"),
/// }
/// ```
#[derive(Debug, Error, miette::Diagnostic)]
pub enum GenerationError {
    /// Annotation counts were wrong
    #[error(transparent)]
    #[diagnostic(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Class not at namespace scope, with strict structure enabled
    #[error("'{class}' is declared inside '{parent}', not at namespace scope")]
    #[diagnostic(code(persistgen::structure), help("move the type to the top level of its module"))]
    Structural { class: String, parent: String },

    /// Rendering failed
    #[error("cannot render '{class}': {source}")]
    #[diagnostic(
        code(persistgen::emission),
        help("check the declared types and field names of the class")
    )]
    Emission {
        class: String,
        #[source]
        source: EmitError,
    },
}

/// One generated unit: the class identity and its rendered artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub identity: ClassIdentity,
    pub text: String,
}

/// A class that produced no unit because of an error.
#[derive(Debug)]
pub struct ClassFailure {
    pub identity: ClassIdentity,
    pub error: GenerationError,
}

/// Result of processing one class.
///
/// `outcome` is `Ok(None)` when the class was skipped without failing (structural rejection in the
/// default, non-strict mode).
#[derive(Debug)]
pub struct ClassReport<T> {
    pub identity: ClassIdentity,
    pub outcome: Result<Option<T>, GenerationError>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Everything a pass produced.
#[derive(Debug, Default)]
pub struct PassOutput {
    /// Units in input order.
    pub units: Vec<GeneratedUnit>,
    pub failures: Vec<ClassFailure>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PassOutput {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The unit generated for `class_name`, if any.
    pub fn unit(&self, class_name: &str) -> Option<&GeneratedUnit> {
        self.units.iter().find(|u| u.identity.class_name == class_name)
    }

    fn absorb(&mut self, report: ClassReport<String>) {
        self.diagnostics.extend(report.diagnostics);
        match report.outcome {
            Ok(Some(text)) => self.units.push(GeneratedUnit {
                identity: report.identity,
                text,
            }),
            Ok(None) => {}
            Err(error) => self.failures.push(ClassFailure {
                identity: report.identity,
                error,
            }),
        }
    }
}

/// Drives classes through lowering and emission.
#[derive(Debug, Clone, Default)]
pub struct GenerationPass {
    config: GeneratorConfig,
}

impl GenerationPass {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate every class. Each class is regenerated from scratch; nothing is carried between classes.
    #[tracing::instrument(skip_all, fields(class_count = classes.len()))]
    pub fn run(&self, classes: &[RawClass]) -> PassOutput {
        let mut output = PassOutput::default();
        for raw in classes {
            output.absorb(self.generate_class(raw));
        }
        tracing::info!(
            units = output.units.len(),
            failures = output.failures.len(),
            diagnostics = output.diagnostics.len(),
            "generation pass finished"
        );
        output
    }

    /// Generate one class as formatted text.
    pub fn generate_class(&self, raw: &RawClass) -> ClassReport<String> {
        self.process(raw, |emitter, artifact| emitter.emit_artifact(artifact))
    }

    /// Generate one class as tokens, for hosts that splice code back into a compilation.
    pub fn expand_class(&self, raw: &RawClass) -> ClassReport<TokenStream> {
        self.process(raw, |emitter, artifact| emitter.emit_tokens(artifact))
    }

    #[tracing::instrument(skip_all, fields(namespace = %raw.namespace, class = %raw.name))]
    fn process<T>(
        &self,
        raw: &RawClass,
        render: impl FnOnce(&ArtifactEmitter<'_>, &ClassArtifact) -> Result<T, EmitError>,
    ) -> ClassReport<T> {
        let identity = ClassIdentity::new(&raw.namespace, &raw.name);
        let label = identity.to_string();

        let lowering = match lower::lower_class(raw) {
            Ok(lowering) => lowering,
            Err(e) => {
                tracing::warn!(error = %e, "configuration error");
                return failed(identity, e.into(), Vec::new());
            }
        };
        let mut diagnostics = lowering.diagnostics;

        let artifact = match lowering.outcome {
            Lowered::Artifact(artifact) => artifact,
            Lowered::StructuralRejected { parent } => {
                let strict = self.config.strict_structure;
                tracing::warn!(%parent, strict, "managed type is not declared at namespace scope");
                diagnostics.push(catalog::structural_rejected(&label, &parent, strict));
                let outcome = if strict {
                    Err(GenerationError::Structural { class: label, parent })
                } else {
                    Ok(None)
                };
                return ClassReport {
                    identity,
                    outcome,
                    diagnostics,
                };
            }
        };

        let rendered = ArtifactEmitter::new(&self.config).and_then(|emitter| render(&emitter, &artifact));
        match rendered {
            Ok(rendered) => ClassReport {
                identity,
                outcome: Ok(Some(rendered)),
                diagnostics,
            },
            Err(source) => {
                tracing::warn!(error = %source, "emission failed");
                failed(identity, GenerationError::Emission { class: label, source }, diagnostics)
            }
        }
    }
}

fn failed<T>(identity: ClassIdentity, error: GenerationError, mut diagnostics: Vec<Diagnostic>) -> ClassReport<T> {
    diagnostics.push(failure_diagnostic(&identity, &error));
    ClassReport {
        identity,
        outcome: Err(error),
        diagnostics,
    }
}

/// Error diagnostic mirroring a class failure, so hosts can print one uniform list.
pub fn failure_diagnostic(identity: &ClassIdentity, error: &GenerationError) -> Diagnostic {
    let mut diagnostic = Diagnostic::error(identity.to_string(), error.to_string());
    if let GenerationError::Configuration(e) = error {
        if let Some(field) = e.field() {
            diagnostic = diagnostic.with_field(field);
        }
    }
    if let Some(code) = error.code() {
        diagnostic = diagnostic.with_note(format!("code: {code}"));
    }
    if let Some(help) = error.help() {
        diagnostic = diagnostic.with_hint(help.to_string());
    }
    diagnostic
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::frontend::diagnostics::Severity;
    use crate::frontend::model::{DeclarationScope, PersistedArgs, RawField};

    fn entity(name: &str) -> RawClass {
        RawClass::new("Demo", name).with_field(RawField::persisted("_name", "String", PersistedArgs::new().on_insert()))
    }

    #[test]
    fn test_units_in_input_order() {
        let output = GenerationPass::default().run(&[entity("B"), entity("A")]);
        let names: Vec<&str> = output.units.iter().map(|u| u.identity.class_name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert!(!output.has_failures());
    }

    #[test]
    fn test_failure_does_not_block_siblings() {
        let broken = entity("Broken").with_field(RawField::new("_loose", "u8"));
        let output = GenerationPass::default().run(&[entity("A"), broken, entity("C")]);

        assert_eq!(output.units.len(), 2);
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].identity.class_name, "Broken");
        assert!(matches!(output.failures[0].error, GenerationError::Configuration(_)));

        let error = output.diagnostics.iter().find(|d| d.is_error()).unwrap();
        assert_eq!(error.field.as_deref(), Some("_loose"));
        assert!(error.notes.iter().any(|n| n.contains("persistgen::configuration::field_annotation")));
    }

    #[test]
    fn test_structural_rejection_default_is_warning() {
        let nested = entity("Inner").with_scope(DeclarationScope::Nested { parent: "Outer".into() });
        let output = GenerationPass::default().run(&[nested]);
        assert!(output.units.is_empty());
        assert!(!output.has_failures());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn test_structural_rejection_strict_is_failure() {
        let nested = entity("Inner").with_scope(DeclarationScope::Nested { parent: "Outer".into() });
        let pass = GenerationPass::new(GeneratorConfig::new().with_strict_structure(true));
        let output = pass.run(&[nested]);
        assert!(output.units.is_empty());
        assert!(matches!(output.failures[0].error, GenerationError::Structural { .. }));
        assert_eq!(output.diagnostics.len(), 1);
        assert!(output.diagnostics[0].is_error());
    }

    #[test]
    fn test_invalid_type_is_emission_failure() {
        let raw = RawClass::new("Demo", "Bad").with_field(RawField::persisted("_x", "Vec<", PersistedArgs::new()));
        let output = GenerationPass::default().run(&[raw]);
        assert!(matches!(output.failures[0].error, GenerationError::Emission { .. }));
    }

    #[test]
    fn test_expand_class_yields_tokens() {
        let report = GenerationPass::default().expand_class(&entity("A"));
        let tokens = report.outcome.unwrap().unwrap();
        assert!(tokens.to_string().contains("map_to_authority_insert"));
    }
}
