//! Error types for descriptor resolution.
//!
//! A [`ConfigurationError`] aborts generation for the class that contains the offending annotation and
//! nothing else: sibling classes in the same pass are still generated.

use miette::Diagnostic;
use thiserror::Error;

/// An annotation that must appear exactly once did not.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigurationError {
    #[error("ambiguous or missing persistence annotation on field '{field}' of '{class}' (found {found})")]
    #[diagnostic(
        code(persistgen::configuration::field_annotation),
        help("every field of a managed type carries exactly one `persisted` annotation")
    )]
    FieldAnnotation { class: String, field: String, found: usize },

    #[error("'{class}' carries {found} `managed` annotations")]
    #[diagnostic(
        code(persistgen::configuration::class_annotation),
        help("keep a single `managed` annotation and merge its arguments")
    )]
    ClassAnnotation { class: String, found: usize },
}

impl ConfigurationError {
    /// Field the error points at, if it is field-level.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigurationError::FieldAnnotation { field, .. } => Some(field),
            ConfigurationError::ClassAnnotation { .. } => None,
        }
    }
}
