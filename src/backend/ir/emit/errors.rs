//! Define error types for IR → Rust emission.
//!
//! These errors represent *rendering* failures (as opposed to configuration errors found while resolving
//! descriptors). They surface text the host handed in verbatim and that turned out not to be valid Rust.
//!
//! ## Notes
//!
//! - Messages name the offending text so the host can point at the field or type that produced it.

use thiserror::Error;

/// Error during IR emission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("syn parse error: {0}")]
    SynParse(String),

    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdent { name: String, reason: String },

    #[error("invalid type '{ty}': {reason}")]
    InvalidType { ty: String, reason: String },

    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("invalid attribute '{attr}': {reason}")]
    InvalidAttribute { attr: String, reason: String },

    #[error("unsupported: {0}")]
    Unsupported(String),
}
