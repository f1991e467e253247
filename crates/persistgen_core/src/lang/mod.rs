//! persistgen vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. [`annotations::AnnotationId`], [`lifecycle::LifecycleActionId`])
//! and look up spellings via registry tables instead of comparing raw strings.
//!
//! ## Examples
//! ```rust
//! use persistgen_core::lang::annotations::{self, AnnotationId};
//!
//! assert_eq!(annotations::from_str("persisted"), Some(AnnotationId::Persisted));
//! assert_eq!(annotations::as_str(AnnotationId::Managed), "managed");
//! ```

pub mod annotations;
pub mod conventions;
pub mod lifecycle;
pub mod members;
pub mod registry;
pub mod rust_keywords;
