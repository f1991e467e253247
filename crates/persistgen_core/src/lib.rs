//! Provide shared, pure vocabulary and string helpers for the persistgen generator and its hosts.
//!
//! Both the generator (`persistgen`) and the proc-macro host (`persistgen_derive`) need to agree on the
//! spelling of annotations, named arguments, lifecycle actions and generated member names. Keeping those
//! tables here avoids stringly-typed comparisons drifting apart between crates.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, no dependencies.
//! - Generated-code identifiers are derived from the same helpers on both sides of the pipeline, see
//!   [`strings::to_snake_case`].

pub mod lang;
pub mod strings;
