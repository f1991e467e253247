//! Property naming policy.
//!
//! Maps a field descriptor to the public property name, or rejects the field. Rejected fields keep their
//! backing field but get no accessors and never appear in a mapper.

use persistgen_core::lang::conventions::FIELD_PREFIX;
use persistgen_core::strings::{uppercase_all, uppercase_first};

use super::super::descriptor::FieldDescriptor;

/// Result of the naming policy for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyName {
    Accepted(String),
    Rejected(NamingRejection),
}

/// Why a field has no property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingRejection {
    /// Nothing remains after stripping the prefix (`_`).
    Empty,
    /// The computed name equals the field name (`Name`).
    SameAsField,
}

impl PropertyName {
    pub fn accepted(&self) -> Option<&str> {
        match self {
            PropertyName::Accepted(name) => Some(name),
            PropertyName::Rejected(_) => None,
        }
    }
}

/// Compute the property name of a field.
///
/// An explicit override is used verbatim. Otherwise exactly one leading `_` is stripped; a single remaining
/// character is uppercased, longer names get an uppercase first character. Either way an empty result or
/// one equal to the field name is rejected.
pub fn property_name(field: &FieldDescriptor) -> PropertyName {
    match &field.property_name_override {
        Some(name) if name.is_empty() => PropertyName::Rejected(NamingRejection::Empty),
        Some(name) if *name == field.source_name => PropertyName::Rejected(NamingRejection::SameAsField),
        Some(name) => PropertyName::Accepted(name.clone()),
        None => property_name_for(&field.source_name),
    }
}

/// [`property_name`] for a bare field name.
pub fn property_name_for(source_name: &str) -> PropertyName {
    let stripped = source_name.strip_prefix(FIELD_PREFIX).unwrap_or(source_name);

    let name = match stripped.chars().count() {
        0 => return PropertyName::Rejected(NamingRejection::Empty),
        1 => uppercase_all(stripped),
        _ => uppercase_first(stripped),
    };

    if name == source_name {
        PropertyName::Rejected(NamingRejection::SameAsField)
    } else {
        PropertyName::Accepted(name)
    }
}
