//! Resolved descriptors: the structured view of one class and its persisted fields.
//!
//! Descriptors are produced by the resolvers in [`super::lower`] from raw host data. Every flag is settled
//! here; later stages never look at optional raw arguments again.

use std::fmt;

use persistgen_core::lang::lifecycle::LifecycleActionId;

use super::ClassIdentity;
use super::decl::Visibility;
use crate::frontend::model::PersistedVia;

/// Declared type of a field as source text (e.g. `Option<u32>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persistence strategy declared for a field.
///
/// Only `Direct` influences synthesis; the other two are carried for hosts and have no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersistenceDirective {
    #[default]
    Direct,
    Nested,
    NestedCollection,
}

impl From<PersistedVia> for PersistenceDirective {
    fn from(via: PersistedVia) -> Self {
        match via {
            PersistedVia::Direct => PersistenceDirective::Direct,
            PersistedVia::Nested => PersistenceDirective::Nested,
            PersistedVia::NestedCollection => PersistenceDirective::NestedCollection,
        }
    }
}

/// One persisted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared (`_idRegistration`).
    pub source_name: String,
    pub declared_type: TypeRef,
    pub directive: PersistenceDirective,
    pub property_name_override: Option<String>,
    /// Carried, not used by synthesis.
    pub prefix: Option<String>,
    /// Carried, not used by synthesis.
    pub type_override: Option<TypeRef>,
    pub set_on_insert: bool,
    pub set_on_update: bool,
    pub set_on_delete: bool,
    /// Outer attributes of the host field, passed through to the backing field.
    pub attributes: Vec<String>,
}

impl FieldDescriptor {
    /// A `Direct` field with every flag off.
    pub fn new(source_name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            source_name: source_name.into(),
            declared_type,
            directive: PersistenceDirective::Direct,
            property_name_override: None,
            prefix: None,
            type_override: None,
            set_on_insert: false,
            set_on_update: false,
            set_on_delete: false,
            attributes: Vec::new(),
        }
    }

    /// Whether the mapper for `action` copies this field. Flags are independent.
    pub fn copies_on(&self, action: LifecycleActionId) -> bool {
        match action {
            LifecycleActionId::Insert => self.set_on_insert,
            LifecycleActionId::Update => self.set_on_update,
            LifecycleActionId::Delete => self.set_on_delete,
        }
    }
}

/// One managed class with its persisted fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub identity: ClassIdentity,
    pub visibility: Visibility,
    /// Derive paths of the host struct, in source order.
    pub derives: Vec<String>,
    /// Pass-through outer attributes of the host struct.
    pub attributes: Vec<String>,
    pub enable_audit: bool,
    pub enable_soft_delete: bool,
    pub fields: Vec<FieldDescriptor>,
}
