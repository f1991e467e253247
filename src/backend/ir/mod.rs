//! Managed-entity Intermediate Representation (IR)
//!
//! This module defines the IR that sits between resolved descriptors and Rust text. The IR is:
//!
//! - **Declarative**: members and mapper statements, no syntax
//! - **Ordered**: fields, members and statements keep declaration order, so rendering is deterministic
//! - **Host-neutral**: built from raw host data, never from syntax trees
//!
//! ## Pipeline
//!
//! ```text
//! RawClass → resolvers → ClassDescriptor → naming/mapper/augment → ClassArtifact → ArtifactEmitter → text
//! ```

pub mod codegen;
pub mod decl;
pub mod descriptor;
pub mod emit;
pub mod lower;
pub mod stmt;
pub mod types;

pub use codegen::{ClassFailure, ClassReport, GeneratedUnit, GenerationError, GenerationPass, PassOutput};
pub use decl::{BackingField, DefaultValue, MapperFunction, PropertyKind, PropertyMember, Visibility};
pub use descriptor::{ClassDescriptor, FieldDescriptor, PersistenceDirective, TypeRef};
pub use emit::{ArtifactEmitter, EmitError};
pub use lower::{ConfigurationError, Lowered};
pub use stmt::{MapperStmt, PropertyAccess, PropertyRef, StampValue};
pub use types::IrType;

use std::fmt;

use persistgen_core::lang::lifecycle::LifecycleActionId;

/// Identity of a class: the key of its generated unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassIdentity {
    pub namespace: String,
    pub class_name: String,
}

impl ClassIdentity {
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
        }
    }
}

impl fmt::Display for ClassIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.namespace, self.class_name)
    }
}

/// Everything generated for one class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassArtifact {
    pub identity: ClassIdentity,
    pub visibility: Visibility,
    /// Derive paths carried over from the host struct.
    pub derives: Vec<String>,
    /// Outer attributes carried over from the host struct, as source text.
    pub attributes: Vec<String>,
    /// The always-present `Id` property.
    pub id: PropertyMember,
    /// Every declared field, in declaration order, including fields without a property.
    pub backing_fields: Vec<BackingField>,
    /// Persisted properties followed by audit and soft-delete members.
    pub properties: Vec<PropertyMember>,
    /// Insert, Update and Delete mappers in that order.
    pub mappers: Vec<MapperFunction>,
}

impl ClassArtifact {
    /// Look up a property (including `Id`) by name.
    pub fn property(&self, name: &str) -> Option<&PropertyMember> {
        std::iter::once(&self.id)
            .chain(&self.properties)
            .find(|p| p.name == name)
    }

    /// The backing field named `name`.
    pub fn backing_field(&self, name: &str) -> Option<&BackingField> {
        self.backing_fields.iter().find(|f| f.name == name)
    }

    /// The mapper for `action`. Lowering always produces all three.
    pub fn mapper(&self, action: LifecycleActionId) -> Option<&MapperFunction> {
        self.mappers.iter().find(|m| m.action == action)
    }
}
