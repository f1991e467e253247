//! IR declaration definitions

use persistgen_core::lang::lifecycle::{self, LifecycleActionId};
use persistgen_core::lang::members::{self, GeneratedMemberId};

use super::stmt::MapperStmt;
use super::types::IrType;
use crate::frontend::model::DeclaredVisibility;

/// Visibility of the generated struct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Private,
    #[default]
    Public,
    /// `pub(crate)`
    Crate,
}

impl From<DeclaredVisibility> for Visibility {
    fn from(v: DeclaredVisibility) -> Self {
        match v {
            DeclaredVisibility::Private => Visibility::Private,
            DeclaredVisibility::Public => Visibility::Public,
            DeclaredVisibility::Crate => Visibility::Crate,
        }
    }
}

/// A declared field of the host struct, re-declared privately in the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackingField {
    pub name: String,
    pub ty: IrType,
    /// Outer attributes of the host field, as source text.
    pub attributes: Vec<String>,
}

impl BackingField {
    pub fn new(name: impl Into<String>, ty: IrType) -> Self {
        Self {
            name: name.into(),
            ty,
            attributes: Vec::new(),
        }
    }
}

/// Initial value of unbacked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// A freshly generated identifier.
    NewId,
    /// The type's `Default`.
    TypeDefault,
    /// `None`
    Absent,
    Bool(bool),
}

/// How a property stores its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// Pass-through accessor over a backing field.
    Backed { field: String },
    /// Self-contained state with no backing field.
    State { default: DefaultValue },
}

/// A generated property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMember {
    /// Property name as produced by the naming policy (`IdRegistration`).
    pub name: String,
    pub ty: IrType,
    pub kind: PropertyKind,
}

impl PropertyMember {
    pub fn backed(name: impl Into<String>, ty: IrType, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            kind: PropertyKind::Backed { field: field.into() },
        }
    }

    pub fn state(name: impl Into<String>, ty: IrType, default: DefaultValue) -> Self {
        Self {
            name: name.into(),
            ty,
            kind: PropertyKind::State { default },
        }
    }

    /// A generator-owned member (`Id`, audit, soft delete) with its fixed type and default.
    pub fn generated(id: GeneratedMemberId) -> Self {
        let (ty, default) = match id {
            GeneratedMemberId::Id => (IrType::Uuid, DefaultValue::NewId),
            GeneratedMemberId::CreatedDate => (IrType::DateTime, DefaultValue::TypeDefault),
            GeneratedMemberId::CreatedBy => (IrType::String, DefaultValue::TypeDefault),
            GeneratedMemberId::ModifiedLastDate | GeneratedMemberId::DeletedDate => {
                (IrType::nullable(IrType::DateTime), DefaultValue::Absent)
            }
            GeneratedMemberId::ModifiedLastBy | GeneratedMemberId::DeletedBy => {
                (IrType::nullable(IrType::String), DefaultValue::Absent)
            }
            GeneratedMemberId::IsDeleted => (IrType::Bool, DefaultValue::Bool(false)),
        };
        Self::state(members::as_str(id), ty, default)
    }

    pub fn is_backed(&self) -> bool {
        matches!(self.kind, PropertyKind::Backed { .. })
    }
}

/// A lifecycle mapper: copies selected properties from the working instance onto the authority instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperFunction {
    pub action: LifecycleActionId,
    /// `MapToAuthorityInsert` etc.
    pub name: String,
    pub body: Vec<MapperStmt>,
}

impl MapperFunction {
    pub fn new(action: LifecycleActionId) -> Self {
        Self {
            action,
            name: lifecycle::mapper_name(action),
            body: Vec::new(),
        }
    }
}
