//! IR type definitions
//!
//! Types of generated members. Declared field types stay as source text; the generator never interprets them.

use std::fmt;

use super::descriptor::TypeRef;

/// Type of a generated member or backing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrType {
    /// Identifier type from the runtime (`Uuid`).
    Uuid,
    /// UTC timestamp from the runtime (`DateTime<Utc>`).
    DateTime,
    Bool,
    String,
    /// Absent until set (`Option<T>`).
    Nullable(Box<IrType>),
    /// A type declared on the host struct, carried verbatim.
    Declared(TypeRef),
}

impl IrType {
    pub fn nullable(inner: IrType) -> Self {
        IrType::Nullable(Box::new(inner))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, IrType::Nullable(_))
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrType::Uuid => write!(f, "Uuid"),
            IrType::DateTime => write!(f, "DateTime<Utc>"),
            IrType::Bool => write!(f, "bool"),
            IrType::String => write!(f, "String"),
            IrType::Nullable(inner) => write!(f, "Option<{}>", inner),
            IrType::Declared(ty) => write!(f, "{}", ty),
        }
    }
}
