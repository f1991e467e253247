//! IR statement definitions
//!
//! Mapper bodies are flat lists of assignments onto the authority instance. There is no control flow.

/// How a property is read and written in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAccess {
    /// Through the generated getter/setter pair.
    Accessor,
    /// Directly through the public state field.
    Field,
}

/// A property on either instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRef {
    pub name: String,
    pub access: PropertyAccess,
}

impl PropertyRef {
    pub fn accessor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: PropertyAccess::Accessor,
        }
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: PropertyAccess::Field,
        }
    }
}

/// A literal written by a stamping statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampValue {
    /// The runtime's current UTC time.
    CurrentUtcTime,
    Bool(bool),
}

/// One statement of a mapper body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapperStmt {
    /// `authority.<P> = working.<P>`
    Copy(PropertyRef),
    /// `authority.<P> = <literal>`
    Stamp { target: PropertyRef, value: StampValue },
}

impl MapperStmt {
    /// The authority property this statement writes.
    pub fn target(&self) -> &PropertyRef {
        match self {
            MapperStmt::Copy(target) | MapperStmt::Stamp { target, .. } => target,
        }
    }
}
