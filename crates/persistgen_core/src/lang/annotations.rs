//! Annotation vocabulary: class/field annotations, their named arguments and directive values.
//!
//! Canonical spellings are the Rust attribute spellings used by the proc-macro host
//! (`#[managed(enable_audit = true)]`). PascalCase aliases are accepted from model files.

use super::registry::{LangItemInfo, info, lookup};

/// Stable identifier for recognized annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationId {
    /// Class-level annotation enabling generation toggles.
    Managed,
    /// Field-level annotation marking a persisted field.
    Persisted,
}

pub type AnnotationInfo = LangItemInfo<AnnotationId>;

pub const ANNOTATIONS: &[AnnotationInfo] = &[
    info(
        AnnotationId::Managed,
        "managed",
        &["Managed", "ManagedAttribute"],
        "Marks a type as a managed entity and toggles audit/soft-delete bookkeeping.",
    ),
    info(
        AnnotationId::Persisted,
        "persisted",
        &["Persisted", "PersistedAttribute"],
        "Marks a field as persisted and selects the lifecycle actions that copy it.",
    ),
];

pub fn from_str(name: &str) -> Option<AnnotationId> {
    lookup(ANNOTATIONS, name)
}

pub fn as_str(id: AnnotationId) -> &'static str {
    match id {
        AnnotationId::Managed => "managed",
        AnnotationId::Persisted => "persisted",
    }
}

/// Named arguments of the `managed` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagedArgId {
    EnableAudit,
    EnableSoftDelete,
}

pub type ManagedArgInfo = LangItemInfo<ManagedArgId>;

pub const MANAGED_ARGS: &[ManagedArgInfo] = &[
    info(
        ManagedArgId::EnableAudit,
        "enable_audit",
        &["EnableAudit"],
        "Inject created/modified timestamps and actors.",
    ),
    info(
        ManagedArgId::EnableSoftDelete,
        "enable_soft_delete",
        &["EnableSoftDelete"],
        "Inject the deletion flag, timestamp and actor.",
    ),
];

pub fn managed_arg_from_str(name: &str) -> Option<ManagedArgId> {
    lookup(MANAGED_ARGS, name)
}

pub fn managed_arg_as_str(id: ManagedArgId) -> &'static str {
    match id {
        ManagedArgId::EnableAudit => "enable_audit",
        ManagedArgId::EnableSoftDelete => "enable_soft_delete",
    }
}

/// Named arguments of the `persisted` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistedArgId {
    PersistedVia,
    PropertyName,
    Prefix,
    TypeOverride,
    SetOnInsert,
    SetOnUpdate,
    SetOnDelete,
    /// Sets all three per-action flags at once.
    SetAllActions,
}

pub type PersistedArgInfo = LangItemInfo<PersistedArgId>;

pub const PERSISTED_ARGS: &[PersistedArgInfo] = &[
    info(
        PersistedArgId::PersistedVia,
        "persisted_via",
        &["PersistedVia"],
        "Persistence directive (Direct, Nested, NestedCollection).",
    ),
    info(
        PersistedArgId::PropertyName,
        "property_name",
        &["PropertyName"],
        "Explicit property name, used verbatim.",
    ),
    info(PersistedArgId::Prefix, "prefix", &["Prefix"], "Reserved; carried but unused."),
    info(
        PersistedArgId::TypeOverride,
        "type_override",
        &["TypeOverride"],
        "Reserved; carried but unused.",
    ),
    info(
        PersistedArgId::SetOnInsert,
        "set_on_insert",
        &["SetOnInsert"],
        "Copy the property in the insert mapper.",
    ),
    info(
        PersistedArgId::SetOnUpdate,
        "set_on_update",
        &["SetOnUpdate"],
        "Copy the property in the update mapper.",
    ),
    info(
        PersistedArgId::SetOnDelete,
        "set_on_delete",
        &["SetOnDelete"],
        "Copy the property in the delete mapper.",
    ),
    info(
        PersistedArgId::SetAllActions,
        "set_all_actions",
        &["SetAllActions"],
        "Set the insert, update and delete flags together.",
    ),
];

pub fn persisted_arg_from_str(name: &str) -> Option<PersistedArgId> {
    lookup(PERSISTED_ARGS, name)
}

pub fn persisted_arg_as_str(id: PersistedArgId) -> &'static str {
    match id {
        PersistedArgId::PersistedVia => "persisted_via",
        PersistedArgId::PropertyName => "property_name",
        PersistedArgId::Prefix => "prefix",
        PersistedArgId::TypeOverride => "type_override",
        PersistedArgId::SetOnInsert => "set_on_insert",
        PersistedArgId::SetOnUpdate => "set_on_update",
        PersistedArgId::SetOnDelete => "set_on_delete",
        PersistedArgId::SetAllActions => "set_all_actions",
    }
}

/// Persistence directive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveId {
    Direct,
    Nested,
    NestedCollection,
}

pub type DirectiveInfo = LangItemInfo<DirectiveId>;

pub const DIRECTIVES: &[DirectiveInfo] = &[
    info(DirectiveId::Direct, "Direct", &["direct"], "Value is copied as-is."),
    info(DirectiveId::Nested, "Nested", &["nested"], "Reserved; behaves like Direct."),
    info(
        DirectiveId::NestedCollection,
        "NestedCollection",
        &["nested_collection"],
        "Reserved; behaves like Direct.",
    ),
];

pub fn directive_from_str(name: &str) -> Option<DirectiveId> {
    lookup(DIRECTIVES, name)
}

pub fn directive_as_str(id: DirectiveId) -> &'static str {
    match id {
        DirectiveId::Direct => "Direct",
        DirectiveId::Nested => "Nested",
        DirectiveId::NestedCollection => "NestedCollection",
    }
}
