//! Lifecycle action vocabulary.

use super::conventions::MAPPER_PREFIX;
use super::registry::{LangItemInfo, info, lookup};

/// Stable identifier for lifecycle actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LifecycleActionId {
    Insert,
    Update,
    Delete,
}

impl LifecycleActionId {
    /// All actions in mapper emission order.
    pub const ALL: [LifecycleActionId; 3] = [
        LifecycleActionId::Insert,
        LifecycleActionId::Update,
        LifecycleActionId::Delete,
    ];
}

pub type LifecycleActionInfo = LangItemInfo<LifecycleActionId>;

pub const LIFECYCLE_ACTIONS: &[LifecycleActionInfo] = &[
    info(
        LifecycleActionId::Insert,
        "Insert",
        &["insert", "create"],
        "Working entity is created in the authority store.",
    ),
    info(
        LifecycleActionId::Update,
        "Update",
        &["update"],
        "Working entity changes an existing authority entity.",
    ),
    info(
        LifecycleActionId::Delete,
        "Delete",
        &["delete"],
        "Working entity removes an authority entity.",
    ),
];

pub fn from_str(name: &str) -> Option<LifecycleActionId> {
    lookup(LIFECYCLE_ACTIONS, name)
}

pub fn as_str(id: LifecycleActionId) -> &'static str {
    match id {
        LifecycleActionId::Insert => "Insert",
        LifecycleActionId::Update => "Update",
        LifecycleActionId::Delete => "Delete",
    }
}

/// Name of the mapper function generated for an action (e.g. `MapToAuthorityInsert`).
pub fn mapper_name(id: LifecycleActionId) -> String {
    format!("{MAPPER_PREFIX}{}", as_str(id))
}
