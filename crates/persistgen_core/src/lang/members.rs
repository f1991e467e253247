//! Generated member vocabulary: the identifier property and the audit/soft-delete state.
//!
//! The property names here are the names the naming policy would produce; the Rust renderer
//! snake-cases them like any other property.

use super::registry::{LangItemInfo, info, lookup};

/// Stable identifier for members the generator injects on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratedMemberId {
    Id,
    CreatedDate,
    CreatedBy,
    ModifiedLastDate,
    ModifiedLastBy,
    IsDeleted,
    DeletedDate,
    DeletedBy,
}

/// Feature group a generated member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberGroup {
    /// Always present.
    Identity,
    Audit,
    SoftDelete,
}

pub type GeneratedMemberInfo = LangItemInfo<GeneratedMemberId>;

pub const GENERATED_MEMBERS: &[GeneratedMemberInfo] = &[
    info(GeneratedMemberId::Id, "Id", &[], "Identifier, defaulted to a fresh UUID."),
    info(GeneratedMemberId::CreatedDate, "CreatedDate", &[], "Time the authority entity was inserted."),
    info(GeneratedMemberId::CreatedBy, "CreatedBy", &[], "Actor that inserted the entity."),
    info(
        GeneratedMemberId::ModifiedLastDate,
        "ModifiedLastDate",
        &[],
        "Time of the last update, absent until updated.",
    ),
    info(
        GeneratedMemberId::ModifiedLastBy,
        "ModifiedLastBy",
        &[],
        "Actor of the last update, absent until updated.",
    ),
    info(GeneratedMemberId::IsDeleted, "IsDeleted", &[], "Soft-delete flag."),
    info(GeneratedMemberId::DeletedDate, "DeletedDate", &[], "Time of the soft delete."),
    info(GeneratedMemberId::DeletedBy, "DeletedBy", &[], "Actor of the soft delete."),
];

/// Audit members in declaration order.
pub const AUDIT_MEMBERS: [GeneratedMemberId; 4] = [
    GeneratedMemberId::CreatedDate,
    GeneratedMemberId::CreatedBy,
    GeneratedMemberId::ModifiedLastDate,
    GeneratedMemberId::ModifiedLastBy,
];

/// Soft-delete members in declaration order.
pub const SOFT_DELETE_MEMBERS: [GeneratedMemberId; 3] = [
    GeneratedMemberId::IsDeleted,
    GeneratedMemberId::DeletedDate,
    GeneratedMemberId::DeletedBy,
];

pub fn from_str(name: &str) -> Option<GeneratedMemberId> {
    lookup(GENERATED_MEMBERS, name)
}

pub fn as_str(id: GeneratedMemberId) -> &'static str {
    match id {
        GeneratedMemberId::Id => "Id",
        GeneratedMemberId::CreatedDate => "CreatedDate",
        GeneratedMemberId::CreatedBy => "CreatedBy",
        GeneratedMemberId::ModifiedLastDate => "ModifiedLastDate",
        GeneratedMemberId::ModifiedLastBy => "ModifiedLastBy",
        GeneratedMemberId::IsDeleted => "IsDeleted",
        GeneratedMemberId::DeletedDate => "DeletedDate",
        GeneratedMemberId::DeletedBy => "DeletedBy",
    }
}

pub fn group(id: GeneratedMemberId) -> MemberGroup {
    match id {
        GeneratedMemberId::Id => MemberGroup::Identity,
        GeneratedMemberId::CreatedDate
        | GeneratedMemberId::CreatedBy
        | GeneratedMemberId::ModifiedLastDate
        | GeneratedMemberId::ModifiedLastBy => MemberGroup::Audit,
        GeneratedMemberId::IsDeleted | GeneratedMemberId::DeletedDate | GeneratedMemberId::DeletedBy => {
            MemberGroup::SoftDelete
        }
    }
}
