//! Feature augmenter: audit and soft-delete bookkeeping.
//!
//! Appends generator-owned state members after the persisted properties and appends stamping statements
//! after the field copies of each mapper. Audit and soft delete are independent toggles.

use persistgen_core::lang::lifecycle::LifecycleActionId;
use persistgen_core::lang::members::{self, AUDIT_MEMBERS, GeneratedMemberId, SOFT_DELETE_MEMBERS};

use super::super::decl::PropertyMember;
use super::super::descriptor::ClassDescriptor;
use super::super::stmt::{MapperStmt, PropertyRef, StampValue};
use super::mapper::MapperSet;

pub fn augment(class: &ClassDescriptor, properties: &mut Vec<PropertyMember>, mappers: &mut MapperSet) {
    if class.enable_audit {
        augment_audit(properties, mappers);
    }
    if class.enable_soft_delete {
        augment_soft_delete(properties, mappers);
    }
}

fn member(id: GeneratedMemberId) -> PropertyRef {
    PropertyRef::field(members::as_str(id))
}

fn stamp_now(id: GeneratedMemberId) -> MapperStmt {
    MapperStmt::Stamp {
        target: member(id),
        value: StampValue::CurrentUtcTime,
    }
}

fn copy(id: GeneratedMemberId) -> MapperStmt {
    MapperStmt::Copy(member(id))
}

fn augment_audit(properties: &mut Vec<PropertyMember>, mappers: &mut MapperSet) {
    properties.extend(AUDIT_MEMBERS.map(PropertyMember::generated));

    mappers.push(LifecycleActionId::Insert, stamp_now(GeneratedMemberId::CreatedDate));
    mappers.push(LifecycleActionId::Insert, copy(GeneratedMemberId::CreatedBy));
    mappers.push(LifecycleActionId::Update, stamp_now(GeneratedMemberId::ModifiedLastDate));
    mappers.push(LifecycleActionId::Update, copy(GeneratedMemberId::ModifiedLastBy));
}

fn augment_soft_delete(properties: &mut Vec<PropertyMember>, mappers: &mut MapperSet) {
    properties.extend(SOFT_DELETE_MEMBERS.map(PropertyMember::generated));

    mappers.push(
        LifecycleActionId::Delete,
        MapperStmt::Stamp {
            target: member(GeneratedMemberId::IsDeleted),
            value: StampValue::Bool(true),
        },
    );
    mappers.push(LifecycleActionId::Delete, stamp_now(GeneratedMemberId::DeletedDate));
    mappers.push(LifecycleActionId::Delete, copy(GeneratedMemberId::DeletedBy));
}
