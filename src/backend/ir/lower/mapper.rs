//! Authority mapper synthesis.
//!
//! Each lifecycle action gets one mapper. Field copies come first, in declaration order; the feature
//! augmenter appends its stamping statements afterwards.

use persistgen_core::lang::lifecycle::LifecycleActionId;

use super::super::decl::MapperFunction;
use super::super::descriptor::FieldDescriptor;
use super::super::stmt::{MapperStmt, PropertyRef};

/// A field that survived the naming policy.
#[derive(Debug, Clone, Copy)]
pub struct NamedField<'a> {
    pub field: &'a FieldDescriptor,
    pub property: &'a str,
}

/// The three mappers of one class, built up statement by statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperSet {
    functions: [MapperFunction; 3],
}

impl Default for MapperSet {
    fn default() -> Self {
        Self::new()
    }
}

impl MapperSet {
    pub fn new() -> Self {
        Self {
            functions: LifecycleActionId::ALL.map(MapperFunction::new),
        }
    }

    fn slot(action: LifecycleActionId) -> usize {
        match action {
            LifecycleActionId::Insert => 0,
            LifecycleActionId::Update => 1,
            LifecycleActionId::Delete => 2,
        }
    }

    pub fn push(&mut self, action: LifecycleActionId, stmt: MapperStmt) {
        self.functions[Self::slot(action)].body.push(stmt);
    }

    pub fn get(&self, action: LifecycleActionId) -> &MapperFunction {
        &self.functions[Self::slot(action)]
    }

    /// Mappers in Insert, Update, Delete order.
    pub fn into_functions(self) -> Vec<MapperFunction> {
        self.functions.into()
    }
}

/// Append one copy statement per action for every field whose flag for that action is set.
pub fn synthesize_field_copies(fields: &[NamedField<'_>], mappers: &mut MapperSet) {
    for action in LifecycleActionId::ALL {
        for named in fields.iter().filter(|n| n.field.copies_on(action)) {
            tracing::debug!(field = %named.field.source_name, ?action, "copy");
            mappers.push(action, MapperStmt::Copy(PropertyRef::accessor(named.property)));
        }
    }
}
