//! Raw host model to IR lowering.
//!
//! Lowering runs the per-class pipeline up to, but not including, rendering:
//!
//! 1. Resolve field descriptors (`resolve`)
//! 2. Resolve the class descriptor and enforce namespace scope (`resolve`)
//! 3. Name properties (`naming`)
//! 4. Copy flagged fields into the three mappers (`mapper`)
//! 5. Add audit/soft-delete members and stamping (`augment`)
//!
//! The result is a [`ClassArtifact`] ready for the emitter. Classes are lowered independently.
//!
//! # Usage
//!
//! ```rust,ignore
//! use persistgen::backend::ir::lower::{self, Lowered};
//!
//! let lowering = lower::lower_class(&raw_class)?;
//! if let Lowered::Artifact(artifact) = lowering.outcome {
//!     /* render */
//! }
//! ```

mod augment;
mod errors;
mod mapper;
mod naming;
mod resolve;

pub use augment::augment;
pub use errors::ConfigurationError;
pub use mapper::{MapperSet, NamedField, synthesize_field_copies};
pub use naming::{NamingRejection, PropertyName, property_name, property_name_for};
pub use resolve::{ClassResolution, resolve_class, resolve_field, resolve_fields};

use persistgen_core::lang::members::GeneratedMemberId;

use super::decl::{BackingField, PropertyMember};
use super::descriptor::{ClassDescriptor, PersistenceDirective};
use super::types::IrType;
use super::{ClassArtifact, ClassIdentity};
use crate::frontend::diagnostics::{Diagnostic, catalog};
use crate::frontend::model::RawClass;

/// What lowering produced for one class.
#[derive(Debug, Clone, PartialEq)]
pub enum Lowered {
    Artifact(ClassArtifact),
    /// The class is not declared at namespace scope.
    StructuralRejected { parent: String },
}

/// Lowering result plus the warnings recorded on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassLowering {
    pub outcome: Lowered,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lower one raw class.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] when a field does not carry exactly one `persisted` annotation or the
/// class carries more than one `managed` annotation. No partial artifact is produced in that case.
#[tracing::instrument(skip_all, fields(namespace = %raw.namespace, class = %raw.name))]
pub fn lower_class(raw: &RawClass) -> Result<ClassLowering, ConfigurationError> {
    let identity = ClassIdentity::new(&raw.namespace, &raw.name);
    let fields = resolve_fields(&identity, raw)?;

    match resolve_class(identity, raw, fields)? {
        ClassResolution::StructuralRejected { parent } => {
            tracing::debug!(%parent, "not declared at namespace scope");
            Ok(ClassLowering {
                outcome: Lowered::StructuralRejected { parent },
                diagnostics: Vec::new(),
            })
        }
        ClassResolution::Resolved(class) => Ok(lower_descriptor(class)),
    }
}

/// Lower a resolved class descriptor to its artifact.
pub fn lower_descriptor(class: ClassDescriptor) -> ClassLowering {
    let class_label = class.identity.to_string();
    let mut diagnostics = Vec::new();

    let names: Vec<PropertyName> = class.fields.iter().map(property_name).collect();

    for (field, name) in class.fields.iter().zip(&names) {
        if field.directive != PersistenceDirective::Direct {
            tracing::debug!(field = %field.source_name, directive = ?field.directive, "directive has no effect on synthesis");
        }
        if let PropertyName::Rejected(reason) = name {
            tracing::warn!(class = %class_label, field = %field.source_name, ?reason, "field has no property name");
            diagnostics.push(catalog::naming_rejected(&class_label, &field.source_name));
        }
    }

    let backing_fields: Vec<BackingField> = class
        .fields
        .iter()
        .map(|f| BackingField {
            name: f.source_name.clone(),
            ty: IrType::Declared(f.declared_type.clone()),
            attributes: f.attributes.clone(),
        })
        .collect();

    let named: Vec<NamedField<'_>> = class
        .fields
        .iter()
        .zip(&names)
        .filter_map(|(field, name)| name.accepted().map(|property| NamedField { field, property }))
        .collect();

    let mut properties: Vec<PropertyMember> = named
        .iter()
        .map(|n| {
            PropertyMember::backed(
                n.property,
                IrType::Declared(n.field.declared_type.clone()),
                &n.field.source_name,
            )
        })
        .collect();

    let mut mappers = MapperSet::new();
    synthesize_field_copies(&named, &mut mappers);
    augment(&class, &mut properties, &mut mappers);

    let artifact = ClassArtifact {
        identity: class.identity.clone(),
        visibility: class.visibility,
        derives: class.derives.clone(),
        attributes: class.attributes.clone(),
        id: PropertyMember::generated(GeneratedMemberId::Id),
        backing_fields,
        properties,
        mappers: mappers.into_functions(),
    };

    ClassLowering {
        outcome: Lowered::Artifact(artifact),
        diagnostics,
    }
}
