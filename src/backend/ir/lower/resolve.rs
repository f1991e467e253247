//! Descriptor resolvers: raw host annotations to [`FieldDescriptor`] and [`ClassDescriptor`].

use super::super::ClassIdentity;
use super::super::descriptor::{ClassDescriptor, FieldDescriptor, PersistenceDirective, TypeRef};
use super::ConfigurationError;
use crate::frontend::model::{
    ClassAnnotation, DeclarationScope, FieldAnnotation, ManagedArgs, PersistedArgs, RawClass, RawField,
};

/// Outcome of class resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassResolution {
    Resolved(ClassDescriptor),
    /// Declared inside another type; no artifact is produced.
    StructuralRejected { parent: String },
}

/// Resolve one field. Exactly one `persisted` annotation must be present.
pub fn resolve_field(class: &ClassIdentity, raw: &RawField) -> Result<FieldDescriptor, ConfigurationError> {
    let mut persisted = raw.annotations.iter().filter_map(|a| match a {
        FieldAnnotation::Persisted(args) => Some(args),
        FieldAnnotation::Other(_) => None,
    });

    let (Some(args), None) = (persisted.next(), persisted.next()) else {
        return Err(ConfigurationError::FieldAnnotation {
            class: class.to_string(),
            field: raw.name.clone(),
            found: raw
                .annotations
                .iter()
                .filter(|a| matches!(a, FieldAnnotation::Persisted(_)))
                .count(),
        });
    };

    Ok(field_from_args(raw, args))
}

fn field_from_args(raw: &RawField, args: &PersistedArgs) -> FieldDescriptor {
    let base = args.set_all_actions.unwrap_or(false);
    FieldDescriptor {
        source_name: raw.name.clone(),
        declared_type: TypeRef::new(&raw.ty),
        directive: args.persisted_via.map(PersistenceDirective::from).unwrap_or_default(),
        property_name_override: args.property_name.clone(),
        prefix: args.prefix.clone(),
        type_override: args.type_override.as_deref().map(TypeRef::new),
        set_on_insert: args.set_on_insert.unwrap_or(base),
        set_on_update: args.set_on_update.unwrap_or(base),
        set_on_delete: args.set_on_delete.unwrap_or(base),
        attributes: raw.attributes.clone(),
    }
}

/// Resolve every field of a class in declaration order. The first failing field fails the class.
pub fn resolve_fields(class: &ClassIdentity, raw: &RawClass) -> Result<Vec<FieldDescriptor>, ConfigurationError> {
    raw.fields.iter().map(|f| resolve_field(class, f)).collect()
}

/// Resolve a class from its raw annotations and already resolved fields.
///
/// Zero `managed` annotations is valid and turns both toggles off; more than one is an error.
pub fn resolve_class(
    identity: ClassIdentity,
    raw: &RawClass,
    fields: Vec<FieldDescriptor>,
) -> Result<ClassResolution, ConfigurationError> {
    let managed: Vec<&ManagedArgs> = raw
        .annotations
        .iter()
        .filter_map(|a| match a {
            ClassAnnotation::Managed(args) => Some(args),
            ClassAnnotation::Other(_) => None,
        })
        .collect();

    let args = match managed.as_slice() {
        [] => ManagedArgs::default(),
        [args] => **args,
        _ => {
            return Err(ConfigurationError::ClassAnnotation {
                class: identity.to_string(),
                found: managed.len(),
            });
        }
    };

    if let DeclarationScope::Nested { parent } = &raw.scope {
        return Ok(ClassResolution::StructuralRejected { parent: parent.clone() });
    }

    Ok(ClassResolution::Resolved(ClassDescriptor {
        identity,
        visibility: raw.visibility.into(),
        derives: raw.derives.clone(),
        attributes: raw.attributes.clone(),
        enable_audit: args.enable_audit.unwrap_or(false),
        enable_soft_delete: args.enable_soft_delete.unwrap_or(false),
        fields,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::frontend::model::PersistedVia;

    fn identity() -> ClassIdentity {
        ClassIdentity::new("Demo", "Entity")
    }

    #[test]
    fn test_field_defaults() {
        let raw = RawField::persisted("_name", "String", PersistedArgs::new());
        let field = resolve_field(&identity(), &raw).unwrap();
        assert_eq!(field.directive, PersistenceDirective::Direct);
        assert!(!field.set_on_insert && !field.set_on_update && !field.set_on_delete);
        assert_eq!(field.property_name_override, None);
        assert_eq!(field.declared_type.as_str(), "String");
    }

    #[test]
    fn test_missing_annotation_fails() {
        let raw = RawField::new("_name", "String").with_annotation(FieldAnnotation::Other("serde".into()));
        let err = resolve_field(&identity(), &raw).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::FieldAnnotation {
                class: "Demo::Entity".into(),
                field: "_name".into(),
                found: 0
            }
        );
    }

    #[test]
    fn test_duplicate_annotation_fails() {
        let raw = RawField::persisted("_name", "String", PersistedArgs::new())
            .with_annotation(FieldAnnotation::Persisted(PersistedArgs::new().on_insert()));
        let err = resolve_field(&identity(), &raw).unwrap_err();
        assert!(matches!(err, ConfigurationError::FieldAnnotation { found: 2, .. }));
    }

    #[test]
    fn test_set_all_actions_is_base_for_flags() {
        let args = PersistedArgs {
            set_all_actions: Some(true),
            set_on_delete: Some(false),
            ..PersistedArgs::default()
        };
        let field = resolve_field(&identity(), &RawField::persisted("_x", "u8", args)).unwrap();
        assert!(field.set_on_insert);
        assert!(field.set_on_update);
        assert!(!field.set_on_delete);
    }

    #[test]
    fn test_directive_and_carried_arguments() {
        let args = PersistedArgs {
            prefix: Some("addr".into()),
            type_override: Some("AddressRow".into()),
            ..PersistedArgs::new().with_directive(PersistedVia::Nested)
        };
        let field = resolve_field(&identity(), &RawField::persisted("_address", "Address", args)).unwrap();
        assert_eq!(field.directive, PersistenceDirective::Nested);
        assert_eq!(field.prefix.as_deref(), Some("addr"));
        assert_eq!(field.type_override, Some(TypeRef::new("AddressRow")));
    }

    #[test]
    fn test_class_without_managed_annotation() {
        let raw = RawClass::new("Demo", "Entity");
        let ClassResolution::Resolved(class) = resolve_class(identity(), &raw, Vec::new()).unwrap() else {
            panic!("expected a resolved class");
        };
        assert!(!class.enable_audit);
        assert!(!class.enable_soft_delete);
    }

    #[test]
    fn test_class_toggles() {
        let raw = RawClass::new("Demo", "Entity").with_annotation(ClassAnnotation::Managed(ManagedArgs {
            enable_audit: Some(true),
            enable_soft_delete: None,
        }));
        let ClassResolution::Resolved(class) = resolve_class(identity(), &raw, Vec::new()).unwrap() else {
            panic!("expected a resolved class");
        };
        assert!(class.enable_audit);
        assert!(!class.enable_soft_delete);
    }

    #[test]
    fn test_multiple_managed_annotations_fail() {
        let raw = RawClass::new("Demo", "Entity")
            .with_annotation(ClassAnnotation::Managed(ManagedArgs::default()))
            .with_annotation(ClassAnnotation::Other("derive".into()))
            .with_annotation(ClassAnnotation::Managed(ManagedArgs::default()));
        let err = resolve_class(identity(), &raw, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ClassAnnotation {
                class: "Demo::Entity".into(),
                found: 2
            }
        );
    }

    #[test]
    fn test_nested_class_is_structurally_rejected() {
        let raw = RawClass::new("Demo", "Inner").with_scope(DeclarationScope::Nested { parent: "Outer".into() });
        assert_eq!(
            resolve_class(ClassIdentity::new("Demo", "Inner"), &raw, Vec::new()).unwrap(),
            ClassResolution::StructuralRejected { parent: "Outer".into() }
        );
    }
}
