//! Snapshot tests for the full text generated for a managed entity.
//!
//! The header is off and the runtime path is short so snapshots stay stable across version bumps.
//! Review changes: `cargo insta review`

use persistgen::backend::GeneratorConfig;
use persistgen::model::{ClassAnnotation, ManagedArgs, PersistedArgs, RawClass, RawField};
use persistgen::GenerationPass;

fn managed_entity(audit: bool, soft_delete: bool) -> RawClass {
    RawClass::new("Accounts", "ManagedEntity")
        .with_derive("Debug")
        .with_derive("Clone")
        .with_annotation(ClassAnnotation::Managed(ManagedArgs {
            enable_audit: Some(audit),
            enable_soft_delete: Some(soft_delete),
        }))
        .with_field(RawField::persisted("_userIdExternal", "String", PersistedArgs::new().on_insert()))
        .with_field(RawField::persisted(
            "_idRegistration",
            "String",
            PersistedArgs::new().on_insert().on_update(),
        ))
}

fn render(class: RawClass) -> String {
    let config = GeneratorConfig::default().with_runtime_path("rt").with_header(false);
    let report = GenerationPass::new(config).generate_class(&class);
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
    report.outcome.expect("generation failed").expect("no unit generated")
}

#[test]
fn test_managed_entity() {
    let rust_code = render(managed_entity(true, true));
    insta::assert_snapshot!("managed_entity", rust_code);
}

#[test]
fn test_managed_entity_plain() {
    let rust_code = render(managed_entity(false, false));
    insta::assert_snapshot!("managed_entity_plain", rust_code);
}

#[test]
fn test_managed_entity_audit() {
    let rust_code = render(managed_entity(true, false));
    insta::assert_snapshot!("managed_entity_audit", rust_code);
}

#[test]
fn test_managed_entity_soft_delete() {
    let rust_code = render(managed_entity(false, true));
    insta::assert_snapshot!("managed_entity_soft_delete", rust_code);
}
