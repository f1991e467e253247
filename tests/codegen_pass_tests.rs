//! Pass-level code generation tests: generated members, mapper bodies, feature toggles and determinism.

use persistgen::backend::GeneratorConfig;
use persistgen::model::{ClassAnnotation, ManagedArgs, PersistedArgs, PersistedVia, RawClass, RawField};
use persistgen::GenerationPass;

/// Whitespace-insensitive containment for mapper bodies. Whole-file shape is covered by snapshots.
fn has(text: &str, needle: &str) -> bool {
    let squash = |s: &str| s.split_whitespace().collect::<String>();
    squash(text).contains(&squash(needle))
}

fn managed(audit: bool, soft_delete: bool) -> ClassAnnotation {
    ClassAnnotation::Managed(ManagedArgs {
        enable_audit: Some(audit),
        enable_soft_delete: Some(soft_delete),
    })
}

fn managed_entity(audit: bool, soft_delete: bool) -> RawClass {
    RawClass::new("Accounts", "ManagedEntity")
        .with_derive("Debug")
        .with_derive("Clone")
        .with_annotation(managed(audit, soft_delete))
        .with_field(RawField::persisted("_userIdExternal", "String", PersistedArgs::new().on_insert()))
        .with_field(RawField::persisted(
            "_idRegistration",
            "String",
            PersistedArgs::new().on_insert().on_update(),
        ))
}

fn generate(class: RawClass) -> String {
    let report = GenerationPass::default().generate_class(&class);
    report.outcome.expect("generation failed").expect("no unit generated")
}

/// Text of one generated mapper function, up to the next item.
fn mapper_body<'a>(text: &'a str, name: &str) -> &'a str {
    let start = text.find(&format!("fn {name}(")).expect("mapper missing");
    let rest = &text[start..];
    let end = rest[1..].find("fn ").map(|i| i + 1).unwrap_or(rest.len());
    &rest[..end]
}

#[test]
fn default_output_starts_with_header() {
    let text = generate(managed_entity(true, true));
    assert!(text.starts_with("// Generated by persistgen v"));
    assert!(text.contains("pub id: ::persistgen_runtime::Uuid"));
}

#[test]
fn mapper_bodies_follow_the_lifecycle_flags() {
    let text = generate(managed_entity(true, true));

    let insert = mapper_body(&text, "map_to_authority_insert");
    assert!(has(insert, "authority.set_user_id_external(self.user_id_external().clone());"));
    assert!(has(insert, "authority.set_id_registration(self.id_registration().clone());"));
    assert!(has(insert, "authority.created_date = ::persistgen_runtime::now_utc();"));
    assert!(has(insert, "authority.created_by = self.created_by.clone();"));

    let update = mapper_body(&text, "map_to_authority_update");
    assert!(!has(update, "set_user_id_external"));
    assert!(has(update, "authority.set_id_registration(self.id_registration().clone());"));
    assert!(has(
        update,
        "authority.modified_last_date = ::core::option::Option::Some(::persistgen_runtime::now_utc());"
    ));
    assert!(has(update, "authority.modified_last_by = self.modified_last_by.clone();"));

    let delete = mapper_body(&text, "map_to_authority_delete");
    assert!(!has(delete, "set_user_id_external"));
    assert!(!has(delete, "set_id_registration"));
    assert!(has(delete, "authority.is_deleted = true;"));
    assert!(has(delete, "authority.deleted_by = self.deleted_by.clone();"));
}

#[test]
fn field_copies_precede_bookkeeping() {
    let text = generate(managed_entity(true, true));
    let insert = mapper_body(&text, "map_to_authority_insert");
    let copy = insert.find("set_id_registration").expect("copy");
    let stamp = insert.find("created_date").expect("stamp");
    assert!(copy < stamp);
}

#[test]
fn empty_mapper_takes_authority_immutably() {
    let class = RawClass::new("Accounts", "Tag")
        .with_field(RawField::persisted("_label", "String", PersistedArgs::new().on_insert()));
    let text = generate(class);
    assert!(has(
        mapper_body(&text, "map_to_authority_update"),
        "fn map_to_authority_update(&self, authority: Self) -> Self { authority }"
    ));
    assert!(has(
        mapper_body(&text, "map_to_authority_insert"),
        "fn map_to_authority_insert(&self, mut authority: Self) -> Self"
    ));
}

#[test]
fn unannotated_class_defaults_to_no_bookkeeping() {
    let class = RawClass::new("Accounts", "Plain")
        .with_field(RawField::persisted("_label", "String", PersistedArgs::new().on_insert()));
    let text = generate(class);
    assert!(!text.contains("created_date"));
    assert!(!text.contains("is_deleted"));
    assert!(text.contains("pub id: ::persistgen_runtime::Uuid"));
}

#[test]
fn rejected_names_keep_backing_field_only() {
    let class = RawClass::new("Accounts", "Invoice")
        .with_field(RawField::persisted("Name", "String", PersistedArgs::new().on_insert()))
        .with_field(RawField::persisted("_number", "u32", PersistedArgs::new().on_insert()));
    let report = GenerationPass::default().generate_class(&class);
    let text = report.outcome.unwrap().unwrap();

    assert!(text.contains("    Name: String,"));
    assert!(!text.contains("fn name("));
    assert!(!text.contains("set_name"));
    assert!(has(mapper_body(&text, "map_to_authority_insert"), "authority.set_number(self.number().clone());"));
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].field.as_deref(), Some("Name"));
    assert!(!report.diagnostics[0].is_error());
}

#[test]
fn rejected_override_keeps_backing_field_only() {
    let class = RawClass::new("Accounts", "Invoice")
        .with_field(RawField::persisted(
            "_code",
            "String",
            PersistedArgs::new().on_insert().with_property_name(""),
        ))
        .with_field(RawField::persisted("_number", "u32", PersistedArgs::new().on_insert()));
    let report = GenerationPass::default().generate_class(&class);
    let text = report.outcome.unwrap().unwrap();

    assert!(text.contains("    _code: String,"));
    assert!(!text.contains("fn (&self)"));
    assert!(!text.contains("fn code("));
    let insert = mapper_body(&text, "map_to_authority_insert");
    assert!(has(insert, "authority.set_number(self.number().clone());"));
    assert!(!has(insert, "_code"));
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].field.as_deref(), Some("_code"));
    assert!(!report.diagnostics[0].is_error());
}

#[test]
fn property_name_override_and_declared_type() {
    let class = RawClass::new("Accounts", "Account")
        .with_field(RawField::persisted(
            "_h",
            "Vec<u8>",
            PersistedArgs::new().on_update().with_property_name("Handle"),
        ))
        .with_field(RawField::persisted(
            "_children",
            "Vec<String>",
            PersistedArgs::new().on_update().with_directive(PersistedVia::NestedCollection),
        ));
    let text = generate(class);

    assert!(text.contains("pub fn handle(&self) -> &Vec<u8>"));
    let update = mapper_body(&text, "map_to_authority_update");
    assert!(has(update, "authority.set_handle(self.handle().clone());"));
    assert!(has(update, "authority.set_children(self.children().clone());"));
}

#[test]
fn default_derive_is_implemented_by_hand() {
    let class = RawClass::new("Accounts", "Tag")
        .with_derive("Default")
        .with_derive("Debug")
        .with_field(RawField::persisted("_label", "String", PersistedArgs::new()));
    let text = generate(class);
    assert!(text.contains("#[derive(Debug)]"));
    assert!(text.contains("impl ::core::default::Default for Tag"));
}

#[test]
fn generation_is_deterministic() {
    let pass = GenerationPass::default();
    let first = pass.run(&[managed_entity(true, true), managed_entity(false, true)]);
    let second = pass.run(&[managed_entity(true, true), managed_entity(false, true)]);

    let texts = |o: &persistgen::PassOutput| o.units.iter().map(|u| u.text.clone()).collect::<Vec<_>>();
    assert_eq!(texts(&first), texts(&second));
}

#[test]
fn runtime_path_and_header_are_configurable() {
    let config = GeneratorConfig::default().with_runtime_path("crate::rt").with_header(false);
    let report = GenerationPass::new(config).generate_class(&managed_entity(true, false));
    let text = report.outcome.unwrap().unwrap();

    assert!(!text.starts_with("//"));
    assert!(text.contains("pub id: crate::rt::Uuid"));
    assert!(has(mapper_body(&text, "map_to_authority_insert"), "crate::rt::now_utc()"));
}
