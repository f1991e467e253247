//! Walks one managed entity through insert, update and delete and prints each authority state.
//!
//! Run with `cargo run -p persistgen_runtime --example managed_entity_demo`.

use persistgen_runtime::managed;
use serde::Serialize;

#[managed(enable_audit = true, enable_soft_delete = true)]
#[derive(Debug, Clone, Serialize)]
pub struct ManagedEntity {
    #[persisted(set_on_insert)]
    _userIdExternal: String,
    #[persisted(set_on_insert, set_on_update)]
    _idRegistration: String,
}

fn print_state(label: &str, entity: &ManagedEntity) -> Result<(), serde_json::Error> {
    println!("{label}:\n{}\n", serde_json::to_string_pretty(entity)?);
    Ok(())
}

fn main() -> Result<(), serde_json::Error> {
    let mut working = ManagedEntity::default();
    working.set_user_id_external("ext-42".to_string());
    working.set_id_registration("reg-7".to_string());
    working.created_by = "alice".to_string();

    let stored = working.map_to_authority_insert(ManagedEntity::default());
    print_state("after insert", &stored)?;

    working.set_user_id_external("ignored-on-update".to_string());
    working.set_id_registration("reg-8".to_string());
    working.modified_last_by = Some("bob".to_string());
    let stored = working.map_to_authority_update(stored);
    print_state("after update", &stored)?;

    working.deleted_by = Some("carol".to_string());
    let stored = working.map_to_authority_delete(stored);
    print_state("after delete", &stored)?;

    Ok(())
}
