//! Shared generator conventions (well-known identifiers and spellings).

/// Leading character stripped from a field name by the naming policy.
pub const FIELD_PREFIX: char = '_';

/// Prefix of lifecycle mapper function names (`MapToAuthorityInsert`).
pub const MAPPER_PREFIX: &str = "MapToAuthority";

/// Prefix of generated setter methods (`set_user_id_external`).
pub const SETTER_PREFIX: &str = "set_";

/// Name of the mapper parameter holding the authority instance.
pub const AUTHORITY_PARAM: &str = "authority";

/// Default path of the runtime support crate referenced by generated code.
pub const DEFAULT_RUNTIME_PATH: &str = "::persistgen_runtime";

/// Runtime function returning the current UTC time.
pub const RUNTIME_NOW_FN: &str = "now_utc";

/// Suffix of per-class artifact file stems (`managed_entity_managed_entity.rs`).
pub const ARTIFACT_FILE_SUFFIX: &str = "_managed_entity";

/// Derive that generated code always implements by hand.
pub const DEFAULT_DERIVE: &str = "Default";
