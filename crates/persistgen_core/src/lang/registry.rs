//! Shareable metadata for `persistgen_core::lang` registries.
//!
//! ## Notes
//! - The types are `Copy` so registries can live in `const` tables.

/// Shared metadata shape for registry entries.
///
/// Every entry carries a stable `id`, the accepted spellings (`canonical` + `aliases`) and a one-line
/// description used in diagnostics and CLI help.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Resolve a spelling (canonical first, then aliases) against a registry table.
pub fn lookup<Id: Copy>(table: &[LangItemInfo<Id>], name: &str) -> Option<Id> {
    if let Some(info) = table.iter().find(|i| i.canonical == name) {
        return Some(info.id);
    }
    table.iter().find(|i| i.aliases.contains(&name)).map(|i| i.id)
}

pub(crate) const fn info<Id>(
    id: Id,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> LangItemInfo<Id> {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
    }
}
