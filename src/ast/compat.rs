use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// System variables MySQL 8.0 removed, mapped to the text rendered in their
/// place under [`RestoreFlag::COMPAT_80`](crate::ast::RestoreFlag::COMPAT_80).
///
/// Replacements are either a literal or a reference to the renamed variable.
static COMPAT_80: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("query_cache_size", "'1048576'"),
        ("query_cache_type", "'OFF'"),
        ("tx_isolation", "@@transaction_isolation"),
        ("tx_read_only", "@@transaction_read_only"),
    ])
});

pub fn compat80_replacement(name: &str) -> Option<&'static str> {
    COMPAT_80.get(name).copied()
}

/// Table entries in declaration order.
pub fn compat80_entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    COMPAT_80.iter().map(|(name, replacement)| (*name, *replacement))
}
