use std::collections::HashMap;
use std::sync::OnceLock;

use crate::normalize::normalize_structure;

/// Legacy and divergent ISO codes folded into the canonical code space.
///
/// Keys and values are in normalized form; lookup happens after structural
/// normalization, never before.
const GLOBAL_ALIASES: &[(&str, &str)] = &[
    ("in", "id"),
    ("iw", "he"),
    ("ji", "yi"),
    ("jw", "jv"),
    ("mo", "ro"),
    ("tl", "fil"),
];

fn global_aliases() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| GLOBAL_ALIASES.iter().copied().collect())
}

/// The global alias table overlaid with provider-specific entries.
///
/// Provider entries take precedence on key collision. Provider keys and
/// values must already be in normalized form.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    provider: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider_aliases(entries: &[(&str, &str)]) -> Self {
        Self {
            provider: entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Resolve an already-normalized code through the merged table.
    pub fn resolve(&self, code: &str) -> String {
        if let Some(target) = self.provider.get(code) {
            return target.clone();
        }
        if let Some(target) = global_aliases().get(code) {
            return (*target).to_string();
        }
        code.to_string()
    }

    /// Full normalization: structural pass, then alias substitution.
    pub fn normalize(&self, code: &str) -> String {
        self.resolve(&normalize_structure(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_global_aliases() {
        let table = AliasTable::new();
        assert_eq!(table.normalize("iw"), "he");
        assert_eq!(table.normalize("JW"), "jv");
    }

    #[test]
    fn aliases_apply_after_structural_normalization() {
        // "IW" only matches the table once lowercased.
        let table = AliasTable::new();
        assert_eq!(table.normalize("IW"), "he");
    }

    #[test]
    fn provider_entries_win_on_collision() {
        let table = AliasTable::with_provider_aliases(&[("iw", "he-IL"), ("zh", "zh-CN")]);
        assert_eq!(table.normalize("iw"), "he-IL");
        assert_eq!(table.normalize("zh"), "zh-CN");
        // Global entries still apply where the provider is silent.
        assert_eq!(table.normalize("mo"), "ro");
    }

    #[test]
    fn unknown_codes_pass_through() {
        let table = AliasTable::new();
        assert_eq!(table.normalize("eo"), "eo");
    }
}
