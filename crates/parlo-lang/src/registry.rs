use std::collections::HashMap;

use crate::aliases::AliasTable;
use crate::locale::LocaleNames;

/// Per-provider bookkeeping of supported languages.
///
/// Codes stored here are always canonical; the codes the service originally
/// reported are kept aside so requests can be denormalized back into the
/// service's own code space.
#[derive(Debug, Clone, Default)]
pub struct LangRegistry {
    aliases: AliasTable,
    /// Languages available for translation, in service order.
    pub languages: Vec<String>,
    /// Languages available for text-to-speech, in service order.
    pub tts_languages: Vec<String>,
    nonstandard: HashMap<String, String>,
    names: HashMap<String, String>,
}

impl LangRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with provider-specific alias entries on top of the global
    /// table.
    pub fn with_aliases(entries: &[(&str, &str)]) -> Self {
        Self {
            aliases: AliasTable::with_provider_aliases(entries),
            ..Self::default()
        }
    }

    /// Normalize a service code into the canonical space.
    pub fn normalize(&self, code: &str) -> String {
        self.aliases.normalize(code)
    }

    /// Register a language reported by the service.
    ///
    /// `trans`/`tts` select the support lists the canonical code is appended
    /// to. Appends do not dedupe: service order may be load-bearing for
    /// callers, so repeated registration is the caller's to avoid.
    pub fn add_lang(&mut self, original_code: &str, name: Option<&str>, trans: bool, tts: bool) {
        let code = self.normalize(original_code);

        if trans {
            self.languages.push(code.clone());
        }
        if tts {
            self.tts_languages.push(code.clone());
        }

        if code != original_code && !self.nonstandard.contains_key(&code) {
            self.nonstandard.insert(code.clone(), original_code.to_string());
        }

        if let Some(name) = name {
            self.names
                .entry(code)
                .or_insert_with(|| name.to_string());
        }
    }

    /// The service's own code for a canonical one, where they diverge.
    pub fn denormalize(&self, code: &str) -> String {
        self.nonstandard
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Denormalize several codes at once, preserving order and length.
    pub fn denormalize_all(&self, codes: &[&str]) -> Vec<String> {
        codes.iter().map(|code| self.denormalize(code)).collect()
    }

    /// Whether the canonical code is registered for translation.
    pub fn supports(&self, code: &str) -> bool {
        self.languages.iter().any(|known| known == code)
    }

    /// Whether the canonical code is registered for text-to-speech.
    pub fn supports_tts(&self, code: &str) -> bool {
        self.tts_languages.iter().any(|known| known == code)
    }

    /// Name the service itself supplied for a code, if any.
    pub fn provider_name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Display name for a code: locale service first, then the name the
    /// service supplied, then the code itself. Never empty.
    pub fn display_name(&self, locale: &dyn LocaleNames, code: &str) -> String {
        locale
            .localized_name(code)
            .or_else(|| self.names.get(code).cloned())
            .unwrap_or_else(|| code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::NoLocaleNames;

    struct FakeNames(HashMap<&'static str, &'static str>);

    impl LocaleNames for FakeNames {
        fn localized_name(&self, code: &str) -> Option<String> {
            self.0.get(code).map(|name| name.to_string())
        }
    }

    #[test]
    fn add_lang_normalizes_and_tracks_divergent_codes() {
        let mut registry = LangRegistry::new();
        registry.add_lang("ZH_cn", None, true, false);

        assert_eq!(registry.languages, vec!["zh-CN"]);
        assert_eq!(registry.denormalize("zh-CN"), "ZH_cn");
    }

    #[test]
    fn denormalize_round_trips_divergent_codes() {
        let mut registry = LangRegistry::with_aliases(&[("zh", "zh-CN")]);
        registry.add_lang("zh", None, true, true);

        let canonical = registry.normalize("zh");
        assert_eq!(canonical, "zh-CN");
        assert_eq!(registry.denormalize(&canonical), "zh");
    }

    #[test]
    fn denormalize_passes_standard_codes_through() {
        let mut registry = LangRegistry::new();
        registry.add_lang("en", None, true, false);

        assert_eq!(registry.denormalize("en"), "en");
    }

    #[test]
    fn denormalize_all_preserves_order_and_length() {
        let mut registry = LangRegistry::new();
        registry.add_lang("ZH_cn", None, true, false);
        registry.add_lang("en", None, true, false);

        assert_eq!(
            registry.denormalize_all(&["zh-CN", "en"]),
            vec!["ZH_cn".to_string(), "en".to_string()]
        );
    }

    #[test]
    fn first_registration_wins_for_divergent_codes_and_names() {
        let mut registry = LangRegistry::new();
        registry.add_lang("ZH_cn", Some("Chinese"), true, false);
        registry.add_lang("zh_CN", Some("Chinese (Simplified)"), true, false);

        assert_eq!(registry.denormalize("zh-CN"), "ZH_cn");
        assert_eq!(registry.provider_name("zh-CN"), Some("Chinese"));
    }

    #[test]
    fn duplicate_codes_are_kept_in_service_order() {
        let mut registry = LangRegistry::new();
        registry.add_lang("en", None, true, false);
        registry.add_lang("fr", None, true, false);
        registry.add_lang("en", None, true, false);

        assert_eq!(registry.languages, vec!["en", "fr", "en"]);
    }

    #[test]
    fn tts_list_is_tracked_separately() {
        let mut registry = LangRegistry::new();
        registry.add_lang("en", None, true, true);
        registry.add_lang("fr", None, true, false);

        assert!(registry.supports("fr"));
        assert!(registry.supports_tts("en"));
        assert!(!registry.supports_tts("fr"));
    }

    #[test]
    fn display_name_prefers_locale_service() {
        let mut registry = LangRegistry::new();
        registry.add_lang("es", Some("Spanish"), true, false);

        let locale = FakeNames(HashMap::from([("es", "Español")]));
        assert_eq!(registry.display_name(&locale, "es"), "Español");
    }

    #[test]
    fn display_name_falls_back_to_service_name() {
        let mut registry = LangRegistry::new();
        registry.add_lang("es", Some("Spanish"), true, false);

        assert_eq!(registry.display_name(&NoLocaleNames, "es"), "Spanish");
    }

    #[test]
    fn display_name_falls_back_to_the_code() {
        let registry = LangRegistry::new();
        assert_eq!(registry.display_name(&NoLocaleNames, "eo"), "eo");
    }
}
