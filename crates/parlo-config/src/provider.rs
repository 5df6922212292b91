use std::sync::Arc;

use crate::store::SettingsStore;

const INSTANCE_URL: &str = "instance-url";
const API_KEY: &str = "api-key";
const SRC_LANGS: &str = "src-langs";
const DEST_LANGS: &str = "dest-langs";

/// Defaults a provider declares for its settings.
#[derive(Debug, Clone)]
pub struct ProviderDefaults {
    pub instance_url: &'static str,
    pub api_key: &'static str,
    pub src_langs: &'static [&'static str],
    pub dest_langs: &'static [&'static str],
}

impl Default for ProviderDefaults {
    fn default() -> Self {
        Self {
            instance_url: "",
            api_key: "",
            src_langs: &["en", "fr", "es", "de"],
            dest_langs: &["fr", "es", "de", "en"],
        }
    }
}

/// Typed accessors over the store, scoped to one provider.
///
/// Getters fall back to the declared default when the stored value is unset
/// or empty; resets write the empty value back, so a reset followed by a
/// read yields the default again.
#[derive(Clone)]
pub struct ProviderSettings {
    store: Arc<dyn SettingsStore>,
    path: String,
    defaults: ProviderDefaults,
}

impl ProviderSettings {
    pub fn new(store: Arc<dyn SettingsStore>, provider: &str, defaults: ProviderDefaults) -> Self {
        Self {
            store,
            path: format!("translators/{provider}"),
            defaults,
        }
    }

    pub fn defaults(&self) -> &ProviderDefaults {
        &self.defaults
    }

    /// Instance URL saved for the provider, hostname and tld only.
    pub fn instance_url(&self) -> String {
        match self.store.get_string(&self.path, INSTANCE_URL) {
            Some(url) if !url.is_empty() => url,
            _ => self.defaults.instance_url.to_string(),
        }
    }

    pub fn set_instance_url(&self, url: &str) {
        self.store.set_string(&self.path, INSTANCE_URL, url);
    }

    pub fn reset_instance_url(&self) {
        self.set_instance_url("");
    }

    /// API key saved for the provider.
    pub fn api_key(&self) -> String {
        match self.store.get_string(&self.path, API_KEY) {
            Some(key) if !key.is_empty() => key,
            _ => self.defaults.api_key.to_string(),
        }
    }

    pub fn set_api_key(&self, key: &str) {
        self.store.set_string(&self.path, API_KEY, key);
    }

    pub fn reset_api_key(&self) {
        self.set_api_key("");
    }

    /// Recent source languages picked by the user.
    pub fn src_langs(&self) -> Vec<String> {
        match self.store.get_list(&self.path, SRC_LANGS) {
            Some(langs) if !langs.is_empty() => langs,
            _ => owned(self.defaults.src_langs),
        }
    }

    pub fn set_src_langs(&self, langs: &[String]) {
        self.store.set_list(&self.path, SRC_LANGS, langs);
    }

    pub fn reset_src_langs(&self) {
        self.set_src_langs(&[]);
    }

    /// Recent destination languages picked by the user.
    pub fn dest_langs(&self) -> Vec<String> {
        match self.store.get_list(&self.path, DEST_LANGS) {
            Some(langs) if !langs.is_empty() => langs,
            _ => owned(self.defaults.dest_langs),
        }
    }

    pub fn set_dest_langs(&self, langs: &[String]) {
        self.store.set_list(&self.path, DEST_LANGS, langs);
    }

    pub fn reset_dest_langs(&self) {
        self.set_dest_langs(&[]);
    }
}

fn owned(langs: &[&str]) -> Vec<String> {
    langs.iter().map(|lang| lang.to_string()).collect()
}
