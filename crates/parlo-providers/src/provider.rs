use std::sync::Arc;

use async_trait::async_trait;

use parlo_config::ProviderSettings;
use parlo_lang::{LangRegistry, LocaleNames};

use crate::error::ProviderError;
use crate::history::TranslationHistory;
use crate::translation::Translation;

/// Source code asking the service to detect the language itself.
pub const AUTO_LANG: &str = "auto";

/// Broad service categories a provider can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCapability {
    Translation,
    TextToSpeech,
    Definitions,
}

/// Optional behaviors within a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFeature {
    /// The instance URL can be changed (self-hostable services).
    Instances,
    /// An API key is accepted but not necessary.
    ApiKey,
    /// An API key is necessary for the service to work.
    ApiKeyRequired,
    /// Source language auto-detection.
    Detection,
    /// Spelling-mistake hints on translations.
    Mistakes,
    /// Pronunciation hints on translations.
    Pronunciation,
    /// Translation suggestions can be sent back to the service.
    Suggestions,
}

/// Static identity and contract surface of a concrete provider.
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    /// Machine key, used for settings namespacing.
    pub name: &'static str,
    /// Name for display.
    pub prettyname: &'static str,
    pub capabilities: &'static [ProviderCapability],
    pub features: &'static [ProviderFeature],
}

impl ProviderInfo {
    pub fn offers(&self, capability: ProviderCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn supports(&self, feature: ProviderFeature) -> bool {
        self.features.contains(&feature)
    }
}

/// Session state every provider owns: language bookkeeping, settings, the
/// service's character cap and the translation history.
///
/// Mutation goes through `&mut self` on the owning provider, so the registry
/// is never repopulated while a translation is reading it.
pub struct ProviderContext {
    pub langs: LangRegistry,
    pub settings: ProviderSettings,
    locale: Arc<dyn LocaleNames>,
    /// `None` means the service does not cap request length.
    pub chars_limit: Option<usize>,
    pub history: TranslationHistory,
}

impl ProviderContext {
    pub fn new(
        langs: LangRegistry,
        settings: ProviderSettings,
        locale: Arc<dyn LocaleNames>,
    ) -> Self {
        Self {
            langs,
            settings,
            locale,
            chars_limit: None,
            history: TranslationHistory::new(),
        }
    }

    /// Display name for a language: locale service, then the name the
    /// service supplied, then the code itself.
    pub fn lang_name(&self, code: &str) -> String {
        self.langs.display_name(self.locale.as_ref(), code)
    }

    /// Guards run on translatable text before any network work.
    pub fn check_text(&self, text: &str) -> Result<(), ProviderError> {
        if text.is_empty() {
            return Err(ProviderError::empty());
        }
        if let Some(limit) = self.chars_limit {
            let length = text.chars().count();
            if length > limit {
                return Err(ProviderError::chars_limit_exceeded(length, limit));
            }
        }
        Ok(())
    }

    /// Guard for the language pair of a translate call.
    ///
    /// `auto` is accepted as source only for providers that detect languages.
    pub fn check_pair(
        &self,
        info: &ProviderInfo,
        src: &str,
        dest: &str,
    ) -> Result<(), ProviderError> {
        let src_ok = (src == AUTO_LANG && info.supports(ProviderFeature::Detection))
            || self.langs.supports(src);
        if !src_ok {
            return Err(ProviderError::invalid_lang_code(src));
        }
        if !self.langs.supports(dest) {
            return Err(ProviderError::invalid_lang_code(dest));
        }
        Ok(())
    }

    /// Record a completed translation.
    pub fn record(&mut self, translation: Translation) {
        self.history.push(translation);
    }
}

/// Uniform operation surface every translation backend implements.
///
/// Callers check `info().capabilities`/`features` before invoking a gated
/// operation; the defaults below hit `unimplemented!` because calling one on
/// a provider that never declared it is a caller bug, not a runtime
/// [`ProviderError`].
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn info(&self) -> &ProviderInfo;

    fn context(&self) -> &ProviderContext;

    fn context_mut(&mut self) -> &mut ProviderContext;

    /// Check that `url` hosts a reachable, compatible instance of the
    /// service. Meaningful only with [`ProviderFeature::Instances`].
    async fn validate_instance(&self, _url: &str) -> Result<bool, ProviderError> {
        unimplemented!("{} does not support instances", self.info().name)
    }

    /// Check an API key against the service. Meaningful only with
    /// [`ProviderFeature::ApiKey`] or [`ProviderFeature::ApiKeyRequired`].
    async fn validate_api_key(&self, _key: &str) -> Result<bool, ProviderError> {
        unimplemented!("{} does not support API keys", self.info().name)
    }

    /// One-time setup before the first translation, e.g. loading the
    /// supported-language lists into the registry. The registry must be
    /// fully populated when this returns `Ok`. Defaults to no setup.
    async fn init_trans(&mut self) -> Result<(), ProviderError> {
        Ok(())
    }

    /// One-time setup before the first speech synthesis. Defaults to no
    /// setup.
    async fn init_tts(&mut self) -> Result<(), ProviderError> {
        Ok(())
    }

    /// Translate `text` from `src` to `dest`.
    ///
    /// `src` may be [`AUTO_LANG`] for providers with
    /// [`ProviderFeature::Detection`]; the result then carries the detected
    /// source. A successful translation is appended to the history.
    async fn translate(
        &mut self,
        text: &str,
        src: &str,
        dest: &str,
    ) -> Result<Translation, ProviderError>;

    /// Send a translation suggestion back to the service. The returned bool
    /// tells whether the service accepted it. Meaningful only with
    /// [`ProviderFeature::Suggestions`].
    async fn suggest(
        &mut self,
        _text: &str,
        _src: &str,
        _dest: &str,
        _suggestion: &str,
    ) -> Result<bool, ProviderError> {
        unimplemented!("{} does not support suggestions", self.info().name)
    }

    /// Synthesize speech audio for `text`. Meaningful only with
    /// [`ProviderCapability::TextToSpeech`].
    async fn speech(&mut self, _text: &str, _language: &str) -> Result<Vec<u8>, ProviderError> {
        unimplemented!("{} does not support text-to-speech", self.info().name)
    }
}
