use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use parlo_config::{ProviderDefaults, ProviderSettings, SettingsStore};
use parlo_lang::{LangRegistry, LocaleNames};

use crate::error::ProviderError;
use crate::provider::{
    AUTO_LANG, ProviderCapability, ProviderContext, ProviderFeature, ProviderInfo,
    TranslationProvider,
};
use crate::translation::{Pronunciation, Translation, TranslationRequest};
use crate::url::{encode, format_url};

pub const NAME: &str = "lingva";

static INFO: ProviderInfo = ProviderInfo {
    name: NAME,
    prettyname: "Lingva Translate",
    capabilities: &[
        ProviderCapability::Translation,
        ProviderCapability::TextToSpeech,
    ],
    features: &[
        ProviderFeature::Instances,
        ProviderFeature::Detection,
        ProviderFeature::Pronunciation,
    ],
};

/// Lingva reports Chinese with its own codes; fold them into the canonical
/// space so they denormalize back when talking to the service.
const LANG_ALIASES: &[(&str, &str)] = &[("zh", "zh-CN"), ("zh-Hant", "zh-TW")];

/// Self-hostable Google Translate front-end with speech support.
pub struct Lingva {
    ctx: ProviderContext,
    client: reqwest::Client,
}

impl Lingva {
    pub fn new(store: Arc<dyn SettingsStore>, locale: Arc<dyn LocaleNames>) -> Self {
        let defaults = ProviderDefaults {
            instance_url: "lingva.ml",
            ..ProviderDefaults::default()
        };
        let settings = ProviderSettings::new(store, NAME, defaults);
        Self {
            ctx: ProviderContext::new(LangRegistry::with_aliases(LANG_ALIASES), settings, locale),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format_url(&self.ctx.settings.instance_url(), path, &[], false)
    }

    async fn load_languages(&mut self, trans: bool, tts: bool) -> Result<(), ProviderError> {
        let payload: LanguagesResponse =
            fetch_json(&self.client, self.endpoint("/api/v1/languages")).await?;
        for lang in &payload.languages {
            // The list carries the auto-detect pseudo-language; detection is
            // a feature flag, not a language.
            if lang.code == AUTO_LANG {
                continue;
            }
            self.ctx.langs.add_lang(&lang.code, Some(&lang.name), trans, tts);
        }
        debug!(provider = NAME, count = payload.languages.len(), trans, tts, "loaded languages");
        Ok(())
    }
}

#[async_trait::async_trait]
impl TranslationProvider for Lingva {
    fn info(&self) -> &ProviderInfo {
        &INFO
    }

    fn context(&self) -> &ProviderContext {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut ProviderContext {
        &mut self.ctx
    }

    async fn validate_instance(&self, url: &str) -> Result<bool, ProviderError> {
        let probe = format_url(url, "/api/v1/en/es/hello", &[], false);
        let response = self.client.get(probe).send().await?;
        if !response.status().is_success() {
            return Ok(false);
        }
        Ok(response.json::<TranslateResponse>().await.is_ok())
    }

    async fn init_trans(&mut self) -> Result<(), ProviderError> {
        self.load_languages(true, false).await
    }

    async fn init_tts(&mut self) -> Result<(), ProviderError> {
        self.load_languages(false, true).await
    }

    async fn translate(
        &mut self,
        text: &str,
        src: &str,
        dest: &str,
    ) -> Result<Translation, ProviderError> {
        self.ctx.check_text(text)?;
        self.ctx.check_pair(&INFO, src, dest)?;

        let source = if src == AUTO_LANG {
            AUTO_LANG.to_string()
        } else {
            self.ctx.langs.denormalize(src)
        };
        let target = self.ctx.langs.denormalize(dest);
        let path = format!(
            "/api/v1/{}/{}/{}",
            encode(&source),
            encode(&target),
            encode(text)
        );

        debug!(provider = NAME, src, dest, chars = text.chars().count(), "translate");
        let response = self.client.get(self.endpoint(&path)).send().await?;
        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            return Err(match status {
                429 => ProviderError::service_limit_reached(),
                500..=599 => ProviderError::network(format!("HTTP {status}")),
                _ => ProviderError::translation_failed(format!("HTTP {status}")),
            });
        }

        let payload: TranslateResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::translation_failed(format!("malformed response: {err}")))?;

        let info = payload.info.unwrap_or_default();
        let detected = (src == AUTO_LANG)
            .then(|| {
                info.detected_source
                    .map(|code| self.ctx.langs.normalize(&code))
            })
            .flatten();

        let translation = Translation {
            text: payload.translation,
            original: TranslationRequest {
                text: text.to_string(),
                src: src.to_string(),
                dest: dest.to_string(),
            },
            detected,
            mistakes: None,
            pronunciation: Pronunciation {
                src: info.pronunciation.query,
                dest: info.pronunciation.translation,
            },
        };
        self.ctx.record(translation.clone());
        Ok(translation)
    }

    async fn speech(&mut self, text: &str, language: &str) -> Result<Vec<u8>, ProviderError> {
        let lang = self.ctx.langs.denormalize(language);
        let path = format!("/api/v1/audio/{}/{}", encode(&lang), encode(text));

        let response = self.client.get(self.endpoint(&path)).send().await?;
        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            return Err(match status {
                500..=599 => ProviderError::network(format!("HTTP {status}")),
                _ => ProviderError::tts_failed(format!("HTTP {status}")),
            });
        }

        let payload: AudioResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::tts_failed(format!("malformed response: {err}")))?;
        Ok(payload.audio)
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: String,
) -> Result<T, ProviderError> {
    let response = client.get(&url).send().await?;
    let status = response.status().as_u16();
    if !response.status().is_success() {
        return Err(ProviderError::translation_failed(format!(
            "{url} returned HTTP {status}"
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ProviderError::unexpected(format!("malformed response: {err}")))
}

#[derive(Deserialize)]
struct LanguagesResponse {
    languages: Vec<LingvaLanguage>,
}

#[derive(Deserialize)]
struct LingvaLanguage {
    code: String,
    name: String,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translation: String,
    #[serde(default)]
    info: Option<TranslationInfo>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct TranslationInfo {
    detected_source: Option<String>,
    pronunciation: PronunciationInfo,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PronunciationInfo {
    query: Option<String>,
    translation: Option<String>,
}

#[derive(Deserialize)]
struct AudioResponse {
    audio: Vec<u8>,
}
