use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use parlo_config::{ProviderDefaults, ProviderSettings, SettingsStore};
use parlo_lang::{LangRegistry, LocaleNames};

use crate::error::{ProviderError, ProviderErrorKind, classify_http_status};
use crate::provider::{
    AUTO_LANG, ProviderCapability, ProviderContext, ProviderFeature, ProviderInfo,
    TranslationProvider,
};
use crate::translation::{Pronunciation, Translation, TranslationRequest};
use crate::url::format_url;

pub const NAME: &str = "libretranslate";

static INFO: ProviderInfo = ProviderInfo {
    name: NAME,
    prettyname: "LibreTranslate",
    capabilities: &[ProviderCapability::Translation],
    features: &[
        ProviderFeature::Instances,
        ProviderFeature::ApiKey,
        ProviderFeature::Detection,
        ProviderFeature::Suggestions,
    ],
};

/// Self-hostable machine translation service.
pub struct LibreTranslate {
    ctx: ProviderContext,
    client: reqwest::Client,
}

impl LibreTranslate {
    pub fn new(store: Arc<dyn SettingsStore>, locale: Arc<dyn LocaleNames>) -> Self {
        let defaults = ProviderDefaults {
            instance_url: "libretranslate.com",
            ..ProviderDefaults::default()
        };
        let settings = ProviderSettings::new(store, NAME, defaults);
        Self {
            ctx: ProviderContext::new(LangRegistry::new(), settings, locale),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format_url(&self.ctx.settings.instance_url(), path, &[], false)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, ProviderError> {
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(ProviderError::new(
                classify_http_status(status, ProviderErrorKind::TranslationFailed),
                format!("{url} returned HTTP {status}"),
            ));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ProviderError::unexpected(format!("malformed response: {err}")))
    }
}

#[async_trait::async_trait]
impl TranslationProvider for LibreTranslate {
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
        let response = self
            .client
            .get(format_url(url, "/spec", &[], false))
            .send()
            .await?;
        if !response.status().is_success() {
            return Ok(false);
        }
        match response.json::<SpecResponse>().await {
            Ok(spec) => Ok(spec.info.title.contains("LibreTranslate")),
            Err(_) => Ok(false),
        }
    }

    async fn validate_api_key(&self, key: &str) -> Result<bool, ProviderError> {
        let body = serde_json::json!({ "q": "hello", "api_key": key });
        let response = self
            .client
            .post(self.endpoint("/detect"))
            .json(&body)
            .send()
            .await?;
        match response.status().as_u16() {
            status if (200..300).contains(&status) => Ok(true),
            401 | 403 => Ok(false),
            status => Err(ProviderError::new(
                classify_http_status(status, ProviderErrorKind::Unexpected),
                format!("key validation returned HTTP {status}"),
            )),
        }
    }

    async fn init_trans(&mut self) -> Result<(), ProviderError> {
        let languages: Vec<LtLanguage> = self.get_json(self.endpoint("/languages")).await?;
        for lang in &languages {
            self.ctx.langs.add_lang(&lang.code, Some(&lang.name), true, false);
        }
        debug!(provider = NAME, count = languages.len(), "loaded languages");

        // Instance-specific character cap; older instances don't expose it.
        match self
            .get_json::<FrontendSettings>(self.endpoint("/frontend/settings"))
            .await
        {
            Ok(frontend) => {
                self.ctx.chars_limit = frontend
                    .char_limit
                    .and_then(|limit| usize::try_from(limit).ok());
            }
            Err(err) => {
                warn!(provider = NAME, error = %err, "could not read frontend settings");
            }
        }

        Ok(())
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

        let api_key = self.ctx.settings.api_key();
        let has_key = !api_key.is_empty();
        let mut body = serde_json::json!({
            "q": text,
            "source": source,
            "target": target,
            "format": "text",
        });
        if has_key {
            body["api_key"] = serde_json::Value::String(api_key);
        }

        debug!(provider = NAME, src, dest, chars = text.chars().count(), "translate");
        let response = self
            .client
            .post(self.endpoint("/translate"))
            .json(&body)
            .send()
            .await?;
        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            let detail = response
                .json::<LtError>()
                .await
                .map(|e| e.error)
                .unwrap_or_default();
            return Err(match status {
                401 | 403 if !has_key => ProviderError::api_key_required(),
                401 | 403 => ProviderError::api_key_invalid(),
                429 => ProviderError::service_limit_reached(),
                500..=599 => ProviderError::network(format!("HTTP {status}: {detail}")),
                _ if detail.is_empty() => {
                    ProviderError::translation_failed(format!("HTTP {status}"))
                }
                _ => ProviderError::translation_failed(detail),
            });
        }

        let payload: TranslateResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::translation_failed(format!("malformed response: {err}")))?;

        let detected = (src == AUTO_LANG)
            .then(|| {
                payload
                    .detected_language
                    .map(|detected| self.ctx.langs.normalize(&detected.language))
            })
            .flatten();

        let translation = Translation {
            text: payload.translated_text,
            original: TranslationRequest {
                text: text.to_string(),
                src: src.to_string(),
                dest: dest.to_string(),
            },
            detected,
            mistakes: None,
            pronunciation: Pronunciation::default(),
        };
        self.ctx.record(translation.clone());
        Ok(translation)
    }

    async fn suggest(
        &mut self,
        text: &str,
        src: &str,
        dest: &str,
        suggestion: &str,
    ) -> Result<bool, ProviderError> {
        let api_key = self.ctx.settings.api_key();
        let has_key = !api_key.is_empty();
        let mut body = serde_json::json!({
            "q": text,
            "s": suggestion,
            "source": self.ctx.langs.denormalize(src),
            "target": self.ctx.langs.denormalize(dest),
        });
        if has_key {
            body["api_key"] = serde_json::Value::String(api_key);
        }

        let response = self
            .client
            .post(self.endpoint("/suggest"))
            .json(&body)
            .send()
            .await?;
        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            return Err(match status {
                401 | 403 if !has_key => ProviderError::api_key_required(),
                401 | 403 => ProviderError::api_key_invalid(),
                429 => ProviderError::service_limit_reached(),
                500..=599 => ProviderError::network(format!("HTTP {status}")),
                _ => ProviderError::unexpected(format!("suggestion returned HTTP {status}")),
            });
        }

        let payload: SuggestResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::unexpected(format!("malformed response: {err}")))?;
        Ok(payload.success)
    }
}

#[derive(Deserialize)]
struct SpecResponse {
    info: SpecInfo,
}

#[derive(Deserialize)]
struct SpecInfo {
    title: String,
}

#[derive(Deserialize)]
struct LtLanguage {
    code: String,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontendSettings {
    #[serde(default)]
    char_limit: Option<i64>,
}

#[derive(Deserialize, Default)]
struct LtError {
    #[serde(default)]
    error: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
    #[serde(default)]
    detected_language: Option<DetectedLanguage>,
}

#[derive(Deserialize)]
struct DetectedLanguage {
    language: String,
}

#[derive(Deserialize)]
struct SuggestResponse {
    success: bool,
}
