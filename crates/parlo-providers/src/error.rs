use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable taxonomy the caller branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderErrorKind {
    Unexpected,
    Network,
    Empty,
    ApiKeyRequired,
    ApiKeyInvalid,
    InvalidLangCode,
    BatchSizeExceeded,
    CharactersLimitExceeded,
    ServiceLimitReached,
    TranslationFailed,
    TtsFailed,
}

/// Classified provider failure handed back to the caller.
///
/// Every failure a provider hits is folded into exactly one kind before it
/// crosses the call boundary; `message` carries the diagnostic detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind:?}: {message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unexpected, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Network, message)
    }

    pub fn empty() -> Self {
        Self::new(ProviderErrorKind::Empty, "nothing to translate")
    }

    pub fn api_key_required() -> Self {
        Self::new(
            ProviderErrorKind::ApiKeyRequired,
            "the service requires an API key",
        )
    }

    pub fn api_key_invalid() -> Self {
        Self::new(ProviderErrorKind::ApiKeyInvalid, "the API key was rejected")
    }

    pub fn invalid_lang_code(code: &str) -> Self {
        Self::new(
            ProviderErrorKind::InvalidLangCode,
            format!("unsupported language code: {code}"),
        )
    }

    pub fn batch_size_exceeded() -> Self {
        Self::new(
            ProviderErrorKind::BatchSizeExceeded,
            "too many texts in one request",
        )
    }

    pub fn chars_limit_exceeded(length: usize, limit: usize) -> Self {
        Self::new(
            ProviderErrorKind::CharactersLimitExceeded,
            format!("text is {length} characters, the service accepts {limit}"),
        )
    }

    pub fn service_limit_reached() -> Self {
        Self::new(
            ProviderErrorKind::ServiceLimitReached,
            "service usage limit reached",
        )
    }

    pub fn translation_failed(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::TranslationFailed, message)
    }

    pub fn tts_failed(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::TtsFailed, message)
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err.to_string())
    }
}

/// Map an HTTP status to the taxonomy, for responses a provider has no more
/// specific reading of.
pub fn classify_http_status(status: u16, fallback: ProviderErrorKind) -> ProviderErrorKind {
    match status {
        401 | 403 => ProviderErrorKind::ApiKeyInvalid,
        429 => ProviderErrorKind::ServiceLimitReached,
        500..=599 => ProviderErrorKind::Network,
        _ => fallback,
    }
}
