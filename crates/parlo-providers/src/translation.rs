use serde::{Deserialize, Serialize};

/// What the caller asked to translate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub src: String,
    pub dest: String,
}

/// Corrected source text offered by services with spelling hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub text: Option<String>,
    pub lang: Option<String>,
}

/// Pronunciations for both sides of a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub src: Option<String>,
    pub dest: Option<String>,
}

/// Completed translation, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub original: TranslationRequest,
    /// Source language the service detected, when auto-detection was used.
    pub detected: Option<String>,
    /// Spelling-mistake hint, for providers that offer one.
    pub mistakes: Option<Correction>,
    #[serde(default)]
    pub pronunciation: Pronunciation,
}
