pub mod error;
pub mod history;
pub mod libretranslate;
pub mod lingva;
pub mod provider;
pub mod translation;
pub mod url;

pub use self::error::{ProviderError, ProviderErrorKind};
pub use self::history::TranslationHistory;
pub use self::provider::{
    AUTO_LANG, ProviderCapability, ProviderContext, ProviderFeature, ProviderInfo,
    TranslationProvider,
};
pub use self::translation::{Correction, Pronunciation, Translation, TranslationRequest};
pub use self::url::format_url;

use std::sync::Arc;

use parlo_config::SettingsStore;
use parlo_lang::LocaleNames;

/// Machine names of the providers this crate ships, in presentation order.
pub fn known_providers() -> &'static [&'static str] {
    &[libretranslate::NAME, lingva::NAME]
}

/// Construct a provider by machine name.
///
/// Returns `None` for names outside [`known_providers`].
pub fn create_provider(
    name: &str,
    store: Arc<dyn SettingsStore>,
    locale: Arc<dyn LocaleNames>,
) -> Option<Box<dyn TranslationProvider>> {
    match name {
        libretranslate::NAME => Some(Box::new(libretranslate::LibreTranslate::new(store, locale))),
        lingva::NAME => Some(Box::new(lingva::Lingva::new(store, locale))),
        _ => None,
    }
}
