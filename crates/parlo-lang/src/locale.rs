/// Localized language names supplied by the application layer.
pub trait LocaleNames: Send + Sync {
    /// Human-readable name for a canonical language code in the active UI
    /// locale, or `None` if unknown.
    fn localized_name(&self, code: &str) -> Option<String>;
}

/// Stand-in for callers without a localization layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocaleNames;

impl LocaleNames for NoLocaleNames {
    fn localized_name(&self, _code: &str) -> Option<String> {
        None
    }
}
