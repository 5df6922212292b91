use crate::translation::Translation;

/// Append-only record of completed translations for one provider session.
///
/// Nothing here trims or persists; an application wanting durable history
/// reads it out itself.
#[derive(Debug, Clone, Default)]
pub struct TranslationHistory {
    entries: Vec<Translation>,
}

impl TranslationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, translation: Translation) {
        self.entries.push(translation);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Translation> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Translation> {
        self.entries.iter()
    }
}
