//! Bilingual text selection for UI surfaces.

use crate::model::UiLanguage;

/// Returns `en` for [`UiLanguage::En`] and `zh` otherwise.
pub fn tx<'a>(language: UiLanguage, zh: &'a str, en: &'a str) -> &'a str {
    match language {
        UiLanguage::En => en,
        UiLanguage::Zh => zh,
    }
}

/// Raw-selector form of [`tx`]: only the exact `"en"` selector picks the English text.
pub fn tx_tag<'a>(selector: &str, zh: &'a str, en: &'a str) -> &'a str {
    if selector == "en" {
        en
    } else {
        zh
    }
}

/// A zh/en string pair resolved against the active language at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub zh: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(zh: &'static str, en: &'static str) -> Self {
        Self { zh, en }
    }

    pub fn resolve(self, language: UiLanguage) -> &'static str {
        tx(language, self.zh, self.en)
    }
}
