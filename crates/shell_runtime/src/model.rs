use platform_host::{LANGUAGE_TAG_EN, LANGUAGE_TAG_ZH_CN};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Display language of the UI chrome.
///
/// Any selector other than `en` resolves to [`UiLanguage::Zh`]; unknown locales are a fallback,
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLanguage {
    #[default]
    Zh,
    En,
}

impl UiLanguage {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    pub fn from_selector(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("en") {
            Self::En
        } else {
            Self::Zh
        }
    }

    /// Tag written to the document root `lang` attribute.
    pub const fn document_tag(self) -> &'static str {
        match self {
            Self::En => LANGUAGE_TAG_EN,
            Self::Zh => LANGUAGE_TAG_ZH_CN,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }
}

impl<'de> Deserialize<'de> for UiLanguage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_selector(&raw))
    }
}

/// The three pieces of global UI state the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub theme: Theme,
    pub ui_language: UiLanguage,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            theme: Theme::Light,
            ui_language: UiLanguage::Zh,
        }
    }
}

impl ShellState {
    /// Whether the document root should carry the dark-mode marker class.
    pub const fn dark_mode_class_present(&self) -> bool {
        self.theme.is_dark()
    }

    /// Value the document root `lang` attribute should hold.
    pub const fn document_language_tag(&self) -> &'static str {
        self.ui_language.document_tag()
    }
}
