//! Shell configuration and boot-time state overrides.
//!
//! [`ShellConfig`] carries the layout constants and the document marker class. It is read from
//! an optional inline JSON block (`<script id="shell-config" type="application/json">`).
//! [`BootOverrides`] come from the page query string (`?theme=dark&lang=en&sidebar=closed`) and
//! fix the initial store state before the first render.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ShellState, Theme, UiLanguage};

/// DOM id of the inline JSON configuration block.
pub const SHELL_CONFIG_ELEMENT_ID: &str = "shell-config";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellConfigError {
    #[error("shell config is not valid JSON: {0}")]
    Parse(String),
    #[error("shell config field `{field}` is invalid: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
    #[error("query parameter `{key}` has unsupported value `{value}`")]
    InvalidQueryValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Width of the expanded sidebar in CSS pixels.
    pub sidebar_width_px: i32,
    /// Minimum viewport width at which an open sidebar shifts the content region.
    pub md_breakpoint_px: i32,
    /// Class applied to the content region while the sidebar is open.
    pub content_shift_class: String,
    /// Marker class toggled on the document root for the dark theme.
    pub dark_mode_class: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            sidebar_width_px: 256,
            md_breakpoint_px: 768,
            content_shift_class: "md:ml-64".to_string(),
            dark_mode_class: platform_host_web::DEFAULT_DARK_MODE_CLASS.to_string(),
        }
    }
}

impl ShellConfig {
    /// Parses and validates a JSON configuration. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, unknown fields, non-positive sizes, or empty class
    /// names.
    pub fn from_json(raw: &str) -> Result<Self, ShellConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ShellConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ShellConfigError> {
        if self.sidebar_width_px <= 0 {
            return Err(ShellConfigError::InvalidField {
                field: "sidebar_width_px",
                reason: "must be positive",
            });
        }
        if self.md_breakpoint_px <= 0 {
            return Err(ShellConfigError::InvalidField {
                field: "md_breakpoint_px",
                reason: "must be positive",
            });
        }
        if self.content_shift_class.trim().is_empty() {
            return Err(ShellConfigError::InvalidField {
                field: "content_shift_class",
                reason: "must not be empty",
            });
        }
        if self.dark_mode_class.trim().is_empty()
            || self.dark_mode_class.contains(char::is_whitespace)
        {
            return Err(ShellConfigError::InvalidField {
                field: "dark_mode_class",
                reason: "must be a single class token",
            });
        }
        Ok(())
    }
}

/// Loads the page's inline configuration, falling back to defaults when absent or invalid.
pub fn load_shell_config() -> ShellConfig {
    let Some(raw) = platform_host_web::element_text(SHELL_CONFIG_ELEMENT_ID) else {
        return ShellConfig::default();
    };
    ShellConfig::from_json(&raw).unwrap_or_else(|err| {
        logging::warn!("{err}; using default shell config");
        ShellConfig::default()
    })
}

/// Initial-state overrides requested by the page URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootOverrides {
    pub theme: Option<Theme>,
    pub ui_language: Option<UiLanguage>,
    pub sidebar_open: Option<bool>,
}

impl BootOverrides {
    pub fn apply(self, mut state: ShellState) -> ShellState {
        if let Some(theme) = self.theme {
            state.theme = theme;
        }
        if let Some(language) = self.ui_language {
            state.ui_language = language;
        }
        if let Some(open) = self.sidebar_open {
            state.sidebar_open = open;
        }
        state
    }
}

fn parse_sidebar(raw: &str) -> Option<bool> {
    match raw.trim() {
        "open" | "true" => Some(true),
        "closed" | "false" => Some(false),
        _ => None,
    }
}

/// Parses boot overrides from a query string.
///
/// Unknown keys are ignored. `lang` accepts any value and resolves unknown locales to zh. A
/// `theme` or `sidebar` with an unsupported value is skipped and reported in the returned error
/// list; the remaining parameters still apply.
pub fn parse_boot_overrides(query: &str) -> (BootOverrides, Vec<ShellConfigError>) {
    let mut overrides = BootOverrides::default();
    let mut rejected = Vec::new();

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "theme" => match Theme::parse(value) {
                Some(theme) => overrides.theme = Some(theme),
                None => rejected.push(ShellConfigError::InvalidQueryValue {
                    key: "theme",
                    value: value.to_string(),
                }),
            },
            "lang" => {
                overrides.ui_language = Some(UiLanguage::from_selector(value));
            }
            "sidebar" => match parse_sidebar(value) {
                Some(open) => overrides.sidebar_open = Some(open),
                None => rejected.push(ShellConfigError::InvalidQueryValue {
                    key: "sidebar",
                    value: value.to_string(),
                }),
            },
            _ => {}
        }
    }

    (overrides, rejected)
}

/// Returns the boot overrides for the current page URL.
pub fn current_boot_overrides() -> BootOverrides {
    let Some(search) = platform_host_web::location_search() else {
        return BootOverrides::default();
    };
    let (overrides, rejected) = parse_boot_overrides(&search);
    for err in rejected {
        logging::warn!("ignoring boot override: {err}");
    }
    overrides
}

/// Deterministic initial state: defaults with the page's boot overrides applied.
pub fn boot_state() -> ShellState {
    current_boot_overrides().apply(ShellState::default())
}
