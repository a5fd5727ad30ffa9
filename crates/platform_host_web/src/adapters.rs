use platform_host::{DocumentEffects, NoopDocumentEffects};

use crate::WebDocumentEffects;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from `platform_host_web`.
    Browser,
    /// Placeholder adapters for hosts without a live document (prerender, native harnesses).
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete document backend behind [`DocumentEffects`].
#[derive(Debug, Clone)]
pub enum DocumentEffectsAdapter {
    /// Live `document.documentElement` mutations.
    Browser(WebDocumentEffects),
    /// No-op fallback used when the host has no document.
    Stub(NoopDocumentEffects),
}

impl DocumentEffects for DocumentEffectsAdapter {
    fn set_dark_mode(&self, enabled: bool) -> Result<(), String> {
        match self {
            Self::Browser(effects) => effects.set_dark_mode(enabled),
            Self::Stub(effects) => effects.set_dark_mode(enabled),
        }
    }

    fn set_language_tag(&self, tag: &str) -> Result<(), String> {
        match self {
            Self::Browser(effects) => effects.set_language_tag(tag),
            Self::Stub(effects) => effects.set_language_tag(tag),
        }
    }
}

/// Builds the document adapter for the selected host strategy.
pub fn document_effects(dark_mode_class: &str) -> DocumentEffectsAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            DocumentEffectsAdapter::Browser(WebDocumentEffects::new(dark_mode_class))
        }
        HostStrategy::Stub => DocumentEffectsAdapter::Stub(NoopDocumentEffects),
    }
}
