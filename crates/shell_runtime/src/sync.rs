//! Change-gated document synchronization.
//!
//! Each document property is driven by one [`EffectChannel`]. A channel remembers the value it
//! last applied and only invokes its effect when the observed value differs, so a render pass
//! that leaves `theme` untouched never rewrites the marker class and vice versa.

use leptos::logging;
use platform_host::DocumentEffects;

use crate::model::{ShellState, Theme, UiLanguage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPhase {
    Uninitialized,
    Synced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    /// The observed value matched the last applied value.
    Unchanged,
    /// The effect ran and succeeded.
    Applied,
    /// The effect ran and failed; the channel keeps its previous applied value.
    Failed(String),
}

impl ChannelOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// "On change of X, run E(X)" registration for a single state field.
#[derive(Debug, Clone)]
pub struct EffectChannel<T> {
    name: &'static str,
    applied: Option<T>,
}

impl<T: Copy + PartialEq> EffectChannel<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            applied: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phase(&self) -> ChannelPhase {
        if self.applied.is_some() {
            ChannelPhase::Synced
        } else {
            ChannelPhase::Uninitialized
        }
    }

    pub fn applied(&self) -> Option<T> {
        self.applied
    }

    /// Runs `apply` iff `value` differs from the last successfully applied value.
    pub fn observe(
        &mut self,
        value: T,
        apply: impl FnOnce(T) -> Result<(), String>,
    ) -> ChannelOutcome {
        if self.applied == Some(value) {
            return ChannelOutcome::Unchanged;
        }

        match apply(value) {
            Ok(()) => {
                self.applied = Some(value);
                ChannelOutcome::Applied
            }
            Err(err) => {
                logging::warn!("document {} sync failed: {err}", self.name);
                ChannelOutcome::Failed(err)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub theme: ChannelOutcome,
    pub language: ChannelOutcome,
}

/// Effect-pass state for the two document properties owned by the shell.
#[derive(Debug, Clone)]
pub struct DocumentSync {
    theme: EffectChannel<Theme>,
    language: EffectChannel<UiLanguage>,
}

impl Default for DocumentSync {
    fn default() -> Self {
        Self {
            theme: EffectChannel::new("theme"),
            language: EffectChannel::new("language"),
        }
    }
}

impl DocumentSync {
    pub fn sync_theme(&mut self, theme: Theme, document: &dyn DocumentEffects) -> ChannelOutcome {
        self.theme
            .observe(theme, |theme| document.set_dark_mode(theme.is_dark()))
    }

    pub fn sync_language(
        &mut self,
        language: UiLanguage,
        document: &dyn DocumentEffects,
    ) -> ChannelOutcome {
        self.language.observe(language, |language| {
            document.set_language_tag(language.document_tag())
        })
    }

    /// Runs both channels against `state`. Each channel fires independently.
    pub fn sync(&mut self, state: &ShellState, document: &dyn DocumentEffects) -> SyncReport {
        SyncReport {
            theme: self.sync_theme(state.theme, document),
            language: self.sync_language(state.ui_language, document),
        }
    }

    pub fn theme_phase(&self) -> ChannelPhase {
        self.theme.phase()
    }

    pub fn language_phase(&self) -> ChannelPhase {
        self.language.phase()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use platform_host::{DocumentMutation, RecordingDocumentEffects};
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct FlakyDocument {
        inner: RecordingDocumentEffects,
        fail_next: Cell<bool>,
    }

    impl DocumentEffects for FlakyDocument {
        fn set_dark_mode(&self, enabled: bool) -> Result<(), String> {
            if self.fail_next.replace(false) {
                return Err("root element detached".to_string());
            }
            self.inner.set_dark_mode(enabled)
        }

        fn set_language_tag(&self, tag: &str) -> Result<(), String> {
            self.inner.set_language_tag(tag)
        }
    }

    #[test]
    fn channel_starts_uninitialized_and_fires_on_first_observe() {
        let mut channel = EffectChannel::<Theme>::new("theme");
        assert_eq!(channel.phase(), ChannelPhase::Uninitialized);

        let calls = Cell::new(0);
        let outcome = channel.observe(Theme::Light, |_| {
            calls.set(calls.get() + 1);
            Ok(())
        });

        assert_eq!(outcome, ChannelOutcome::Applied);
        assert_eq!(channel.phase(), ChannelPhase::Synced);
        assert_eq!(channel.applied(), Some(Theme::Light));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn channel_skips_repeated_values() {
        let mut channel = EffectChannel::<UiLanguage>::new("language");
        let calls = Cell::new(0);
        let mut observe = |value| {
            channel.observe(value, |_| {
                calls.set(calls.get() + 1);
                Ok(())
            })
        };

        assert!(observe(UiLanguage::En).applied());
        assert_eq!(observe(UiLanguage::En), ChannelOutcome::Unchanged);
        assert!(observe(UiLanguage::Zh).applied());
        assert_eq!(observe(UiLanguage::Zh), ChannelOutcome::Unchanged);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn first_pass_applies_both_projections() {
        let document = RecordingDocumentEffects::default();
        let mut sync = DocumentSync::default();
        let state = ShellState {
            sidebar_open: true,
            theme: Theme::Dark,
            ui_language: UiLanguage::En,
        };

        let report = sync.sync(&state, &document);

        assert!(report.theme.applied());
        assert!(report.language.applied());
        assert!(document.dark_mode());
        assert_eq!(document.language_tag().as_deref(), Some("en"));
        assert_eq!(sync.theme_phase(), ChannelPhase::Synced);
        assert_eq!(sync.language_phase(), ChannelPhase::Synced);
    }

    #[test]
    fn theme_change_does_not_rewrite_language() {
        let document = RecordingDocumentEffects::default();
        let mut sync = DocumentSync::default();
        let mut state = ShellState {
            theme: Theme::Dark,
            ..ShellState::default()
        };
        sync.sync(&state, &document);
        document.clear_mutations();

        state.theme = Theme::Light;
        let report = sync.sync(&state, &document);

        assert_eq!(report.language, ChannelOutcome::Unchanged);
        assert_eq!(document.mutations(), vec![DocumentMutation::DarkMode(false)]);
        assert!(!document.dark_mode());
        assert_eq!(document.language_tag().as_deref(), Some("zh-CN"));
    }

    #[test]
    fn identical_state_is_a_no_op() {
        let document = RecordingDocumentEffects::default();
        let mut sync = DocumentSync::default();
        let state = ShellState::default();

        sync.sync(&state, &document);
        let before = document.snapshot();
        let report = sync.sync(&state, &document);

        assert_eq!(report.theme, ChannelOutcome::Unchanged);
        assert_eq!(report.language, ChannelOutcome::Unchanged);
        assert_eq!(document.snapshot(), before);
    }

    #[test]
    fn failed_application_is_retried_on_next_pass() {
        let document = FlakyDocument::default();
        let mut sync = DocumentSync::default();
        document.fail_next.set(true);

        let outcome = sync.sync_theme(Theme::Dark, &document);
        assert_eq!(
            outcome,
            ChannelOutcome::Failed("root element detached".to_string())
        );
        assert_eq!(sync.theme_phase(), ChannelPhase::Uninitialized);
        assert!(!document.inner.dark_mode());

        assert!(sync.sync_theme(Theme::Dark, &document).applied());
        assert!(document.inner.dark_mode());
    }
}
