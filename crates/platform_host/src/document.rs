//! Document side-channel contracts and in-memory adapters.
//!
//! The shell owns exactly two process-wide document properties: the dark-mode marker class on
//! the root element and the root `lang` attribute. Runtime code reaches them only through
//! [`DocumentEffects`] so the effect pass can run against a recording fake in native tests.

use std::{cell::RefCell, rc::Rc};

/// Language tag written for the English UI.
pub const LANGUAGE_TAG_EN: &str = "en";
/// Language tag written for the Chinese UI and for any unrecognized language.
pub const LANGUAGE_TAG_ZH_CN: &str = "zh-CN";

/// Host capability for mutating the hosted document root.
///
/// Implementations must be idempotent: applying the same value twice leaves the document in the
/// same observable state as applying it once.
pub trait DocumentEffects {
    /// Adds (`true`) or removes (`false`) the dark-mode marker class on the document root.
    fn set_dark_mode(&self, enabled: bool) -> Result<(), String>;

    /// Writes the document root `lang` attribute.
    fn set_language_tag(&self, tag: &str) -> Result<(), String>;
}

impl<T: DocumentEffects + ?Sized> DocumentEffects for Rc<T> {
    fn set_dark_mode(&self, enabled: bool) -> Result<(), String> {
        (**self).set_dark_mode(enabled)
    }

    fn set_language_tag(&self, tag: &str) -> Result<(), String> {
        (**self).set_language_tag(tag)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op document adapter for unsupported targets and stubbed hosts.
pub struct NoopDocumentEffects;

impl DocumentEffects for NoopDocumentEffects {
    fn set_dark_mode(&self, _enabled: bool) -> Result<(), String> {
        Ok(())
    }

    fn set_language_tag(&self, _tag: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One mutation call observed by [`RecordingDocumentEffects`].
pub enum DocumentMutation {
    /// `set_dark_mode` call.
    DarkMode(bool),
    /// `set_language_tag` call.
    LanguageTag(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Observable document root state held by [`RecordingDocumentEffects`].
pub struct RecordedDocument {
    /// Whether the dark-mode marker class is present.
    pub dark_mode: bool,
    /// Current `lang` attribute, `None` until first written.
    pub language_tag: Option<String>,
    /// Every mutation call in application order.
    pub mutations: Vec<DocumentMutation>,
}

#[derive(Debug, Clone, Default)]
/// In-memory document that records every mutation call.
///
/// Clones share the same underlying document, so a test can hand one clone to the runtime and
/// inspect the other.
pub struct RecordingDocumentEffects {
    inner: Rc<RefCell<RecordedDocument>>,
}

impl RecordingDocumentEffects {
    /// Returns a copy of the current document state and mutation log.
    pub fn snapshot(&self) -> RecordedDocument {
        self.inner.borrow().clone()
    }

    /// Returns whether the dark-mode marker class is present.
    pub fn dark_mode(&self) -> bool {
        self.inner.borrow().dark_mode
    }

    /// Returns the current `lang` attribute.
    pub fn language_tag(&self) -> Option<String> {
        self.inner.borrow().language_tag.clone()
    }

    /// Returns the mutation log.
    pub fn mutations(&self) -> Vec<DocumentMutation> {
        self.inner.borrow().mutations.clone()
    }

    /// Clears the mutation log without touching the document state.
    pub fn clear_mutations(&self) {
        self.inner.borrow_mut().mutations.clear();
    }
}

impl DocumentEffects for RecordingDocumentEffects {
    fn set_dark_mode(&self, enabled: bool) -> Result<(), String> {
        let mut document = self.inner.borrow_mut();
        document.dark_mode = enabled;
        document.mutations.push(DocumentMutation::DarkMode(enabled));
        Ok(())
    }

    fn set_language_tag(&self, tag: &str) -> Result<(), String> {
        let mut document = self.inner.borrow_mut();
        document.language_tag = Some(tag.to_string());
        document
            .mutations
            .push(DocumentMutation::LanguageTag(tag.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_document_tracks_state_and_log() {
        let document = RecordingDocumentEffects::default();
        let effects: &dyn DocumentEffects = &document;

        effects.set_dark_mode(true).expect("dark");
        effects.set_language_tag(LANGUAGE_TAG_EN).expect("lang");
        effects.set_dark_mode(false).expect("light");

        assert!(!document.dark_mode());
        assert_eq!(document.language_tag().as_deref(), Some("en"));
        assert_eq!(
            document.mutations(),
            vec![
                DocumentMutation::DarkMode(true),
                DocumentMutation::LanguageTag("en".to_string()),
                DocumentMutation::DarkMode(false),
            ]
        );
    }

    #[test]
    fn recording_document_clones_share_state() {
        let document = RecordingDocumentEffects::default();
        let handle: Rc<dyn DocumentEffects> = Rc::new(document.clone());

        handle.set_language_tag(LANGUAGE_TAG_ZH_CN).expect("lang");
        assert_eq!(document.language_tag().as_deref(), Some("zh-CN"));

        document.clear_mutations();
        assert!(document.mutations().is_empty());
        assert_eq!(document.language_tag().as_deref(), Some("zh-CN"));
    }

    #[test]
    fn noop_document_accepts_everything() {
        let effects = NoopDocumentEffects;
        effects.set_dark_mode(true).expect("dark");
        effects.set_language_tag("anything").expect("lang");
    }
}
