//! Headless shell controller.
//!
//! [`ShellController`] runs the same render-then-effect cycle as the [`crate::ShellLayout`]
//! component without a reactive runtime: every store notification derives a fresh
//! [`LayoutFrame`] and then runs one [`DocumentSync`] pass.

use std::{cell::RefCell, rc::Rc};

use platform_host::DocumentEffects;

use crate::{
    config::ShellConfig,
    layout::LayoutFrame,
    model::ShellState,
    store::{ShellStore, SubscriptionId},
    sync::{ChannelPhase, DocumentSync, SyncReport},
};

struct ControllerCycle<D> {
    document: D,
    config: ShellConfig,
    sync: DocumentSync,
    frame: LayoutFrame,
    last_report: SyncReport,
    passes: u64,
}

impl<D: DocumentEffects> ControllerCycle<D> {
    fn run(&mut self, state: &ShellState) {
        self.frame = LayoutFrame::derive(state, &self.config);
        self.last_report = self.sync.sync(state, &self.document);
        self.passes += 1;
    }
}

/// Store-driven shell controller for native hosts and tests.
///
/// Dropping the controller unsubscribes from the store. Document mutations already applied are
/// left in place.
pub struct ShellController<S: ShellStore, D: DocumentEffects + 'static> {
    store: S,
    subscription: SubscriptionId,
    cycle: Rc<RefCell<ControllerCycle<D>>>,
}

impl<S: ShellStore, D: DocumentEffects + 'static> ShellController<S, D> {
    /// Performs the initial render and effect pass, then subscribes to `store`.
    pub fn mount(store: S, document: D, config: ShellConfig) -> Self {
        let state = store.snapshot();
        let mut sync = DocumentSync::default();
        let frame = LayoutFrame::derive(&state, &config);
        let last_report = sync.sync(&state, &document);
        let cycle = Rc::new(RefCell::new(ControllerCycle {
            document,
            config,
            sync,
            frame,
            last_report,
            passes: 1,
        }));

        let weak = Rc::downgrade(&cycle);
        let subscription = store.subscribe(Rc::new(move |state: &ShellState| {
            if let Some(cycle) = weak.upgrade() {
                cycle.borrow_mut().run(state);
            }
        }));

        Self {
            store,
            subscription,
            cycle,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Layout derived by the most recent render pass.
    pub fn frame(&self) -> LayoutFrame {
        self.cycle.borrow().frame.clone()
    }

    pub fn last_report(&self) -> SyncReport {
        self.cycle.borrow().last_report.clone()
    }

    /// Number of render-and-effect passes run so far, including the mount pass.
    pub fn passes(&self) -> u64 {
        self.cycle.borrow().passes
    }

    pub fn theme_phase(&self) -> ChannelPhase {
        self.cycle.borrow().sync.theme_phase()
    }

    pub fn language_phase(&self) -> ChannelPhase {
        self.cycle.borrow().sync.language_phase()
    }

    /// Detaches from the store. Equivalent to dropping the controller.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<S: ShellStore, D: DocumentEffects + 'static> Drop for ShellController<S, D> {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{DocumentMutation, RecordingDocumentEffects};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{Theme, UiLanguage},
        reducer::ShellAction,
        store::MemoryShellStore,
        sync::ChannelOutcome,
    };

    fn mount(
        state: ShellState,
    ) -> (
        ShellController<MemoryShellStore, RecordingDocumentEffects>,
        RecordingDocumentEffects,
    ) {
        let document = RecordingDocumentEffects::default();
        let controller = ShellController::mount(
            MemoryShellStore::new(state),
            document.clone(),
            ShellConfig::default(),
        );
        (controller, document)
    }

    #[test]
    fn mount_establishes_initial_world_state() {
        let (controller, document) = mount(ShellState {
            sidebar_open: true,
            theme: Theme::Dark,
            ui_language: UiLanguage::En,
        });

        assert!(document.dark_mode());
        assert_eq!(document.language_tag().as_deref(), Some("en"));
        assert!(controller.frame().is_content_shifted(&ShellConfig::default()));
        assert_eq!(controller.theme_phase(), ChannelPhase::Synced);
        assert_eq!(controller.language_phase(), ChannelPhase::Synced);
        assert_eq!(controller.passes(), 1);
    }

    #[test]
    fn light_zh_mount_writes_both_attributes_once() {
        let (_controller, document) = mount(ShellState::default());
        assert_eq!(
            document.mutations(),
            vec![
                DocumentMutation::DarkMode(false),
                DocumentMutation::LanguageTag("zh-CN".to_string()),
            ]
        );
    }

    #[test]
    fn theme_transition_leaves_language_untouched() {
        let (controller, document) = mount(ShellState {
            theme: Theme::Dark,
            ..ShellState::default()
        });
        document.clear_mutations();

        controller.store().dispatch(ShellAction::SetTheme {
            theme: Theme::Light,
        });

        assert!(!document.dark_mode());
        assert_eq!(document.language_tag().as_deref(), Some("zh-CN"));
        assert_eq!(document.mutations(), vec![DocumentMutation::DarkMode(false)]);
        assert_eq!(controller.last_report().language, ChannelOutcome::Unchanged);
    }

    #[test]
    fn sidebar_toggle_rerenders_without_document_writes() {
        let (controller, document) = mount(ShellState::default());
        document.clear_mutations();

        controller.store().dispatch(ShellAction::ToggleSidebar);

        assert_eq!(controller.passes(), 2);
        assert!(!controller.frame().sidebar_open);
        assert!(!controller.frame().is_content_shifted(&ShellConfig::default()));
        assert!(document.mutations().is_empty());
    }

    #[test]
    fn rapid_round_trip_applies_each_observed_change_in_order() {
        let (controller, document) = mount(ShellState::default());
        document.clear_mutations();

        let store = controller.store();
        store.dispatch(ShellAction::ToggleUiLanguage);
        store.dispatch(ShellAction::ToggleUiLanguage);
        store.dispatch(ShellAction::SetUiLanguage {
            language: UiLanguage::Zh,
        });

        assert_eq!(
            document.mutations(),
            vec![
                DocumentMutation::LanguageTag("en".to_string()),
                DocumentMutation::LanguageTag("zh-CN".to_string()),
            ]
        );
    }

    #[test]
    fn unmount_unsubscribes_and_keeps_document() {
        let store = MemoryShellStore::new(ShellState {
            theme: Theme::Dark,
            ..ShellState::default()
        });
        let document = RecordingDocumentEffects::default();
        let controller =
            ShellController::mount(store.clone(), document.clone(), ShellConfig::default());
        assert_eq!(store.listener_count(), 1);

        controller.unmount();
        assert_eq!(store.listener_count(), 0);
        assert!(document.dark_mode());

        store.dispatch(ShellAction::ToggleTheme);
        assert!(document.dark_mode());
    }
}
