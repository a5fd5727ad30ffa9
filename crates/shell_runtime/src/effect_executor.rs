//! Reactive installation of the document effect pass.

use std::{cell::RefCell, rc::Rc};

use leptos::*;

use crate::{
    runtime_context::ShellRuntimeContext,
    sync::{ChannelOutcome, DocumentSync},
};

/// Installs one effect per document channel.
///
/// Call this after the chrome view has been built so the first pass runs against committed
/// layout. Each effect reads a memo of its own field, so a theme change never re-runs the
/// language effect and vice versa; the [`DocumentSync`] channels additionally drop repeats.
///
/// A channel whose last write failed also subscribes to the whole state for that run, so the
/// next state change of any field retries the write.
pub fn install(runtime: ShellRuntimeContext) {
    let sync = Rc::new(RefCell::new(DocumentSync::default()));

    let theme = create_memo(move |_| runtime.state.with(|state| state.theme));
    let language = create_memo(move |_| runtime.state.with(|state| state.ui_language));

    let theme_sync = sync.clone();
    create_effect(move |_| {
        let theme = theme.get();
        let document = runtime.host.with_value(|host| host.document());
        let outcome = theme_sync.borrow_mut().sync_theme(theme, &*document);
        retry_on_next_change(runtime, &outcome);
    });

    create_effect(move |_| {
        let language = language.get();
        let document = runtime.host.with_value(|host| host.document());
        let outcome = sync.borrow_mut().sync_language(language, &*document);
        retry_on_next_change(runtime, &outcome);
    });
}

fn retry_on_next_change(runtime: ShellRuntimeContext, outcome: &ChannelOutcome) {
    if matches!(outcome, ChannelOutcome::Failed(_)) {
        runtime.state.with(|_| ());
    }
}
