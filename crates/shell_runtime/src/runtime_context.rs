//! Runtime provider and context wiring for the application shell.
//!
//! This module owns the store bridge (store notifications → reactive state signal), the
//! dispatch callback, and the injected host bundle. UI composition stays in
//! [`crate::components`].

use std::rc::Rc;

use leptos::*;

use crate::{
    config::{boot_state, load_shell_config, ShellConfig},
    host::ShellHostContext,
    model::ShellState,
    reducer::ShellAction,
    store::{MemoryShellStore, ShellStore},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`] values.
pub struct ShellRuntimeContext {
    /// Host service bundle for document side effects.
    pub host: StoredValue<ShellHostContext>,
    /// Layout and marker-class configuration.
    pub config: StoredValue<ShellConfig>,
    /// Reactive mirror of the store state.
    pub state: RwSignal<ShellState>,
    /// Store dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches an action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }

    /// Builds a context around an existing store and mirrors its notifications into `state`.
    ///
    /// The subscription is released when the current reactive owner is disposed.
    pub fn attach(
        store: Rc<dyn ShellStore>,
        host: ShellHostContext,
        config: ShellConfig,
    ) -> Self {
        let state = create_rw_signal(store.snapshot());
        let subscription = store.subscribe(Rc::new(move |next: &ShellState| {
            if state.get_untracked() != *next {
                state.set(*next);
            }
        }));

        let dispatch_store = store.clone();
        let dispatch = Callback::new(move |action: ShellAction| {
            dispatch_store.dispatch(action);
        });

        on_cleanup(move || {
            store.unsubscribe(subscription);
        });

        Self {
            host: store_value(host),
            config: store_value(config),
            state,
            dispatch,
        }
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components.
///
/// Without an injected store the provider creates a [`MemoryShellStore`] seeded from the page's
/// boot overrides, so the first render already reflects the requested theme and language.
pub fn ShellProvider(
    /// Externally owned application store.
    #[prop(optional)]
    store: Option<Rc<dyn ShellStore>>,
    /// Injected host bundle; defaults to the compile-time selected browser adapters.
    #[prop(optional)]
    host: Option<ShellHostContext>,
    /// Shell configuration; defaults to the page's inline config block.
    #[prop(optional)]
    config: Option<ShellConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(load_shell_config);
    let host = host.unwrap_or_else(|| ShellHostContext::for_config(&config));
    let store = store.unwrap_or_else(|| Rc::new(MemoryShellStore::new(boot_state())));
    logging::log!(
        "shell runtime using {} host strategy",
        host.host_strategy_name()
    );

    let runtime = ShellRuntimeContext::attach(store, host, config);
    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
