//! Observable store contract for the shell's global UI state.
//!
//! The shell never reaches for a concrete singleton: the provider and the headless controller
//! both take any [`ShellStore`], and subscribers are notified synchronously after every
//! dispatch that changes the state.

use std::{cell::RefCell, rc::Rc};

use crate::{
    model::ShellState,
    reducer::{reduce_shell, ShellAction},
};

/// Listener invoked with the latest state after each change.
pub type ShellListener = Rc<dyn Fn(&ShellState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub u64);

/// Observable source of [`ShellState`] with synchronous change notification.
pub trait ShellStore {
    /// Returns the current state.
    fn snapshot(&self) -> ShellState;

    /// Registers `listener` for future changes. The listener is not called for the current
    /// state.
    fn subscribe(&self, listener: ShellListener) -> SubscriptionId;

    /// Removes a listener. Returns `false` when `id` was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    /// Applies `action` and notifies subscribers when the state changed.
    fn dispatch(&self, action: ShellAction) -> bool;
}

impl<T: ShellStore + ?Sized> ShellStore for Rc<T> {
    fn snapshot(&self) -> ShellState {
        (**self).snapshot()
    }

    fn subscribe(&self, listener: ShellListener) -> SubscriptionId {
        (**self).subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        (**self).unsubscribe(id)
    }

    fn dispatch(&self, action: ShellAction) -> bool {
        (**self).dispatch(action)
    }
}

#[derive(Default)]
struct MemoryShellStoreInner {
    state: ShellState,
    next_subscription_id: u64,
    listeners: Vec<(SubscriptionId, ShellListener)>,
}

#[derive(Clone, Default)]
/// In-memory [`ShellStore`]. Clones share state and listeners.
pub struct MemoryShellStore {
    inner: Rc<RefCell<MemoryShellStoreInner>>,
}

impl MemoryShellStore {
    pub fn new(state: ShellState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryShellStoreInner {
                state,
                ..MemoryShellStoreInner::default()
            })),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // Listeners may dispatch or unsubscribe, so no borrow is held across calls and each
        // listener sees the state as of its own invocation.
        let listeners: Vec<_> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();

        for (id, listener) in listeners {
            let still_registered = self
                .inner
                .borrow()
                .listeners
                .iter()
                .any(|(registered, _)| *registered == id);
            if still_registered {
                let state = self.snapshot();
                listener(&state);
            }
        }
    }
}

impl ShellStore for MemoryShellStore {
    fn snapshot(&self) -> ShellState {
        self.inner.borrow().state
    }

    fn subscribe(&self, listener: ShellListener) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_subscription_id += 1;
        let id = SubscriptionId(inner.next_subscription_id);
        inner.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(registered, _)| *registered != id);
        inner.listeners.len() != before
    }

    fn dispatch(&self, action: ShellAction) -> bool {
        let changed = reduce_shell(&mut self.inner.borrow_mut().state, action);
        if changed {
            self.notify();
        }
        changed
    }
}
