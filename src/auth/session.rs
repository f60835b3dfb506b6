//! Session-change listener registry.
//!
//! Single-threaded: listeners live on the UI thread and are stored behind
//! `Rc<RefCell<..>>`. Subscriptions hold a weak reference back to the hub so a
//! dropped client never keeps listeners alive.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::types::{AuthChangeEvent, Session};

/// Callback invoked on every session state transition
pub type SessionListener = Box<dyn Fn(AuthChangeEvent, Option<&Session>)>;

type SharedListener = Rc<dyn Fn(AuthChangeEvent, Option<&Session>)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, SharedListener)>,
}

/// Fan-out point for session notifications
#[derive(Clone, Default)]
pub struct SessionHub {
    registry: Rc<RefCell<Registry>>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays active until the returned handle is
    /// unsubscribed or dropped.
    pub fn subscribe(&self, listener: SessionListener) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::from(listener)));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
            active: Cell::new(true),
        }
    }

    /// Notify every listener registered at the time of the call
    pub fn notify(&self, event: AuthChangeEvent, session: Option<&Session>) {
        // Snapshot so listeners may (un)subscribe while being notified
        let listeners: Vec<SharedListener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        tracing::debug!(?event, listeners = listeners.len(), "Session change");
        for listener in listeners {
            listener(event, session);
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle returned by [`SessionHub::subscribe`]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
    active: Cell<bool>,
}

impl Subscription {
    /// Stop receiving notifications. Idempotent.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
