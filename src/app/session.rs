//! Session-presence tracking for gated components.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::auth_context::use_auth;
use crate::auth::{AuthChangeEvent, AuthClient, Session, Subscription};
use crate::gate::ActionGate;

/// Report whether a session exists now, then on every session change.
///
/// Updates stop when the returned handle is dropped or unsubscribed.
pub fn track_presence(client: &dyn AuthClient, on_change: impl Fn(bool) + 'static) -> Subscription {
    on_change(client.current_session().is_some());
    client.on_session_change(Box::new(
        move |event: AuthChangeEvent, session: Option<&Session>| {
            tracing::debug!(?event, "Session presence changed");
            on_change(session.is_some());
        },
    ))
}

/// Keep `gate`'s session flag in sync with the auth client until the
/// calling component unmounts.
pub fn use_session_presence(gate: Signal<ActionGate>) {
    let auth = use_auth();
    let subscription: Rc<RefCell<Option<Subscription>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let slot = Rc::clone(&subscription);
    use_effect(move || {
        // Re-runs if the client is (re)installed
        let Some(client) = auth.client() else {
            return;
        };

        let listener = track_presence(&*client, move |active| {
            let mut flag = gate;
            flag.write().session_changed(active);
        });
        // Dropping the previous handle unsubscribes it
        *slot.borrow_mut() = Some(listener);
    });

    use_drop(move || {
        if let Some(listener) = subscription.borrow_mut().take() {
            listener.unsubscribe();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthError, CodeOptions, Identifier, OtpPurpose, SessionHub, SessionListener};
    use async_trait::async_trait;
    use std::cell::Cell;

    #[derive(Default)]
    struct StaticClient {
        session: Option<Session>,
        hub: SessionHub,
    }

    #[async_trait(?Send)]
    impl AuthClient for StaticClient {
        async fn request_code(&self, _: &Identifier, _: &CodeOptions) -> Result<(), AuthError> {
            Ok(())
        }

        async fn verify_code(
            &self,
            _: &Identifier,
            _: &str,
            _: OtpPurpose,
        ) -> Result<Session, AuthError> {
            Err(AuthError::NotConfigured)
        }

        fn current_session(&self) -> Option<Session> {
            self.session.clone()
        }

        fn on_session_change(&self, listener: SessionListener) -> Subscription {
            self.hub.subscribe(listener)
        }
    }

    fn session() -> Session {
        serde_json::from_str(r#"{"access_token":"jwt"}"#).unwrap()
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = Rc::clone(&seen);
        (seen, move |active| sink.borrow_mut().push(active))
    }

    #[test]
    fn test_initial_lookup_reports_existing_session() {
        let client = StaticClient {
            session: Some(session()),
            ..StaticClient::default()
        };
        let (seen, on_change) = recorder();

        let _sub = track_presence(&client, on_change);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn test_notifications_overwrite_flag() {
        let client = StaticClient {
            session: Some(session()),
            ..StaticClient::default()
        };
        let (seen, on_change) = recorder();

        let _sub = track_presence(&client, on_change);
        client.hub.notify(AuthChangeEvent::SignedOut, None);
        client
            .hub
            .notify(AuthChangeEvent::SignedIn, Some(&session()));
        assert_eq!(*seen.borrow(), vec![true, false, true]);
    }

    #[test]
    fn test_dropping_handle_stops_updates() {
        let client = StaticClient::default();
        let (seen, on_change) = recorder();

        let sub = track_presence(&client, on_change);
        drop(sub);
        client
            .hub
            .notify(AuthChangeEvent::SignedIn, Some(&session()));
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn test_gate_follows_presence() {
        let client = StaticClient {
            session: Some(session()),
            ..StaticClient::default()
        };
        let gate = Rc::new(RefCell::new(ActionGate::default()));
        let target = Rc::clone(&gate);
        let calls = Rc::new(Cell::new(0));
        let counted = Rc::clone(&calls);

        let _sub = track_presence(&client, move |active| {
            counted.set(counted.get() + 1);
            target.borrow_mut().session_changed(active);
        });
        assert!(gate.borrow().is_session_active());

        client.hub.notify(AuthChangeEvent::SignedOut, None);
        assert!(!gate.borrow().is_session_active());
        assert_eq!(calls.get(), 2);
    }
}
