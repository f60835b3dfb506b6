//! Sign-in gate for the hero's quick actions.
//!
//! Holds the cached session-active flag, whether the sign-in dialog is open,
//! and the redirect deferred until sign-in completes. Navigation side effects
//! go through [`Navigator`] so the rules can be exercised without a browser.

/// What a quick action does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionTarget {
    /// Full-page navigation, only for signed-in visitors
    Gated { url: &'static str },
    /// Smooth in-page scroll, always allowed
    Scroll { anchor: &'static str },
}

/// Result of a click, to be carried out by a [`Navigator`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Navigate(String),
    ScrollTo(String),
    OpenDialog,
}

pub trait Navigator {
    /// Full browser navigation (no in-app routing)
    fn navigate(&self, url: &str);

    /// Smooth-scroll the element with this id into view
    fn scroll_to(&self, anchor: &str);

    fn apply(&self, decision: &GateDecision) {
        match decision {
            GateDecision::Navigate(url) => self.navigate(url),
            GateDecision::ScrollTo(anchor) => self.scroll_to(anchor),
            GateDecision::OpenDialog => {}
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionGate {
    session_active: bool,
    dialog_open: bool,
    pending_redirect: Option<String>,
}

impl ActionGate {
    pub fn is_session_active(&self) -> bool {
        self.session_active
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn pending_redirect(&self) -> Option<&str> {
        self.pending_redirect.as_deref()
    }

    /// Overwrite the cached flag (initial lookup and every notification)
    pub fn session_changed(&mut self, active: bool) {
        self.session_active = active;
    }

    pub fn click(&mut self, target: ActionTarget) -> GateDecision {
        match target {
            ActionTarget::Scroll { anchor } => GateDecision::ScrollTo(anchor.to_string()),
            ActionTarget::Gated { url } if self.session_active => {
                GateDecision::Navigate(url.to_string())
            }
            ActionTarget::Gated { url } => {
                tracing::debug!(url, "Gated action needs sign-in");
                self.dialog_open = true;
                self.pending_redirect = Some(url.to_string());
                GateDecision::OpenDialog
            }
        }
    }

    pub fn dialog_closed(&mut self) {
        self.dialog_open = false;
    }

    /// Close the dialog and hand back the deferred redirect, at most once
    pub fn auth_succeeded(&mut self) -> Option<String> {
        self.dialog_open = false;
        self.pending_redirect.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
        scrolls: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.visits.borrow_mut().push(url.to_string());
        }

        fn scroll_to(&self, anchor: &str) {
            self.scrolls.borrow_mut().push(anchor.to_string());
        }
    }

    const ORDER: ActionTarget = ActionTarget::Gated { url: "#order" };
    const MENU: ActionTarget = ActionTarget::Scroll { anchor: "menu" };

    #[test]
    fn test_signed_out_click_opens_dialog() {
        let nav = RecordingNavigator::default();
        let mut gate = ActionGate::default();

        let decision = gate.click(ORDER);
        nav.apply(&decision);

        assert_eq!(decision, GateDecision::OpenDialog);
        assert!(gate.is_dialog_open());
        assert_eq!(gate.pending_redirect(), Some("#order"));
        assert!(nav.visits.borrow().is_empty());
    }

    #[test]
    fn test_signed_in_click_navigates() {
        let nav = RecordingNavigator::default();
        let mut gate = ActionGate::default();
        gate.session_changed(true);

        let decision = gate.click(ORDER);
        nav.apply(&decision);

        assert!(!gate.is_dialog_open());
        assert_eq!(*nav.visits.borrow(), vec!["#order".to_string()]);
    }

    #[test]
    fn test_scroll_ignores_session() {
        let nav = RecordingNavigator::default();
        let mut gate = ActionGate::default();

        nav.apply(&gate.click(MENU));
        gate.session_changed(true);
        nav.apply(&gate.click(MENU));

        assert_eq!(nav.scrolls.borrow().len(), 2);
        assert!(!gate.is_dialog_open());
        assert!(nav.visits.borrow().is_empty());
    }

    #[test]
    fn test_success_redirects_exactly_once() {
        let nav = RecordingNavigator::default();
        let mut gate = ActionGate::default();
        gate.click(ActionTarget::Gated { url: "#book" });

        for _ in 0..2 {
            if let Some(url) = gate.auth_succeeded() {
                nav.navigate(&url);
            }
        }

        assert!(!gate.is_dialog_open());
        assert_eq!(*nav.visits.borrow(), vec!["#book".to_string()]);
        assert_eq!(gate.pending_redirect(), None);
    }

    #[test]
    fn test_latest_gated_click_wins() {
        let mut gate = ActionGate::default();
        gate.click(ORDER);
        gate.dialog_closed();
        gate.click(ActionTarget::Gated { url: "#reviews" });

        assert_eq!(gate.auth_succeeded(), Some("#reviews".to_string()));
    }

    #[test]
    fn test_session_notifications_overwrite_flag() {
        let mut gate = ActionGate::default();
        gate.session_changed(true);
        gate.session_changed(false);
        assert!(!gate.is_session_active());
        assert_eq!(gate.click(ORDER), GateDecision::OpenDialog);
    }
}
