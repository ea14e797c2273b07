//! Navigation owner for one authenticated session.
//!
//! The session holds the current [`NavigationState`] and the role it was
//! seeded from. Rendering layers register observers with
//! [`NavigationSession::subscribe`]; observers run after every transition
//! that changes the stack, never for no-ops.

use std::fmt;
use tracing::{debug, info};

use super::state::NavigationState;
use crate::config::NavigationConfig;
use crate::rbac::{AccessPolicy, Role, ScreenName};
use crate::telemetry::metrics as console_metrics;

/// Handle returned by [`NavigationSession::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What the platform should do with a hardware back press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// The session popped a screen; the press is consumed.
    Handled,
    /// Nothing to pop; fall through to the platform default (e.g. app exit).
    Unhandled,
}

type Listener = Box<dyn Fn(&NavigationState) + Send + Sync>;

/// Navigation stack owned by one UI context.
pub struct NavigationSession {
    policy: AccessPolicy<'static>,
    role: Option<Role>,
    state: NavigationState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for NavigationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationSession")
            .field("role", &self.role)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl NavigationSession {
    /// Start a session on the role's default screen.
    pub fn new(role: Option<Role>, config: &NavigationConfig) -> Self {
        Self::with_policy(AccessPolicy::standard(), role, config.max_depth)
    }

    /// Start a session over a custom policy.
    pub fn with_policy(policy: AccessPolicy<'static>, role: Option<Role>, max_depth: usize) -> Self {
        let initial = policy.default_screen_for_role(role);
        debug!(role = ?role, screen = %initial, "Navigation session started");
        Self {
            policy,
            role,
            state: NavigationState::new(initial, max_depth),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current(&self) -> ScreenName {
        self.state.current()
    }

    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    /// Open `screen`. Opening the current screen does nothing.
    pub fn navigate(&mut self, screen: ScreenName) {
        let next = self.state.navigate(screen);
        self.apply(next, "navigate");
    }

    /// Pop one screen. Returns `false` (and changes nothing) at the root.
    pub fn go_back(&mut self) -> bool {
        match self.state.go_back() {
            Some(next) => {
                self.apply(next, "back");
                true
            }
            None => false,
        }
    }

    /// Hardware back button entry point.
    pub fn handle_back_button(&mut self) -> BackAction {
        if self.go_back() {
            BackAction::Handled
        } else {
            BackAction::Unhandled
        }
    }

    /// The authenticated role changed: restart on its default screen.
    pub fn set_role(&mut self, role: Option<Role>) {
        let screen = self.policy.default_screen_for_role(role);
        info!(from = ?self.role, to = ?role, screen = %screen, "Role changed; navigation reset");
        self.role = role;
        let next = self.state.reset(screen);
        self.apply(next, "reset");
    }

    /// Register an observer of state changes.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&NavigationState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn apply(&mut self, next: NavigationState, kind: &'static str) {
        if next == self.state {
            return;
        }

        self.state = next;
        console_metrics::record_navigation(kind);
        debug!(
            kind = kind,
            current = %self.state.current(),
            depth = self.state.depth(),
            "Navigation transition"
        );

        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn session(role: Role) -> NavigationSession {
        NavigationSession::new(Some(role), &NavigationConfig::default())
    }

    #[test]
    fn test_starts_on_default_screen() {
        assert_eq!(session(Role::Admin).current(), ScreenName::Dashboard);
        assert_eq!(session(Role::KitchenStaff).current(), ScreenName::Orders);
    }

    #[test]
    fn test_back_button() {
        let mut nav = session(Role::Admin);
        assert_eq!(nav.handle_back_button(), BackAction::Unhandled);
        nav.navigate(ScreenName::Users);
        assert_eq!(nav.handle_back_button(), BackAction::Handled);
        assert_eq!(nav.current(), ScreenName::Dashboard);
    }

    #[test]
    fn test_observers_skip_noops() {
        let mut nav = session(Role::Admin);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        nav.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        nav.navigate(ScreenName::Zones);
        nav.navigate(ScreenName::Zones);
        nav.go_back();
        nav.go_back();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let mut nav = session(Role::Admin);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let id = nav.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert!(nav.unsubscribe(id));
        assert!(!nav.unsubscribe(id));
        nav.navigate(ScreenName::Zones);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_role_resets_stack() {
        let mut nav = session(Role::Admin);
        nav.navigate(ScreenName::Zones);
        nav.navigate(ScreenName::Users);

        nav.set_role(Some(Role::KitchenStaff));
        assert_eq!(nav.role(), Some(Role::KitchenStaff));
        assert_eq!(nav.state().stack(), &[ScreenName::Orders]);
    }
}
