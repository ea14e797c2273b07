//! Permission guard for role-restricted screens.
//!
//! The guard wraps whatever the UI layer renders (`V`) and decides between
//! the content, a fixed access-denied view, or a caller-supplied fallback.
//! The caller's role is passed in explicitly as a [`RoleState`]; use
//! [`resolve_role`] to read it once from session storage.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use super::models::{Role, ScreenName};
use super::policy::AccessPolicy;
use crate::auth::store::{load_stored_role, KeyValueStore};

/// The caller's role as seen by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleState {
    /// The stored role has not been read yet.
    Loading,
    /// The stored role was read; `None` means no (or no valid) role.
    Resolved(Option<Role>),
}

impl From<Option<Role>> for RoleState {
    fn from(role: Option<Role>) -> Self {
        Self::Resolved(role)
    }
}

/// Read the stored role once.
///
/// Storage failures are logged and resolve to "no role". There is no
/// timeout: a store that never answers keeps the caller in `Loading`.
pub async fn resolve_role(store: &dyn KeyValueStore) -> RoleState {
    match load_stored_role(store).await {
        Ok(role) => RoleState::Resolved(role),
        Err(e) => {
            warn!(error = %e, "Failed to load stored role; denying access");
            RoleState::Resolved(None)
        }
    }
}

/// Contents of the fixed access-denied view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDenied {
    pub actual_role: Option<Role>,
    pub required: Vec<Role>,
}

impl AccessDenied {
    pub fn role_line(&self) -> String {
        match self.actual_role {
            Some(role) => format!("Your role: {}", role),
            None => "Your role: none".to_string(),
        }
    }

    pub fn required_line(&self) -> String {
        if self.required.is_empty() {
            return "Required: none".to_string();
        }
        let names: Vec<&str> = self.required.iter().map(Role::as_str).collect();
        format!("Required: {}", names.join(", "))
    }
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Access Denied")?;
        writeln!(f, "You do not have permission to view this screen.")?;
        writeln!(f, "{}", self.role_line())?;
        write!(f, "{}", self.required_line())
    }
}

/// What the guard renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<V> {
    /// Role still loading; render nothing.
    Pending,
    /// Access granted; the wrapped content, unchanged.
    Content(V),
    /// Access refused and no fallback was supplied.
    AccessDenied(AccessDenied),
    /// Access refused; the caller's fallback.
    Fallback(V),
}

impl<V> GuardView<V> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Content(_))
    }
}

/// Guard configuration for one wrapped screen.
#[derive(Debug, Clone)]
pub struct PermissionGuard<V> {
    required: Vec<Role>,
    screen: Option<ScreenName>,
    fallback: Option<V>,
    policy: AccessPolicy<'static>,
}

impl<V> PermissionGuard<V> {
    /// Guard requiring membership in `required`.
    pub fn new(required: impl Into<Vec<Role>>) -> Self {
        Self {
            required: required.into(),
            screen: None,
            fallback: None,
            policy: AccessPolicy::standard(),
        }
    }

    /// Decide through the registry entry for `screen` instead of the
    /// required-role list. The denied view then lists the registry's roles.
    pub fn for_screen(mut self, screen: ScreenName) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Render `fallback` instead of the access-denied view.
    pub fn with_fallback(mut self, fallback: V) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn with_policy(mut self, policy: AccessPolicy<'static>) -> Self {
        self.policy = policy;
        self
    }

    /// Roles that pass this guard. For a screen guard these are the roles
    /// the registry lists for the screen.
    pub fn required(&self) -> &[Role] {
        match self.screen {
            Some(screen) => self.policy.required_roles(screen),
            None => &self.required,
        }
    }

    /// Whether `role` passes this guard.
    pub fn is_permitted(&self, role: Option<Role>) -> bool {
        match self.screen {
            Some(screen) => self.policy.can_access_screen(role, screen),
            None => role.is_some_and(|r| self.required.contains(&r)),
        }
    }

    /// Choose what to render for `state`.
    pub fn render(&self, state: RoleState, content: V) -> GuardView<V>
    where
        V: Clone,
    {
        let role = match state {
            RoleState::Loading => return GuardView::Pending,
            RoleState::Resolved(role) => role,
        };

        if self.is_permitted(role) {
            return GuardView::Content(content);
        }

        debug!(
            role = ?role,
            screen = ?self.screen,
            required = ?self.required(),
            "Permission guard denied access"
        );

        match &self.fallback {
            Some(fallback) => GuardView::Fallback(fallback.clone()),
            None => GuardView::AccessDenied(AccessDenied {
                actual_role: role,
                required: self.required().to_vec(),
            }),
        }
    }
}
