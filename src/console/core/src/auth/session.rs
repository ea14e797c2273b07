//! Login, restore and logout around the backend's auth response.
//!
//! The network call itself belongs to the caller. This module takes the
//! decoded response, maps the role, persists it and owns the navigation
//! session that lives as long as the login.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::store::{load_stored_role, KeyValueStore, ROLE_KEY, TOKEN_KEY};
use crate::config::NavigationConfig;
use crate::error::{ConsoleError, Result};
use crate::navigation::NavigationSession;
use crate::rbac::{map_backend_role, Role, RoleMapping};
use crate::telemetry::metrics as console_metrics;

/// Backend authentication response. Only `user.role` drives access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw role string, in whatever case the backend chose.
    pub role: String,
}

impl AuthResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// The signed-in state of the console.
#[derive(Debug)]
pub struct AuthSession<S> {
    store: S,
    config: NavigationConfig,
    navigation: Option<NavigationSession>,
}

impl<S: KeyValueStore> AuthSession<S> {
    /// A logged-out session over `store`.
    pub fn new(store: S, config: NavigationConfig) -> Self {
        Self {
            store,
            config,
            navigation: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_logged_in(&self) -> bool {
        self.navigation.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.navigation.as_ref().and_then(NavigationSession::role)
    }

    pub fn navigation(&self) -> Option<&NavigationSession> {
        self.navigation.as_ref()
    }

    pub fn navigation_mut(&mut self) -> Option<&mut NavigationSession> {
        self.navigation.as_mut()
    }

    /// Apply a successful backend login.
    ///
    /// An unmapped role fails the login: stored credentials are cleared and
    /// the session ends up logged out. A storage failure while persisting the
    /// new credentials ends the same way, so the store never holds a role the
    /// session did not open.
    pub async fn login(&mut self, response: &AuthResponse) -> Result<Role> {
        let role = match map_backend_role(&response.user.role) {
            RoleMapping::Mapped(role) => role,
            RoleMapping::Unmapped(raw) => {
                console_metrics::record_login("unmapped_role");
                if let Err(e) = self.clear_stored().await {
                    warn!(error = %e, "Failed to clear session after rejected login");
                }
                self.navigation = None;
                return Err(ConsoleError::unmapped_role(&raw));
            }
        };

        if let Err(e) = self.persist(role, response.token.as_deref()).await {
            console_metrics::record_login("storage_error");
            if let Err(clear_err) = self.clear_stored().await {
                warn!(error = %clear_err, "Failed to clear session after storage failure");
            }
            self.navigation = None;
            return Err(e);
        }

        self.open(role);
        console_metrics::record_login("success");
        info!(role = %role, user = ?response.user.id, "User logged in");
        Ok(role)
    }

    /// Reopen a session from a role stored by an earlier login.
    pub async fn restore(&mut self) -> Result<Option<Role>> {
        let role = load_stored_role(&self.store).await?;
        match role {
            Some(role) => {
                self.open(role);
                info!(role = %role, "Session restored");
            }
            None => self.navigation = None,
        }
        Ok(role)
    }

    /// Clear stored credentials and discard navigation.
    pub async fn logout(&mut self) -> Result<()> {
        self.clear_stored().await?;
        if let Some(nav) = self.navigation.take() {
            info!(role = ?nav.role(), "User logged out");
        }
        Ok(())
    }

    fn open(&mut self, role: Role) {
        match self.navigation.as_mut() {
            Some(nav) => nav.set_role(Some(role)),
            None => self.navigation = Some(NavigationSession::new(Some(role), &self.config)),
        }
    }

    async fn persist(&self, role: Role, token: Option<&str>) -> Result<()> {
        self.store.set(ROLE_KEY, role.as_str()).await?;
        match token {
            Some(token) => self.store.set(TOKEN_KEY, token).await,
            None => self.store.remove(TOKEN_KEY).await,
        }
    }

    async fn clear_stored(&self) -> Result<()> {
        self.store.remove(ROLE_KEY).await?;
        self.store.remove(TOKEN_KEY).await
    }
}
