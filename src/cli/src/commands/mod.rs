//! Subcommand implementations and the state they share.

pub mod access;
pub mod menu;
pub mod nav;
pub mod roles;
pub mod session;

use anyhow::Result;
use std::path::PathBuf;

use crate::output::OutputFormat;
use tiffin_console_core::auth::{load_stored_role, AuthSession, FileStore};
use tiffin_console_core::config::ConsoleConfig;
use tiffin_console_core::rbac::{map_backend_role, Role, RoleMapping};

/// Resolved global options.
pub struct Context {
    pub format: OutputFormat,
    pub config: ConsoleConfig,
    pub session_file: PathBuf,
}

impl Context {
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.session_file)
    }

    pub fn auth(&self) -> AuthSession<FileStore> {
        AuthSession::new(self.store(), self.config.navigation.clone())
    }

    /// `--role` if given, otherwise the logged-in role.
    pub async fn role_or_stored(&self, explicit: Option<Role>) -> Result<Option<Role>> {
        match explicit {
            Some(role) => Ok(Some(role)),
            None => Ok(load_stored_role(&self.store()).await?),
        }
    }
}

/// clap value parser accepting the backend spellings of a role.
pub fn parse_role(raw: &str) -> std::result::Result<Role, String> {
    match map_backend_role(raw) {
        RoleMapping::Mapped(role) => Ok(role),
        RoleMapping::Unmapped(raw) => Err(format!(
            "unknown role {:?} (expected ADMIN, KITCHEN_STAFF, DRIVER or CUSTOMER)",
            raw
        )),
    }
}

pub fn role_label(role: Option<Role>) -> String {
    role.map(|r| r.to_string()).unwrap_or_else(|| "none".to_string())
}
