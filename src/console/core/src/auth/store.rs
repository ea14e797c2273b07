//! Durable key-value storage for the signed-in session.
//!
//! The console keeps exactly one value of interest here, the canonical role
//! string under [`ROLE_KEY`]. Two backends are provided: an in-memory map for
//! tests and embedding, and a TOML file for the CLI.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;
use crate::rbac::Role;

/// Key under which the authenticated role is stored.
pub const ROLE_KEY: &str = "user_role";

/// Key under which the backend session token is stored.
pub const TOKEN_KEY: &str = "auth_token";

/// Asynchronous string key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Read the stored role.
///
/// A missing value is `Ok(None)`. A value that is not a canonical role name
/// is also `Ok(None)`: unrecognized roles grant nothing.
pub async fn load_stored_role(store: &dyn KeyValueStore) -> Result<Option<Role>> {
    let Some(raw) = store.get(ROLE_KEY).await? else {
        return Ok(None);
    };

    let role = Role::from_canonical(&raw);
    if role.is_none() {
        warn!(stored = %raw, "Stored role is not a canonical role; treating as no role");
    }
    Ok(role)
}

// ═══════════════════════════════════════════════════════════════════════════════
// In-memory backend
// ═══════════════════════════════════════════════════════════════════════════════

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a role.
    pub fn with_role(role: Role) -> Self {
        let store = Self::new();
        store
            .values
            .write()
            .insert(ROLE_KEY.to_string(), role.as_str().to_string());
        store
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values.write().remove(key);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// File backend
// ═══════════════════════════════════════════════════════════════════════════════

/// Store persisted as a flat TOML table.
///
/// Every write rewrites the whole file; the table holds a handful of keys.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.tiffin-console/session.toml`, or `None` without a home directory.
    pub fn default_path(home: Option<&Path>) -> Option<PathBuf> {
        home.map(|h| h.join(".tiffin-console").join("session.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_table(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_table(&self, table: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string(table)?;
        tokio::fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), keys = table.len(), "Session file written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table().await?;
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut table = self.read_table().await?;
        if table.remove(key).is_some() {
            self.write_table(&table).await?;
        }
        Ok(())
    }
}
