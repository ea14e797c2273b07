//! Login lifecycle tests against the file-backed session store.
//!
//! Tests cover:
//! - Login persisting the canonical role
//! - Restoring a session in a new process
//! - Rejected logins clearing stored state
//! - Logout discarding navigation

use tiffin_console_core::auth::{AuthResponse, AuthSession, FileStore, KeyValueStore, ROLE_KEY};
use tiffin_console_core::config::NavigationConfig;
use tiffin_console_core::error::ErrorCode;
use tiffin_console_core::rbac::{Role, ScreenName};

fn auth_response(role: &str) -> AuthResponse {
    AuthResponse::from_json(&format!(
        r#"{{"token":"jwt-123","user":{{"id":"42","name":"Ravi","role":"{}"}}}}"#,
        role
    ))
    .unwrap()
}

#[tokio::test]
async fn test_login_then_restore_in_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.toml");

    let mut first = AuthSession::new(FileStore::new(&path), NavigationConfig::default());
    assert_eq!(first.login(&auth_response("admin")).await.unwrap(), Role::Admin);
    assert_eq!(
        first.store().get(ROLE_KEY).await.unwrap(),
        Some("ADMIN".to_string())
    );

    let mut second = AuthSession::new(FileStore::new(&path), NavigationConfig::default());
    assert_eq!(second.restore().await.unwrap(), Some(Role::Admin));
    assert_eq!(second.navigation().unwrap().current(), ScreenName::Dashboard);
}

#[tokio::test]
async fn test_rejected_login_leaves_no_role_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.toml");

    let mut auth = AuthSession::new(FileStore::new(&path), NavigationConfig::default());
    auth.login(&auth_response("KITCHEN_STAFF")).await.unwrap();

    let err = auth.login(&auth_response("superadmin")).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnmappedRole);
    assert!(!auth.is_logged_in());

    let mut restored = AuthSession::new(FileStore::new(&path), NavigationConfig::default());
    assert_eq!(restored.restore().await.unwrap(), None);
    assert!(!restored.is_logged_in());
}

#[tokio::test]
async fn test_logout_discards_navigation() {
    let dir = tempfile::tempdir().unwrap();
    let mut auth = AuthSession::new(
        FileStore::new(dir.path().join("session.toml")),
        NavigationConfig::default(),
    );
    auth.login(&auth_response("kitchen_staff")).await.unwrap();
    auth.navigation_mut().unwrap().navigate(ScreenName::Menus);

    auth.logout().await.unwrap();
    assert!(auth.navigation().is_none());
    assert_eq!(auth.store().get(ROLE_KEY).await.unwrap(), None);
}

#[test]
fn test_login_blocking_runtime() {
    let mut auth = AuthSession::new(
        tiffin_console_core::auth::MemoryStore::new(),
        NavigationConfig { max_depth: 2 },
    );
    let role = tokio_test::block_on(auth.login(&auth_response("driver"))).unwrap();

    assert_eq!(role, Role::Driver);
    // Drivers have no menu items and land on the fallback screen.
    assert_eq!(auth.navigation().unwrap().current(), ScreenName::Dashboard);
}
