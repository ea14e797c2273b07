//! Permission guard tests, including role resolution from storage.
//!
//! Tests cover:
//! - Pending, granted, denied and fallback rendering
//! - Screen-based vs membership-based decisions
//! - Storage failures resolving to "no role"
//! - A store that never answers keeps the guard pending

use async_trait::async_trait;
use std::time::Duration;

use tiffin_console_core::auth::{KeyValueStore, MemoryStore, ROLE_KEY};
use tiffin_console_core::error::{ConsoleError, ErrorCode, Result};
use tiffin_console_core::rbac::{
    resolve_role, AccessDenied, GuardView, PermissionGuard, Role, RoleState, ScreenName,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum View {
    Zones,
    Fallback,
}

struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(ConsoleError::new(ErrorCode::StorageError, "storage offline"))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ConsoleError::new(ErrorCode::StorageError, "storage offline"))
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        Err(ConsoleError::new(ErrorCode::StorageError, "storage offline"))
    }
}

struct StalledStore;

#[async_trait]
impl KeyValueStore for StalledStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        std::future::pending().await
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        std::future::pending().await
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        std::future::pending().await
    }
}

fn zones_guard() -> PermissionGuard<View> {
    PermissionGuard::new([Role::Admin]).for_screen(ScreenName::Zones)
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_loading_renders_nothing() {
    assert_eq!(zones_guard().render(RoleState::Loading, View::Zones), GuardView::Pending);
}

#[test]
fn test_admin_sees_zones() {
    let view = zones_guard().render(RoleState::Resolved(Some(Role::Admin)), View::Zones);
    assert_eq!(view, GuardView::Content(View::Zones));
    assert!(view.is_granted());
}

#[test]
fn test_no_role_denied() {
    let view = zones_guard().render(RoleState::Resolved(None), View::Zones);
    assert_eq!(
        view,
        GuardView::AccessDenied(AccessDenied {
            actual_role: None,
            required: vec![Role::Admin],
        })
    );
}

#[test]
fn test_fallback_used_when_supplied() {
    let guard = zones_guard().with_fallback(View::Fallback);
    assert_eq!(
        guard.render(Some(Role::Driver).into(), View::Zones),
        GuardView::Fallback(View::Fallback)
    );
    assert_eq!(
        guard.render(Some(Role::Admin).into(), View::Zones),
        GuardView::Content(View::Zones)
    );
}

#[test]
fn test_membership_guard_without_screen() {
    let guard: PermissionGuard<View> = PermissionGuard::new([Role::Admin, Role::KitchenStaff]);
    assert!(guard.render(Some(Role::KitchenStaff).into(), View::Zones).is_granted());
    assert!(!guard.render(Some(Role::Customer).into(), View::Zones).is_granted());
}

#[test]
fn test_unregistered_screen_guard_denies_everyone() {
    let guard: PermissionGuard<View> =
        PermissionGuard::new([Role::Admin]).for_screen(ScreenName::OrderDetail);
    for role in Role::all() {
        assert!(!guard.is_permitted(Some(role)));
    }
}

// ============================================================================
// Role Resolution
// ============================================================================

#[tokio::test]
async fn test_resolve_role_from_store() {
    let store = MemoryStore::with_role(Role::KitchenStaff);
    assert_eq!(
        resolve_role(&store).await,
        RoleState::Resolved(Some(Role::KitchenStaff))
    );
}

#[tokio::test]
async fn test_resolve_unrecognized_stored_role() {
    let store = MemoryStore::new();
    store.set(ROLE_KEY, "OWNER").await.unwrap();
    assert_eq!(resolve_role(&store).await, RoleState::Resolved(None));
}

#[tokio::test]
async fn test_store_failure_treated_as_no_role() {
    let state = resolve_role(&FailingStore).await;
    assert_eq!(state, RoleState::Resolved(None));

    let view = zones_guard().render(state, View::Zones);
    assert!(matches!(view, GuardView::AccessDenied(_)));
}

#[tokio::test]
async fn test_stalled_store_stays_pending() {
    let outcome = tokio::time::timeout(Duration::from_millis(20), resolve_role(&StalledStore)).await;
    assert!(outcome.is_err());
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_scenario_kitchen_staff_denied_zones() {
    let store = MemoryStore::with_role(Role::KitchenStaff);
    let state = resolve_role(&store).await;

    match zones_guard().render(state, View::Zones) {
        GuardView::AccessDenied(denied) => {
            let text = denied.to_string();
            assert!(text.contains("Access Denied"));
            assert!(text.contains("Your role: KITCHEN_STAFF"));
            assert!(text.contains("Required: ADMIN"));
        }
        other => panic!("expected access denied, got {:?}", other),
    }
}
