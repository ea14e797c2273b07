//! Access policy over the role registry.
//!
//! The policy answers three questions for a role:
//! "Which menu items do I see?", "May I open screen S?" and
//! "Where do I land after login?". It also maps backend role strings.
//!
//! Every query is a pure function of the registry and its inputs. An absent
//! role (`None`) sees nothing and may open nothing.

use serde::Serialize;
use tracing::debug;

use super::models::{MenuGroup, MenuItem, Role, RoleMapping, ScreenName};
use super::registry::MENU_ITEMS;
use crate::error::{ConsoleError, Result};
use crate::telemetry::metrics as console_metrics;

/// Landing screen for a role with no menu items (or no role at all).
pub const FALLBACK_SCREEN: ScreenName = ScreenName::Dashboard;

/// Per-role landing screens that ignore registry order.
const DEFAULT_SCREEN_OVERRIDES: &[(Role, ScreenName)] = &[(Role::KitchenStaff, ScreenName::Orders)];

// ═══════════════════════════════════════════════════════════════════════════════
// Decision
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    /// The screen may be opened.
    Allow,
    /// The screen may not be opened, with a reason.
    Deny(String),
}

impl PolicyDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Deny(_))
    }
}

/// One sidebar section: an optional group and its visible items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection<'a> {
    pub group: Option<MenuGroup>,
    pub items: Vec<&'a MenuItem>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Access Policy
// ═══════════════════════════════════════════════════════════════════════════════

/// Access queries over an ordered registry of menu items.
#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy<'a> {
    items: &'a [MenuItem],
}

impl AccessPolicy<'static> {
    /// Policy over the built-in registry.
    pub fn standard() -> Self {
        Self { items: MENU_ITEMS }
    }
}

impl Default for AccessPolicy<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> AccessPolicy<'a> {
    /// Policy over a custom registry. Items are taken in the given order.
    pub fn with_items(items: &'a [MenuItem]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &'a [MenuItem] {
        self.items
    }

    /// Items visible to `role`, in registry order.
    pub fn menu_items_for_role(&self, role: Option<Role>) -> Vec<&'a MenuItem> {
        match role {
            Some(role) => self.items.iter().filter(|item| item.permits(role)).collect(),
            None => Vec::new(),
        }
    }

    /// Whether `role` may open `screen`. Unregistered screens are always denied.
    pub fn can_access_screen(&self, role: Option<Role>, screen: ScreenName) -> bool {
        let Some(role) = role else {
            return false;
        };
        self.items
            .iter()
            .any(|item| item.screen == screen && item.permits(role))
    }

    /// Landing screen after login or a role change.
    pub fn default_screen_for_role(&self, role: Option<Role>) -> ScreenName {
        let Some(role) = role else {
            return FALLBACK_SCREEN;
        };

        if let Some((_, screen)) = DEFAULT_SCREEN_OVERRIDES.iter().find(|(r, _)| *r == role) {
            return *screen;
        }

        self.menu_items_for_role(Some(role))
            .first()
            .map(|item| item.screen)
            .unwrap_or(FALLBACK_SCREEN)
    }

    /// Roles registered for `screen`; empty when the screen is unregistered.
    pub fn required_roles(&self, screen: ScreenName) -> &'a [Role] {
        self.items
            .iter()
            .find(|item| item.screen == screen)
            .map(|item| item.roles)
            .unwrap_or(&[])
    }

    /// Visible items split into sidebar sections.
    ///
    /// Ungrouped items come first, then one section per group in the order the
    /// group first appears in the registry. Groups with no visible item are
    /// omitted.
    pub fn grouped_menu(&self, role: Option<Role>) -> Vec<MenuSection<'a>> {
        let visible = self.menu_items_for_role(role);

        let mut sections = vec![MenuSection {
            group: None,
            items: visible.iter().copied().filter(|item| item.group.is_none()).collect(),
        }];

        for item in visible.iter().copied() {
            let Some(group) = item.group else { continue };
            match sections.iter_mut().find(|s| s.group == Some(group)) {
                Some(section) => section.items.push(item),
                None => sections.push(MenuSection {
                    group: Some(group),
                    items: vec![item],
                }),
            }
        }

        sections.retain(|section| !section.items.is_empty());
        sections
    }

    /// Access check with a reason, recorded in logs and metrics.
    pub fn check(&self, role: Option<Role>, screen: ScreenName) -> PolicyDecision {
        let decision = match role {
            None => PolicyDecision::Deny(format!("No role; access to {} denied", screen)),
            Some(role) if self.can_access_screen(Some(role), screen) => PolicyDecision::Allow,
            Some(_) if self.required_roles(screen).is_empty() => {
                PolicyDecision::Deny(format!("Screen {} is not registered", screen))
            }
            Some(role) => PolicyDecision::Deny(format!(
                "Role {} may not open {}",
                role, screen
            )),
        };

        debug!(
            role = ?role,
            screen = %screen,
            allowed = decision.is_allowed(),
            "Screen access checked"
        );
        console_metrics::record_access_check(decision.is_allowed());

        decision
    }

    /// `Ok(())` if allowed, a `Forbidden` error otherwise.
    pub fn enforce(&self, role: Option<Role>, screen: ScreenName) -> Result<()> {
        match self.check(role, screen) {
            PolicyDecision::Allow => Ok(()),
            PolicyDecision::Deny(reason) => Err(ConsoleError::forbidden(reason)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Free functions over the built-in registry
// ═══════════════════════════════════════════════════════════════════════════════

/// Items visible to `role`, in registry order.
pub fn menu_items_for_role(role: Option<Role>) -> Vec<&'static MenuItem> {
    AccessPolicy::standard().menu_items_for_role(role)
}

/// Whether `role` may open `screen`.
pub fn can_access_screen(role: Option<Role>, screen: ScreenName) -> bool {
    AccessPolicy::standard().can_access_screen(role, screen)
}

/// Landing screen for `role`.
pub fn default_screen_for_role(role: Option<Role>) -> ScreenName {
    AccessPolicy::standard().default_screen_for_role(role)
}

/// Map a role string from the backend's auth response.
///
/// Only the exact upper- and lower-case spellings are recognized. Anything
/// else is [`RoleMapping::Unmapped`] and must fail the login.
pub fn map_backend_role(raw: &str) -> RoleMapping {
    match raw {
        "ADMIN" | "admin" => RoleMapping::Mapped(Role::Admin),
        "KITCHEN_STAFF" | "kitchen_staff" => RoleMapping::Mapped(Role::KitchenStaff),
        "DRIVER" | "driver" => RoleMapping::Mapped(Role::Driver),
        "CUSTOMER" | "customer" => RoleMapping::Mapped(Role::Customer),
        _ => RoleMapping::Unmapped(raw.to_string()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_sees_admin_screens() {
        let items = menu_items_for_role(Some(Role::Admin));
        assert!(items.iter().any(|i| i.screen == ScreenName::Zones));
        assert!(items.iter().any(|i| i.screen == ScreenName::Kitchens));
        assert!(items.iter().all(|i| i.permits(Role::Admin)));
    }

    #[test]
    fn test_no_role_sees_nothing() {
        assert!(menu_items_for_role(None).is_empty());
        assert!(!can_access_screen(None, ScreenName::Dashboard));
    }

    #[test]
    fn test_unregistered_screen_denied() {
        for role in Role::all() {
            assert!(!can_access_screen(Some(role), ScreenName::OrderDetail));
            assert!(!can_access_screen(Some(role), ScreenName::Login));
        }
    }

    #[test]
    fn test_kitchen_staff_lands_on_orders() {
        assert_eq!(
            default_screen_for_role(Some(Role::KitchenStaff)),
            ScreenName::Orders
        );
    }

    #[test]
    fn test_roles_without_items_fall_back() {
        assert_eq!(default_screen_for_role(Some(Role::Driver)), FALLBACK_SCREEN);
        assert_eq!(default_screen_for_role(Some(Role::Customer)), FALLBACK_SCREEN);
        assert_eq!(default_screen_for_role(None), ScreenName::Dashboard);
    }

    #[test]
    fn test_check_reasons() {
        let policy = AccessPolicy::standard();
        assert_eq!(
            policy.check(Some(Role::Admin), ScreenName::Zones),
            PolicyDecision::Allow
        );

        match policy.check(Some(Role::KitchenStaff), ScreenName::Zones) {
            PolicyDecision::Deny(reason) => assert!(reason.contains("KITCHEN_STAFF")),
            other => panic!("expected deny, got {:?}", other),
        }

        match policy.check(Some(Role::Admin), ScreenName::Profile) {
            PolicyDecision::Deny(reason) => assert!(reason.contains("not registered")),
            other => panic!("expected deny, got {:?}", other),
        }

        assert!(policy.check(None, ScreenName::Dashboard).is_denied());
    }

    #[test]
    fn test_enforce() {
        let policy = AccessPolicy::standard();
        assert!(policy.enforce(Some(Role::Admin), ScreenName::Users).is_ok());
        let err = policy
            .enforce(Some(Role::Driver), ScreenName::Users)
            .unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::Forbidden);
    }

    #[test]
    fn test_grouped_menu_for_kitchen_staff() {
        let sections = AccessPolicy::standard().grouped_menu(Some(Role::KitchenStaff));
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].group, None);
        assert_eq!(sections[0].items[0].screen, ScreenName::Dashboard);
        assert_eq!(sections[1].group, Some(MenuGroup::Kitchen));
        let screens: Vec<_> = sections[1].items.iter().map(|i| i.screen).collect();
        assert_eq!(
            screens,
            vec![ScreenName::Orders, ScreenName::MyKitchen, ScreenName::Menus]
        );
    }

    #[test]
    fn test_grouped_menu_empty_for_driver() {
        assert!(AccessPolicy::standard().grouped_menu(Some(Role::Driver)).is_empty());
    }

    #[test]
    fn test_required_roles() {
        let policy = AccessPolicy::standard();
        assert_eq!(policy.required_roles(ScreenName::Zones), &[Role::Admin]);
        assert!(policy.required_roles(ScreenName::Profile).is_empty());
    }
}
