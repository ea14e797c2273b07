//! RBAC data models: Role, backend role mapping, screens, menu groups and menu items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConsoleError;

// ═══════════════════════════════════════════════════════════════════════════════
// Role
// ═══════════════════════════════════════════════════════════════════════════════

/// A console user's role.
///
/// Roles are a closed set. A session's role never changes; a different role
/// means a new login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    KitchenStaff,
    Driver,
    Customer,
}

impl Role {
    /// Canonical string form, as persisted in session storage.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::KitchenStaff => "KITCHEN_STAFF",
            Self::Driver => "DRIVER",
            Self::Customer => "CUSTOMER",
        }
    }

    /// Parse a canonical role string. Case-sensitive.
    pub fn from_canonical(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|role| role.as_str() == s)
    }

    /// All roles, in declaration order.
    pub const fn all() -> [Role; 4] {
        [Self::Admin, Self::KitchenStaff, Self::Driver, Self::Customer]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Backend role mapping
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of mapping a backend role string onto [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleMapping {
    /// The string is in the mapping table.
    Mapped(Role),
    /// The string is not recognized; carries the raw input for diagnostics.
    Unmapped(String),
}

impl RoleMapping {
    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }

    /// The mapped role, or `None` when unmapped.
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Mapped(role) => Some(*role),
            Self::Unmapped(_) => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Screens
// ═══════════════════════════════════════════════════════════════════════════════

/// Identifier of every navigable destination in the console.
///
/// The screen-dispatch layer maps these to views; the core never sees views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenName {
    Dashboard,
    Orders,
    MyKitchen,
    Kitchens,
    Menus,
    Zones,
    DeliveryBatches,
    Drivers,
    DriverApprovals,
    SubscriptionPlans,
    Users,
    CronJobs,
    /// Reached from an order row, never from the menu.
    OrderDetail,
    Profile,
    Login,
}

impl ScreenName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Orders => "Orders",
            Self::MyKitchen => "MyKitchen",
            Self::Kitchens => "Kitchens",
            Self::Menus => "Menus",
            Self::Zones => "Zones",
            Self::DeliveryBatches => "DeliveryBatches",
            Self::Drivers => "Drivers",
            Self::DriverApprovals => "DriverApprovals",
            Self::SubscriptionPlans => "SubscriptionPlans",
            Self::Users => "Users",
            Self::CronJobs => "CronJobs",
            Self::OrderDetail => "OrderDetail",
            Self::Profile => "Profile",
            Self::Login => "Login",
        }
    }

    pub const fn all() -> [ScreenName; 15] {
        [
            Self::Dashboard,
            Self::Orders,
            Self::MyKitchen,
            Self::Kitchens,
            Self::Menus,
            Self::Zones,
            Self::DeliveryBatches,
            Self::Drivers,
            Self::DriverApprovals,
            Self::SubscriptionPlans,
            Self::Users,
            Self::CronJobs,
            Self::OrderDetail,
            Self::Profile,
            Self::Login,
        ]
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenName {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| ConsoleError::unknown_screen(s))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Menu
// ═══════════════════════════════════════════════════════════════════════════════

/// Sidebar section. Display only; has no effect on access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuGroup {
    Kitchen,
    Delivery,
    Drivers,
    System,
}

impl MenuGroup {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Kitchen => "Kitchen",
            Self::Delivery => "Delivery",
            Self::Drivers => "Drivers",
            Self::System => "System",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Kitchen => "silverware-fork-knife",
            Self::Delivery => "truck-delivery",
            Self::Drivers => "steering",
            Self::System => "cog",
        }
    }
}

/// A sidebar entry and the roles allowed to open its screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Unique, stable identifier.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Icon identifier understood by the UI layer.
    pub icon: &'static str,
    /// Screen opened by this entry.
    pub screen: ScreenName,
    /// Roles permitted to see the entry and open the screen.
    pub roles: &'static [Role],
    /// Sidebar section, if any.
    pub group: Option<MenuGroup>,
}

impl MenuItem {
    /// Whether `role` is listed for this item. Plain membership, no hierarchy.
    pub fn permits(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_canonical_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::from_canonical(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_canonical("admin"), None);
        assert_eq!(Role::from_canonical(""), None);
    }

    #[test]
    fn test_role_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Role::KitchenStaff).unwrap();
        assert_eq!(json, "\"KITCHEN_STAFF\"");
        let role: Role = serde_json::from_str("\"DRIVER\"").unwrap();
        assert_eq!(role, Role::Driver);
    }

    #[test]
    fn test_screen_parse() {
        assert_eq!("Zones".parse::<ScreenName>().unwrap(), ScreenName::Zones);
        assert!("zones".parse::<ScreenName>().is_err());
        assert!("Nowhere".parse::<ScreenName>().is_err());
    }

    #[test]
    fn test_role_mapping_accessors() {
        assert_eq!(RoleMapping::Mapped(Role::Admin).role(), Some(Role::Admin));
        let unmapped = RoleMapping::Unmapped("root".to_string());
        assert!(!unmapped.is_mapped());
        assert_eq!(unmapped.role(), None);
    }
}
