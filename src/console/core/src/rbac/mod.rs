//! Role-based access control for console screens.
//!
//! This module provides:
//! - **Models**: Role, ScreenName, MenuGroup and MenuItem
//! - **Registry**: the static table of screens and the roles allowed on each
//! - **Policy**: menu visibility, screen access, landing screens, backend role mapping
//! - **Guard**: the render-time permission check for restricted screens
//!
//! # Usage
//!
//! ```rust
//! use tiffin_console_core::rbac::{
//!     can_access_screen, default_screen_for_role, map_backend_role, Role, ScreenName,
//! };
//!
//! let role = map_backend_role("kitchen_staff").role();
//! assert_eq!(role, Some(Role::KitchenStaff));
//! assert_eq!(default_screen_for_role(role), ScreenName::Orders);
//! assert!(!can_access_screen(role, ScreenName::Zones));
//! ```

pub mod guard;
pub mod models;
pub mod policy;
pub mod registry;

pub use guard::{resolve_role, AccessDenied, GuardView, PermissionGuard, RoleState};
pub use models::{MenuGroup, MenuItem, Role, RoleMapping, ScreenName};
pub use policy::{
    can_access_screen, default_screen_for_role, map_backend_role, menu_items_for_role,
    AccessPolicy, MenuSection, PolicyDecision, FALLBACK_SCREEN,
};
pub use registry::MENU_ITEMS;
