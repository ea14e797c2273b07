//! # Tiffin Console Core
//!
//! Access control and navigation for the tiffin delivery admin console.
//!
//! ## Architecture
//!
//! - **RBAC**: role registry, access policy and permission guard
//! - **Navigation**: immutable history stack with an observable session owner
//! - **Auth**: stored-role persistence and the login / logout lifecycle
//! - **Telemetry**: structured logging and counters
//! - **Config**: layered configuration from files and `TIFFIN__*` variables

pub mod auth;
pub mod config;
pub mod error;
pub mod navigation;
pub mod rbac;
pub mod telemetry;

pub use error::{ConsoleError, ErrorCode, ErrorSeverity, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::auth::{AuthResponse, AuthSession, FileStore, KeyValueStore, MemoryStore};
    pub use crate::config::{ConsoleConfig, NavigationConfig};
    pub use crate::error::{ConsoleError, ErrorCode, Result};
    pub use crate::navigation::{BackAction, NavigationSession, NavigationState};
    pub use crate::rbac::{
        can_access_screen, default_screen_for_role, map_backend_role, menu_items_for_role,
        AccessDenied, AccessPolicy, GuardView, MenuGroup, MenuItem, PermissionGuard,
        PolicyDecision, Role, RoleMapping, RoleState, ScreenName,
    };
}
