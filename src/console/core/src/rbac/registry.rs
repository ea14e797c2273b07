//! The role registry: every menu-reachable screen and who may open it.
//!
//! | Screen            | Roles                 | Group    |
//! |-------------------|-----------------------|----------|
//! | Dashboard         | ADMIN, KITCHEN_STAFF  |          |
//! | Orders            | ADMIN, KITCHEN_STAFF  | Kitchen  |
//! | MyKitchen         | KITCHEN_STAFF         | Kitchen  |
//! | Kitchens          | ADMIN                 | Kitchen  |
//! | Menus             | ADMIN, KITCHEN_STAFF  | Kitchen  |
//! | Zones             | ADMIN                 | Delivery |
//! | DeliveryBatches   | ADMIN                 | Delivery |
//! | Drivers           | ADMIN                 | Drivers  |
//! | DriverApprovals   | ADMIN                 | Drivers  |
//! | SubscriptionPlans | ADMIN                 | System   |
//! | Users             | ADMIN                 | System   |
//! | CronJobs          | ADMIN                 | System   |
//!
//! Order matters: it is the sidebar order and it decides default screens.
//! A screen that is not listed here is inaccessible to every role.

use super::models::{MenuGroup, MenuItem, Role, ScreenName};

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const KITCHEN_ONLY: &[Role] = &[Role::KitchenStaff];
const ADMIN_AND_KITCHEN: &[Role] = &[Role::Admin, Role::KitchenStaff];

/// Registered menu items, in sidebar order.
pub static MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        id: "dashboard",
        label: "Dashboard",
        icon: "view-dashboard",
        screen: ScreenName::Dashboard,
        roles: ADMIN_AND_KITCHEN,
        group: None,
    },
    MenuItem {
        id: "orders",
        label: "Orders",
        icon: "clipboard-list",
        screen: ScreenName::Orders,
        roles: ADMIN_AND_KITCHEN,
        group: Some(MenuGroup::Kitchen),
    },
    // Kitchen staff see their own kitchen; admins manage all kitchens instead.
    MenuItem {
        id: "my-kitchen",
        label: "My Kitchen",
        icon: "store",
        screen: ScreenName::MyKitchen,
        roles: KITCHEN_ONLY,
        group: Some(MenuGroup::Kitchen),
    },
    MenuItem {
        id: "kitchens",
        label: "Kitchens",
        icon: "chef-hat",
        screen: ScreenName::Kitchens,
        roles: ADMIN_ONLY,
        group: Some(MenuGroup::Kitchen),
    },
    MenuItem {
        id: "menus",
        label: "Menus",
        icon: "food",
        screen: ScreenName::Menus,
        roles: ADMIN_AND_KITCHEN,
        group: Some(MenuGroup::Kitchen),
    },
    MenuItem {
        id: "zones",
        label: "Zones",
        icon: "map-marker-radius",
        screen: ScreenName::Zones,
        roles: ADMIN_ONLY,
        group: Some(MenuGroup::Delivery),
    },
    MenuItem {
        id: "delivery-batches",
        label: "Delivery Batches",
        icon: "package-variant",
        screen: ScreenName::DeliveryBatches,
        roles: ADMIN_ONLY,
        group: Some(MenuGroup::Delivery),
    },
    MenuItem {
        id: "drivers",
        label: "Drivers",
        icon: "account-tie",
        screen: ScreenName::Drivers,
        roles: ADMIN_ONLY,
        group: Some(MenuGroup::Drivers),
    },
    MenuItem {
        id: "driver-approvals",
        label: "Driver Approvals",
        icon: "account-check",
        screen: ScreenName::DriverApprovals,
        roles: ADMIN_ONLY,
        group: Some(MenuGroup::Drivers),
    },
    MenuItem {
        id: "subscription-plans",
        label: "Subscription Plans",
        icon: "calendar-sync",
        screen: ScreenName::SubscriptionPlans,
        roles: ADMIN_ONLY,
        group: Some(MenuGroup::System),
    },
    MenuItem {
        id: "users",
        label: "Users",
        icon: "account-group",
        screen: ScreenName::Users,
        roles: ADMIN_ONLY,
        group: Some(MenuGroup::System),
    },
    MenuItem {
        id: "cron-jobs",
        label: "Cron Jobs",
        icon: "timer-cog",
        screen: ScreenName::CronJobs,
        roles: ADMIN_ONLY,
        group: Some(MenuGroup::System),
    },
];
