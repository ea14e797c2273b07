//! Screen navigation for an authenticated session.
//!
//! - **State**: an immutable history stack; transitions return a new state
//! - **Session**: owns the current state for one login, notifies observers
//!   and answers the hardware back button

pub mod session;
pub mod state;

pub use session::{BackAction, NavigationSession, SubscriptionId};
pub use state::NavigationState;
