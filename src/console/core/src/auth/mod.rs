//! Session storage and the login lifecycle.

pub mod session;
pub mod store;

pub use session::{AuthResponse, AuthSession, AuthUser};
pub use store::{load_stored_role, FileStore, KeyValueStore, MemoryStore, ROLE_KEY, TOKEN_KEY};
