mod filesystem;
mod storage;

pub use filesystem::FilesystemSessionStore;
pub use storage::SessionStore;

use crate::models::Session;
use uuid::Uuid;

/// Mint an opaque session token for a new client.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Load the session for a token, creating an empty one lazily.
pub fn load_or_create(store: &dyn SessionStore, session_id: &str) -> Session {
    store
        .load(session_id)
        .unwrap_or_else(|| Session::new(session_id))
}
