use crate::error::Result;
use crate::models::Session;

/// Trait for session storage backends
pub trait SessionStore: Send + Sync {
    /// Load the session for a client token, if one has been saved
    fn load(&self, session_id: &str) -> Option<Session>;

    /// Save a session
    fn save(&self, session: &Session) -> Result<()>;
}
