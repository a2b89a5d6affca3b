use serde::{Deserialize, Serialize};

use super::message::StoredEntry;

#[derive(Serialize, Deserialize, Clone)]
pub struct Session {
    pub session_id: String,
    pub last_updated: chrono::DateTime<chrono::Local>,
    pub history: Vec<StoredEntry>,
}

impl Session {
    /// Fresh session with an empty conversation history.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            last_updated: chrono::Local::now(),
            history: vec![],
        }
    }
}
