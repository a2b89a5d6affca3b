use std::fs;
use std::path::{Path, PathBuf};

use super::storage::SessionStore;
use crate::error::{MedimateError, Result};
use crate::models::Session;

/// Session store writing one JSON file per session under a fixed directory.
pub struct FilesystemSessionStore {
    dir: PathBuf,
}

impl FilesystemSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn session_path(&self, session_id: &str) -> PathBuf {
        self.dir.join(format!("session-{}.json", session_id))
    }
}

impl SessionStore for FilesystemSessionStore {
    fn load(&self, session_id: &str) -> Option<Session> {
        // Tokens come from signed cookies, but stay defensive about the
        // filesystem: only plain single-component ids reach a path.
        if !is_plain_token(session_id) {
            return None;
        }

        let content = fs::read_to_string(self.session_path(session_id)).ok()?;
        // An unreadable session file is treated as absent; the caller starts
        // a fresh history rather than failing the request.
        serde_json::from_str(&content).ok()
    }

    fn save(&self, session: &Session) -> Result<()> {
        if !is_plain_token(&session.session_id) {
            return Err(MedimateError::SessionError(format!(
                "invalid session id: {}",
                session.session_id
            )));
        }

        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(session)?;
        fs::write(self.session_path(&session.session_id), content)?;
        Ok(())
    }
}

fn is_plain_token(id: &str) -> bool {
    !id.is_empty()
        && Path::new(id).components().count() == 1
        && !id.contains(['/', '\\'])
        && id != "."
        && id != ".."
}
