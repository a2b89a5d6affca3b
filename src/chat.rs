//! The chat-turn pipeline behind `POST /chat`.

use crate::error::{MedimateError, Result};
use crate::gateway::ChatGateway;
use crate::history;
use crate::models::{Message, Role, StoredEntry};
use crate::reports::ReportStore;
use crate::session::{self, SessionStore};
use crate::summary;

/// Run one conversation turn for a session token.
///
/// Loads (or lazily creates) the session, normalizes its stored history,
/// obtains the model's reply, appends exactly one user and one model message,
/// saves the session, and kicks off the best-effort summary. The reply is
/// returned even when the summary step fails.
///
/// Reads and writes the session without locking; concurrent requests on the
/// same token are last-write-wins.
pub async fn run_turn(
    gateway: &dyn ChatGateway,
    sessions: &dyn SessionStore,
    reports: &ReportStore,
    session_id: &str,
    message: &str,
) -> Result<String> {
    if message.trim().is_empty() {
        return Err(MedimateError::ClientInput("No input provided".to_string()));
    }

    let mut session = session::load_or_create(sessions, session_id);
    let mut clean_history = history::normalize(&session.history);

    let bot_reply = gateway.send_turn(&clean_history, message).await?;

    clean_history.push(Message::text(Role::User, message));
    clean_history.push(Message::text(Role::Model, bot_reply.clone()));

    session.history = clean_history.into_iter().map(StoredEntry::from).collect();
    session.last_updated = chrono::Local::now();
    sessions.save(&session)?;

    tracing::debug!(
        "chat turn completed for session {} ({} stored messages)",
        session.session_id,
        session.history.len()
    );

    summary::generate_and_store(gateway, reports, message, &bot_reply).await;

    Ok(bot_reply)
}
