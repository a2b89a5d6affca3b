//! Clinical-note summary generation.
//!
//! After every chat turn a second, historyless model call condenses the
//! exchange into a doctor's-note style report. The whole pipeline is
//! best-effort: a failed model call or a failed disk write is logged and
//! swallowed so the chat reply still reaches the user.

use crate::gateway::ChatGateway;
use crate::reports::ReportStore;

/// Fixed prompt template for the summary call.
pub fn build_prompt(user_message: &str, bot_reply: &str) -> String {
    format!(
        "Summarize the following patient message and the medical assistant's reply. \
         Format the summary like a doctor's note.\n\n\
         User: {}\n\n\
         Assistant: {}\n\n\
         Structure the note under exactly these labeled sections:\n\
         - Symptoms Mentioned\n\
         - Possible Conditions or Risks\n\
         - Recommended Actions\n\n\
         Do not add commentary outside those sections.",
        user_message, bot_reply
    )
}

/// Generate a summary for one exchange and persist it.
///
/// Exactly one save is attempted per successful summary call. Never returns
/// an error to the caller.
pub async fn generate_and_store(
    gateway: &dyn ChatGateway,
    reports: &ReportStore,
    user_message: &str,
    bot_reply: &str,
) {
    let summary = match gateway.summarize(user_message, bot_reply).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!("summary generation failed: {}", e);
            return;
        }
    };

    match reports.save(&summary) {
        Ok(filename) => tracing::info!("summary report saved: {}", filename),
        Err(e) => tracing::warn!("summary report save failed: {}", e),
    }
}
