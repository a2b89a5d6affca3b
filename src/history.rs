//! Conversation-history normalization.
//!
//! Session files accumulated under earlier releases may hold `{role, text}`
//! entries alongside the canonical `{role, parts}` shape. Everything downstream
//! of this module only ever sees canonical messages.

use crate::models::{Message, Part, StoredEntry};

/// Convert stored history entries into the canonical message sequence.
///
/// Order-preserving. Canonical entries pass through unchanged, legacy entries
/// become a single-part message with role and text intact, and entries matching
/// neither shape are dropped.
pub fn normalize(entries: &[StoredEntry]) -> Vec<Message> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            StoredEntry::Canonical(message) => Some(message.clone()),
            StoredEntry::Legacy { role, text } => Some(Message {
                role: *role,
                parts: vec![Part { text: text.clone() }],
            }),
            StoredEntry::Unknown(_) => None,
        })
        .collect()
}
