use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Canonical message shape expected by the model API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Message {
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// One entry as it may appear in a stored session history.
///
/// Older sessions carried `{role, text}` messages; current ones carry the
/// canonical `{role, parts}` shape. Anything else is preserved on disk but
/// dropped at the normalization boundary. Variant order matters: an entry
/// with `parts` must match `Canonical` before `Legacy` is tried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Canonical(Message),
    Legacy { role: Role, text: String },
    Unknown(serde_json::Value),
}

impl From<Message> for StoredEntry {
    fn from(message: Message) -> Self {
        StoredEntry::Canonical(message)
    }
}
