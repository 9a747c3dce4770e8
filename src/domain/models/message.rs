#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// The canonical backend-facing message. Ids are unique within a session,
/// and insertion order is the conversation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(id: u64, role: Role, content: &str) -> ChatMessage {
        return ChatMessage {
            id,
            role,
            content: content.to_string(),
        };
    }
}
