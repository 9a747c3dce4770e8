#[cfg(test)]
#[path = "adapter_test.rs"]
mod tests;

use crate::domain::models::ChatMessage;
use crate::domain::models::Role;
use crate::domain::models::UIMessage;
use crate::domain::models::UIMessageType;

/// Pure bidirectional conversion between the domain and presentation
/// message models. Order-preserving, no side effects.
pub struct MessageAdapter {}

impl MessageAdapter {
    pub fn to_ui(messages: &[ChatMessage]) -> Vec<UIMessage> {
        return messages
            .iter()
            .map(|message| {
                let mtype = match message.role {
                    Role::Assistant => UIMessageType::Bot,
                    Role::User => UIMessageType::User,
                };

                return UIMessage {
                    id: message.id,
                    message: message.content.to_string(),
                    mtype,
                    loading: true,
                    terminate_loading: true,
                };
            })
            .collect::<Vec<UIMessage>>();
    }

    pub fn to_domain(messages: &[UIMessage]) -> Vec<ChatMessage> {
        return messages
            .iter()
            .map(|message| {
                let role = match message.mtype {
                    UIMessageType::Bot => Role::Assistant,
                    UIMessageType::User => Role::User,
                };

                return ChatMessage::new(message.id, role, &message.message);
            })
            .collect::<Vec<ChatMessage>>();
    }
}
