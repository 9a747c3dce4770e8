use super::ChatMessage;
use super::Role;

#[test]
fn it_deserializes_backend_history_entries() {
    let payload = r#"{"id": 4, "role": "assistant", "content": "Hello there"}"#;
    let message: ChatMessage = serde_json::from_str(payload).unwrap();
    assert_eq!(message, ChatMessage::new(4, Role::Assistant, "Hello there"));
}

#[test]
fn it_serializes_roles_lowercase() {
    let message = ChatMessage::new(1, Role::User, "hi");
    let payload = serde_json::to_string(&message).unwrap();
    assert!(payload.contains(r#""role":"user""#));
}

#[test]
fn it_preserves_content_verbatim() {
    let message = ChatMessage::new(2, Role::Assistant, "  spaced\nand multiline  ");
    assert_eq!(message.content, "  spaced\nand multiline  ");
}
