use super::MessageAdapter;
use crate::domain::models::ChatMessage;
use crate::domain::models::Role;
use crate::domain::models::UIMessageType;

#[test]
fn it_maps_roles_to_ui_types() {
    let messages = vec![
        ChatMessage::new(1, Role::Assistant, "Hello there"),
        ChatMessage::new(2, Role::User, "hi"),
    ];

    let ui_messages = MessageAdapter::to_ui(&messages);

    assert_eq!(ui_messages.len(), 2);
    assert_eq!(ui_messages[0].id, 1);
    assert_eq!(ui_messages[0].mtype, UIMessageType::Bot);
    assert_eq!(ui_messages[0].message, "Hello there");
    assert_eq!(ui_messages[1].id, 2);
    assert_eq!(ui_messages[1].mtype, UIMessageType::User);
}

#[test]
fn it_marks_ui_messages_final() {
    let messages = vec![ChatMessage::new(1, Role::Assistant, "done")];
    let ui_messages = MessageAdapter::to_ui(&messages);

    assert!(ui_messages[0].loading);
    assert!(ui_messages[0].terminate_loading);
}

#[test]
fn it_round_trips_generated_sequences() {
    let contents = ["", "hi", "two words", "emoji 🚗", "line\nbreak", "  padded  "];

    let mut messages: Vec<ChatMessage> = vec![];
    for n in 0..64_u64 {
        let role = if n % 3 == 0 { Role::User } else { Role::Assistant };
        let content = contents[(n as usize) % contents.len()];
        messages.push(ChatMessage::new(n * 7 + 1, role, content));
    }

    let round_tripped = MessageAdapter::to_domain(&MessageAdapter::to_ui(&messages));
    assert_eq!(round_tripped, messages);
}

#[test]
fn it_preserves_order() {
    let messages = (1..=10_u64)
        .map(|id| {
            return ChatMessage::new(id, Role::User, "m");
        })
        .collect::<Vec<ChatMessage>>();

    let ids = MessageAdapter::to_ui(&messages)
        .iter()
        .map(|message| {
            return message.id;
        })
        .collect::<Vec<u64>>();

    assert_eq!(ids, (1..=10_u64).collect::<Vec<u64>>());
}
