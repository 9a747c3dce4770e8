use super::Command;

#[test]
fn it_routes_init() {
    assert_eq!(Command::route("init"), Command::Init);
}
#[test]
fn it_routes_init_with_whitespace_and_case() {
    assert_eq!(Command::route("  InIt "), Command::Init);
}
#[test]
fn it_routes_clear() {
    assert_eq!(Command::route("clear"), Command::Reset);
}
#[test]
fn it_routes_reset_uppercase() {
    assert_eq!(Command::route("RESET"), Command::Reset);
}
#[test]
fn it_routes_help() {
    assert_eq!(Command::route("help"), Command::Help);
}
#[test]
fn it_routes_everything_else_to_chat() {
    assert_eq!(
        Command::route("anything else"),
        Command::Chat("anything else".to_string())
    );
}
#[test]
fn it_keeps_chat_input_as_typed() {
    assert_eq!(
        Command::route("tell me about RESET procedures"),
        Command::Chat("tell me about RESET procedures".to_string())
    );
}
