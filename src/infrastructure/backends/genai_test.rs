use mockito::Matcher;

use super::GenAi;
use crate::domain::models::BackendError;
use crate::domain::models::ChatBackend;
use crate::domain::models::ChatMessage;
use crate::domain::models::Role;

fn backend_for(server: &mockito::Server) -> GenAi {
    return GenAi::new(&server.url(), "abc");
}

#[tokio::test]
async fn it_initializes_with_bearer_auth() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/genai/init")
        .match_header("Authorization", "Bearer abc")
        .match_body(Matcher::Json(serde_json::json!({
            "openai_api_key": "sk-test"
        })))
        .with_status(200)
        .with_body(r#"{"message": "Initialized"}"#)
        .create();

    let backend = backend_for(&server);
    let res = backend.initialize("sk-test").await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_classifies_initialize_rejections() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/genai/init")
        .with_status(401)
        .create();

    let backend = backend_for(&server);
    let res = backend.initialize("sk-test").await;

    mock.assert();
    match res {
        Err(BackendError::Client(status)) => assert_eq!(status, 401),
        other => panic!("expected a client error, got {:?}", other),
    }
}

#[tokio::test]
async fn it_asks_and_reads_the_response_field() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/genai/ask")
        .match_header("Authorization", "Bearer abc")
        .match_body(Matcher::Json(serde_json::json!({"message": "hello"})))
        .with_status(200)
        .with_body(r#"{"response": "hi"}"#)
        .create();

    let backend = backend_for(&server);
    let res = backend.ask("hello").await.unwrap();

    mock.assert();
    assert_eq!(res, "hi");
}

#[tokio::test]
async fn it_falls_back_through_known_answer_fields() {
    let bodies = [
        r#"{"answer": "hi"}"#,
        r#"{"reply": "hi"}"#,
        r#"{"message": "hi"}"#,
        r#""hi""#,
    ];

    for body in bodies {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/genai/ask")
            .with_status(200)
            .with_body(body)
            .create();

        let backend = backend_for(&server);
        let res = backend.ask("hello").await.unwrap();

        mock.assert();
        assert_eq!(res, "hi", "body was {body}");
    }
}

#[tokio::test]
async fn it_prefers_the_primary_field() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/genai/ask")
        .with_status(200)
        .with_body(r#"{"response": "primary", "answer": "secondary"}"#)
        .create();

    let backend = backend_for(&server);
    let res = backend.ask("hello").await.unwrap();

    mock.assert();
    assert_eq!(res, "primary");
}

#[tokio::test]
async fn it_fails_to_parse_unknown_answer_shapes() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/genai/ask")
        .with_status(200)
        .with_body(r#"{"unexpected": true}"#)
        .create();

    let backend = backend_for(&server);
    let res = backend.ask("hello").await;

    mock.assert();
    assert!(matches!(res, Err(BackendError::Parse)));
}

#[tokio::test]
async fn it_classifies_unauthorized_asks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/genai/ask").with_status(401).create();

    let backend = backend_for(&server);
    let res = backend.ask("hello").await;

    mock.assert();
    assert!(matches!(res, Err(BackendError::Client(401))));
}

#[tokio::test]
async fn it_classifies_server_failures() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/genai/ask").with_status(500).create();

    let backend = backend_for(&server);
    let res = backend.ask("hello").await;

    mock.assert();
    assert!(matches!(res, Err(BackendError::Service(_))));
}

#[tokio::test]
async fn it_resets_the_context() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/genai/reset")
        .match_header("Authorization", "Bearer abc")
        .with_status(200)
        .with_body(r#"{"message": "Reset successful"}"#)
        .create();

    let backend = backend_for(&server);
    let res = backend.reset().await;

    mock.assert();
    assert!(res.is_ok());
}

#[tokio::test]
async fn it_fetches_state_with_history() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/genai/state")
        .match_header("Authorization", "Bearer abc")
        .with_status(200)
        .with_body(
            r#"{"init_required": false, "chat_history": [
                {"id": 1, "role": "user", "content": "hi"},
                {"id": 2, "role": "assistant", "content": "hello"}
            ]}"#,
        )
        .create();

    let backend = backend_for(&server);
    let state = backend.fetch_state().await.unwrap();

    mock.assert();
    assert!(!state.init_required);
    assert_eq!(
        state.chat_history,
        vec![
            ChatMessage::new(1, Role::User, "hi"),
            ChatMessage::new(2, Role::Assistant, "hello"),
        ]
    );
}

#[tokio::test]
async fn it_fetches_state_from_the_legacy_initialized_field() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/genai/state")
        .with_status(200)
        .with_body(r#"{"initialized": "false", "message": "Model needs to be initialized"}"#)
        .create();

    let backend = backend_for(&server);
    let state = backend.fetch_state().await.unwrap();

    mock.assert();
    assert!(state.init_required);
    assert!(state.chat_history.is_empty());
}

#[tokio::test]
async fn it_fails_to_parse_unknown_state_shapes() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/genai/state")
        .with_status(200)
        .with_body(r#"{"message": "OK"}"#)
        .create();

    let backend = backend_for(&server);
    let res = backend.fetch_state().await;

    mock.assert();
    assert!(matches!(res, Err(BackendError::Parse)));
}

#[tokio::test]
async fn it_fetches_history() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/genai/history")
        .match_header("Authorization", "Bearer abc")
        .with_status(200)
        .with_body(r#"{"chat_history": [{"id": 9, "role": "user", "content": "hi"}]}"#)
        .create();

    let backend = backend_for(&server);
    let history = backend.fetch_history().await.unwrap();

    mock.assert();
    assert_eq!(history, vec![ChatMessage::new(9, Role::User, "hi")]);
}
